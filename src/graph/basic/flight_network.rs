//! Airports connected by one-way flights.
//!
//! A small domain graph: each [`Airport`] is a node whose outbound flights are
//! its neighbours. Airports are identified by [`AirportId`] handles, so two
//! airports that happen to share a code are still distinct.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::traits::{Labeled, Successors};

/// Handle to an airport in a [`FlightNetwork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportId(usize);

/// An airport and the airports it has direct flights to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    code: String,
    outbound: Vec<AirportId>,
}

impl Airport {
    /// The airport code, e.g. `"SEA"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Airports reachable by a single direct flight.
    pub fn outbound_flights(&self) -> &[AirportId] {
        &self.outbound
    }
}

/// A directed network of airports.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: Vec<Airport>,
    by_code: HashMap<String, AirportId>,
}

impl FlightNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an airport and returns its handle.
    ///
    /// If the code is already present a second, distinct airport is created and
    /// [`find`](Self::find) keeps returning the first one.
    pub fn add_airport(&mut self, code: impl Into<String>) -> AirportId {
        let id = AirportId(self.airports.len());
        let code = code.into();
        self.by_code.entry(code.clone()).or_insert(id);
        self.airports.push(Airport {
            code,
            outbound: Vec::new(),
        });
        id
    }

    /// Adds a direct flight `from -> to`.
    ///
    /// # Panics
    /// Panics if either handle does not belong to this network.
    pub fn add_flight(&mut self, from: AirportId, to: AirportId) {
        let n = self.airports.len();
        assert!(from.0 < n, "from airport {} out of bounds for n={n}", from.0);
        assert!(to.0 < n, "to airport {} out of bounds for n={n}", to.0);
        self.airports[from.0].outbound.push(to);
    }

    /// Adds a direct flight `from -> to`, rejecting unknown handles.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either handle does not belong
    /// to this network; the network is left unchanged.
    pub fn try_add_flight(&mut self, from: AirportId, to: AirportId) -> Result<()> {
        let vertex_count = self.airports.len();
        for id in [from, to] {
            if id.0 >= vertex_count {
                return Err(GraphError::UnknownVertex {
                    id: id.0,
                    vertex_count,
                });
            }
        }
        self.airports[from.0].outbound.push(to);
        Ok(())
    }

    /// Returns the airport behind `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this network.
    pub fn airport(&self, id: AirportId) -> &Airport {
        &self.airports[id.0]
    }

    /// Looks up the first airport registered under `code`.
    pub fn find(&self, code: &str) -> Option<AirportId> {
        self.by_code.get(code).copied()
    }

    /// Number of airports.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }
}

impl Successors for FlightNetwork {
    type Id = AirportId;

    fn successors(&self, id: &AirportId) -> impl Iterator<Item = AirportId> + '_ {
        let flights: &[AirportId] = self
            .airports
            .get(id.0)
            .map_or(&[], Airport::outbound_flights);
        flights.iter().copied()
    }
}

impl Labeled for FlightNetwork {
    type Value = str;

    fn value(&self, id: &AirportId) -> Option<&str> {
        self.airports.get(id.0).map(Airport::code)
    }
}
