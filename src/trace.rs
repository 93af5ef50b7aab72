//! Feature-gated trace events.
//!
//! With the `tracing` feature enabled, `trace_event!` forwards to
//! `tracing::trace!`; without it the macro expands to nothing.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)+) => {
        ::tracing::trace!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

pub(crate) use trace_event;
