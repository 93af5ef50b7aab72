use std::collections::HashSet;

use trailhead::{
    can_reach, longest_value, self_loopers, short_words, unreachable, write_self_loopers,
    write_short_words, AdjacencyMap, FlightNetwork, GraphError, VertexGraph,
};

#[test]
fn three_cycle_longest_and_reachability() {
    let mut g = VertexGraph::new();
    let a = g.add_vertex("cat");
    let b = g.add_vertex("elephant");
    let c = g.add_vertex("ox");
    g.add_edge(a, b);
    g.add_edge(b, c);
    g.add_edge(c, a);

    assert_eq!(longest_value(&g, Some(a)), "elephant");
    assert!(can_reach(&g, Some(a), &c));
    assert!(can_reach(&g, Some(c), &a));
}

#[test]
fn self_loop_printed_once() {
    let mut g = VertexGraph::new();
    let a = g.add_vertex("x");
    g.add_edge(a, a);

    let mut out = Vec::new();
    write_self_loopers(&g, Some(a), &mut out).unwrap();
    assert_eq!(out, b"x\n");
}

#[test]
fn unreachable_between_components() {
    let map: AdjacencyMap<i32> = [(1, vec![2]), (2, vec![]), (3, vec![4]), (4, vec![])]
        .into_iter()
        .collect();
    assert_eq!(unreachable(Some(&map), &1), HashSet::from([3, 4]));
}

#[test]
fn unreachable_from_missing_start_counts_only_map_keys() {
    let map: AdjacencyMap<i32> = [(1, vec![2])].into_iter().collect();
    assert_eq!(unreachable(Some(&map), &5), HashSet::from([1]));
}

#[test]
fn absent_start_is_benign() {
    let g: VertexGraph<&str> = VertexGraph::new();
    let mut out = Vec::new();
    write_short_words(&g, None, 5, &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(longest_value(&g, None), "");
    assert_eq!(self_loopers(&g, None).count(), 0);
}

#[test]
fn repeated_values_are_distinct_nodes() {
    // Two "go" vertices: identity is the handle, so both are walked and both print.
    let mut g = VertexGraph::new();
    let root = g.add_vertex("go");
    let twin = g.add_vertex("go");
    let far = g.add_vertex("stop");
    g.add_edge(root, twin);
    g.add_edge(twin, far);
    g.add_edge(twin, root);

    let words: Vec<&&str> = short_words(&g, Some(root), 3).collect();
    assert_eq!(words, [&"go", &"go"]);
    assert!(can_reach(&g, Some(root), &far));
}

#[test]
fn short_words_printed_in_preorder() {
    // a -> b, a -> c, b -> d, d -> a
    let mut g = VertexGraph::new();
    let a = g.add_vertex("a");
    let b = g.add_vertex("bb");
    let c = g.add_vertex("c");
    let d = g.add_vertex("d");
    g.add_edge(a, b);
    g.add_edge(a, c);
    g.add_edge(b, d);
    g.add_edge(d, a);

    let mut out = Vec::new();
    write_short_words(&g, Some(a), 2, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a\nd\nc\n");
}

#[test]
fn flight_routes() {
    let mut net = FlightNetwork::new();
    let sea = net.add_airport("SEA");
    let sfo = net.add_airport("SFO");
    let hnl = net.add_airport("HNL");
    let ord = net.add_airport("ORD");
    net.add_flight(sea, sfo);
    net.add_flight(sfo, hnl);
    net.add_flight(hnl, sfo);
    net.add_flight(ord, sea);

    assert!(can_reach(&net, net.find("SEA"), &hnl));
    assert!(!can_reach(&net, net.find("HNL"), &sea));
    assert!(can_reach(&net, Some(ord), &hnl));
    assert!(!can_reach(&net, net.find("LHR"), &sea));
}

#[test]
fn adjacency_map_from_json() {
    let map: AdjacencyMap<String> =
        AdjacencyMap::from_json(r#"{"home": ["work"], "work": ["home"], "cabin": []}"#).unwrap();
    assert_eq!(
        map.unreachable_from(&"home".to_owned()),
        HashSet::from(["cabin".to_owned()])
    );

    let err = AdjacencyMap::<String>::from_json("[1, 2]").unwrap_err();
    assert!(matches!(err, GraphError::Json(_)));
}
