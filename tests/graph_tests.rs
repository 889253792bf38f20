use std::collections::BTreeSet;

use tether::{components, dfs, Graph, GraphError, HandleKind, VertexHandle};

fn numbered(n: i32) -> (Graph<i32, i32>, Vec<VertexHandle>) {
    let mut graph = Graph::new();
    let handles = (0..n).map(|i| graph.add_vertex(i)).collect();
    (graph, handles)
}

#[test]
fn single_edge_add_and_remove() {
    let (mut graph, v) = numbered(5);
    let e = graph.add_edge(v[1], v[2], 1).unwrap();

    assert!(graph.has_edge(v[1], v[2]).unwrap());
    assert!(graph.has_edge(v[2], v[1]).unwrap());
    assert_eq!(graph.degree(v[1]).unwrap(), 1);
    assert_eq!(graph.degree(v[0]).unwrap(), 0);

    graph.remove_edge(e).unwrap();
    assert!(!graph.has_edge(v[1], v[2]).unwrap());
    assert!(!graph.has_edge(v[2], v[1]).unwrap());
}

#[test]
fn two_components() {
    let (mut graph, v) = numbered(5);
    graph.add_edge(v[0], v[3], 1).unwrap();
    graph.add_edge(v[2], v[3], 1).unwrap();
    graph.add_edge(v[2], v[4], 1).unwrap();

    let parts = components(&graph);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0], BTreeSet::from([v[0], v[2], v[3], v[4]]));
    assert_eq!(parts[1], BTreeSet::from([v[1]]));
}

#[test]
fn removing_first_of_five_moves_last_into_place() {
    let (mut graph, v) = numbered(5);
    assert_eq!(graph.remove_vertex(v[0]).unwrap(), 0);
    assert_eq!(graph.vertex_count(), 4);

    let at_zero = graph.vertex_at(0).unwrap();
    assert_eq!(*graph.vertex_value(at_zero).unwrap(), 4);
    assert_eq!(
        graph.vertex_value(v[4]),
        Err(GraphError::InvalidHandle(HandleKind::Vertex))
    );
    assert_eq!(
        graph.vertex_value(v[0]),
        Err(GraphError::InvalidHandle(HandleKind::Vertex))
    );
}

#[test]
fn dfs_order_from_console_input() {
    // 6 vertices, pairs "0 1  0 2  1 3  2 3  4 5", as read by a front-end.
    let (mut graph, v) = numbered(6);
    for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3), (4, 5)] {
        graph.add_edge(v[a], v[b], 1).unwrap();
    }

    let result = dfs(&graph, v[0]).unwrap();
    assert_eq!(result.order, vec![v[0], v[1], v[3], v[2]]);
    assert_eq!(result.visited, BTreeSet::from([v[0], v[1], v[2], v[3]]));
}

#[test]
fn adjacency_listing_through_public_api() {
    // What a console adjacency-list printer would read.
    let (mut graph, v) = numbered(3);
    graph.add_edge(v[0], v[1], 5).unwrap();
    graph.add_edge(v[0], v[2], 6).unwrap();

    let listing: Vec<(i32, Vec<i32>)> = graph
        .vertex_handles()
        .map(|h| {
            let value = *graph.vertex_value(h).unwrap();
            let targets = graph
                .out_edges(h)
                .unwrap()
                .map(|e| *graph.vertex_value(graph.edge_target(e).unwrap()).unwrap())
                .collect();
            (value, targets)
        })
        .collect();

    assert_eq!(listing, vec![(0, vec![2, 1]), (1, vec![0]), (2, vec![0])]);
}

#[test]
fn edge_weight_resolution() {
    let (mut graph, v) = numbered(2);
    let e = graph.add_edge(v[0], v[1], 42).unwrap();
    assert_eq!(graph.edge_weight(e), Ok(&42));
    assert_eq!(graph.set_edge_weight(e, 43), Ok(42));
    assert_eq!(graph.edge_weight(e), Ok(&43));
    let back = graph.find_edge(v[1], v[0]).unwrap().unwrap();
    assert_eq!(graph.edge_weight(back), Ok(&43));
    assert_eq!(graph.edge_count(), 1);

    graph.remove_vertex(v[1]).unwrap();
    assert_eq!(graph.edge_weight(e), Err(GraphError::InvalidHandle(HandleKind::Edge)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn error_messages() {
    assert_eq!(
        GraphError::InvalidHandle(HandleKind::Vertex).to_string(),
        "invalid vertex handle"
    );
    assert_eq!(
        GraphError::InvalidHandle(HandleKind::Edge).to_string(),
        "invalid edge handle"
    );
    assert_eq!(
        GraphError::EndpointNotFound.to_string(),
        "no vertex holds the requested value"
    );
}
