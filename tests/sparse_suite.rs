use graphway::{Color, GraphError, Mode, SparseGraph, VertexId};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Build-once/query-many lifecycle: one graph, every algorithm, in
/// sequence, with each run overwriting the previous run's outputs.
#[test]
fn test_algorithm_suite_on_one_graph() {
    init_tracing();
    // A small task dependency graph: 1 and 2 feed 3, 3 feeds 4 and 5,
    // 5 also depends on 2 directly.
    let mut graph = SparseGraph::directed();
    graph.add_vertex(1, "fetch").unwrap();
    graph.add_vertex(2, "parse").unwrap();
    graph.add_vertex(3, "merge").unwrap();
    graph.add_vertex(4, "render").unwrap();
    graph.add_vertex(5, "store").unwrap();
    graph.add_edge(1, 3, 2).unwrap();
    graph.add_edge(2, 3, 4).unwrap();
    graph.add_edge(3, 4, 1).unwrap();
    graph.add_edge(3, 5, 7).unwrap();
    graph.add_edge(2, 5, 3).unwrap();

    // Topological order: for every edge the target finishes first.
    let order = graph.topological_sort(None).unwrap();
    let position = |id: u32| order.iter().position(|v| v.0 == id).unwrap();
    for (u, v) in [(1, 3), (2, 3), (3, 4), (3, 5), (2, 5)] {
        assert!(position(v) < position(u));
    }

    // BFS from 2: hop layers, not weights.
    graph.bfs_explore(2).unwrap();
    assert_eq!(graph.distance(2), Ok(Some(0)));
    assert_eq!(graph.distance(3), Ok(Some(1)));
    assert_eq!(graph.distance(5), Ok(Some(1)));
    assert_eq!(graph.distance(4), Ok(Some(2)));
    assert_eq!(graph.distance(1), Ok(None));

    // DAG shortest path from 2: now weights matter.
    graph.shortest_path_dag(2).unwrap();
    assert_eq!(graph.distance(3), Ok(Some(4)));
    assert_eq!(graph.distance(5), Ok(Some(3)));
    assert_eq!(graph.distance(4), Ok(Some(5)));
    assert_eq!(graph.parent(5), Ok(Some(VertexId(2))));
    assert_eq!(graph.distance(1), Ok(None));

    // Bellman-Ford agrees on a DAG.
    assert_eq!(graph.shortest_path_bellman_ford(2), Ok(true));
    assert_eq!(graph.distance(3), Ok(Some(4)));
    assert_eq!(graph.distance(5), Ok(Some(3)));
    assert_eq!(graph.distance(4), Ok(Some(5)));

    // No cycles anywhere, so every component is a singleton.
    let components = graph.strongly_connected_components().unwrap();
    assert_eq!(components.len(), 5);

    // And the graph is still queryable afterwards.
    graph.dfs_explore(Some(VertexId(1))).unwrap();
    for id in 1..=5u32 {
        assert_eq!(graph.color(id), Ok(Color::Done));
    }
}

#[test]
fn test_undirected_bfs_spreads_both_ways() {
    init_tracing();
    // A path 1 - 2 - 3 - 4 built undirected; starting in the middle
    // reaches both ends.
    let mut graph = SparseGraph::undirected();
    for id in 1..=4u32 {
        graph.add_vertex(id, ()).unwrap();
    }
    graph.add_edge(1, 2, 1).unwrap();
    graph.add_edge(2, 3, 1).unwrap();
    graph.add_edge(3, 4, 1).unwrap();
    graph.bfs_explore(3).unwrap();
    assert_eq!(graph.distance(3), Ok(Some(0)));
    assert_eq!(graph.distance(2), Ok(Some(1)));
    assert_eq!(graph.distance(4), Ok(Some(1)));
    assert_eq!(graph.distance(1), Ok(Some(2)));
}

#[test]
fn test_fast_mode_runs_the_whole_suite() {
    init_tracing();
    // Fast mode requires ids to be the contiguous range 1..=N.
    let mut graph = SparseGraph::directed().with_mode(Mode::Fast);
    for id in 1..=4u32 {
        graph.add_vertex(id, id.to_string()).unwrap();
    }
    graph.add_edge(1, 2, 5).unwrap();
    graph.add_edge(2, 3, 5).unwrap();
    graph.add_edge(1, 4, 2).unwrap();
    graph.add_edge(4, 3, 2).unwrap();

    graph.bfs_explore(1).unwrap();
    assert_eq!(graph.distance(3), Ok(Some(2)));

    graph.shortest_path_dag(1).unwrap();
    assert_eq!(graph.distance(3), Ok(Some(4)));
    assert_eq!(graph.parent(3), Ok(Some(VertexId(4))));

    assert_eq!(graph.shortest_path_bellman_ford(1), Ok(true));
    assert_eq!(graph.distance(3), Ok(Some(4)));

    let components = graph.strongly_connected_components().unwrap();
    assert_eq!(components.len(), 4);
}

#[test]
fn test_error_messages_name_the_vertices() {
    let mut graph = SparseGraph::directed();
    graph.add_vertex(7, ()).unwrap();
    let duplicate = graph.add_vertex(7, ()).unwrap_err();
    assert_eq!(
        duplicate.to_string(),
        "vertex with id 7 already exists in the graph"
    );
    let unknown = graph.add_edge(7, 9, 0).unwrap_err();
    assert_eq!(unknown.to_string(), "no vertex with id 9 in the graph");
    graph.add_vertex(9, ()).unwrap();
    graph.add_edge(7, 9, 0).unwrap();
    let duplicate_edge = graph.add_edge(7, 9, 1).unwrap_err();
    assert_eq!(
        duplicate_edge.to_string(),
        "edge from 7 to 9 already exists in the graph"
    );
}

#[test]
fn test_mutations_before_an_error_are_kept() {
    // No rollback: an undirected add_edge that fails on the mirrored
    // direction keeps the first insertion.
    let mut graph = SparseGraph::undirected();
    graph.add_vertex(1, ()).unwrap();
    graph.add_vertex(2, ()).unwrap();
    graph.add_edge(1, 2, 0).unwrap();
    // The self-loop inserts 3→3 and then fails mirroring it.
    graph.add_vertex(3, ()).unwrap();
    assert_eq!(
        graph.add_edge(3, 3, 0),
        Err(GraphError::DuplicateEdge {
            from: VertexId(3),
            into: VertexId(3)
        })
    );
    assert_eq!(graph.neighbors(3).unwrap().count(), 1);
}
