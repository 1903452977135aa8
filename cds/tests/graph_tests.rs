use cds::{Graph, VectorError};

fn sample() -> Graph {
    let mut graph = Graph::new(5).unwrap();
    for (from, to) in [(0, 1), (0, 2), (0, 3), (1, 2), (3, 1)] {
        assert_eq!(graph.add_edge(from, to), Ok(true));
    }
    graph
}

#[test]
fn test_edges_in_row_major_order() {
    let graph = sample();
    let edges: Vec<(usize, usize)> = graph.edges().collect();
    assert_eq!(edges, [(0, 1), (0, 2), (0, 3), (1, 2), (3, 1)]);
}

#[test]
fn test_self_loops_are_edges() {
    let mut graph = Graph::new(2).unwrap();
    assert_eq!(graph.add_edge(1, 1), Ok(true));
    assert_eq!(graph.has_edge(1, 1), Ok(true));
    assert_eq!(graph.to_string(), "digraph {\n1 -> 1;\n}\n");
}

#[test]
fn test_out_degree_from_edges() {
    let graph = sample();
    let out_of_zero = graph.edges().filter(|(from, _)| *from == 0).count();
    assert_eq!(out_of_zero, 3);
    assert_eq!(graph.has_edge(4, 0), Ok(false));
}

#[test]
fn test_matrix_overflow_is_reported() {
    let result = Graph::new(usize::MAX);
    assert_eq!(
        result.err(),
        Some(VectorError::CapacityOverflow {
            requested: usize::MAX
        })
    );
}
