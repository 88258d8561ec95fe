use log::{debug, trace};

use super::unionfind::UnionFind;
use super::Snapshot;
use crate::algebra::WeightAlgebra;
use crate::error::SpanningTreeError;
use crate::graph::Graph;
use crate::tree::SpanningTree;

/// Kruskal's algorithm: scan edges by ascending weight and keep every edge
/// that joins two different trees of the forest built so far.
///
/// All edges are scanned, so a disconnected graph yields one tree per
/// component. Isolated vertices stay in the result as single-vertex trees.
///
/// # Errors
/// [`SpanningTreeError::EmptyGraph`] if the graph has no vertices.
pub fn kruskal<G, W, M, A>(
    graph: &G,
    weights: M,
    algebra: &A,
) -> Result<SpanningTree<G::Vertex, G::Edge, W>, SpanningTreeError>
where
    G: Graph,
    M: Fn(&G::Edge) -> W,
    A: WeightAlgebra<W>,
{
    if graph.is_empty() {
        return Err(SpanningTreeError::EmptyGraph);
    }

    let snapshot = Snapshot::new(graph, &weights);
    debug!(
        "kruskal: {} vertices, {} edges",
        snapshot.vertices.len(),
        snapshot.edges.len()
    );

    let mut sets = UnionFind::with_capacity(snapshot.vertices.len());
    for &v in &snapshot.vertices {
        sets.make_set(v);
    }

    let mut tree = snapshot.seed_tree(algebra);
    for i in snapshot.sorted_edges(algebra, false) {
        let e = &snapshot.edges[i];
        let (head, tail) = (snapshot.vertices[e.head], snapshot.vertices[e.tail]);
        if sets.union(&head, &tail) {
            trace!("kruskal: accept {:?}", e.edge);
            snapshot.keep(&mut tree, i, algebra);
        } else {
            trace!("kruskal: reject {:?}, closes a cycle", e.edge);
        }
    }

    debug!(
        "kruskal: kept {} edges in {} trees",
        tree.size(),
        sets.set_count()
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::IntegerWeightOperations;
    use crate::graph::undirected::UndirectedGraph;

    type TestGraph = UndirectedGraph<char, (&'static str, i64)>;

    fn graph(vertices: &[char], edges: &[(char, &'static str, i64, char)]) -> TestGraph {
        let mut g = UndirectedGraph::new();
        for &v in vertices {
            g.add_vertex(v);
        }
        for &(h, label, w, t) in edges {
            g.add_edge(&h, (label, w), &t).unwrap();
        }
        g
    }

    fn weight(e: &(&str, i64)) -> i64 {
        e.1
    }

    fn labels(tree: &SpanningTree<char, (&'static str, i64), i64>) -> Vec<&'static str> {
        let mut labels: Vec<_> = tree.edges().map(|e| e.0).collect();
        labels.sort();
        labels
    }

    #[test]
    fn empty_graph_is_an_error() {
        let g = graph(&[], &[]);
        assert_eq!(
            kruskal(&g, weight, &IntegerWeightOperations).unwrap_err(),
            SpanningTreeError::EmptyGraph
        );
    }

    #[test]
    fn single_vertex() {
        let g = graph(&['a'], &[]);
        let tree = kruskal(&g, weight, &IntegerWeightOperations).unwrap();
        assert_eq!(tree.order(), 1);
        assert_eq!(tree.size(), 0);
        assert_eq!(*tree.weight(), 0);
    }

    #[test]
    fn triangle_drops_heaviest() {
        let g = graph(
            &['a', 'b', 'c'],
            &[('a', "ab", 7, 'b'), ('b', "bc", 21, 'c'), ('c', "ca", 4, 'a')],
        );
        let tree = kruskal(&g, weight, &IntegerWeightOperations).unwrap();
        assert_eq!(labels(&tree), vec!["ab", "ca"]);
        assert_eq!(*tree.weight(), 11);
    }

    #[test]
    fn tie_keeps_first_edge_in_input_order() {
        let g = graph(
            &['a', 'b', 'c'],
            &[('a', "ab", 1, 'b'), ('b', "bc", 5, 'c'), ('c', "ca", 5, 'a')],
        );
        let tree = kruskal(&g, weight, &IntegerWeightOperations).unwrap();
        assert_eq!(labels(&tree), vec!["ab", "bc"]);
    }

    #[test]
    fn disconnected_graph_gives_forest() {
        let g = graph(
            &['a', 'b', 'c', 'd', 'e'],
            &[
                ('a', "ab", 7, 'b'),
                ('b', "bc", 21, 'c'),
                ('c', "ca", 4, 'a'),
                ('d', "de", 4, 'e'),
            ],
        );
        let tree = kruskal(&g, weight, &IntegerWeightOperations).unwrap();
        assert_eq!(labels(&tree), vec!["ab", "ca", "de"]);
        assert_eq!(*tree.weight(), 15);
        assert_eq!(tree.component_count(), 2);
    }

    #[test]
    fn weights_extracted_once_per_edge() {
        use std::cell::Cell;

        let g = graph(
            &['a', 'b', 'c'],
            &[('a', "ab", 1, 'b'), ('b', "bc", 2, 'c'), ('c', "ca", 3, 'a')],
        );
        let calls = Cell::new(0);
        let counting = |e: &(&str, i64)| {
            calls.set(calls.get() + 1);
            e.1
        };
        kruskal(&g, counting, &IntegerWeightOperations).unwrap();
        assert_eq!(calls.get(), 3);
    }
}
