use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::Snapshot;
use crate::algebra::WeightAlgebra;
use crate::error::SpanningTreeError;
use crate::graph::Graph;
use crate::tree::SpanningTree;

/// A frontier edge in the priority queue, lightest first.
struct Candidate<'s, W, A> {
    weight: &'s W,
    edge: usize,
    algebra: &'s A,
}

impl<W, A: WeightAlgebra<W>> Ord for Candidate<'_, W, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap pops the greatest element.
        self.algebra
            .compare(other.weight, self.weight)
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

impl<W, A: WeightAlgebra<W>> PartialOrd for Candidate<'_, W, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W, A: WeightAlgebra<W>> PartialEq for Candidate<'_, W, A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W, A: WeightAlgebra<W>> Eq for Candidate<'_, W, A> {}

/// Prim's algorithm: grow a tree from `source` by repeatedly taking the
/// lightest edge leaving it.
///
/// Once the source's component is spanned, growth restarts from the next
/// unreached vertex in graph order, so disconnected graphs yield a forest.
/// The source only decides the order in which edges are found.
///
/// # Errors
/// [`SpanningTreeError::VertexNotFound`] if `source` is not in the graph.
pub fn prim<G, W, M, A>(
    graph: &G,
    source: &G::Vertex,
    weights: M,
    algebra: &A,
) -> Result<SpanningTree<G::Vertex, G::Edge, W>, SpanningTreeError>
where
    G: Graph,
    M: Fn(&G::Edge) -> W,
    A: WeightAlgebra<W>,
{
    if !graph.contains_vertex(source) {
        return Err(SpanningTreeError::VertexNotFound(format!("{source:?}")));
    }

    let snapshot = Snapshot::new(graph, &weights);
    debug!(
        "prim: {} vertices, {} edges, source {:?}",
        snapshot.vertices.len(),
        snapshot.edges.len(),
        source
    );

    let adjacency = snapshot.adjacency();
    let mut reached = vec![false; snapshot.vertices.len()];
    let mut frontier = BinaryHeap::new();
    let mut tree = snapshot.seed_tree(algebra);

    let start = snapshot
        .vertices
        .iter()
        .position(|&v| v == source)
        .unwrap_or(0);
    let roots = std::iter::once(start).chain(0..snapshot.vertices.len());

    let visit = |v: usize, reached: &mut Vec<bool>, frontier: &mut BinaryHeap<_>| {
        reached[v] = true;
        for &e in &adjacency[v] {
            let edge = &snapshot.edges[e];
            if !reached[edge.opposite(v)] {
                frontier.push(Candidate {
                    weight: &edge.weight,
                    edge: e,
                    algebra,
                });
            }
        }
    };

    for root in roots {
        if reached[root] {
            continue;
        }
        trace!("prim: grow from {:?}", snapshot.vertices[root]);

        visit(root, &mut reached, &mut frontier);
        while let Some(Candidate { edge: e, .. }) = frontier.pop() {
            let edge = &snapshot.edges[e];
            let next = match (reached[edge.head], reached[edge.tail]) {
                (true, false) => edge.tail,
                (false, true) => edge.head,
                _ => continue,
            };
            trace!("prim: accept {:?}", edge.edge);
            snapshot.keep(&mut tree, e, algebra);
            visit(next, &mut reached, &mut frontier);
        }
    }

    debug!("prim: kept {} edges", tree.size());
    Ok(tree)
}
