pub mod unionfind;
pub mod kruskal;
pub mod reverse_delete;
pub mod prim;
pub mod builder;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::algebra::WeightAlgebra;
use crate::graph::Graph;
use crate::tree::SpanningTree;

/// An input edge with its endpoints resolved to vertex positions.
pub(crate) struct WeightedEdge<'g, E, W> {
    pub edge: &'g E,
    pub head: usize,
    pub tail: usize,
    pub weight: W,
}

impl<E, W> WeightedEdge<'_, E, W> {
    pub fn opposite(&self, vertex: usize) -> usize {
        if self.head == vertex {
            self.tail
        } else {
            self.head
        }
    }
}

/// Positional view of an input graph taken once at the start of a solve.
///
/// Each edge weight is extracted exactly once here.
pub(crate) struct Snapshot<'g, V, E, W> {
    pub vertices: Vec<&'g V>,
    pub edges: Vec<WeightedEdge<'g, E, W>>,
}

impl<'g, V, E, W> Snapshot<'g, V, E, W>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
{
    pub fn new<G, M>(graph: &'g G, weights: &M) -> Self
    where
        G: Graph<Vertex = V, Edge = E>,
        M: Fn(&E) -> W,
    {
        let mut vertices = Vec::with_capacity(graph.order());
        let mut index: HashMap<&V, usize> = HashMap::with_capacity(graph.order());
        for v in graph.vertices() {
            index.entry(v).or_insert_with(|| {
                vertices.push(v);
                vertices.len() - 1
            });
        }

        let mut edges = Vec::with_capacity(graph.size());
        for edge in graph.edges() {
            let resolved = graph
                .endpoints(edge)
                .and_then(|(h, t)| Some((*index.get(h)?, *index.get(t)?)));
            match resolved {
                Some((head, tail)) => edges.push(WeightedEdge {
                    edge,
                    head,
                    tail,
                    weight: weights(edge),
                }),
                None => log::warn!("skipping edge {edge:?}: endpoints are not in the graph"),
            }
        }

        Self { vertices, edges }
    }

    /// Edge positions ordered by weight. The sort is stable, so equal weights
    /// keep the graph's edge iteration order in both directions.
    pub fn sorted_edges<A>(&self, algebra: &A, descending: bool) -> Vec<usize>
    where
        A: WeightAlgebra<W>,
    {
        let mut order: Vec<usize> = (0..self.edges.len()).collect();
        order.sort_by(|&a, &b| {
            let (wa, wb) = (&self.edges[a].weight, &self.edges[b].weight);
            if descending {
                algebra.compare(wb, wa)
            } else {
                algebra.compare(wa, wb)
            }
        });
        order
    }

    /// Edge positions incident to each vertex position.
    pub fn adjacency(&self) -> Vec<SmallVec<[usize; 4]>> {
        let mut adjacency = vec![SmallVec::new(); self.vertices.len()];
        for (i, e) in self.edges.iter().enumerate() {
            adjacency[e.head].push(i);
            adjacency[e.tail].push(i);
        }
        adjacency
    }

    /// A result tree holding every input vertex and no edges yet. Vertex
    /// positions in the tree match positions in the snapshot.
    pub fn seed_tree<A: WeightAlgebra<W>>(&self, algebra: &A) -> SpanningTree<V, E, W> {
        SpanningTree::with_vertices(self.vertices.iter().copied(), algebra.identity())
    }

    /// Add the edge at position `i` to `tree`.
    pub fn keep<A>(&self, tree: &mut SpanningTree<V, E, W>, i: usize, algebra: &A)
    where
        A: WeightAlgebra<W>,
    {
        let e = &self.edges[i];
        tree.link(e.head, e.edge.clone(), e.tail, &e.weight, algebra);
    }
}
