use std::fmt::Debug;
use std::hash::Hash;

use crate::algebra::WeightAlgebra;
use crate::error::GraphError;
use crate::graph::undirected::UndirectedGraph;
use crate::graph::Graph;
use crate::solve::unionfind::UnionFind;

/// A spanning tree, or a spanning forest when the input graph is disconnected.
///
/// Holds the retained vertices and edges together with the aggregate weight
/// of its edges, accumulated through the weight algebra as edges are added.
#[derive(Debug, Clone)]
pub struct SpanningTree<V, E, W> {
    graph: UndirectedGraph<V, E>,
    weight: W,
}

impl<V, E, W> SpanningTree<V, E, W>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
{
    /// An empty tree whose weight starts at `identity`.
    pub fn new(identity: W) -> Self {
        Self {
            graph: UndirectedGraph::new(),
            weight: identity,
        }
    }

    pub(crate) fn with_vertices<'a, I>(vertices: I, identity: W) -> Self
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut tree = Self::new(identity);
        for v in vertices {
            tree.graph.add_vertex(v.clone());
        }
        tree
    }

    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.graph.add_vertex(vertex)
    }

    /// Add `edge` between `head` and `tail`, folding `edge_weight` into the total.
    pub fn add_edge<A: WeightAlgebra<W>>(
        &mut self,
        head: &V,
        edge: E,
        tail: &V,
        edge_weight: &W,
        algebra: &A,
    ) -> Result<(), GraphError> {
        self.graph.add_edge(head, edge, tail)?;
        self.weight = algebra.combine(&self.weight, edge_weight);
        Ok(())
    }

    /// Same as [`add_edge`](Self::add_edge) with vertex positions in insertion order.
    pub(crate) fn link<A: WeightAlgebra<W>>(
        &mut self,
        head: usize,
        edge: E,
        tail: usize,
        edge_weight: &W,
        algebra: &A,
    ) {
        if self.graph.link(head, edge, tail) {
            self.weight = algebra.combine(&self.weight, edge_weight);
        }
    }

    /// Aggregate weight of all edges.
    pub fn weight(&self) -> &W {
        &self.weight
    }

    pub fn graph(&self) -> &UndirectedGraph<V, E> {
        &self.graph
    }

    pub fn into_parts(self) -> (UndirectedGraph<V, E>, W) {
        (self.graph, self.weight)
    }

    /// Number of trees in the forest. Isolated vertices count as trees.
    pub fn component_count(&self) -> usize {
        let mut sets = UnionFind::with_capacity(self.graph.order());
        for v in self.graph.vertices() {
            sets.make_set(v);
        }
        for e in self.graph.edges() {
            if let Some((h, t)) = self.graph.endpoints(e) {
                sets.union(&h, &t);
            }
        }
        sets.set_count()
    }
}

impl<V, E, W> Graph for SpanningTree<V, E, W>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
{
    type Vertex = V;
    type Edge = E;

    fn order(&self) -> usize {
        self.graph.order()
    }

    fn size(&self) -> usize {
        self.graph.size()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.graph.vertices()
    }

    fn edges(&self) -> impl Iterator<Item = &E> {
        self.graph.edges()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.graph.contains_vertex(vertex)
    }

    fn endpoints(&self, edge: &E) -> Option<(&V, &V)> {
        self.graph.endpoints(edge)
    }

    fn incident_edges(&self, vertex: &V) -> impl Iterator<Item = &E> {
        self.graph.incident_edges(vertex)
    }
}

/// Trees compare by vertices and edges only. The weight follows from the
/// edges, and comparing it directly would be sensitive to the order in which
/// floating-point weights were summed.
impl<V, E, W> PartialEq for SpanningTree<V, E, W>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
{
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph
    }
}
