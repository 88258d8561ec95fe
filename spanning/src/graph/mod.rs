use std::fmt::Debug;
use std::hash::Hash;

pub mod labeled;
pub mod undirected;

/// Read-only view of an undirected graph, as consumed by the solvers.
///
/// Vertices and edges are opaque identities: the solvers only clone,
/// compare and hash them. Every edge must join two vertices that are
/// themselves members of the graph.
pub trait Graph {
    type Vertex: Clone + Eq + Hash + Debug;
    type Edge: Clone + Eq + Hash + Debug;

    /// Number of vertices.
    fn order(&self) -> usize;

    /// Number of edges.
    fn size(&self) -> usize;

    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// The two endpoints of `edge`, or `None` if the edge is not in the graph.
    fn endpoints(&self, edge: &Self::Edge) -> Option<(&Self::Vertex, &Self::Vertex)>;

    /// Edges touching `vertex`. Empty if the vertex is not in the graph.
    fn incident_edges(&self, vertex: &Self::Vertex) -> impl Iterator<Item = &Self::Edge>;

    fn is_empty(&self) -> bool {
        self.order() == 0
    }
}
