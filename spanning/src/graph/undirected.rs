use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use super::Graph;
use crate::error::GraphError;

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    edge: E,
    head: usize,
    tail: usize,
}

impl<E> EdgeEntry<E> {
    fn opposite(&self, vertex: usize) -> usize {
        if self.head == vertex {
            self.tail
        } else {
            self.head
        }
    }
}

/// Mutable in-memory undirected graph.
///
/// Vertices and edges keep their insertion order, which is the iteration
/// order the solvers observe.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, E> {
    vertices: Vec<V>,
    vertex_index: HashMap<V, usize>,
    /// Indices into `edges`, per vertex.
    adjacency: Vec<SmallVec<[usize; 4]>>,
    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<E, usize>,
}

impl<V, E> Default for UndirectedGraph<V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }
}

impl<V, E> UndirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertex_index.contains_key(&vertex) {
            return false;
        }
        self.vertex_index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.adjacency.push(SmallVec::new());
        true
    }

    /// Connect `head` and `tail` through `edge`.
    ///
    /// Both endpoints must already be vertices of the graph.
    pub fn add_edge(&mut self, head: &V, edge: E, tail: &V) -> Result<(), GraphError> {
        let h = self.index_of(head)?;
        let t = self.index_of(tail)?;
        if h == t {
            return Err(GraphError::SelfLoop(format!("{head:?}")));
        }
        if self.edge_index.contains_key(&edge) {
            return Err(GraphError::DuplicateEdge(format!("{edge:?}")));
        }
        self.link(h, edge, t);
        Ok(())
    }

    /// Insert an edge between two vertex positions, skipping edges already present.
    pub(crate) fn link(&mut self, head: usize, edge: E, tail: usize) -> bool {
        if self.edge_index.contains_key(&edge) {
            return false;
        }
        let id = self.edges.len();
        self.edge_index.insert(edge.clone(), id);
        self.edges.push(EdgeEntry { edge, head, tail });
        self.adjacency[head].push(id);
        self.adjacency[tail].push(id);
        true
    }

    pub fn contains_edge(&self, edge: &E) -> bool {
        self.edge_index.contains_key(edge)
    }

    /// Number of edges touching `vertex`.
    pub fn degree(&self, vertex: &V) -> usize {
        self.vertex_index
            .get(vertex)
            .map_or(0, |&i| self.adjacency[i].len())
    }

    /// Vertices joined to `vertex` by an edge.
    pub fn adjacent_vertices<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        let i = self.vertex_index.get(vertex).copied();
        i.into_iter().flat_map(move |i| {
            self.adjacency[i]
                .iter()
                .map(move |&e| &self.vertices[self.edges[e].opposite(i)])
        })
    }

    fn index_of(&self, vertex: &V) -> Result<usize, GraphError> {
        self.vertex_index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(format!("{vertex:?}")))
    }
}

impl<V, E> Graph for UndirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
{
    type Vertex = V;
    type Edge = E;

    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.iter().map(|entry| &entry.edge)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertex_index.contains_key(vertex)
    }

    fn endpoints(&self, edge: &E) -> Option<(&V, &V)> {
        let entry = &self.edges[*self.edge_index.get(edge)?];
        Some((&self.vertices[entry.head], &self.vertices[entry.tail]))
    }

    fn incident_edges(&self, vertex: &V) -> impl Iterator<Item = &E> {
        let i = self.vertex_index.get(vertex).copied();
        i.into_iter()
            .flat_map(move |i| self.adjacency[i].iter().map(move |&e| &self.edges[e].edge))
    }
}

/// Two graphs are equal when they hold the same vertices and the same edges
/// joining the same (unordered) endpoint pairs, regardless of insertion order.
impl<V, E> PartialEq for UndirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
{
    fn eq(&self, other: &Self) -> bool {
        if self.order() != other.order() || self.size() != other.size() {
            return false;
        }
        if !self.vertices.iter().all(|v| other.contains_vertex(v)) {
            return false;
        }
        self.edges.iter().all(|entry| {
            let (h, t) = (&self.vertices[entry.head], &self.vertices[entry.tail]);
            match other.endpoints(&entry.edge) {
                Some((oh, ot)) => (oh == h && ot == t) || (oh == t && ot == h),
                None => false,
            }
        })
    }
}

impl<V, E> Eq for UndirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone + Eq + Hash + Debug,
{
}
