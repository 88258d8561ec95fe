//! Staged configuration for the spanning tree solvers.
//!
//! ```
//! use spanning::graph::labeled::weight_of;
//! use spanning::{minimum_spanning_tree, DoubleWeightOperations, LabeledVertex, LabeledWeightedEdge, UndirectedGraph};
//!
//! let (a, b) = (LabeledVertex::new("a"), LabeledVertex::new("b"));
//! let mut graph = UndirectedGraph::new();
//! graph.add_vertex(a.clone());
//! graph.add_vertex(b.clone());
//! graph.add_edge(&a, LabeledWeightedEdge::new("a <-> b", 7.0), &b).unwrap();
//!
//! let tree = minimum_spanning_tree(&graph)?
//!     .where_edges_have_weights(weight_of)?
//!     .from_arbitrary_source()?
//!     .applying_kruskal_algorithm(DoubleWeightOperations)?;
//! assert_eq!(*tree.weight(), 7.0);
//! # Ok::<(), spanning::SpanningTreeError>(())
//! ```
//!
//! Every stage accepts either a value or `None`; `None` is rejected at the
//! stage that receives it with [`SpanningTreeError::MissingArgument`].

use std::fmt;

use super::kruskal::kruskal;
use super::prim::prim;
use super::reverse_delete::reverse_delete;
use crate::algebra::WeightAlgebra;
use crate::error::SpanningTreeError;
use crate::graph::Graph;
use crate::tree::SpanningTree;

type Solved<G, W> =
    Result<SpanningTree<<G as Graph>::Vertex, <G as Graph>::Edge, W>, SpanningTreeError>;

/// Spanning tree algorithms selectable at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    Kruskal,
    ReverseDelete,
    Prim,
}

impl Algorithm {
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::Kruskal, Algorithm::ReverseDelete, Algorithm::Prim]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Kruskal => "kruskal",
            Algorithm::ReverseDelete => "reverse-delete",
            Algorithm::Prim => "prim",
        }
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        Algorithm::all().iter().find(|a| a.name() == name).copied()
    }

    /// Whether the algorithm needs a source vertex, and so a non-empty graph.
    pub fn needs_source(&self) -> bool {
        !matches!(self, Algorithm::ReverseDelete)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entry point: select the graph to span.
pub fn minimum_spanning_tree<'g, G, I>(
    graph: I,
) -> Result<SpanningWeightedEdgeMapperBuilder<'g, G>, SpanningTreeError>
where
    G: Graph,
    I: Into<Option<&'g G>>,
{
    let graph = graph
        .into()
        .ok_or(SpanningTreeError::MissingArgument("graph"))?;
    Ok(SpanningWeightedEdgeMapperBuilder { graph })
}

/// Second stage: how to read a weight off each edge.
pub struct SpanningWeightedEdgeMapperBuilder<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> SpanningWeightedEdgeMapperBuilder<'g, G> {
    pub fn where_edges_have_weights<W, M, I>(
        self,
        weights: I,
    ) -> Result<SpanningTreeSourceSelector<'g, G, M>, SpanningTreeError>
    where
        M: Fn(&G::Edge) -> W,
        I: Into<Option<M>>,
    {
        let weights = weights
            .into()
            .ok_or(SpanningTreeError::MissingArgument("weighted edges mapper"))?;
        Ok(SpanningTreeSourceSelector {
            graph: self.graph,
            weights,
        })
    }
}

/// Third stage: pick a source vertex, or go straight to Reverse-Delete which
/// does not need one.
pub struct SpanningTreeSourceSelector<'g, G, M> {
    graph: &'g G,
    weights: M,
}

impl<'g, G: Graph, M> SpanningTreeSourceSelector<'g, G, M> {
    /// Use the first vertex in the graph's iteration order.
    ///
    /// # Errors
    /// [`SpanningTreeError::EmptyGraph`] if there is no vertex to pick.
    pub fn from_arbitrary_source(
        self,
    ) -> Result<SpanningTreeAlgorithmSelector<'g, G, M>, SpanningTreeError> {
        let source = self
            .graph
            .vertices()
            .next()
            .ok_or(SpanningTreeError::EmptyGraph)?;
        Ok(SpanningTreeAlgorithmSelector {
            graph: self.graph,
            weights: self.weights,
            source,
        })
    }

    /// Start from `source`, which must be a vertex of the graph.
    pub fn from_source<'s, S>(
        self,
        source: S,
    ) -> Result<SpanningTreeAlgorithmSelector<'g, G, M>, SpanningTreeError>
    where
        S: Into<Option<&'s G::Vertex>>,
        G::Vertex: 's,
    {
        let source = source
            .into()
            .ok_or(SpanningTreeError::MissingArgument("spanning tree source vertex"))?;
        // Hold on to the graph's own copy so the selector borrows only the graph.
        let source = self
            .graph
            .vertices()
            .find(|&v| v == source)
            .ok_or_else(|| SpanningTreeError::VertexNotFound(format!("{source:?}")))?;
        Ok(SpanningTreeAlgorithmSelector {
            graph: self.graph,
            weights: self.weights,
            source,
        })
    }

    pub fn applying_reverse_delete_algorithm<W, A, I>(self, algebra: I) -> Solved<G, W>
    where
        M: Fn(&G::Edge) -> W,
        A: WeightAlgebra<W>,
        I: Into<Option<A>>,
    {
        let algebra = algebra
            .into()
            .ok_or(SpanningTreeError::MissingArgument("weight operations"))?;
        Ok(reverse_delete(self.graph, self.weights, &algebra))
    }

    /// Run `algorithm`. Algorithms that need a source start from an arbitrary one.
    pub fn applying<W, A, I>(self, algorithm: Algorithm, algebra: I) -> Solved<G, W>
    where
        M: Fn(&G::Edge) -> W,
        A: WeightAlgebra<W>,
        I: Into<Option<A>>,
    {
        match algorithm {
            Algorithm::ReverseDelete => self.applying_reverse_delete_algorithm(algebra),
            Algorithm::Kruskal => self.from_arbitrary_source()?.applying_kruskal_algorithm(algebra),
            Algorithm::Prim => self.from_arbitrary_source()?.applying_prim_algorithm(algebra),
        }
    }
}

/// Final stage for the source-based algorithms.
pub struct SpanningTreeAlgorithmSelector<'g, G: Graph, M> {
    graph: &'g G,
    weights: M,
    source: &'g G::Vertex,
}

impl<G: Graph, M> SpanningTreeAlgorithmSelector<'_, G, M> {
    pub fn source(&self) -> &G::Vertex {
        self.source
    }

    /// Kruskal's algorithm. The source is validated but does not influence
    /// which edges are chosen.
    pub fn applying_kruskal_algorithm<W, A, I>(self, algebra: I) -> Solved<G, W>
    where
        M: Fn(&G::Edge) -> W,
        A: WeightAlgebra<W>,
        I: Into<Option<A>>,
    {
        let algebra = algebra
            .into()
            .ok_or(SpanningTreeError::MissingArgument("weight operations"))?;
        kruskal(self.graph, self.weights, &algebra)
    }

    pub fn applying_prim_algorithm<W, A, I>(self, algebra: I) -> Solved<G, W>
    where
        M: Fn(&G::Edge) -> W,
        A: WeightAlgebra<W>,
        I: Into<Option<A>>,
    {
        let algebra = algebra
            .into()
            .ok_or(SpanningTreeError::MissingArgument("weight operations"))?;
        prim(self.graph, self.source, self.weights, &algebra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::IntegerWeightOperations;
    use crate::error::ErrorKind;
    use crate::graph::undirected::UndirectedGraph;

    type TestGraph = UndirectedGraph<char, (&'static str, i64)>;
    type Mapper = fn(&(&'static str, i64)) -> i64;

    fn weight(e: &(&str, i64)) -> i64 {
        e.1
    }

    fn triangle() -> TestGraph {
        let mut g = UndirectedGraph::new();
        for v in ['a', 'b', 'c'] {
            g.add_vertex(v);
        }
        g.add_edge(&'a', ("ab", 7), &'b').unwrap();
        g.add_edge(&'b', ("bc", 21), &'c').unwrap();
        g.add_edge(&'c', ("ca", 4), &'a').unwrap();
        g
    }

    #[test]
    fn algorithm_names_round_trip() {
        for &a in Algorithm::all() {
            assert_eq!(Algorithm::from_name(a.name()), Some(a));
        }
        assert_eq!(Algorithm::from_name("boruvka"), None);
        assert!(!Algorithm::ReverseDelete.needs_source());
        assert!(Algorithm::Kruskal.needs_source());
        assert!(Algorithm::Prim.needs_source());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn algorithm_serializes_as_its_name() {
        for &a in Algorithm::all() {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.name()));
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, a);
        }
    }

    #[test]
    fn null_graph() {
        let err = minimum_spanning_tree(None::<&TestGraph>).err().unwrap();
        assert_eq!(err, SpanningTreeError::MissingArgument("graph"));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn null_mapper() {
        let g = triangle();
        let err = minimum_spanning_tree(&g)
            .unwrap()
            .where_edges_have_weights::<i64, Mapper, _>(None)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn null_source() {
        let g = triangle();
        let err = minimum_spanning_tree(&g)
            .unwrap()
            .where_edges_have_weights(weight)
            .unwrap()
            .from_source(None)
            .err()
            .unwrap();
        assert_eq!(
            err,
            SpanningTreeError::MissingArgument("spanning tree source vertex")
        );
    }

    #[test]
    fn null_algebra_only_fails_at_algorithm_stage() {
        let g = triangle();
        let selector = minimum_spanning_tree(&g)
            .unwrap()
            .where_edges_have_weights(weight)
            .unwrap()
            .from_source(&'a')
            .unwrap();
        assert_eq!(*selector.source(), 'a');
        let err = selector
            .applying_kruskal_algorithm::<i64, IntegerWeightOperations, _>(None)
            .unwrap_err();
        assert_eq!(err, SpanningTreeError::MissingArgument("weight operations"));
    }

    #[test]
    fn missing_source_is_invalid_state() {
        let g = triangle();
        let err = minimum_spanning_tree(&g)
            .unwrap()
            .where_edges_have_weights(weight)
            .unwrap()
            .from_source(&'z')
            .err()
            .unwrap();
        assert_eq!(err, SpanningTreeError::VertexNotFound("'z'".into()));
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn arbitrary_source_is_first_vertex() {
        let g = triangle();
        let selector = minimum_spanning_tree(&g)
            .unwrap()
            .where_edges_have_weights(weight)
            .unwrap()
            .from_arbitrary_source()
            .unwrap();
        assert_eq!(*selector.source(), 'a');
    }

    #[test]
    fn every_algorithm_agrees_on_triangle() {
        let g = triangle();
        for &algorithm in Algorithm::all() {
            let tree = minimum_spanning_tree(&g)
                .unwrap()
                .where_edges_have_weights(weight)
                .unwrap()
                .applying(algorithm, IntegerWeightOperations)
                .unwrap();
            assert_eq!(*tree.weight(), 11, "{algorithm}");
            assert_eq!(tree.size(), 2, "{algorithm}");
        }
    }

    #[test]
    fn empty_graph_asymmetry() {
        let g = TestGraph::new();
        let kruskal = minimum_spanning_tree(&g)
            .unwrap()
            .where_edges_have_weights(weight)
            .unwrap()
            .applying(Algorithm::Kruskal, IntegerWeightOperations);
        assert_eq!(kruskal.unwrap_err(), SpanningTreeError::EmptyGraph);

        let reverse_delete = minimum_spanning_tree(&g)
            .unwrap()
            .where_edges_have_weights(weight)
            .unwrap()
            .applying(Algorithm::ReverseDelete, IntegerWeightOperations)
            .unwrap();
        assert_eq!(reverse_delete.order(), 0);
        assert_eq!(reverse_delete.size(), 0);
    }
}
