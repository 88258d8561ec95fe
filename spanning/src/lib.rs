pub mod error;
pub mod algebra;
pub mod graph;
pub mod tree;
pub mod solve;

pub use algebra::{DoubleWeightOperations, IntegerWeightOperations, WeightAlgebra};
pub use error::{ErrorKind, GraphError, SpanningTreeError};
pub use graph::labeled::{LabeledVertex, LabeledWeightedEdge};
pub use graph::undirected::UndirectedGraph;
pub use graph::Graph;
pub use solve::builder::{minimum_spanning_tree, Algorithm};
pub use tree::SpanningTree;
