/// Solver cross-validation metrics: structural checks and weight agreement.
use std::time::Instant;

use serde::{Deserialize, Serialize};
use spanning::solve::unionfind::UnionFind;
use spanning::{
    minimum_spanning_tree, Algorithm, Graph, IntegerWeightOperations, LabeledVertex,
    LabeledWeightedEdge, SpanningTree, SpanningTreeError,
};

use crate::generate::BenchGraph;

type BenchTree = SpanningTree<LabeledVertex, LabeledWeightedEdge<i64>, i64>;

/// What one solver produced on one graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverOutcome {
    pub algorithm: Algorithm,
    /// Aggregate weight, or `None` if the solver failed.
    pub weight: Option<i64>,
    /// Error message if the solver failed.
    pub error: Option<String>,
    pub edges: usize,
    pub components: usize,
    /// Every input vertex appears in the result.
    pub covers_all_vertices: bool,
    /// Edge count equals order minus component count.
    pub acyclic: bool,
    /// Every result edge is an input edge with the same endpoints.
    pub edges_from_input: bool,
    /// The result weight equals the sum of its edge weights.
    pub weight_consistent: bool,
    pub solve_time_us: u64,
}

impl SolverOutcome {
    /// Whether the result is a spanning forest of a graph with `components`
    /// connected components.
    pub fn is_spanning_forest(&self, components: usize) -> bool {
        self.error.is_none()
            && self.covers_all_vertices
            && self.acyclic
            && self.edges_from_input
            && self.weight_consistent
            && self.components == components
    }
}

/// Result of running every solver on a single graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResult {
    pub order: usize,
    pub size: usize,
    /// Connected components of the input.
    pub components: usize,
    pub solvers: Vec<SolverOutcome>,
    /// All solvers succeeded and report the same aggregate weight.
    pub weights_agree: bool,
}

impl GraphResult {
    /// The agreed weight, if every solver produced the same one.
    pub fn weight(&self) -> Option<i64> {
        if self.weights_agree {
            self.solvers.first().and_then(|s| s.weight)
        } else {
            None
        }
    }

    pub fn all_spanning(&self) -> bool {
        self.solvers
            .iter()
            .all(|s| s.is_spanning_forest(self.components))
    }
}

/// Connected components of `graph`.
pub fn count_components<G: Graph>(graph: &G) -> usize {
    let mut sets = UnionFind::with_capacity(graph.order());
    for v in graph.vertices() {
        sets.make_set(v);
    }
    for e in graph.edges() {
        if let Some((h, t)) = graph.endpoints(e) {
            sets.union(&h, &t);
        }
    }
    sets.set_count()
}

fn solve(graph: &BenchGraph, algorithm: Algorithm) -> Result<BenchTree, SpanningTreeError> {
    minimum_spanning_tree(graph)?
        .where_edges_have_weights(|e: &LabeledWeightedEdge<i64>| *e.weight())?
        .applying(algorithm, IntegerWeightOperations)
}

/// Run `algorithm` on `graph` and check the result.
pub fn run_solver(graph: &BenchGraph, algorithm: Algorithm) -> SolverOutcome {
    let start = Instant::now();
    let solved = solve(graph, algorithm);
    let solve_time_us = start.elapsed().as_micros() as u64;

    match solved {
        Ok(tree) => check_tree(graph, &tree, algorithm, solve_time_us),
        Err(e) => {
            log::warn!("{algorithm} failed: {e}");
            SolverOutcome {
                algorithm,
                weight: None,
                error: Some(e.to_string()),
                edges: 0,
                components: 0,
                covers_all_vertices: false,
                acyclic: false,
                edges_from_input: false,
                weight_consistent: false,
                solve_time_us,
            }
        }
    }
}

fn check_tree(
    graph: &BenchGraph,
    tree: &BenchTree,
    algorithm: Algorithm,
    solve_time_us: u64,
) -> SolverOutcome {
    let components = tree.component_count();
    let covers_all_vertices =
        tree.order() == graph.order() && graph.vertices().all(|v| tree.contains_vertex(v));
    let edges_from_input = tree.edges().all(|e| {
        match (tree.endpoints(e), graph.endpoints(e)) {
            (Some((h, t)), Some((gh, gt))) => (h, t) == (gh, gt) || (h, t) == (gt, gh),
            _ => false,
        }
    });
    let edge_sum = tree
        .edges()
        .fold(0_i64, |acc, e| acc.wrapping_add(*e.weight()));

    SolverOutcome {
        algorithm,
        weight: Some(*tree.weight()),
        error: None,
        edges: tree.size(),
        components,
        covers_all_vertices,
        acyclic: tree.size() + components == tree.order(),
        edges_from_input,
        weight_consistent: edge_sum == *tree.weight(),
        solve_time_us,
    }
}

/// Run every applicable solver on `graph` and compare the results.
///
/// An empty graph has no source vertex, so only the solvers that do not
/// need one are run on it.
pub fn evaluate(graph: &BenchGraph) -> GraphResult {
    let solvers: Vec<SolverOutcome> = Algorithm::all()
        .iter()
        .filter(|a| graph.order() > 0 || !a.needs_source())
        .map(|&a| run_solver(graph, a))
        .collect();

    let weights_agree = match solvers.first().and_then(|s| s.weight) {
        Some(w) => solvers.iter().all(|s| s.weight == Some(w)),
        None => false,
    };

    GraphResult {
        order: graph.order(),
        size: graph.size(),
        components: count_components(graph),
        solvers,
        weights_agree,
    }
}
