/// Graph generation: a fluent builder plus parametric shapes with seeded weights.
use log::{debug, warn};
use spanning::{Graph, LabeledVertex, LabeledWeightedEdge, UndirectedGraph};

/// The graphs the harness works on: labeled vertices, integer-weighted edges.
pub type BenchGraph = UndirectedGraph<LabeledVertex, LabeledWeightedEdge<i64>>;

/// Simple LCG pseudo-random number generator (deterministic across platforms).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        // LCG with Knuth's constants
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        (self.next_u64() >> 33) % bound
    }
}

/// Fluent builder for [`BenchGraph`]s.
///
/// Edges name their endpoints by label; missing endpoints are added on the
/// fly. Self-loops are skipped. Parallel edges get a `#n` suffix so that
/// every edge label stays unique.
#[derive(Default)]
pub struct GraphBuilder {
    graph: BenchGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex(mut self, label: &str) -> Self {
        self.graph.add_vertex(LabeledVertex::new(label));
        self
    }

    pub fn edge(mut self, head: &str, tail: &str, weight: i64) -> Self {
        self.add_edge(head, tail, weight);
        self
    }

    fn add_edge(&mut self, head: &str, tail: &str, weight: i64) {
        let (h, t) = (LabeledVertex::new(head), LabeledVertex::new(tail));
        self.graph.add_vertex(h.clone());
        self.graph.add_vertex(t.clone());

        let base = format!("{head} <-> {tail}");
        let mut label = base.clone();
        let mut n = 1;
        while self
            .graph
            .contains_edge(&LabeledWeightedEdge::new(label.as_str(), 0))
        {
            n += 1;
            label = format!("{base}#{n}");
        }

        if let Err(e) = self
            .graph
            .add_edge(&h, LabeledWeightedEdge::new(label, weight), &t)
        {
            warn!("skipping edge {head} <-> {tail}: {e}");
        }
    }

    pub fn build(self) -> BenchGraph {
        self.graph
    }
}

/// How edge weights are assigned, in edge creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weights {
    /// Every edge weighs 1.
    Unit,
    /// The k-th edge weighs k (starting at 1).
    Ascending,
    /// Uniform in `1..=max`.
    Random { max: i64, seed: u64 },
}

impl Weights {
    fn source(self) -> impl FnMut() -> i64 {
        let mut k = 0;
        let mut rng = match self {
            Weights::Random { seed, .. } => Rng::new(seed),
            _ => Rng::new(0),
        };
        move || {
            k += 1;
            match self {
                Weights::Unit => 1,
                Weights::Ascending => k,
                Weights::Random { max, .. } => 1 + rng.below(max.max(1) as u64) as i64,
            }
        }
    }
}

/// Parametric graph topologies. Vertices are labeled `v0`, `v1`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `n` vertices and no edges.
    Isolated { n: usize },
    /// v0 - v1 - ... - v(n-1).
    Path { n: usize },
    /// A path closed back onto v0.
    Cycle { n: usize },
    /// Every pair of the `n` vertices joined once.
    Complete { n: usize },
    /// `width` x `height` lattice with 4-neighbour edges.
    Grid { width: usize, height: usize },
    /// `edges` random vertex pairs over `n` vertices. Self-loop draws are skipped.
    Random { n: usize, edges: usize, seed: u64 },
    /// `count` disjoint complete graphs of `n` vertices each.
    Cliques { count: usize, n: usize },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Isolated { .. } => "isolated",
            Shape::Path { .. } => "path",
            Shape::Cycle { .. } => "cycle",
            Shape::Complete { .. } => "complete",
            Shape::Grid { .. } => "grid",
            Shape::Random { .. } => "random",
            Shape::Cliques { .. } => "cliques",
        }
    }
}

fn label(i: usize) -> String {
    format!("v{i}")
}

/// Build the graph for `shape`, weighting its edges by `weights`.
pub fn generate(shape: Shape, weights: Weights) -> BenchGraph {
    let mut next_weight = weights.source();
    let mut b = GraphBuilder::new();
    let mut join = |b: &mut GraphBuilder, h: usize, t: usize| {
        b.add_edge(&label(h), &label(t), next_weight());
    };

    match shape {
        Shape::Isolated { n } => {
            for i in 0..n {
                b = b.vertex(&label(i));
            }
        }
        Shape::Path { n } | Shape::Cycle { n } => {
            for i in 0..n {
                b = b.vertex(&label(i));
            }
            for i in 1..n {
                join(&mut b, i - 1, i);
            }
            if matches!(shape, Shape::Cycle { .. }) && n > 2 {
                join(&mut b, n - 1, 0);
            }
        }
        Shape::Complete { n } => {
            for i in 0..n {
                b = b.vertex(&label(i));
            }
            for i in 0..n {
                for j in i + 1..n {
                    join(&mut b, i, j);
                }
            }
        }
        Shape::Grid { width, height } => {
            for i in 0..width * height {
                b = b.vertex(&label(i));
            }
            for y in 0..height {
                for x in 0..width {
                    let i = y * width + x;
                    if x + 1 < width {
                        join(&mut b, i, i + 1);
                    }
                    if y + 1 < height {
                        join(&mut b, i, i + width);
                    }
                }
            }
        }
        Shape::Random { n, edges, seed } => {
            for i in 0..n {
                b = b.vertex(&label(i));
            }
            if n > 1 {
                let mut rng = Rng::new(seed);
                for _ in 0..edges {
                    let h = rng.below(n as u64) as usize;
                    let t = rng.below(n as u64) as usize;
                    if h != t {
                        join(&mut b, h, t);
                    }
                }
            }
        }
        Shape::Cliques { count, n } => {
            for c in 0..count {
                let base = c * n;
                for i in 0..n {
                    b = b.vertex(&label(base + i));
                }
                for i in 0..n {
                    for j in i + 1..n {
                        join(&mut b, base + i, base + j);
                    }
                }
            }
        }
    }

    let graph = b.build();
    debug!(
        "generated {} graph: {} vertices, {} edges",
        shape.name(),
        graph.order(),
        graph.size()
    );
    graph
}
