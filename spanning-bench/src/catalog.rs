/// Pre-defined scenarios for cross-validating the spanning tree solvers.
use crate::generate::{self, BenchGraph, GraphBuilder, Shape, Weights};

/// A category of test scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Reference,
    Disconnected,
    Isolated,
    Path,
    Cycle,
    Complete,
    Grid,
    RandomSparse,
    RandomDense,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Reference,
            Category::Disconnected,
            Category::Isolated,
            Category::Path,
            Category::Cycle,
            Category::Complete,
            Category::Grid,
            Category::RandomSparse,
            Category::RandomDense,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Reference => "reference",
            Category::Disconnected => "disconnected",
            Category::Isolated => "isolated",
            Category::Path => "path",
            Category::Cycle => "cycle",
            Category::Complete => "complete",
            Category::Grid => "grid",
            Category::RandomSparse => "random-sparse",
            Category::RandomDense => "random-dense",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::all().iter().find(|c| c.name() == name).copied()
    }
}

/// A test scenario that builds a graph and states what is known about its
/// minimum spanning forest.
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Known aggregate weight of the minimum spanning forest, if any.
    pub expect_weight: Option<i64>,
    /// Known number of connected components, if any.
    pub expect_components: Option<usize>,
    build_fn: Box<dyn Fn() -> BenchGraph + Send + Sync>,
}

impl Scenario {
    pub fn build(&self) -> BenchGraph {
        (self.build_fn)()
    }
}

/// Build the full catalog of scenarios.
pub fn all_scenarios() -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    scenarios.extend(reference_scenarios());
    scenarios.extend(disconnected_scenarios());
    scenarios.extend(isolated_scenarios());
    scenarios.extend(path_scenarios());
    scenarios.extend(cycle_scenarios());
    scenarios.extend(complete_scenarios());
    scenarios.extend(grid_scenarios());
    scenarios.extend(random_scenarios());
    scenarios
}

/// Filter scenarios by category.
pub fn scenarios_for_category(category: Category) -> Vec<Scenario> {
    all_scenarios()
        .into_iter()
        .filter(|s| s.category == category)
        .collect()
}

/// The seven-vertex graph from the Wikipedia article on Kruskal's algorithm.
pub fn wikipedia_graph() -> BenchGraph {
    GraphBuilder::new()
        .edge("A", "B", 7)
        .edge("A", "D", 5)
        .edge("B", "C", 8)
        .edge("B", "D", 9)
        .edge("B", "E", 7)
        .edge("C", "E", 5)
        .edge("D", "E", 15)
        .edge("D", "F", 6)
        .edge("E", "F", 8)
        .edge("E", "G", 9)
        .edge("F", "G", 11)
        .build()
}

pub fn triangle_graph() -> BenchGraph {
    GraphBuilder::new()
        .edge("a", "b", 7)
        .edge("b", "c", 21)
        .edge("c", "a", 4)
        .build()
}

fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "reference-wikipedia".into(),
            description: "Seven vertices, eleven edges, unique minimum tree".into(),
            category: Category::Reference,
            expect_weight: Some(39),
            expect_components: Some(1),
            build_fn: Box::new(wikipedia_graph),
        },
        Scenario {
            name: "reference-triangle".into(),
            description: "Triangle, heaviest edge dropped".into(),
            category: Category::Reference,
            expect_weight: Some(11),
            expect_components: Some(1),
            build_fn: Box::new(triangle_graph),
        },
        Scenario {
            name: "reference-single-vertex".into(),
            description: "One vertex, no edges".into(),
            category: Category::Reference,
            expect_weight: Some(0),
            expect_components: Some(1),
            build_fn: Box::new(|| GraphBuilder::new().vertex("a").build()),
        },
    ]
}

fn disconnected_scenarios() -> Vec<Scenario> {
    let mut scenarios = vec![
        Scenario {
            name: "disconnected-triangle-and-edge".into(),
            description: "Triangle plus a separate edge".into(),
            category: Category::Disconnected,
            expect_weight: Some(15),
            expect_components: Some(2),
            build_fn: Box::new(|| {
                GraphBuilder::new()
                    .edge("a", "b", 7)
                    .edge("b", "c", 21)
                    .edge("c", "a", 4)
                    .edge("d", "e", 4)
                    .build()
            }),
        },
        Scenario {
            name: "disconnected-two-triangles".into(),
            description: "Two disjoint triangles".into(),
            category: Category::Disconnected,
            expect_weight: Some(22),
            expect_components: Some(2),
            build_fn: Box::new(|| {
                GraphBuilder::new()
                    .edge("a", "b", 7)
                    .edge("b", "c", 21)
                    .edge("c", "a", 4)
                    .edge("d", "e", 7)
                    .edge("e", "f", 21)
                    .edge("f", "d", 4)
                    .build()
            }),
        },
    ];

    for &(count, n) in &[(3, 4), (5, 6)] {
        scenarios.push(Scenario {
            name: format!("disconnected-cliques-{count}x{n}"),
            description: format!("{count} disjoint unit-weight cliques of {n} vertices"),
            category: Category::Disconnected,
            expect_weight: Some((count * (n - 1)) as i64),
            expect_components: Some(count),
            build_fn: Box::new(move || {
                generate::generate(Shape::Cliques { count, n }, Weights::Unit)
            }),
        });
    }
    scenarios
}

fn isolated_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "isolated-vertices".into(),
            description: "Three vertices, no edges".into(),
            category: Category::Isolated,
            expect_weight: Some(0),
            expect_components: Some(3),
            build_fn: Box::new(|| generate::generate(Shape::Isolated { n: 3 }, Weights::Unit)),
        },
        Scenario {
            name: "isolated-single-edge".into(),
            description: "One edge among four vertices".into(),
            category: Category::Isolated,
            expect_weight: Some(7),
            expect_components: Some(3),
            build_fn: Box::new(|| {
                GraphBuilder::new()
                    .vertex("A")
                    .vertex("B")
                    .vertex("C")
                    .vertex("D")
                    .edge("A", "B", 7)
                    .build()
            }),
        },
    ]
}

fn path_scenarios() -> Vec<Scenario> {
    [2, 10, 200]
        .iter()
        .map(|&n: &usize| Scenario {
            name: format!("path-{n}"),
            description: format!("Path of {n} vertices, every edge kept"),
            category: Category::Path,
            expect_weight: Some((n * (n - 1) / 2) as i64),
            expect_components: Some(1),
            build_fn: Box::new(move || generate::generate(Shape::Path { n }, Weights::Ascending)),
        })
        .collect()
}

fn cycle_scenarios() -> Vec<Scenario> {
    [3, 10, 200]
        .iter()
        .map(|&n: &usize| Scenario {
            name: format!("cycle-{n}"),
            description: format!("Cycle of {n} vertices, closing edge is the heaviest"),
            category: Category::Cycle,
            expect_weight: Some((n * (n - 1) / 2) as i64),
            expect_components: Some(1),
            build_fn: Box::new(move || generate::generate(Shape::Cycle { n }, Weights::Ascending)),
        })
        .collect()
}

fn complete_scenarios() -> Vec<Scenario> {
    let mut scenarios: Vec<Scenario> = [5, 30]
        .iter()
        .map(|&n: &usize| Scenario {
            name: format!("complete-{n}-unit"),
            description: format!("K{n} with unit weights, all ties"),
            category: Category::Complete,
            expect_weight: Some((n - 1) as i64),
            expect_components: Some(1),
            build_fn: Box::new(move || generate::generate(Shape::Complete { n }, Weights::Unit)),
        })
        .collect();
    scenarios.push(Scenario {
        name: "complete-30-random".into(),
        description: "K30 with random weights".into(),
        category: Category::Complete,
        expect_weight: None,
        expect_components: Some(1),
        build_fn: Box::new(|| {
            generate::generate(
                Shape::Complete { n: 30 },
                Weights::Random { max: 100, seed: 30 },
            )
        }),
    });
    scenarios
}

fn grid_scenarios() -> Vec<Scenario> {
    [(4, 4), (20, 10)]
        .iter()
        .map(|&(width, height): &(usize, usize)| Scenario {
            name: format!("grid-{width}x{height}"),
            description: format!("{width}x{height} lattice with random weights"),
            category: Category::Grid,
            expect_weight: None,
            expect_components: Some(1),
            build_fn: Box::new(move || {
                generate::generate(
                    Shape::Grid { width, height },
                    Weights::Random {
                        max: 20,
                        seed: (width * height) as u64,
                    },
                )
            }),
        })
        .collect()
}

fn random_scenarios() -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    for seed in 1..=4_u64 {
        // Sparse graphs are usually disconnected; the component count is
        // checked against the input instead of a known value.
        scenarios.push(Scenario {
            name: format!("random-sparse-{seed}"),
            description: "100 vertices, 80 random edges".into(),
            category: Category::RandomSparse,
            expect_weight: None,
            expect_components: None,
            build_fn: Box::new(move || {
                generate::generate(
                    Shape::Random {
                        n: 100,
                        edges: 80,
                        seed,
                    },
                    Weights::Random { max: 50, seed },
                )
            }),
        });
        scenarios.push(Scenario {
            name: format!("random-dense-{seed}"),
            description: "60 vertices, 1200 random edges with many parallels".into(),
            category: Category::RandomDense,
            expect_weight: None,
            expect_components: None,
            build_fn: Box::new(move || {
                generate::generate(
                    Shape::Random {
                        n: 60,
                        edges: 1200,
                        seed,
                    },
                    Weights::Random { max: 10, seed },
                )
            }),
        });
    }
    scenarios
}
