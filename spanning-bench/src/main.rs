use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use spanning_bench::catalog::{self, Category, Scenario};
use spanning_bench::generate::{self, Shape, Weights};
use spanning_bench::metrics;
use spanning_bench::report::{self, FullReport, ScenarioReport};

#[derive(Parser)]
#[command(name = "spanning-bench", about = "Spanning tree solver cross-validation harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run scenarios and output results.
    Run {
        /// Filter by category name.
        #[arg(long)]
        category: Option<String>,
        /// Filter by scenario name pattern (substring match).
        #[arg(long)]
        scenario: Option<String>,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
        /// Only show failures.
        #[arg(long)]
        quiet: bool,
    },
    /// List available scenarios.
    List {
        /// Filter by category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Run all scenarios and exit with code 1 on any failure.
    Regression {
        /// Filter by category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Generate a single graph with custom parameters and run every solver on it.
    Explore {
        /// Shape: isolated, path, cycle, complete, grid, random, cliques.
        #[arg(long, default_value = "random")]
        shape: String,
        /// Vertex count (grid uses width and height, cliques use it per clique).
        #[arg(long, default_value_t = 100)]
        vertices: usize,
        /// Edge draws for the random shape.
        #[arg(long, default_value_t = 300)]
        edges: usize,
        /// Grid width.
        #[arg(long, default_value_t = 10)]
        width: usize,
        /// Grid height.
        #[arg(long, default_value_t = 10)]
        height: usize,
        /// Number of cliques.
        #[arg(long, default_value_t = 2)]
        count: usize,
        /// Weights: unit, ascending, random.
        #[arg(long, default_value = "random")]
        weights: String,
        /// Largest random weight.
        #[arg(long, default_value_t = 100)]
        max_weight: i64,
        /// Seed for random topology and weights.
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            category,
            scenario,
            format,
            quiet,
        } => cmd_run(category, scenario, &format, quiet),
        Command::List { category } => cmd_list(category),
        Command::Regression { category } => cmd_regression(category),
        Command::Explore {
            shape,
            vertices,
            edges,
            width,
            height,
            count,
            weights,
            max_weight,
            seed,
            format,
        } => {
            let shape = parse_shape(&shape, vertices, edges, width, height, count, seed)?;
            let weights = parse_weights(&weights, max_weight, seed)?;
            cmd_explore(shape, weights, &format)
        }
    }
}

fn filter_scenarios(category: Option<String>, scenario: Option<String>) -> Result<Vec<Scenario>> {
    let mut scenarios = if let Some(cat_name) = &category {
        let cat = Category::from_name(cat_name)
            .with_context(|| format!("unknown category: {cat_name}"))?;
        catalog::scenarios_for_category(cat)
    } else {
        catalog::all_scenarios()
    };

    if let Some(pattern) = &scenario {
        scenarios.retain(|s| s.name.contains(pattern.as_str()));
    }

    Ok(scenarios)
}

fn run_scenario(scenario: &Scenario) -> ScenarioReport {
    let graph = scenario.build();
    let result = metrics::evaluate(&graph);
    log::debug!(
        "{}: {} vertices, {} edges, weight {:?}",
        scenario.name,
        result.order,
        result.size,
        result.weight()
    );
    report::scenario_report(
        &scenario.name,
        scenario.category.name(),
        &result,
        scenario.expect_weight,
        scenario.expect_components,
    )
}

fn run_all(scenarios: &[Scenario]) -> Vec<ScenarioReport> {
    scenarios.par_iter().map(run_scenario).collect()
}

fn print_report(full: &FullReport, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", report::to_json(full)),
        "terminal" => report::print_terminal(full),
        other => bail!("unknown format: {other}"),
    }
    Ok(())
}

fn cmd_run(
    category: Option<String>,
    scenario: Option<String>,
    format: &str,
    quiet: bool,
) -> Result<()> {
    let scenarios = filter_scenarios(category, scenario)?;

    let mut reports = run_all(&scenarios);
    if quiet {
        reports.retain(|r| !r.passed);
    }

    print_report(&FullReport::from_scenarios(reports), format)
}

fn cmd_list(category: Option<String>) -> Result<()> {
    let scenarios = filter_scenarios(category, None)?;
    println!("{:<35} {:<15} Description", "Name", "Category");
    println!("{}", "-".repeat(80));
    for s in &scenarios {
        println!("{:<35} {:<15} {}", s.name, s.category.name(), s.description);
    }
    println!("\nTotal: {} scenarios", scenarios.len());
    Ok(())
}

fn cmd_regression(category: Option<String>) -> Result<()> {
    let scenarios = filter_scenarios(category, None)?;

    let full = FullReport::from_scenarios(run_all(&scenarios));
    report::print_terminal(&full);

    if !full.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_shape(
    name: &str,
    n: usize,
    edges: usize,
    width: usize,
    height: usize,
    count: usize,
    seed: u64,
) -> Result<Shape> {
    Ok(match name {
        "isolated" => Shape::Isolated { n },
        "path" => Shape::Path { n },
        "cycle" => Shape::Cycle { n },
        "complete" => Shape::Complete { n },
        "grid" => Shape::Grid { width, height },
        "random" => Shape::Random { n, edges, seed },
        "cliques" => Shape::Cliques { count, n },
        other => bail!("unknown shape: {other}"),
    })
}

fn parse_weights(name: &str, max: i64, seed: u64) -> Result<Weights> {
    Ok(match name {
        "unit" => Weights::Unit,
        "ascending" => Weights::Ascending,
        "random" => Weights::Random { max, seed },
        other => bail!("unknown weights: {other}"),
    })
}

fn cmd_explore(shape: Shape, weights: Weights, format: &str) -> Result<()> {
    let graph = generate::generate(shape, weights);
    let result = metrics::evaluate(&graph);

    match format {
        "json" => {
            let json =
                serde_json::to_string_pretty(&result).context("serializing explore result")?;
            println!("{json}");
        }
        "terminal" => {
            println!("Shape: {shape:?}");
            println!("Weights: {weights:?}");
            println!(
                "Graph: {} vertices, {} edges, {} components",
                result.order, result.size, result.components
            );
            println!();
            for s in &result.solvers {
                match &s.error {
                    Some(e) => println!("  {:<15} error: {e}", s.algorithm.name()),
                    None => println!(
                        "  {:<15} weight={:<10} edges={:<6} trees={:<6} spanning={} time={:.1} ms",
                        s.algorithm.name(),
                        s.weight.unwrap_or_default(),
                        s.edges,
                        s.components,
                        s.is_spanning_forest(result.components),
                        s.solve_time_us as f64 / 1000.0
                    ),
                }
            }
            println!();
            println!(
                "Agreement: {}",
                if result.weights_agree { "yes" } else { "NO" }
            );
        }
        other => bail!("unknown format: {other}"),
    }
    Ok(())
}
