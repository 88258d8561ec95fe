/// Report generation: terminal, JSON output for scenario results.
use serde::Serialize;
use spanning::Algorithm;

use crate::metrics::GraphResult;

/// Summary of a single scenario run.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub category: String,
    pub passed: bool,
    pub order: usize,
    pub size: usize,
    pub components: usize,
    /// Agreed aggregate weight, if the solvers agree.
    pub weight: Option<i64>,
    pub expect_weight: Option<i64>,
    pub weights_agree: bool,
    /// Human-readable reasons the scenario failed.
    pub failures: Vec<String>,
    /// Per-solver time in microseconds, in [`Algorithm::all`] order.
    pub solve_time_us: Vec<(Algorithm, u64)>,
}

/// Full report across all scenarios.
#[derive(Debug, Serialize)]
pub struct FullReport {
    pub scenarios: Vec<ScenarioReport>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl FullReport {
    pub fn from_scenarios(scenarios: Vec<ScenarioReport>) -> Self {
        let total = scenarios.len();
        let passed = scenarios.iter().filter(|s| s.passed).count();
        let failed = total - passed;
        Self {
            scenarios,
            total,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Print a terminal table summarizing results.
pub fn print_terminal(report: &FullReport) {
    print!(
        "{:<35} {:>6} {:>6} {:>5} {:>8}",
        "Scenario", "V", "E", "Comp", "Weight"
    );
    for a in Algorithm::all() {
        print!(" {:>15}", format!("{}(us)", a.name()));
    }
    println!(" {:>6}", "Status");
    println!("{}", "-".repeat(122));

    for s in &report.scenarios {
        let status = if s.passed { "PASS" } else { "FAIL" };
        let weight = s.weight.map_or_else(|| "-".to_string(), |w| w.to_string());
        print!(
            "{:<35} {:>6} {:>6} {:>5} {:>8}",
            truncate(&s.name, 35),
            s.order,
            s.size,
            s.components,
            weight,
        );
        for (_, us) in &s.solve_time_us {
            print!(" {:>15}", us);
        }
        println!(" {:>6}", status);
        for f in &s.failures {
            println!("    {f}");
        }
    }

    println!("{}", "-".repeat(122));
    println!(
        "Total: {} | Passed: {} | Failed: {}",
        report.total, report.passed, report.failed
    );
}

/// Render report as JSON.
pub fn to_json(report: &FullReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

/// Build a ScenarioReport from a scenario's expectations and its result.
pub fn scenario_report(
    name: &str,
    category: &str,
    result: &GraphResult,
    expect_weight: Option<i64>,
    expect_components: Option<usize>,
) -> ScenarioReport {
    let mut failures = Vec::new();

    for s in &result.solvers {
        if let Some(e) = &s.error {
            failures.push(format!("{}: {e}", s.algorithm));
        } else if !s.is_spanning_forest(result.components) {
            failures.push(format!(
                "{}: not a spanning forest (edges={}, components={}, covers={}, from_input={}, weight_ok={})",
                s.algorithm,
                s.edges,
                s.components,
                s.covers_all_vertices,
                s.edges_from_input,
                s.weight_consistent,
            ));
        }
    }
    if !result.weights_agree {
        let weights: Vec<String> = result
            .solvers
            .iter()
            .map(|s| format!("{}={:?}", s.algorithm, s.weight))
            .collect();
        failures.push(format!("weights disagree: {}", weights.join(", ")));
    }
    if let Some(expected) = expect_weight {
        if result.weight() != Some(expected) {
            failures.push(format!("expected weight {expected}, got {:?}", result.weight()));
        }
    }
    if let Some(expected) = expect_components {
        if result.components != expected {
            failures.push(format!(
                "expected {expected} components, got {}",
                result.components
            ));
        }
    }

    ScenarioReport {
        name: name.to_string(),
        category: category.to_string(),
        passed: failures.is_empty(),
        order: result.order,
        size: result.size,
        components: result.components,
        weight: result.weight(),
        expect_weight,
        weights_agree: result.weights_agree,
        failures,
        solve_time_us: result
            .solvers
            .iter()
            .map(|s| (s.algorithm, s.solve_time_us))
            .collect(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{head}…")
    }
}
