//! Merit: Categorical Feature Selection CLI
//!
//! A command-line tool that selects the feature subset of a categorical
//! dataset that best predicts a target class, using symmetric uncertainty
//! and greedy forward/backward search.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::Cli;
use pipeline::{backward_select, forward_select, load_dataset, Direction, SuMatrix};
use report::{export_selection, ExportParams, RunExport, RunResult, SelectionSummary};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_iteration, print_step_header, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let direction: Direction = cli
        .direction
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    // Print styled banner and configuration
    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &cli.target, &direction.to_string());

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading records...");
    let data = load_dataset(
        &cli.input,
        cli.delimiter as u8,
        !cli.no_header,
        cli.column_names(),
    )?;
    finish_with_success(&spinner, "Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Records: {}", data.len());
    println!("      Attributes: {}", data.attributes().len());
    print_step_time(step_start.elapsed());

    // Resolve the candidate feature pool: everything but the target,
    // minus any explicitly dropped columns.
    let features: Vec<String> = data
        .feature_names(&cli.target)
        .map_err(|_| {
            anyhow::anyhow!(
                "Target column '{}' not found in dataset. Available columns: {:?}",
                cli.target,
                data.attributes()
            )
        })?
        .into_iter()
        .filter(|f| !cli.drop_columns.contains(f))
        .collect();

    if features.is_empty() {
        anyhow::bail!("No candidate features remain after removing the target and dropped columns");
    }

    let mut summary = SelectionSummary::new(features.len());
    let mut runs: Vec<RunExport> = Vec::new();

    // Step 2: Precompute the SU matrix shared by both searches
    print_step_header(2, "Symmetric Uncertainty");

    let step_start = Instant::now();
    println!();
    let su = SuMatrix::compute(&data, &features, &cli.target)?;
    print_success("SU matrix ready");
    print_step_time(step_start.elapsed());

    // Step 3: Forward selection
    if matches!(direction, Direction::Forward | Direction::Both) {
        print_step_header(3, "Forward Selection");

        let step_start = Instant::now();
        let outcome = forward_select(&su);
        for record in &outcome.log {
            print_iteration(record.iteration, &record.subset, record.score);
        }
        if outcome.log.is_empty() {
            print_info("No feature improved on the empty subset");
        }
        print_success(&format!(
            "Forward selection kept {} feature(s), merit {:.6}",
            outcome.selected.len(),
            outcome.score
        ));
        print_step_time(step_start.elapsed());

        summary.add_run(RunResult::from_outcome("forward", &outcome));
        runs.push(RunExport::from_outcome("forward", &outcome));
    }

    // Step 4: Backward elimination
    if matches!(direction, Direction::Backward | Direction::Both) {
        print_step_header(4, "Backward Elimination");

        let step_start = Instant::now();
        let outcome = backward_select(&su);
        for record in &outcome.log {
            print_iteration(record.iteration, &record.subset, record.score);
        }
        if outcome.log.is_empty() {
            print_info("No removal improved on the full feature set");
        }
        print_success(&format!(
            "Backward elimination kept {} feature(s), merit {:.6}",
            outcome.selected.len(),
            outcome.score
        ));
        print_step_time(step_start.elapsed());

        summary.add_run(RunResult::from_outcome("backward", &outcome));
        runs.push(RunExport::from_outcome("backward", &outcome));
    }

    // Optional JSON export
    if let Some(export_path) = &cli.export {
        let input_display = cli.input.display().to_string();
        let direction_display = direction.to_string();
        let params = ExportParams {
            input_file: &input_display,
            target_column: &cli.target,
            direction: &direction_display,
            candidate_features: features.len(),
        };
        export_selection(export_path, &params, runs)?;
        print_success(&format!("Results exported to {}", export_path.display()));
    }

    // Display summary
    summary.display();

    // Final completion message
    print_completion();

    Ok(())
}

/// Print the elapsed time of the preceding step
fn print_step_time(elapsed: std::time::Duration) {
    println!(
        "    {}",
        style(format!("({:.2?})", elapsed)).dim()
    );
}
