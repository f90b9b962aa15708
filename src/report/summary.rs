//! Selection summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::SearchOutcome;

/// Summary of the feature selection run(s)
#[derive(Debug, Default)]
pub struct SelectionSummary {
    pub initial_features: usize,
    pub runs: Vec<RunResult>,
}

/// Outcome of one search direction
#[derive(Debug)]
pub struct RunResult {
    pub direction: String,
    pub selected: Vec<String>,
    pub score: f64,
    pub iterations: usize,
}

impl RunResult {
    pub fn from_outcome(direction: &str, outcome: &SearchOutcome) -> Self {
        Self {
            direction: direction.to_string(),
            selected: outcome.selected.clone(),
            score: outcome.score,
            iterations: outcome.log.len(),
        }
    }
}

impl SelectionSummary {
    pub fn new(initial_features: usize) -> Self {
        Self {
            initial_features,
            ..Default::default()
        }
    }

    pub fn add_run(&mut self, run: RunResult) {
        self.runs.push(run);
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SELECTION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Search").add_attribute(Attribute::Bold),
            Cell::new("Rounds").add_attribute(Attribute::Bold),
            Cell::new("Selected").add_attribute(Attribute::Bold),
            Cell::new("Merit").add_attribute(Attribute::Bold),
        ]);

        for run in &self.runs {
            let kept_color = if run.selected.len() < self.initial_features {
                Color::Green
            } else {
                Color::White
            };
            table.add_row(vec![
                Cell::new(&run.direction),
                Cell::new(run.iterations),
                Cell::new(format!(
                    "{} / {}",
                    run.selected.len(),
                    self.initial_features
                ))
                .fg(kept_color),
                Cell::new(format!("{:.6}", run.score))
                    .fg(Color::Yellow)
                    .add_attribute(Attribute::Bold),
            ]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        // Selected feature lists per run
        for run in &self.runs {
            println!();
            println!(
                "    {} {}",
                style("▸").cyan(),
                style(format!("{} selection", run.direction)).white().bold()
            );
            if run.selected.is_empty() {
                println!("      {}", style("(no feature improved the score)").dim());
            } else {
                for feature in &run.selected {
                    println!("      {} {}", style("•").dim(), feature);
                }
            }
        }
    }
}
