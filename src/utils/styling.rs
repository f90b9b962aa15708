//! Terminal styling utilities for the CLI output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static COMPASS: Emoji<'_, '_> = Emoji("🧭 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ███╗   ███╗███████╗██████╗ ██╗████████╗
    ████╗ ████║██╔════╝██╔══██╗██║╚══██╔══╝
    ██╔████╔██║█████╗  ██████╔╝██║   ██║
    ██║╚██╔╝██║██╔══╝  ██╔══██╗██║   ██║
    ██║ ╚═╝ ██║███████╗██║  ██║██║   ██║
    ╚═╝     ╚═╝╚══════╝╚═╝  ╚═╝╚═╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("Σ").magenta().bold(),
        style("Feature subsets that earn their keep").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, target: &str, direction: &str) {
    println!(
        "    {} Input:     {}",
        FOLDER,
        style(truncate_path(input, 44)).white()
    );
    println!(
        "    {} Target:    {}",
        TARGET,
        style(truncate_string(target, 44)).white()
    );
    println!(
        "    {} Direction: {}",
        COMPASS,
        style(direction).yellow()
    );
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print one accepted search iteration
pub fn print_iteration(iteration: usize, subset: &[String], score: f64) {
    println!(
        "      {} {} {} {}",
        style(format!("round {}", iteration)).cyan(),
        style(format!("[{}]", subset.join(", "))).white(),
        style("→").dim(),
        style(format!("{:.6}", score)).yellow().bold()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Merit selection complete!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("...{}", &s[s.len() - max_len + 3..])
    }
}
