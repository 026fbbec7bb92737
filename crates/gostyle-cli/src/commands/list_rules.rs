//! List rules command implementation.

use gostyle_core::{View, PARSE_FAILURE_CODE, PARSE_FAILURE_NAME};
use gostyle_rules::default_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<24} {:<10} Description", "Code", "Name", "View");
    println!("{}", "-".repeat(90));

    println!(
        "{:<8} {:<24} {:<10} Go file could not be parsed (structural rules skipped)",
        PARSE_FAILURE_CODE, PARSE_FAILURE_NAME, View::Structure.to_string()
    );
    for info in default_rules().catalog() {
        println!(
            "{:<8} {:<24} {:<10} {}",
            info.code,
            info.name,
            info.view.to_string(),
            info.description
        );
    }

    println!("\nAll rules always run. Conventions are tuned in gostyle.toml:");
    println!("  [conventions] cfgplugin_segment, issue_url_base");
}
