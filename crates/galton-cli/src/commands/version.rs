//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum Galton board simulation and statistics",
        style("Galton").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  galton-ir     Circuit intermediate representation");
    println!("  galton-board  Galton board circuit builder");
    println!("  galton-hal    Hardware abstraction layer");
    println!("  galton-stats  Distribution statistics pipeline");
    println!("  galton-exp    Experiment orchestration");
    println!("  galton-cli    Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/galton-lab/galton").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
