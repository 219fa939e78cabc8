//! Board command implementation.

use anyhow::Result;
use console::style;

use galton_board::{BiasConfig, BoardMode, GaltonBoard};

/// Execute the board command.
pub fn execute(
    layers: usize,
    theta: Option<f64>,
    per_step: Option<Vec<f64>>,
    interference: bool,
    output: Option<&str>,
) -> Result<()> {
    let bias = match (per_step, theta) {
        (Some(angles), _) => BiasConfig::PerStep(angles),
        (None, Some(angle)) => BiasConfig::Uniform(angle),
        (None, None) => BiasConfig::Unbiased,
    };
    let mode = if interference {
        BoardMode::Interference
    } else {
        BoardMode::Standard
    };

    let board = GaltonBoard::new(layers, bias, mode);
    let circuit = board.build()?;

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&circuit)?;
            std::fs::write(path, json)?;
            println!(
                "{} Wrote {} ({} qubits, {} instructions)",
                style("→").cyan().bold(),
                style(path).green(),
                circuit.num_qubits(),
                circuit.num_instructions()
            );
        }
        None => {
            println!(
                "{} Board circuit: {} layers",
                style("→").cyan().bold(),
                style(layers).green()
            );
            println!("  Qubits:       {}", circuit.num_qubits());
            println!("  Instructions: {}", circuit.num_instructions());
            println!("  H gates:      {}", circuit.count_gates("h"));
            println!("  Ry gates:     {}", circuit.count_gates("ry"));
            println!("  CZ gates:     {}", circuit.count_gates("cz"));
            println!("  Measurements: {}", circuit.count_measurements());
        }
    }

    Ok(())
}
