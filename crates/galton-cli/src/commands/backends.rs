//! Backends command implementation.

use anyhow::Result;
use console::style;

use galton_exp::default_registry;
use galton_hal::BackendConfig;

/// Execute the backends command.
pub async fn execute() -> Result<()> {
    println!("{} Available backends:\n", style("Galton").cyan().bold());

    let registry = default_registry();
    for name in registry.available_backends() {
        let backend = registry.create(&name, BackendConfig::new(&name))?;
        let available = backend.availability().await?.is_available;

        println!(
            "  {} {} (local)",
            if available {
                style("●").green()
            } else {
                style("○").red()
            },
            style(&name).bold()
        );
        println!("    Max qubits: {}", backend.max_qubits());
        println!("    Seedable:   yes");
        println!();
    }

    Ok(())
}
