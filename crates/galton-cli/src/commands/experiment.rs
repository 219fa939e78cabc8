//! Experiment command implementation.

use anyhow::Result;
use console::style;

use galton_exp::{
    Experiment, ExperimentParams, ExperimentRecord, Launcher, ResultsSink, default_registry,
};

/// Execute the experiment command.
pub async fn execute(
    name: &str,
    layers: usize,
    shots: u32,
    block_size: usize,
    seed: Option<u64>,
    backend: &str,
    out: &str,
) -> Result<()> {
    let mut params = ExperimentParams::with_layers(layers)
        .shots(shots)
        .block_size(block_size);
    params.seed = seed;

    let experiments = match name.to_lowercase().as_str() {
        "gaussian" => vec![Experiment::gaussian(params)],
        "exponential" => vec![Experiment::exponential(params)],
        "interference" => vec![Experiment::interference(params)],
        "all" => galton_exp::standard_suite(params),
        other => {
            anyhow::bail!(
                "Unknown experiment: '{other}'. Available: gaussian, exponential, interference, all"
            );
        }
    };

    let registry = default_registry();
    if !registry.has_backend(backend) {
        anyhow::bail!(
            "Unknown backend: '{backend}'. Available: {}",
            registry.available_backends().join(", ")
        );
    }
    let launcher = Launcher::from_registry(&registry, &[backend], seed)?;
    let sink = ResultsSink::new(out);

    for experiment in &experiments {
        println!(
            "{} Running {} ({} layers, {} shots)",
            style("→").cyan().bold(),
            style(experiment.name()).green(),
            layers,
            shots
        );

        let record = experiment.run_and_save(&launcher, &sink).await?;
        print_record(&record);
    }

    println!(
        "  Artifacts written to {}",
        style(sink.root().display()).yellow()
    );
    Ok(())
}

fn print_record(record: &ExperimentRecord) {
    println!("  Backend:  {}", record.backend);
    println!("  Mean:     {:.4}", record.mu);
    println!("  Std dev:  {:.4}", record.sigma);
    println!("  TV:       {}", fmt_metric(record.tv));
    println!("  JS:       {}", fmt_metric(record.js));
    println!("  KL:       {}", fmt_metric(record.kl));
}

fn fmt_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.6}"),
        None => "undefined".to_string(),
    }
}
