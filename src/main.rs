use anyhow::Context;
use sociogram::{GraphSnapshot, NetworkConfig, Report};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Sociogram v{}", sociogram::version());
    println!("==========================================");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => NetworkConfig::from_path(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => NetworkConfig::default(),
    };

    let graph = config.build();

    let snapshot = GraphSnapshot::capture(&graph);
    println!("People:      {}", snapshot.people.len());
    println!("Connections: {}", snapshot.connections.len());
    for connection in &snapshot.connections {
        println!("  {}", connection);
    }
    println!();

    let report = Report::compute(&graph, config.report_options()).context("failed to compute report")?;
    println!("{}", report);

    Ok(())
}
