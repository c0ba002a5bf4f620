//! Sociogram CLI — command-line driver for social network analytics
//!
//! Builds a network from a config file and/or flags, then prints reports.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use sociogram::algo::{adjacency_at_distance, Rounding};
use sociogram::report::{AdjacencyDisplay, SetDisplay};
use sociogram::{
    Adjacency, Connection, GraphSnapshot, NetworkConfig, Person, Report, SocialGraph, Strategy,
};

#[derive(Parser)]
#[command(name = "sociogram", version, about = "Sociogram social network analytics CLI")]
struct Cli {
    /// Network config file (.yaml, .yml or .json)
    #[arg(long, global = true, env = "SOCIOGRAM_CONFIG")]
    config: Option<String>,

    /// Comma-separated people, replaces the configured list
    #[arg(long, value_delimiter = ',', global = true)]
    people: Option<Vec<String>>,

    /// Explicit connection as NAME:NAME, repeatable
    #[arg(long = "connect", value_parser = parse_connection, global = true)]
    connections: Vec<Connection>,

    /// Connection generation strategy (random or full)
    #[arg(long, global = true)]
    strategy: Option<Strategy>,

    /// Seed for random generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full six-part network report
    Report {
        /// Degree a person must exceed to be listed as highly connected
        #[arg(long)]
        threshold: Option<usize>,

        /// Rounding for the average (none, floor, ceiling, truncate)
        #[arg(long)]
        rounding: Option<Rounding>,
    },
    /// List every person with their number of connections
    Degrees,
    /// List the people at an exact degree of separation from each person
    Separation {
        /// Hop count
        #[arg(long, default_value_t = 1)]
        distance: usize,
    },
    /// Export people, connections and shell layout for a renderer
    Snapshot,
}

fn parse_connection(s: &str) -> Result<Connection, String> {
    match s.split_once(':') {
        Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
            Ok(Connection::new(a.trim(), b.trim()))
        }
        _ => Err(format!("expected NAME:NAME, got '{}'", s)),
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => NetworkConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => NetworkConfig::default(),
    };

    if let Some(people) = &cli.people {
        config.people = people.iter().map(|p| Person::from(p.trim())).collect();
    }
    if !cli.connections.is_empty() {
        config.connections = Some(cli.connections.clone());
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    if let Commands::Report { threshold, rounding } = &cli.command {
        if let Some(threshold) = threshold {
            config.threshold = *threshold;
        }
        if let Some(rounding) = rounding {
            config.rounding = *rounding;
        }
    }

    let graph = config.build();

    match cli.command {
        Commands::Report { .. } => run_report(&graph, &config, &cli.format),
        Commands::Degrees => run_degrees(&graph, &cli.format),
        Commands::Separation { distance } => run_separation(&graph, distance, &cli.format),
        Commands::Snapshot => run_snapshot(&graph, &cli.format),
    }
}

fn run_report(
    graph: &SocialGraph,
    config: &NetworkConfig,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    if graph.is_empty() {
        bail!("network has no people, nothing to report");
    }
    let report = Report::compute(graph, config.report_options())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            println!("report,result");
            for (name, value) in report_rows(&report) {
                println!("{},{}", csv_escape(&name), csv_escape(&value));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Report", "Result"]);
            for (name, value) in report_rows(&report) {
                table.add_row(vec![name, value]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn report_rows(report: &Report) -> Vec<(String, String)> {
    vec![
        ("Friends".to_string(), AdjacencyDisplay(&report.friends).to_string()),
        (
            "Friends of friends".to_string(),
            AdjacencyDisplay(&report.friends_of_friends).to_string(),
        ),
        ("Most popular".to_string(), SetDisplay(&report.most_popular).to_string()),
        ("Least popular".to_string(), SetDisplay(&report.least_popular).to_string()),
        (
            format!("Average popularity ({})", report.rounding),
            report.average_degree.to_string(),
        ),
        (
            format!("More than {} friends", report.threshold),
            SetDisplay(&report.more_than_threshold).to_string(),
        ),
    ]
}

fn run_degrees(graph: &SocialGraph, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = graph
                .degrees()
                .map(|(p, d)| serde_json::json!({ "person": p, "degree": d }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("person,degree");
            for (person, degree) in graph.degrees() {
                println!("{},{}", csv_escape(person.as_str()), degree);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Person", "Degree"]);
            for (person, degree) in graph.degrees() {
                table.add_row(vec![person.to_string(), degree.to_string()]);
            }
            println!("{}", table);
            println!("{} person(s), {} connection(s)", graph.node_count(), graph.edge_count());
        }
    }

    Ok(())
}

fn run_separation(graph: &SocialGraph, distance: usize, format: &OutputFormat) -> anyhow::Result<()> {
    let adjacency: Adjacency = adjacency_at_distance(graph, distance);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&adjacency)?);
        }
        OutputFormat::Csv => {
            println!("person,at_distance");
            for (person, others) in &adjacency {
                println!(
                    "{},{}",
                    csv_escape(person.as_str()),
                    csv_escape(&SetDisplay(others).to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Person".to_string(), format!("At distance {}", distance)]);
            for (person, others) in &adjacency {
                table.add_row(vec![person.to_string(), SetDisplay(others).to_string()]);
            }
            println!("{}", table);
            if adjacency.is_empty() {
                println!("(no people)");
            } else {
                println!("{}", AdjacencyDisplay(&adjacency));
            }
        }
    }

    Ok(())
}

fn run_snapshot(graph: &SocialGraph, format: &OutputFormat) -> anyhow::Result<()> {
    let snapshot = GraphSnapshot::capture(graph);

    match format {
        OutputFormat::Json => {
            println!("{}", snapshot.to_json()?);
        }
        OutputFormat::Csv => {
            println!("source,target");
            for Connection(a, b) in &snapshot.connections {
                println!("{},{}", csv_escape(a.as_str()), csv_escape(b.as_str()));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Shell", "People"]);
            for (i, shell) in snapshot.shells.iter().enumerate() {
                let names: Vec<&str> = shell.iter().map(|p| p.as_str()).collect();
                table.add_row(vec![i.to_string(), names.join(", ")]);
            }
            println!("{}", table);
            for connection in &snapshot.connections {
                println!("  {}", connection);
            }
        }
    }

    Ok(())
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
