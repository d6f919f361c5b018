//! attrgraph CLI: inspect, measure and merge graphs stored as JSON snapshots

use anyhow::{Context, Result};
use attrgraph::{get_name, GraphAlgorithms, GraphConfig, GraphStore, NodeId};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "attrgraph", version, about = "Attributed multigraph store CLI")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "ATTRGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Measure {
    Pagerank,
    Degree,
    Closeness,
    Betweenness,
    Clustering,
    SquareClustering,
    Cliques,
}

#[derive(Subcommand)]
enum Commands {
    /// Print counts and whole-graph measures
    Stats {
        /// Graph snapshot (JSON)
        graph: PathBuf,
    },
    /// Print a per-node measure, highest first
    Measure {
        /// Graph snapshot (JSON)
        graph: PathBuf,

        /// Measure to compute
        measure: Measure,

        /// Only show the top N nodes
        #[arg(long)]
        top: Option<usize>,
    },
    /// Fold nodes into a subject node and write the result
    Merge {
        /// Graph snapshot (JSON)
        graph: PathBuf,

        /// Node that survives the merge
        #[arg(long)]
        subject: String,

        /// Nodes folded into the subject
        #[arg(long, value_delimiter = ',', required = true)]
        nodes: Vec<String>,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the short name of each URI
    Name {
        #[arg(required = true)]
        uris: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GraphConfig::from_yaml_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => GraphConfig::default(),
    };

    match cli.command {
        Commands::Stats { graph } => {
            let store = load(&graph, config)?;
            run_stats(&store, &cli.format)
        }
        Commands::Measure {
            graph,
            measure,
            top,
        } => {
            let store = load(&graph, config)?;
            run_measure(&store, measure, top, &cli.format)
        }
        Commands::Merge {
            graph,
            subject,
            nodes,
            output,
        } => {
            let mut store = load(&graph, config)?;
            run_merge(&mut store, &subject, &nodes, output.as_deref())
        }
        Commands::Name { uris } => run_name(&uris, &cli.format),
    }
}

fn load(path: &Path, config: GraphConfig) -> Result<GraphStore> {
    GraphStore::load_json(path, config).with_context(|| format!("loading {}", path.display()))
}

fn run_stats(store: &GraphStore, format: &OutputFormat) -> Result<()> {
    let rows: Vec<(&str, serde_json::Value)> = vec![
        ("nodes", store.node_count().into()),
        ("edges", store.edge_count().into()),
        ("strongly_connected", store.is_strongly_connected().into()),
        (
            "strongly_connected_components",
            store.number_strongly_connected_components().into(),
        ),
        ("weakly_connected", store.is_weakly_connected().into()),
        (
            "weakly_connected_components",
            store.number_weakly_connected_components().into(),
        ),
        ("diameter", store.diameter().into()),
        ("radius", store.radius().into()),
        ("triangles", store.triangles().into()),
        ("transitivity", store.transitivity().into()),
        ("average_clustering", store.average_clustering().into()),
        ("maximal_cliques", store.graph_number_of_cliques().into()),
    ];

    match format {
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = rows
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            println!("{}", serde_json::to_string_pretty(&object)?);
        }
        OutputFormat::Csv => {
            println!("measure,value");
            for (k, v) in rows {
                println!("{},{}", k, v);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Measure", "Value"]);
            for (k, v) in rows {
                table.add_row(vec![k.to_string(), v.to_string()]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn scores(store: &GraphStore, measure: Measure) -> Result<HashMap<NodeId, f64>> {
    let to_f64 = |counts: HashMap<NodeId, usize>| {
        counts
            .into_iter()
            .map(|(id, c)| (id, c as f64))
            .collect::<HashMap<_, _>>()
    };
    Ok(match measure {
        Measure::Pagerank => store.pagerank()?,
        Measure::Degree => store.degree_centrality(),
        Measure::Closeness => store.closeness_centrality(),
        Measure::Betweenness => store.betweenness_centrality(),
        Measure::Clustering => store.clustering(),
        Measure::SquareClustering => store.square_clustering(),
        Measure::Cliques => to_f64(store.number_of_cliques()),
    })
}

fn ranked(values: HashMap<NodeId, f64>, top: Option<usize>) -> Vec<(NodeId, f64)> {
    let mut rows: Vec<(NodeId, f64)> = values.into_iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(n) = top {
        rows.truncate(n);
    }
    rows
}

fn run_measure(
    store: &GraphStore,
    measure: Measure,
    top: Option<usize>,
    format: &OutputFormat,
) -> Result<()> {
    let rows = ranked(scores(store, measure)?, top);

    match format {
        OutputFormat::Json => {
            let list: Vec<serde_json::Value> = rows
                .iter()
                .map(|(id, score)| serde_json::json!({ "node": id, "score": score }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        OutputFormat::Csv => {
            println!("node,score");
            for (id, score) in &rows {
                println!("{},{}", format_csv_value(id.as_str()), score);
            }
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Node", "Name", "Score"]);
            for (id, score) in &rows {
                let name = get_name(id.as_str()).unwrap_or(id.as_str());
                table.add_row(vec![id.to_string(), name.to_string(), format!("{:.6}", score)]);
            }
            println!("{}", table);
            println!("{} row(s)", rows.len());
        }
    }
    Ok(())
}

fn run_merge(
    store: &mut GraphStore,
    subject: &str,
    nodes: &[String],
    output: Option<&Path>,
) -> Result<()> {
    let moved = store
        .merge_nodes(subject, nodes)
        .with_context(|| format!("merging into {}", subject))?;
    tracing::info!(subject, moved, "merge complete");

    match output {
        Some(path) => store
            .save_json(path)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", store.to_snapshot().to_json()?),
    }
    Ok(())
}

fn run_name(uris: &[String], format: &OutputFormat) -> Result<()> {
    let mut names = Vec::with_capacity(uris.len());
    for uri in uris {
        names.push((uri.as_str(), get_name(uri)?));
    }

    match format {
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = names
                .iter()
                .map(|(uri, name)| (uri.to_string(), serde_json::Value::from(*name)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&object)?);
        }
        OutputFormat::Csv => {
            println!("uri,name");
            for (uri, name) in &names {
                println!("{},{}", format_csv_value(uri), format_csv_value(name));
            }
        }
        OutputFormat::Table => {
            for (_, name) in &names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
