use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use barricada::config::AnalysisConfig;
use barricada::graph::RoadGraph;
use barricada::{betweenness, compare_rankings, greedy_blockade, match_events, node_criticality};
use barricada::{io, network, score};

#[derive(Parser)]
#[command(name = "barricada")]
#[command(about = "Road network disruption analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GraphInput {
    /// Node table CSV (id,name,lat,lon); built-in network when omitted
    #[arg(long)]
    nodes: Option<PathBuf>,
    /// Edge table CSV (from_id,to_id,weight_km)
    #[arg(long)]
    edges: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and write the output tables
    Analyze {
        #[command(flatten)]
        input: GraphInput,
        /// Observed event table CSV (lat,lon)
        #[arg(long)]
        events: Option<PathBuf>,
        /// Output directory
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
        /// Penalty per unreachable ordered pair, in km-equivalents
        #[arg(long)]
        penalty: Option<f64>,
        /// Greedy solver step budget
        #[arg(long)]
        steps: Option<usize>,
        /// Top-K set size for the overlap comparison
        #[arg(long)]
        top_k: Option<usize>,
        /// Seed for the permutation p-value
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Rank nodes by single-removal impact
    Criticality {
        #[command(flatten)]
        input: GraphInput,
        /// How many rows to print
        #[arg(long, default_value = "15")]
        top: usize,
    },
    /// Compute the greedy optimal blockade sequence
    Blockade {
        #[command(flatten)]
        input: GraphInput,
        /// Greedy solver step budget
        #[arg(long)]
        steps: Option<usize>,
    },
}

fn load_graph(input: &GraphInput) -> Result<RoadGraph> {
    let (nodes, edges) = match (&input.nodes, &input.edges) {
        (Some(nodes_path), Some(edges_path)) => (
            io::read_nodes(nodes_path).context("reading node table")?,
            io::read_edges(edges_path).context("reading edge table")?,
        ),
        (None, None) => network::mexico_federal_highways(),
        _ => anyhow::bail!("--nodes and --edges must be given together"),
    };
    let graph = RoadGraph::build(nodes, &edges)?;
    println!(
        "Graph built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!("Connected: {}", graph.is_connected());
    Ok(graph)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            events,
            out,
            penalty,
            steps,
            top_k,
            seed,
        } => {
            let mut config = AnalysisConfig::default();
            if let Some(penalty) = penalty {
                config.penalty_km = penalty;
            }
            if let Some(steps) = steps {
                config.steps = steps;
            }
            if let Some(top_k) = top_k {
                config.top_k = top_k;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }

            let graph = load_graph(&input)?;
            let baseline = score::reachable_pair_cost(&graph);
            println!("Baseline total pairwise km: {baseline:.0}");

            let start = Instant::now();
            let tables = betweenness(&graph);
            println!(
                "Betweenness computed in {:.2}s",
                start.elapsed().as_secs_f64()
            );

            println!("Computing node removal impact...");
            let criticality = node_criticality(&graph, &config);

            println!("Computing greedy blockade (up to {} steps)...", config.steps);
            let solve_start = Instant::now();
            let sequence = greedy_blockade(&graph, &config);
            for step in &sequence.steps {
                println!(
                    "  step {:2}: {:<22} cumulative +{:.1}%",
                    step.step, step.name, step.cumulative_pct
                );
            }
            println!(
                "Solver finished in {:.2}s ({:?})",
                solve_start.elapsed().as_secs_f64(),
                sequence.termination
            );

            let comparison = match &events {
                Some(events_path) => {
                    let events = io::read_events(events_path).context("reading event table")?;
                    println!("Matching {} events to network nodes...", events.len());
                    let counts = match_events(&events, &graph);
                    let report = compare_rankings(&tables.nodes, &counts, &config);
                    println!(
                        "Spearman rho={:.4}, p={:.4}",
                        report.summary.spearman_rho, report.summary.spearman_p
                    );
                    println!(
                        "Jaccard overlap (top-{}): {:.3}",
                        config.top_k, report.summary.jaccard_top_k
                    );
                    Some(report)
                }
                None => None,
            };

            io::write_outputs(&out, &tables, &criticality, &sequence, comparison.as_ref())?;
            println!("All outputs saved to {}", out.display());
        }
        Commands::Criticality { input, top } => {
            let graph = load_graph(&input)?;
            println!("Computing node removal impact...");
            let rows = node_criticality(&graph, &AnalysisConfig::default());
            for row in rows.iter().take(top) {
                match row.delta_pct {
                    Some(delta) => println!(
                        "  {:<5} {:<22} connected  delta {:+.2}%",
                        row.node, row.name, delta
                    ),
                    None => println!(
                        "  {:<5} {:<22} splits into {} components (ratio {:.3})",
                        row.node, row.name, row.n_components, row.disruption_ratio
                    ),
                }
            }
        }
        Commands::Blockade { input, steps } => {
            let mut config = AnalysisConfig::default();
            if let Some(steps) = steps {
                config.steps = steps;
            }
            let graph = load_graph(&input)?;
            println!("Computing greedy blockade (up to {} steps)...", config.steps);
            let sequence = greedy_blockade(&graph, &config);
            for step in &sequence.steps {
                println!(
                    "  step {:2}: {:<22} step +{:.1}%  cumulative +{:.1}%",
                    step.step, step.name, step.step_impact_pct, step.cumulative_pct
                );
            }
            println!("Terminated: {:?}", sequence.termination);
        }
    }

    Ok(())
}
