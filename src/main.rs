use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use transversal::prelude::*;
use transversal::validate::{cross_check, validate_bundled_graphs};

#[derive(Parser)]
#[command(name = "transversal")]
#[command(about = "Minimal hypergraph transversal enumeration", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the distinguishing-columns hypergraph of a delimited table
    Derive {
        /// Input table; the first row is the header
        input: PathBuf,
        /// Output hypergraph file
        #[arg(short, long)]
        output: PathBuf,
        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
        /// Read at most this many records
        #[arg(long)]
        max_records: Option<usize>,
        /// Number of derivation workers (default: auto-detect)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Reduce a hypergraph file to an antichain
    Reduce {
        /// Input hypergraph file
        input: PathBuf,
        /// Output hypergraph file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Enumerate the minimal transversals of a hypergraph file
    Enumerate {
        /// Input hypergraph file
        input: PathBuf,
        /// Algorithm: standard, legacy or brute_force
        #[arg(short, long, default_value = "standard")]
        strategy: Strategy,
        /// Write the transversals as a hypergraph file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Vertex relabeling applied before the search
        #[arg(long, value_enum, default_value_t = Order::None)]
        order: Order,
        /// Explicit relabeling, e.g. `2,3,0,1` maps vertex 0 to 2 (after --order)
        #[arg(long)]
        permutation: Option<Permutation>,
        /// Relabel vertices by a random permutation with this seed (after --permutation)
        #[arg(long)]
        shuffle_seed: Option<u64>,
        /// Collect oracle and per-transversal statistics and log a summary
        #[arg(long)]
        trace: bool,
        /// Wall-clock budget for brute force, in seconds
        #[arg(long, default_value_t = 12 * 60 * 60)]
        budget_secs: u64,
    },

    /// Validate the bundled reference graphs, or cross-check strategies on a file
    Validate {
        /// Hypergraph file to cross-check instead of the bundled graphs
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Wall-clock budget for brute force, in seconds
        #[arg(long, default_value_t = 600)]
        budget_secs: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    /// Keep vertex ids
    None,
    /// Highest degree first
    Degree,
    /// Reverse vertex ids
    Reverse,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Derive {
            input,
            output,
            delimiter,
            max_records,
            workers,
        } => derive(&input, &output, delimiter, max_records, workers),
        Command::Reduce { input, output } => {
            let mut graph = load(&input)?;
            graph.reduce();
            save(&graph, &output)
        }
        Command::Enumerate {
            input,
            strategy,
            output,
            order,
            permutation,
            shuffle_seed,
            trace,
            budget_secs,
        } => {
            let config = EnumerateConfig {
                strategy,
                collect_oracle_stats: trace,
                collect_hitting_set_stats: trace,
                brute_force_budget: Duration::from_secs(budget_secs),
            };
            let relabeling = Relabeling {
                order,
                permutation,
                shuffle_seed,
            };
            run_enumerate(&input, output.as_deref(), &relabeling, &config)
        }
        Command::Validate { graph, budget_secs } => {
            let budget = Duration::from_secs(budget_secs);
            match graph {
                None => match validate_bundled_graphs() {
                    Ok(()) => {
                        println!("Validation OK: bundled reference graphs are correct.");
                        Ok(())
                    }
                    Err(e) => bail!("Validation FAILED: {e}"),
                },
                Some(path) => {
                    let mut graph = load(&path)?;
                    graph.reduce();
                    match cross_check(&graph, budget) {
                        Ok(count) => {
                            println!("Validation OK: all strategies agree on {count} transversals.");
                            Ok(())
                        }
                        Err(e) => bail!("Validation FAILED: {e}"),
                    }
                }
            }
        }
    }
}

fn load(path: &Path) -> Result<Hypergraph> {
    Hypergraph::load(path).with_context(|| format!("failed to load {}", path.display()))
}

fn save(graph: &Hypergraph, path: &Path) -> Result<()> {
    let skipped = graph
        .save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    info!(
        path = %path.display(),
        vertices = graph.num_vertices(),
        edges = graph.edge_count() - skipped,
        skipped,
        "saved hypergraph"
    );
    Ok(())
}

/// Table → hypergraph pipeline: static columns are dropped, columns ordered by ascending
/// uniqueness and records sorted before derivation; vertex ids are reversed afterwards so the
/// most distinguishing column becomes vertex 0.
fn derive(
    input: &Path,
    output: &Path,
    delimiter: char,
    max_records: Option<usize>,
    workers: Option<usize>,
) -> Result<()> {
    let Ok(delimiter) = u8::try_from(delimiter) else {
        bail!("delimiter {delimiter:?} is not a single byte");
    };
    let mut table = Table::load(input, delimiter, max_records)
        .with_context(|| format!("failed to load table {}", input.display()))?;

    let removed = table.delete_static_columns();
    table.sort_columns_by_uniqueness(true);
    table.sort_records();
    info!(removed, columns = table.num_columns(), "prepared table");

    let mut config = DeriveConfig::default();
    if let Some(workers) = workers {
        config.workers = workers;
    }
    let mut graph = Hypergraph::from_table(&table, &config)?;
    if graph.has_empty_edge() {
        bail!(
            "{} has identical records; no column combination is unique",
            input.display()
        );
    }
    graph.reverse_vertex_order();
    let dropped = graph.drop_unused_vertices();
    info!(dropped, "dropped unused vertices");
    save(&graph, output)
}

/// Vertex relabelings applied before the search, in field order.
struct Relabeling {
    order: Order,
    permutation: Option<Permutation>,
    shuffle_seed: Option<u64>,
}

impl Relabeling {
    /// The composed permutation for `graph`.
    fn resolve(&self, graph: &Hypergraph) -> Result<Permutation> {
        let n = graph.num_vertices();
        let mut relabel = match self.order {
            Order::None => Permutation::identity(n),
            Order::Degree => graph.degree_order(),
            Order::Reverse => Permutation::reversed(n),
        };
        if let Some(explicit) = &self.permutation {
            if explicit.len() != n {
                bail!(
                    "--permutation has {} entries but the graph has {n} vertices",
                    explicit.len()
                );
            }
            relabel = relabel.then(explicit);
        }
        if let Some(seed) = self.shuffle_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            relabel = relabel.then(&Permutation::random(n, &mut rng));
        }
        Ok(relabel)
    }
}

fn run_enumerate(
    input: &Path,
    output: Option<&Path>,
    relabeling: &Relabeling,
    config: &EnumerateConfig,
) -> Result<()> {
    let mut graph = load(input)?;
    graph.reduce();
    let n = graph.num_vertices();

    // Results are mapped back so they are written in the input's vertex ids.
    let relabel = relabeling.resolve(&graph)?;
    graph.permute(&relabel)?;

    let mut trace = TraceTable::new();
    let mut result = graph.enumerate(config, &mut trace)?;
    result.permute(&relabel.inverse())?;

    println!(
        "{} minimal transversals ({} vertices, {} edges, strategy {})",
        result.edge_count(),
        n,
        graph.edge_count(),
        config.strategy
    );

    if config.collect_oracle_stats {
        let calls = trace.oracle.len();
        let oracle_time: Duration = trace.oracle.iter().map(|r| r.elapsed).sum();
        let product_iterations: u64 = trace.oracle.iter().map(|r| r.iterations).sum();
        let max_delay = trace.hitting_sets.iter().map(|r| r.delay).max().unwrap_or_default();
        info!(
            calls,
            oracle_ms = oracle_time.as_millis() as u64,
            product_iterations,
            max_delay_us = max_delay.as_micros() as u64,
            "trace summary"
        );
    }

    match output {
        Some(path) => save(&result, path),
        None => {
            print!("{result}");
            Ok(())
        }
    }
}
