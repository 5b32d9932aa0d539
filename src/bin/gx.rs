//! CLI entry point for the `gx` graph algorithms driver.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_engine::cli::commands;
use graph_engine::{EngineConfig, GraphError};

#[derive(Parser)]
#[command(
    name = "gx",
    about = "Run graph algorithms over a JSON edge-list document"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex/edge counts of a graph document
    Info {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Breadth-first hop distances
    Bfs {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Source vertex
        source: usize,
    },
    /// Depth-first discovery order
    Dfs {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Source vertex
        source: usize,
    },
    /// Dijkstra shortest paths (non-negative weights)
    Dijkstra {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Source vertex
        source: usize,
        /// Stop at this target and print the path
        #[arg(long)]
        target: Option<usize>,
    },
    /// Bellman-Ford shortest paths (negative weights allowed)
    BellmanFord {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Source vertex
        source: usize,
    },
    /// Floyd-Warshall all-pairs distance matrix
    FloydWarshall {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// All-pairs distances via parallel Dijkstra
    AllPairs {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Worker threads (0 = one per core; defaults to GRAPH_ENGINE_THREADS)
        #[arg(long)]
        threads: Option<usize>,
    },
    /// A* search with a zero heuristic
    Astar {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Source vertex
        source: usize,
        /// Target vertex
        target: usize,
    },
    /// Strongly connected components (Tarjan)
    Scc {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Weakly connected components (union-find)
    Components {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Minimum spanning forest (Kruskal)
    Mst {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Topological order (Kahn)
    Topo {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Bipartite 2-coloring
    Bipartite {
        /// Path to the graph JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json, &mut out),
        Commands::Bfs { file, source } => commands::cmd_bfs(&file, source, json, &mut out),
        Commands::Dfs { file, source } => commands::cmd_dfs(&file, source, json, &mut out),
        Commands::Dijkstra {
            file,
            source,
            target,
        } => commands::cmd_dijkstra(&file, source, target, json, &mut out),
        Commands::BellmanFord { file, source } => {
            commands::cmd_bellman_ford(&file, source, json, &mut out)
        }
        Commands::FloydWarshall { file } => commands::cmd_floyd_warshall(&file, json, &mut out),
        Commands::AllPairs { file, threads } => {
            let mut config = EngineConfig::from_env();
            if let Some(n) = threads {
                config = config.with_worker_threads(n);
            }
            commands::cmd_all_pairs(&file, &config, json, &mut out)
        }
        Commands::Astar {
            file,
            source,
            target,
        } => commands::cmd_astar(&file, source, target, json, &mut out),
        Commands::Scc { file } => commands::cmd_scc(&file, json, &mut out),
        Commands::Components { file } => commands::cmd_components(&file, json, &mut out),
        Commands::Mst { file } => commands::cmd_mst(&file, json, &mut out),
        Commands::Topo { file } => commands::cmd_topo(&file, json, &mut out),
        Commands::Bipartite { file } => commands::cmd_bipartite(&file, json, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) | GraphError::Json(_) => 1,
            GraphError::InvalidEdge { .. }
            | GraphError::InvalidWeight { .. } => 2,
            GraphError::OutOfRange { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
