use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use obo_graph_path::{convert_file, ConversionConfig, Error};

/// Convert an OBO ontology into term.txt, term2term.txt and graph_path.txt.
#[derive(Parser)]
#[command(name = "obo-to-term-tables", version, about)]
struct Cli {
    /// Ontology in OBO format
    obofile: PathBuf,

    /// Existing directory the three tables are written to
    outdir: PathBuf,

    /// Comma separated root term names
    #[arg(short = 'r', long = "root-nodes", alias = "root_nodes", value_delimiter = ',')]
    root_nodes: Option<Vec<String>>,

    /// Namespace for terms without one (default: the root name if there is
    /// exactly one root, otherwise "all")
    #[arg(long)]
    default_namespace: Option<String>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort if any path from a root is longer than this many edges
    #[arg(long)]
    max_depth: Option<usize>,

    /// Abort if more than this many paths are enumerated
    #[arg(long)]
    max_paths: Option<usize>,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    no_color: bool,
}

fn init_tracing(cli: &Cli) {
    // --quiet   → off
    // --verbose → RUST_LOG if set, else info
    // default   → warn, so skipped stanzas are still reported
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> obo_graph_path::Result<ConversionConfig> {
    let mut config = match &cli.config {
        Some(path) => ConversionConfig::from_json_file(path)?,
        None => ConversionConfig::default(),
    };
    if let Some(roots) = &cli.root_nodes {
        config.root_nodes = roots.clone();
    }
    if let Some(ns) = &cli.default_namespace {
        config.default_namespace = Some(ns.clone());
    }
    if cli.max_depth.is_some() {
        config.limits.max_depth = cli.max_depth;
    }
    if cli.max_paths.is_some() {
        config.limits.max_paths = cli.max_paths;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = load_config(&cli)
        .and_then(|config| convert_file(&cli.obofile, &cli.outdir, &config));

    match result {
        Ok(stats) => {
            tracing::info!(
                terms = stats.terms,
                relations = stats.relations,
                graph_paths = stats.graph_paths,
                "conversion finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, Error::NoRootNodes { .. }) {
                eprintln!(
                    "help: if {} has different root nodes, pass them with --root-nodes",
                    cli.obofile.display(),
                );
            }
            ExitCode::FAILURE
        }
    }
}
