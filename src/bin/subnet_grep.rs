use biodivine_lib_subnet::adjacency::{MalformedRowPolicy, ScanConfig};
use biodivine_lib_subnet::{subnet_grep, RegulonSet, SubnetConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Extract the second-order subnetwork of a query gene from a regulon table and
/// an adjacency table, and export it as a GEXF graph.
#[derive(Parser)]
#[command(name = "subnet-grep", version)]
struct Cli {
    /// Regulon table with `regulon,target,weight` rows.
    #[arg(short, long)]
    regulons: PathBuf,

    /// Adjacency table with `source,target,weight` rows.
    #[arg(short, long)]
    adjacencies: PathBuf,

    /// The query gene.
    #[arg(short, long)]
    gene: String,

    /// Directory for the default `<gene>_subnetwork.gexf` file.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Explicit output file (overrides `--output-dir`).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail on the first malformed adjacency row instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// The adjacency table starts with a header row.
    #[arg(long)]
    skip_header: bool,

    /// Also print the subnetwork in GraphViz `.dot` format to stdout.
    #[arg(long)]
    dot: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let regulons = match RegulonSet::try_from_table_file(&cli.regulons) {
        Ok(regulons) => regulons,
        Err(e) => {
            error!("Cannot load regulons: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Loaded {} regulon(s).", regulons.len());

    let config = SubnetConfig {
        scan: ScanConfig {
            malformed_rows: if cli.strict {
                MalformedRowPolicy::Fail
            } else {
                MalformedRowPolicy::Skip
            },
            skip_header: cli.skip_header,
        },
        output_dir: cli.output_dir,
        output_file: cli.output,
    };

    match subnet_grep(&regulons, &cli.adjacencies, &cli.gene, &config) {
        Ok(output) => {
            info!(
                "Subnetwork of {}: {} node(s), {} interaction(s), {} malformed row(s) skipped.",
                cli.gene,
                output.graph.num_nodes(),
                output.graph.num_interactions(),
                output.report.skipped_count()
            );
            if cli.dot {
                print!("{}", output.graph.to_dot());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
