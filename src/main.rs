use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, warn};

use socnetvis::{engine, export, store, Error, VerifyReport};

#[derive(Parser)]
#[command(name = "socnetvis")]
#[command(about = "Keep social-network node files mutually consistent", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the node JSON files
    #[arg(long, short, global = true, default_value = ".")]
    dir: PathBuf,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show linkage errors for nodes in the collection
    Verify,

    /// Repair improperly linked nodes and add referenced nodes that don't exist
    Fix,

    /// Add new node files with no connections and the specified names
    Add {
        /// Names to add
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Remove an identity from every node's lists and delete its record
    Remove {
        /// Name to remove
        name: String,
    },

    /// Rename an identity, merging its connections if the new name exists
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
    },

    /// Create a network visualization as an HTML file
    Show {
        /// Output file
        #[arg(long, short, default_value = "socnetvis.html")]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> socnetvis::Result<()> {
    match cli.command {
        Commands::Verify => {
            let mut nodes = store::load_dir(&cli.dir)?;
            let report = engine::verify(&mut nodes, false);
            print_report(&report);
            if !report.consistent {
                return Err(Error::InconsistentCollection { problems: report.problems() });
            }
            println!("{} nodes verified", nodes.len());
        }
        Commands::Fix => {
            let mut nodes = store::load_dir(&cli.dir)?;
            let report = engine::verify(&mut nodes, true);
            print_report(&report);
            store::save_dir(&cli.dir, &nodes)?;
            if !report.consistent {
                warn!(
                    conflicts = report.conflicts(),
                    "collection saved but still inconsistent; conflicts need manual resolution"
                );
            }
        }
        Commands::Add { names } => {
            for name in &names {
                let path = store::add_empty(&cli.dir, name)?;
                println!("creating {}", path.display());
            }
        }
        Commands::Remove { name } => {
            let mut nodes = store::load_dir(&cli.dir)?;
            for diag in engine::identity::remove(&mut nodes, &name) {
                println!("{diag}");
            }
            store::save_dir(&cli.dir, &nodes)?;
        }
        Commands::Rename { old, new } => {
            let mut nodes = store::load_dir(&cli.dir)?;
            for diag in engine::identity::rename(&mut nodes, &old, &new) {
                println!("{diag}");
            }
            store::save_dir(&cli.dir, &nodes)?;
        }
        Commands::Show { out } => {
            let mut nodes = store::load_dir(&cli.dir)?;
            let report = engine::verify(&mut nodes, false);
            print_report(&report);
            if !report.consistent {
                warn!("nodes failed to verify, not generating visualization");
                return Err(Error::InconsistentCollection { problems: report.problems() });
            }
            let mut file = std::fs::File::create(&out)?;
            export::render_html(&nodes, &mut file)?;
            println!("wrote {}", out.display());
        }
    }
    Ok(())
}

fn print_report(report: &VerifyReport) {
    for diag in &report.diagnostics {
        println!("{diag}");
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "socnetvis=debug" } else { "socnetvis=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
