use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pkgsmith::{AppError, DeployRequest};

#[derive(Parser)]
#[command(name = "pkgsmith")]
#[command(version)]
#[command(about = "Deploy ready-to-use R package scaffolding", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new package project from the bundled template
    #[clap(visible_alias = "n")]
    New {
        /// Destination directory for the new package
        dest: PathBuf,
        /// Package name (defaults to the final segment of DEST)
        #[arg(short, long)]
        name: Option<String>,
        /// Skip the hidden .agents/ configuration directory
        #[arg(long)]
        no_agents: bool,
        /// Skip the dev/ maintainer scripts
        #[arg(long)]
        no_dev: bool,
        /// Replace the destination if it already exists
        #[arg(long)]
        overwrite: bool,
        /// Skip git repository initialization
        #[arg(long)]
        no_git: bool,
        /// Skip the .Rproj project file
        #[arg(long)]
        no_rproj: bool,
        /// Open the project in RStudio after creation
        #[arg(long)]
        open: bool,
        /// Suppress progress output and prompts
        #[arg(short, long)]
        quiet: bool,
        /// Print the deployment report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::New {
            dest,
            name,
            no_agents,
            no_dev,
            overwrite,
            no_git,
            no_rproj,
            open,
            quiet,
            json,
        } => {
            let request = DeployRequest {
                dest,
                name,
                agents: !no_agents,
                dev_scripts: !no_dev,
                overwrite,
                git: !no_git,
                rproj: !no_rproj,
                open,
                quiet: quiet || json,
                interactive: std::io::stdin().is_terminal(),
            };

            pkgsmith::new_package(&request).and_then(|report| {
                if json {
                    let rendered = serde_json::to_string_pretty(&report)
                        .map_err(|e| AppError::config_error(e.to_string()))?;
                    println!("{rendered}");
                }
                Ok(())
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
