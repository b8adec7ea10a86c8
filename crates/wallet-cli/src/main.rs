//! Wallet native patcher CLI
//!
//! Applies the wallet provisioning patches to a generated native project.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} native project patcher", "wallet".green().bold());
            println!();
            println!("Run {} for available commands.", "wallet --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Android {
            project_root,
            props,
            dry_run,
        } => commands::run_android(&project_root, &props, dry_run),
        Commands::Ios { info_plist, props } => commands::run_ios(&info_plist, &props),
        Commands::Prebuild {
            project_root,
            info_plist,
            props,
        } => commands::run_prebuild(&project_root, info_plist.as_deref(), &props),
        Commands::Check { project_root } => commands::run_check(&project_root),
        Commands::Eject { project_root } => commands::run_eject(&project_root),
    }
}
