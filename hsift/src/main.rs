//! hsift: select nodes from HTML documents with JSON or argument filters.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hsift")]
#[command(about = "hsift - select nodes from HTML documents")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the nodes of an HTML file that match a filter
    #[command(visible_alias = "f")]
    Filter {
        /// HTML file to read ("-" for stdin)
        file: PathBuf,

        /// Filter arguments (e.g., type=element attr.href re2.data=^h[1-6]$)
        filters: Vec<String>,

        /// JSON filter config; filter arguments are applied on top of it
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,

        /// Print [] instead of failing when nothing matches
        #[arg(short = 'e', long = "allow-empty")]
        allow_empty: bool,

        /// Indentation for JSON output (default: tab, or the settings file)
        #[arg(short = 'i', long = "indent")]
        indent: Option<String>,
    },

    /// Print the filter built from a config and/or arguments as JSON
    #[command(visible_alias = "c")]
    Compile {
        /// Filter arguments
        filters: Vec<String>,

        /// JSON filter config; filter arguments are applied on top of it
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,

        /// Indentation for JSON output (default: tab, or the settings file)
        #[arg(short = 'i', long = "indent")]
        indent: Option<String>,
    },

    /// Show or create the settings file
    Settings {
        /// Write a settings file with default values if none exists
        #[arg(long = "init")]
        init: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Filter { file, filters, config, allow_empty, indent } => {
            let opts = commands::FilterOptions {
                allow_empty,
                indent,
            };
            commands::filter(&file, config.as_deref(), &filters, &opts)
        }
        Commands::Compile { filters, config, indent } => {
            commands::compile(config.as_deref(), &filters, indent.as_deref())
        }
        Commands::Settings { init } => commands::settings(init),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
}
