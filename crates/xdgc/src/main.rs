//! xdgc CLI - print XDG base directories.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process::ExitCode;
use xdgc_core::{DirectoryCategory, HomeFallback, ProcessEnv, Resolver, SearchPath};

mod commands;
mod report;

use report::Reporter;

#[derive(Parser)]
#[command(name = "xdgc")]
#[command(version, about = "Print XDG base directories")]
struct Cli {
    /// Ask the OS for the home directory when HOME is unset
    #[arg(long, global = true)]
    platform_home: bool,

    /// Explain on stderr where each path came from
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one base directory
    Get {
        /// data-home, config-home, state-home, cache-home, bin-home or runtime-dir
        /// (the variable name, e.g. XDG_DATA_HOME, is accepted too)
        category: DirectoryCategory,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print every base directory
    List {
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Print a search-path variable (data or config), unsplit
    SearchPath {
        /// data or config
        kind: SearchPath,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let home_fallback = if cli.platform_home {
        HomeFallback::Platform
    } else {
        HomeFallback::Fail
    };
    let resolver = Resolver::new(ProcessEnv).with_home_fallback(home_fallback);
    let reporter = Reporter::new(cli.verbose);

    let result = match cli.command {
        Commands::Get { category, format } => {
            commands::get::run(&resolver, &reporter, category, format)
        }
        Commands::List { format } => commands::list::run(&resolver, &reporter, format),
        Commands::SearchPath { kind, format } => {
            commands::search_path::run(&resolver, &reporter, kind, format)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {e:#}", "error:".red().bold());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
