use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agentforge")]
#[command(
    version,
    about = "Knowledge-base validator and configuration wizard for AI agent deployment bundles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a starter config and sample knowledge base
    Init {
        #[arg(long, short, help = "Overwrite existing configuration")]
        force: bool,
    },

    /// Validate knowledge base files
    Validate {
        #[arg(help = "Markdown files or directories to validate")]
        paths: Vec<PathBuf>,
        #[arg(long, help = "Write the full report as JSON to this path")]
        report: Option<PathBuf>,
        #[arg(
            long,
            default_value = "warning",
            help = "Minimum severity to print: error, warning, info"
        )]
        severity: String,
    },

    /// Assemble and write the deployment bundle
    Export {
        #[arg(
            long,
            short,
            default_value = "agentforge.toml",
            help = "Seed configuration file"
        )]
        config: PathBuf,
        #[arg(long, short, default_value = "dist", help = "Output directory")]
        output: PathBuf,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31magentforge encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Init { force } => {
            agentforge::cli::commands::init::run(force)?;
        }
        Commands::Validate {
            paths,
            report,
            severity,
        } => {
            agentforge::cli::commands::validate::run(paths, report, &severity)?;
        }
        Commands::Export { config, output } => {
            agentforge::cli::commands::export::run(&config, &output)?;
        }
    }

    Ok(())
}
