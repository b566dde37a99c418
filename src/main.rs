use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use textscrub::cli;

#[derive(Parser)]
#[command(name = "textscrub", version, about = "PII and credential redaction for free text")]
struct Cli {
    /// Path to a YAML engine config. Defaults to `.textscrub.yml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Redact a file (or stdin) to stdout.
    Redact {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,

        /// Emit a JSON per-category count summary on stderr.
        #[arg(long)]
        report: bool,
    },
    /// Scan files for sensitive content; exits non-zero on findings.
    Scan {
        /// Scan git staged files instead of a path.
        #[arg(long)]
        staged: bool,

        /// File or directory to scan.
        path: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let engine = cli::build_engine(args.config.as_deref())?;

    match args.command {
        Command::Redact { file, report } => {
            cli::redact::run(&engine, file.as_deref(), report)?;
        }
        Command::Scan { staged, path } => {
            let findings = cli::scan::run(&engine, staged, path.as_deref())?;
            if findings > 0 {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
