use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod analyze;

#[derive(Parser)]
#[command(about = "scores resumes against job descriptions")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Analyze one resume and print an ATS report
    Analyze(analyze::AnalyzeArgs),
    /// Start the upload web service
    Listen,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Analyze(args)) => {
            analyze::run(args).await?;
        }
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
