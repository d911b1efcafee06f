pub mod create;
pub mod list;
pub mod status;
pub mod upload;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eln")]
#[command(version)]
#[command(about = "A command-line client for RSpace-compatible lab notebooks.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the ELN server. Falls back to the RSPACE_URL
    /// environment variable.
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// API key for the server. Prefer the RSPACE_API_KEY environment
    /// variable: keys given here end up in your shell history.
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Reduce output; repeat to reduce it further
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the server is up and the API key works
    #[command(alias = "s")]
    Status,
    /// Create a document from text, markdown or JSON
    #[command(alias = "c")]
    Create(create::CreateArgs),
    /// Upload an experiment directory and create a summary document
    #[command(alias = "u")]
    Upload(upload::UploadArgs),
    /// List the documents on the server
    #[command(alias = "ls")]
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
