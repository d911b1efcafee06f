use std::path::PathBuf;

use colored::*;

use eln_common::config::Config;
use eln_common::render;
use eln_common::success;
use eln_core::client::ElnClient;
use eln_core::documents;

use crate::cprint;
use crate::terminal::{format, print};

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Name of the document
    pub name: String,

    /// Source file: markdown and JSON are converted to HTML, anything
    /// else is used as the field content directly. Omit for an empty
    /// document.
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Tags for the document (the API tag is always added)
    #[arg(short, long, num_args = 1..)]
    pub tags: Vec<String>,

    /// ID of the folder or notebook to file the document under
    #[arg(short = 'i', long, value_name = "ID")]
    pub parent_id: Option<u64>,

    /// Print the generated HTML to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Render the source and stop; the server is never contacted
    #[arg(short, long)]
    pub dry: bool,
}

fn render_source(args: &CreateArgs) -> anyhow::Result<String> {
    match &args.source {
        Some(path) => render::file_to_html(path),
        None => Ok(String::new()),
    }
}

/// `--dry` path: render and print without credentials or network.
pub fn dry_run(args: &CreateArgs) -> anyhow::Result<()> {
    let html = render_source(args)?;
    cprint!(&html);
    Ok(())
}

pub async fn create(client: &ElnClient, args: CreateArgs, cfg: &Config) -> anyhow::Result<()> {
    print::header("creating document", cfg.quiet);

    let html = render_source(&args)?;
    if args.print {
        cprint!(&html);
    }

    if cfg.quiet == 0 {
        let before = documents::count(client).await?;
        print::print_status(format!("{} documents on the server before creation", before));
    }

    let doc = documents::create(client, &args.name, html, args.tags, args.parent_id).await?;

    success!(
        "Created document {}",
        doc.global_id.as_deref().unwrap_or(&doc.id.to_string()).bold()
    );

    if cfg.quiet < 2 {
        print::tree_head(0, &doc.name);
        print::as_tree_one_level(format::document_details(&doc));
    }

    if cfg.quiet == 0 {
        let after = documents::count(client).await?;
        print::print_status(format!("{} documents on the server after creation", after));
    }

    Ok(())
}
