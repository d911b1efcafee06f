use colored::*;

use eln_common::config::Config;
use eln_common::document::DocumentInfo;
use eln_core::client::ElnClient;
use eln_core::documents;

use crate::cprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn list(client: &ElnClient, cfg: &Config) -> anyhow::Result<()> {
    let sp = spinner::spinner("Fetching documents...");
    let result = documents::list_all(client).await;
    sp.finish_and_clear();
    let docs = result?;

    if docs.is_empty() {
        print::header("zero documents", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header("documents", cfg.quiet);
    print_documents(&docs, cfg);
    print_summary(docs.len(), cfg);
    Ok(())
}

fn print_documents(docs: &[DocumentInfo], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for (idx, doc) in docs.iter().enumerate() {
        print::tree_head(idx, &doc.name);
        print::as_tree_one_level(format::document_details(doc));
        if idx + 1 != docs.len() {
            cprint!();
        }
    }
}

fn print_summary(count: usize, cfg: &Config) {
    let unit = if count == 1 { "document" } else { "documents" };
    let count: ColoredString = count.to_string().bold().green();
    let output = format!("{count} {unit} on the server").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&format!("{}", output));
        }
        _ => {
            eln_common::success!("{}", output);
        }
    }
}
