use std::path::PathBuf;

use colored::*;

use eln_common::config::Config;
use eln_common::success;
use eln_core::client::ElnClient;
use eln_core::experiment::{self, FileStatus, UploadOptions};

use crate::cprint;
use crate::terminal::{format, print, spinner};

#[derive(clap::Args)]
pub struct UploadArgs {
    /// Experiment directory to upload
    pub path: PathBuf,

    /// File extensions to skip, e.g. --ignore .tif .dm4
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub ignore: Vec<String>,

    /// Maximum individual file size to upload, in MB
    #[arg(long, default_value_t = 2.0, value_name = "MB")]
    pub max_filesize: f64,

    /// Tags for the summary document (the API tag is always added)
    #[arg(short, long, num_args = 1..)]
    pub tags: Vec<String>,

    /// ID of the folder or notebook to file the summary under
    #[arg(short = 'i', long, value_name = "ID")]
    pub parent_id: Option<u64>,
}

pub async fn upload(client: &ElnClient, args: UploadArgs, cfg: &Config) -> anyhow::Result<()> {
    print::header("experiment upload", cfg.quiet);

    let opts = UploadOptions {
        max_filesize_mb: args.max_filesize,
        ignore: args.ignore,
        tags: args.tags,
        parent_folder_id: args.parent_id,
    };

    let bar = spinner::upload_bar();
    bar.set_message(format!("Uploading {}", args.path.display()));
    let progress: experiment::ProgressFn = {
        let bar = bar.clone();
        Box::new(move |done, total| {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
        })
    };

    let report = experiment::upload_experiment(client, &args.path, &opts, Some(progress)).await;
    bar.finish_and_clear();
    let report = report?;

    success!(
        "Uploaded {} of {} files",
        report.uploaded().to_string().bold(),
        report.files.len()
    );

    if cfg.quiet < 2 {
        for outcome in &report.files {
            let name = outcome.path.display().to_string();
            let line = match outcome.status {
                FileStatus::Uploaded { file_id } => format!(
                    "{} {} ({})",
                    name,
                    format!("-> fileId {}", file_id).color(crate::terminal::colors::ACCENT),
                    format::human_size(outcome.size)
                ),
                FileStatus::Oversized => format!(
                    "{} {} ({})",
                    name,
                    "skipped: over size limit".yellow(),
                    format::human_size(outcome.size)
                ),
                FileStatus::Failed => format!("{} {}", name, "failed".red()),
            };
            print::print_status(line);
        }
        cprint!();
        print::tree_head(0, &report.document.name);
        print::as_tree_one_level(format::document_details(&report.document));
    }

    Ok(())
}
