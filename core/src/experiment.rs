//! # Experiment Upload
//!
//! Implements the "turn a data directory into a notebook entry" use case:
//! walk the directory, push every reasonably-sized file into the gallery,
//! then create one summary document that links the uploads with the ELN's
//! `<fileId=N>` syntax and inlines renderable sources.
//!
//! One bad file never aborts the run; it is recorded in the summary without
//! a gallery link instead.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use eln_common::document::DocumentInfo;
use eln_common::render::{escape_html, file_to_html};

use crate::client::ElnClient;
use crate::documents;

/// Progress callback: (files done, files total).
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Knobs for [`upload_experiment`].
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Per-file upload ceiling in megabytes. Larger files are listed in the
    /// summary but never sent.
    pub max_filesize_mb: f64,
    /// File extensions to skip entirely (with or without a leading dot).
    pub ignore: Vec<String>,
    /// Tags for the summary document; the `API` tag is appended on top.
    pub tags: Vec<String>,
    /// Folder or notebook to file the summary under.
    pub parent_folder_id: Option<u64>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            max_filesize_mb: 2.0,
            ignore: Vec::new(),
            tags: Vec::new(),
            parent_folder_id: None,
        }
    }
}

/// What happened to one file of the experiment directory.
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// In the gallery, referenced from the summary via `<fileId=N>`.
    Uploaded { file_id: u64 },
    /// Larger than [`UploadOptions::max_filesize_mb`]; listed only.
    Oversized,
    /// The server or filesystem rejected it.
    Failed,
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub size: u64,
    pub status: FileStatus,
}

/// Result of a full experiment upload.
#[derive(Debug)]
pub struct ExperimentReport {
    pub document: DocumentInfo,
    pub files: Vec<FileOutcome>,
}

impl ExperimentReport {
    pub fn uploaded(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Uploaded { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.files.len() - self.uploaded()
    }
}

/// Lists the files under `dir` recursively, skipping ignored extensions.
///
/// The walk is sorted by file name so summaries are stable across runs.
pub fn collect_files(dir: &Path, ignore: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if is_ignored(&path, ignore) {
            debug!(path = %path.display(), "skipping ignored file type");
            continue;
        }
        files.push(path);
    }
    Ok(files)
}

fn is_ignored(path: &Path, ignore: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    ignore.iter().any(|i| i.trim_start_matches('.') == ext)
}

/// Uploads an experiment directory and creates its summary document.
pub async fn upload_experiment(
    client: &ElnClient,
    dir: &Path,
    opts: &UploadOptions,
    on_progress: Option<ProgressFn>,
) -> anyhow::Result<ExperimentReport> {
    let files = collect_files(dir, &opts.ignore)?;
    let total = files.len();

    let mut outcomes = Vec::with_capacity(total);
    for (done, path) in files.into_iter().enumerate() {
        outcomes.push(upload_one(client, &path, opts.max_filesize_mb).await);
        if let Some(report) = &on_progress {
            report(done + 1, total);
        }
    }

    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("experiment");
    let html = summary_html(name, &outcomes, opts.max_filesize_mb);

    let document = documents::create(
        client,
        name,
        html,
        opts.tags.clone(),
        opts.parent_folder_id,
    )
    .await?;

    Ok(ExperimentReport {
        document,
        files: outcomes,
    })
}

async fn upload_one(client: &ElnClient, path: &Path, limit_mb: f64) -> FileOutcome {
    let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    if megabytes(size) > limit_mb {
        warn!(path = %path.display(), size_mb = megabytes(size), "file exceeds upload limit");
        return FileOutcome {
            path: path.to_path_buf(),
            size,
            status: FileStatus::Oversized,
        };
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string();

    let status = match tokio::fs::read(path).await {
        Ok(bytes) => {
            let caption = format!("Uploaded from \"{}\"", path.display());
            match client.upload_file(&file_name, bytes, Some(caption)).await {
                Ok(file) => FileStatus::Uploaded { file_id: file.id },
                Err(err) => {
                    warn!(path = %path.display(), %err, "upload failed");
                    FileStatus::Failed
                }
            }
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "could not read file");
            FileStatus::Failed
        }
    };

    FileOutcome {
        path: path.to_path_buf(),
        size,
        status,
    }
}

/// Builds the summary document: the file list first, then the content of
/// every source the renderer understands.
fn summary_html(dir_name: &str, outcomes: &[FileOutcome], limit_mb: f64) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<h1>Autogenerated document for {}</h1>\n",
        escape_html(dir_name)
    ));
    html.push_str("<h2>List of files</h2>\n<div>\n<ul>\n");

    for outcome in outcomes {
        let path = escape_html(&outcome.path.display().to_string());
        match outcome.status {
            FileStatus::Uploaded { file_id } => {
                html.push_str(&format!("<li><code>{path}</code>: <fileId={file_id}></li>\n"));
            }
            FileStatus::Oversized => {
                html.push_str(&format!(
                    "<li><code>{path}</code> ({:.2} MB &gt; {:.2} MB)</li>\n",
                    megabytes(outcome.size),
                    limit_mb
                ));
            }
            FileStatus::Failed => {
                html.push_str(&format!("<li><code>{path}</code> (upload failed)</li>\n"));
            }
        }
    }
    html.push_str("</ul>\n</div>\n");

    for outcome in outcomes {
        match file_to_html(&outcome.path) {
            Ok(rendered) => {
                let path = escape_html(&outcome.path.display().to_string());
                html.push_str(&format!("<hr /><p><code>{path}</code></p>\n{rendered}\n"));
            }
            Err(err) => {
                debug!(path = %outcome.path.display(), %err, "not inlining file content");
            }
        }
    }

    html
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn outcome(path: &str, size: u64, status: FileStatus) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from(path),
            size,
            status,
        }
    }

    #[test]
    fn collect_walks_subdirectories_and_skips_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "# hi").unwrap();
        fs::write(dir.path().join("image.tif"), [0u8; 4]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/data.csv"), "a,b").unwrap();

        let files = collect_files(dir.path(), &[".tif".to_string()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["notes.md", "data.csv"]);
    }

    #[test]
    fn collect_rejects_a_file_argument() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(collect_files(file.path(), &[]).is_err());
    }

    #[test]
    fn ignore_matches_with_and_without_dot() {
        let path = PathBuf::from("a/b.tif");
        assert!(is_ignored(&path, &[".tif".to_string()]));
        assert!(is_ignored(&path, &["tif".to_string()]));
        assert!(!is_ignored(&path, &["png".to_string()]));
    }

    #[test]
    fn summary_links_uploaded_files() {
        let outcomes = vec![outcome("run/data.csv", 10, FileStatus::Uploaded { file_id: 42 })];
        let html = summary_html("run", &outcomes, 2.0);
        assert!(html.contains("<h1>Autogenerated document for run</h1>"));
        assert!(html.contains("<fileId=42>"));
    }

    #[test]
    fn summary_annotates_oversized_files() {
        let outcomes = vec![outcome("run/huge.bin", 3_500_000, FileStatus::Oversized)];
        let html = summary_html("run", &outcomes, 2.0);
        assert!(html.contains("3.50 MB &gt; 2.00 MB"));
        assert!(!html.contains("<fileId="));
    }

    #[test]
    fn summary_escapes_directory_names() {
        let html = summary_html("<run>", &[], 2.0);
        assert!(html.contains("&lt;run&gt;"));
    }

    #[test]
    fn report_counts_uploads_and_skips() {
        let report = ExperimentReport {
            document: serde_json::from_str(r#"{"id": 1, "name": "run"}"#).unwrap(),
            files: vec![
                outcome("a", 1, FileStatus::Uploaded { file_id: 1 }),
                outcome("b", 1, FileStatus::Oversized),
                outcome("c", 1, FileStatus::Failed),
            ],
        };
        assert_eq!(report.uploaded(), 1);
        assert_eq!(report.skipped(), 2);
    }
}
