use colored::*;

use eln_common::config::Config;
use eln_core::client::ElnClient;

use crate::terminal::print;

pub async fn status(client: &ElnClient, cfg: &Config) -> anyhow::Result<()> {
    print::header("server status", cfg.quiet);

    let status = client.server_status().await?;

    print::set_key_width(["Server", "Status", "Version"]);
    print::aligned_line("Server", client.base_url());
    print::aligned_line("Status", status.message.as_str().green().bold());
    if let Some(version) = &status.rspace_version {
        print::aligned_line("Version", version.as_str());
    }

    Ok(())
}
