mod commands;
mod terminal;

use commands::{CommandLine, Commands, create, list, status, upload};
use eln_common::config::Config;
use eln_common::credentials::{API_KEY_VAR, ApiKey};
use eln_core::client::ElnClient;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();

    logging::init(cli.quiet);

    // Rendering locally needs neither a server nor a key.
    if let Commands::Create(args) = &cli.command {
        if args.dry {
            return create::dry_run(args);
        }
    }

    let cfg = Config::resolve(cli.url, cli.quiet, cli.no_banner)?;

    if cli.api_key.is_some() {
        eln_common::warn!(
            "API keys passed as flags end up in shell history; prefer {}",
            API_KEY_VAR
        );
    }
    let key = ApiKey::resolve(cli.api_key)?;
    let client = ElnClient::new(&cfg.base_url, &key)?;

    print::banner(cfg.no_banner, cfg.quiet);

    match cli.command {
        Commands::Status => status::status(&client, &cfg).await,
        Commands::Create(args) => create::create(&client, args, &cfg).await,
        Commands::Upload(args) => upload::upload(&client, args, &cfg).await,
        Commands::List => list::list(&client, &cfg).await,
    }
}
