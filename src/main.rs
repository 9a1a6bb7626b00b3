mod cli;

use anyhow::bail;
use log::info;
use twitter_client::{Client, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::build_cli();
    let matches = cmd.get_matches();
    let log_level = matches.get_one::<String>("log-level").cloned();
    let version_flag = matches.get_flag("version");

    cli::init_logging(log_level.as_deref());

    if version_flag {
        println!("twitter-client {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("rate-limit-status", sub)) => {
            let cfg = Config::from_env()?;
            let client = Client::new(&cfg)?;
            let params = cli::rate_limit_params(sub);
            info!("Fetching rate limit status from {}", client.base_url());
            let status = client
                .applications()
                .rate_limit_status(params.as_ref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
            Ok(())
        }
        _ => bail!("no command given; try `twitter-client rate-limit-status`"),
    }
}
