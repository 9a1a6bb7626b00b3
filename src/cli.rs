use clap::{Arg, ArgAction, ArgMatches, Command};
use twitter_client::RateLimitStatusParams;

pub fn build_cli() -> Command {
    Command::new("twitter-client")
        .about("Twitter REST API client")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .num_args(1)
                .help("Override RUST_LOG level (e.g., info, debug)"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("rate-limit-status")
                .about("Show application rate limits as JSON")
                .arg(
                    Arg::new("resources")
                        .long("resources")
                        .value_delimiter(',')
                        .action(ArgAction::Append)
                        .help("Resource families to include (e.g., users,statuses)"),
                ),
        )
}

pub fn rate_limit_params(matches: &ArgMatches) -> Option<RateLimitStatusParams> {
    let resources: Vec<String> = matches
        .get_many::<String>("resources")?
        .filter(|r| !r.is_empty())
        .cloned()
        .collect();
    Some(RateLimitStatusParams { resources })
}

pub fn init_logging(level: Option<&str>) {
    // Respect explicit level, else default to info, allow env override via RUST_LOG
    if let Some(lvl) = level {
        std::env::set_var("RUST_LOG", lvl);
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
