mod cli;

use clap::Parser;
use cli::{Cli, Commands, NegotiateArgs, ParseArgs};
use mimeparser::config::Config;
use mimeparser::media_type::MediaType;
use std::process::ExitCode;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<ExitCode, AnyError> {
    let cli = Cli::parse();

    let config = Config::load()?;
    mimeparser::observability::init_tracing(&config.telemetry.log_filter);

    match cli.command {
        Commands::Server(args) => {
            mimeparser::api::run(config, args.address).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Negotiate(args) => negotiate(&config, args),
        Commands::Parse(args) => parse(&config, args),
    }
}

fn negotiate(config: &Config, args: NegotiateArgs) -> Result<ExitCode, AnyError> {
    let available = if args.available.is_empty() {
        config.negotiation.available.clone()
    } else {
        args.available
    };
    let accept = args
        .accept
        .unwrap_or_else(|| config.negotiation.default_accept.clone());

    let negotiator = config.negotiator();

    if args.ranking {
        let ranked = negotiator.rank(available.as_slice(), &accept)?;
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    }

    let chosen = negotiator.best_match(available.as_slice(), &accept)?;
    if chosen.is_empty() {
        eprintln!("406 Not Acceptable: nothing in {available:?} satisfies '{accept}'");
        return Ok(ExitCode::FAILURE);
    }

    if !args.ranking {
        println!("{chosen}");
    }
    Ok(ExitCode::SUCCESS)
}

fn parse(config: &Config, args: ParseArgs) -> Result<ExitCode, AnyError> {
    let parsed = MediaType::parse_with(&args.media_type, config.negotiator().precision())?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(ExitCode::SUCCESS)
}
