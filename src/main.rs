use clap::Parser;
use packlist_summary::{AppConfig, CliArgs, Command, LoggingConfig, cli, init_logging, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let args = CliArgs::parse();
    let config = AppConfig::from_args(&args)?;

    match args.command {
        Command::Run { file } => cli::run(file, &config),
        Command::Serve { .. } => run_server(config).await,
    }
}
