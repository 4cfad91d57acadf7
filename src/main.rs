use clap::Parser;

use epochcast::adapter::inbound::cli::command::{Cli, Commands};
use epochcast::adapter::inbound::cli::output::{self, OutputConfig};
use epochcast::adapter::inbound::cli::{check, config, format, send};
use epochcast::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Send(args) => {
            let config = config::load(&args.config)?;
            config.init_logging();
            send::execute(&args, &config).await
        }
        Commands::Format(args) => format::execute(&args),
        Commands::Check(arg) => check::execute(&arg),
    }
}
