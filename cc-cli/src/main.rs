//! CC CLI - estimate catastrophe arrival dates and count down to them.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cc-cli",
    version,
    about = "Catastrophe clock toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    cc_cmd::run(cli.command).await
}
