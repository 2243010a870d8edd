mod args;
mod config;
mod main_lib;

use args::CliArgs;
use clap::Parser;
use config::Config;
use main_lib::{init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_tracing();
    let config = Config::from_env();

    let outcome = run(&args, &config).await?;
    println!("{}", outcome.summary());

    Ok(())
}
