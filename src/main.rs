use std::process::ExitCode;

use clap::Parser;
use users_cli::cli::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::run(cli).await
}
