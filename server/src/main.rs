use std::process::ExitCode;

use clap::Parser;
use ideo_server::Config;

#[tokio::main]
async fn main() -> ExitCode {
    ideo_server::init_tracing();
    let config = Config::parse();

    match ideo_server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
