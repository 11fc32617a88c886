// standard library
use std::env;
use std::process::ExitCode;

// internal
use deviceconnect_client::cli::{run, Args};

#[tokio::main]
async fn main() -> ExitCode {
    run(Args::parse(env::args().skip(1))).await
}
