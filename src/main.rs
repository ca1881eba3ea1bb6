use clap::Parser;
use std::process;

use nexus_image_audit::cli::{Args, Runner};

#[tokio::main]
async fn main() {
    let args = Args::parse().from_env();
    let runner = Runner::new(args);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
