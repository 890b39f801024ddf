// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::process::ExitCode;
use vision_rpc_client::{util::get_env_address, Cli, Result, VisionAnnotator, VisionRpcClient};

fn run(cli: &Cli) -> Result<()> {
    let server_address = cli.server_address.clone().unwrap_or_else(get_env_address);
    let image = cli.image()?;

    let annotator = VisionAnnotator::new(VisionRpcClient::connect(&server_address)?);
    info!("Connected to {}", &server_address);

    match annotator.annotate(&image, &cli.features)? {
        Some(annotations) => println!("{:#?}", annotations),
        None => info!("No annotations returned"),
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
