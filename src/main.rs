mod cli;
mod tables;

use anyhow::{Context, ensure};
use clap::{Parser, crate_version};
use eagle_reader::{Config, EagleReader, Error, GatewayClient, Readings, quantity::KilowattHours};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, ReadArgs},
    tables::{build_devices_table, build_readings_table, build_variables_table},
};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let config = args.gateway.into_config();
    match args.command {
        Command::Read(args) => read(&config, &args)?,
        Command::Devices => devices(&config)?,
        Command::Variables => variables(&config)?,
    }

    info!("done!");
    Ok(())
}

fn read(config: &Config, args: &ReadArgs) -> anyhow::Result<()> {
    let mut reader = EagleReader::new(config).context("failed to set up the reader")?;
    let is_contract_break = reader.refresh().err().is_some_and(Error::is_contract_break);

    if args.json {
        #[derive(Serialize)]
        struct Output<'a> {
            #[serde(flatten)]
            readings: &'a Readings,

            net_total: Option<KilowattHours>,
        }

        let output = Output { readings: reader.readings(), net_total: reader.net_total() };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", build_readings_table(reader.readings()));
    }

    ensure!(!is_contract_break, "the gateway response is malformed");
    Ok(())
}

fn devices(config: &Config) -> anyhow::Result<()> {
    let hardware_addresses = GatewayClient::new(config)?
        .discover_device_addresses()
        .context("failed to list the devices")?;
    if hardware_addresses.is_empty() {
        warn!("no devices found");
    }
    println!("{}", build_devices_table(&hardware_addresses));
    Ok(())
}

fn variables(config: &Config) -> anyhow::Result<()> {
    let attributes = GatewayClient::new(config)?
        .query_attributes()
        .context("failed to query the device variables")?;
    println!("{}", build_variables_table(&attributes));
    Ok(())
}
