/// Entry point: one run-to-completion pipeline invocation.
///
/// Config is validated before any network activity; any failure after
/// that aborts the run with a descriptive error and nothing is submitted.

use std::error::Error;
use std::time::Duration;

use cotwx_service::config::Config;
use cotwx_service::ingest::cotrip::{self, COTRIP_BASE_URL};
use cotwx_service::logging::{self, DataSource, LogLevel};
use cotwx_service::{pipeline, submit};

fn main() {
    logging::init_logger(LogLevel::Info);
    if let Err(e) = run() {
        logging::error(DataSource::System, &format!("run aborted: {}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    if config.debug {
        logging::init_logger(LogLevel::Debug);
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let stations = cotrip::fetch_all_stations(&client, COTRIP_BASE_URL, &config.token)?;
    logging::info(
        DataSource::Cotrip,
        &format!("ok - fetched {} stations", stations.len()),
    );

    let collection = pipeline::build_collection(stations)?;

    if config.debug {
        logging::debug(DataSource::System, &serde_json::to_string(&collection)?);
    }

    match &config.submit_url {
        Some(endpoint) => submit::submit_collection(&client, endpoint, &collection)?,
        None => {
            // No submit endpoint configured: dump the collection for
            // local inspection instead.
            println!("{}", serde_json::to_string_pretty(&collection)?);
        }
    }

    Ok(())
}
