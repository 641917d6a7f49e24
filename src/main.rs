use std::error::Error;
use wifi_network_info::config::Config;
use wifi_network_info::{build_report, logging, output, SystemNetworkInfo};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    logging::init(&config.log_config, config.log_level)?;
    log::info!("#Start main()");

    let provider = SystemNetworkInfo::new(&config);
    let report = build_report(&provider).map_err(|e| {
        log::error!("Could not build network report: {e}");
        e
    })?;

    output::print_report(&report, config.output)?;

    Ok(())
}
