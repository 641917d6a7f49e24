//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";
const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Initialise logging from `config_file`, or a stderr-only default when the file is absent or bad.
pub fn init(config_file: &str, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        match log4rs::init_file(config_file, Default::default()) {
            Ok(()) => {
                log::debug!("Logging configured from {config_file}");
                return Ok(());
            }
            Err(e) => eprintln!("Error initializing log4rs from {config_file}: {e}"),
        }
    }

    log4rs::init_config(default_config(level)?)?;
    log::debug!("Logging configured with defaults at {level}");
    Ok(())
}

/// One console appender on stderr so stdout only carries the report.
pub fn default_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))?;
    Ok(config)
}
