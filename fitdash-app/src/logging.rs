use std::error::Error;

use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

use crate::config::Config;

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Initialises log4rs from the configured file, or logs warnings to stderr
/// when there is no such file.
pub fn init(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.is_file() {
        log4rs::init_file(&config.log_config, Default::default())?;
    } else {
        log4rs::init_config(fallback_config()?)?;
    }
    Ok(())
}

fn fallback_config() -> Result<log4rs::Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Ok(log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?)
}
