//! Logger setup for the wishlist server: terminal, a log file, or both.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "./wishlist.log";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogDestination {
    File,
    #[default]
    Terminal,
    Both,
}

impl LogDestination {
    fn to_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn to_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Installs the global logger. The log file is truncated on start.
pub fn initialize(
    destination: LogDestination,
    level: LevelFilter,
    file: &Path,
) -> anyhow::Result<()> {
    let config = build_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.to_file() {
        let sink = File::create(file)
            .with_context(|| format!("creating log file {}", file.display()))?;
        loggers.push(WriteLogger::new(level, config, sink));
    }

    CombinedLogger::init(loggers).context("installing logger")
}

fn build_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        // hyper and reqwest are chatty at debug level
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest");
    builder.build()
}
