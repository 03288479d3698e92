use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs;

use crate::config::LogConfig;

/// Initializes the global logger.
///
/// Call once at the start of `main`. Records go to stderr (coloured) and to
/// `<log_dir>/<log_file>` (plain). If the log directory or file cannot be
/// created, logging continues on the console only.
pub fn init(config: &LogConfig) {
    let base_config = Dispatch::new().level(config.level).level_for("serde", LevelFilter::Warn);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console_config = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = base_config.chain(console_config);

    let log_file_path = config.log_file_path();
    let file_sink = fs::create_dir_all(&config.log_dir).and_then(|_| fern::log_file(&log_file_path));
    match file_sink {
        Ok(file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), record.level(), record.target(), message))
                })
                .chain(file);
            dispatch = dispatch.chain(file_config);
        }
        Err(e) => eprintln!("Failed to open log file '{}': {}", log_file_path.display(), e),
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    log::debug!("Logger initialized. Logging to console and '{}'.", log_file_path.display());
}
