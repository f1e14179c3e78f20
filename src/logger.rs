use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};

const LOG_FILE: &str = "scheduler.log";

/// Settings for [`init`]. Both fields are optional; the defaults log to stderr
/// at the level taken from `RUST_LOG`.
#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    /// Overrides `RUST_LOG` when set (e.g. by `--verbose`).
    pub level: Option<LevelFilter>,

    /// Directory for an additional plain-text log file.
    pub log_dir: Option<PathBuf>,
}

/// Initializes the global logger.
///
/// This function should be called once at the very beginning of `main`.
///
/// Log level is controlled by the `RUST_LOG` environment variable unless
/// `config.level` is set. If neither is given, it defaults to `info`.
/// Console output goes to stderr, because stdout carries the result document.
pub fn init(config: LoggerConfig) {
    let log_level_filter = config.level.unwrap_or_else(|| {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)
    });

    let console_config = Dispatch::new()
        .format(|out, message, record| {
            let colors = fern::colors::ColoredLevelConfig::new()
                .error(fern::colors::Color::Red)
                .warn(fern::colors::Color::Yellow)
                .info(fern::colors::Color::Green)
                .debug(fern::colors::Color::Blue)
                .trace(fern::colors::Color::BrightBlack);

            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut base_config = Dispatch::new().level(log_level_filter).level_for("serde", LevelFilter::Warn).chain(console_config);

    let mut log_file_path = None;
    if let Some(log_dir) = &config.log_dir {
        match open_log_file(log_dir) {
            Ok((path, file)) => {
                let file_config = Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), record.level(), record.target(), message))
                    })
                    .chain(file);
                base_config = base_config.chain(file_config);
                log_file_path = Some(path);
            }
            Err(e) => eprintln!("Failed to open log file in '{}': {}", log_dir.display(), e),
        }
    }

    if let Err(e) = base_config.apply() {
        // A logger is already installed (tests, embedding applications).
        eprintln!("Logger was not installed: {}", e);
        return;
    }

    match log_file_path {
        Some(path) => log::debug!("Logger initialized. Logging to stderr and '{}'.", path.display()),
        None => log::debug!("Logger initialized. Logging to stderr."),
    }
}

fn open_log_file(log_dir: &Path) -> std::io::Result<(PathBuf, fs::File)> {
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE);
    let file = fern::log_file(&path)?;
    Ok((path, file))
}
