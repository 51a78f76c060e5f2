use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::config::LogConfig;

/// Installs the process wide logger, writing to a new timestamped file in the configured directory.
/// Must be called before the first frame. Returns the path of the log file.
/// If a logger is already installed, an error is returned and no new file is left behind.
pub fn init(config: &LogConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&config.directory)?;

    let path = log_file_path(&config.directory, &config.title, Local::now());
    let existed = path.exists();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = env_logger::Builder::new()
        .filter_level(config.level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{},{},{},{}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
    if let Err(error) = installed {
        if !existed {
            std::fs::remove_file(&path)?;
        }
        return Err(error.into());
    }

    log::info!("Logging to {}", path.display());

    Ok(path)
}

/// `<directory>/<YYYYmmdd_HHMMSS>_<title>.log`
pub fn log_file_path(directory: &Path, title: &str, time: DateTime<Local>) -> PathBuf {
    directory.join(format!("{}_{}.log", time.format("%Y%m%d_%H%M%S"), title))
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
