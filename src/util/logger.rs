use crate::error::TGError;
use chrono::Local;
use log::{Level, Log, Metadata, Record};

struct TgLogger {
    level: Level,
}

impl Log for TgLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    #[allow(clippy::print_stdout)]
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Debug and trace lines also name their module.
            if record.level() <= Level::Info {
                println!(
                    "{} {:<5} {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                    record.level().to_string(),
                    record.args()
                );
            } else {
                println!(
                    "{} {:<5} [{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                    record.level().to_string(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

pub fn init_logger_with_level(level: Level) -> Result<(), TGError> {
    let logger = TgLogger { level };
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| TGError::Generic(format!("Could not set logger: {}", e)))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
