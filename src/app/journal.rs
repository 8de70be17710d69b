// src/app/journal.rs
//
// Journal minimal sur stderr pour la façade `log`.
// Niveau choisi au démarrage (main.rs : -v, -vv, -vvv).

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct JournalStderr {
    niveau: LevelFilter,
}

impl Log for JournalStderr {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.niveau
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installe le journal (une seule fois par processus).
pub fn installer(niveau: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(JournalStderr { niveau }))?;
    log::set_max_level(niveau);
    Ok(())
}

/// 0 => Off, 1 => Info, 2 => Debug, 3+ => Trace.
pub fn niveau_depuis_verbosite(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
