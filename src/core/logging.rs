//! Console logger - `log` facade backend
//!
//! On wasm32 records go to `console.log/warn/error` so they show up in the
//! browser devtools next to the host's own output. Native builds (tests,
//! benches) write to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: ConsoleLogger = ConsoleLogger;

pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[fluidart {}] {}", record.level(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::log_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger. Safe to call more than once; only the first
/// call wins (a host or test harness may already own the logger).
pub fn init_logger(max_level: LevelFilter) -> bool {
    let installed = log::set_logger(&LOGGER).is_ok();
    if installed {
        log::set_max_level(max_level);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused_without_panicking() {
        let _ = init_logger(LevelFilter::Warn);
        assert!(!init_logger(LevelFilter::Debug));
    }
}
