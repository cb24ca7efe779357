//! Logger setup for the `log` facade.
//!
//! On wasm32 records go to the browser console. Native builds (tests, tools)
//! hand off to `env_logger`.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub(super) struct ConsoleLogger;

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the logger. Safe to call more than once; later calls only adjust
/// the level.
pub fn init_logger(level: LevelFilter) {
    // Installing fails if a logger is already set (ours or the host's).
    #[cfg(target_arch = "wasm32")]
    {
        let _ = log::set_logger(&console::LOGGER);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Let everything through env_logger; `max_level` does the gating.
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Trace)
            .is_test(cfg!(test))
            .try_init();
    }
    log::set_max_level(level);
}

/// Parse a level name coming from JS ("info", "debug", ...). Unknown names fall
/// back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}
