use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Quiet by default; override via RUST_LOG when needed.
        let _ = Builder::new()
            .filter_level(LevelFilter::Warn)
            .is_test(true)
            .parse_default_env()
            .try_init();
    });
}
