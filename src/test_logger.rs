use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install `env_logger` once per test binary. `RUST_LOG` overrides the
/// default `warn` level, e.g. `RUST_LOG=chain_table=trace`.
pub fn init() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Warn)
            .is_test(true)
            .parse_default_env();
        let _ = builder.try_init();
    });
}
