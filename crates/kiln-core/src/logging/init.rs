use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the process-wide logger once; later calls are no-ops.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "kiln_ui=debug"). When `None`, `RUST_LOG` wins if set, otherwise the
/// default is info level so the session's one-shot nesting warnings and
/// frame-time reports are visible.
///
/// Intended usage is early in `main`. Hosts that install their own `log`
/// backend can skip this entirely; everything in the workspace goes through
/// the facade.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
