/// Initialize the logger.
///
/// Without `RUST_LOG` everything at `info` and above is displayed,
/// otherwise the `RUST_LOG` filters are used as is.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter(None, log::LevelFilter::Info);
        }
    }
    // the logger can already be set, for example when several runs share a test process
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
