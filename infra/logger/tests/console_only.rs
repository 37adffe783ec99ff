use bikemgr_logger::{LevelFilter, Logger};
use tracing::Level;

#[test]
fn verbose_console_honours_per_crate_directives() {
    let logger = Logger::builder()
        .name("xtask")
        .level(LevelFilter::DEBUG)
        .env_filter("xtask=debug,bikemgr_assets=warn")
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_sink());
    assert!(tracing::enabled!(target: "xtask", Level::DEBUG));
    assert!(!tracing::enabled!(target: "bikemgr_assets::icons", Level::INFO));
    assert!(tracing::enabled!(target: "bikemgr_assets::icons", Level::WARN));
}
