use log::LevelFilter;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Install an `env_logger` for the process. Only the first call has an
/// effect; a logger already installed by the host is left alone.
pub fn init_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);
        builder.parse_default_env();

        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        let _ = builder.try_init();
    });
}
