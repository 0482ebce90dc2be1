use std::io::Write;

/// Install a `pretty_env_logger` logger.
///
/// `RUST_LOG` is honoured, the level defaults to `info`.
/// If `APP_ID` is set, it prefixes all the lines.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(app_id) = std::env::var("APP_ID") {
        builder.format(move |buf, record| {
            writeln!(buf, "[{}] {} - {}", app_id, record.level(), record.args())
        });
    }

    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter(None, ::log::LevelFilter::Info);
        }
    }
    builder.init();
}
