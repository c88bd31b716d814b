use crate::shared::structs::config::{Configuration, LogFormat};

pub fn initialize_tracing(config: &Configuration) {
    let builder = tracing_subscriber::FmtSubscriber::builder().with_max_level(config.tracing_level());

    let result = match config.log_format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish()),
        LogFormat::Compact => tracing::subscriber::set_global_default(builder.compact().finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };

    if let Err(e) = result {
        eprintln!(
            "Initialization of tracing subscriber failed with error: {}",
            e
        );
    }
}
