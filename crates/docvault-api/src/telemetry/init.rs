use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "docvault=debug,tower_http=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Initialize tracing. `json` switches the console output to one JSON object per event.
pub fn init_telemetry(json: bool, environment: &str) -> Result<(), anyhow::Error> {
    if json {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init()?;
    } else {
        let console_fmt = tracing_subscriber::fmt::layer().event_format(
            Format::default()
                .compact()
                .with_target(false)
                .without_time(),
        );
        tracing_subscriber::registry()
            .with(env_filter())
            .with(console_fmt)
            .try_init()?;
    }

    tracing::info!(json, environment, "Tracing initialized");
    Ok(())
}
