use anyhow::Context;

use tracing::{subscriber::set_global_default, Subscriber};

use tracing_log::LogTracer;

use tracing_subscriber::fmt::{self, format::FmtSpan, MakeWriter};
use tracing_subscriber::EnvFilter;

use crate::settings::LogSettings;

/// The `RUST_LOG` directive when set, otherwise the configured one
pub fn filter_directive(settings: &LogSettings) -> String {
    std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| settings.filter.clone())
}

/// Build a formatting subscriber writing request spans and events to `sink`
pub fn create_subscriber<Sink>(directive: &str, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(sink)
        .finish()
}

/// Install `subscriber` globally and route `log` records through it
pub fn set_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to initalize logging")?;

    set_global_default(subscriber).context("Failed to set global subscriber")
}
