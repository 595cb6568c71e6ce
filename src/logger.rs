use anyhow::Context;
use time::{format_description, UtcOffset};
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::{fmt::time::OffsetTime, FmtSubscriber};

/// Sends every event up to `DEBUG` to stdout, stamped with the local time.
///
/// Falls back to UTC when the local offset cannot be determined.
pub fn init_logger() -> anyhow::Result<()> {
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = OffsetTime::new(
        local_offset,
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
            .context("invalid log time format")?,
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_timer(timer)
        .finish();

    set_global_default(subscriber).context("could not set global default tracing subscriber")
}
