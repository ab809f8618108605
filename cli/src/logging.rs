use std::io;

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct PoolgenFormatter;

impl<S, N> FormatEvent<S, N> for PoolgenFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let symbol: ColoredString = match *event.metadata().level() {
            Level::TRACE => "[ ]".dimmed(),
            Level::DEBUG => "[?]".blue(),
            Level::INFO => "[+]".green().bold(),
            Level::WARN => "[*]".yellow().bold(),
            Level::ERROR => "[-]".red().bold(),
        };

        write!(writer, "{symbol} ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber with the glyph formatter, writing to
/// stderr at a fixed INFO ceiling. Stdout is reserved for the generated
/// pool, and the level is not environment-driven because the tool
/// consumes no environment variables.
pub fn init() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .event_format(PoolgenFormatter)
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install the log subscriber: {err}"))
}
