use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

pub struct PactumFormatter;

impl<S, N> FormatEvent<S, N> for PactumFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0.push_str(&format!("{value:?}"));
        }
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence for diagnostics. Otherwise `-v` raises and
/// `-q` lowers their level. Printed output goes to stdout, diagnostics to
/// stderr.
pub fn init_logging(verbose: u8, quiet: u8) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(filter_directives(env.as_deref(), verbose, quiet))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(None, verbose, quiet)));

    let writer = std::io::stdout
        .with_filter(|meta: &tracing::Metadata<'_>| meta.target() == PRINT_TARGET)
        .and(std::io::stderr.with_filter(|meta: &tracing::Metadata<'_>| meta.target() != PRINT_TARGET));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(PactumFormatter)
        .init();
}

/// The print target is always appended, so command output only depends on `-q`.
pub fn filter_directives(env: Option<&str>, verbose: u8, quiet: u8) -> String {
    let print_level = if quiet >= 2 { "off" } else { "info" };
    let diagnostics: String = match env.map(str::trim).filter(|e| !e.is_empty()) {
        Some(env) => env.to_string(),
        None => match (verbose, quiet) {
            (_, q) if q >= 2 => "error",
            (_, 1) => "warn",
            (0, _) => "info",
            (1, _) => "debug",
            _ => "trace",
        }
        .to_string(),
    };
    format!("{diagnostics},{PRINT_TARGET}={print_level}")
}
