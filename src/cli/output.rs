/// Output formatting: text and JSON modes, error rendering, debug timers.
use std::io::{self, Write};

use serde::Serialize;

use super::args::OutputFormat;
use crate::dice::{self, DisplayOptions, FlipResult, RollRequest, RollResult};
use crate::types::{ErrorOutput, FlipOutput, RollOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all commands.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// When true, print stage timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Rolls ---

/// Write a finished roll to `out` in the context's format.
///
/// # Errors
///
/// Returns any I/O or serialization error from writing.
pub fn write_roll<W: Write>(
    out: &mut W,
    req: RollRequest,
    result: &RollResult,
    opts: DisplayOptions,
    ctx: &OutputCtx,
) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Text => dice::write_roll(out, req, result, opts),
        fmt => write_json(out, &RollOutput::new(req, result, opts), fmt),
    }
}

// --- Flips ---

/// Write a finished series of flips to `out` in the context's format.
///
/// # Errors
///
/// Returns any I/O or serialization error from writing.
pub fn write_flips<W: Write>(
    out: &mut W,
    result: &FlipResult,
    verbose: bool,
    ctx: &OutputCtx,
) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Text => dice::write_flips(out, result, verbose),
        fmt => write_json(out, &FlipOutput::new(result, verbose), fmt),
    }
}

// --- Error output ---

/// Write a structured error to stdout.
///
/// Errors share stdout with regular results so that scripts reading a single
/// stream see them.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = render_error(&mut out, err, format);
}

fn render_error<W: Write>(out: &mut W, err: &ErrorOutput, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "Error: {}", err.error.message),
        fmt => write_json(out, err, fmt),
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{Coin, DiceError};

    fn ctx(format: OutputFormat) -> OutputCtx {
        OutputCtx {
            format,
            debug: false,
        }
    }

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(
            resolve_format(OutputFormat::Text, true),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(OutputFormat::Compact, false),
            OutputFormat::Compact
        );
    }

    #[test]
    fn test_text_roll_matches_formatter() {
        let mut buf = Vec::new();
        write_roll(
            &mut buf,
            RollRequest { count: 1, sides: 6 },
            &RollResult::new(vec![5]),
            DisplayOptions::default(),
            &ctx(OutputFormat::Text),
        )
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 dice rolled (d6):\nRolled: 5\n");
    }

    #[test]
    fn test_compact_roll() {
        let mut buf = Vec::new();
        write_roll(
            &mut buf,
            RollRequest { count: 2, sides: 20 },
            &RollResult::new(vec![19, 13]),
            DisplayOptions::default(),
            &ctx(OutputFormat::Compact),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"count\":2,\"sides\":20,\"sum\":32,\"throws\":[19,13]}\n"
        );
    }

    #[test]
    fn test_json_flips_parse_back() {
        let mut buf = Vec::new();
        write_flips(
            &mut buf,
            &FlipResult::new(vec![Coin::Tails]),
            false,
            &ctx(OutputFormat::Json),
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json, serde_json::json!({"count": 1, "flips": ["Tails"]}));
    }

    #[test]
    fn test_text_error() {
        let err = ErrorOutput::from_dice_error(&DiceError::InvalidFlipCount);
        let mut buf = Vec::new();
        render_error(&mut buf, &err, OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Error: Invalid number of flips\n"
        );
    }
}
