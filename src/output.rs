//! Output formatting for SUS query results

use crate::index::types::{BuildStats, Interval};
use crate::query::Mismatch;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor};

/// One position's answer, as emitted with `--json`
#[derive(Debug, Clone, Serialize)]
pub struct QueryRecord {
    pub position: usize,
    pub sus: Vec<Interval>,
}

/// Buffered stdout with color enabled only when asked for
pub fn stdout(color: bool) -> BufferedStandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    BufferedStandardStream::stdout(choice)
}

/// Write `[s,e];[s,e];...` with highlighted brackets
fn write_intervals<W: WriteColor>(out: &mut W, sus: &[Interval]) -> io::Result<()> {
    for iv in sus {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", iv)?;
        out.reset()?;
        write!(out, ";")?;
    }
    Ok(())
}

fn write_position<W: WriteColor>(out: &mut W, p: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", p)?;
    out.reset()?;
    write!(out, ": ")
}

/// Per-position line used when listing every position: `p: [s,e];...`
pub fn write_sus_line<W: WriteColor>(out: &mut W, p: usize, sus: &[Interval]) -> io::Result<()> {
    write_position(out, p)?;
    write_intervals(out, sus)?;
    writeln!(out)
}

/// Answer for a single queried position
pub fn write_query<W: WriteColor>(out: &mut W, p: usize, sus: &[Interval]) -> io::Result<()> {
    write!(out, "SUSs at position: ")?;
    write_sus_line(out, p, sus)
}

/// Leftmost answer for a single queried position
pub fn write_leftmost<W: WriteColor>(out: &mut W, p: usize, sus: Interval) -> io::Result<()> {
    write!(out, "leftmost SUS at position: ")?;
    write_sus_line(out, p, &[sus])
}

/// Both sides of a failed consistency check
pub fn write_mismatch<W: WriteColor>(out: &mut W, mismatch: &Mismatch) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    writeln!(out, " MISMATCH at position {}!", mismatch.position)?;
    out.reset()?;
    write!(out, "INDEX: ")?;
    write_intervals(out, &mismatch.index)?;
    writeln!(out)?;
    write!(out, "NAIVE: ")?;
    write_intervals(out, &mismatch.naive)?;
    writeln!(out)
}

/// Build statistics table
pub fn write_stats<W: Write>(out: &mut W, stats: &BuildStats, memory_bytes: usize) -> io::Result<()> {
    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Text length:      {}", stats.text_len)?;
    writeln!(out, "MUIs kept:        {}", stats.mui_count)?;
    writeln!(out, "MUIs pushed:      {}", stats.pushes)?;
    writeln!(out, "MUIs evicted:     {}", stats.evictions)?;
    writeln!(out, "Pointer rewrites: {}", stats.pointer_rewrites)?;
    writeln!(out, "Index size:       {}", format_size(memory_bytes))
}

/// Pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
