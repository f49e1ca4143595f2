/// Output formatting: JSON, table, path modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::pwa::PwaOptions;
use crate::types::{
    ClearOutput, CssStripOutput, HeadingIdsOutput, LocalizeOutput, TranslationFileOutput,
};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub fields: Option<Vec<String>>,
    pub no_header: bool,
    /// When true, print timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(
        fmt: OutputFormat,
        json_flag: bool,
        fields: Option<&str>,
        no_header: bool,
        debug: bool,
    ) -> Self {
        let format = resolve_format(fmt, json_flag);
        let fields = fields.map(|f| f.split(',').map(str::trim).map(str::to_owned).collect());
        Self {
            format,
            fields,
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Whether a field should be included in output.
    fn include_field(&self, name: &str) -> bool {
        self.fields
            .as_ref()
            .is_none_or(|f| f.iter().any(|n| n == name))
    }
}

// --- Translation write reports ---

/// Write per-file translation reports to stdout.
pub fn write_translation_reports(reports: &[TranslationFileOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(reports),
        OutputFormat::Compact => print_compact_json(reports),
        OutputFormat::Ndjson => print_ndjson(reports),
        OutputFormat::Path => {
            for r in reports {
                println!("{}", r.file);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_translation_table(reports, ctx),
    }
}

fn write_translation_table(reports: &[TranslationFileOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let mut headers: Vec<Cell> = Vec::new();
    if ctx.include_field("file") {
        headers.push(Cell::new("FILE"));
    }
    if ctx.include_field("keys") {
        headers.push(Cell::new("KEYS"));
    }
    if ctx.include_field("added") {
        headers.push(Cell::new("ADDED"));
    }
    if ctx.include_field("dropped") {
        headers.push(Cell::new("DROPPED"));
    }
    if ctx.include_field("changed") {
        headers.push(Cell::new("CHANGED"));
    }

    if !ctx.no_header {
        table.set_header(headers);
    }

    for r in reports {
        let mut row: Vec<Cell> = Vec::new();
        if ctx.include_field("file") {
            row.push(Cell::new(&r.file));
        }
        if ctx.include_field("keys") {
            row.push(Cell::new(r.keys));
        }
        if ctx.include_field("added") {
            row.push(Cell::new(r.added));
        }
        if ctx.include_field("dropped") {
            row.push(Cell::new(r.dropped));
        }
        if ctx.include_field("changed") {
            row.push(Cell::new(if r.changed { "yes" } else { "" }));
        }
        table.add_row(row);
    }

    println!("{table}");
}

// --- Localize reports ---

/// Write per-file localize reports to stdout (`--out-dir` mode).
pub fn write_localize_reports(reports: &[LocalizeOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(reports),
        OutputFormat::Compact => print_compact_json(reports),
        OutputFormat::Ndjson => print_ndjson(reports),
        OutputFormat::Path => {
            for r in reports {
                println!("{}", r.file);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["FILE", "KEYS", "UNTRANSLATED", "DROPPED", "CHANGED"]);
            }
            for r in reports {
                table.add_row([
                    r.file.as_str(),
                    &r.keys.to_string(),
                    &r.untranslated.to_string(),
                    &r.dropped.to_string(),
                    if r.changed { "yes" } else { "" },
                ]);
            }
            println!("{table}");
        }
    }
}

/// Write the combined render-time content (file path keyed) to stdout.
pub fn write_localized_content<T: Serialize>(content: &T, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Compact | OutputFormat::Ndjson => print_compact_json(content),
        _ => print_json(content),
    }
}

// --- Heading-id reports ---

/// Write per-file heading-id reports to stdout.
pub fn write_heading_reports(reports: &[HeadingIdsOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(reports),
        OutputFormat::Compact => print_compact_json(reports),
        OutputFormat::Ndjson => print_ndjson(reports),
        OutputFormat::Path => {
            for r in reports {
                println!("{}", r.file);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["FILE", "UPDATED"]);
            }
            for r in reports {
                table.add_row([r.file.as_str(), &r.updated.to_string()]);
            }
            println!("{table}");
        }
    }
}

// --- Clear reports ---

/// Write removed-artifact reports to stdout.
pub fn write_clear_reports(reports: &[ClearOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(reports),
        OutputFormat::Compact => print_compact_json(reports),
        OutputFormat::Ndjson => print_ndjson(reports),
        OutputFormat::Path => {
            for r in reports {
                if r.removed {
                    println!("{}", r.path);
                }
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["PATH", "REMOVED"]);
            }
            for r in reports {
                table.add_row([r.path.as_str(), if r.removed { "yes" } else { "no" }]);
            }
            println!("{table}");
        }
    }
}

// --- CSS strip reports ---

/// Write per-file CSS override-removal reports to stdout.
pub fn write_css_reports(reports: &[CssStripOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(reports),
        OutputFormat::Compact => print_compact_json(reports),
        OutputFormat::Ndjson => print_ndjson(reports),
        OutputFormat::Path => {
            for r in reports {
                println!("{}", r.file);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["FILE", "REMOVED", "PROPERTIES"]);
            }
            for r in reports {
                table.add_row([
                    r.file.as_str(),
                    &r.removed.to_string(),
                    &r.properties.join(", "),
                ]);
            }
            println!("{table}");
        }
    }
}

// --- Normalized PWA options ---

/// Write the normalized PWA options to stdout.
pub fn write_pwa_options(options: &PwaOptions, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json | OutputFormat::Auto => print_json(options),
        OutputFormat::Compact | OutputFormat::Ndjson => print_compact_json(options),
        OutputFormat::Path | OutputFormat::Table => write_pwa_table(options, ctx),
    }
}

fn write_pwa_table(options: &PwaOptions, ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["OPTION", "VALUE"]);
    }
    // Flatten the normalized config into option/value rows.
    if let Ok(serde_json::Value::Object(map)) = serde_json::to_value(options) {
        for (key, value) in &map {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            table.add_row([key.as_str(), rendered.as_str()]);
        }
    }
    println!("{table}");
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let Some(details) = &err.error.details {
                for d in details {
                    let _ = writeln!(out, "    {d}");
                }
            }
        }
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

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}
