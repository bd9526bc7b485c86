// File: src/present.rs
// Purpose: Console formatting of endpoint records

use std::io::{self, Write};

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::record::EndpointRecord;

/// Prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "[ENDPOINT]";

const PREFIX_PADDING: usize = 3;
const ORIGIN_WIDTH: usize = 15;
const METHOD_WIDTH: usize = 12;

/// How endpoint lines are rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationOptions {
    /// Leading label of each line (default `[ENDPOINT]`, ignored when compact)
    pub prefix: Option<String>,

    /// Wrap each column in a terminal color
    pub use_color: bool,

    /// Print only the method and path columns
    pub compact: bool,
}

impl PresentationOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// The configured prefix, falling back to [`DEFAULT_PREFIX`] when unset or empty
    pub fn effective_prefix(&self) -> &str {
        self.prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(DEFAULT_PREFIX)
    }
}

/// Formats one record as a console line (without trailing newline)
///
/// Columns: prefix + 3 spaces, origin padded to 15, method padded to 12, path.
/// Compact lines keep only the method and path columns.
///
/// With `use_color` the columns are green, cyan, blue and bright blue. The
/// escape codes are emitted whenever `use_color` is set, whatever the
/// destination of the line or the terminal the process runs in.
///
/// # Examples
///
/// ```
/// use stack_endpoints::{present, EndpointRecord, Origin, PresentationOptions};
/// use stack_router::Method;
///
/// let record = EndpointRecord::new(Origin::Direct, Method::Get, "/testGet");
/// let options = PresentationOptions::default().with_prefix("app");
///
/// assert_eq!(
///     present::format(&record, &options),
///     "app   direct         GET         /testGet"
/// );
/// ```
pub fn format(record: &EndpointRecord, options: &PresentationOptions) -> String {
    let method = format!("{:<width$}", record.method(), width = METHOD_WIDTH);
    let path = record.path();

    let columns = (!options.compact).then(|| {
        (
            format!("{}{}", options.effective_prefix(), " ".repeat(PREFIX_PADDING)),
            format!("{:<width$}", record.origin(), width = ORIGIN_WIDTH),
        )
    });

    match (columns, options.use_color) {
        (Some((prefix, origin)), true) => format!(
            "{}{}{}{}",
            paint(&prefix, Color::Green),
            paint(&origin, Color::Cyan),
            paint(&method, Color::Blue),
            paint(path, Color::BrightBlue)
        ),
        (Some((prefix, origin)), false) => format!("{}{}{}{}", prefix, origin, method, path),
        (None, true) => format!("{}{}", paint(&method, Color::Blue), paint(path, Color::BrightBlue)),
        (None, false) => format!("{}{}", method, path),
    }
}

/// Wraps `text` in the SGR foreground sequence of `color` and a reset
///
/// `ColoredString`'s `Display` drops its codes when stdout is not a
/// terminal, so the sequence is assembled from the color code directly.
fn paint(text: &str, color: Color) -> String {
    format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
}

/// Writes one line per record to `sink`, in list order
///
/// Writes nothing for an empty list.
pub fn print<W: Write>(
    records: &[EndpointRecord],
    options: &PresentationOptions,
    sink: &mut W,
) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    for record in records {
        writeln!(sink, "{}", format(record, options))?;
    }
    sink.flush()
}

/// [`print`] to standard output
pub fn print_stdout(records: &[EndpointRecord], options: &PresentationOptions) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print(records, options, &mut handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EndpointMethod, Origin};
    use pretty_assertions::assert_eq;
    use stack_router::Method;

    fn record() -> EndpointRecord {
        EndpointRecord::new(Origin::Mounted, Method::Delete, "/tags/:id")
    }

    #[test]
    fn test_default_prefix() {
        let line = format(&record(), &PresentationOptions::default());
        assert_eq!(line, "[ENDPOINT]   mounted        DELETE      /tags/:id");
    }

    #[test]
    fn test_empty_prefix_falls_back_to_default() {
        let options = PresentationOptions::default().with_prefix("");
        assert!(format(&record(), &options).starts_with("[ENDPOINT]   "));
    }

    #[test]
    fn test_compact_omits_prefix_and_origin() {
        let options = PresentationOptions::default().with_prefix("app").compact();
        assert_eq!(format(&record(), &options), "DELETE      /tags/:id");
    }

    #[test]
    fn test_all_method_column() {
        let record = EndpointRecord::new(Origin::Direct, EndpointMethod::All, "/*");
        let options = PresentationOptions::default().compact();
        assert_eq!(format(&record, &options), "ALL         /*");
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let record = EndpointRecord::new(Origin::Direct, Method::Unsubscribe, "/feed");
        let options = PresentationOptions::default().compact();
        assert_eq!(format(&record, &options), "UNSUBSCRIBE /feed");
    }

    #[test]
    fn test_color_does_not_depend_on_terminal() {
        let record = EndpointRecord::new(Origin::Direct, Method::Get, "/x");
        let line = format(&record, &PresentationOptions::default().with_color(true));

        assert_eq!(
            line,
            "\x1b[32m[ENDPOINT]   \x1b[0m\x1b[36mdirect         \x1b[0m\x1b[34mGET         \x1b[0m\x1b[94m/x\x1b[0m"
        );
    }

    #[test]
    fn test_paint_wraps_in_sgr_codes() {
        assert_eq!(paint("GET", Color::Blue), "\x1b[34mGET\x1b[0m");
        assert_eq!(paint("/x", Color::BrightBlue), "\x1b[94m/x\x1b[0m");
    }

    #[test]
    fn test_print_empty_writes_nothing() {
        let mut out = Vec::new();
        print(&[], &PresentationOptions::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_one_line_per_record() {
        let records = vec![
            EndpointRecord::new(Origin::Direct, Method::Get, "/"),
            EndpointRecord::new(Origin::Direct, Method::Put, "/:id"),
        ];
        let mut out = Vec::new();
        print(&records, &PresentationOptions::default().compact(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "GET         /\nPUT         /:id\n"
        );
    }
}
