use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::attendance::{AttendanceBook, EliminationRule, GradePolicy, ScoringPolicy};
use crate::buffered_eprintln;

/// A `(name, weekday)` pair that was not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line of the weekday token.
    pub line: usize,
    pub name: String,
    pub day: String,
}

/// What one ingestion run added to a book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub accepted: usize,
    pub skipped: Vec<SkippedRecord>,
    /// Lines that were not valid UTF-8; invalid bytes were replaced with U+FFFD.
    pub lossy_lines: Vec<usize>,
    /// Set when the source failed before its end.
    pub read_error: Option<String>,
}

/// Feed whitespace-separated `name weekday` pairs from `reader` into `book`.
///
/// Tokens are paired in order regardless of line breaks, and a dangling
/// final name is ignored. Pairs with an unknown weekday are skipped with a
/// warning. Lines that are not valid UTF-8 are decoded lossily and ingestion
/// continues. An I/O error ends ingestion; pairs read before it are kept.
pub fn load_from_reader<S, G, E, R>(
    book: &mut AttendanceBook<S, G, E>,
    mut reader: R,
) -> LoadSummary
where
    S: ScoringPolicy,
    G: GradePolicy,
    E: EliminationRule,
    R: BufRead,
{
    let mut summary = LoadSummary::default();
    let mut pending_name: Option<String> = None;

    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_no += 1,
            Err(e) => {
                buffered_eprintln!(
                    "warning: stopped reading input after line {}: {}",
                    line_no, e
                );
                summary.read_error = Some(e.to_string());
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            buffered_eprintln!(
                "warning: input line {} is not valid UTF-8; invalid bytes replaced",
                line_no
            );
            summary.lossy_lines.push(line_no);
        }

        for token in line.split_whitespace() {
            let Some(name) = pending_name.take() else {
                pending_name = Some(token.to_string());
                continue;
            };

            match book.add_record_line(&name, token) {
                Ok(()) => summary.accepted += 1,
                Err(e) => {
                    buffered_eprintln!("warning: line {}: skipped '{} {}': {}", line_no, name, token, e);
                    summary.skipped.push(SkippedRecord {
                        line: line_no,
                        name,
                        day: token.to_string(),
                    });
                }
            }
        }
    }

    if let Some(name) = pending_name {
        buffered_eprintln!("warning: ignoring trailing name '{}' without a weekday", name);
    }

    summary
}

/// Load attendance pairs from the file at `path`.
///
/// A file that cannot be opened is reported as a warning and contributes no
/// records; it is not an error.
pub fn load_from_file<S, G, E>(book: &mut AttendanceBook<S, G, E>, path: &Path) -> LoadSummary
where
    S: ScoringPolicy,
    G: GradePolicy,
    E: EliminationRule,
{
    match File::open(path) {
        Ok(file) => load_from_reader(book, BufReader::new(file)),
        Err(e) => {
            buffered_eprintln!("warning: failed to open {}: {}", path.display(), e);
            LoadSummary::default()
        }
    }
}
