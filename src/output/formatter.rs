use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::attendance::{ParticipantRecord, Weekday};

/// Header printed above the elimination list in the summary.
pub const REMOVED_HEADER: &str = "Removed player\n==============";

/// Classic report: one score line per participant, then the removal list
///
/// ```text
/// NAME : Alice, POINT : 40, GRADE : SILVER
///
/// Removed player
/// ==============
/// Carol
/// ```
pub fn format_summary(records: &[ParticipantRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "NAME : {}, POINT : {}, GRADE : {}\n",
            record.name, record.total_points, record.grade
        ));
    }

    out.push('\n');
    out.push_str(REMOVED_HEADER);
    out.push('\n');
    for record in records.iter().filter(|r| r.elimination_candidate) {
        out.push_str(&record.name);
        out.push('\n');
    }
    out
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn paint_grade(grade: &str, use_colors: bool) -> String {
    if !use_colors {
        return grade.to_string();
    }
    match grade {
        "GOLD" | "PLATINUM" => grade.yellow().bold().to_string(),
        "SILVER" => grade.white().bold().to_string(),
        "NORMAL" => grade.to_string(),
        _ => grade.dimmed().to_string(),
    }
}

/// Truncate a name to `max_width` characters, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

const MAX_NAME_WIDTH: usize = 24;

/// Aligned table: id, name, points, grade, and a trailing `x` on
/// elimination candidates. No headers.
pub fn format_table(records: &[ParticipantRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No attendance records found.".to_string();
    }

    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);
    let id_width = records.len().to_string().len();

    records
        .iter()
        .map(|record| {
            let id_str = format!("{:>width$}.", record.id, width = id_width);
            let name = format!(
                "{:<width$}",
                truncate_name(&record.name, name_width),
                width = name_width
            );
            let points = format!("{:>5}", record.total_points);
            let grade = paint_grade(&record.grade, use_colors);
            let marker = if record.elimination_candidate { "  x" } else { "" };

            if use_colors {
                format!(
                    "{} {}  {}  {}{}",
                    id_str.dimmed(),
                    name,
                    points.bold(),
                    grade,
                    marker.red()
                )
            } else {
                format!("{} {}  {}  {}{}", id_str, name, points, grade, marker)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line block for verbose mode: day counts and the point breakdown
pub fn format_detail(record: &ParticipantRecord, use_colors: bool) -> String {
    let days = Weekday::ALL
        .iter()
        .map(|day| format!("{} {}", &day.name()[..3], record.count(*day)))
        .collect::<Vec<_>>()
        .join(", ");

    let bonuses = if record.bonuses.is_empty() {
        "none".to_string()
    } else {
        record
            .bonuses
            .iter()
            .map(|b| format!("{} {:+}", b.rule, b.points))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let title = format!("#{} {}", record.id, record.name);
    let title = if use_colors {
        title.bold().to_string()
    } else {
        title
    };

    let mut out = format!(
        "{}\n  Days: {}\n  Base: {}\n  Bonus: {} ({})\n  Total: {}\n  Grade: {}",
        title,
        days,
        record.base_points,
        record.bonus_points,
        bonuses,
        record.total_points,
        paint_grade(&record.grade, use_colors),
    );
    if record.elimination_candidate {
        let flag = "  Elimination candidate";
        if use_colors {
            out.push_str(&format!("\n{}", flag.red()));
        } else {
            out.push_str(&format!("\n{}", flag));
        }
    }
    out
}

/// Tab-separated values for scripting
/// Columns: id, name, points, grade, eliminated (no headers, no colors)
pub fn format_tsv(records: &[ParticipantRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                r.id, r.name, r.total_points, r.grade, r.elimination_candidate
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array of the full records
pub fn format_json(records: &[ParticipantRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
