pub mod formatter;

pub use formatter::{
    format_detail, format_json, format_summary, format_table, format_tsv, should_use_colors,
    REMOVED_HEADER,
};
