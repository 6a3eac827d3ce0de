pub mod formatter;

pub use formatter::{
    format_age, format_breakdown, format_core_values, format_delta, format_match_table,
    format_match_tsv, format_saved_list, format_shortfalls, format_scores, format_scores_tsv, should_use_colors,
};
