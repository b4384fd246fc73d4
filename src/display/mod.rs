//! Display formatting for terminal output

pub mod purchase;
pub mod summary;

pub use purchase::{format_date, format_purchase_details, format_purchase_table};
pub use summary::format_summary;

/// Truncate a string to at most `max_len` characters, ending with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
