//! Rupee amounts in words

use crate::{cardinal, Amount};

/// Amount-in-words formatting utilities
pub struct AmountFormatter;

impl AmountFormatter {
    /// Format an amount as rupees and paisa
    pub fn format(amount: &Amount) -> String {
        format_rupees(amount)
    }

    /// Format an integer as English words
    pub fn cardinal(n: u64) -> String {
        cardinal(n)
    }
}

/// Format an amount as "<Words> rupees and <NN> paisa"
///
/// The whole part is spelled out with hyphens replaced by spaces and the
/// first letter capitalised. Paisa are always two digits.
///
/// # Examples
/// ```
/// use amount_words::{format_rupees, Amount};
///
/// let amount: Amount = "100".parse().unwrap();
/// assert_eq!(format_rupees(&amount), "One hundred rupees and 00 paisa");
///
/// let amount: Amount = "0.5".parse().unwrap();
/// assert_eq!(format_rupees(&amount), "Zero rupees and 50 paisa");
/// ```
pub fn format_rupees(amount: &Amount) -> String {
    let words = cardinal(amount.major()).replace('-', " ");
    format!(
        "{} rupees and {:02} paisa",
        capitalize_first(&words),
        amount.minor()
    )
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
