//! Date formatting for the tables.
//!
//! Delivery dates arrive as ISO strings (sometimes with a time part);
//! tables show them as dd.mm.yyyy. Anything unparseable is shown as-is.

use chrono::NaiveDate;

/// "2025-06-12" or "2025-06-12T00:00:00Z" -> "12.06.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-06-12"), "12.06.2025");
        assert_eq!(format_date("2025-06-12T14:02:26.123Z"), "12.06.2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("sin fecha"), "sin fecha");
    }
}
