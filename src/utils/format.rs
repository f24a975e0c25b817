use chrono::{DateTime, Utc};

use crate::models::Currency;

/// "12.50 EUR"
pub fn format_price(amount: f64, currency: Currency) -> String {
    format!("{:.2} {}", amount, currency.code())
}

pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(format_price(12.5, Currency::Eur), "12.50 EUR");
        assert_eq!(format_price(0.0, Currency::Uah), "0.00 UAH");
    }

    #[test]
    fn datetime_is_minute_precision() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 59).unwrap();
        assert_eq!(format_datetime(&at), "2024-03-09 14:05");
    }
}
