//! Rounding helpers shared by the generators and reports.

use rust_decimal::Decimal;

/// Convert a drawn float amount into a currency value rounded to cents.
pub fn money(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(2)
}

/// Round a float to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `profit / revenue * 100` rounded to 2 places, 0 when revenue is not positive.
pub fn margin_pct(profit: Decimal, revenue: Decimal) -> Decimal {
    if revenue > Decimal::ZERO {
        (profit / revenue * Decimal::ONE_HUNDRED).round_dp(2)
    } else {
        Decimal::ZERO
    }
}
