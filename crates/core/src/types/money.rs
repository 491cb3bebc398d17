//! Currency rounding for totals computed from floating-point prices.
//!
//! Prices are stored as SQLite `REAL` values, so line subtotals and cart
//! totals accumulate binary floating-point error. Totals shown to clients
//! are always rounded to two decimal places; per-line subtotals are not.

/// Round a currency amount to two decimal places.
///
/// # Example
///
/// ```rust
/// assert_eq!(minicart_core::round_to_cents(0.1 + 0.2), 0.3);
/// assert_eq!(minicart_core::round_to_cents(24.999_999), 25.0);
/// ```
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
