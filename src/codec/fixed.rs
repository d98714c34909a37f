//! Fixed-point number rendering shared by every formatter in the crate.

pub const DEFAULT_DECIMALS: usize = 6;

/// Largest scaled magnitude at which every integer is exactly representable.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Render `value` with exactly `decimals` fraction digits.
///
/// Up to 15 decimals, rounding is half away from zero on
/// `value * 10^decimals`, so `to_fixed(2.5, 0) == "3"` and
/// `to_fixed(-0.125, 2) == "-0.13"`. Above 15 decimals, or when the scaled
/// value reaches 2^53, the value is handed to the standard formatter
/// unscaled, which rounds the exact binary value half to even. A result that
/// rounds to zero never carries a minus sign.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = if decimals <= 15 {
        let factor = 10f64.powi(decimals as i32);
        let scaled = value * factor;
        if scaled.abs() < EXACT_INTEGER_LIMIT {
            scaled.round() / factor
        } else {
            value
        }
    } else {
        value
    };

    // Drop the sign of negative zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}
