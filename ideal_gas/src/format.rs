//! Display strings for the readouts

/// Significant digits for magnitudes ≥ 1.
const PRECISION: usize = 4;

/// Format `value` with a unit suffix, e.g. `"2.494e4 Pa"`.
///
/// Magnitudes of at least 1 get four significant digits, written in
/// fixed-point while the decimal exponent is below four and as
/// `m.mmme<exp>` beyond. Smaller magnitudes are always written as
/// `m.mme<exp>`.
pub fn format_si(value: f64, unit: &str) -> String {
    if value == 0.0 {
        return format!("0 {unit}");
    }
    if !value.is_finite() {
        return format!("{value} {unit}");
    }

    if value.abs() >= 1.0 {
        // exponent after rounding to four digits, so 9999.7 becomes 1.000e4
        let sci = format!("{:.*e}", PRECISION - 1, value);
        let exp = decimal_exponent(&sci);
        if exp >= PRECISION as i32 {
            format!("{sci} {unit}")
        } else {
            let decimals = (PRECISION as i32 - 1 - exp).max(0) as usize;
            format!("{value:.decimals$} {unit}")
        }
    } else {
        format!("{value:.2e} {unit}")
    }
}

fn decimal_exponent(sci: &str) -> i32 {
    sci.rsplit_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

pub fn format_temperature(t: f64) -> String {
    format!("{t:.1} K")
}

pub fn format_moles(n: f64) -> String {
    format!("{n:.4} mol")
}

pub fn format_volume(v: f64) -> String {
    format!("{v:.5} m³")
}

pub fn format_pressure(p: f64) -> String {
    format_si(p, "Pa")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_conditions_pressure() {
        assert_eq!(format_pressure(24943.387854459), "2.494e4 Pa");
    }

    #[test]
    fn zero_is_plain() {
        assert_eq!(format_si(0.0, "Pa"), "0 Pa");
    }

    #[test]
    fn fixed_point_below_ten_thousand() {
        assert_eq!(format_si(1.0, "Pa"), "1.000 Pa");
        assert_eq!(format_si(12.3456, "Pa"), "12.35 Pa");
        assert_eq!(format_si(831.4, "Pa"), "831.4 Pa");
        assert_eq!(format_si(4157.73, "Pa"), "4158 Pa");
    }

    #[test]
    fn rounding_can_push_into_exponent_form() {
        assert_eq!(format_si(9999.7, "Pa"), "1.000e4 Pa");
    }

    #[test]
    fn large_values_use_exponent() {
        assert_eq!(format_si(1.23456e6, "Pa"), "1.235e6 Pa");
        assert_eq!(format_si(-3.0e5, "Pa"), "-3.000e5 Pa");
    }

    #[test]
    fn small_values_use_three_digit_mantissa() {
        assert_eq!(format_si(0.05, "Pa"), "5.00e-2 Pa");
        assert_eq!(format_si(-0.000123, "Pa"), "-1.23e-4 Pa");
    }

    #[test]
    fn readouts_use_fixed_decimals() {
        assert_eq!(format_temperature(300.0), "300.0 K");
        assert_eq!(format_moles(1.0), "1.0000 mol");
        assert_eq!(format_volume(0.1), "0.10000 m³");
    }
}
