//! General-format rendering of floating point numbers
//!
//! Six significant digits, fixed notation for exponents in `-4..6` and
//! scientific notation otherwise, trailing zeros removed.

const PRECISION: i32 = 6;

/// Render `value` the way a default-configured text stream prints a double
///
/// ```rust
/// use scorepipe::report::format_general;
///
/// assert_eq!(format_general(250000.0), "250000");
/// assert_eq!(format_general(1_000_000.0), "1e+06");
/// assert_eq!(format_general(0.000123456789), "0.000123457");
/// assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first; the exponent can change (9.999995 -> 1e+01)
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..PRECISION).contains(&exponent) {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
