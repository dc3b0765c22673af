//! Number formatting for filter reports.
//!
//! Per-element tables use fixed decimals. The summary uses a "general"
//! significant-digits format: trailing zeros are dropped and very large or
//! very small values switch to exponent form (`1.2e+03`, `1.23e-05`).

use num_complex::Complex64;

/// Formats `value` with a fixed number of decimals.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    non_finite(value).unwrap_or_else(|| format!("{value:.decimals$}"))
}

/// Formats `value` with a fixed number of decimals and an explicit sign.
fn fixed_signed(value: f64, decimals: usize) -> String {
    match non_finite(value) {
        Some(text) if text.starts_with('-') => text,
        Some(text) => format!("+{text}"),
        None => format!("{value:+.decimals$}"),
    }
}

/// Formats a complex value as `"a±bj"` with fixed decimals on both parts.
pub(crate) fn fixed_complex(z: Complex64, decimals: usize) -> String {
    format!("{}{}j", fixed(z.re, decimals), fixed_signed(z.im, decimals))
}

/// Formats `value` with `digits` significant digits.
///
/// Fixed notation keeps at least one decimal (`294.0`, `12.0`), so values
/// whose integer part already uses every digit go to exponent form.
pub(crate) fn general(value: f64, digits: usize) -> String {
    significant(value, digits, true)
}

/// Formats a complex value with `digits` significant digits per part.
///
/// Produces `"(a±bj)"`, or just `"bj"` when the real part is positive zero.
pub(crate) fn general_complex(z: Complex64, digits: usize) -> String {
    let im = significant(z.im, digits, false);
    if z.re == 0.0 && z.re.is_sign_positive() {
        return format!("{im}j");
    }

    let re = significant(z.re, digits, false);
    if im.starts_with('-') {
        format!("({re}{im}j)")
    } else {
        format!("({re}+{im}j)")
    }
}

fn significant(value: f64, digits: usize, keep_decimal: bool) -> String {
    if let Some(text) = non_finite(value) {
        return text;
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let max_exponent = digits as i32;

    let switch_at = if keep_decimal {
        max_exponent - 1
    } else {
        max_exponent
    };

    if exponent < -4 || exponent >= switch_at {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_zeros(mantissa),
            exponent.unsigned_abs()
        );
    }

    #[allow(clippy::cast_sign_loss)]
    let decimals = (max_exponent - 1 - exponent) as usize;
    let mut text = trim_zeros(&format!("{value:.decimals$}")).to_string();
    if keep_decimal && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("nan".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_decimals() {
        assert_eq!(fixed(222.0, 2), "222.00");
        assert_eq!(fixed(-89.7081, 2), "-89.71");
        assert_eq!(fixed(f64::NAN, 2), "nan");
        assert_eq!(fixed(f64::NEG_INFINITY, 2), "-inf");
    }

    #[test]
    fn fixed_complex_always_signs_the_imaginary_part() {
        assert_eq!(fixed_complex(Complex64::new(0.0206, -3.998), 2), "0.02-4.00j");
        assert_eq!(fixed_complex(Complex64::new(2.0, 0.0), 2), "2.00+0.00j");
        assert_eq!(fixed_complex(Complex64::new(0.0, f64::INFINITY), 2), "0.00+infj");
    }

    #[test]
    fn general_significant_digits() {
        assert_eq!(general(294.001_046_844, 4), "294.0");
        assert_eq!(general(8.543, 4), "8.543");
        assert_eq!(general(20.774_533_98, 4), "20.77");
        assert_eq!(general(1.042_973, 3), "1.04");
        assert_eq!(general(12.0, 4), "12.0");
        assert_eq!(general(0.0, 4), "0.0");
        assert_eq!(general(-0.0, 4), "-0.0");
    }

    #[test]
    fn general_switches_to_exponent_form() {
        assert_eq!(general(1_234.5, 2), "1.2e+03");
        assert_eq!(general(100.0, 2), "1e+02");
        assert_eq!(general(99.96, 3), "1e+02");
        assert_eq!(general(0.000_012_34, 3), "1.23e-05");
        assert_eq!(general(0.000_123_4, 3), "0.000123");
        assert_eq!(general(123.4, 3), "1.23e+02");
        assert_eq!(general(15.0, 2), "1.5e+01");
        assert_eq!(general(0.0, 1), "0e+00");
    }

    #[test]
    fn general_complex_forms() {
        assert_eq!(general_complex(Complex64::new(0.0206, -3.998), 2), "(0.021-4j)");
        assert_eq!(general_complex(Complex64::new(0.0, 1.0), 2), "1j");
        assert_eq!(general_complex(Complex64::new(0.0, -4.0), 2), "-4j");
        assert_eq!(general_complex(Complex64::new(-0.0, 2.0), 2), "(-0+2j)");
        assert_eq!(general_complex(Complex64::new(2.0, 0.0), 2), "(2+0j)");
        assert_eq!(general_complex(Complex64::new(1e-5, 3e6), 2), "(1e-05+3e+06j)");
        assert_eq!(general_complex(Complex64::new(150.0, 1.0), 3), "(150+1j)");
    }
}
