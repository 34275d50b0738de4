//! Exact comparisons between `i64` and `f64`
//!
//! Casting either side to the other's type loses information, so mixed
//! comparisons split the float into integer and fractional parts instead.

use std::cmp::Ordering;

/// 2^63 as a float; the first value above `i64::MAX`
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Total order on floats: NaN is greater than everything else and equal to
/// itself; `-0.0 == 0.0`
pub(crate) fn cmp_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact numeric comparison of an integer with a float (NaN sorts last)
pub(crate) fn cmp_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() || float >= TWO_POW_63 {
        return Ordering::Less;
    }
    if float < -TWO_POW_63 {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => cmp_floats(whole, float),
        ordering => ordering,
    }
}

/// The integer a float is exactly equal to, if any
pub(crate) fn exact_int(float: f64) -> Option<i64> {
    if float.is_finite() && float.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&float) {
        Some(float as i64)
    } else {
        None
    }
}

/// Python `repr` of a float: `1.0`, `0.1`, `1e+16`, `1e-05`, `inf`, `nan`
pub(crate) fn format_float(float: f64) -> String {
    if float.is_nan() {
        return "nan".to_string();
    }
    if float.is_infinite() {
        return if float > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let repr = format!("{:?}", float);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_int_float() {
        assert_eq!(cmp_int_float(1, 1.0), Ordering::Equal);
        assert_eq!(cmp_int_float(1, 1.5), Ordering::Less);
        assert_eq!(cmp_int_float(2, 1.5), Ordering::Greater);
        assert_eq!(cmp_int_float(-1, -1.5), Ordering::Greater);
        assert_eq!(cmp_int_float(-2, -1.5), Ordering::Less);
        assert_eq!(cmp_int_float(0, -0.0), Ordering::Equal);
        assert_eq!(cmp_int_float(i64::MAX, 9.3e18), Ordering::Less);
        assert_eq!(cmp_int_float(i64::MIN, -1e19), Ordering::Greater);
        assert_eq!(cmp_int_float(i64::MAX, f64::NAN), Ordering::Less);
    }

    #[test]
    fn test_large_int_precision() {
        // 2^53 + 1 is not representable as f64
        let big = (1_i64 << 53) + 1;
        assert_eq!(cmp_int_float(big, (1_i64 << 53) as f64), Ordering::Greater);
        assert_eq!(exact_int((1_i64 << 53) as f64), Some(1 << 53));
    }

    #[test]
    fn test_cmp_floats_nan() {
        assert_eq!(cmp_floats(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(cmp_floats(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(cmp_floats(0.0, -0.0), Ordering::Equal);
    }

    #[test]
    fn test_exact_int() {
        assert_eq!(exact_int(3.0), Some(3));
        assert_eq!(exact_int(-0.0), Some(0));
        assert_eq!(exact_int(3.5), None);
        assert_eq!(exact_int(f64::INFINITY), None);
        assert_eq!(exact_int(1e19), None);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(3.14), "3.14");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }
}
