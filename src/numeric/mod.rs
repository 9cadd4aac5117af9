//! Numeric helpers shared by the value models
//!
//! Norms are computed through nalgebra so that the coordinate vector and any
//! caller working with `DVector` agree on the same arithmetic. Decimal
//! handling goes through Rust's float formatting, which rounds exactly in
//! decimal rather than through a power-of-ten multiplication.

use nalgebra::DVector;

use crate::constants::MAX_DECIMALS;

/// Returns the Euclidean norm of `values`
pub fn norm(values: &[f64]) -> f64 {
    DVector::from_column_slice(values).norm()
}

/// Returns the squared Euclidean norm of `values`
pub fn squared_norm(values: &[f64]) -> f64 {
    DVector::from_column_slice(values).norm_squared()
}

/// Rescales `values` in place to unit norm and returns the previous norm
///
/// The components are first divided by their largest magnitude so that the
/// computation does not overflow for values close to `f64::MAX`. A zero
/// vector is left untouched and `0.0` is returned.
///
/// # Examples
///
/// ```rust
/// use ctk_coordinates::numeric::normalize;
///
/// let mut values = [3.0, 4.0, 0.0];
/// let previous = normalize(&mut values);
/// assert_eq!(previous, 5.0);
/// assert!((values[0] - 0.6).abs() < 1e-15);
/// assert!((values[1] - 0.8).abs() < 1e-15);
/// ```
pub fn normalize(values: &mut [f64]) -> f64 {
    let largest = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if largest == 0.0 || !largest.is_finite() {
        return largest;
    }

    let mut scaled = DVector::from_column_slice(values) / largest;
    let scaled_norm = scaled.norm();
    scaled /= scaled_norm;
    values.copy_from_slice(scaled.as_slice());

    scaled_norm * largest
}

/// Restricts `value` to `[minimum, maximum]`
///
/// Unlike `f64::clamp` this never panics; callers are expected to keep
/// `minimum <= maximum`.
pub fn bound(value: f64, minimum: f64, maximum: f64) -> f64 {
    value.max(minimum).min(maximum)
}

/// Rounds `value` to `decimals` decimal digits
///
/// Non-finite values are returned unchanged.
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let decimals = decimals.min(MAX_DECIMALS);
    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// Returns the minimal number of decimals needed to represent `value`
///
/// This is the smallest `d` such that formatting `value` with `d` decimals
/// parses back to exactly `value`. When no such `d` exists up to
/// [`MAX_DECIMALS`] (e.g. `1.0 / 3.0`), or the value is not finite,
/// `MAX_DECIMALS` is returned.
///
/// # Examples
///
/// ```rust
/// use ctk_coordinates::numeric::significant_decimals;
///
/// assert_eq!(significant_decimals(2.0), 0);
/// assert_eq!(significant_decimals(0.1), 1);
/// assert_eq!(significant_decimals(-1.25), 2);
/// assert_eq!(significant_decimals(1.0 / 3.0), 16);
/// ```
pub fn significant_decimals(value: f64) -> usize {
    if !value.is_finite() {
        return MAX_DECIMALS;
    }
    (0..=MAX_DECIMALS)
        .find(|&decimals| {
            format!("{:.*}", decimals, value)
                .parse::<f64>()
                .map_or(false, |parsed| parsed == value)
        })
        .unwrap_or(MAX_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norms() {
        let values = [3.0, 4.0, 12.0];
        assert_relative_eq!(norm(&values), 13.0);
        assert_relative_eq!(squared_norm(&values), 169.0);
        assert_eq!(norm(&[]), 0.0);
    }

    #[test]
    fn test_normalize() {
        let mut values = [3.0, 4.0, 0.0];
        let previous = normalize(&mut values);
        assert_relative_eq!(previous, 5.0);
        assert_relative_eq!(values[0], 0.6, epsilon = 1e-15);
        assert_relative_eq!(values[1], 0.8, epsilon = 1e-15);
        assert_eq!(values[2], 0.0);
        assert_relative_eq!(norm(&values), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let mut values = [0.0, 0.0, 0.0];
        assert_eq!(normalize(&mut values), 0.0);
        assert_eq!(values, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize_huge_values() {
        let mut values = [f64::MAX, f64::MAX];
        normalize(&mut values);
        assert_relative_eq!(values[0], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(values[1], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
    }

    #[test]
    fn test_bound() {
        assert_eq!(bound(5.0, 0.0, 10.0), 5.0);
        assert_eq!(bound(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(bound(f64::INFINITY, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(8.69 - 0.01, 2), 8.68);
        assert_eq!(round_to_decimals(5.0 + 0.1, 3), 5.1);
        assert_eq!(round_to_decimals(1.23456, 0), 1.0);
        assert!(round_to_decimals(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_significant_decimals() {
        assert_eq!(significant_decimals(0.0), 0);
        assert_eq!(significant_decimals(-0.0), 0);
        assert_eq!(significant_decimals(100.0), 0);
        assert_eq!(significant_decimals(0.1), 1);
        assert_eq!(significant_decimals(0.333), 3);
        assert_eq!(significant_decimals(1.0 / 3.0), 16);
        assert_eq!(significant_decimals(f64::INFINITY), 16);
    }
}
