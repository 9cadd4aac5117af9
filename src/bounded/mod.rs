//! # Bounded Value Module
//!
//! The numeric model behind a double spin box or a double slider: a single
//! `f64` kept inside `[minimum, maximum]`, adjusted in single or page steps,
//! with optional inverted controls.
//!
//! ## Inverted Controls
//!
//! With inverted controls the step directions are swapped: `step_up`
//! decreases the value and `step_down` increases it. Clamping still happens
//! at whichever bound is being approached, so at the minimum `step_up` does
//! nothing while `step_down` moves away from it, and the reverse holds at
//! the maximum.
//!
//! ## Examples
//!
//! ```rust
//! use ctk_coordinates::BoundedValue;
//!
//! let mut spin_box = BoundedValue::new();
//! spin_box.set_range(1.0, 15.0).unwrap();
//! spin_box.set_value(8.69);
//! spin_box.set_inverted_controls(true);
//! spin_box.set_single_step(0.01).unwrap();
//!
//! spin_box.step_up();
//! assert_eq!(spin_box.value(), 8.68);
//! ```

pub mod decimals;

pub use decimals::DecimalsOption;

use log::{debug, trace};

use crate::constants::{
    DEFAULT_SINGLE_STEP, MAX_DECIMALS, SPINBOX_DECIMALS, SPINBOX_MAXIMUM, SPINBOX_MINIMUM,
    SPINBOX_PAGE_STEP,
};
use crate::numeric::{bound, round_to_decimals, significant_decimals};
use crate::{CoordinatesError, Result};

/// Applies `steps` increments of `single_step` to `value`
///
/// Positive `steps` move toward `maximum`, negative toward `minimum`; the
/// direction is reversed when `inverted` is set. The result is clamped to
/// the bounds but not rounded.
pub fn stepped_value(
    value: f64,
    steps: i32,
    single_step: f64,
    minimum: f64,
    maximum: f64,
    inverted: bool,
) -> f64 {
    let direction = if inverted { -1.0 } else { 1.0 };
    bound(
        value + direction * f64::from(steps) * single_step,
        minimum,
        maximum,
    )
}

/// Number of decimals a stepped value is rounded to
///
/// Never fewer than the step itself needs, so that a step smaller than the
/// display precision still moves the value, and never fewer than `value`
/// already carries, so stepping does not discard stored digits.
pub fn step_precision(decimals: usize, single_step: f64, value: f64) -> usize {
    decimals
        .max(significant_decimals(single_step))
        .max(significant_decimals(value))
}

/// Like [`stepped_value`], with the result rounded to [`step_precision`]
///
/// A step that reaches a bound yields that bound exactly, whatever its
/// number of decimals.
pub fn rounded_step_value(
    value: f64,
    steps: i32,
    single_step: f64,
    minimum: f64,
    maximum: f64,
    inverted: bool,
    decimals: usize,
) -> f64 {
    let moved = stepped_value(value, steps, single_step, minimum, maximum, inverted);
    if moved == minimum || moved == maximum {
        return moved;
    }
    bound(
        round_to_decimals(moved, step_precision(decimals, single_step, value)),
        minimum,
        maximum,
    )
}

pub(crate) fn check_range(minimum: f64, maximum: f64) -> Result<()> {
    if minimum.is_nan() || maximum.is_nan() {
        return Err(CoordinatesError::InvalidArgument(
            "range bounds must not be NaN".to_string(),
        ));
    }
    if minimum > maximum {
        return Err(CoordinatesError::InvalidArgument(format!(
            "minimum {} is greater than maximum {}",
            minimum, maximum
        )));
    }
    Ok(())
}

pub(crate) fn check_step(step: f64) -> Result<()> {
    if !step.is_finite() || step < 0.0 {
        return Err(CoordinatesError::InvalidArgument(format!(
            "step must be finite and non-negative, got {}",
            step
        )));
    }
    Ok(())
}

pub(crate) fn check_decimals(decimals: usize) -> Result<()> {
    if decimals > MAX_DECIMALS {
        return Err(CoordinatesError::InvalidArgument(format!(
            "decimals must be at most {}, got {}",
            MAX_DECIMALS, decimals
        )));
    }
    Ok(())
}

/// A single bounded, steppable `f64`
///
/// Values are rounded to `decimals` when set, the way a spin box only ever
/// holds what it can display.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedValue {
    value: f64,
    minimum: f64,
    maximum: f64,
    single_step: f64,
    page_step: f64,
    decimals: usize,
    decimals_option: DecimalsOption,
    inverted_controls: bool,
}

impl Default for BoundedValue {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedValue {
    /// Creates a value of 0 in `[0, 99.99]` with 2 decimals
    pub fn new() -> Self {
        BoundedValue {
            value: SPINBOX_MINIMUM,
            minimum: SPINBOX_MINIMUM,
            maximum: SPINBOX_MAXIMUM,
            single_step: DEFAULT_SINGLE_STEP,
            page_step: SPINBOX_PAGE_STEP,
            decimals: SPINBOX_DECIMALS,
            decimals_option: DecimalsOption::Fixed,
            inverted_controls: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn single_step(&self) -> f64 {
        self.single_step
    }

    pub fn page_step(&self) -> f64 {
        self.page_step
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn decimals_option(&self) -> DecimalsOption {
        self.decimals_option
    }

    pub fn inverted_controls(&self) -> bool {
        self.inverted_controls
    }

    /// Decimals the value should be displayed with under the current option
    pub fn effective_decimals(&self) -> usize {
        self.decimals_option
            .resolve(self.decimals, significant_decimals(self.value))
    }

    /// Sets the value, rounded to `decimals` and clamped to the range
    ///
    /// Returns whether the stored value changed. NaN is ignored.
    pub fn set_value(&mut self, value: f64) -> bool {
        if value.is_nan() {
            debug!("Ignoring NaN value for bounded value");
            return false;
        }
        let new_value = bound(
            round_to_decimals(value, self.decimals),
            self.minimum,
            self.maximum,
        );
        self.replace_value(new_value)
    }

    /// Sets both bounds and re-clamps the value
    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        check_range(minimum, maximum)?;
        self.minimum = minimum;
        self.maximum = maximum;
        let clamped = bound(self.value, minimum, maximum);
        self.replace_value(clamped);
        Ok(())
    }

    pub fn set_single_step(&mut self, step: f64) -> Result<()> {
        check_step(step)?;
        self.single_step = step;
        Ok(())
    }

    pub fn set_page_step(&mut self, step: f64) -> Result<()> {
        check_step(step)?;
        self.page_step = step;
        Ok(())
    }

    /// Sets the decimals and re-rounds the current value
    pub fn set_decimals(&mut self, decimals: usize) -> Result<()> {
        check_decimals(decimals)?;
        self.decimals = decimals;
        let rounded = bound(
            round_to_decimals(self.value, decimals),
            self.minimum,
            self.maximum,
        );
        self.replace_value(rounded);
        Ok(())
    }

    pub fn set_decimals_option(&mut self, option: DecimalsOption) {
        self.decimals_option = option;
    }

    pub fn set_inverted_controls(&mut self, inverted: bool) {
        self.inverted_controls = inverted;
    }

    /// Moves the value by `steps` single steps, returning whether it changed
    pub fn step_by(&mut self, steps: i32) -> bool {
        self.step_with(steps, self.single_step)
    }

    pub fn step_up(&mut self) -> bool {
        self.step_by(1)
    }

    pub fn step_down(&mut self) -> bool {
        self.step_by(-1)
    }

    pub fn page_up(&mut self) -> bool {
        self.step_with(1, self.page_step)
    }

    pub fn page_down(&mut self) -> bool {
        self.step_with(-1, self.page_step)
    }

    fn step_with(&mut self, steps: i32, step: f64) -> bool {
        let moved = rounded_step_value(
            self.value,
            steps,
            step,
            self.minimum,
            self.maximum,
            self.inverted_controls,
            self.decimals,
        );
        self.replace_value(moved)
    }

    fn replace_value(&mut self, value: f64) -> bool {
        if value == self.value {
            return false;
        }
        trace!("Bounded value {} -> {}", self.value, value);
        self.value = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spin_box(minimum: f64, maximum: f64, value: f64) -> BoundedValue {
        let mut spin_box = BoundedValue::new();
        spin_box.set_range(minimum, maximum).unwrap();
        spin_box.set_value(value);
        spin_box
    }

    #[test]
    fn test_defaults() {
        let value = BoundedValue::default();
        assert_eq!(value.value(), 0.0);
        assert_eq!(value.minimum(), 0.0);
        assert_eq!(value.maximum(), 99.99);
        assert_eq!(value.single_step(), 1.0);
        assert_eq!(value.page_step(), 10.0);
        assert_eq!(value.decimals(), 2);
        assert!(!value.inverted_controls());
    }

    #[test]
    fn test_set_value_rounds_and_clamps() {
        let mut value = spin_box(0.0, 10.0, 0.0);
        assert!(value.set_value(3.14159));
        assert_eq!(value.value(), 3.14);
        value.set_value(42.0);
        assert_eq!(value.value(), 10.0);
        assert!(!value.set_value(f64::NAN));
        assert_eq!(value.value(), 10.0);
    }

    #[test]
    fn test_invalid_range_leaves_value_untouched() {
        let mut value = spin_box(0.0, 10.0, 5.0);
        assert!(value.set_range(10.0, 0.0).is_err());
        assert!(value.set_range(f64::NAN, 1.0).is_err());
        assert_eq!(value.minimum(), 0.0);
        assert_eq!(value.maximum(), 10.0);
        assert_eq!(value.value(), 5.0);
    }

    #[test]
    fn test_set_range_reclamps() {
        let mut value = spin_box(0.0, 10.0, 8.0);
        value.set_range(0.0, 5.0).unwrap();
        assert_eq!(value.value(), 5.0);
    }

    #[test]
    fn test_single_step_add() {
        let mut slider = spin_box(0.0, 10.0, 5.0);
        slider.set_single_step(0.1).unwrap();
        slider.set_page_step(1.0).unwrap();
        assert!(slider.step_up());
        assert_relative_eq!(slider.value(), 5.1);
        assert!(slider.page_down());
        assert_relative_eq!(slider.value(), 4.1);
    }

    #[test]
    fn test_inverted_controls() {
        let mut spin_box = spin_box(1.0, 15.0, 8.69);
        spin_box.set_inverted_controls(true);
        assert!(spin_box.inverted_controls());

        spin_box.set_single_step(0.01).unwrap();
        spin_box.step_up();
        assert_eq!(spin_box.value(), 8.68);
        spin_box.set_single_step(1.0).unwrap();
        spin_box.step_down();
        assert_eq!(spin_box.value(), 9.68);

        spin_box.set_value(spin_box.minimum());
        assert!(!spin_box.step_up());
        assert_eq!(spin_box.value(), spin_box.minimum());
        assert!(spin_box.step_down());
        assert_ne!(spin_box.value(), spin_box.minimum());

        spin_box.set_value(spin_box.maximum());
        assert!(!spin_box.step_down());
        assert_eq!(spin_box.value(), spin_box.maximum());
        assert!(spin_box.step_up());
        assert_ne!(spin_box.value(), spin_box.maximum());
    }

    #[test]
    fn test_regular_controls_at_bounds() {
        let mut spin_box = spin_box(1.0, 15.0, 1.0);
        assert!(!spin_box.step_down());
        assert!(spin_box.step_up());
        assert_ne!(spin_box.value(), spin_box.minimum());

        spin_box.set_value(spin_box.maximum());
        assert!(!spin_box.step_up());
        assert!(spin_box.step_down());
        assert_ne!(spin_box.value(), spin_box.maximum());
    }

    #[test]
    fn test_step_smaller_than_decimals_still_moves() {
        let mut value = spin_box(0.0, 1.0, 0.5);
        value.set_single_step(0.001).unwrap();
        assert!(value.step_up());
        assert_eq!(value.value(), 0.501);
    }

    #[test]
    fn test_step_reaches_bounds_with_extra_decimals() {
        let mut value = spin_box(0.0, 10.0, 0.1);
        value.set_range(0.0, 0.12345).unwrap();
        assert!(value.step_up());
        assert_eq!(value.value(), 0.12345);
        assert!(!value.step_up());

        value.set_range(0.00321, 0.12345).unwrap();
        assert!(value.page_down());
        assert_eq!(value.value(), 0.00321);
    }

    #[test]
    fn test_step_precision_keeps_value_digits() {
        assert_eq!(step_precision(2, 1.0, 5.0), 2);
        assert_eq!(step_precision(2, 0.001, 5.0), 3);
        assert_eq!(step_precision(2, 0.1, 5.12345), 5);
    }

    #[test]
    fn test_invalid_steps_and_decimals() {
        let mut value = BoundedValue::new();
        assert!(value.set_single_step(-1.0).is_err());
        assert!(value.set_page_step(f64::INFINITY).is_err());
        assert!(value.set_decimals(17).is_err());
        assert_eq!(value.single_step(), 1.0);
        assert_eq!(value.decimals(), 2);
    }

    #[test]
    fn test_effective_decimals() {
        let mut value = spin_box(0.0, 10.0, 1.5);
        assert_eq!(value.effective_decimals(), 2);
        value.set_decimals_option(DecimalsOption::ByValue);
        assert_eq!(value.effective_decimals(), 1);
        value.set_decimals_option(DecimalsOption::ByValueAsMin);
        assert_eq!(value.effective_decimals(), 2);
    }
}
