//! # Coordinate Vector Module
//!
//! [`CoordinateVector`] holds N coordinates that share one range, one step,
//! one display precision and, optionally, a unit-norm constraint. It is the
//! state a coordinate editor shows with one field per coordinate.
//!
//! ## Invariants
//!
//! - every coordinate lies within `[minimum, maximum]`
//! - while normalized, the bounds are `[-1, 1]` and the Euclidean norm is 1
//!   after every mutation, except for the zero vector which stays zero
//! - no coordinate is NaN
//!
//! Failed calls leave the vector untouched and notify nobody.
//!
//! ## Change Notification
//!
//! Listeners registered with [`CoordinateVector::subscribe`] are called with
//! the full coordinate slice whenever a mutation actually changes it.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use ctk_coordinates::CoordinateVector;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut vector = CoordinateVector::new();
//! vector.subscribe(move |values| sink.borrow_mut().push(values.to_vec()));
//! vector.set_coordinates(&[1.0, 2.0, 3.0]).unwrap();
//!
//! assert_eq!(*seen.borrow(), vec![vec![1.0, 2.0, 3.0]]);
//! ```

pub mod config;
pub mod text;

use std::fmt;

use log::{debug, trace};

use crate::bounded::{
    check_decimals, check_range, check_step, rounded_step_value, stepped_value, DecimalsOption,
};
use crate::constants::{
    DEFAULT_DECIMALS, DEFAULT_DIMENSION, DEFAULT_MAXIMUM, DEFAULT_MINIMUM, DEFAULT_SINGLE_STEP,
    NORMALIZED_MAXIMUM, NORMALIZED_MINIMUM,
};
use crate::numeric::{self, bound, significant_decimals};
use crate::{CoordinatesError, Result};

/// Handle returned by [`CoordinateVector::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[f64])>;

/// N bounded coordinates with optional normalization and step controls
pub struct CoordinateVector {
    values: Vec<f64>,
    minimum: f64,
    maximum: f64,
    single_step: f64,
    decimals: usize,
    decimals_option: DecimalsOption,
    normalized: bool,
    inverted_controls: bool,
    /// Indices edited through `set_value_at_index`, newest first
    last_user_edited: Vec<usize>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for CoordinateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinateVector")
            .field("values", &self.values)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("single_step", &self.single_step)
            .field("decimals", &self.decimals)
            .field("decimals_option", &self.decimals_option)
            .field("normalized", &self.normalized)
            .field("inverted_controls", &self.inverted_controls)
            .field("last_user_edited", &self.last_user_edited)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for CoordinateVector {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateVector {
    /// Creates a 3-dimensional zero vector without bounds
    pub fn new() -> Self {
        Self::with_dimension(DEFAULT_DIMENSION)
    }

    /// Creates a zero vector of the given dimension without bounds
    pub fn with_dimension(dimension: usize) -> Self {
        CoordinateVector {
            values: vec![0.0; dimension],
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            single_step: DEFAULT_SINGLE_STEP,
            decimals: DEFAULT_DECIMALS,
            decimals_option: DecimalsOption::Fixed,
            normalized: false,
            inverted_controls: false,
            last_user_edited: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.values
    }

    /// Returns the coordinate at `index`, if any
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
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

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn decimals_option(&self) -> DecimalsOption {
        self.decimals_option
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn inverted_controls(&self) -> bool {
        self.inverted_controls
    }

    /// Indices most recently edited through [`Self::set_value_at_index`], newest first
    pub fn last_user_edited(&self) -> &[usize] {
        &self.last_user_edited
    }

    /// Euclidean norm of the coordinates
    pub fn norm(&self) -> f64 {
        numeric::norm(&self.values)
    }

    /// Squared Euclidean norm of the coordinates
    pub fn squared_norm(&self) -> f64 {
        numeric::squared_norm(&self.values)
    }

    /// Registers a listener called with the new coordinates after each change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[f64]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Resizes the vector, keeping the existing prefix and zero-filling new slots
    pub fn set_dimension(&mut self, dimension: usize) {
        if dimension == self.values.len() {
            return;
        }
        debug!(
            "Changing coordinate dimension {} -> {}",
            self.values.len(),
            dimension
        );
        let mut values = self.values.clone();
        values.resize(dimension, 0.0);
        self.last_user_edited.retain(|&index| index < dimension);
        let values = self.conform(values);
        self.commit(values);
    }

    /// Sets both bounds and re-clamps every coordinate
    ///
    /// While normalized only `[-1, 1]` is accepted.
    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        check_range(minimum, maximum).map_err(|err| {
            debug!("Rejected coordinate range [{}, {}]", minimum, maximum);
            err
        })?;
        if self.normalized && (minimum != NORMALIZED_MINIMUM || maximum != NORMALIZED_MAXIMUM) {
            debug!("Rejected range change on a normalized vector");
            return Err(CoordinatesError::InvalidArgument(format!(
                "range is fixed to [{}, {}] while normalized",
                NORMALIZED_MINIMUM, NORMALIZED_MAXIMUM
            )));
        }
        self.minimum = minimum;
        self.maximum = maximum;
        let values = self.conform(self.values.clone());
        self.commit(values);
        Ok(())
    }

    /// Sets the lower bound, raising the upper bound if it would fall below it
    pub fn set_minimum(&mut self, minimum: f64) -> Result<()> {
        self.set_range(minimum, self.maximum.max(minimum))
    }

    /// Sets the upper bound, lowering the lower bound if it would exceed it
    pub fn set_maximum(&mut self, maximum: f64) -> Result<()> {
        self.set_range(self.minimum.min(maximum), maximum)
    }

    pub fn set_single_step(&mut self, step: f64) -> Result<()> {
        check_step(step)?;
        self.single_step = step;
        Ok(())
    }

    /// Sets the configured display precision (at most 16)
    pub fn set_decimals(&mut self, decimals: usize) -> Result<()> {
        check_decimals(decimals)?;
        self.decimals = decimals;
        Ok(())
    }

    pub fn set_decimals_option(&mut self, option: DecimalsOption) {
        self.decimals_option = option;
    }

    pub fn set_inverted_controls(&mut self, inverted: bool) {
        self.inverted_controls = inverted;
    }

    /// Decimals all coordinate fields should share under the current option
    ///
    /// For the by-value options this is the largest significant decimals
    /// count among the coordinates. On a normalized vector with recorded user
    /// edits only the edited coordinates are considered, since the others
    /// are derived by rescaling and rarely have a short representation.
    pub fn effective_decimals(&self) -> usize {
        if !self.decimals_option.is_by_value() {
            return self.decimals;
        }
        let significant = if self.normalized && !self.last_user_edited.is_empty() {
            self.last_user_edited
                .iter()
                .filter_map(|&index| self.values.get(index))
                .map(|&value| significant_decimals(value))
                .max()
        } else {
            self.values
                .iter()
                .map(|&value| significant_decimals(value))
                .max()
        };
        self.decimals_option
            .resolve(self.decimals, significant.unwrap_or(0))
    }

    /// Replaces all coordinates
    ///
    /// The slice length must equal the dimension. Values are clamped to the
    /// range and, if normalized, rescaled to unit norm.
    pub fn set_coordinates(&mut self, values: &[f64]) -> Result<()> {
        self.check_len(values.len())?;
        if let Some(position) = values.iter().position(|value| value.is_nan()) {
            return Err(CoordinatesError::InvalidArgument(format!(
                "coordinate {} is NaN",
                position
            )));
        }
        let values = self.conform(values.to_vec());
        self.commit(values);
        Ok(())
    }

    /// Sets up to the first four coordinates, leaving the rest untouched
    pub fn set_coordinates_xyzw(&mut self, x: f64, y: f64, z: f64, w: f64) -> Result<()> {
        let mut values = self.values.clone();
        for (slot, value) in values.iter_mut().zip([x, y, z, w]) {
            *slot = value;
        }
        self.set_coordinates(&values)
    }

    /// Parses comma-separated coordinates, e.g. `"0,0.0, 0."`
    pub fn set_coordinates_from_text(&mut self, text: &str) -> Result<()> {
        let values = text::parse_coordinates(text)?;
        if values.len() != self.values.len() {
            return Err(CoordinatesError::ParseError {
                token: text.to_string(),
                reason: format!(
                    "expected {} coordinates, found {}",
                    self.values.len(),
                    values.len()
                ),
            });
        }
        self.set_coordinates(&values)
    }

    /// Comma-separated coordinates that parse back to the same values
    pub fn coordinates_as_string(&self) -> String {
        text::format_coordinates(&self.values)
    }

    /// Sets one coordinate as a user edit
    ///
    /// Besides clamping and normalizing like [`Self::set_coordinates`], this
    /// records `index` as the most recently user-edited coordinate.
    pub fn set_value_at_index(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        if value.is_nan() {
            return Err(CoordinatesError::InvalidArgument(format!(
                "coordinate {} is NaN",
                index
            )));
        }
        let mut values = self.values.clone();
        values[index] = value;
        let values = self.conform(values);

        self.last_user_edited.retain(|&edited| edited != index);
        self.last_user_edited.insert(0, index);
        self.commit(values);
        Ok(())
    }

    /// Increments coordinate `index` by one step, returning whether it changed
    pub fn step_up(&mut self, index: usize) -> Result<bool> {
        self.step_by(index, 1)
    }

    /// Decrements coordinate `index` by one step, returning whether it changed
    pub fn step_down(&mut self, index: usize) -> Result<bool> {
        self.step_by(index, -1)
    }

    /// Moves coordinate `index` by `steps` single steps
    ///
    /// Inverted controls swap the direction. Unless normalized, the result is
    /// rounded to the display precision, or finer when the step or the current
    /// value needs more decimals; a step that reaches a bound lands on it
    /// exactly. On a normalized vector, stepping the only non-zero component
    /// to zero leaves the zero vector, which stays zero.
    pub fn step_by(&mut self, index: usize, steps: i32) -> Result<bool> {
        self.check_index(index)?;
        let current = self.values[index];
        let moved = if self.normalized {
            stepped_value(
                current,
                steps,
                self.single_step,
                self.minimum,
                self.maximum,
                self.inverted_controls,
            )
        } else {
            rounded_step_value(
                current,
                steps,
                self.single_step,
                self.minimum,
                self.maximum,
                self.inverted_controls,
                self.decimals,
            )
        };
        if moved == current {
            return Ok(false);
        }
        let mut values = self.values.clone();
        values[index] = moved;
        let values = self.conform(values);
        Ok(self.commit(values))
    }

    /// Rescales the coordinates to unit norm and returns the previous norm
    ///
    /// The range becomes `[-1, 1]` and the vector stays normalized until
    /// [`Self::set_normalized`] turns it off.
    pub fn normalize(&mut self) -> f64 {
        let mut values = self.values.clone();
        let previous = numeric::normalize(&mut values);
        self.minimum = NORMALIZED_MINIMUM;
        self.maximum = NORMALIZED_MAXIMUM;
        self.normalized = true;
        debug!("Normalized coordinates, previous norm {}", previous);
        let values = self.conform(values);
        self.commit(values);
        previous
    }

    /// Turns normalization on (see [`Self::normalize`]) or off
    ///
    /// Turning it off keeps the `[-1, 1]` range until it is changed.
    pub fn set_normalized(&mut self, normalized: bool) {
        if normalized {
            self.normalize();
        } else {
            self.normalized = false;
        }
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.values.len() {
            debug!(
                "Rejected {} coordinates for dimension {}",
                len,
                self.values.len()
            );
            return Err(CoordinatesError::DimensionMismatch {
                expected: self.values.len(),
                actual: len,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.values.len() {
            return Err(CoordinatesError::IndexOutOfRange {
                index,
                dimension: self.values.len(),
            });
        }
        Ok(())
    }

    /// Applies the range and normalization rules to candidate values
    fn conform(&self, mut values: Vec<f64>) -> Vec<f64> {
        for value in values.iter_mut() {
            *value = bound(*value, self.minimum, self.maximum);
        }
        if self.normalized {
            numeric::normalize(&mut values);
            for value in values.iter_mut() {
                *value = bound(*value, self.minimum, self.maximum);
            }
        }
        values
    }

    /// Stores `values` and notifies listeners if anything changed
    fn commit(&mut self, values: Vec<f64>) -> bool {
        if values == self.values {
            return false;
        }
        self.values = values;
        trace!(
            "Coordinates changed to {:?}, notifying {} listeners",
            self.values,
            self.listeners.len()
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.values);
        }
        true
    }
}
