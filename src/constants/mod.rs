//! Constants module for default editor settings

// Coordinate editor defaults
/// Number of coordinates a new vector holds
pub const DEFAULT_DIMENSION: usize = 3;
/// Lower bound of a new coordinate vector (no limit)
pub const DEFAULT_MINIMUM: f64 = -f64::MAX;
/// Upper bound of a new coordinate vector (no limit)
pub const DEFAULT_MAXIMUM: f64 = f64::MAX;
/// Increment applied by a single step
pub const DEFAULT_SINGLE_STEP: f64 = 1.0;
/// Display precision of a new coordinate vector
pub const DEFAULT_DECIMALS: usize = 3;

// Spin box defaults
/// Lower bound of a new bounded value
pub const SPINBOX_MINIMUM: f64 = 0.0;
/// Upper bound of a new bounded value
pub const SPINBOX_MAXIMUM: f64 = 99.99;
/// Increment applied by a page step
pub const SPINBOX_PAGE_STEP: f64 = 10.0;
/// Display precision of a new bounded value
pub const SPINBOX_DECIMALS: usize = 2;

// Precision
/// Largest number of decimals any value is displayed or rounded with
pub const MAX_DECIMALS: usize = 16;
/// Tolerance used when checking that a vector has unit norm
pub const NORM_TOLERANCE: f64 = 1e-12;

// Normalized bounds
/// Lower bound enforced while a vector is normalized
pub const NORMALIZED_MINIMUM: f64 = -1.0;
/// Upper bound enforced while a vector is normalized
pub const NORMALIZED_MAXIMUM: f64 = 1.0;
