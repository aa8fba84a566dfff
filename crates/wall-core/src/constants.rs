//! Global constants for wall-core

/// Default wall length (half-span of the straight run)
pub const WALL_DEFAULT_LENGTH: f32 = 1.0;

/// Default wall width (thickness)
pub const WALL_DEFAULT_WIDTH: f32 = 0.25;

/// Default wall height (half-height)
pub const WALL_DEFAULT_HEIGHT: f32 = 0.5;

/// Smallest wall parameter value the operator layer accepts
pub const WALL_PARAM_MIN: f32 = 0.01;

/// Largest wall parameter value the operator layer accepts
pub const WALL_PARAM_MAX: f32 = 10.0;

/// Default name for newly created wall objects
pub const WALL_OBJECT_NAME: &str = "Wall";
