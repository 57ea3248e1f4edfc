//! Field geometry shared by the rules, the fix engine, and the catalog.
//!
//! Coordinates are in field space: x grows left to right across the field,
//! y grows downfield toward the offense's own end zone. The line of
//! scrimmage is a horizontal line at [`FieldGeometry::los_y`].

use serde::{Deserialize, Serialize};

/// Default field width in field units.
pub const DEFAULT_WIDTH: f64 = 1200.0;
/// Default field height in field units.
pub const DEFAULT_HEIGHT: f64 = 600.0;
/// Default y coordinate of the line of scrimmage.
pub const DEFAULT_LOS_Y: f64 = 350.0;
/// Default max distance from the line for a player to count as on it.
pub const DEFAULT_LOS_TOLERANCE: f64 = 5.0;
/// Default x coordinate dividing the left and right sides of a formation.
pub const DEFAULT_CENTER_X: f64 = 600.0;

/// Fixed per-ruleset field constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldGeometry {
    pub width: f64,
    pub height: f64,
    pub los_y: f64,
    pub los_tolerance: f64,
    pub center_x: f64,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            los_y: DEFAULT_LOS_Y,
            los_tolerance: DEFAULT_LOS_TOLERANCE,
            center_x: DEFAULT_CENTER_X,
        }
    }
}

impl FieldGeometry {
    /// Whether a player at `y` is close enough to count as on the line.
    ///
    /// The validator never calls this; it trusts each player's `onLOS` flag.
    pub fn is_on_line(&self, y: f64) -> bool {
        self.distance_from_line(y) <= self.los_tolerance
    }

    /// Absolute distance from the line of scrimmage.
    pub fn distance_from_line(&self, y: f64) -> f64 {
        (y - self.los_y).abs()
    }

    /// Mirror an x coordinate across `center_x`, the line the rules use to
    /// split left from right.
    ///
    /// On the default field this is the field's vertical axis. With an
    /// off-middle center the result may fall outside `0..=width`.
    pub fn mirror_x(&self, x: f64) -> f64 {
        2.0 * self.center_x - x
    }
}
