// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! The zoom level is a multiplier applied on top of scale-to-fit. It is
//! reset to 1.0 whenever a different image is shown.

pub use crate::config::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP_FACTOR};

/// Zoom factor, guaranteed to be within valid range (0.2–5.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a new zoom level, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Multiplies by one step, saturating at the maximum.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 * ZOOM_STEP_FACTOR)
    }

    /// Divides by one step, saturating at the minimum.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 / ZOOM_STEP_FACTOR)
    }

    /// Formats the level with one decimal, as shown in the status line.
    #[must_use]
    pub fn display(self) -> String {
        format!("{:.1}", self.0)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn default_zoom_is_one() {
        assert_abs_diff_eq!(ZoomLevel::default().value(), 1.0);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_abs_diff_eq!(ZoomLevel::new(100.0).value(), MAX_ZOOM);
        assert_abs_diff_eq!(ZoomLevel::new(0.0).value(), MIN_ZOOM);
        assert_abs_diff_eq!(ZoomLevel::new(-3.0).value(), MIN_ZOOM);
    }

    #[test]
    fn zoom_in_multiplies_by_step() {
        assert_abs_diff_eq!(ZoomLevel::default().zoom_in().value(), 1.25);
        assert_abs_diff_eq!(ZoomLevel::default().zoom_out().value(), 0.8);
    }

    #[test]
    fn zoom_in_twenty_times_saturates_at_max() {
        let mut zoom = ZoomLevel::default();
        for _ in 0..20 {
            zoom = zoom.zoom_in();
        }
        assert_abs_diff_eq!(zoom.value(), MAX_ZOOM);
        assert!(zoom.is_max());
    }

    #[test]
    fn zoom_out_twenty_times_saturates_at_min() {
        let mut zoom = ZoomLevel::default();
        for _ in 0..20 {
            zoom = zoom.zoom_out();
        }
        assert_abs_diff_eq!(zoom.value(), MIN_ZOOM);
        assert!(zoom.is_min());
    }

    #[test]
    fn zoom_in_then_out_restores_level_inside_bounds() {
        let mut zoom = ZoomLevel::new(0.3);
        while !zoom.zoom_in().is_max() {
            let restored = zoom.zoom_in().zoom_out();
            assert_relative_eq!(restored.value(), zoom.value(), max_relative = 1e-5);
            zoom = zoom.zoom_in();
        }
    }

    #[test]
    fn zoom_in_then_out_at_max_returns_clamped_value() {
        let at_max = ZoomLevel::new(MAX_ZOOM);
        assert_abs_diff_eq!(at_max.zoom_in().zoom_out().value(), MAX_ZOOM / ZOOM_STEP_FACTOR);

        let near_max = ZoomLevel::new(4.5);
        // 4.5 * 1.25 clamps to 5.0, so the round trip lands on 4.0
        assert_relative_eq!(near_max.zoom_in().zoom_out().value(), 4.0, max_relative = 1e-6);
    }

    #[test]
    fn any_sequence_stays_within_bounds() {
        let mut zoom = ZoomLevel::default();
        for step in 0..200u32 {
            zoom = if step.wrapping_mul(2_654_435_761) % 3 == 0 {
                zoom.zoom_out()
            } else {
                zoom.zoom_in()
            };
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom.value()));
        }
    }

    #[test]
    fn display_uses_one_decimal() {
        assert_eq!(ZoomLevel::default().display(), "1.0");
        assert_eq!(ZoomLevel::default().zoom_in().zoom_in().display(), "1.6");
        assert_eq!(ZoomLevel::new(MAX_ZOOM).display(), "5.0");
    }
}
