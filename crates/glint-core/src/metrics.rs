//! Window sizing metrics.

use serde::{Deserialize, Serialize};

/// A window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

/// Dimensions driving the panel's window-resize behavior.
///
/// The host window height is the input row plus one result row per visible
/// entry, capped at `max_visible_rows`. Width never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowMetrics {
    /// Fixed window width.
    pub width: f32,

    /// Height of the search input row.
    pub input_height: f32,

    /// Height of one result row.
    pub result_height: f32,

    /// Cap on rows contributing to window height and shown at once.
    pub max_visible_rows: usize,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            width: 680.0,
            input_height: 64.0,
            result_height: 56.0,
            max_visible_rows: 5,
        }
    }
}

impl WindowMetrics {
    /// Rows that fit in the window for a given result count.
    pub fn visible_rows(&self, result_count: usize) -> usize {
        result_count.min(self.max_visible_rows)
    }

    /// Window height for a given result count.
    pub fn window_height(&self, result_count: usize) -> f32 {
        self.input_height + self.visible_rows(result_count) as f32 * self.result_height
    }

    /// Full window size for a given result count.
    pub fn window_size(&self, result_count: usize) -> WindowSize {
        WindowSize {
            width: self.width,
            height: self.window_height(result_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_grows_per_row_until_cap() {
        let metrics = WindowMetrics::default();
        assert_eq!(metrics.window_height(0), 64.0);
        assert_eq!(metrics.window_height(1), 64.0 + 56.0);
        assert_eq!(metrics.window_height(4), 64.0 + 4.0 * 56.0);
    }

    #[test]
    fn height_caps_at_max_visible_rows() {
        let metrics = WindowMetrics::default();
        let capped = metrics.window_height(5);
        assert_eq!(metrics.window_height(6), capped);
        assert_eq!(metrics.window_height(100), capped);
    }

    #[test]
    fn width_is_fixed() {
        let metrics = WindowMetrics::default();
        assert_eq!(metrics.window_size(0).width, metrics.width);
        assert_eq!(metrics.window_size(25).width, metrics.width);
    }
}
