//! Plot configuration for profile charts

use plotters::prelude::*;

/// Configuration for customizing profile plots
///
/// # Example
///
/// ```rust,ignore
/// use advdiff_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("Lax-Friedrichs");
/// config.evolved_color = GREEN;
/// config.y_range = Some((0.0, 2.0));
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Profile")
    pub title: String,

    /// X-axis label (default: "Position")
    pub xlabel: String,

    /// Y-axis label (default: "f(x, t)")
    pub ylabel: String,

    /// Color of the initial profile line (default: BLUE)
    pub initial_color: RGBColor,

    /// Color of the evolved profile points (default: RED)
    pub evolved_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Radius of the evolved profile markers (default: 3)
    pub point_size: u32,

    /// Fixed y-axis range; fitted to the data when None
    pub y_range: Option<(f64, f64)>,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Profile".to_string(),
            xlabel: "Position".to_string(),
            ylabel: "f(x, t)".to_string(),
            initial_color: BLUE,
            evolved_color: RED,
            background: WHITE,
            line_width: 2,
            point_size: 3,
            y_range: None,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// No title (the default one is used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Profile chart with an optional custom title
    ///
    /// The y-axis is fixed to `[0, 2]`, the window used for the linear-ramp
    /// runs.
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title.into_optional_title().unwrap_or_else(|| "Profile".to_string()),
            y_range: Some((0.0, 2.0)),
            ..Default::default()
        }
    }

    /// Builder pattern: fixed y-axis range
    pub fn y_range(mut self, low: f64, high: f64) -> Self {
        self.y_range = Some((low, high));
        self
    }

    /// Builder pattern: image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Y-axis range for `values`: the fixed range if any, else the data range
    /// padded by 10 %
    pub(crate) fn y_bounds<'a>(&self, values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
        if let Some(range) = self.y_range {
            return range;
        }

        let (low, high) = values
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

        if low > high {
            return (0.0, 1.0);
        }

        let pad = ((high - low) * 0.1).max(1e-10);
        (low - pad, high + pad)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
