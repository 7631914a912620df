// File: crates/pie-core/src/types.rs
// Summary: Shared constants and configuration (sizes, ring thickness, margins, arc styling).

/// Default ring thickness (outer radius minus inner radius), in pixels.
pub const ARC_WIDTH: f64 = 40.0;
/// Extra outer radius given to the highlighted wedge, in pixels.
pub const HIGHLIGHT_BOOST: f64 = 20.0;
/// Angular pad between adjacent wedges, in radians.
pub const PAD_ANGLE: f64 = 0.035;
/// Angular pad used around the highlighted wedge, in radians.
pub const HIGHLIGHTED_PAD_ANGLE: f64 = 0.05;

/// Default host view width in pixels.
pub const WIDTH: f64 = 300.0;
/// Default host view height in pixels.
pub const HEIGHT: f64 = 300.0;
/// Default pie diameter in pixels.
pub const PIE_SIZE: f64 = 200.0;

/// Offset of the pie's bounding box inside the host view, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
}

impl Margins {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(40.0, 40.0)
    }
}

/// Chart configuration supplied by the host once per data/dimension change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieConfig {
    /// Host view size; the pie is placed inside it at `margins`.
    pub width: f64,
    pub height: f64,
    /// Pie bounding box. The outer radius is `pie_width / 2`.
    pub pie_width: f64,
    pub pie_height: f64,
    /// Ring thickness; `inner_radius = outer_radius - arc_width`.
    pub arc_width: f64,
    pub margins: Margins,
}

impl PieConfig {
    pub fn new(width: f64, height: f64, pie_width: f64, pie_height: f64) -> Self {
        Self { width, height, pie_width, pie_height, ..Self::default() }
    }

    pub fn with_arc_width(mut self, arc_width: f64) -> Self {
        self.arc_width = arc_width;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            pie_width: PIE_SIZE,
            pie_height: PIE_SIZE,
            arc_width: ARC_WIDTH,
            margins: Margins::default(),
        }
    }
}

/// Visual parameters applied by [`crate::arc::path_params`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcStyle {
    pub highlight_boost: f64,
    pub pad_angle: f64,
    pub highlighted_pad_angle: f64,
}

impl Default for ArcStyle {
    fn default() -> Self {
        Self {
            highlight_boost: HIGHLIGHT_BOOST,
            pad_angle: PAD_ANGLE,
            highlighted_pad_angle: HIGHLIGHTED_PAD_ANGLE,
        }
    }
}
