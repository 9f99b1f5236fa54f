//! Geometry normalization for raw PDF text runs
//!
//! Extractors report each run with a 2D affine transform in PDF point space
//! (origin bottom-left, y increasing upward). This module converts that into
//! an axis-aligned box in top-down page space, with `y` measured from the
//! page's top edge, so the editor canvas can position components directly.

use serde::{Deserialize, Serialize};

/// Fallback font size when a run's transform carries no usable scale
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// 2D affine transform `[a, b, c, d, e, f]`:
///
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
///
/// `a`/`d` carry scale, `b`/`c` carry skew/rotation, `e`/`f` are the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform(pub [f32; 6]);

impl Transform {
    pub const IDENTITY: Transform = Transform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn scale_x(&self) -> f32 {
        self.0[0]
    }

    pub fn skew_y(&self) -> f32 {
        self.0[1]
    }

    pub fn skew_x(&self) -> f32 {
        self.0[2]
    }

    pub fn scale_y(&self) -> f32 {
        self.0[3]
    }

    pub fn origin_x(&self) -> f32 {
        self.0[4]
    }

    pub fn origin_y(&self) -> f32 {
        self.0[5]
    }
}

/// A raw text run as produced by the extraction collaborator
///
/// `width` and `height` are the advance width and glyph-box height reported
/// by the extractor, or 0 when unavailable. `font_name` is the raw PDF font
/// resource identifier; subset-prefixed names arrive as-is (see
/// [`crate::fonts`] for boundary helpers).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTextRun {
    pub text: String,
    pub transform: Transform,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub font_name: String,
}

/// Page size in PDF point space, used to flip the y-axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    pub width: f32,
    pub height: f32,
}

/// A run converted into top-down page space
///
/// `y` is the run's top edge, not its baseline. All fields are derived
/// totally: degenerate or non-finite inputs fall back to defaults rather
/// than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub font_name: String,
    pub rotation_degrees: f32,
}

/// Convert one raw run into top-down page space
///
/// Font size is the magnitude of the transform's first column,
/// `sqrt(a² + b²)`. Unlike reading the `d` component directly, this is
/// rotation-invariant and consistent with the rotation derived from the
/// same column. Rotation is the angle of the transform's local x-axis:
/// 0 for upright text, ±90/270 for vertical sidebar text.
pub fn normalize_run(run: &RawTextRun, page: &PageDimensions) -> NormalizedRun {
    let [a, b, _c, _d, e, f] = run.transform.0;

    let mut font_size = (a * a + b * b).sqrt();
    if !font_size.is_finite() || font_size == 0.0 {
        font_size = DEFAULT_FONT_SIZE;
    }

    let mut rotation_degrees = b.atan2(a).to_degrees();
    if !rotation_degrees.is_finite() {
        rotation_degrees = 0.0;
    }

    let width = if run.width.is_finite() { run.width } else { 0.0 };
    let height = if run.height.is_finite() && run.height > 0.0 {
        run.height
    } else {
        font_size
    };

    let origin_x = if e.is_finite() { e } else { 0.0 };
    let origin_y = if f.is_finite() { f } else { 0.0 };
    let page_height = if page.height.is_finite() { page.height } else { 0.0 };

    // Flip the bottom-up baseline coordinate into a top-down top edge.
    // The subtracted span is the larger of the glyph-box height and the
    // font size, so the visible glyph box lands inside [y, y + height].
    let y = page_height - origin_y - height.max(font_size);

    NormalizedRun {
        text: run.text.clone(),
        x: origin_x,
        y,
        width,
        height,
        font_size,
        font_name: run.font_name.clone(),
        rotation_degrees,
    }
}
