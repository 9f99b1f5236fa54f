//! Assembly of merged blocks into page-level component records
//!
//! This is a shaping step only: geometry and font attributes pass through
//! unchanged, and each block receives a fresh page-unique identifier. Id
//! policy lives in [`ComponentIdGenerator`] so it can change without
//! touching the merge algorithm.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::PageDimensions;
use crate::merge::MergedBlock;

/// Identifier of a component, unique within its page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(page_number: u32, index: usize) -> Self {
        ComponentId(format!("p{}-t{}", page_number, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out sequential component ids for one page
#[derive(Debug)]
pub struct ComponentIdGenerator {
    page_number: u32,
    next_index: usize,
}

impl ComponentIdGenerator {
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            next_index: 0,
        }
    }

    pub fn next_id(&mut self) -> ComponentId {
        let id = ComponentId::new(self.page_number, self.next_index);
        self.next_index += 1;
        id
    }
}

/// Component kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Text,
}

/// An editable text block in the shape the editor and exporter consume
///
/// `x`, `y`, `width`, `height` are offsets within the page canvas; `rotation`
/// is a clockwise degree rotation around the component's own origin. `font`
/// keeps the raw extractor-reported name (see [`crate::fonts`] for mapping).
/// Components are immutable once assembled; edits downstream create new
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    pub font_size: f32,
    pub font: String,
    pub content: String,
}

/// One reconstructed page: dimensions plus components in reading order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// 1-indexed page number
    pub page_number: u32,
    pub width: f32,
    pub height: f32,
    pub components: Vec<TextComponent>,
}

/// Wrap merged blocks into a [`PageRecord`]
///
/// Components keep the order the merger produced. Ids are fresh per call;
/// regenerating a page reassigns them.
pub fn assemble_page(
    blocks: Vec<MergedBlock>,
    page_number: u32,
    dimensions: PageDimensions,
) -> PageRecord {
    let mut ids = ComponentIdGenerator::new(page_number);

    let components = blocks
        .into_iter()
        .map(|block| TextComponent {
            id: ids.next_id(),
            kind: ComponentKind::Text,
            x: block.x,
            y: block.y,
            width: block.width,
            height: block.height,
            rotation: block.rotation_degrees,
            font_size: block.font_size,
            font: block.font_name,
            content: block.text,
        })
        .collect();

    PageRecord {
        page_number,
        width: dimensions.width,
        height: dimensions.height,
        components,
    }
}

/// A fixed pixel canvas the editor renders pages onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// A4 at 96 dpi, the editor's default page canvas
    pub const A4_96DPI: CanvasSize = CanvasSize {
        width: 794.0,
        height: 1123.0,
    };
}

impl PageRecord {
    /// Rescale the record from its source point space onto a pixel canvas
    ///
    /// Horizontal measures scale by `canvas.width / self.width`, vertical
    /// ones (including font size) by `canvas.height / self.height`.
    /// Rotation is unit-free and passes through. Degenerate source
    /// dimensions leave the corresponding axis unscaled.
    pub fn scale_to(&self, canvas: CanvasSize) -> PageRecord {
        let sx = if self.width > 0.0 {
            canvas.width / self.width
        } else {
            1.0
        };
        let sy = if self.height > 0.0 {
            canvas.height / self.height
        } else {
            1.0
        };

        PageRecord {
            page_number: self.page_number,
            width: canvas.width,
            height: canvas.height,
            components: self
                .components
                .iter()
                .map(|c| TextComponent {
                    id: c.id.clone(),
                    kind: c.kind,
                    x: c.x * sx,
                    y: c.y * sy,
                    width: c.width * sx,
                    height: c.height * sy,
                    rotation: c.rotation,
                    font_size: c.font_size * sy,
                    font: c.font.clone(),
                    content: c.content.clone(),
                })
                .collect(),
        }
    }
}
