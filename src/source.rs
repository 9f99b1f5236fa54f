//! Run sources: the seam between extraction and reconstruction
//!
//! PDF binary parsing stays outside this crate. A [`RunSource`] hands over
//! the raw positioned runs for each page; the shipped [`JsonRunSource`]
//! loads a previously extracted dump, which is what the CLI and tests run
//! against. Sources are constructed once and passed explicitly; there is
//! no process-wide extractor state.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::{PageDimensions, RawTextRun};
use crate::ExtractError;

/// Supplies raw text runs page by page
///
/// Implemented by the extraction collaborator. Pages are independent, so
/// implementations must tolerate being queried from multiple threads.
pub trait RunSource {
    /// Number of pages available
    fn page_count(&self) -> u32;

    /// Raw runs and dimensions for `page_number` (1-indexed)
    ///
    /// Failures here are extraction failures (corrupt input, unsupported
    /// encoding); the reconstruction pipeline itself never fails.
    fn page(&self, page_number: u32) -> Result<ExtractedPage, ExtractError>;
}

/// One page's worth of extractor output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPage {
    #[serde(flatten)]
    pub dimensions: PageDimensions,
    pub runs: Vec<RawTextRun>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RunDump {
    pages: Vec<ExtractedPage>,
}

/// A run source backed by a JSON dump of extracted pages
///
/// The dump shape is `{"pages": [{"width", "height", "runs": [...]}]}` with
/// runs carrying `text`, `transform` (6-element array), and optional
/// `width`/`height`/`fontName`.
#[derive(Debug, Clone)]
pub struct JsonRunSource {
    pages: Vec<ExtractedPage>,
}

impl JsonRunSource {
    pub fn from_reader(reader: impl Read) -> Result<Self, ExtractError> {
        let dump: RunDump =
            serde_json::from_reader(reader).map_err(|e| ExtractError::Parse(e.to_string()))?;
        Ok(Self { pages: dump.pages })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl RunSource for JsonRunSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page(&self, page_number: u32) -> Result<ExtractedPage, ExtractError> {
        page_number
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx as usize))
            .cloned()
            .ok_or_else(|| ExtractError::PageOutOfRange {
                page_number,
                page_count: self.page_count(),
            })
    }
}
