//! Text-block reconstruction from positioned PDF text runs
//!
//! Given the raw glyph runs a PDF text extractor reports for a page, this
//! crate rebuilds the clean list of editable text-block components the
//! document editor consumes:
//! - Geometry normalization of affine transforms into top-down page space
//! - Reading-order sorting and greedy merging of fragmented runs
//! - Assembly into identified, serializable page records
//!
//! PDF binary parsing itself stays behind the [`RunSource`] trait: any
//! extractor that yields positioned runs can drive the pipeline.

pub mod assemble;
pub mod fonts;
pub mod geometry;
pub mod merge;
pub mod source;

pub use assemble::{assemble_page, CanvasSize, ComponentId, ComponentKind, PageRecord, TextComponent};
pub use geometry::{normalize_run, NormalizedRun, PageDimensions, RawTextRun, Transform};
pub use merge::{merge_runs, MergeConfig, MergedBlock};
pub use source::{ExtractedPage, JsonRunSource, RunSource};

use log::debug;
use rayon::prelude::*;

/// Reconstruct one page: normalize, merge, assemble
///
/// Pure and total: a page with zero runs yields an empty record, and
/// degenerate run geometry falls back to defaults instead of erroring.
pub fn reconstruct_page(
    runs: &[RawTextRun],
    dimensions: PageDimensions,
    page_number: u32,
    config: &MergeConfig,
) -> PageRecord {
    let total = runs.len();

    // Extractors are expected to pre-filter empty runs; drop any stragglers.
    let normalized: Vec<NormalizedRun> = runs
        .iter()
        .filter(|run| !run.text.trim().is_empty())
        .map(|run| geometry::normalize_run(run, &dimensions))
        .collect();

    if normalized.len() < total {
        debug!(
            "page {}: dropped {} whitespace-only runs",
            page_number,
            total - normalized.len()
        );
    }

    let blocks = merge::merge_runs(normalized, config);
    assemble::assemble_page(blocks, page_number, dimensions)
}

/// Reconstruct every page of a document
///
/// Pages are independent, so they are processed in parallel; the returned
/// records are in page order regardless. The only failure mode is the
/// source failing to produce a page.
pub fn reconstruct_document<S: RunSource + Sync>(
    source: &S,
    config: &MergeConfig,
) -> Result<Vec<PageRecord>, ExtractError> {
    (1..=source.page_count())
        .into_par_iter()
        .map(|page_number| {
            let page = source.page(page_number)?;
            Ok(reconstruct_page(
                &page.runs,
                page.dimensions,
                page_number,
                config,
            ))
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("run extraction error: {0}")]
    Parse(String),
    #[error("page {page_number} out of range (document has {page_count} pages)")]
    PageOutOfRange { page_number: u32, page_count: u32 },
}
