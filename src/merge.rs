//! Reading-order sorting and greedy run merging
//!
//! Extractors hand back text in fragments: a visually continuous line often
//! arrives as several runs split at kerning boundaries, ligatures, or style
//! changes. This module sorts runs into reading order and merges adjacent
//! fragments back into single blocks. All thresholds live in [`MergeConfig`].

use crate::geometry::NormalizedRun;
use log::debug;

/// A run extended by absorbing zero or more subsequent runs on the same
/// visual line. Carries the position, font, and rotation of its first
/// constituent run.
pub type MergedBlock = NormalizedRun;

/// Thresholds governing when two runs are treated as one visual block
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Runs whose top edges differ by less than this are on the same line
    pub y_tolerance: f32,
    /// Maximum horizontal gap between the end of one run and the start of
    /// the next for them to merge. Overlapping runs (negative gap) always
    /// qualify.
    pub x_gap: f32,
    /// Gaps wider than this get a single space inserted between the merged
    /// texts; tighter gaps are intra-word fragments and concatenate
    /// directly.
    pub space_epsilon: f32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            y_tolerance: 4.0,
            x_gap: 8.0,
            space_epsilon: 0.5,
        }
    }
}

/// Sort runs into reading order and merge same-line neighbors
///
/// Reading order is top-to-bottom, left-to-right, via a stable sort on
/// `(y, x)`. Multi-column layouts, right-to-left scripts, and rotated
/// sidebars are not reordered; callers needing those must segment the runs
/// before merging.
pub fn merge_runs(mut runs: Vec<NormalizedRun>, config: &MergeConfig) -> Vec<MergedBlock> {
    let run_count = runs.len();

    runs.sort_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut iter = runs.into_iter();
    let mut current = match iter.next() {
        Some(first) => first,
        None => return Vec::new(),
    };

    let mut blocks: Vec<MergedBlock> = Vec::new();

    for run in iter {
        let same_line = (run.y - current.y).abs() < config.y_tolerance;
        let gap = run.x - (current.x + current.width);

        if same_line && gap < config.x_gap {
            // Separate distinct words with one space, but never double up
            // when the fragment already carries boundary whitespace.
            if gap > config.space_epsilon
                && !current.text.ends_with(char::is_whitespace)
                && !run.text.starts_with(char::is_whitespace)
            {
                current.text.push(' ');
            }
            current.text.push_str(&run.text);
            // Extend to the new right edge; a fully-overlapped run must not
            // pull it back in.
            current.width = current.width.max(run.x + run.width - current.x);
        } else {
            blocks.push(std::mem::replace(&mut current, run));
        }
    }
    blocks.push(current);

    debug!("merged {} runs into {} blocks", run_count, blocks.len());
    blocks
}
