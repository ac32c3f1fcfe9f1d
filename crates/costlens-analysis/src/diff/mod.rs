//! Line-based diffing between two text snapshots.

pub mod types;

use std::time::{Duration, Instant};

use similar::{capture_diff_deadline, Algorithm, DiffTag};

pub use types::{ChangeKind, DiffSegment};

/// Time allowed for finding a minimal edit script. Past it the remaining
/// region is reported as one replacement, which only over-reports changes.
pub const DIFF_TIME_BUDGET: Duration = Duration::from_millis(500);

/// Produces ordered line segments between two snapshots.
///
/// Contract: unchanged and added segments concatenate to `new` exactly;
/// unchanged and removed segments concatenate to `old` up to line
/// terminators. Segments follow the top-to-bottom reading order of `new`.
pub trait DiffProvider {
    fn diff_lines(&self, old: &str, new: &str) -> Vec<DiffSegment>;
}

/// Myers line diff (linear-space variant). Lines compare without their
/// terminators, so a file that only switches between `\n` and `\r\n` diffs
/// as unchanged.
///
/// Within a change region the removed segment comes before the added one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDiff;

impl DiffProvider for LineDiff {
    fn diff_lines(&self, old: &str, new: &str) -> Vec<DiffSegment> {
        let old_lines: Vec<&str> = old.split_inclusive('\n').collect();
        let new_lines: Vec<&str> = new.split_inclusive('\n').collect();
        let old_keys: Vec<&str> = old_lines.iter().map(|l| line_content(l)).collect();
        let new_keys: Vec<&str> = new_lines.iter().map(|l| line_content(l)).collect();

        let ops = capture_diff_deadline(
            Algorithm::Myers,
            &old_keys,
            0..old_keys.len(),
            &new_keys,
            0..new_keys.len(),
            Some(Instant::now() + DIFF_TIME_BUDGET),
        );

        let mut builder = SegmentBuilder::default();
        let mut removed: Vec<&str> = Vec::new();
        let mut added: Vec<&str> = Vec::new();

        for op in &ops {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => {
                    builder.flush_change(&mut removed, &mut added);
                    for line in &new_lines[new_range] {
                        builder.push(ChangeKind::Unchanged, line);
                    }
                }
                DiffTag::Delete => removed.extend_from_slice(&old_lines[old_range]),
                DiffTag::Insert => added.extend_from_slice(&new_lines[new_range]),
                DiffTag::Replace => {
                    removed.extend_from_slice(&old_lines[old_range]);
                    added.extend_from_slice(&new_lines[new_range]);
                }
            }
        }
        builder.flush_change(&mut removed, &mut added);

        let segments = builder.finish();
        tracing::trace!(ops = ops.len(), segments = segments.len(), "line diff computed");
        segments
    }
}

fn line_content(line: &str) -> &str {
    line.trim_end_matches('\n').trim_end_matches('\r')
}

/// Groups consecutive lines of the same kind into segments.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<DiffSegment>,
}

impl SegmentBuilder {
    fn push(&mut self, kind: ChangeKind, line: &str) {
        match self.segments.last_mut() {
            Some(last) if last.kind == kind => {
                last.text.push_str(line);
                last.line_count += 1;
            }
            _ => self.segments.push(DiffSegment {
                kind,
                text: line.to_string(),
                line_count: 1,
            }),
        }
    }

    /// Emit a pending change region as removed-then-added.
    fn flush_change(&mut self, removed: &mut Vec<&str>, added: &mut Vec<&str>) {
        for line in removed.drain(..) {
            self.push(ChangeKind::Removed, line);
        }
        for line in added.drain(..) {
            self.push(ChangeKind::Added, line);
        }
    }

    fn finish(self) -> Vec<DiffSegment> {
        self.segments
    }
}
