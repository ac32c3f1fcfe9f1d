//! The significance classifier.

use costlens_core::config::SignificanceConfig;
use costlens_core::errors::ScannerError;
use costlens_core::events::types::SignificantChangeEvent;
use costlens_core::events::EventDispatcher;

use crate::diff::{DiffProvider, LineDiff};
use crate::registry::NonConstantRegistry;
use crate::scanner::types::{MethodIdentity, OccurrenceKind};
use crate::scanner::{RegexScanner, SourceScanner, TypeExtensionMap};

use super::types::SignificanceReport;

/// Everything one classification pass reads.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationInput<'a> {
    /// Last known text; `None` on first load.
    pub previous: Option<&'a str>,
    pub current: &'a str,
    pub registry: &'a NonConstantRegistry,
    pub whitelist: &'a SignificanceConfig,
    /// Bounds from the previous text.
    pub types: &'a TypeExtensionMap,
}

/// Diffs two snapshots and flags performance-relevant changes.
///
/// Leans toward false positives: an unneeded re-analysis costs seconds, a
/// missed cost change goes unnoticed.
#[derive(Debug, Clone)]
pub struct SignificanceClassifier<S = RegexScanner, D = LineDiff> {
    scanner: S,
    diff: D,
}

impl SignificanceClassifier {
    /// Classifier backed by [`RegexScanner`] and [`LineDiff`].
    pub fn new() -> Result<Self, ScannerError> {
        Ok(Self::with_parts(RegexScanner::new()?, LineDiff))
    }
}

impl<S: SourceScanner, D: DiffProvider> SignificanceClassifier<S, D> {
    pub fn with_parts(scanner: S, diff: D) -> Self {
        Self { scanner, diff }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Classify the edit from `input.previous` to `input.current`.
    ///
    /// With no previous text there is nothing to compare against and the
    /// result is not significant.
    pub fn classify(&self, input: &ClassificationInput<'_>) -> SignificanceReport {
        let mut report = SignificanceReport::default();
        let Some(previous) = input.previous else {
            tracing::debug!("no previous snapshot, nothing to classify");
            return report;
        };

        let segments = self.diff.diff_lines(previous, input.current);
        // Most recent declaration header seen in earlier segments.
        let mut context: Option<MethodIdentity> = None;

        for segment in &segments {
            let declarations = self.scanner.declarations(&segment.text, input.types);

            if segment.is_change() {
                // Declaration headers are cut out; each gap between them is
                // scanned under the nearest header before it.
                let mut gap_context = context.clone();
                let mut gap_start = 0;
                for decl in &declarations {
                    self.scan_gap(
                        &segment.text[gap_start..decl.span.start],
                        gap_context.as_ref(),
                        input,
                        &mut report,
                    );
                    gap_context = Some(decl.identity());
                    gap_start = decl.span.end;
                }
                self.scan_gap(
                    &segment.text[gap_start..],
                    gap_context.as_ref(),
                    input,
                    &mut report,
                );
            }

            if let Some(last) = declarations.last() {
                context = Some(last.identity());
            }
        }

        tracing::debug!(
            segments = segments.len(),
            significant = report.is_significant(),
            attributed = report.causes().len(),
            unattributed = report.unattributed().len(),
            "change classified"
        );
        report
    }

    /// [`classify`](Self::classify), then fire the significant-change event.
    /// The event fires whatever the outcome once a comparison took place;
    /// subscribers read the report.
    pub fn classify_and_notify(
        &self,
        input: &ClassificationInput<'_>,
        events: &EventDispatcher,
    ) -> SignificanceReport {
        let report = self.classify(input);
        if input.previous.is_some() {
            events.emit_significant_change(&SignificantChangeEvent);
        }
        report
    }

    fn scan_gap(
        &self,
        text: &str,
        context: Option<&MethodIdentity>,
        input: &ClassificationInput<'_>,
        report: &mut SignificanceReport,
    ) {
        if text.trim().is_empty() {
            return;
        }
        for occurrence in self.scanner.occurrences(text) {
            let flagged = match &occurrence.kind {
                OccurrenceKind::Loop => true,
                OccurrenceKind::Call { name } => {
                    input.registry.contains(name) && !input.whitelist.is_whitelisted(name)
                }
            };
            if flagged {
                tracing::trace!(
                    cause = %occurrence.text,
                    method = ?context.map(MethodIdentity::key),
                    "significant construct"
                );
                report.record_cause(context, &occurrence.text);
            }
        }
    }
}
