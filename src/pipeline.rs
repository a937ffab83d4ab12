use crate::classify::{Classifier, ClassifiedRecord, ClassifyError};
use crate::geo::CountryResolver;
use crate::stats::{self, TrafficSummary};

/// Classify every line in input order. Line numbers in errors are 1-based.
pub fn classify_lines<R: CountryResolver>(
    lines: &[&str],
    resolver: &R,
) -> Result<Vec<ClassifiedRecord>, ClassifyError> {
    let classifier = Classifier::new(resolver);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| classifier.classify(line, i + 1))
        .collect()
}

/// Full classification + aggregation pass. Returns `None` for empty input
/// (no report should be produced in that case).
pub fn analyze<R: CountryResolver>(
    lines: &[&str],
    resolver: &R,
) -> Result<Option<TrafficSummary>, ClassifyError> {
    if lines.is_empty() {
        return Ok(None);
    }
    let records = classify_lines(lines, resolver)?;
    Ok(Some(stats::summarize(&records)))
}
