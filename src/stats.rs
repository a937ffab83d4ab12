use crate::classify::ClassifiedRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Synthetic label collecting country shares at or below the display floor.
pub const OTHER_LABEL: &str = "Other";
/// Country shares at or below this percentage are folded into `Other`.
pub const COUNTRY_SHARE_FLOOR: f64 = 1.0;

/// One label with its share of total records, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: String,
    pub percent: f64,
}

/// The three ranked percentage tables produced from one run.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficSummary {
    pub country: Vec<CategoryShare>,
    pub os: Vec<CategoryShare>,
    pub browser: Vec<CategoryShare>,
}

/// Aggregate classified records into the three percentage tables.
/// Countries at or below `COUNTRY_SHARE_FLOOR` percent are folded into a
/// trailing `Other` row; OS and browser tables are never bucketed.
///
/// Callers must not pass an empty slice; the pipeline short-circuits on
/// empty input before aggregation.
pub fn summarize(records: &[ClassifiedRecord]) -> TrafficSummary {
    let total = records.len();
    let country = bucket_rare(
        shares(records.iter().map(|r| r.country.as_str()), total),
        COUNTRY_SHARE_FLOOR,
    );
    let os = shares(records.iter().map(|r| r.os.as_str()), total);
    let browser = shares(records.iter().map(|r| r.browser.as_str()), total);
    TrafficSummary { country, os, browser }
}

/// Frequency table as percentages, sorted by descending count. The sort is
/// stable, so tied labels keep their first-occurrence order.
pub fn shares<'a>(labels: impl Iterator<Item = &'a str>, total: usize) -> Vec<CategoryShare> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for label in labels {
        match counts.get_mut(label) {
            Some(n) => *n += 1,
            None => {
                counts.insert(label, 1);
                order.push(label);
            }
        }
    }
    let mut rows: Vec<(&str, usize)> = order.into_iter().map(|l| (l, counts[l])).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .map(|(label, count)| CategoryShare {
            label: label.to_string(),
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Fold shares at or below `floor` percent into a single trailing `Other`
/// row. The kept rows stay in rank order; `Other` is appended, never
/// re-sorted into position.
pub fn bucket_rare(rows: Vec<CategoryShare>, floor: f64) -> Vec<CategoryShare> {
    let (mut kept, rare): (Vec<CategoryShare>, Vec<CategoryShare>) =
        rows.into_iter().partition(|s| s.percent > floor);
    let other: f64 = rare.iter().map(|s| s.percent).sum();
    if other > 0.0 {
        kept.push(CategoryShare {
            label: OTHER_LABEL.to_string(),
            percent: other,
        });
    }
    kept
}
