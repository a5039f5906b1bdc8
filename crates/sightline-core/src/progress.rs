use std::collections::BTreeMap;

use crate::SightingRecord;

/// Review progress across the whole table, URL groups included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableProgress {
    pub total_rows: usize,
    pub reviewed_rows: usize,
    pub total_urls: usize,
    /// URL groups with no unreviewed row left.
    pub reviewed_urls: usize,
}

impl TableProgress {
    pub fn unreviewed_rows(&self) -> usize {
        self.total_rows - self.reviewed_rows
    }

    pub fn url_ratio(&self) -> f64 {
        if self.total_urls == 0 {
            0.0
        } else {
            self.reviewed_urls as f64 / self.total_urls as f64
        }
    }

    pub fn row_ratio(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            self.reviewed_rows as f64 / self.total_rows as f64
        }
    }
}

/// Review progress within a single URL group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlProgress {
    pub total: usize,
    pub reviewed: usize,
}

impl UrlProgress {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.reviewed as f64 / self.total as f64
        }
    }
}

/// Per-status row counts for the stats readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationCounts {
    pub unreviewed: usize,
    pub valid: usize,
    pub needs_review: usize,
    pub not_valid: usize,
}

pub fn table_progress(table: &[SightingRecord]) -> TableProgress {
    let mut groups: BTreeMap<&str, UrlProgress> = BTreeMap::new();
    let mut reviewed_rows = 0;
    for record in table {
        let group = groups.entry(record.url.as_str()).or_default();
        group.total += 1;
        if record.validation.is_reviewed() {
            group.reviewed += 1;
            reviewed_rows += 1;
        }
    }
    TableProgress {
        total_rows: table.len(),
        reviewed_rows,
        total_urls: groups.len(),
        reviewed_urls: groups.values().filter(|g| g.reviewed == g.total).count(),
    }
}

pub fn url_progress(table: &[SightingRecord], url: &str) -> UrlProgress {
    let mut progress = UrlProgress::default();
    for record in table.iter().filter(|r| r.url == url) {
        progress.total += 1;
        if record.validation.is_reviewed() {
            progress.reviewed += 1;
        }
    }
    progress
}

pub fn validation_counts(table: &[SightingRecord]) -> ValidationCounts {
    let mut counts = ValidationCounts::default();
    for record in table {
        match record.validation {
            crate::Validation::Unreviewed => counts.unreviewed += 1,
            crate::Validation::Valid => counts.valid += 1,
            crate::Validation::NeedsReview => counts.needs_review += 1,
            crate::Validation::NotValid => counts.not_valid += 1,
        }
    }
    counts
}

/// URL groups in order of first appearance, with their progress. Backs the
/// per-URL stats listing.
pub fn url_groups(table: &[SightingRecord]) -> Vec<(String, UrlProgress)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: BTreeMap<String, UrlProgress> = BTreeMap::new();
    for record in table {
        if !groups.contains_key(&record.url) {
            order.push(record.url.clone());
        }
        let group = groups.entry(record.url.clone()).or_default();
        group.total += 1;
        if record.validation.is_reviewed() {
            group.reviewed += 1;
        }
    }
    order
        .into_iter()
        .map(|url| {
            let progress = groups[&url];
            (url, progress)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validation;

    fn row(url: &str, validation: Validation) -> SightingRecord {
        SightingRecord {
            url: url.into(),
            validation,
            ..Default::default()
        }
    }

    #[test]
    fn url_counts_as_reviewed_only_when_whole_group_is() {
        let table = vec![
            row("http://a", Validation::Valid),
            row("http://a", Validation::Unreviewed),
            row("http://b", Validation::NotValid),
        ];
        let progress = table_progress(&table);
        assert_eq!(progress.total_urls, 2);
        assert_eq!(progress.reviewed_urls, 1);
        assert_eq!(progress.reviewed_rows, 2);
        assert_eq!(progress.unreviewed_rows(), 1);
    }

    #[test]
    fn url_progress_counts_one_group() {
        let table = vec![
            row("http://a", Validation::Valid),
            row("http://a", Validation::Unreviewed),
            row("http://b", Validation::Valid),
        ];
        let progress = url_progress(&table, "http://a");
        assert_eq!(progress.total, 2);
        assert_eq!(progress.reviewed, 1);
        assert!((progress.ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn counts_split_by_status() {
        let table = vec![
            row("http://a", Validation::Valid),
            row("http://a", Validation::NeedsReview),
            row("http://b", Validation::NotValid),
            row("http://b", Validation::Unreviewed),
        ];
        let counts = validation_counts(&table);
        assert_eq!(counts.valid, 1);
        assert_eq!(counts.needs_review, 1);
        assert_eq!(counts.not_valid, 1);
        assert_eq!(counts.unreviewed, 1);
    }

    #[test]
    fn url_groups_preserve_first_appearance_order() {
        let table = vec![
            row("http://b", Validation::Valid),
            row("http://a", Validation::Unreviewed),
            row("http://b", Validation::Unreviewed),
        ];
        let groups = url_groups(&table);
        assert_eq!(groups[0].0, "http://b");
        assert_eq!(groups[0].1.total, 2);
        assert_eq!(groups[1].0, "http://a");
    }

    #[test]
    fn ratios_are_zero_on_empty_input() {
        let progress = table_progress(&[]);
        assert_eq!(progress.url_ratio(), 0.0);
        assert_eq!(progress.row_ratio(), 0.0);
    }
}
