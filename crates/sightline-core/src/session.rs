use std::collections::{BTreeMap, BTreeSet};

use crate::{SightingRecord, Validation};

/// The field set submitted for one row: everything the form can change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordEdit {
    pub species: String,
    pub sighting_date: String,
    pub dive_site: String,
    pub validation: Validation,
    pub notes: String,
    pub n_observed: String,
}

impl RecordEdit {
    /// Capture the editable fields of a record as they currently stand.
    pub fn capture(record: &SightingRecord) -> Self {
        Self {
            species: record.species.clone(),
            sighting_date: record.sighting_date.clone(),
            dive_site: record.dive_site.clone(),
            validation: record.validation,
            notes: record.notes.clone(),
            n_observed: record.n_observed.clone(),
        }
    }

    pub fn apply_to(&self, record: &mut SightingRecord) {
        record.species = self.species.clone();
        record.sighting_date = self.sighting_date.clone();
        record.dive_site = self.dive_site.clone();
        record.validation = self.validation;
        record.notes = self.notes.clone();
        record.n_observed = self.n_observed.clone();
    }
}

/// Per-session review context: the row pointer, the journal of edits made
/// this session, and the bulk-skip bookkeeping. Process-lifetime only; lost
/// on restart (the working table itself is re-derived from the save file).
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Pointer into the working table.
    pub current_row_index: usize,
    /// Journal of submitted field sets, keyed by row index. Replayable over
    /// a freshly loaded table so a redraw shows what was just saved.
    pub edit_log: BTreeMap<usize, RecordEdit>,
    /// URLs the operator marked "skip all".
    pub skipped_urls: BTreeSet<String>,
    /// Row indices rejected by bulk skips. Recorded for the session summary;
    /// navigation never consults this set.
    pub skipped_indices: BTreeSet<usize>,
}

impl SessionState {
    /// Start a session positioned on the first unreviewed row (0 if none).
    pub fn new(table: &[SightingRecord]) -> Self {
        let current_row_index = table
            .iter()
            .position(SightingRecord::is_unreviewed)
            .unwrap_or(0);
        Self {
            current_row_index,
            ..Default::default()
        }
    }

    pub fn record_edit(&mut self, index: usize, edit: RecordEdit) {
        self.edit_log.insert(index, edit);
    }

    pub fn is_url_skipped(&self, url: &str) -> bool {
        self.skipped_urls.contains(url)
    }

    /// Replay the session journal over a table: a deterministic fold of the
    /// edit log onto loaded data, keeping the on-disk file and the in-memory
    /// view reconcilable.
    pub fn replay(&self, table: &mut [SightingRecord]) {
        for (&index, edit) in &self.edit_log {
            if let Some(record) = table.get_mut(index) {
                edit.apply_to(record);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: &str, validation: Validation) -> SightingRecord {
        SightingRecord {
            url: url.into(),
            title: "t".into(),
            excerpt: "e".into(),
            validation,
            ..Default::default()
        }
    }

    #[test]
    fn new_session_points_at_first_unreviewed_row() {
        let table = vec![
            row("http://a", Validation::Valid),
            row("http://a", Validation::Unreviewed),
            row("http://b", Validation::Unreviewed),
        ];
        assert_eq!(SessionState::new(&table).current_row_index, 1);
    }

    #[test]
    fn new_session_defaults_to_row_zero_when_all_reviewed() {
        let table = vec![row("http://a", Validation::Valid)];
        assert_eq!(SessionState::new(&table).current_row_index, 0);
    }

    #[test]
    fn replay_is_a_fold_of_the_journal_over_fresh_data() {
        let mut session = SessionState::default();
        session.record_edit(
            1,
            RecordEdit {
                species: "bull shark".into(),
                validation: Validation::Valid,
                n_observed: "2".into(),
                ..Default::default()
            },
        );

        // A "freshly loaded" table without the session's edits
        let mut table = vec![
            row("http://a", Validation::Unreviewed),
            row("http://a", Validation::Unreviewed),
        ];
        session.replay(&mut table);

        assert_eq!(table[0].validation, Validation::Unreviewed);
        assert_eq!(table[1].species, "bull shark");
        assert_eq!(table[1].validation, Validation::Valid);
        assert_eq!(table[1].n_observed, "2");
    }

    #[test]
    fn replay_ignores_out_of_range_entries() {
        let mut session = SessionState::default();
        session.record_edit(9, RecordEdit::default());
        let mut table = vec![row("http://a", Validation::Unreviewed)];
        session.replay(&mut table);
        assert_eq!(table[0].validation, Validation::Unreviewed);
    }

    #[test]
    fn capture_then_apply_round_trips() {
        let mut record = row("http://a", Validation::NeedsReview);
        record.species = "eagle ray".into();
        record.notes = "blurry photo".into();

        let edit = RecordEdit::capture(&record);
        let mut other = row("http://a", Validation::Unreviewed);
        edit.apply_to(&mut other);
        assert_eq!(other, record);
    }
}
