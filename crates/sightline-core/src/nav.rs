use crate::session::{RecordEdit, SessionState};
use crate::{SightingRecord, Validation};

/// Clamp a row selection to `[0, len - 1]`. The TUI cursor is the real input
/// control; this only guards direct callers.
pub fn clamp_row(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}

/// Find the first unreviewed row strictly after `from`, scanning in table
/// order. Returns `None` when no unreviewed row remains past the pointer;
/// that is a benign "no more rows" notice, not an error.
///
/// The scan is deliberately row-by-row: it does not jump over the rest of a
/// URL group once one of its rows has been seen.
pub fn next_unreviewed(table: &[SightingRecord], from: usize) -> Option<usize> {
    (from + 1..table.len()).find(|&i| table[i].is_unreviewed())
}

/// Reject every unreviewed row in `url`'s group: force `not valid`, journal
/// the resulting field set, and mark the url (and each rejected index) as
/// skipped. Already-reviewed rows in the group keep their status. Returns the
/// number of rows rejected; the caller persists the table afterward.
pub fn skip_all_for_url(
    table: &mut [SightingRecord],
    session: &mut SessionState,
    url: &str,
) -> usize {
    let mut rejected = 0;
    for (index, record) in table.iter_mut().enumerate() {
        if record.url == url && record.is_unreviewed() {
            record.validation = Validation::NotValid;
            session.record_edit(index, RecordEdit::capture(record));
            session.skipped_indices.insert(index);
            rejected += 1;
        }
    }
    session.skipped_urls.insert(url.to_string());
    tracing::info!(url, rejected, "skipped url group");
    rejected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: &str, validation: Validation) -> SightingRecord {
        SightingRecord {
            url: url.into(),
            validation,
            ..Default::default()
        }
    }

    #[test]
    fn clamp_row_bounds() {
        assert_eq!(clamp_row(0, 0), 0);
        assert_eq!(clamp_row(5, 3), 2);
        assert_eq!(clamp_row(1, 3), 1);
    }

    #[test]
    fn next_unreviewed_scans_strictly_after_the_pointer() {
        let table = vec![
            row("http://a", Validation::Unreviewed),
            row("http://a", Validation::Valid),
            row("http://b", Validation::Unreviewed),
        ];
        // Row 0 itself is unreviewed but the scan starts after it
        assert_eq!(next_unreviewed(&table, 0), Some(2));
        assert_eq!(next_unreviewed(&table, 2), None);
    }

    #[test]
    fn next_unreviewed_visits_every_unreviewed_row_in_order() {
        let table = vec![
            row("http://a", Validation::Valid),
            row("http://a", Validation::Unreviewed),
            row("http://a", Validation::Unreviewed),
            row("http://b", Validation::Unreviewed),
        ];
        let mut visited = Vec::new();
        let mut from = 0;
        while let Some(i) = next_unreviewed(&table, from) {
            visited.push(i);
            from = i;
        }
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[test]
    fn skip_all_rejects_only_unreviewed_rows_in_the_group() {
        let mut table = vec![
            row("http://a", Validation::Valid),
            row("http://a", Validation::Unreviewed),
            row("http://b", Validation::Unreviewed),
        ];
        let mut session = SessionState::default();

        let rejected = skip_all_for_url(&mut table, &mut session, "http://a");

        assert_eq!(rejected, 1);
        assert_eq!(table[0].validation, Validation::Valid);
        assert_eq!(table[1].validation, Validation::NotValid);
        assert_eq!(table[2].validation, Validation::Unreviewed);
        assert!(session.is_url_skipped("http://a"));
        assert!(session.skipped_indices.contains(&1));
        assert_eq!(session.edit_log.len(), 1);
        assert_eq!(
            session.edit_log.get(&1).unwrap().validation,
            Validation::NotValid
        );
    }

    #[test]
    fn skip_all_leaves_no_unreviewed_row_for_the_url() {
        let mut table = vec![
            row("http://a", Validation::Unreviewed),
            row("http://a", Validation::NeedsReview),
            row("http://a", Validation::Unreviewed),
        ];
        let mut session = SessionState::default();
        skip_all_for_url(&mut table, &mut session, "http://a");
        assert!(
            table
                .iter()
                .filter(|r| r.url == "http://a")
                .all(|r| r.validation.is_reviewed())
        );
        assert_eq!(table[1].validation, Validation::NeedsReview);
    }
}
