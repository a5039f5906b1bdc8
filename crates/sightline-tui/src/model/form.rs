use sightline_core::{RecordEdit, SightingRecord, Validation};

/// The editable fields of the review form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Species,
    SightingDate,
    DiveSite,
    NObserved,
    Status,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Species,
        FormField::SightingDate,
        FormField::DiveSite,
        FormField::NObserved,
        FormField::Status,
        FormField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Species => "Species",
            Self::SightingDate => "Date",
            Self::DiveSite => "Dive Site",
            Self::NObserved => "N Observed",
            Self::Status => "Validation",
            Self::Notes => "Notes",
        }
    }
}

/// Editing state for the review form, seeded from the current record.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Index into `FormField::ALL`.
    pub cursor: usize,
    pub species: String,
    pub sighting_date: String,
    pub dive_site: String,
    pub n_observed: String,
    pub status: Validation,
    pub notes: String,
    pub editing: bool,
    pub edit_buffer: String,
    pub edit_cursor: usize,
}

impl FormState {
    /// Seed from a record. An empty species field takes the guess; an
    /// unreviewed record seeds the status choice to `valid` (the form's
    /// default selection).
    pub fn seed(record: &SightingRecord, guess: &str) -> Self {
        let species = if record.species.trim().is_empty() {
            guess.to_string()
        } else {
            record.species.clone()
        };
        let status = if record.validation.is_reviewed() {
            record.validation
        } else {
            Validation::Valid
        };
        Self {
            cursor: 0,
            species,
            sighting_date: record.sighting_date.clone(),
            dive_site: record.dive_site.clone(),
            n_observed: record.n_observed.clone(),
            status,
            notes: record.notes.clone(),
            editing: false,
            edit_buffer: String::new(),
            edit_cursor: 0,
        }
    }

    pub fn field(&self) -> FormField {
        FormField::ALL[self.cursor]
    }

    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Species => &self.species,
            FormField::SightingDate => &self.sighting_date,
            FormField::DiveSite => &self.dive_site,
            FormField::NObserved => &self.n_observed,
            FormField::Status => self.status.as_str(),
            FormField::Notes => &self.notes,
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < FormField::ALL.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Begin editing the field under the cursor. The status field is a
    /// choice, not a text field; returns false for it.
    pub fn begin_edit(&mut self) -> bool {
        if self.field() == FormField::Status {
            return false;
        }
        let value = self.field_value(self.field()).to_string();
        self.edit_cursor = value.len();
        self.edit_buffer = value;
        self.editing = true;
        true
    }

    pub fn confirm_edit(&mut self) {
        let value = std::mem::take(&mut self.edit_buffer);
        match self.field() {
            FormField::Species => self.species = value,
            FormField::SightingDate => self.sighting_date = value,
            FormField::DiveSite => self.dive_site = value,
            FormField::NObserved => self.n_observed = value,
            FormField::Notes => self.notes = value,
            FormField::Status => {}
        }
        self.editing = false;
        self.edit_cursor = 0;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
    }

    /// Insert a character at the edit cursor. '\x08' is the backspace
    /// sentinel from the input mapper.
    pub fn edit_input(&mut self, c: char) {
        if c == '\x08' {
            if self.edit_cursor > 0 {
                let prev = self.edit_buffer[..self.edit_cursor]
                    .char_indices()
                    .next_back()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.edit_buffer.drain(prev..self.edit_cursor);
                self.edit_cursor = prev;
            }
        } else {
            self.edit_buffer.insert(self.edit_cursor, c);
            self.edit_cursor += c.len_utf8();
        }
    }

    pub fn edit_cursor_left(&mut self) {
        self.edit_cursor = self.edit_buffer[..self.edit_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub fn edit_cursor_right(&mut self) {
        if self.edit_cursor < self.edit_buffer.len() {
            self.edit_cursor += self.edit_buffer[self.edit_cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
        }
    }

    pub fn edit_cursor_home(&mut self) {
        self.edit_cursor = 0;
    }

    pub fn edit_cursor_end(&mut self) {
        self.edit_cursor = self.edit_buffer.len();
    }

    pub fn edit_delete_forward(&mut self) {
        if self.edit_cursor < self.edit_buffer.len() {
            let next = self.edit_cursor
                + self.edit_buffer[self.edit_cursor..]
                    .chars()
                    .next()
                    .map(|c| c.len_utf8())
                    .unwrap_or(0);
            self.edit_buffer.drain(self.edit_cursor..next);
        }
    }

    /// The field set this form would submit.
    pub fn as_edit(&self) -> RecordEdit {
        RecordEdit {
            species: self.species.clone(),
            sighting_date: self.sighting_date.clone(),
            dive_site: self.dive_site.clone(),
            validation: self.status,
            notes: self.notes.clone(),
            n_observed: self.n_observed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SightingRecord {
        SightingRecord {
            url: "http://a".into(),
            title: "t".into(),
            excerpt: "a bull shark cruised by".into(),
            sighting_date: "2025-04-01".into(),
            dive_site: "North Wall".into(),
            ..Default::default()
        }
    }

    #[test]
    fn seed_takes_guess_when_species_is_empty() {
        let form = FormState::seed(&record(), "bull shark");
        assert_eq!(form.species, "bull shark");
    }

    #[test]
    fn seed_keeps_existing_species_over_guess() {
        let mut r = record();
        r.species = "nurse shark".into();
        let form = FormState::seed(&r, "bull shark");
        assert_eq!(form.species, "nurse shark");
    }

    #[test]
    fn seed_defaults_status_choice_to_valid_for_unreviewed() {
        let form = FormState::seed(&record(), "");
        assert_eq!(form.status, Validation::Valid);
    }

    #[test]
    fn seed_keeps_status_of_reviewed_record() {
        let mut r = record();
        r.validation = Validation::NeedsReview;
        let form = FormState::seed(&r, "");
        assert_eq!(form.status, Validation::NeedsReview);
    }

    #[test]
    fn begin_edit_refuses_the_status_field() {
        let mut form = FormState::seed(&record(), "");
        form.cursor = FormField::ALL
            .iter()
            .position(|f| *f == FormField::Status)
            .unwrap();
        assert!(!form.begin_edit());
        assert!(!form.editing);
    }

    #[test]
    fn edit_buffer_round_trip() {
        let mut form = FormState::seed(&record(), "");
        assert!(form.begin_edit()); // species
        form.edit_buffer.clear();
        form.edit_cursor = 0;
        for c in "manta ray".chars() {
            form.edit_input(c);
        }
        form.edit_input('\x08');
        form.confirm_edit();
        assert_eq!(form.species, "manta ra");
        assert!(!form.editing);
    }

    #[test]
    fn edit_cursor_moves_respect_char_boundaries() {
        let mut form = FormState::default();
        form.editing = true;
        form.edit_buffer = "ra\u{fc}".to_string(); // "rü" — multibyte tail
        form.edit_cursor = form.edit_buffer.len();
        form.edit_cursor_left();
        assert_eq!(form.edit_cursor, 2);
        form.edit_cursor_right();
        assert_eq!(form.edit_cursor, form.edit_buffer.len());
        form.edit_cursor_home();
        assert_eq!(form.edit_cursor, 0);
        form.edit_delete_forward();
        assert_eq!(form.edit_buffer, "a\u{fc}");
    }
}
