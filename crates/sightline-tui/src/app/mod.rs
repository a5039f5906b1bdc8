mod update;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use sightline_core::store::{self, StorePaths};
use sightline_core::{SessionState, SightingRecord, highlight, nav};

use crate::model::form::FormState;
use crate::theme::Theme;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The working table: row selector, per-row status, filter toggle.
    Table,
    /// The review form for the row under the session pointer.
    Record,
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    TextInput,
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub table: Vec<SightingRecord>,
    pub session: SessionState,
    pub paths: StorePaths,
    pub form: FormState,
    pub input_mode: InputMode,
    pub theme: Theme,

    /// Cursor position within `visible`.
    pub table_cursor: usize,
    /// Maps visual row → table index (recomputed on filter changes and ticks).
    pub visible: Vec<usize>,
    pub hide_reviewed: bool,

    pub summary_visible: bool,
    pub show_help: bool,
    pub confirm_quit: bool,
    pub should_quit: bool,
    /// One-line notice shown in the footer ("Saved.", "No more rows...", ...).
    pub status: Option<String>,
    /// Height of the visible table area (set on resize, used for page up/down).
    pub visible_rows: usize,
    pub tick: usize,
}

impl App {
    pub fn new(table: Vec<SightingRecord>, paths: StorePaths, theme: Theme) -> Self {
        let session = SessionState::new(&table);
        let mut app = Self {
            screen: Screen::Table,
            table,
            session,
            paths,
            form: FormState::default(),
            input_mode: InputMode::Normal,
            theme,
            table_cursor: 0,
            visible: Vec::new(),
            hide_reviewed: false,
            summary_visible: true,
            show_help: false,
            confirm_quit: false,
            should_quit: false,
            status: None,
            visible_rows: 20,
            tick: 0,
        };
        app.recompute_visible();
        // Start the cursor on the session's initial row
        if let Some(pos) = app
            .visible
            .iter()
            .position(|&i| i == app.session.current_row_index)
        {
            app.table_cursor = pos;
        }
        app
    }

    /// Recompute the visible row list from the hide-reviewed filter.
    ///
    /// Stabilises the cursor: if the row previously under the cursor is still
    /// visible it keeps the cursor; otherwise the cursor clamps.
    pub fn recompute_visible(&mut self) {
        let prev = self.visible.get(self.table_cursor).copied();
        self.visible = if self.hide_reviewed {
            self.table
                .iter()
                .enumerate()
                .filter(|(_, r)| r.is_unreviewed())
                .map(|(i, _)| i)
                .collect()
        } else {
            (0..self.table.len()).collect()
        };
        if let Some(row) = prev
            && let Some(pos) = self.visible.iter().position(|&i| i == row)
        {
            self.table_cursor = pos;
        } else {
            self.table_cursor = self
                .table_cursor
                .min(self.visible.len().saturating_sub(1));
        }
    }

    /// Table index of the row under the table cursor.
    pub fn selected_row(&self) -> Option<usize> {
        self.visible.get(self.table_cursor).copied()
    }

    /// Whether the current record's form is editable (its URL not skipped).
    pub fn form_active(&self) -> bool {
        self.table
            .get(self.session.current_row_index)
            .is_some_and(|r| !self.session.is_url_skipped(&r.url))
    }

    /// Move the session pointer to `index` and open the review form.
    pub(crate) fn open_record(&mut self, index: usize) {
        if self.table.is_empty() {
            return;
        }
        self.session.current_row_index = nav::clamp_row(index, self.table.len());
        self.reseed_form();
        self.screen = Screen::Record;
    }

    /// Rebuild the form from the current record, guessing a species for an
    /// empty field from the excerpt.
    pub(crate) fn reseed_form(&mut self) {
        let record = &self.table[self.session.current_row_index];
        let guess = if record.species.trim().is_empty() {
            let vocabulary = highlight::species_vocabulary(&self.table);
            highlight::guess_species(&record.excerpt, &vocabulary).unwrap_or_default()
        } else {
            String::new()
        };
        self.form = FormState::seed(record, &guess);
    }

    /// Persist the working table to the save file. On failure the in-memory
    /// table keeps its state and the failure becomes the status notice.
    pub(crate) fn persist(&mut self) -> bool {
        match store::save(&self.table, &self.paths.save) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "persisting working table failed");
                self.status = Some(format!("Save failed: {e}"));
                false
            }
        }
    }

    /// Submit the form: write its fields into the table, persist, journal.
    pub(crate) fn save_current(&mut self) {
        let index = self.session.current_row_index;
        if index >= self.table.len() {
            return;
        }
        let edit = self.form.as_edit();
        edit.apply_to(&mut self.table[index]);
        if self.persist() {
            self.session.record_edit(index, edit);
            self.status = Some("Saved.".to_string());
        }
        self.recompute_visible();
    }

    /// Reject every unreviewed row sharing the current record's URL, then
    /// persist.
    pub(crate) fn skip_current_url(&mut self) {
        let index = match self.screen {
            Screen::Record => self.session.current_row_index,
            Screen::Table => match self.selected_row() {
                Some(i) => i,
                None => return,
            },
        };
        let Some(url) = self.table.get(index).map(|r| r.url.clone()) else {
            return;
        };
        nav::skip_all_for_url(&mut self.table, &mut self.session, &url);
        if self.persist() {
            self.status = Some(format!(
                "All unreviewed records from {url} marked as not valid and skipped."
            ));
        }
        self.recompute_visible();
        if self.screen == Screen::Record {
            self.reseed_form();
        }
    }

    /// Jump to the next unreviewed row after the current one, or notice that
    /// none remain (pointer unchanged).
    pub(crate) fn jump_next_unreviewed(&mut self) {
        let from = match self.screen {
            Screen::Record => self.session.current_row_index,
            Screen::Table => self
                .selected_row()
                .unwrap_or(self.session.current_row_index),
        };
        match nav::next_unreviewed(&self.table, from) {
            Some(index) => {
                self.open_record(index);
                if let Some(pos) = self.visible.iter().position(|&i| i == index) {
                    self.table_cursor = pos;
                }
            }
            None => {
                self.status = Some("No more rows to review.".to_string());
            }
        }
    }

    /// Write a snapshot of the full working table to the download filename.
    pub(crate) fn export_snapshot(&mut self) {
        let path = std::path::PathBuf::from(store::SNAPSHOT_FILENAME);
        match store::export_snapshot(&self.table, &path) {
            Ok(()) => {
                self.status = Some(format!(
                    "Exported {} rows to {}",
                    self.table.len(),
                    path.display()
                ));
            }
            Err(e) => {
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    // update() is in update.rs

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        // Split the footer row out first so it spans the full terminal width.
        let footer_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: 1.min(area.height),
        };
        let body_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        // Session panel split (on body_area, so it doesn't cover the footer)
        let main_area = if self.summary_visible {
            let panel_width = if body_area.width > 120 {
                45
            } else {
                (body_area.width / 3).max(30)
            };
            let chunks = Layout::horizontal([Constraint::Min(40), Constraint::Length(panel_width)])
                .split(body_area);
            crate::view::summary::render(f, chunks[1], self);
            chunks[0]
        } else {
            body_area
        };

        match self.screen {
            Screen::Table => crate::view::table::render_in(f, self, main_area, footer_area),
            Screen::Record => crate::view::record::render_in(f, self, main_area, footer_area),
        }

        // Status notice right-aligned in the footer (painter's order)
        if let Some(status) = &self.status {
            let line = Line::from(Span::styled(
                format!("{status} "),
                Style::default().fg(self.theme.active),
            ))
            .alignment(Alignment::Right);
            f.render_widget(Paragraph::new(vec![line]), footer_area);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}
