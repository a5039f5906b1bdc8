use super::{App, InputMode, Screen};
use crate::action::Action;
use crate::model::form::FormField;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Quit confirmation modal — q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(8);
                }
                _ => {}
            }
            return false;
        }

        // Help overlay
        if self.show_help {
            match action {
                Action::Quit => {
                    self.confirm_quit = true;
                }
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(8);
                }
                _ => {}
            }
            return false;
        }

        // Form text editing intercepts everything except Ctrl+C
        if self.form.editing {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::TextCancel => {
                    self.form.cancel_edit();
                    self.input_mode = InputMode::Normal;
                }
                Action::TextConfirm => {
                    self.form.confirm_edit();
                    self.input_mode = InputMode::Normal;
                }
                Action::TextInput(c) => self.form.edit_input(c),
                Action::CursorLeft => self.form.edit_cursor_left(),
                Action::CursorRight => self.form.edit_cursor_right(),
                Action::CursorHome => self.form.edit_cursor_home(),
                Action::CursorEnd => self.form.edit_cursor_end(),
                Action::DeleteForward => self.form.edit_delete_forward(),
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::NavigateBack => {
                if self.screen == Screen::Record {
                    self.screen = Screen::Table;
                    // Restore the cursor to the record's row if visible
                    if let Some(pos) = self
                        .visible
                        .iter()
                        .position(|&i| i == self.session.current_row_index)
                    {
                        self.table_cursor = pos;
                    }
                }
            }
            Action::DrillIn => match self.screen {
                Screen::Table => {
                    if let Some(index) = self.selected_row() {
                        self.open_record(index);
                    }
                }
                Screen::Record => {
                    if self.form_active() {
                        if self.form.field() == FormField::Status {
                            self.form.status = self.form.status.cycle();
                        } else if self.form.begin_edit() {
                            self.input_mode = InputMode::TextInput;
                        }
                    }
                }
            },
            Action::MoveDown => match self.screen {
                Screen::Table => {
                    if self.table_cursor + 1 < self.visible.len() {
                        self.table_cursor += 1;
                    }
                }
                Screen::Record => {
                    if self.form_active() {
                        self.form.cursor_down();
                    }
                }
            },
            Action::MoveUp => match self.screen {
                Screen::Table => {
                    self.table_cursor = self.table_cursor.saturating_sub(1);
                }
                Screen::Record => {
                    if self.form_active() {
                        self.form.cursor_up();
                    }
                }
            },
            Action::PageDown => {
                if self.screen == Screen::Table {
                    let page = self.visible_rows.max(1);
                    self.table_cursor =
                        (self.table_cursor + page).min(self.visible.len().saturating_sub(1));
                }
            }
            Action::PageUp => {
                if self.screen == Screen::Table {
                    let page = self.visible_rows.max(1);
                    self.table_cursor = self.table_cursor.saturating_sub(page);
                }
            }
            Action::GoTop => match self.screen {
                Screen::Table => self.table_cursor = 0,
                Screen::Record => self.form.cursor = 0,
            },
            Action::GoBottom => match self.screen {
                Screen::Table => {
                    self.table_cursor = self.visible.len().saturating_sub(1);
                }
                Screen::Record => {
                    self.form.cursor = FormField::ALL.len() - 1;
                }
            },
            Action::CycleValidation => {
                if self.screen == Screen::Record && self.form_active() {
                    self.form.status = self.form.status.cycle();
                }
            }
            Action::SaveRecord => {
                if self.screen == Screen::Record && self.form_active() {
                    self.save_current();
                }
            }
            Action::SkipUrl => {
                self.skip_current_url();
            }
            Action::NextUnreviewed => {
                self.jump_next_unreviewed();
            }
            Action::Export => {
                self.export_snapshot();
            }
            Action::ToggleHideReviewed => {
                self.hide_reviewed = !self.hide_reviewed;
                self.recompute_visible();
                self.status = if self.hide_reviewed {
                    Some(format!("Showing {} unreviewed records.", self.visible.len()))
                } else {
                    None
                };
            }
            Action::ToggleSummaryPanel => {
                self.summary_visible = !self.summary_visible;
            }
            Action::TextInput(_)
            | Action::TextConfirm
            | Action::TextCancel
            | Action::CursorLeft
            | Action::CursorRight
            | Action::CursorHome
            | Action::CursorEnd
            | Action::DeleteForward => {}
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                if self.screen == Screen::Table {
                    self.recompute_visible();
                }
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(8);
            }
            Action::None => {}
        }
        false
    }
}
