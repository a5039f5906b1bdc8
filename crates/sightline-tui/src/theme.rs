use ratatui::style::{Color, Modifier, Style};

use sightline_core::Validation;

/// Color theme for the TUI.
pub struct Theme {
    pub valid: Color,
    pub needs_review: Color,
    pub not_valid: Color,
    pub unreviewed: Color,
    /// Species keyword emphasis in excerpts.
    pub species: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            valid: Color::Rgb(0, 210, 0),
            needs_review: Color::Yellow,
            not_valid: Color::Red,
            unreviewed: Color::DarkGray,
            species: Color::Cyan,

            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Modern theme: white text, electric blue accents, dark blue header.
    pub fn modern() -> Self {
        Self {
            valid: Color::Rgb(0, 200, 80),
            needs_review: Color::Rgb(255, 200, 0),
            not_valid: Color::Rgb(255, 80, 80),
            unreviewed: Color::Rgb(80, 80, 100),
            species: Color::Rgb(60, 140, 255),

            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(30, 40, 80),
            active: Color::Rgb(60, 140, 255),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
        }
    }

    pub fn validation_color(&self, validation: &Validation) -> Color {
        match validation {
            Validation::Unreviewed => self.unreviewed,
            Validation::Valid => self.valid,
            Validation::NeedsReview => self.needs_review,
            Validation::NotValid => self.not_valid,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn species_style(&self) -> Style {
        Style::default()
            .fg(self.species)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
