use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use sightline_core::{Validation, highlight};

use crate::app::App;
use crate::model::form::FormField;
use crate::theme::Theme;
use crate::view::truncate;

/// Render the Record (review form) screen into the given area.
/// `footer_area` is a full-width row below the main content + session panel.
pub fn render_in(f: &mut Frame, app: &App, area: Rect, footer_area: Rect) {
    let theme = &app.theme;
    let index = app.session.current_row_index;
    let Some(record) = app.table.get(index) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // breadcrumb
        Constraint::Min(5),    // content
    ])
    .split(area);

    // --- Breadcrumb ---
    let breadcrumb = Line::from(vec![
        Span::styled(" SIGHTLINE ", theme.header_style()),
        Span::styled(" > ", Style::default().fg(theme.dim)),
        Span::styled(
            format!("row {} of {}", index, app.table.len()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" > ", Style::default().fg(theme.dim)),
        Span::styled(
            truncate(&record.title, 40),
            Style::default().fg(theme.text),
        ),
    ]);
    f.render_widget(Paragraph::new(breadcrumb), chunks[0]);

    // --- Content ---
    let mut lines: Vec<Line> = Vec::new();

    section_header(&mut lines, "ORIGINAL DATA", theme);
    lines.push(Line::from(vec![Span::styled(
        "  URL             ",
        Style::default().fg(theme.dim),
    )]));
    lines.push(Line::from(Span::styled(
        format!("    {}", record.url),
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::UNDERLINED),
    )));
    labeled_line(&mut lines, "Title", &record.title, theme);

    if record.validation.is_reviewed() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "  Previously validated as {}.",
                record.validation.as_str()
            ),
            Style::default()
                .fg(theme.validation_color(&record.validation))
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Excerpt",
        Style::default().fg(theme.dim),
    )));
    let vocabulary = highlight::species_vocabulary(&app.table);
    let segments = highlight::highlight(&record.excerpt, &vocabulary);
    let mut excerpt_spans = vec![Span::raw("    ")];
    for segment in segments {
        let style = if segment.highlighted {
            theme.species_style()
        } else {
            Style::default().fg(theme.text)
        };
        excerpt_spans.push(Span::styled(segment.text, style));
    }
    lines.push(Line::from(excerpt_spans));
    lines.push(Line::from(""));

    if app.session.is_url_skipped(&record.url) {
        // Read-only block replaces the form for skipped URLs
        lines.push(Line::from(Span::styled(
            "  This record's URL is marked as skipped.",
            Style::default()
                .fg(theme.not_valid)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "  Use the records screen to keep reviewing other URLs.",
            Style::default().fg(theme.dim),
        )));
    } else {
        section_header(&mut lines, "VALIDATE THIS SIGHTING", theme);
        for (i, field) in FormField::ALL.iter().enumerate() {
            lines.push(field_line(app, *field, i, theme));
        }
    }

    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(content, chunks[1]);

    render_footer(f, footer_area, theme);
}

fn field_line(app: &App, field: FormField, position: usize, theme: &Theme) -> Line<'static> {
    let selected = app.form.cursor == position;
    let marker = if selected { "\u{25B8} " } else { "  " };
    let marker_style = if selected {
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), marker_style),
        Span::styled(
            format!("{:<12}", field.label()),
            Style::default().fg(theme.dim),
        ),
    ];

    if field == FormField::Status {
        // Three-way choice rendered radio-style
        for status in [
            Validation::Valid,
            Validation::NeedsReview,
            Validation::NotValid,
        ] {
            let chosen = app.form.status == status;
            let text = if chosen {
                format!("[{}] ", status.as_str())
            } else {
                format!(" {}  ", status.as_str())
            };
            let style = if chosen {
                Style::default()
                    .fg(theme.validation_color(&status))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim)
            };
            spans.push(Span::styled(text, style));
        }
    } else if selected && app.form.editing {
        // Editing: buffer with a block cursor at the edit position
        let buffer = &app.form.edit_buffer;
        let cursor = app.form.edit_cursor.min(buffer.len());
        spans.push(Span::styled(
            buffer[..cursor].to_string(),
            Style::default().fg(theme.text),
        ));
        spans.push(Span::styled(
            "\u{2588}".to_string(),
            Style::default().fg(theme.active),
        ));
        spans.push(Span::styled(
            buffer[cursor..].to_string(),
            Style::default().fg(theme.text),
        ));
    } else {
        let value = app.form.field_value(field).to_string();
        let style = if selected {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(value, style));
    }

    Line::from(spans)
}

fn section_header(lines: &mut Vec<Line<'_>>, title: &'static str, theme: &Theme) {
    lines.push(Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    )));
}

fn labeled_line(lines: &mut Vec<Line<'_>>, label: &str, value: &str, theme: &Theme) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:<16}"), Style::default().fg(theme.dim)),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ]));
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Line::from(Span::styled(
        " j/k:field  Enter:edit/cycle  Space:status  s:save  x:skip url  n:next  e:export  Esc:back  ?:help",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}
