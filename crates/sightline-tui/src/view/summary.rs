use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use sightline_core::progress;

use crate::app::App;
use crate::view::truncate;

/// Render the session side panel: progress gauges and the journal of edits
/// made this session.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Session ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 4 {
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // urls gauge
        Constraint::Length(1), // current url gauge
        Constraint::Length(1), // spacer
        Constraint::Min(2),    // edit log
    ])
    .split(inner);

    let table_progress = progress::table_progress(&app.table);
    let urls_gauge = Gauge::default()
        .ratio(table_progress.url_ratio())
        .label(format!(
            "{} of {} URLs reviewed",
            table_progress.reviewed_urls, table_progress.total_urls
        ))
        .gauge_style(Style::default().fg(theme.active))
        .use_unicode(true);
    f.render_widget(urls_gauge, chunks[0]);

    if let Some(record) = app.table.get(app.session.current_row_index) {
        let url_progress = progress::url_progress(&app.table, &record.url);
        let url_gauge = Gauge::default()
            .ratio(url_progress.ratio())
            .label(format!(
                "{} of {} rows for this URL",
                url_progress.reviewed, url_progress.total
            ))
            .gauge_style(Style::default().fg(theme.valid))
            .use_unicode(true);
        f.render_widget(url_gauge, chunks[1]);
    }

    let mut lines = vec![Line::from(Span::styled(
        "Edits this session",
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    ))];

    if app.session.edit_log.is_empty() {
        lines.push(Line::from(Span::styled(
            "(none yet)",
            Style::default().fg(theme.dim),
        )));
    }
    for (index, edit) in &app.session.edit_log {
        lines.push(Line::from(vec![
            Span::styled(format!("#{index:<5}"), Style::default().fg(theme.dim)),
            Span::styled(
                format!("{:<14}", truncate(&edit.species, 14)),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                edit.validation.label(),
                Style::default().fg(theme.validation_color(&edit.validation)),
            ),
        ]));
    }

    if !app.session.skipped_urls.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} urls skipped", app.session.skipped_urls.len()),
            Style::default().fg(theme.dim),
        )));
    }

    f.render_widget(Paragraph::new(lines), chunks[3]);
}
