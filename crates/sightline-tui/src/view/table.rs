use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use sightline_core::progress;

use crate::app::App;
use crate::theme::Theme;
use crate::view::truncate;

/// Render the Records screen into the given area.
/// `footer_area` is a full-width row below the main content + session panel.
pub fn render_in(f: &mut Frame, app: &App, area: Rect, footer_area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // progress bar
        Constraint::Min(5),    // table
    ])
    .split(area);

    render_header(f, chunks[0], app, theme);
    render_progress_bar(f, chunks[1], app, theme);
    render_table(f, chunks[2], app);
    render_footer(f, footer_area, app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![
        Span::styled(" SIGHTLINE ", theme.header_style()),
        Span::styled(
            " Records",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];

    if app.hide_reviewed {
        spans.push(Span::styled(
            format!(" [showing {} unreviewed]", app.visible.len()),
            Style::default().fg(theme.active),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_progress_bar(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let progress = progress::table_progress(&app.table);

    // Build a text progress bar: ██████░░░░ 3/7 urls  12/40 rows
    let count_str = format!(
        " {}/{} urls  {}/{} rows",
        progress.reviewed_urls, progress.total_urls, progress.reviewed_rows, progress.total_rows
    );
    let bar_width = (area.width as usize).saturating_sub(1 + count_str.len());
    let filled = (progress.url_ratio() * bar_width as f64) as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(empty);

    let spans = vec![
        Span::styled(" ", Style::default()),
        Span::styled(bar, Style::default().fg(theme.active)),
        Span::styled(count_str, Style::default().fg(theme.text)),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let header_cells = ["#", "Status", "Species", "Date", "Site", "Title"];
    let header = Row::new(header_cells.iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
    }))
    .height(1);

    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|&index| {
            let record = &app.table[index];
            let skipped = app.session.is_url_skipped(&record.url);
            let status_style =
                Style::default().fg(theme.validation_color(&record.validation));
            let title_style = if skipped {
                Style::default().fg(theme.dim)
            } else {
                Style::default().fg(theme.text)
            };
            let title = if skipped {
                format!("[skipped] {}", record.title)
            } else {
                record.title.clone()
            };
            Row::new(vec![
                Cell::from(format!("{index}")).style(Style::default().fg(theme.dim)),
                Cell::from(record.validation.label()).style(status_style),
                Cell::from(truncate(&record.species, 18)),
                Cell::from(truncate(&record.sighting_date, 12))
                    .style(Style::default().fg(theme.dim)),
                Cell::from(truncate(&record.dive_site, 18)),
                Cell::from(truncate(&title, (area.width as usize).saturating_sub(64)))
                    .style(title_style),
            ])
        })
        .collect();

    let widths = vec![
        Constraint::Length(5),  // #
        Constraint::Length(13), // Status
        Constraint::Length(19), // Species
        Constraint::Length(12), // Date
        Constraint::Length(19), // Site
        Constraint::Min(15),    // Title
    ];

    let table = Table::new(rows, &widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        )
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default();
    state.select((!app.visible.is_empty()).then_some(app.table_cursor));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer = Line::from(Span::styled(
        " j/k:move  Enter:review  n:next unreviewed  f:hide reviewed  x:skip url  e:export  Tab:panel  ?:help  q:quit",
        app.theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}
