use std::io::Write;

use owo_colors::OwoColorize;

use sightline_core::SightingRecord;
use sightline_core::progress::{table_progress, url_groups, validation_counts};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print overall review progress and per-status counts.
pub fn print_stats(
    w: &mut dyn Write,
    table: &[SightingRecord],
    color: ColorMode,
) -> std::io::Result<()> {
    let progress = table_progress(table);
    let counts = validation_counts(table);

    writeln!(
        w,
        "{} of {} rows reviewed, {} of {} URLs fully reviewed",
        progress.reviewed_rows, progress.total_rows, progress.reviewed_urls, progress.total_urls
    )?;

    if color.enabled() {
        writeln!(
            w,
            "{}  {}  {}  {}",
            format!("valid: {}", counts.valid).green(),
            format!("needs review: {}", counts.needs_review).yellow(),
            format!("not valid: {}", counts.not_valid).red(),
            format!("unreviewed: {}", counts.unreviewed).dimmed(),
        )?;
    } else {
        writeln!(
            w,
            "valid: {}  needs review: {}  not valid: {}  unreviewed: {}",
            counts.valid, counts.needs_review, counts.not_valid, counts.unreviewed
        )?;
    }
    Ok(())
}

/// Print each URL group with its review progress, fully-reviewed groups dimmed.
pub fn print_url_groups(
    w: &mut dyn Write,
    table: &[SightingRecord],
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w)?;
    for (url, progress) in url_groups(table) {
        let line = format!("[{}/{}] {}", progress.reviewed, progress.total, url);
        if color.enabled() && progress.reviewed == progress.total {
            writeln!(w, "{}", line.dimmed())?;
        } else {
            writeln!(w, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sightline_core::Validation;

    fn row(url: &str, validation: Validation) -> SightingRecord {
        SightingRecord {
            url: url.into(),
            validation,
            ..Default::default()
        }
    }

    #[test]
    fn stats_without_color_are_plain_text() {
        let table = vec![
            row("http://a", Validation::Valid),
            row("http://a", Validation::Unreviewed),
        ];
        let mut buf = Vec::new();
        print_stats(&mut buf, &table, ColorMode(false)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1 of 2 rows reviewed"));
        assert!(text.contains("valid: 1"));
        assert!(text.contains("unreviewed: 1"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn url_listing_shows_group_progress() {
        let table = vec![
            row("http://a", Validation::Valid),
            row("http://a", Validation::NotValid),
            row("http://b", Validation::Unreviewed),
        ];
        let mut buf = Vec::new();
        print_url_groups(&mut buf, &table, ColorMode(false)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("[2/2] http://a"));
        assert!(text.contains("[0/1] http://b"));
    }
}
