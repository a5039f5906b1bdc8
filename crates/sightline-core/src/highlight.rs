use regex::RegexBuilder;

use crate::SightingRecord;

/// A run of excerpt text, either plain or claimed by a species keyword.
/// Rendering (terminal bold, HTML, anything else) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// Distinct non-empty species strings from the full table, in order of first
/// appearance. Dedup is case-insensitive; the first spelling seen wins.
pub fn species_vocabulary(table: &[SightingRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut vocabulary = Vec::new();
    for record in table {
        let name = record.species.trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            vocabulary.push(name.to_string());
        }
    }
    vocabulary
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split an excerpt into segments, marking every whole-word, case-insensitive
/// occurrence of a vocabulary keyword.
///
/// Keywords are applied longest-first, and a region claimed by one keyword is
/// never re-claimed by a later (shorter) one, so "bull shark" wins over
/// "shark" on the same span while "shark" still matches elsewhere. Keywords
/// are regex-escaped; metacharacters in species names match literally.
pub fn highlight(excerpt: &str, vocabulary: &[String]) -> Vec<Segment> {
    let mut keywords: Vec<&str> = vocabulary.iter().map(String::as_str).collect();
    // Stable sort: equal-length keywords keep table order
    keywords.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut claimed: Vec<(usize, usize)> = Vec::new();
    for keyword in keywords {
        let Ok(re) = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        for m in re.find_iter(excerpt) {
            let (start, end) = (m.start(), m.end());
            let boundary_before = excerpt[..start]
                .chars()
                .next_back()
                .is_none_or(|c| !is_word_char(c));
            let boundary_after = excerpt[end..].chars().next().is_none_or(|c| !is_word_char(c));
            let overlaps = claimed.iter().any(|&(s, e)| start < e && s < end);
            if boundary_before && boundary_after && !overlaps {
                claimed.push((start, end));
            }
        }
    }
    claimed.sort_unstable();

    let mut segments = Vec::new();
    let mut pos = 0;
    for (start, end) in claimed {
        if start > pos {
            segments.push(Segment {
                text: excerpt[pos..start].to_string(),
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: excerpt[start..end].to_string(),
            highlighted: true,
        });
        pos = end;
    }
    if pos < excerpt.len() {
        segments.push(Segment {
            text: excerpt[pos..].to_string(),
            highlighted: false,
        });
    }
    segments
}

/// Suggest a species for an empty field: the first vocabulary entry in table
/// order (not length order) whose lowercase form is a substring of the
/// lowercased excerpt. A suggestion only; the operator confirms by saving.
pub fn guess_species(excerpt: &str, vocabulary: &[String]) -> Option<String> {
    let excerpt_lower = excerpt.to_lowercase();
    vocabulary
        .iter()
        .find(|kw| excerpt_lower.contains(&kw.to_lowercase()))
        .cloned()
}
