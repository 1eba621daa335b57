//! Filename patterns and title normalization.

use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

/// Quality tags, as a regex alternation.
const QUALITY_TAGS: &str = "720p|1080p|2160p|BRRip|BluRay|WEBRip|HDRip";

/// `<title> S<season>E<episode> [quality]`, e.g. `Breaking.Bad.S01E02.720p`.
///
/// The episode digits must not run into another digit.
pub(super) static SERIES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(.+?)[.\s]+s(\d{{1,2}})e(\d{{1,2}})(?:[.\s]*({QUALITY_TAGS}))?(?:[^\d]|$)"
    ))
    .expect("series pattern must compile")
});

/// `<title> <year> [quality]`, e.g. `Inception.2010.1080p`.
///
/// Years are limited to 1900-2099 and must end at a delimiter or the end of
/// the stem.
pub(super) static MOVIE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(.+?)[.\s]+(19\d{{2}}|20\d{{2}})(?:[.\s]+({QUALITY_TAGS}))?(?:[.\s]|$)"
    ))
    .expect("movie pattern must compile")
});

/// Text of capture group `index`, if it participated in the match.
pub(super) fn group<'h>(caps: &Captures<'h>, index: usize) -> Option<&'h str> {
    caps.get(index).map(|m| m.as_str())
}

/// Turns a raw title segment into display form.
///
/// Dots become spaces, every whitespace-delimited word gets an uppercase first
/// letter and lowercase remainder, and the result is trimmed.
///
/// ```
/// use mediasort_core::classifier::normalize_title;
///
/// assert_eq!(normalize_title("the.matrix"), "The Matrix");
/// ```
pub fn normalize_title(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut word_start = true;

    for ch in raw.chars() {
        let ch = if ch == '.' { ' ' } else { ch };
        if ch.is_whitespace() {
            normalized.push(ch);
            word_start = true;
        } else if word_start {
            normalized.extend(ch.to_uppercase());
            word_start = false;
        } else {
            normalized.extend(ch.to_lowercase());
        }
    }

    normalized.trim().to_string()
}
