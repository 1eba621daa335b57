//! Target path layout for the media library.
//!
//! Movies go to `<root>/Movies/<Title> (<Year>) [<Quality>].<ext>`, episodes
//! to `<root>/TV Shows/<Title>/Season <N>/<Title> S<NN>E<NN> [<Quality>].<ext>`.
//! Everything here is pure: no I/O, same input same output.

use std::path::{Path, PathBuf};

use crate::classifier::{MediaDescriptor, MediaKind};

/// Top-level directory for movies.
pub const MOVIES_DIR: &str = "Movies";

/// Top-level directory for series.
pub const TV_SHOWS_DIR: &str = "TV Shows";

/// Computes where `descriptor` belongs under `destination_root`.
pub fn compute_target_path(descriptor: &MediaDescriptor, destination_root: &Path) -> PathBuf {
    let title = path_safe(&descriptor.title);
    let file_name = target_file_name(descriptor);

    match &descriptor.kind {
        MediaKind::Movie => destination_root.join(MOVIES_DIR).join(file_name),
        MediaKind::Series { season, .. } => destination_root
            .join(TV_SHOWS_DIR)
            .join(title)
            .join(format!("Season {}", path_safe(season)))
            .join(file_name),
    }
}

/// Computes the target path and stores it on the descriptor.
pub fn assign_target_path(descriptor: &mut MediaDescriptor, destination_root: &Path) -> PathBuf {
    let target = compute_target_path(descriptor, destination_root);
    descriptor.target_path = Some(target.clone());
    target
}

/// Final filename for `descriptor`, without any directory.
pub fn target_file_name(descriptor: &MediaDescriptor) -> String {
    let title = path_safe(&descriptor.title);

    let mut name = match &descriptor.kind {
        MediaKind::Movie => match descriptor.year.as_deref().filter(|y| !y.is_empty()) {
            Some(year) => format!("{} ({})", title, year),
            None => title,
        },
        MediaKind::Series { season, episode } => format!(
            "{} S{}E{}",
            title,
            zero_pad(season),
            zero_pad(episode)
        ),
    };

    if let Some(quality) = descriptor.quality {
        name.push_str(&format!(" [{}]", quality));
    }

    if !descriptor.extension.is_empty() {
        name.push('.');
        name.push_str(&descriptor.extension);
    }

    name
}

/// Pads a parsed number to at least two digits ("1" -> "01", "12" -> "12").
fn zero_pad(number: &str) -> String {
    format!("{:0>2}", number)
}

/// Replaces characters that would escape or split a path component.
///
/// Provider titles such as "Face/Off" would otherwise create a nested
/// directory.
fn path_safe(component: &str) -> String {
    let cleaned: String = component
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '-',
            c => c,
        })
        .collect();

    match cleaned.as_str() {
        "." | ".." => cleaned.replace('.', "_"),
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify, Quality};

    fn movie(title: &str, year: Option<&str>, quality: Option<Quality>) -> MediaDescriptor {
        MediaDescriptor {
            kind: MediaKind::Movie,
            title: title.to_string(),
            year: year.map(str::to_string),
            quality,
            extension: "mkv".to_string(),
            source_path: PathBuf::from("/in/source.mkv"),
            target_path: None,
        }
    }

    #[test]
    fn test_movie_path_with_quality() {
        let descriptor = classify("Inception.2010.1080p.mkv").unwrap();
        let target = compute_target_path(&descriptor, Path::new("/library"));

        assert_eq!(
            target,
            PathBuf::from("/library/Movies/Inception (2010) [1080p].mkv")
        );
    }

    #[test]
    fn test_movie_path_without_quality() {
        let descriptor = movie("The Matrix", Some("1999"), None);
        let target = compute_target_path(&descriptor, Path::new("/library"));

        assert_eq!(target, PathBuf::from("/library/Movies/The Matrix (1999).mkv"));
    }

    #[test]
    fn test_movie_path_without_year() {
        let descriptor = movie("Untitled", None, Some(Quality::HdRip));
        assert_eq!(target_file_name(&descriptor), "Untitled [HDRip].mkv");
    }

    #[test]
    fn test_series_path_pads_filename_but_not_directory() {
        let descriptor = classify("show.s1e1.mkv").unwrap();
        let target = compute_target_path(&descriptor, Path::new("/library"));

        assert_eq!(
            target,
            PathBuf::from("/library/TV Shows/Show/Season 1/Show S01E01.mkv")
        );
    }

    #[test]
    fn test_series_path_with_quality() {
        let descriptor = classify("Breaking.Bad.S01E02.720p.mkv").unwrap();
        let target = compute_target_path(&descriptor, Path::new("/library"));

        assert_eq!(
            target,
            PathBuf::from("/library/TV Shows/Breaking Bad/Season 01/Breaking Bad S01E02 [720p].mkv")
        );
    }

    #[test]
    fn test_two_digit_numbers_are_not_padded_further() {
        let descriptor = classify("Show.S12E24.mkv").unwrap();
        assert_eq!(target_file_name(&descriptor), "Show S12E24.mkv");
    }

    #[test]
    fn test_compute_is_deterministic() {
        let descriptor = classify("Breaking.Bad.S01E02.720p.mkv").unwrap();
        let root = Path::new("relative/dest");

        let first = compute_target_path(&descriptor, root);
        let second = compute_target_path(&descriptor, root);

        assert_eq!(first.as_os_str(), second.as_os_str());
        assert!(first.starts_with(root));
    }

    #[test]
    fn test_title_with_separator_stays_under_root() {
        let descriptor = movie("Face/Off", Some("1997"), None);
        let target = compute_target_path(&descriptor, Path::new("/library"));

        assert_eq!(target, PathBuf::from("/library/Movies/Face-Off (1997).mkv"));
        assert_eq!(target.parent(), Some(Path::new("/library/Movies")));
    }

    #[test]
    fn test_dot_dot_title_cannot_escape() {
        let mut descriptor = classify("show.s1e1.mkv").unwrap();
        descriptor.title = "..".to_string();
        let target = compute_target_path(&descriptor, Path::new("/library"));

        assert!(target.starts_with("/library/TV Shows"));
        assert!(!target
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir)));
    }

    #[test]
    fn test_extension_is_kept_unchanged() {
        let mut descriptor = movie("Heat", Some("1995"), None);
        descriptor.extension = "MP4".to_string();
        assert_eq!(target_file_name(&descriptor), "Heat (1995).MP4");

        descriptor.extension = String::new();
        assert_eq!(target_file_name(&descriptor), "Heat (1995)");
    }

    #[test]
    fn test_assign_target_path_updates_descriptor() {
        let mut descriptor = classify("Inception.2010.mkv").unwrap();
        let target = assign_target_path(&mut descriptor, Path::new("/library"));

        assert_eq!(descriptor.target_path.as_ref(), Some(&target));
    }
}
