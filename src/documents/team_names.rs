//! Two-line wrapping of long team names on the changing-room sheet

use crate::constants::layout::{LINE_BREAK_MARKER, TEAM_NAME_WRAP_LIMIT};
use crate::documents::html::escape_html;

/// True when `name` is too long for one line of the changing-room table.
pub fn wraps(name: &str) -> bool {
    name.chars().count() > TEAM_NAME_WRAP_LIMIT
}

/// Splits a long team name into two lines, or returns `None` when it fits.
///
/// The split starts at the middle word and moves towards the start until the
/// first line is at most [`TEAM_NAME_WRAP_LIMIT`] characters. A single word
/// that is too long on its own ends up alone on the second line.
pub fn split_team_lines(name: &str) -> Option<(String, String)> {
    if !wraps(name) {
        return None;
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    let mut split_index = words.len() / 2;
    while split_index > 0 && words[..split_index].join(" ").chars().count() > TEAM_NAME_WRAP_LIMIT
    {
        split_index -= 1;
    }

    Some((
        words[..split_index].join(" "),
        words[split_index..].join(" "),
    ))
}

/// Returns the name with a line break marker between the two lines, or the
/// name unchanged when it fits on one line.
///
/// # Examples
/// ```
/// use matchday_sheets::documents::team_names::split_team_name;
///
/// assert_eq!(split_team_name("Basket Leuven B"), "Basket Leuven B");
/// assert_eq!(
///     split_team_name("Koninklijke Basketbalclub Hageland United"),
///     "Koninklijke Basketbalclub<br/>Hageland United"
/// );
/// ```
pub fn split_team_name(name: &str) -> String {
    match split_team_lines(name) {
        Some((first, second)) => format!("{first}{LINE_BREAK_MARKER}{second}"),
        None => name.to_string(),
    }
}

/// HTML for a team cell: each line escaped on its own, joined by the marker.
pub fn team_name_html(name: &str) -> String {
    match split_team_lines(name) {
        Some((first, second)) => format!(
            "{}{LINE_BREAK_MARKER}{}",
            escape_html(&first),
            escape_html(&second)
        ),
        None => escape_html(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_pass_through() {
        let names = [
            "",
            "A",
            "Basket Leuven B",
            "Hageland United HSE A",
            "Exactly twenty-five chars",
        ];
        for name in names {
            assert!(name.chars().count() <= TEAM_NAME_WRAP_LIMIT);
            assert_eq!(split_team_name(name), name);
            assert_eq!(split_team_lines(name), None);
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 25 characters, more than 25 bytes
        let name = "Sporting Sint-Pieters-Ééé";
        assert!(name.len() > TEAM_NAME_WRAP_LIMIT);
        assert!(!wraps(name));
        assert_eq!(split_team_name(name), name);
    }

    #[test]
    fn test_wrapped_26_character_names_reconstruct() {
        let names = [
            "Hageland United Basket HSE",
            "A BBBBBBBBBBBBBBBBBBBBBBBB",
            "BBBBBBBBBBBBBBBBBBBBBBBB A",
            "Ab Cd Ef Gh Ij Kl Mn Op Qr",
            "Basketbalclub Oud-Heverlee",
        ];
        for name in names {
            assert_eq!(name.chars().count(), 26, "{name}");
            let wrapped = split_team_name(name);
            assert!(wrapped.contains(LINE_BREAK_MARKER), "{name}");
            assert_eq!(wrapped.replace(LINE_BREAK_MARKER, " "), name);
        }
    }

    #[test]
    fn test_first_line_respects_limit() {
        let (first, second) =
            split_team_lines("Koninklijke Basket Oost-Brabant Dames A").unwrap();
        assert!(first.chars().count() <= TEAM_NAME_WRAP_LIMIT);
        assert_eq!(first, "Koninklijke Basket");
        assert_eq!(second, "Oost-Brabant Dames A");
    }

    #[test]
    fn test_split_walks_back_from_middle() {
        // Middle split would give a 29 character first line
        let (first, second) =
            split_team_lines("Sportvereniging Basketbalclub Noord X").unwrap();
        assert_eq!(first, "Sportvereniging");
        assert_eq!(second, "Basketbalclub Noord X");
    }

    #[test]
    fn test_single_long_word_has_empty_first_line() {
        let name = "Basketbalvereniginglubbeek";
        assert!(wraps(name));
        assert_eq!(
            split_team_name(name),
            format!("{LINE_BREAK_MARKER}{name}")
        );
    }

    #[test]
    fn test_team_name_html_escapes_each_line() {
        assert_eq!(team_name_html("R&B Basket"), "R&amp;B Basket");
        assert_eq!(
            team_name_html("Basketbalclub <Oost> & West Brabant"),
            "Basketbalclub &lt;Oost&gt;<br/>&amp; West Brabant"
        );
    }
}
