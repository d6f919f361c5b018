//! Short names from URI-like identifiers
//!
//! `http://ex.org/people#Alice` names `Alice`. Numeric discriminators at the
//! end (`.../Person/1`, `.../Ratio/0.5`, `.../Person1`) are dropped.

use crate::graph::{GraphError, GraphResult};

const SEPARATORS: [char; 3] = ['#', '/', ':'];

/// Split on `#`, `/` and `:`, keeping empty segments
pub fn split_uri(uri: &str) -> Vec<&str> {
    uri.split(SEPARATORS).collect()
}

fn is_single_digit(segment: &str) -> bool {
    segment.len() == 1 && segment.chars().all(|c| c.is_ascii_digit())
}

fn is_short_float(segment: &str) -> bool {
    segment.chars().count() == 3 && segment.parse::<f64>().is_ok()
}

/// Extract the short name of a URI
///
/// - last segment a single digit or a 3-character float: the segment before it
/// - last segment a name ending in exactly one digit: the name without it
/// - otherwise: the last segment
///
/// Fails with [`GraphError::InvalidUri`] when the segment before the last is
/// needed but the URI has only one segment.
pub fn get_name(uri: &str) -> GraphResult<&str> {
    let segments = split_uri(uri);
    let last = segments.last().copied().unwrap_or_default();

    if is_single_digit(last) || is_short_float(last) {
        return match segments.len() {
            0 | 1 => Err(GraphError::InvalidUri(uri.to_string())),
            n => Ok(segments[n - 2]),
        };
    }

    let mut chars = last.char_indices().rev();
    if let (Some((idx, c)), Some((_, prev))) = (chars.next(), chars.next()) {
        if c.is_ascii_digit() && !prev.is_ascii_digit() && prev != '.' {
            return Ok(&last[..idx]);
        }
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(get_name("http://ex.org/Person").unwrap(), "Person");
        assert_eq!(get_name("http://ex.org/ontology#Alice").unwrap(), "Alice");
        assert_eq!(get_name("urn:isbn:Dune").unwrap(), "Dune");
        assert_eq!(get_name("Alice").unwrap(), "Alice");
    }

    #[test]
    fn test_numeric_discriminators() {
        assert_eq!(get_name("http://ex.org/Person/1").unwrap(), "Person");
        assert_eq!(get_name("http://ex.org/Ratio/0.5").unwrap(), "Ratio");
        assert_eq!(get_name("http://ex.org/Person1").unwrap(), "Person");
        // Two digits are part of the name
        assert_eq!(get_name("http://ex.org/Person12").unwrap(), "Person12");
        assert_eq!(get_name("http://ex.org/Year/2020").unwrap(), "2020");
    }

    #[test]
    fn test_short_uri_is_an_error() {
        assert_eq!(get_name("7"), Err(GraphError::InvalidUri("7".to_string())));
        assert_eq!(get_name("1.5"), Err(GraphError::InvalidUri("1.5".to_string())));
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        assert_eq!(split_uri("a://b"), vec!["a", "", "", "b"]);
        assert_eq!(get_name("http://ex.org/").unwrap(), "");
    }
}
