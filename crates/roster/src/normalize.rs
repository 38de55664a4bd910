/// Reduce a free-text location to the address sent to the geocoder.
///
/// People often list several places ("Paris / London", "Berlin & Munich");
/// only the first one is kept. Returns `None` when nothing is left.
pub fn normalize_location(text: &str) -> Option<String> {
    let first = first_segment(first_segment(text, '/'), '&');
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

fn first_segment(text: &str, separator: char) -> &str {
    text.split(separator).next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::normalize_location;

    #[test]
    fn keeps_first_of_slash_separated() {
        assert_eq!(normalize_location("Paris / London").as_deref(), Some("Paris"));
    }

    #[test]
    fn keeps_first_of_ampersand_separated() {
        assert_eq!(
            normalize_location("Berlin & Munich").as_deref(),
            Some("Berlin")
        );
    }

    #[test]
    fn trims_each_segment() {
        assert_eq!(
            normalize_location("  Madrid, Spain  ").as_deref(),
            Some("Madrid, Spain")
        );
        assert_eq!(
            normalize_location(" Barcelona & Girona / Lleida").as_deref(),
            Some("Barcelona")
        );
    }

    #[test]
    fn empty_results_are_none() {
        assert_eq!(normalize_location(""), None);
        assert_eq!(normalize_location("   "), None);
        assert_eq!(normalize_location(" / Paris"), None);
    }
}
