// crates/michelin-core/src/text.rs

//! Text folding helpers used on both sides of a location lookup.

/// Fold a string for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Évian` -> `Evian`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// The function is idempotent: folding an already folded string returns it
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use michelin_core::text::normalize_text;
///
/// assert_eq!(normalize_text("  Évian-les-Bains "), "evian-les-bains");
/// assert_eq!(normalize_text("Île-de-France"), normalize_text("ile-de-france"));
/// ```
pub fn normalize_text(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase().trim().to_string()
}

/// Like [`normalize_text`], but a missing value folds to the empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize_text).unwrap_or_default()
}

/// Split a gazetteer `location` field into `(city, postal_code)`.
///
/// The expected shape is `"<city>"` or `"<city>, <postal code>"`. Only the
/// first two `", "`-separated segments are used. An empty input yields
/// `(None, None)`.
///
/// ```rust
/// use michelin_core::text::split_location_field;
///
/// assert_eq!(split_location_field("Lyon, 69001"), (Some("Lyon"), Some("69001")));
/// assert_eq!(split_location_field("Lyon"), (Some("Lyon"), None));
/// assert_eq!(split_location_field(""), (None, None));
/// ```
pub fn split_location_field(location: &str) -> (Option<&str>, Option<&str>) {
    if location.is_empty() {
        return (None, None);
    }
    let mut parts = location.split(", ");
    let city = parts.next();
    let postal_code = parts.next();
    (city, postal_code)
}

/// Preprocess text for order-insensitive token comparison.
///
/// Everything that is not alphanumeric (or `_`) becomes a separator, the
/// tokens are lower-cased, sorted and joined with a single space, so
/// `"Paul-Saint"` and `"saint paul"` both become `"paul saint"`.
pub fn token_sort_key(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase();

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_accents_and_case() {
        assert_eq!(normalize_text("Évian"), normalize_text("evian"));
        assert_eq!(normalize_text("  Saint-Étienne\t"), "saint-etienne");
        assert_eq!(normalize_text("ÇA"), "ca");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["Évian", "  Île-de-France  ", "Œuvre", "", "   ", "Straße", "Lyon, 69001"] {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn missing_values_fold_to_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" Nîmes ")), "nimes");
    }

    #[test]
    fn split_handles_postal_codes() {
        assert_eq!(
            split_location_field("Saint-Tropez, 83990"),
            (Some("Saint-Tropez"), Some("83990"))
        );
        assert_eq!(split_location_field("Lyon"), (Some("Lyon"), None));
        assert_eq!(split_location_field(""), (None, None));
    }

    #[test]
    fn split_ignores_extra_segments() {
        assert_eq!(
            split_location_field("Paris, 75001, France"),
            (Some("Paris"), Some("75001"))
        );
        // Only the comma-and-space form separates.
        assert_eq!(split_location_field("Lyon,69001"), (Some("Lyon,69001"), None));
    }

    #[test]
    fn token_key_is_order_insensitive() {
        assert_eq!(token_sort_key("saint paul"), token_sort_key("Paul-Saint"));
        assert_eq!(token_sort_key("  a  b "), "a b");
        assert_eq!(token_sort_key("---"), "");
        assert_eq!(token_sort_key("le_puy en velay"), "en le_puy velay");
    }
}
