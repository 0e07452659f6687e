//! Wildcard notation conversion between the view form users type and the
//! storage form the blocklist store matches with.
//!
//! Users type `*` to mean "match any digits here"; the store's LIKE-style
//! query language spells the same thing `%`. Both transforms are plain
//! character substitutions and leave everything else untouched, so they
//! never disturb the leading '+' or the digit sequence.

/// Wildcard character users type.
pub const VIEW_WILDCARD: char = '*';

/// Wildcard character the storage layer's query language uses.
pub const STORAGE_WILDCARD: char = '%';

/// Convert a user-typed pattern into storage form: every `*` becomes `%`.
pub fn view_to_storage(view: &str) -> String {
    view.replace(VIEW_WILDCARD, &STORAGE_WILDCARD.to_string())
}

/// Convert a stored pattern back into view form: every `%` becomes `*`.
pub fn storage_to_view(storage: &str) -> String {
    storage.replace(STORAGE_WILDCARD, &VIEW_WILDCARD.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_to_storage() {
        assert_eq!(view_to_storage("+4912345*"), "+4912345%");
        assert_eq!(view_to_storage("*123*"), "%123%");
    }

    #[test]
    fn test_storage_to_view() {
        assert_eq!(storage_to_view("+4912345%"), "+4912345*");
        assert_eq!(storage_to_view("%123%"), "*123*");
    }

    #[test]
    fn test_no_wildcards_pass_through() {
        assert_eq!(view_to_storage("+442071234567"), "+442071234567");
        assert_eq!(storage_to_view("+442071234567"), "+442071234567");
        assert_eq!(view_to_storage(""), "");
    }

    #[test]
    fn test_round_trip() {
        for s in ["+1684555*", "*", "+1*2*3", "12345", ""] {
            assert_eq!(storage_to_view(&view_to_storage(s)), s);
        }
        for s in ["+1684555%", "%", "+1%2%3", "12345", ""] {
            assert_eq!(view_to_storage(&storage_to_view(s)), s);
        }
    }

    #[test]
    fn test_plus_and_digits_untouched() {
        let converted = view_to_storage("+16845551234");
        assert!(converted.starts_with('+'));
        assert_eq!(converted, "+16845551234");
    }
}
