use stdef_model::DataType;

/// Classify a raw field value into exactly one [`DataType`].
///
/// Order is significant: emptiness is checked first, then digit-only,
/// then alpha-only, then the fallback. Total over all inputs, no side
/// effects.
pub fn classify(value: &str) -> DataType {
    if value.is_empty() {
        return DataType::Missing;
    }
    if value.chars().all(|c| c.is_ascii_digit()) {
        return DataType::Digits;
    }
    if value.chars().all(char::is_alphabetic) {
        return DataType::WordCharacters;
    }
    DataType::Other
}

#[cfg(test)]
mod tests {
    use super::classify;
    use stdef_model::DataType;

    #[test]
    fn empty_is_missing() {
        assert_eq!(classify(""), DataType::Missing);
    }

    #[test]
    fn all_digits() {
        assert_eq!(classify("0"), DataType::Digits);
        assert_eq!(classify("99"), DataType::Digits);
    }

    #[test]
    fn all_alphabetic() {
        assert_eq!(classify("A"), DataType::WordCharacters);
        assert_eq!(classify("AbC"), DataType::WordCharacters);
    }

    #[test]
    fn mixed_content_is_other() {
        assert_eq!(classify("4.abc3jf3247@"), DataType::Other);
        assert_eq!(classify("a b"), DataType::Other);
        assert_eq!(classify("12a"), DataType::Other);
        assert_eq!(classify("-1"), DataType::Other);
    }
}
