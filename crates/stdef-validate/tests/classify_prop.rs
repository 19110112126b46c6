//! Property tests for the field classifier.

use proptest::prelude::*;
use stdef_model::DataType;
use stdef_validate::classify;

proptest! {
    /// Every input maps to exactly one of the four classes.
    #[test]
    fn classifier_is_total(value in ".*") {
        let class = classify(&value);
        prop_assert!(matches!(
            class,
            DataType::Digits | DataType::WordCharacters | DataType::Other | DataType::Missing
        ));
        if value.is_empty() {
            prop_assert_eq!(class, DataType::Missing);
        } else {
            prop_assert_ne!(class, DataType::Missing);
        }
    }

    #[test]
    fn digit_strings_classify_as_digits(value in "[0-9]{1,32}") {
        prop_assert_eq!(classify(&value), DataType::Digits);
    }

    #[test]
    fn alphabetic_strings_classify_as_word_characters(value in "[a-zA-Z]{1,32}") {
        prop_assert_eq!(classify(&value), DataType::WordCharacters);
    }

    #[test]
    fn strings_with_punctuation_classify_as_other(
        prefix in "[a-z0-9]{0,8}",
        suffix in "[a-z0-9]{0,8}",
    ) {
        let value = format!("{prefix}@{suffix}");
        prop_assert_eq!(classify(&value), DataType::Other);
    }
}
