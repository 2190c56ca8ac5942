use deckhand::{AppName, Region, SecretName};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    #[test]
    fn well_formed_app_names_are_accepted(name in "[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?") {
        let app = AppName::new(name.clone()).unwrap();
        prop_assert_eq!(app.as_str(), name.as_str());
    }

    #[test]
    fn app_names_with_uppercase_are_rejected(prefix in "[a-z]{0,10}", upper in "[A-Z]", suffix in "[a-z]{0,10}") {
        let name = format!("{prefix}{upper}{suffix}");
        prop_assert!(AppName::new(name).is_err());
    }

    #[test]
    fn app_names_never_exceed_63_chars(name in "[a-z]{64,100}") {
        prop_assert!(AppName::new(name).is_err());
    }

    #[test]
    fn region_codes(code in "[a-z0-9]{2,4}") {
        prop_assert!(Region::new(code).is_ok());
    }

    #[test]
    fn long_region_codes_are_rejected(code in "[a-z]{5,12}") {
        prop_assert!(Region::new(code).is_err());
    }

    #[test]
    fn secret_names_are_upper_case_identifiers(name in "[A-Z_][A-Z0-9_]{0,30}") {
        prop_assert!(SecretName::new(name).is_ok());
    }

    #[test]
    fn secret_names_cannot_start_with_digit(digit in "[0-9]", rest in "[A-Z_]{0,10}") {
        let name = format!("{digit}{rest}");
        prop_assert!(SecretName::new(name).is_err());
    }
}
