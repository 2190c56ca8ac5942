use deckhand::domain::ports::Provider;
use deckhand::infrastructure::FlyProvider;
use deckhand::{AppName, Secret, SecretName};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    #[test]
    fn secret_value_never_reaches_argv_or_display(value in "[a-zA-Z0-9!@#%^&*]{8,40}") {
        let app = AppName::new("ghl-mcp-server").unwrap();
        let name = SecretName::new("GHL_CLIENT_SECRET").unwrap();
        let invocation = FlyProvider::default().set_secret(&app, &name, &Secret::new(value.clone()));

        prop_assert!(invocation.args.iter().all(|a| !a.contains(&value)));
        prop_assert!(!invocation.to_string().contains(&value));
        let debug = format!("{:?}", invocation);
        prop_assert!(!debug.contains(&value));

        let payload = invocation.stdin.as_ref().map(Secret::expose).unwrap_or_default();
        prop_assert_eq!(payload, format!("GHL_CLIENT_SECRET={}\n", value));
    }

    #[test]
    fn secret_debug_is_always_redacted(value in ".{1,40}") {
        prop_assert_eq!(format!("{:?}", Secret::new(value)), "Secret(***)");
    }
}
