#![no_main]

use consentbar_theme::{ColorValue, derive_alpha_variant};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, f64)| {
    let (text, factor) = input;
    if text.len() > 1024 {
        return;
    }

    let parsed = ColorValue::parse(text);
    let derived = derive_alpha_variant(text, factor);

    // Derivation succeeds exactly when the grammar accepts the input.
    assert_eq!(parsed.is_some(), derived.is_some());

    if let Some(value) = derived {
        let prefix = value.get(..5).unwrap_or_default();
        assert!(prefix.eq_ignore_ascii_case("rgba("), "derived value {value:?}");
        assert!(value.ends_with(')'), "derived value {value:?}");
    }
});
