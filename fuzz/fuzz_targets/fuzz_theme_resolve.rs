#![no_main]

use arbitrary::Arbitrary;
use consentbar_theme::{PartialTheme, ThemeProperty, resolve};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Input<'a> {
    /// Raw bytes treated as a JSON theme object.
    Json(&'a [u8]),
    /// Property slots picked by index, plus free-form extras.
    Slots {
        values: Vec<(u8, &'a str)>,
        extras: Vec<(&'a str, &'a str)>,
    },
}

fn build(input: Input<'_>) -> Option<PartialTheme> {
    match input {
        Input::Json(bytes) => serde_json::from_slice(bytes).ok(),
        Input::Slots { values, extras } => {
            let all = ThemeProperty::ALL;
            let mut theme = PartialTheme::from_pairs(extras);
            for (slot, value) in values {
                theme.set(all[usize::from(slot) % all.len()], value);
            }
            Some(theme)
        }
    }
}

fuzz_target!(|input: Input<'_>| {
    let Some(partial) = build(input) else {
        return;
    };

    let Ok(theme) = resolve(&partial) else {
        return;
    };

    for &property in ThemeProperty::ALL {
        let value = theme.get(property);
        assert!(!value.is_empty(), "{property} resolved empty");
        if partial.is_provided(property) {
            assert_eq!(Some(value), partial.get(property), "{property} overwritten");
        }
    }
});
