// SPDX-License-Identifier: Apache-2.0
//! User-visible strings for the banner and preferences dialog.
//!
//! Callers supply a [`PartialTextResources`]; every field they leave out is
//! taken from the English defaults. An explicitly empty string is kept, so a
//! caller can blank out a label on purpose.

use serde::{Deserialize, Serialize};

macro_rules! text_resources {
    ( $( $(#[$doc:meta])* $field:ident = $default:literal, )+ ) => {
        /// Complete set of widget strings.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct TextResources {
            $( $(#[$doc])* pub $field: String, )+
        }

        /// Caller overrides; absent fields fall back to the defaults.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct PartialTextResources {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )+
        }

        impl Default for TextResources {
            fn default() -> Self {
                Self {
                    $( $field: $default.to_string(), )+
                }
            }
        }

        impl PartialTextResources {
            /// Fill every absent field from `base`.
            #[must_use]
            pub fn merge_over(self, base: &TextResources) -> TextResources {
                TextResources {
                    $( $field: self.$field.unwrap_or_else(|| base.$field.clone()), )+
                }
            }

            /// Number of fields the caller supplied.
            #[must_use]
            pub fn provided_count(&self) -> usize {
                [$( self.$field.is_some(), )+].into_iter().filter(|&set| set).count()
            }
        }
    };
}

text_resources! {
    /// Banner body; may contain inline HTML.
    banner_message_html = "We use optional cookies to provide, analyze, and improve our services. Choose \"Accept\" to consent or \"Reject\" to decline optional cookies. You can change your choices at any time in Manage cookies.",
    accept_all_label = "Accept",
    reject_all_label = "Reject",
    more_info_label = "Manage cookies",
    preferences_dialog_close_label = "Close",
    preferences_dialog_title = "Manage cookie preferences",
    /// Dialog introduction; may contain inline HTML.
    preferences_dialog_desc_html = "Most websites use cookies to store and retrieve information from your browser. Some are essential for the site to work, others are optional and you can turn them off.",
    accept_label = "Accept",
    reject_label = "Reject",
    save_label = "Save changes",
    reset_label = "Reset all",
}

impl PartialTextResources {
    /// Merge over the English defaults.
    #[must_use]
    pub fn merge_with_defaults(self) -> TextResources {
        self.merge_over(&TextResources::default())
    }
}
