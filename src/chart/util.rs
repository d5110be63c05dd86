//! Number formatting for tooltip text.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en, // default
    }
}

/// `Total: 12,345` for the values under the cursor. Saturates instead of overflowing.
pub fn tooltip_footer(hovered: &[u64], locale_tag: &str) -> String {
    let sum = hovered.iter().fold(0u64, |acc, v| acc.saturating_add(*v));
    format!("Total: {}", sum.to_formatted_string(map_locale(locale_tag)))
}
