use serde::Serialize;
use std::fmt;

use crate::normalize::replace_terms;

const STOPWORDS: [&str; 3] = ["of", "the", "and"];

/// Which construction rule produced a variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationKind {
    /// The normalized term as written
    FullTerm,
    /// All initials run together ("HCG")
    Initials,
    /// First word followed by the remaining initials ("Horizontal CG")
    LeadWordInitials,
    /// First initial followed by the second and third words ("H Center Gravity")
    LeadInitialWords,
    /// Leading words abbreviated up to a split point ("H C Gravity")
    PartialInitials,
    /// All initials separated by spaces ("H C G")
    SpacedInitials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variation {
    pub kind: VariationKind,
    pub text: String,
}

impl Variation {
    fn new(kind: VariationKind, text: String) -> Self {
        Self { kind, text }
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}

pub fn filter_stopwords(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|word| !is_stopword(word))
        .collect()
}

/// Upper-cased first character of a word; empty for an empty word.
fn leading_letter(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Concatenated upper-cased first characters of `words`.
pub fn initials(words: &[&str]) -> String {
    words.iter().map(|word| leading_letter(word)).collect()
}

/// Build every abbreviation variant of `term`, in display order.
///
/// The term is normalized first. Variants are not deduplicated: several
/// rules can produce the same text for short inputs.
pub fn generate_variations(term: &str) -> Vec<Variation> {
    let full_term = replace_terms(term);
    let words = filter_stopwords(&full_term);
    let letters: Vec<String> = words.iter().map(|word| leading_letter(word)).collect();
    let initials = letters.concat();

    let mut variations = vec![
        Variation::new(VariationKind::FullTerm, full_term.clone()),
        Variation::new(VariationKind::Initials, initials.clone()),
    ];

    if words.len() > 1 {
        let mut chars = initials.chars();
        let head: String = chars.next().map(String::from).unwrap_or_default();
        let rest: String = chars.collect();

        variations.push(Variation::new(
            VariationKind::LeadWordInitials,
            format!("{} {}", words[0], rest),
        ));

        if words.len() > 2 {
            variations.push(Variation::new(
                VariationKind::LeadInitialWords,
                format!("{} {} {}", head, words[1], words[2]),
            ));
        }

        for split in 1..words.len() {
            variations.push(Variation::new(
                VariationKind::PartialInitials,
                format!("{} {}", letters[..split].join(" "), words[split..].join(" ")),
            ));
        }

        variations.push(Variation::new(
            VariationKind::SpacedInitials,
            letters.join(" "),
        ));
    }

    tracing::debug!(
        term,
        words = words.len(),
        count = variations.len(),
        "generated variations"
    );

    variations
}

/// Texts of [`generate_variations`], for callers that only display them.
pub fn generate_abbreviations(term: &str) -> Vec<String> {
    generate_variations(term)
        .into_iter()
        .map(|variation| variation.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_center_of_gravity() {
        assert_eq!(
            generate_abbreviations("Horizontal Center of Gravity"),
            vec![
                "Horizontal Center of Gravity",
                "HCG",
                "Horizontal CG",
                "H Center Gravity",
                "H Center Gravity",
                "H C Gravity",
                "H C G",
            ]
        );
    }

    #[test]
    fn kinds_follow_construction_order() {
        let kinds: Vec<VariationKind> = generate_variations("Horizontal Center of Gravity")
            .into_iter()
            .map(|v| v.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                VariationKind::FullTerm,
                VariationKind::Initials,
                VariationKind::LeadWordInitials,
                VariationKind::LeadInitialWords,
                VariationKind::PartialInitials,
                VariationKind::PartialInitials,
                VariationKind::SpacedInitials,
            ]
        );
    }

    #[test]
    fn normalizes_before_splitting() {
        assert_eq!(
            generate_abbreviations("HORIZONTAL CG-LB"),
            vec![
                "Horizontal Center of Gravity POUNDS",
                "HCGP",
                "Horizontal CGP",
                "H Center Gravity",
                "H Center Gravity POUNDS",
                "H C Gravity POUNDS",
                "H C G POUNDS",
                "H C G P",
            ]
        );
    }

    #[test]
    fn suffix_expansion_shows_in_full_term() {
        let variations = generate_abbreviations("MASS-KG");
        assert_eq!(variations[0], "MASS KILOGRAMS");
        assert_eq!(variations[1], "MK");
    }

    #[test]
    fn single_word_yields_term_and_initial() {
        assert_eq!(generate_abbreviations("pressure"), vec!["pressure", "P"]);
        assert_eq!(generate_abbreviations("the Weight"), vec!["the Weight", "W"]);
    }

    #[test]
    fn two_words_skip_lead_initial_rule() {
        assert_eq!(
            generate_abbreviations("Flow Rate"),
            vec!["Flow Rate", "FR", "Flow R", "F Rate", "F R"]
        );
    }

    #[test]
    fn only_stopwords_gives_empty_initials() {
        let variations = generate_abbreviations("Of THE and");
        assert_eq!(variations, vec!["Of THE and", ""]);
    }

    #[test]
    fn empty_term_gives_two_empty_variants() {
        assert_eq!(generate_abbreviations(""), vec!["", ""]);
    }

    #[test]
    fn stopwords_are_case_insensitive() {
        assert_eq!(
            filter_stopwords("Speed OF the Sound AND Light"),
            vec!["Speed", "Sound", "Light"]
        );
        assert!(is_stopword("And"));
        assert!(!is_stopword("often"));
    }

    #[test]
    fn initials_upper_case_first_characters() {
        assert_eq!(initials(&["center", "ÉTAT", "gravity"]), "CÉG");
        assert_eq!(initials(&[]), "");
    }

    #[test]
    fn lowercase_words_keep_their_case_after_split() {
        let variations = generate_abbreviations("inlet valve position");
        assert!(variations.contains(&"I V position".to_string()));
        assert!(variations.contains(&"inlet VP".to_string()));
    }

    #[test]
    fn output_is_deterministic() {
        let first = generate_variations("TANK FILL-QTY");
        for _ in 0..5 {
            assert_eq!(generate_variations("TANK FILL-QTY"), first);
        }
    }
}
