/// Suffix and phrase expansions, applied in this order.
///
/// Matching is plain substring replacement, so an earlier entry can change
/// what a later one sees. Keep the order.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("-KG", " KILOGRAMS"),
    ("-LB", " POUNDS"),
    ("HORIZONTAL CG", "Horizontal Center of Gravity"),
    ("-MM", " MILLIMETERS"),
    ("-IN", " INCHES"),
    ("-PSI", " pounds per square inch"),
    ("-GPM", " Gallons Per Minute"),
    ("-LPM", " Liters Per Minute"),
    ("-QTY", " QUANTITY"),
];

pub fn replace_terms(term: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(term.to_string(), |text, (key, expansion)| text.replace(key, expansion))
}
