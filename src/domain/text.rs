//! Display formatting for location names and weather descriptions.

/// Uppercases the first character and lowercases the rest.
///
/// ```ignore
/// assert_eq!(capitalize("clear sky"), "Clear sky");
/// assert_eq!(capitalize("LIGHT RAIN"), "Light rain");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title-cases free text for display.
///
/// A word is a run of alphabetic characters: its first letter is uppercased
/// and the remaining letters lowercased. Any non-alphabetic character
/// (space, hyphen, apostrophe, digit) starts a new word.
///
/// ```ignore
/// assert_eq!(title_case("new york"), "New York");
/// assert_eq!(title_case("SAN-SEBASTIÁN"), "San-Sebastián");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}
