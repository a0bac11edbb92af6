/// Upper-cases the first letter of every word and lower-cases the rest.
/// Any non-letter starts a new word, so "o'brien" becomes "O'Brien".
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut previous_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
        } else {
            result.push(c);
        }
        previous_is_letter = c.is_alphabetic();
    }
    result
}

/// Name shown for player `index` (zero-based). Missing or blank names fall
/// back to "Player N".
pub fn resolve_player_name(name: Option<&str>, index: usize) -> String {
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => title_case(name),
        None => format!("Player {}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("alice"), "Alice");
        assert_eq!(title_case("mARY jANE"), "Mary Jane");
        assert_eq!(title_case("o'brien-smith"), "O'Brien-Smith");
        assert_eq!(title_case("player2go"), "Player2Go");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_resolve_player_name() {
        assert_eq!(resolve_player_name(Some("  bob "), 1), "Bob");
        assert_eq!(resolve_player_name(Some("   "), 0), "Player 1");
        assert_eq!(resolve_player_name(None, 1), "Player 2");
    }
}
