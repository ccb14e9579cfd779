//! Name derivations for service identifiers.
//!
//! Splitting follows character-class transitions (lower, upper, digit,
//! other). A run of capitals directly followed by a lower-case run hands its
//! last capital over, so `HTTPServer` splits as `HTTP` + `Server`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_lowercase() {
            Self::Lower
        } else if c.is_uppercase() {
            Self::Upper
        } else if c.is_numeric() {
            Self::Digit
        } else {
            Self::Other
        }
    }
}

/// Split on camel-case and character-class boundaries.
///
/// Separators (`_`, `-`, spaces, ...) come back as their own segments.
pub fn split_camel_case(input: &str) -> Vec<String> {
    let mut runs: Vec<(CharClass, Vec<char>)> = Vec::new();

    for c in input.chars() {
        let class = CharClass::of(c);
        match runs.last_mut() {
            Some((last, chars)) if *last == class => chars.push(c),
            _ => runs.push((class, vec![c])),
        }
    }

    for i in 0..runs.len().saturating_sub(1) {
        if runs[i].0 == CharClass::Upper && runs[i + 1].0 == CharClass::Lower {
            if let Some(moved) = runs[i].1.pop() {
                runs[i + 1].1.insert(0, moved);
            }
        }
    }

    runs.into_iter()
        .filter(|(_, chars)| !chars.is_empty())
        .map(|(_, chars)| chars.into_iter().collect())
        .collect()
}

/// Segments that carry letters or digits; separators are dropped.
pub fn words(input: &str) -> Vec<String> {
    split_camel_case(input)
        .into_iter()
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .collect()
}

/// `userAccount` → `User Account`, `user_account` → `User Account`.
pub fn titleize(input: &str) -> String {
    words(input)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `userAccount` → `UserAccount`.
pub fn pascalize(input: &str) -> String {
    words(input).iter().map(|w| capitalize(w)).collect()
}

/// First word of the name, used as an HTTP resource fragment.
///
/// Falls back to the whole input when it has no alphanumeric segment.
pub fn resource_segment(input: &str) -> String {
    words(input)
        .into_iter()
        .next()
        .unwrap_or_else(|| input.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lower_camel_case() {
        assert_eq!(split_camel_case("userAccount"), vec!["user", "Account"]);
    }

    #[test]
    fn splits_acronym_before_word() {
        assert_eq!(split_camel_case("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(split_camel_case("GL11Version"), vec!["GL", "11", "Version"]);
    }

    #[test]
    fn keeps_separators_as_segments() {
        assert_eq!(split_camel_case("user_account"), vec!["user", "_", "account"]);
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(split_camel_case("").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn titleize_convention() {
        assert_eq!(titleize("userAccount"), "User Account");
        assert_eq!(titleize("user_account"), "User Account");
        assert_eq!(titleize("user-account"), "User Account");
        assert_eq!(titleize("users"), "Users");
        assert_eq!(titleize("HTTPServer"), "HTTP Server");
    }

    #[test]
    fn pascalize_joins_words() {
        assert_eq!(pascalize("userAccount"), "UserAccount");
        assert_eq!(pascalize("order_items"), "OrderItems");
    }

    #[test]
    fn resource_segment_is_first_word() {
        assert_eq!(resource_segment("userAccount"), "user");
        assert_eq!(resource_segment("users"), "users");
        assert_eq!(resource_segment("_private"), "private");
        assert_eq!(resource_segment("__"), "__");
    }
}
