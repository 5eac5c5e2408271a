// Text normalization — canonicalizes raw text into a comparable token form.
//
// Two variants exist because resumes arrive in wildly different shapes:
// the strict form keeps only letters (punctuation, digits, and symbols all
// become spaces), while the permissive form keeps word characters so that
// tokens like "c99" or "web3" survive. Both lowercase the result.

/// Strict normalization: every character that is not an ASCII letter
/// becomes a single space, and the result is lowercased.
///
/// Pure and total: empty input yields an empty string, never an error.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Permissive normalization: every character that is not a word character
/// (ASCII alphanumeric or underscore) becomes a single space, lowercased.
///
/// Keeps tokens like "c99" and "web3" intact where the strict form would
/// split them.
pub fn normalize_permissive(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_strips_punctuation_and_digits() {
        assert_eq!(normalize("Rust & C!"), "rust   c ");
        let normalized = normalize("Python, SQL & C99!");
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        assert_eq!(tokens, vec!["python", "sql", "c"]);
    }

    #[test]
    fn test_permissive_keeps_digits_and_underscores() {
        assert_eq!(normalize_permissive("C99 web3_dev"), "c99 web3_dev");
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize_permissive(""), "");
    }

    #[test]
    fn test_no_alphabetic_input_does_not_panic() {
        assert!(normalize("1234 !!! @@@").chars().all(|c| c == ' '));
    }

    #[test]
    fn test_strict_is_idempotent() {
        let inputs = ["Résumé: Python & SQL.", "", "   ", "already lowercase"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_permissive_is_idempotent() {
        let once = normalize_permissive("C99 web3_dev, Rust!");
        assert_eq!(normalize_permissive(&once), once);
    }

    #[test]
    fn test_non_ascii_letters_become_spaces() {
        // Strict form is ASCII-only: accented letters are stripped too
        assert_eq!(normalize("café"), "caf ");
    }
}
