//! Redaction helpers for secret values
//!
//! API keys must never appear in log output or rendered errors. `redact`
//! keeps just enough of the value to recognize which key was supplied.

/// Redact a secret, keeping at most the first four characters
pub fn redact(secret: &str) -> String {
    if secret.is_empty() {
        return String::from("<empty>");
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{visible}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_keeps_prefix() {
        assert_eq!(redact("sk-abcdef123456"), "sk-a***");
    }

    #[test]
    fn test_redact_short_value() {
        assert_eq!(redact("ab"), "ab***");
    }

    #[test]
    fn test_redact_empty() {
        assert_eq!(redact(""), "<empty>");
    }
}
