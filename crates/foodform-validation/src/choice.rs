//! Choice validation functions

/// Check if a value is exactly one of the allowed options (case-sensitive)
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.iter().any(|&option| option == value)
}

/// Validates that a value is one of `allowed`, reporting it under `label`
///
/// The message lists the options quoted: `'a' or 'b'`, `'a', 'b' or 'c'`.
pub fn validate_one_of(value: &str, allowed: &[&str], label: &str) -> Result<(), String> {
    if is_one_of(value, allowed) {
        return Ok(());
    }

    let quoted: Vec<String> = allowed.iter().map(|option| format!("'{}'", option)).collect();
    let options = match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((only, _)) => only.clone(),
        None => String::new(),
    };

    Err(format!("{} must be {}.", label, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STATUSES: &[&str] = &["Open Now", "Closed"];

    #[test]
    fn test_is_one_of() {
        assert!(is_one_of("Open Now", STATUSES));
        assert!(is_one_of("Closed", STATUSES));
        assert!(!is_one_of("open now", STATUSES));
        assert!(!is_one_of("Closed ", STATUSES));
        assert!(!is_one_of("", STATUSES));
    }

    #[test]
    fn test_validate_one_of_message() {
        assert_eq!(
            validate_one_of("open", STATUSES, "Restaurant Status"),
            Err("Restaurant Status must be 'Open Now' or 'Closed'.".to_string())
        );
        assert_eq!(
            validate_one_of("x", &["a", "b", "c"], "Letter"),
            Err("Letter must be 'a', 'b' or 'c'.".to_string())
        );
        assert_eq!(
            validate_one_of("x", &["a"], "Letter"),
            Err("Letter must be 'a'.".to_string())
        );
    }
}
