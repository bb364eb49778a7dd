//! Inline form validation for the register/login flows.
//!
//! Each check returns the list of violations; an empty list means the field
//! passes. Violations are shown inline and block submission — the backend
//! applies its own rules independently.

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Password policy: length, upper, lower, digit, special character.
pub fn validate_password(password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number".to_string());
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        errors.push(format!(
            "Password must contain at least one special character ({SPECIAL_CHARACTERS})"
        ));
    }

    errors
}

/// Password strength score, 0-100.
pub fn password_strength(password: &str) -> u8 {
    let mut strength = 0u32;
    let length = password.chars().count();

    if length >= 8 {
        strength += 20;
    }
    if length >= 12 {
        strength += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 20;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        strength += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 15;
    }
    if password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        strength += 20;
    }

    strength.min(100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthLabel {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn strength_label(strength: u8) -> StrengthLabel {
    if strength < 30 {
        StrengthLabel { label: "Weak", color: "#e74c3c" }
    } else if strength < 60 {
        StrengthLabel { label: "Fair", color: "#f39c12" }
    } else if strength < 80 {
        StrengthLabel { label: "Good", color: "#3498db" }
    } else {
        StrengthLabel { label: "Strong", color: "#00b894" }
    }
}

/// Username rules: 3-20 characters from `[A-Za-z0-9_]`.
pub fn validate_username(username: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let length = username.chars().count();

    if length < 3 {
        errors.push("Username must be at least 3 characters long".to_string());
    }
    if length > 20 {
        errors.push("Username must be no more than 20 characters long".to_string());
    }
    if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        errors.push("Username can only contain letters, numbers, and underscores".to_string());
    }

    errors
}

/// Family ID rules: at least 5 characters from `[A-Za-z0-9_-]`.
pub fn validate_family_id(family_id: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if family_id.chars().count() < 5 {
        errors.push("Family ID must be at least 5 characters long".to_string());
    }
    if family_id.is_empty()
        || !family_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        errors.push(
            "Family ID can only contain letters, numbers, underscores, and hyphens".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_passes() {
        assert!(validate_password("Tr0ub4dor&3x").is_empty());
    }

    #[test]
    fn test_weak_password_collects_every_violation() {
        let errors = validate_password("abc");
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("at least 8 characters"));
    }

    #[test]
    fn test_strength_scoring_bands() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("password"), 35);
        assert_eq!(password_strength("Tr0ub4dor&3x"), 100);

        assert_eq!(strength_label(password_strength("abc")).label, "Weak");
        assert_eq!(strength_label(password_strength("password")).label, "Fair");
        assert_eq!(strength_label(password_strength("Passw0rd")).label, "Good");
        assert_eq!(
            strength_label(password_strength("Tr0ub4dor&3x")).label,
            "Strong"
        );
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("alice_01").is_empty());
        assert!(!validate_username("al").is_empty());
        assert!(!validate_username("a".repeat(21).as_str()).is_empty());
        assert!(!validate_username("alice!").is_empty());
    }

    #[test]
    fn test_family_id_rules() {
        assert!(validate_family_id("family_ab12").is_empty());
        assert!(validate_family_id("my-family").is_empty());
        assert!(!validate_family_id("fam").is_empty());
        assert!(!validate_family_id("family id").is_empty());
    }
}
