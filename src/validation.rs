use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Input kind of a contact-form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Text,
}

/// Values read from a form field at blur time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub field: usize,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

/// Returns `true` when the field's current value is acceptable.
pub fn validate_field(snapshot: &FieldSnapshot) -> bool {
    let value = snapshot.value.trim();

    if snapshot.kind == FieldKind::Email && !value.is_empty() && !EMAIL_RE.is_match(value) {
        return false;
    }

    !(snapshot.required && value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind, required: bool, value: &str) -> FieldSnapshot {
        FieldSnapshot {
            field: 0,
            kind,
            required,
            value: value.to_string(),
        }
    }

    #[test]
    fn accepts_plain_email() {
        assert!(validate_field(&field(FieldKind::Email, true, "me@lab.org")));
        assert!(validate_field(&field(FieldKind::Email, true, "  me@lab.org ")));
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(!validate_field(&field(FieldKind::Email, false, "me@lab")));
        assert!(!validate_field(&field(FieldKind::Email, false, "me @lab.org")));
        assert!(!validate_field(&field(FieldKind::Email, false, "@lab.org")));
    }

    #[test]
    fn optional_empty_email_is_fine() {
        assert!(validate_field(&field(FieldKind::Email, false, "   ")));
    }

    #[test]
    fn required_blank_fails() {
        assert!(!validate_field(&field(FieldKind::Text, true, " \n")));
        assert!(validate_field(&field(FieldKind::Text, true, "hello")));
        assert!(validate_field(&field(FieldKind::Text, false, "")));
    }
}
