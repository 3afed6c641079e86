use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name given to contacts imported without one.
pub const DEFAULT_CONTACT_NAME: &str = "Amigo(a)";

/// Shortest digit string accepted as a phone number.
pub const MIN_PHONE_DIGITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Pending,
    Sent,
    Skipped,
}

impl ContactStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, ContactStatus::Pending)
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactStatus::Pending => "Aguardando...",
            ContactStatus::Sent => "Enviado",
            ContactStatus::Skipped => "Pulado",
        }
    }
}

/// Terminal state an operator can put a contact in by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Sent,
    Skipped,
}

impl From<Resolution> for ContactStatus {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Sent => ContactStatus::Sent,
            Resolution::Skipped => ContactStatus::Skipped,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    phone: String,
    status: ContactStatus,
}

impl Contact {
    /// Creates a pending contact. `phone` is expected to be digits only.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            DEFAULT_CONTACT_NAME.to_string()
        } else {
            name
        };

        Self {
            id: ContactId::new(),
            name,
            phone: phone.into(),
            status: ContactStatus::Pending,
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub(crate) fn set_status(&mut self, status: ContactStatus) {
        self.status = status;
    }
}

/// Format a phone number string for better readability
/// Example: "5511999999999" -> "+55 11 99999-9999"
pub fn format_phone_for_display(phone: &str) -> String {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return phone.to_string();
    }

    // Brazilian numbers: +55 AA 99999-9999 (mobile) or +55 AA 9999-9999 (landline)
    if phone.starts_with("55") && phone.len() >= 12 {
        let country = &phone[0..2];
        let area = &phone[2..4];
        let rest = &phone[4..];

        if rest.len() == 9 {
            return format!("+{} {} {}-{}", country, area, &rest[0..5], &rest[5..]);
        } else if rest.len() == 8 {
            return format!("+{} {} {}-{}", country, area, &rest[0..4], &rest[4..]);
        }
    }

    if phone.len() > 10 {
        return format!("+{}", phone);
    }

    phone.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_falls_back_to_default() {
        let contact = Contact::new("   ", "5511999991111");
        assert_eq!(contact.name(), DEFAULT_CONTACT_NAME);
        assert_eq!(contact.status(), ContactStatus::Pending);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Contact::new("Ana", "5511999991111");
        let b = Contact::new("Ana", "5511999991111");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_format_brazilian_mobile() {
        assert_eq!(format_phone_for_display("5511999999999"), "+55 11 99999-9999");
    }

    #[test]
    fn test_format_brazilian_landline() {
        assert_eq!(format_phone_for_display("551133334444"), "+55 11 3333-4444");
    }

    #[test]
    fn test_format_foreign_number() {
        assert_eq!(format_phone_for_display("14155550123"), "+14155550123");
        assert_eq!(format_phone_for_display("99998888"), "99998888");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ContactStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
    }
}
