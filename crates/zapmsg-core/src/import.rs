use crate::contact::{Contact, DEFAULT_CONTACT_NAME, MIN_PHONE_DIGITS};
use crate::error::{CoreError, Result};

/// Sample list offered to operators trying the tool for the first time.
pub const EXAMPLE_CONTACTS: &str = "Maria Silva, 5511999991111
João Santos, 5511988882222
5521977773333
Ana, 5531966664444";

/// Parses one contact per non-blank line, either `Name, Phone` or a bare phone.
///
/// Lines whose phone has fewer than [`MIN_PHONE_DIGITS`] digits are dropped.
/// Fails when the input is blank or no line survives.
pub fn parse_contacts(input: &str) -> Result<Vec<Contact>> {
    if input.trim().is_empty() {
        return Err(CoreError::EmptyImport);
    }

    let contacts: Vec<Contact> = input.lines().filter_map(parse_contact_line).collect();

    if contacts.is_empty() {
        return Err(CoreError::NoValidContacts);
    }

    tracing::debug!(count = contacts.len(), "Parsed contact list");
    Ok(contacts)
}

pub fn parse_contact_line(line: &str) -> Option<Contact> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (name, phone) = match line.split_once(',') {
        Some((name, rest)) => {
            // Anything after a second comma is ignored
            let phone = rest.split(',').next().unwrap_or_default();
            (name.trim(), phone.trim())
        }
        None => (DEFAULT_CONTACT_NAME, line),
    };

    let phone = digits_only(phone);
    if phone.len() < MIN_PHONE_DIGITS {
        tracing::debug!(line, "Discarding line without a valid phone");
        return None;
    }

    Some(Contact::new(name, phone))
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
