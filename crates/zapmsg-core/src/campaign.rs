use crate::contact::Contact;
use crate::error::{CoreError, Result};

/// Contact list plus template handed from the compose phase to the send phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Campaign {
    pub contacts: Vec<Contact>,
    pub template: String,
}

impl Campaign {
    pub fn new(contacts: Vec<Contact>, template: impl Into<String>) -> Result<Self> {
        let template = template.into();

        if contacts.is_empty() {
            return Err(CoreError::NoValidContacts);
        }
        if template.trim().is_empty() {
            return Err(CoreError::EmptyTemplate);
        }

        Ok(Self { contacts, template })
    }
}
