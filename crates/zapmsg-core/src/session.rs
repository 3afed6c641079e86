use std::sync::Arc;

use crate::campaign::Campaign;
use crate::clock::Clock;
use crate::contact::{Contact, ContactId, ContactStatus, Resolution};
use crate::cue::{Beeper, LinkOpener};
use crate::error::{CoreError, Result};
use crate::link::{LinkMode, build_link};
use crate::render::{encode_for_url, render};
use crate::stats::SessionStats;

/// Drives one campaign through its send phase.
///
/// Opening a link never changes a contact's status. A send is finalized
/// either by [`SendSession::confirm_return`] or by a manual decision. At most
/// one contact is awaiting confirmation; initiating another send replaces it.
pub struct SendSession {
    contacts: Vec<Contact>,
    template: String,
    mode: LinkMode,
    awaiting: Option<ContactId>,
    clock: Arc<dyn Clock>,
    beeper: Box<dyn Beeper>,
    opener: Box<dyn LinkOpener>,
}

impl SendSession {
    pub fn new(
        campaign: Campaign,
        clock: Arc<dyn Clock>,
        beeper: Box<dyn Beeper>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        Self {
            contacts: campaign.contacts,
            template: campaign.template,
            mode: LinkMode::default(),
            awaiting: None,
            clock,
            beeper,
            opener,
        }
    }

    pub fn with_mode(mut self, mode: LinkMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn mode(&self) -> LinkMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: LinkMode) {
        self.mode = mode;
    }

    pub fn awaiting(&self) -> Option<ContactId> {
        self.awaiting
    }

    /// First pending contact in import order.
    pub fn next_pending(&self) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.is_pending())
    }

    pub fn is_complete(&self) -> bool {
        self.next_pending().is_none()
    }

    /// Rendered, encoded link for `contact` in the current mode.
    pub fn link_for(&self, contact: &Contact) -> String {
        let text = render(&self.template, contact, self.clock.now());
        build_link(contact.phone(), &encode_for_url(&text), self.mode)
    }

    /// Opens the send link for a pending contact and marks it as awaiting
    /// confirmation. Returns the opened URL.
    pub fn initiate_send(&mut self, id: ContactId) -> Result<String> {
        let contact = self.contact(id).ok_or(CoreError::ContactNotFound(id))?;
        if !contact.is_pending() {
            return Err(CoreError::NotPending(id));
        }

        if let Err(e) = self.beeper.beep() {
            tracing::debug!(error = %e, "Audible cue failed");
        }

        let url = self.link_for(contact);

        if let Some(previous) = self.awaiting.replace(id) {
            if previous != id {
                tracing::warn!(
                    previous = %previous,
                    contact_id = %id,
                    "New send initiated before the previous one was confirmed; previous stays pending"
                );
            }
        }

        tracing::info!(contact_id = %id, mode = ?self.mode, "Opening send link");
        self.opener.open(&url);

        Ok(url)
    }

    /// The operator came back from the external app. Marks the awaiting
    /// contact as sent; does nothing when no send is awaiting.
    pub fn confirm_return(&mut self) -> Option<ContactId> {
        let id = self.awaiting.take()?;

        match self.contacts.iter_mut().find(|c| c.id() == id) {
            Some(contact) if contact.is_pending() => {
                contact.set_status(ContactStatus::Sent);
                tracing::info!(contact_id = %id, "Send confirmed on return");
                Some(id)
            }
            _ => None,
        }
    }

    /// Resolves a contact by hand. Always allowed, whatever is awaiting.
    ///
    /// Sent and skipped are final: resolving an already resolved contact
    /// leaves its status as is.
    pub fn set_status_manually(&mut self, id: ContactId, resolution: Resolution) -> Result<()> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(CoreError::ContactNotFound(id))?;

        if self.awaiting == Some(id) {
            self.awaiting = None;
        }

        if !contact.is_pending() {
            tracing::debug!(
                contact_id = %id,
                status = ?contact.status(),
                "Contact already resolved, manual status ignored"
            );
            return Ok(());
        }

        contact.set_status(resolution.into());
        tracing::info!(contact_id = %id, status = ?resolution, "Status set manually");
        Ok(())
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from_contacts(&self.contacts)
    }

    /// Discards contacts, template and any awaiting send.
    pub fn reset(&mut self) {
        tracing::info!(total = self.contacts.len(), "Campaign reset");
        self.contacts.clear();
        self.template.clear();
        self.awaiting = None;
    }

    /// Leaves the send phase keeping contact statuses. Any awaiting send is dropped.
    pub fn into_campaign(self) -> Campaign {
        Campaign {
            contacts: self.contacts,
            template: self.template,
        }
    }
}
