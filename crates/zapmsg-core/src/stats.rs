use serde::Serialize;

use crate::contact::{Contact, ContactStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total: usize,
    pub sent: usize,
    pub pending: usize,
    pub skipped: usize,
    /// Percentage of contacts marked sent, rounded half up. Zero for an empty list.
    pub progress: u8,
}

impl SessionStats {
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut stats = SessionStats {
            total: contacts.len(),
            ..Default::default()
        };

        for contact in contacts {
            match contact.status() {
                ContactStatus::Pending => stats.pending += 1,
                ContactStatus::Sent => stats.sent += 1,
                ContactStatus::Skipped => stats.skipped += 1,
            }
        }

        stats.progress = progress_percent(stats.sent, stats.total);
        stats
    }
}

fn progress_percent(sent: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // round(sent / total * 100) in integer arithmetic
    ((sent * 200 + total) / (total * 2)) as u8
}
