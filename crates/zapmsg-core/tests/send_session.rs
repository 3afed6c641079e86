use std::io;
use std::sync::{Arc, Mutex};

use zapmsg_core::{
    Beeper, Campaign, ContactStatus, DEFAULT_CONTACT_NAME, FixedClock, LinkOpener, Resolution,
    SendSession, Visibility, VisibilityWatcher, ForegroundSignal, parse_contacts,
};

#[derive(Clone, Default)]
struct Calls(Arc<Mutex<Vec<String>>>);

impl Calls {
    fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

struct CountingBeeper(Calls);

impl Beeper for CountingBeeper {
    fn beep(&self) -> io::Result<()> {
        self.0.0.lock().unwrap().push("beep".into());
        Ok(())
    }
}

struct RecordingOpener(Calls);

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.0.0.lock().unwrap().push(url.to_string());
    }
}

struct AlwaysOn;

impl ForegroundSignal for AlwaysOn {
    fn enable(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn disable(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const LIST: &str = "Ana, 5511999991111\n5521988882222\nCaio, 5531977773333";

fn start(list: &str) -> (SendSession, Calls, Calls) {
    let contacts = parse_contacts(list).unwrap();
    let campaign = Campaign::new(contacts, "Olá {nome}, {saudacao}!").unwrap();
    let beeps = Calls::default();
    let opened = Calls::default();
    let session = SendSession::new(
        campaign,
        Arc::new(FixedClock::at_hour(20)),
        Box::new(CountingBeeper(beeps.clone())),
        Box::new(RecordingOpener(opened.clone())),
    );
    (session, beeps, opened)
}

#[test]
fn import_yields_pending_contacts_with_default_name() {
    let contacts = parse_contacts("Ana, 5511999991111\n5521988882222").unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name(), "Ana");
    assert_eq!(contacts[1].name(), DEFAULT_CONTACT_NAME);
    assert!(contacts.iter().all(|c| c.status() == ContactStatus::Pending));
    assert!(contacts.iter().all(|c| c.phone().len() >= 8));
}

#[test]
fn next_pending_follows_import_order() {
    let (mut session, _, _) = start(LIST);
    let ids: Vec<_> = session.contacts().iter().map(|c| c.id()).collect();

    assert_eq!(session.next_pending().map(|c| c.id()), Some(ids[0]));

    session.set_status_manually(ids[1], Resolution::Skipped).unwrap();
    assert_eq!(session.next_pending().map(|c| c.id()), Some(ids[0]));

    session.set_status_manually(ids[0], Resolution::Sent).unwrap();
    assert_eq!(session.next_pending().map(|c| c.id()), Some(ids[2]));

    session.set_status_manually(ids[2], Resolution::Sent).unwrap();
    assert!(session.next_pending().is_none());
    assert!(session.is_complete());
}

#[test]
fn return_without_send_changes_nothing() {
    let (mut session, _, _) = start(LIST);
    let before: Vec<_> = session.contacts().iter().map(|c| c.status()).collect();

    assert_eq!(session.confirm_return(), None);
    assert_eq!(session.confirm_return(), None);

    let after: Vec<_> = session.contacts().iter().map(|c| c.status()).collect();
    assert_eq!(before, after);
}

#[test]
fn send_then_return_marks_sent_once() {
    let (mut session, beeps, opened) = start(LIST);
    let ana = session.contacts()[0].id();

    let url = session.initiate_send(ana).unwrap();
    assert_eq!(
        url,
        "https://wa.me/5511999991111?text=Ol%C3%A1%20Ana%2C%20Boa%20noite!"
    );
    assert_eq!(beeps.len(), 1);
    assert_eq!(opened.len(), 1);

    assert_eq!(session.confirm_return(), Some(ana));
    assert_eq!(session.contact(ana).unwrap().status(), ContactStatus::Sent);

    // Duplicate return signals are harmless
    assert_eq!(session.confirm_return(), None);
    let stats = session.stats();
    assert_eq!(stats.sent, 1);
    assert_eq!(stats.pending, 2);
}

#[test]
fn second_send_overwrites_awaiting_contact() {
    let (mut session, _, _) = start(LIST);
    let c1 = session.contacts()[0].id();
    let c2 = session.contacts()[1].id();

    session.initiate_send(c1).unwrap();
    session.initiate_send(c2).unwrap();
    assert_eq!(session.confirm_return(), Some(c2));

    assert_eq!(session.contact(c2).unwrap().status(), ContactStatus::Sent);
    assert_eq!(session.contact(c1).unwrap().status(), ContactStatus::Pending);
    assert_eq!(session.next_pending().map(|c| c.id()), Some(c1));
}

#[test]
fn manual_status_is_idempotent_and_ignores_awaiting() {
    let (mut session, _, _) = start(LIST);
    let c1 = session.contacts()[0].id();
    let c2 = session.contacts()[1].id();

    session.initiate_send(c1).unwrap();
    session.set_status_manually(c2, Resolution::Sent).unwrap();
    session.set_status_manually(c2, Resolution::Sent).unwrap();

    assert_eq!(session.contact(c2).unwrap().status(), ContactStatus::Sent);
    assert_eq!(session.awaiting(), Some(c1));
    assert_eq!(session.stats().sent, 1);
}

#[test]
fn manual_override_wins_over_pending_confirmation() {
    let (mut session, _, _) = start(LIST);
    let c1 = session.contacts()[0].id();

    session.initiate_send(c1).unwrap();
    session.set_status_manually(c1, Resolution::Skipped).unwrap();
    session.confirm_return();

    assert_eq!(session.contact(c1).unwrap().status(), ContactStatus::Skipped);
}

#[test]
fn stats_stay_consistent_through_a_run() {
    let (mut session, _, _) = start(LIST);

    while let Some(next) = session.next_pending().map(|c| c.id()) {
        session.initiate_send(next).unwrap();
        session.confirm_return();
        let stats = session.stats();
        assert_eq!(stats.sent + stats.pending + stats.skipped, stats.total);
    }

    let stats = session.stats();
    assert_eq!(stats.sent, 3);
    assert_eq!(stats.progress, 100);
}

#[test]
fn focus_return_drives_confirmation() {
    let (mut session, _, _) = start(LIST);
    let mut signal = AlwaysOn;
    let mut watcher = VisibilityWatcher::new();
    watcher.register(&mut signal);

    let ana = session.contacts()[0].id();
    session.initiate_send(ana).unwrap();

    // Operator flips back and forth before actually sending
    for visibility in [
        Visibility::Background,
        Visibility::Foreground,
        Visibility::Background,
        Visibility::Foreground,
    ] {
        if watcher.observe(visibility) {
            session.confirm_return();
        }
    }

    assert_eq!(session.contact(ana).unwrap().status(), ContactStatus::Sent);
    assert_eq!(session.stats().sent, 1);
    assert_eq!(
        session.contacts()[1].status(),
        ContactStatus::Pending,
        "extra returns must not resolve other contacts"
    );
}
