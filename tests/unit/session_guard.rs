//! Session guard: notice + confirm on hazardous sessions, cancellation on
//! decline.

use netshift::application::services::session_guard;
use netshift::domain::Cancelled;

use crate::helpers::{CancellingPrompter, EventLog, FakeSession, ScriptedPrompter};

#[test]
fn safe_session_asks_nothing() {
    let log = EventLog::default();
    let prompter = ScriptedPrompter::new(&log);

    session_guard::run(&FakeSession(false), &prompter).unwrap();

    assert!(log.events().is_empty());
}

#[test]
fn hazardous_session_shows_notice_then_confirms() {
    let log = EventLog::default();
    let prompter = ScriptedPrompter::new(&log).with_confirm(true);

    session_guard::run(&FakeSession(true), &prompter).unwrap();

    let notice = log.index_of("prompt:notice").expect("notice shown");
    let confirm = log.index_of("prompt:confirm").expect("confirm asked");
    assert!(notice < confirm);
}

#[test]
fn declining_is_cancellation_not_error() {
    let log = EventLog::default();
    let prompter = ScriptedPrompter::new(&log).with_confirm(false);

    let err = session_guard::run(&FakeSession(true), &prompter).unwrap_err();

    assert!(err.downcast_ref::<Cancelled>().is_some());
}

#[test]
fn cancelling_the_prompt_is_cancellation() {
    let err = session_guard::run(&FakeSession(true), &CancellingPrompter).unwrap_err();
    assert!(err.downcast_ref::<Cancelled>().is_some());
}

#[test]
fn probe_failure_is_fatal_not_cancellation() {
    use anyhow::Result;
    use netshift::application::ports::SessionProbe;

    struct BrokenProbe;
    impl SessionProbe for BrokenProbe {
        fn remote_unmultiplexed(&self) -> Result<bool> {
            anyhow::bail!("gave up walking process ancestry after 50 parents")
        }
    }

    let log = EventLog::default();
    let prompter = ScriptedPrompter::new(&log);
    let err = session_guard::run(&BrokenProbe, &prompter).unwrap_err();

    assert!(err.downcast_ref::<Cancelled>().is_none());
    assert!(log.events().is_empty());
}
