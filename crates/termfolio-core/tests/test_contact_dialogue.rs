mod common;

use common::{Harness, RecordingHost};
use termfolio_core::{ContactSubmission, DialogueStep, InMemoryFlagStore, InputRoute, LineKind};

#[test]
fn test_contact_scenario_submits_once() {
    let mut harness = Harness::new();
    harness.submit("contact");
    harness.submit("Jane");
    harness.submit("not-an-email");
    assert_eq!(harness.terminal.dialogue().step(), DialogueStep::Email);
    assert!(harness.texts().iter().any(|t| t == "invalid email: an address must contain '@'"));

    harness.submit("jane@x.com");
    harness.submit("hello");
    assert_eq!(harness.terminal.dialogue().step(), DialogueStep::Confirm);
    harness.submit("y");

    assert!(!harness.terminal.dialogue().is_active());
    assert_eq!(harness.terminal.route(), InputRoute::Normal);
    assert_eq!(
        harness.host.submissions(),
        vec![ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "hello".to_string(),
        }]
    );
    assert_eq!(harness.terminal.history().entries(), ["contact"]);
}

#[test]
fn test_confirm_answers_end_dialogue() {
    let cases = [
        ("y", 1),
        ("Y", 1),
        ("yes", 1),
        ("YES", 1),
        ("Yes", 1),
        ("n", 0),
        ("no", 0),
        ("NO", 0),
        ("maybe", 0),
    ];
    for (answer, expected_submits) in cases {
        let mut harness = Harness::new();
        for line in ["contact", "Jane", "jane@x.com", "hello", answer] {
            harness.submit(line);
        }
        assert!(!harness.terminal.dialogue().is_active(), "{:?} left dialogue open", answer);
        assert_eq!(
            harness.host.submissions().len(),
            expected_submits,
            "{:?} submitted the wrong number of times",
            answer
        );
    }
}

#[test]
fn test_dialogue_answers_are_not_commands() {
    let mut harness = Harness::new();
    harness.submit("contact");
    harness.submit("goto about");
    assert!(harness.host.calls().is_empty());
    assert_eq!(harness.terminal.dialogue().state().name, "goto about");
    assert!(!harness.has_not_found());
}

#[test]
fn test_interrupt_cancels_without_submitting() {
    for answers in [&[][..], &["Jane"][..], &["Jane", "jane@x.com", "hello"][..]] {
        let mut harness = Harness::new();
        harness.submit("contact");
        for answer in answers {
            harness.submit(answer);
        }
        assert!(harness.terminal.interrupt());
        assert!(!harness.terminal.dialogue().is_active());
        assert!(harness.host.submissions().is_empty());
    }
}

#[test]
fn test_empty_answers_reprompt() {
    let mut harness = Harness::new();
    harness.submit("contact");
    harness.submit("   ");
    assert_eq!(harness.terminal.dialogue().step(), DialogueStep::Name);
    harness.submit("Jane");
    harness.submit("jane@x.com");
    harness.submit("");
    assert_eq!(harness.terminal.dialogue().step(), DialogueStep::Message);
    assert_eq!(harness.count_kind(LineKind::Error), 2);
}

#[test]
fn test_failed_delivery_is_reported_in_transcript() {
    let mut harness = Harness::with(RecordingHost::failing(), InMemoryFlagStore::new());
    for line in ["contact", "Jane", "jane@x.com", "hello", "yes"] {
        harness.submit(line);
    }
    assert_eq!(harness.host.submissions().len(), 1);
    assert!(!harness.terminal.dialogue().is_active());
    let last = harness.terminal.transcript().last().unwrap();
    assert_eq!(last.kind, LineKind::Error);
    assert!(last.text.starts_with("Could not send your message"));
}
