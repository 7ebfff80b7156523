//! Property-based tests for ID validation and the dialogue transitions.

use proptest::prelude::*;

use super::controller::{PROGRESS_ID_CONFIRMED, transition};
use super::event::{Choice, Event};
use super::model::{IdType, Session};
use super::records::StaticRecordStore;
use super::state::Step;
use super::validate::{TRIBAL_MIN_LEN, validate_id};

// ============================================================================
// Test Helpers
// ============================================================================

fn apply(session: &Session, records: &StaticRecordStore, event: Event) -> Session {
    transition(session, records, event).unwrap().session
}

/// A session waiting for the final yes/no, reached without a duplicate.
fn at_confirmation(records: &StaticRecordStore) -> Session {
    let mut s = Session::new();
    for event in [
        Event::Opened,
        Event::ButtonClicked(Choice::New),
        Event::ButtonClicked(Choice::Ssn),
        Event::FormSubmitted("123-45-6789".to_string()),
        Event::FileUploaded {
            name: "jane.png".to_string(),
            data: vec![1, 2, 3],
        },
    ] {
        s = apply(&s, records, event);
    }
    assert_eq!(s.step, Step::AwaitingConfirmation);
    s
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_choice() -> impl Strategy<Value = Choice> {
    prop_oneof![
        Just(Choice::New),
        Just(Choice::Existing),
        Just(Choice::Ssn),
        Just(Choice::Tribal),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Opened),
        Just(Event::ResetRequested),
        arb_choice().prop_map(Event::ButtonClicked),
        prop_oneof![
            Just("123-45-6789".to_string()),
            Just("12345".to_string()),
            Just("yes".to_string()),
            Just("no".to_string()),
            "[a-zA-Z0-9 -]{0,12}",
        ]
        .prop_map(Event::FormSubmitted),
        prop_oneof![
            Just("jane.png".to_string()),
            Just("Duplicate.PNG".to_string()),
            Just("notes.txt".to_string()),
            Just(String::new()),
        ]
        .prop_map(|name| Event::FileUploaded { name, data: vec![0] }),
    ]
}

/// Answers that mean "no" and never "yes".
fn arb_no_answer() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("no".to_string()),
        Just("No".to_string()),
        Just("NO thanks".to_string()),
        Just("nope".to_string()),
        "[a-z ]{0,6}no[a-z ]{0,6}",
    ]
    .prop_filter("must not say yes", |s| !s.to_lowercase().contains("yes"))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_dashed_digit_strings_are_valid_ssns(ssn in "[0-9]{3}-[0-9]{2}-[0-9]{4}") {
        prop_assert!(validate_id(Some(IdType::Ssn), &ssn));
    }

    #[test]
    fn prop_valid_ssn_has_dashed_shape(input in any::<String>()) {
        if validate_id(Some(IdType::Ssn), &input) {
            let chars: Vec<char> = input.chars().collect();
            prop_assert_eq!(chars.len(), 11);
            for (i, c) in chars.iter().enumerate() {
                if i == 3 || i == 6 {
                    prop_assert_eq!(*c, '-');
                } else {
                    prop_assert!(c.is_numeric(), "{c:?} at {i} is not a digit");
                }
            }
        }
    }

    #[test]
    fn prop_ssn_with_a_letter_is_invalid(
        ssn in "[0-9]{3}-[0-9]{2}-[0-9]{4}",
        pos in prop_oneof![0usize..3, 4usize..6, 7usize..11],
        letter in "[a-zA-Z]",
    ) {
        let mut chars: Vec<char> = ssn.chars().collect();
        chars[pos] = letter.chars().next().unwrap();
        let broken: String = chars.into_iter().collect();
        prop_assert!(!validate_id(Some(IdType::Ssn), &broken));
    }

    #[test]
    fn prop_long_digit_strings_are_valid_tribal_ids(id in "[0-9]{5,20}") {
        prop_assert!(validate_id(Some(IdType::Tribal), &id));
    }

    #[test]
    fn prop_short_digit_strings_are_not_tribal_ids(id in "[0-9]{0,4}") {
        prop_assert!(id.chars().count() < TRIBAL_MIN_LEN);
        prop_assert!(!validate_id(Some(IdType::Tribal), &id));
    }

    #[test]
    fn prop_tribal_id_with_non_digit_is_invalid(
        id in "[0-9]{5,20}",
        pos in 0usize..20,
        other in "[a-zA-Z -]",
    ) {
        let at = pos % (id.len() + 1);
        let mut broken = id.clone();
        broken.insert_str(at, &other);
        prop_assert!(!validate_id(Some(IdType::Tribal), &broken));
    }

    #[test]
    fn prop_unset_id_type_never_validates(input in any::<String>()) {
        prop_assert!(!validate_id(None, &input));
    }

    #[test]
    fn prop_repeated_no_stays_at_confirmation(
        answers in proptest::collection::vec(arb_no_answer(), 1..10),
    ) {
        let records = StaticRecordStore::sample();
        let mut s = at_confirmation(&records);
        for answer in answers {
            let before = s.chat_history.len();
            let t = transition(&s, &records, Event::FormSubmitted(answer)).unwrap();
            prop_assert_eq!(t.session.step, Step::AwaitingConfirmation);
            prop_assert!(!t.session.confirmed);
            prop_assert_eq!(t.emitted.len(), 2);
            prop_assert_eq!(t.session.chat_history.len(), before + 2);
            s = t.session;
        }
    }

    #[test]
    fn prop_event_sequences_follow_allowed_edges(
        events in proptest::collection::vec(arb_event(), 0..30),
    ) {
        let records = StaticRecordStore::sample();
        let mut s = Session::new();
        for event in events {
            let was_reset = event == Event::ResetRequested;
            match transition(&s, &records, event) {
                Ok(t) => {
                    if was_reset {
                        prop_assert_eq!(t.session.step, Step::Start);
                        prop_assert!(t.session.chat_history.is_empty());
                    } else {
                        prop_assert!(
                            t.session.step == s.step || s.step.can_transition_to(t.session.step),
                            "{} -> {}", s.step, t.session.step
                        );
                        prop_assert_eq!(
                            t.session.chat_history.len(),
                            s.chat_history.len() + t.emitted.len()
                        );
                    }
                    prop_assert_eq!(t.session.id, s.id);
                    s = t.session;
                }
                // Reset and render passes are accepted in every step
                Err(_) => prop_assert!(!was_reset),
            }
            prop_assert!(s.progress == 0 || s.progress == PROGRESS_ID_CONFIRMED);
        }
    }
}
