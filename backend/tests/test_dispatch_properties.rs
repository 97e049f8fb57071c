//! Property tests for the dispatch policy

use clinic_queue_core::{AdmissionError, Dispatcher, DispatcherConfig, PatientClass};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Emergency(String),
    Regular(String),
    Serve,
    List,
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        name_strategy().prop_map(Op::Emergency),
        name_strategy().prop_map(Op::Regular),
        Just(Op::Serve),
        Just(Op::List),
    ]
}

fn create_dispatcher(avg_service_time: u32) -> Dispatcher {
    Dispatcher::new(DispatcherConfig::new(avg_service_time).unwrap()).unwrap()
}

proptest! {
    #[test]
    fn prop_emergency_precedence(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut dispatcher = create_dispatcher(10);
        for op in ops {
            match op {
                Op::Emergency(name) => { dispatcher.add_emergency(&name).unwrap(); }
                Op::Regular(name) => { dispatcher.add_regular(&name).unwrap(); }
                Op::List => { dispatcher.list_waiting(); }
                Op::Serve => {
                    let had_emergency = dispatcher.emergency_count() > 0;
                    let had_any = !dispatcher.is_empty();
                    match dispatcher.serve_next() {
                        Some(served) => {
                            prop_assert!(had_any);
                            prop_assert_eq!(served.class == PatientClass::Emergency, had_emergency);
                        }
                        None => prop_assert!(!had_any),
                    }
                }
            }
        }
    }

    #[test]
    fn prop_regular_fifo(regulars in prop::collection::vec(name_strategy(), 1..30),
                         emergencies in prop::collection::vec(name_strategy(), 0..10)) {
        let mut dispatcher = create_dispatcher(10);
        let mut expected_ids = Vec::new();
        for name in &regulars {
            expected_ids.push(dispatcher.add_regular(name).unwrap().patient.id().to_string());
        }
        for name in &emergencies {
            dispatcher.add_emergency(name).unwrap();
        }

        for _ in &emergencies {
            prop_assert!(dispatcher.serve_next().unwrap().is_emergency());
        }
        for id in expected_ids {
            let served = dispatcher.serve_next().unwrap();
            prop_assert_eq!(served.class, PatientClass::Regular);
            prop_assert_eq!(served.patient.id(), id.as_str());
        }
        prop_assert!(dispatcher.serve_next().is_none());
    }

    #[test]
    fn prop_emergency_arrival_order(names in prop::collection::vec(name_strategy(), 1..30)) {
        let mut dispatcher = create_dispatcher(10);
        let ids: Vec<String> = names
            .iter()
            .map(|name| dispatcher.add_emergency(name).unwrap().patient.id().to_string())
            .collect();

        for id in ids {
            let served = dispatcher.serve_next().unwrap();
            prop_assert_eq!(served.patient.id(), id.as_str());
        }
    }

    #[test]
    fn prop_listing_is_non_destructive(ops in prop::collection::vec(op_strategy(), 0..40),
                                       repeats in 1usize..5) {
        let mut control = create_dispatcher(10);
        let mut subject = create_dispatcher(10);
        for op in &ops {
            match op {
                Op::Emergency(name) => {
                    control.add_emergency(name).unwrap();
                    subject.add_emergency(name).unwrap();
                }
                Op::Regular(name) => {
                    control.add_regular(name).unwrap();
                    subject.add_regular(name).unwrap();
                }
                Op::Serve => {
                    control.serve_next();
                    subject.serve_next();
                }
                Op::List => {}
            }
        }

        let first = subject.list_waiting();
        for _ in 0..repeats {
            prop_assert_eq!(&subject.list_waiting(), &first);
        }

        // Ids differ between dispatchers, so compare by name and class
        loop {
            match (control.serve_next(), subject.serve_next()) {
                (Some(c), Some(s)) => {
                    prop_assert_eq!(c.class, s.class);
                    prop_assert_eq!(c.patient.name(), s.patient.name());
                }
                (None, None) => break,
                other => prop_assert!(false, "dispatchers diverged: {:?}", other),
            }
        }
    }

    #[test]
    fn prop_blank_names_rejected(blank in "[ \t\n]{0,6}", emergencies in 0usize..5, regulars in 0usize..5) {
        let mut dispatcher = create_dispatcher(10);
        for i in 0..emergencies {
            dispatcher.add_emergency(&format!("e{i}")).unwrap();
        }
        for i in 0..regulars {
            dispatcher.add_regular(&format!("r{i}")).unwrap();
        }
        let before = dispatcher.counts();

        prop_assert_eq!(dispatcher.add_emergency(&blank), Err(AdmissionError::EmptyName));
        prop_assert_eq!(dispatcher.add_regular(&blank), Err(AdmissionError::EmptyName));
        prop_assert_eq!(dispatcher.counts(), before);
    }

    #[test]
    fn prop_estimate_formula(avg in 1u32..120, emergencies in 0usize..20, regulars in 0usize..20) {
        let mut dispatcher = create_dispatcher(avg);
        for i in 0..emergencies {
            dispatcher.add_emergency(&format!("e{i}")).unwrap();
        }
        for i in 0..regulars {
            dispatcher.add_regular(&format!("r{i}")).unwrap();
        }

        let estimate = dispatcher.estimate_wait();
        prop_assert_eq!(estimate.minutes, (regulars as u64 + 1) * u64::from(avg));
        prop_assert_eq!(estimate.emergencies_ahead, emergencies);
    }
}
