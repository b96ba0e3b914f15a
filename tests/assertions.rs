//! End-to-end tests driving the assertion chains through a [`Recorder`]
//! and checking the exact diagnostic strings they produce.

use std::collections::HashMap;
use std::time::Duration;

use testkit_assert::{assert_fn, assert_that, Recorder, Subject};

#[test]
fn compact_diagnostics_carry_the_call_site_prefix() {
    let report = Recorder::new();
    let line = line!() + 1;
    assert_that(&report, "value").is_nil();

    assert_eq!(
        report.last_failure().unwrap(),
        format!(
            "[{}:{line}] value provided is not a pointer but is string",
            file!()
        )
    );
}

#[test]
fn expanded_diagnostics_put_the_dump_below_the_prefix() {
    let report = Recorder::new();
    let line = line!() + 1;
    assert_that(&report, vec!["got"]).equals("wanted");

    assert_eq!(
        report.last_failure().unwrap(),
        format!(
            "[{}:{line}]\n[got]\n\n\tdoes not equal\n\nwanted",
            file!()
        )
    );
}

#[test]
fn caller_messages_render_between_prefix_and_body() {
    let report = Recorder::new();
    let line = line!() + 1;
    assert_that(&report, false).msg("while connecting").is_true();

    assert_eq!(
        report.last_failure().unwrap(),
        format!(
            "[{}:{line}]\nwhile connecting\nvalue is false; expected true",
            file!()
        )
    );
}

#[test]
fn failures_accumulate_without_stopping_the_test() {
    let report = Recorder::new();

    let first = assert_that(&report, 1).equals(2);
    let second = assert_that(&report, "a").contains("b");
    let third = assert_that(&report, 3).equals(3);

    assert!(!first);
    assert!(!second);
    assert!(third);
    assert_eq!(report.failure_count(), 2);
}

#[test]
fn has_key_with_matching_key_type_misses_normally() {
    let report = Recorder::new();
    let mut map = HashMap::new();
    map.insert("gotKey", "got");

    assert!(!assert_that(&report, map).has_key("wantedKey"));

    let failure = report.last_failure().unwrap();
    assert!(!failure.contains("hasKey error"));
    assert!(failure.ends_with("map[gotKey:got]\n\n\tdoes not have key\n\nwantedKey\n"));
}

#[test]
fn has_key_with_mismatched_key_type_takes_the_error_path() {
    let report = Recorder::new();
    let mut map = HashMap::new();
    map.insert("gotKey", "got");

    assert!(!assert_that(&report, map).has_key(3));
    assert!(report
        .last_failure()
        .unwrap()
        .ends_with("hasKey error: map is keyed by type string; key provided is type int"));
}

#[test]
fn readers_are_drained_once_and_matched_as_text() {
    let report = Recorder::new();
    let response_body = Subject::reader(&b"{\"status\":\"ok\"}"[..]);

    assert!(assert_that(&report, response_body).contains("\"status\""));
    assert!(!report.has_failures());
}

#[test]
fn deep_structures_compare_structurally() {
    let report = Recorder::new();
    let mut left = HashMap::new();
    left.insert("k", vec![1, 2]);
    let mut right = HashMap::new();
    right.insert("k", vec![1, 2]);

    assert!(assert_that(&report, left).equals(right));
    assert!(!report.has_failures());
}

#[test]
fn panic_checks_keep_the_test_alive() {
    let report = Recorder::new();

    assert!(assert_fn(&report, || panic!("kaboom")).panics());
    assert!(!assert_fn(&report, || panic!("kaboom")).not().panics());
    assert!(report
        .last_failure()
        .unwrap()
        .ends_with("code paniced with err: kaboom"));
}

#[test]
fn promise_timeout_covers_both_user_intents() {
    let report = Recorder::new();

    // "Must finish within the duration."
    assert!(assert_fn(&report, || ())
        .promise()
        .timeout(Duration::from_millis(500)));

    // "Must take at least the duration."
    assert!(assert_fn(&report, || std::thread::sleep(Duration::from_millis(100)))
        .promise()
        .not()
        .timeout(Duration::from_millis(10)));

    assert!(!report.has_failures());
}

#[test]
fn promise_wait_blocks_until_completion() {
    let report = Recorder::new();
    let done = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let flag = std::sync::Arc::clone(&done);

    let promise = assert_fn(&report, move || {
        std::thread::sleep(Duration::from_millis(20));
        flag.store(true, std::sync::atomic::Ordering::SeqCst);
    })
    .promise();

    assert!(promise.wait());
    assert!(done.load(std::sync::atomic::Ordering::SeqCst));
}

#[test]
fn chains_work_through_the_prelude() {
    use testkit_assert::prelude::*;

    let report = Recorder::new();
    assert_that(&report, Option::<String>::None).is_nil();
    assert_fn(&report, || panic!("boom")).panics();
    assert!(!report.has_failures());
}
