#![cfg(feature = "json")]

use std::collections::{BTreeMap, HashMap};

use opt::{Candidate, Opt};
use serde_json::json;

#[test]
fn entries_of_json_objects() {
    let doc = json!({"a": 1, "b": null});
    let one = json!(1);
    assert_eq!(Opt::from_entry(&doc, "a"), Opt::Some(&one));
    assert_eq!(Opt::from_entry(&doc, "b"), Opt::None);
    assert_eq!(Opt::from_entry(&json!({"a": 1}), "z"), Opt::None);
}

#[test]
fn entries_of_non_indexable_values() {
    assert!(Opt::from_entry(&json!(42), "a").is_empty());
    assert!(Opt::from_entry(&json!("text"), &0usize).is_empty());
    assert_eq!(Opt::from_entry(&json!([10, null]), &0usize).map(|v| v.as_i64()), Opt::Some(Some(10)));
    assert!(Opt::from_entry(&json!([10, null]), &1usize).is_empty());
}

#[test]
fn entries_of_typed_containers() {
    let settings: BTreeMap<String, Option<u16>> =
        [("port".to_string(), Some(8080)), ("timeout".to_string(), None)].into_iter().collect();

    assert_eq!(Opt::from_nullable_entry(&settings, "port").copied(), Opt::Some(8080));
    assert!(Opt::from_nullable_entry(&settings, "timeout").is_empty());
    assert!(Opt::from_nullable_entry(&settings, "retries").is_empty());
    // The plain lookup reports the stored `None` as an entry.
    assert!(Opt::from_entry(&settings, "timeout").is_defined());

    let list = vec!["zero", "one"];
    assert_eq!(Opt::from_entry(&list, &1), Opt::Some(&"one"));
    assert_eq!(Opt::from_entry(&list[..], &5), Opt::None);

    let scores = HashMap::from([("ada", 10)]);
    assert_eq!(Opt::from_entry(&scores, "ada").copied().get_or_else(0), 10);
    assert_eq!(Opt::from_entry(&scores, "bob").copied().get_or_else(0), 0);
}

#[test]
fn non_empty_values() {
    assert!(Opt::non_empty(Vec::<u8>::new()).is_empty());
    assert!(Opt::non_empty(json!([])).is_empty());
    assert!(Opt::non_empty(json!({})).is_empty());
    assert!(Opt::non_empty(String::new()).is_empty());
    assert!(Opt::non_empty(vec!["foo"]).is_defined());
    assert!(Opt::non_empty("value").is_defined());
    // Values without a length are never zero-length.
    assert!(Opt::non_empty(json!(0)).is_defined());
    assert!(Opt::non_empty(json!(-1)).is_defined());
    assert!(Opt::non_empty(json!(null)).is_defined());
    assert!(Opt::non_empty(json!(["foo"])).is_defined());
}

#[test]
fn ensure_mixed_values() {
    let opt = Opt::ensure(Candidate::value(1));
    assert!(opt.is_defined());
    assert_eq!(opt.get(), Ok(1));
    assert!(Opt::<i32>::ensure(None).is_empty());
    assert!(Opt::ensure_unless(Candidate::value(1), 1).is_empty());
}

#[test]
fn ensure_deferred_values() {
    let opt = Opt::ensure(Candidate::deferred(|| Some(1)));
    assert!(opt.is_defined());
    assert_eq!(opt.get(), Ok(1));
    assert!(Opt::<i32>::ensure(Candidate::deferred(|| None::<i32>)).is_empty());
    assert!(Opt::ensure_unless(Candidate::deferred(|| Some(1)), 1).is_empty());
}

#[test]
fn ensure_deferred_options() {
    let opt = Opt::ensure(Candidate::deferred(|| Opt::Some(1)));
    assert_eq!(opt.get(), Ok(1));
    assert!(Opt::<i32>::ensure(Candidate::deferred(|| Opt::<i32>::None)).is_empty());

    // A computation handing back another computation is ensured recursively.
    let nested: Opt<i32> = Opt::ensure(Candidate::deferred(|| Candidate::deferred(|| Some(2))));
    assert_eq!(nested.get(), Ok(2));
}

#[test]
fn ensure_keeps_options_as_given() {
    let lazy = Opt::from_return(|| Some("x"));
    let ensured = Opt::ensure(lazy);
    assert!(matches!(&ensured, Opt::Lazy(inner) if !inner.is_resolved()));
    assert_eq!(ensured.get(), Ok("x"));
}

#[test]
fn create_from_nullable() {
    let none: Opt<&str> = Opt::create(None);
    assert!(none.is_empty());
    assert_eq!(none.get_or_else("foo"), "foo");
    assert_eq!(Opt::create("foo").get(), Ok("foo"));
    assert!(Opt::<&str>::not_null(None).is_empty());
}
