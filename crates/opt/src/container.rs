//! Container capabilities used by the factory functions: keyed lookup and length.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Keyed access into a container, as used by [`Opt::from_entry`](crate::Opt::from_entry).
///
/// Returns `None` when there is no entry for `key`, or when the entry is the
/// container's own absent marker (JSON `null`).
pub trait Lookup<Q: ?Sized> {
    type Output: ?Sized;

    fn lookup(&self, key: &Q) -> Option<&Self::Output>;
}

impl<K, V, Q, S> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> { self.get(key) }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> { self.get(key) }
}

impl<V> Lookup<usize> for [V] {
    type Output = V;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&V> { self.get(*key) }
}

impl<V, const N: usize> Lookup<usize> for [V; N] {
    type Output = V;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&V> { self.get(*key) }
}

impl<V> Lookup<usize> for Vec<V> {
    type Output = V;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&V> { self.get(*key) }
}

impl<V> Lookup<usize> for VecDeque<V> {
    type Output = V;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&V> { self.get(*key) }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::Value;

    use super::Lookup;

    // Non-objects and non-arrays are not indexable and yield `None` through
    // `Value::get`.
    impl Lookup<str> for Value {
        type Output = Value;

        fn lookup(&self, key: &str) -> Option<&Value> {
            self.get(key).filter(|value| !value.is_null())
        }
    }

    impl Lookup<usize> for Value {
        type Output = Value;

        fn lookup(&self, key: &usize) -> Option<&Value> {
            self.get(*key).filter(|value| !value.is_null())
        }
    }

    impl super::Countable for Value {
        fn is_zero_length(&self) -> bool {
            match self {
                Value::String(s) => s.is_empty(),
                Value::Array(items) => items.is_empty(),
                Value::Object(map) => map.is_empty(),
                Value::Null | Value::Bool(_) | Value::Number(_) => false,
            }
        }
    }
}

/// Values with a notion of length, as used by [`Opt::non_empty`](crate::Opt::non_empty).
pub trait Countable {
    fn is_zero_length(&self) -> bool;
}

macro_rules! countable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T> Countable for $ty {
                #[inline]
                fn is_zero_length(&self) -> bool { self.is_empty() }
            }
        )+
    };
}

countable!([T], Vec<T>, VecDeque<T>, BTreeSet<T>);

impl Countable for str {
    #[inline]
    fn is_zero_length(&self) -> bool { self.is_empty() }
}

impl Countable for String {
    #[inline]
    fn is_zero_length(&self) -> bool { self.is_empty() }
}

impl<T, const N: usize> Countable for [T; N] {
    #[inline]
    fn is_zero_length(&self) -> bool { N == 0 }
}

impl<T, S> Countable for HashSet<T, S> {
    #[inline]
    fn is_zero_length(&self) -> bool { self.is_empty() }
}

impl<K, V, S> Countable for HashMap<K, V, S> {
    #[inline]
    fn is_zero_length(&self) -> bool { self.is_empty() }
}

impl<K, V> Countable for BTreeMap<K, V> {
    #[inline]
    fn is_zero_length(&self) -> bool { self.is_empty() }
}

impl<C: Countable + ?Sized> Countable for &C {
    #[inline]
    fn is_zero_length(&self) -> bool { (**self).is_zero_length() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_borrow_their_keys() {
        let map: HashMap<String, i32> = [("a".to_string(), 1)].into_iter().collect();
        assert_eq!(map.lookup("a"), Some(&1));
        assert_eq!(map.lookup("z"), None);

        let tree: BTreeMap<&str, i32> = [("a", 1)].into_iter().collect();
        assert_eq!(tree.lookup("a"), Some(&1));
    }

    #[test]
    fn sequences_index_by_position() {
        let items = vec!['x', 'y'];
        assert_eq!(items.lookup(&1), Some(&'y'));
        assert_eq!(items.lookup(&2), None);
        assert_eq!(items[..].lookup(&0), Some(&'x'));
    }

    #[test]
    fn lengths() {
        assert!("".is_zero_length());
        assert!(!"a".is_zero_length());
        assert!(Vec::<u8>::new().is_zero_length());
        assert!([0u8; 0].is_zero_length());
        assert!(!HashMap::from([(1, 2)]).is_zero_length());
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_null_is_absent() {
        let doc = serde_json::json!({"a": 1, "b": null, "list": [null, 2]});
        assert_eq!(doc.lookup("a"), Some(&serde_json::json!(1)));
        assert_eq!(doc.lookup("b"), None);
        assert_eq!(doc["list"].lookup(&0usize), None);
        assert_eq!(doc["list"].lookup(&1usize), Some(&serde_json::json!(2)));
        assert_eq!(doc["a"].lookup("a"), None);
        assert!(!serde_json::json!(0).is_zero_length());
        assert!(serde_json::json!([]).is_zero_length());
    }
}
