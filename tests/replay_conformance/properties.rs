//! Property tests over arbitrary wire bytes

use cmdreplay::{
    CommandKey, Decoded, Expected, MemoryBlobStore, Reconstructor, TagPolicy, TypeTag,
};
use proptest::prelude::*;

fn expected_strategy() -> impl Strategy<Value = Expected> {
    prop_oneof![
        (0..TypeTag::ALL.len()).prop_map(|i| Expected::Scalar(TypeTag::ALL[i])),
        Just(Expected::String),
        Just(Expected::StringSequence),
        Just(Expected::StringMap),
        Just(Expected::TaggedSequence),
    ]
}

fn policy_strategy() -> impl Strategy<Value = TagPolicy> {
    prop_oneof![Just(TagPolicy::Strict), Just(TagPolicy::Lenient)]
}

/// Equality that treats NaN payloads as equal to themselves
fn same(a: &Decoded, b: &Decoded) -> bool {
    match (a, b) {
        (Decoded::StringMap(x), Decoded::StringMap(y)) => x == y,
        _ => format!("{a:?}") == format!("{b:?}"),
    }
}

proptest! {
    /// The value form is the result form with errors replaced by the exact
    /// zero value of the expected shape.
    #[test]
    fn value_form_is_result_or_zero(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        expected in expected_strategy(),
        policy in policy_strategy(),
    ) {
        let store = MemoryBlobStore::new();
        let key = CommandKey::new("EVAL", ["fuzz"]);
        store.insert(key.clone(), bytes);
        let r = Reconstructor::new(store).with_policy(policy);

        let value = r.value_expected(&key, expected);
        match r.result_expected(&key, expected) {
            Ok(decoded) => prop_assert!(same(&value, &decoded), "{:?} vs {:?}", value, decoded),
            Err(_) => prop_assert_eq!(value, Decoded::zero(expected)),
        }
    }

    /// A key that was never recorded always yields the zero value.
    #[test]
    fn missing_key_yields_zero(expected in expected_strategy()) {
        let r = Reconstructor::new(MemoryBlobStore::new());
        let key = CommandKey::new("GET", ["absent"]);
        prop_assert!(r.result_expected(&key, expected).unwrap_err().is_not_found());
        prop_assert_eq!(r.value_expected(&key, expected), Decoded::zero(expected));
    }
}
