//! Request signing.
//!
//! Every POST call to Last.fm carries an `api_sig`: the MD5 of all request
//! parameters concatenated as `key value` pairs (no separator) in ascending
//! key order, followed by the shared secret.
//!
//! See: https://www.last.fm/api/authspec#_8-signing-calls

/// Compute the `api_sig` for a parameter set.
///
/// Keys are sorted by byte order so the result does not depend on how the
/// parameters were collected. Empty values still contribute their key.
pub fn sign<'a, I>(params: I, secret: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut pairs: Vec<(&str, &str)> = params.into_iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut payload = String::new();
    for (key, value) in pairs {
        payload.push_str(key);
        payload.push_str(value);
    }
    payload.push_str(secret);

    format!("{:x}", md5::compute(payload.as_bytes()))
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Parameter sets with unique keys
    fn param_set() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::btree_map("[a-zA-Z_\\[\\]0-9]{1,12}", ".{0,16}", 0..12)
            .prop_map(|map| map.into_iter().collect())
    }

    fn as_pairs(params: &[(String, String)]) -> impl Iterator<Item = (&str, &str)> {
        params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    proptest! {
        /// Reordering the parameters never changes the signature
        #[test]
        fn sign_is_order_independent(
            (params, shuffled) in param_set().prop_flat_map(|p| {
                let shuffled = Just(p.clone()).prop_shuffle();
                (Just(p), shuffled)
            }),
            secret in ".{0,16}",
        ) {
            prop_assert_eq!(sign(as_pairs(&params), &secret), sign(as_pairs(&shuffled), &secret));
        }

        /// Same input, same output
        #[test]
        fn sign_is_deterministic(params in param_set(), secret in ".{0,16}") {
            prop_assert_eq!(sign(as_pairs(&params), &secret), sign(as_pairs(&params), &secret));
        }

        /// Changing a single value changes the signature
        #[test]
        fn sign_depends_on_values(params in param_set(), index in any::<prop::sample::Index>()) {
            prop_assume!(!params.is_empty());
            let mut changed = params.clone();
            let i = index.index(changed.len());
            changed[i].1.push('x');
            prop_assert_ne!(sign(as_pairs(&params), "secret"), sign(as_pairs(&changed), "secret"));
        }

        /// Renaming a single key changes the signature
        #[test]
        fn sign_depends_on_keys(
            params in prop::collection::btree_map("[a-z_0-9]{1,12}", "[^#]{0,16}", 1..12)
                .prop_map(|map| map.into_iter().collect::<Vec<_>>()),
            index in any::<prop::sample::Index>(),
        ) {
            let mut renamed = params.clone();
            let i = index.index(renamed.len());
            // '#' appears in no other key or value, so the new key is fresh
            renamed[i].0.push('#');
            prop_assert_ne!(sign(as_pairs(&params), "secret"), sign(as_pairs(&renamed), "secret"));
        }

        /// Changing the secret changes the signature
        #[test]
        fn sign_depends_on_secret(params in param_set(), secret in "[a-z]{1,16}") {
            let other = format!("{secret}x");
            prop_assert_ne!(sign(as_pairs(&params), &secret), sign(as_pairs(&params), &other));
        }
    }
}
