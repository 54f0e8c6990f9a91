//! Request descriptors handed to the dispatcher.

use std::collections::BTreeMap;
use std::fmt;

/// HTTP verb of a Last.fm call. Reads are GET, anything that changes
/// state on the service is a signed POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Get => f.write_str("GET"),
            Verb::Post => f.write_str("POST"),
        }
    }
}

/// Parameters for one call.
///
/// Iteration is always in ascending key order. Empty values are kept and
/// sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A single call: method name, parameters and verb.
///
/// The decode target is chosen by the caller through
/// [`Client::dispatch`](crate::Client::dispatch)'s type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub params: Params,
    pub verb: Verb,
}

impl Request {
    pub fn get(method: impl Into<String>, params: Params) -> Self {
        Self {
            method: method.into(),
            params,
            verb: Verb::Get,
        }
    }

    pub fn post(method: impl Into<String>, params: Params) -> Self {
        Self {
            method: method.into(),
            params,
            verb: Verb::Post,
        }
    }
}

/// String form of a boolean flag parameter (`autocorrect`, `extended`,
/// `chosenByUser`, ...).
pub fn bool_signal(flag: bool) -> &'static str {
    if flag { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_signal() {
        assert_eq!(bool_signal(true), "1");
        assert_eq!(bool_signal(false), "0");
    }

    #[test]
    fn test_params_iterate_sorted() {
        let params = Params::new()
            .with("track", "Outshined")
            .with("artist", "Soundgarden")
            .with("album", "");
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["album", "artist", "track"]);
        assert_eq!(params.get("album"), Some(""));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_params_insert_replaces() {
        let mut params = Params::new().with("page", "1");
        params.insert("page", "2");
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_params_from_iter() {
        let params: Params = [("tag", "grunge"), ("page", "3")].into_iter().collect();
        assert_eq!(params.get("tag"), Some("grunge"));
        assert!(!params.is_empty());
    }

    #[test]
    fn test_request_constructors() {
        let get = Request::get("album.getinfo", Params::new());
        assert_eq!(get.verb, Verb::Get);
        let post = Request::post("track.love", Params::new());
        assert_eq!(post.verb, Verb::Post);
        assert_eq!(post.verb.to_string(), "POST");
    }
}
