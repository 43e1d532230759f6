use std::str::FromStr;

use http::header::CONTENT_TYPE;
use http::uri::Authority;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Value of a query or body parameter.
///
/// Most parameters are plain strings, but clients may also carry booleans
/// or several values under one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A plain string value.
    String(String),
    /// A boolean, rendered as `true` or `false`.
    Bool(bool),
    /// Several values sharing one key.
    List(Vec<Value>),
}

impl Value {
    /// Render this value into strings, one per element.
    ///
    /// ```
    /// use oauth_sign_core::Value;
    ///
    /// assert_eq!(Value::from(true).to_strings(), vec!["true"]);
    /// assert_eq!(Value::from(vec!["x", "y"]).to_strings(), vec!["x", "y"]);
    /// ```
    pub fn to_strings(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(1);
        self.collect_strings(&mut out);
        out
    }

    fn collect_strings(&self, out: &mut Vec<String>) {
        match self {
            Value::String(v) => out.push(v.clone()),
            Value::Bool(v) => out.push(v.to_string()),
            Value::List(vs) => vs.iter().for_each(|v| v.collect_strings(out)),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::String(v.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, usize);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vs: Vec<T>) -> Self {
        Value::List(vs.into_iter().map(Into::into).collect())
    }
}

/// Ordered parameter list with string keys.
///
/// Insertion order is kept, the same key may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, Value)>);

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `application/x-www-form-urlencoded` content.
    ///
    /// Keys and values are decoded, repeated keys are kept as separate
    /// entries.
    pub fn parse(input: &[u8]) -> Self {
        form_urlencoded::parse(input)
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect()
    }

    /// Get the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Set `key` to `value`.
    ///
    /// The first existing entry is replaced in place and any later entry
    /// with the same key is dropped. Otherwise the pair is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        match self.0.iter().position(|(k, _)| *k == key) {
            Some(idx) => {
                self.0[idx].1 = value;
                let mut seen = 0;
                self.0.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.0.push((key, value)),
        }
    }

    /// Append a pair without touching existing entries.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    /// Remove every entry stored under `key`, returns whether any existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|(k, _)| k != key);
        before != self.0.len()
    }

    /// Number of entries, lists count once.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there is no entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten into `(key, value)` string pairs.
    ///
    /// Booleans become `true` or `false` and lists produce one pair per
    /// element.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (k, v) in &self.0 {
            for s in v.to_strings() {
                pairs.push((k.clone(), s));
            }
        }
        pairs
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Signing view of a request.
///
/// It carries everything a signer may read, and the headers it may write.
/// Query and body parameters are owned here so that callers can attach
/// typed values before signing.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path without query and fragment.
    pub path: String,
    /// Query parameters.
    pub query: Params,
    /// Body parameters, only populated for form-encoded bodies.
    pub body: Params,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing request from method and an absolute url.
    ///
    /// The fragment is dropped and the query string is parsed into
    /// [`SigningRequest::query`].
    pub fn new(method: Method, url: &str) -> Result<Self> {
        let url = url.split_once('#').map_or(url, |(v, _)| v);
        let uri = Uri::from_str(url)?;

        Self::from_uri(method, &uri, HeaderMap::new())
    }

    /// Build a signing request from http::request::Parts.
    ///
    /// The parts are not modified, headers are copied.
    pub fn build(parts: &http::request::Parts) -> Result<Self> {
        Self::from_uri(parts.method.clone(), &parts.uri, parts.headers.clone())
    }

    fn from_uri(method: Method, uri: &Uri, headers: HeaderMap) -> Result<Self> {
        let scheme = uri
            .scheme()
            .cloned()
            .ok_or_else(|| Error::request_invalid("request without scheme is invalid for signing"))?;
        let authority = uri.authority().cloned().ok_or_else(|| {
            Error::request_invalid("request without authority is invalid for signing")
        })?;

        Ok(SigningRequest {
            method,
            scheme,
            authority,
            path: uri.path().to_string(),
            query: uri
                .query()
                .map(|v| Params::parse(v.as_bytes()))
                .unwrap_or_default(),
            body: Params::new(),
            headers,
        })
    }

    /// Attach a form-encoded body.
    pub fn with_form_body(mut self, body: &[u8]) -> Self {
        self.body = Params::parse(body);
        self
    }

    /// Get the `Content-Type` header if present.
    pub fn content_type(&self) -> Result<Option<&str>> {
        match self.headers.get(CONTENT_TYPE) {
            Some(v) => Ok(Some(v.to_str()?)),
            None => Ok(None),
        }
    }
}
