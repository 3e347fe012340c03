//! Backend key layout.
//!
//! | Purpose         | Key                                | TTL            |
//! |-----------------|------------------------------------|----------------|
//! | Global sequence | `next.url.id`                      | none           |
//! | Forward mapping | `shortlink:<code>:url`             | caller minutes |
//! | Dedup index     | `urlhash:<fingerprint>:shortlink`  | caller minutes |
//! | Detail metadata | `shortlink:<code>:detail`          | caller minutes |
//!
//! A non-empty namespace is prepended to every key as `<namespace>:`.

/// Builds backend keys under an optional namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyspace {
    prefix: String,
}

impl Keyspace {
    /// Creates a keyspace; an empty `namespace` leaves keys unprefixed.
    pub fn new(namespace: &str) -> Self {
        let namespace = namespace.trim_end_matches(':');
        let prefix = if namespace.is_empty() {
            String::new()
        } else {
            format!("{}:", namespace)
        };
        Self { prefix }
    }

    pub fn sequence(&self) -> String {
        format!("{}next.url.id", self.prefix)
    }

    pub fn shortlink(&self, code: &str) -> String {
        format!("{}shortlink:{}:url", self.prefix, code)
    }

    pub fn url_hash(&self, fingerprint: &str) -> String {
        format!("{}urlhash:{}:shortlink", self.prefix, fingerprint)
    }

    pub fn detail(&self, code: &str) -> String {
        format!("{}shortlink:{}:detail", self.prefix, code)
    }
}
