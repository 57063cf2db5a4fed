//! Key scheme for mapping records.
//!
//! Every mapping is stored as two independent entries: a forward entry
//! (`{tenant}:short:{code}` -> uri) consulted by resolve, and a reverse
//! entry (`{tenant}:uri:{uri}` -> code) consulted for idempotent
//! re-shortening. Tenant ids are lower-cased so the namespace does not
//! depend on the casing used in configuration.

/// Key of the forward entry mapping a short code to its original URI.
pub fn forward_key(tenant_id: &str, code: &str) -> String {
    format!("{}:short:{}", tenant_id.to_lowercase(), code)
}

/// Key of the reverse entry mapping an original URI to its short code.
pub fn reverse_key(tenant_id: &str, uri: &str) -> String {
    format!("{}:uri:{}", tenant_id.to_lowercase(), uri)
}
