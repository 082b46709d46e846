//! Read-only view of the current HTTP request.

use crate::error::{Error, Result};
use crate::text::to_sentence;
use url::Url;

/// The parts of a request needed to record a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    scheme: String,
    host: String,
    path: String,
    query: String,
}

impl RequestContext {
    /// Build a context from its parts.
    ///
    /// `host` may carry a port. `query` may be given with or without the
    /// leading `?`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme or host is empty.
    pub fn new(scheme: &str, host: &str, path: &str, query: &str) -> Result<Self> {
        if scheme.is_empty() {
            return Err(Error::InvalidRequest("missing scheme".to_string()));
        }
        if host.is_empty() {
            return Err(Error::InvalidRequest("missing host".to_string()));
        }

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let query = match query.strip_prefix('?').unwrap_or(query) {
            "" => String::new(),
            q => format!("?{q}"),
        };

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            path,
            query,
        })
    }

    /// Build a context from an absolute request URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute or has no host.
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(Error::InvalidRequest(format!("no host in {url}"))),
        };
        Self::new(
            parsed.scheme(),
            &host,
            parsed.path(),
            parsed.query().unwrap_or_default(),
        )
    }

    /// Request path, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full URL: `scheme://host` + path + query.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}://{}{}{}", self.scheme, self.host, self.path, self.query)
    }

    /// Page id and display name used when the caller gives none:
    /// the path without slashes, split into words.
    #[must_use]
    pub fn default_page(&self) -> String {
        to_sentence(&self.path.replace('/', ""))
    }
}
