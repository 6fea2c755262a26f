use std::mem;
use std::str::FromStr;

use http::header::HeaderName;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::Error;
use crate::Result;

/// Signing view over a request.
///
/// The query string is kept raw and unparsed: canonicalization signs it
/// byte for byte as it appears on the wire.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme, when the request carries an absolute URI.
    pub scheme: Option<Scheme>,
    /// HTTP authority, when the request carries one.
    ///
    /// Inbound callback requests are usually in origin-form and have none;
    /// only canonicalizations that bind the host require it.
    pub authority: Option<Authority>,
    /// HTTP path.
    pub path: String,
    /// Raw HTTP query string, empty if absent.
    pub query: String,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing view from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme,
            authority: uri.authority,
            path: paq.path().to_string(),
            query: paq.query().unwrap_or_default().to_string(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the view.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing view back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            // Return scheme and authority back.
            uri_parts.scheme = self.scheme;
            uri_parts.authority = self.authority;
            // Build path and query.
            uri_parts.path_and_query = {
                let paq = if self.query.is_empty() {
                    self.path
                } else {
                    let mut s = self.path;
                    s.reserve(self.query.len() + 1);

                    s.push('?');
                    s.push_str(&self.query);

                    s
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Host the request is addressed to, including the port if present.
    pub fn host(&self) -> Result<&str> {
        match &self.authority {
            Some(v) => Ok(v.as_str()),
            None => Err(Error::request_invalid(
                "request without authority cannot be signed with a host binding",
            )),
        }
    }

    /// Get header value by name.
    ///
    /// Lookup is case-insensitive; returns empty string if header not found.
    #[inline]
    pub fn header_get_or_default(&self, key: &HeaderName) -> Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }
}
