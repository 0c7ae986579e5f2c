//! Request descriptors.
//!
//! A [`Request`] names a relative path plus everything a call may add on top
//! of the client defaults. A bare path converts into a `GET`:
//!
//! ```
//! use vine_api::request::{Method, PageOptions, Request};
//!
//! let plain: Request = "timelines/popular".into();
//! assert_eq!(plain.method, Method::Get);
//!
//! let paged = Request::get("timelines/popular").page_options(&PageOptions::new().page(2).size(20));
//! assert_eq!(paged.query[0], ("page".to_owned(), "2".to_owned()));
//! assert_eq!(paged.query[1], ("size".to_owned(), "20".to_owned()));
//! ```

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call against the API, relative to the configured origin.
///
/// Owned by the call: the pipeline copies it into the outgoing request, so
/// nothing the caller does to a `Request` afterwards reaches a request that
/// has already been dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Path relative to the API origin, e.g. `users/me`.
    pub url: String,
    /// Header overrides; these win over the client's default headers.
    pub headers: Vec<(String, String)>,
    /// Query-encoded parameters.
    pub query: Vec<(String, String)>,
    /// Form-encoded body fields.
    pub form: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            form: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn form(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((name.into(), value.into()));
        self
    }

    /// Append whichever pagination options are set.
    #[must_use]
    pub fn page_options(mut self, options: &PageOptions) -> Self {
        if let Some(page) = options.page {
            self = self.query("page", page);
        }
        if let Some(size) = options.size {
            self = self.query("size", size);
        }
        if let Some(anchor) = &options.anchor {
            self = self.query("anchor", anchor);
        }
        self
    }
}

impl From<&str> for Request {
    fn from(path: &str) -> Self {
        Self::get(path)
    }
}

impl From<String> for Request {
    fn from(path: String) -> Self {
        Self::get(path)
    }
}

/// Pagination options for listing endpoints.
///
/// Values are sent as-is; the service decides what an out-of-range page or
/// size means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub page: Option<u64>,
    pub size: Option<u64>,
    /// Cursor from a previous [`Page::anchor`](crate::types::Page).
    pub anchor: Option<String>,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_shorthand_is_a_get() {
        let req = Request::from("users/me");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, "users/me");
        assert!(req.headers.is_empty() && req.query.is_empty() && req.form.is_empty());
    }

    #[test]
    fn empty_page_options_add_nothing() {
        let req = Request::get("timelines/popular").page_options(&PageOptions::default());
        assert!(req.query.is_empty());
    }

    #[test]
    fn page_options_pass_through_unvalidated() {
        let options = PageOptions::new().page(0).size(100_000).anchor("abc");
        let req = Request::get("timelines/graph").page_options(&options);
        assert_eq!(
            req.query,
            vec![
                ("page".to_owned(), "0".to_owned()),
                ("size".to_owned(), "100000".to_owned()),
                ("anchor".to_owned(), "abc".to_owned()),
            ]
        );
    }

    #[test]
    fn builder_collects_overrides() {
        let req = Request::post("users/authenticate")
            .header("User-Agent", "test")
            .form("username", "alice")
            .method(Method::Put);
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.headers, vec![("User-Agent".to_owned(), "test".to_owned())]);
        assert_eq!(req.form, vec![("username".to_owned(), "alice".to_owned())]);
    }
}
