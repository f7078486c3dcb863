//! `Router` dispatches paths to values registered under a key, usually the
//! request method.
//!
//! Every key owns its own segment [tree](crate::Node). The tree only answers
//! *which* route matched; the router maps that route back to the value it was
//! registered with and binds the route's parameters against the request path.
//!
//! The registered path can contain two types of parameters:
//! ```ignore
//!  Syntax    Type
//!  :name     named parameter
//!  *name     catch-all parameter
//! ```
//!
//! Named parameters match exactly one path segment:
//! ```ignore
//!  Path: /blog/:category/:post
//!
//!  Requests:
//!   /blog/rust/request-routers            match: category="rust", post="request-routers"
//!   /blog/rust/request-routers/           match: category="rust", post="request-routers"
//!   /blog/rust/                           no match
//!   /blog/rust/request-routers/comments   no match
//! ```
//!
//! Catch-all parameters match everything until the path end, joined with `/`.
//! Anything registered after a catch-all is ignored.
//! ```ignore
//!  Path: /files/*filepath
//!
//!  Requests:
//!   /files                              match: filepath=""
//!   /files/LICENSE                      match: filepath="LICENSE"
//!   /files/templates/article.html       match: filepath="templates/article.html"
//! ```
//!
//! Empty segments are ignored on both sides, so trailing and doubled slashes
//! never change which route matches.
//!
//! Matching walks candidates in registration order. A literal segment only wins
//! over a wildcard registered at the same position if it was registered first:
//! ```rust
//! use pathtrie::Router;
//! use http::Method;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/p/go/doc", "go docs")?;
//! router.get("/p/:lang/doc", "docs")?;
//!
//! assert_eq!(*router.lookup(&Method::GET, "/p/go/doc")?.value, "go docs");
//! assert_eq!(*router.lookup(&Method::GET, "/p/rust/doc")?.value, "docs");
//! # Ok(())
//! # }
//! ```
use crate::error::{InsertError, MatchError};
use crate::params::Params;
use crate::path::{clean_segments, parse_pattern, split_path};
use crate::tree::{Node, WildcardPolicy};
use http::Method;
use std::collections::HashMap;
use std::hash::Hash;

/// A successful lookup.
#[derive(Debug)]
pub struct Match<'k, 'v, V> {
    /// The value registered for the matched route.
    pub value: &'k V,
    /// The matched route, as it was registered.
    pub pattern: &'k str,
    /// The route's parameters bound against the request path.
    pub params: Params<'k, 'v>,
}

// The tree for one key and the values of the routes that terminate in it.
#[derive(Debug)]
struct Table<V> {
    root: Node,
    values: HashMap<String, V>,
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Table {
            root: Node::new(),
            values: HashMap::new(),
        }
    }
}

/// Router is container which can be used to dispatch requests to different
/// values via configurable routes.
#[derive(Debug)]
pub struct Router<K: Eq + Hash, V> {
    tables: HashMap<K, Table<V>>,

    /// What to do when a route reaches a position already holding a wildcard
    /// with a different token, e.g. `/users/:name` after `/users/:id`.
    /// With [`WildcardPolicy::Merge`] both routes share the first wildcard and
    /// a warning is logged. With [`WildcardPolicy::Strict`] the second
    /// registration fails with [`InsertError::Conflict`].
    pub wildcard_policy: WildcardPolicy,

    /// If enabled, `.` and `..` request segments are resolved before matching,
    /// so `/a/./b/../c` is looked up as `/a/c`.
    pub clean_path: bool,
}

impl<K: Eq + Hash, V> Router<K, V> {
    /// Creates a router with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a value for `path` under `key`.
    ///
    /// Registering a route whose segments end on an already registered route
    /// replaces that route and its value.
    /// ```rust
    /// use pathtrie::Router;
    /// use http::Method;
    ///
    /// let mut router = Router::new();
    /// router.handle("/teapot", Method::GET, "I am a teapot").unwrap();
    /// ```
    pub fn handle(&mut self, path: &str, key: K, value: V) -> Result<(), InsertError> {
        let segments = parse_pattern(path);
        let table = self.tables.entry(key).or_default();

        let replaced = table
            .root
            .insert_with(self.wildcard_policy, path, &segments)?;

        if let Some(replaced) = replaced {
            if replaced != path {
                table.values.remove(&replaced);
            }
        }

        debug!("registered route '{}'", path);
        table.values.insert(path.to_owned(), value);
        Ok(())
    }

    /// Lookup allows the manual lookup of the value for a specific key and path.
    /// ```rust
    /// use pathtrie::Router;
    /// use http::Method;
    ///
    /// let mut router = Router::new();
    /// router.get("/home", "Welcome!").unwrap();
    ///
    /// let res = router.lookup(&Method::GET, "/home").unwrap();
    /// assert_eq!(res.value, &"Welcome!");
    /// assert!(res.params.is_empty());
    /// ```
    pub fn lookup<'k, 'v>(
        &'k self,
        key: &K,
        path: &'v str,
    ) -> Result<Match<'k, 'v, V>, MatchError> {
        let table = self.tables.get(key).ok_or(MatchError::NotFound)?;

        let mut segments = split_path(path);
        if self.clean_path {
            segments = clean_segments(segments);
        }

        let Some(node) = table.root.search(&segments) else {
            debug!("no route matches '{}'", path);
            return Err(MatchError::NotFound);
        };

        let pattern = node.pattern().ok_or(MatchError::NotFound)?;
        let value = table.values.get(pattern).ok_or(MatchError::NotFound)?;
        let params = Params::extract(&parse_pattern(pattern), &segments);

        Ok(Match {
            value,
            pattern,
            params,
        })
    }

    /// The tree holding the routes registered under `key`.
    pub fn tree(&self, key: &K) -> Option<&Node> {
        self.tables.get(key).map(|table| &table.root)
    }
}

impl<V> Router<Method, V> {
    /// Register a value for GET requests
    pub fn get(&mut self, path: &str, value: V) -> Result<(), InsertError> {
        self.handle(path, Method::GET, value)
    }

    /// Register a value for HEAD requests
    pub fn head(&mut self, path: &str, value: V) -> Result<(), InsertError> {
        self.handle(path, Method::HEAD, value)
    }

    /// Register a value for OPTIONS requests
    pub fn options(&mut self, path: &str, value: V) -> Result<(), InsertError> {
        self.handle(path, Method::OPTIONS, value)
    }

    /// Register a value for POST requests
    pub fn post(&mut self, path: &str, value: V) -> Result<(), InsertError> {
        self.handle(path, Method::POST, value)
    }

    /// Register a value for PUT requests
    pub fn put(&mut self, path: &str, value: V) -> Result<(), InsertError> {
        self.handle(path, Method::PUT, value)
    }

    /// Register a value for PATCH requests
    pub fn patch(&mut self, path: &str, value: V) -> Result<(), InsertError> {
        self.handle(path, Method::PATCH, value)
    }

    /// Register a value for DELETE requests
    pub fn delete(&mut self, path: &str, value: V) -> Result<(), InsertError> {
        self.handle(path, Method::DELETE, value)
    }

    /// Returns a list of the allowed methods for a specific path
    /// ```rust
    /// use pathtrie::Router;
    ///
    /// let mut router = Router::new();
    /// router.get("/products", "all products").unwrap();
    /// router.post("/products", "product created").unwrap();
    ///
    /// let allowed = router.allowed("/products");
    /// assert!(allowed.contains(&"GET".to_string()));
    /// assert!(allowed.contains(&"POST".to_string()));
    /// assert!(allowed.contains(&"OPTIONS".to_string()));
    /// ```
    pub fn allowed(&self, path: &str) -> Vec<String> {
        let mut allowed: Vec<String> = self
            .tables
            .keys()
            .filter(|method| **method != Method::OPTIONS)
            .filter(|method| path == "*" || self.lookup(method, path).is_ok())
            .map(Method::to_string)
            .collect();

        if !allowed.is_empty() {
            allowed.sort();
            allowed.push(Method::OPTIONS.to_string())
        }

        allowed
    }
}

/// The default router configuration
impl<K: Eq + Hash, V> Default for Router<K, V> {
    fn default() -> Self {
        Self {
            tables: HashMap::new(),
            wildcard_policy: WildcardPolicy::Merge,
            clean_path: false,
        }
    }
}
