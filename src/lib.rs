//! A segment trie URL router.
//!
//! Routes are split on `/` into segments. A segment is either a literal, a
//! named parameter (`:name`) matching exactly one segment, or a catch-all
//! (`*name`) matching the rest of the path.
//!
//! ```rust
//! use pathtrie::Router;
//! use http::Method;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/", "index")?;
//! router.get("/hello/:name", "hello")?;
//! router.get("/assets/*filepath", "assets")?;
//!
//! let matched = router.lookup(&Method::GET, "/hello/world")?;
//! assert_eq!(*matched.value, "hello");
//! assert_eq!(matched.params.get("name"), Some("world"));
//!
//! let matched = router.lookup(&Method::GET, "/assets/css/a.css")?;
//! assert_eq!(matched.pattern, "/assets/*filepath");
//! assert_eq!(matched.params.get("filepath"), Some("css/a.css"));
//! # Ok(())
//! # }
//! ```
//!
//! [`Node`] is the trie itself and can be used without the router: it only
//! reports which registered route matched, leaving parameter binding to
//! [`Params::extract`].
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod path;
mod router;
mod tree;

pub use error::{InsertError, MatchError};
pub use params::{Params, ParamsIter};
pub use path::{clean_segments, parse_pattern, split_path};
pub use router::{Match, Router};
pub use tree::{Node, WildcardPolicy};
