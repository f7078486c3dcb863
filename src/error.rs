use crate::tree::Node;

use thiserror::Error;

/// Represents errors that can occur when inserting a new route.
///
/// Insertion under [`WildcardPolicy::Merge`](crate::WildcardPolicy::Merge) never
/// fails; these errors are only produced by strict insertion.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Error)]
pub enum InsertError {
    /// A segment would be merged into an existing wildcard with a different token.
    #[error("segment '{segment}' conflicts with previously registered route: {with}")]
    Conflict {
        /// The segment of the new route that could not be placed.
        segment: String,
        /// The existing route that the insertion is conflicting with.
        with: String,
    },
    /// Parameters must be registered with a name.
    #[error("parameters must be registered with a name")]
    UnnamedParam,
}

impl InsertError {
    pub(crate) fn conflict(segment: &str, current: &Node) -> Self {
        let with = current
            .first_pattern()
            .map(str::to_owned)
            .unwrap_or_else(|| current.segment().to_owned());

        InsertError::Conflict {
            segment: segment.to_owned(),
            with,
        }
    }
}

/// A failed match attempt.
///
/// ```
/// use pathtrie::{MatchError, Router};
/// use http::Method;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/home", "Welcome!")?;
/// router.get("/blog/:post", "Our blog.")?;
///
/// // no routes match
/// if let Err(err) = router.lookup(&Method::GET, "/foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum MatchError {
    /// No matching route was found.
    #[error("matching route not found")]
    NotFound,
}
