use crate::error::InsertError;

/// Controls what insertion does when a segment lands on a position already
/// occupied by a wildcard with a different token.
///
/// Insertion descends into the first child that either equals the segment or is
/// a wildcard. Registering `/users/:id` and then `/users/:user_id` therefore
/// reuses the `:id` node, and `/p/:lang/doc` followed by `/p/go/doc` stores the
/// second pattern on the `:lang` branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WildcardPolicy {
    /// Reuse the existing wildcard, discarding the new segment's token.
    /// A warning is logged whenever the tokens differ.
    #[default]
    Merge,
    /// Reject the registration with [`InsertError::Conflict`].
    Strict,
}

/// A node in the segment trie.
///
/// Each node represents one `/`-delimited segment at its depth. Children are
/// kept in the order they were first inserted, which is the only tie-break used
/// while matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    // The full registered route, set only where a registration terminated.
    pattern: String,
    segment: String,
    children: Vec<Node>,
    is_wild: bool,
}

pub(crate) fn is_wild_segment(segment: &str) -> bool {
    matches!(segment.as_bytes().first(), Some(b':' | b'*'))
}

impl Node {
    /// Creates an empty root node.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_segment(segment: &str) -> Self {
        Node {
            pattern: String::new(),
            segment: segment.to_owned(),
            children: Vec::new(),
            is_wild: is_wild_segment(segment),
        }
    }

    /// The route registered at this node, if any registration terminated here.
    pub fn pattern(&self) -> Option<&str> {
        if self.pattern.is_empty() {
            None
        } else {
            Some(&self.pattern)
        }
    }

    /// The literal text or wildcard token of this node. Empty for the root.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns `true` for `:name` and `*name` segments.
    pub fn is_wild(&self) -> bool {
        self.is_wild
    }

    /// Returns `true` for `*name` segments.
    pub fn is_catch_all(&self) -> bool {
        self.segment.starts_with('*')
    }

    /// The children of this node, in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    // The first registered route found in this subtree, in preorder.
    pub(crate) fn first_pattern(&self) -> Option<&str> {
        self.pattern()
            .or_else(|| self.children.iter().find_map(Node::first_pattern))
    }

    fn accepts(&self, segment: &str) -> bool {
        self.is_wild || self.segment == segment
    }

    // The first child that can hold `segment` during insertion.
    fn match_child(&self, segment: &str) -> Option<usize> {
        self.children.iter().position(|child| child.accepts(segment))
    }

    /// Registers `pattern`, already split into non-empty `segments`.
    ///
    /// Missing nodes are created along the way and the final node records
    /// `pattern`. Registering a route that ends on an already terminal node
    /// replaces its pattern; the replaced one is returned.
    ///
    /// ```rust
    /// use pathtrie::Node;
    ///
    /// let mut tree = Node::new();
    /// tree.insert("/users/:id", &["users", ":id"]);
    ///
    /// let matched = tree.search(&["users", "42"]).unwrap();
    /// assert_eq!(matched.pattern(), Some("/users/:id"));
    /// ```
    pub fn insert<S: AsRef<str>>(&mut self, pattern: &str, segments: &[S]) -> Option<String> {
        let mut current = self;

        for segment in segments {
            let segment = segment.as_ref();
            debug_assert!(
                !segment.is_empty(),
                "empty segment in route '{}'",
                pattern
            );

            let index = match current.match_child(segment) {
                Some(index) => {
                    let child = &current.children[index];
                    if child.segment != segment {
                        warn!(
                            "route '{}': segment '{}' merged into existing wildcard '{}'",
                            pattern, segment, child.segment
                        );
                    }
                    index
                }
                None => {
                    trace!("route '{}': new node '{}'", pattern, segment);
                    current.children.push(Node::with_segment(segment));
                    current.children.len() - 1
                }
            };

            current = &mut current.children[index];
        }

        let replaced = std::mem::replace(&mut current.pattern, pattern.to_owned());
        if replaced.is_empty() {
            None
        } else {
            if replaced != pattern {
                debug!("route '{}' replaces '{}'", pattern, replaced);
            }
            Some(replaced)
        }
    }

    /// Registers `pattern`, refusing to merge segments into a wildcard with a
    /// different token.
    ///
    /// The whole route is validated before the tree is touched, so the tree is
    /// unchanged when an error is returned.
    ///
    /// ```rust
    /// use pathtrie::{InsertError, Node};
    ///
    /// let mut tree = Node::new();
    /// tree.try_insert("/users/:id", &["users", ":id"]).unwrap();
    ///
    /// let err = tree.try_insert("/users/:name", &["users", ":name"]).unwrap_err();
    /// assert!(matches!(err, InsertError::Conflict { .. }));
    /// ```
    pub fn try_insert<S: AsRef<str>>(
        &mut self,
        pattern: &str,
        segments: &[S],
    ) -> Result<Option<String>, InsertError> {
        self.check(segments)?;
        Ok(self.insert(pattern, segments))
    }

    /// Registers `pattern` under the given policy.
    pub fn insert_with<S: AsRef<str>>(
        &mut self,
        policy: WildcardPolicy,
        pattern: &str,
        segments: &[S],
    ) -> Result<Option<String>, InsertError> {
        match policy {
            WildcardPolicy::Merge => Ok(self.insert(pattern, segments)),
            WildcardPolicy::Strict => self.try_insert(pattern, segments),
        }
    }

    fn check<S: AsRef<str>>(&self, segments: &[S]) -> Result<(), InsertError> {
        if segments.iter().any(|s| s.as_ref().len() == 1 && is_wild_segment(s.as_ref())) {
            return Err(InsertError::UnnamedParam);
        }

        let mut current = self;
        for segment in segments {
            let segment = segment.as_ref();
            let child = match current.match_child(segment) {
                Some(index) => &current.children[index],
                // the rest of the route is new
                None => return Ok(()),
            };

            if child.segment != segment {
                return Err(InsertError::conflict(segment, child));
            }

            current = child;
        }

        Ok(())
    }

    /// Finds the node registered for a request path, split into segments.
    ///
    /// Candidates are tried depth-first in insertion order and the first
    /// terminal node reached wins. A literal child is preferred over a wildcard
    /// sibling only if it was inserted first. A catch-all node consumes every
    /// remaining segment, including none at all.
    ///
    /// ```rust
    /// use pathtrie::Node;
    ///
    /// let mut tree = Node::new();
    /// tree.insert("/assets/*filepath", &["assets", "*filepath"]);
    ///
    /// let matched = tree.search(&["assets", "css", "a.css"]).unwrap();
    /// assert_eq!(matched.pattern(), Some("/assets/*filepath"));
    /// assert!(tree.search(&["xyz"]).is_none());
    /// ```
    pub fn search<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Node> {
        self.search_from(segments, 0)
    }

    fn search_from<S: AsRef<str>>(&self, segments: &[S], depth: usize) -> Option<&Node> {
        if self.is_catch_all() {
            return self.pattern().map(|_| self);
        }

        if depth == segments.len() {
            if self.pattern().is_some() {
                return Some(self);
            }

            // an empty tail for a catch-all child
            return self
                .children
                .iter()
                .find(|child| child.is_catch_all() && child.pattern().is_some());
        }

        let segment = segments[depth].as_ref();
        self.children
            .iter()
            .filter(|child| child.accepts(segment))
            .find_map(|child| child.search_from(segments, depth + 1))
    }
}
