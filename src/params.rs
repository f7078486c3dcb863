use std::borrow::Cow;
use std::{fmt, iter, mem, slice};

/// A single URL parameter, consisting of a key and a value.
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Clone)]
struct Param<'k, 'v> {
    key: &'k str,
    // Borrowed from the request path, except for a catch-all spanning several
    // segments, which has to be joined back together.
    value: Cow<'v, str>,
}

/// A list of parameters returned by a route match.
///
/// ```rust
/// use pathtrie::Router;
/// use http::Method;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/users/:id/*rest", true)?;
///
/// let matched = router.lookup(&Method::GET, "/users/1/posts/2")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// assert_eq!(matched.params.get("id"), Some("1"));
/// assert_eq!(matched.params.get("rest"), Some("posts/2"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
pub struct Params<'k, 'v> {
    kind: ParamsKind<'k, 'v>,
}

// Most routes have a small number of dynamic parameters, so we can avoid
// heap allocations in the common case.
const SMALL: usize = 3;

// A list of parameters, optimized to avoid allocations when possible.
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
enum ParamsKind<'k, 'v> {
    Small([Param<'k, 'v>; SMALL], usize),
    Large(Vec<Param<'k, 'v>>),
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self {
            kind: ParamsKind::Small(Default::default(), 0),
        }
    }

    /// Binds the wildcards of a route against a request path.
    ///
    /// Both sides are already split into segments. A `:name` segment binds the
    /// request segment at the same position. A `*name` segment binds the rest of
    /// the request path joined with `/`, which is empty when nothing is left.
    /// Literal segments bind nothing.
    ///
    /// ```rust
    /// use pathtrie::{parse_pattern, split_path, Params};
    ///
    /// let pattern = parse_pattern("/files/:dir/*filepath");
    /// let path = split_path("/files/js/inc/framework.js");
    ///
    /// let params = Params::extract(&pattern, &path);
    /// assert_eq!(params.get("dir"), Some("js"));
    /// assert_eq!(params.get("filepath"), Some("inc/framework.js"));
    /// ```
    pub fn extract(pattern: &[&'k str], path: &[&'v str]) -> Self {
        let mut params = Params::new();

        for (i, segment) in pattern.iter().copied().enumerate() {
            if let Some(key) = segment.strip_prefix(':') {
                if let Some(value) = path.get(i) {
                    params.push(key, Cow::Borrowed(*value));
                }
            } else if let Some(key) = segment.strip_prefix('*') {
                let rest = path.get(i..).unwrap_or_default();
                let value = match rest {
                    [single] => Cow::Borrowed(*single),
                    _ => Cow::Owned(rest.join("/")),
                };
                params.push(key, value);
                break;
            }
        }

        params
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        match self.kind {
            ParamsKind::Small(_, len) => len,
            ParamsKind::Large(ref vec) => vec.len(),
        }
    }

    /// Returns the value of the first parameter registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();

        match &self.kind {
            ParamsKind::Small(arr, len) => arr
                .iter()
                .take(*len)
                .find(|param| param.key == key)
                .map(|param| param.value.as_ref()),
            ParamsKind::Large(vec) => vec
                .iter()
                .find(|param| param.key == key)
                .map(|param| param.value.as_ref()),
        }
    }

    /// Returns an iterator over the parameters in the list.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter::new(self)
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        match self.kind {
            ParamsKind::Small(_, len) => len == 0,
            ParamsKind::Large(ref vec) => vec.is_empty(),
        }
    }

    /// Inserts a key value parameter pair into the list.
    pub(crate) fn push(&mut self, key: &'k str, value: Cow<'v, str>) {
        #[cold]
        fn drain_to_vec<T: Default>(len: usize, elem: T, arr: &mut [T; SMALL]) -> Vec<T> {
            let mut vec = Vec::with_capacity(len + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(elem);
            vec
        }

        let param = Param { key, value };
        match &mut self.kind {
            ParamsKind::Small(arr, len) => {
                if *len == SMALL {
                    self.kind = ParamsKind::Large(drain_to_vec(*len, param, arr));
                    return;
                }

                arr[*len] = param;
                *len += 1;
            }
            ParamsKind::Large(vec) => vec.push(param),
        }
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    kind: ParamsIterKind<'ps, 'k, 'v>,
}

impl<'ps, 'k, 'v> ParamsIter<'ps, 'k, 'v> {
    fn new(params: &'ps Params<'k, 'v>) -> Self {
        let kind = match &params.kind {
            ParamsKind::Small(arr, len) => ParamsIterKind::Small(arr.iter().take(*len)),
            ParamsKind::Large(vec) => ParamsIterKind::Large(vec.iter()),
        };
        Self { kind }
    }
}

enum ParamsIterKind<'ps, 'k, 'v> {
    Small(iter::Take<slice::Iter<'ps, Param<'k, 'v>>>),
    Large(slice::Iter<'ps, Param<'k, 'v>>),
}

impl<'ps, 'k, 'v> Iterator for ParamsIter<'ps, 'k, 'v> {
    type Item = (&'k str, &'ps str);

    fn next(&mut self) -> Option<Self::Item> {
        let param = match self.kind {
            ParamsIterKind::Small(ref mut iter) => iter.next(),
            ParamsIterKind::Large(ref mut iter) => iter.next(),
        };

        param.map(|p| (p.key, p.value.as_ref()))
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {
    fn len(&self) -> usize {
        match self.kind {
            ParamsIterKind::Small(ref iter) => iter.len(),
            ParamsIterKind::Large(ref iter) => iter.len(),
        }
    }
}
