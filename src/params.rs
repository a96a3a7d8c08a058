use std::fmt;
use std::slice;

/// The parameter values bound by a route match.
///
/// Bindings appear in route order, outermost segment first; a named catch-all
/// contributes a single binding holding the `/`-joined remainder.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = deeplink::Router::new();
/// # router.register("app://store/users/:id", true)?;
/// let matched = router.route("app://store/users/1")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// let id = matched.params.get("id");
/// assert_eq!(id, Some("1"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Params {
    items: Vec<(String, String)>,
}

impl Params {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of bound parameters.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no parameters were bound.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the value of the first parameter bound under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();

        self.items
            .iter()
            .find(|(bound, _)| bound == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over the bound keys and values.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.items.iter(),
        }
    }

    /// Binds a key value pair.
    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.items.push((key.to_owned(), value.to_owned()));
    }

    // Drops bindings made past the given length. Backtracking unwinds a
    // failed match attempt by truncating to the pre-attempt checkpoint.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'p> IntoIterator for &'p Params {
    type Item = (&'p str, &'p str);
    type IntoIter = ParamsIter<'p>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys and values of a route's [parameters](Params).
pub struct ParamsIter<'p> {
    inner: slice::Iter<'p, (String, String)>,
}

impl<'p> Iterator for ParamsIter<'p> {
    type Item = (&'p str, &'p str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl ExactSizeIterator for ParamsIter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get() {
        let pairs = [("hello", "hello"), ("world", "world"), ("baz", "baz")];

        let mut params = Params::new();
        for (key, value) in pairs {
            params.push(key, value);
            assert_eq!(params.get(key), Some(value));
        }

        assert_eq!(params.len(), 3);
        assert!(params.iter().eq(pairs));
    }

    #[test]
    fn first_binding_wins() {
        let mut params = Params::new();
        params.push("key", "outer");
        params.push("key", "inner");

        assert_eq!(params.get("key"), Some("outer"));
    }

    #[test]
    fn truncate_unwinds_bindings() {
        let mut params = Params::new();
        params.push("kept", "1");

        let checkpoint = params.len();
        params.push("discarded", "2");
        params.truncate(checkpoint);

        assert_eq!(params.get("discarded"), None);
        assert!(params.iter().eq([("kept", "1")]));
    }

    #[test]
    fn missing_key() {
        let params = Params::new();
        assert!(params.get("").is_none());
    }
}
