use thiserror::Error;

/// An error returned when a route segment cannot be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidComponent {
    /// Segments are split on `/` before classification, so a segment can
    /// never contain one.
    #[error("route segments cannot contain '/': {0:?}")]
    EmbeddedSeparator(String),
    /// A `:` parameter token without a name.
    #[error("parameter segments must have a non-empty name")]
    UnnamedParameter,
    /// A wildcard token that is neither `*`, `**` nor `**name`.
    #[error("malformed wildcard segment: {0:?}")]
    MalformedWildcard(String),
}

/// An error returned when a URL-shaped string cannot be decomposed into
/// scheme, host, path and query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the URL could not be split into scheme, host, path and query")]
pub struct InvalidUrl;

/// Represents errors that can occur when inserting a route into a [`Node`].
///
/// [`Node`]: crate::Node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The terminal node already has a handler.
    #[error("a handler is already registered for this route")]
    ConflictingHandler,
    /// An empty component appeared before the end of the route.
    #[error("empty components may only terminate a route")]
    MisplacedEmptyComponent,
    /// A catch-all component appeared before the end of the route.
    #[error("catch-all components may only terminate a route: {}", catch_all(.0))]
    MisplacedCatchAllComponent(Option<String>),
    /// A parameter edge with a different name already exists at this
    /// position.
    #[error("a parameter named {existing:?} already exists at this position, conflicting with {new:?}")]
    ConflictingParameterName {
        /// The name of the edge already in the trie.
        existing: String,
        /// The name the insertion attempted to add.
        new: String,
    },
    /// A catch-all with a different name already exists at this position.
    #[error("a catch-all named {} already exists at this position, conflicting with {}", catch_all(.existing), catch_all(.new))]
    ConflictingCatchAllComponent {
        /// The name of the catch-all already in the trie.
        existing: Option<String>,
        /// The name the insertion attempted to add.
        new: Option<String>,
    },
    /// The same binding name was used twice in one route.
    #[error("the parameter name {0:?} is used more than once in this route")]
    DuplicateParameterName(String),
}

/// Represents errors that can occur when removing a route from a [`Node`].
///
/// [`Node`]: crate::Node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// No matching route is registered in this node or its children.
    #[error("no route is registered for these components")]
    RouteNotFound,
    /// An empty component appeared before the end of the route.
    #[error("empty components may only terminate a route")]
    MisplacedEmptyComponent,
    /// A catch-all component appeared before the end of the route.
    #[error("catch-all components may only terminate a route: {}", catch_all(.0))]
    MisplacedCatchAllComponent(Option<String>),
}

/// The reasons a URL fails to describe a well formed route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRouteError {
    /// The URL itself is structurally unparsable.
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrl),
    /// A path segment is not a valid route component.
    #[error(transparent)]
    InvalidComponent(#[from] InvalidComponent),
    /// The same binding name was used twice in one route.
    #[error("the parameter name {0:?} is used more than once in this route")]
    DuplicateParameterName(String),
    /// A catch-all component appeared before the end of the route.
    #[error("catch-all components may only terminate a route: {}", catch_all(.0))]
    MisplacedCatchAllComponent(Option<String>),
    /// An empty component appeared before the end of the route.
    #[error("empty components may only terminate a route")]
    MisplacedEmptyComponent,
}

/// A conflict between the route being registered and an existing route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictingRouteError {
    /// A registered route has a parameter with a different name at the same
    /// position.
    #[error("a route with parameter {existing:?} already exists at this position, conflicting with {new:?}")]
    ParameterComponent {
        /// The name of the edge already in the trie.
        existing: String,
        /// The name the registration attempted to add.
        new: String,
    },
    /// A registered route has a catch-all with a different name at the same
    /// position.
    #[error("a route with catch-all {} already exists at this position, conflicting with {}", catch_all(.existing), catch_all(.new))]
    CatchAllComponent {
        /// The name of the catch-all already in the trie.
        existing: Option<String>,
        /// The name the registration attempted to add.
        new: Option<String>,
    },
}

/// Represents errors that can occur when registering a route with a
/// [`Router`].
///
/// [`Router`]: crate::Router
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A handler is already registered for this exact route.
    #[error("a handler is already registered for this route")]
    DuplicateRoute,
    /// The route is malformed.
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] InvalidRouteError),
    /// The route conflicts with an existing registration.
    #[error("conflicting route: {0}")]
    ConflictingRoute(#[from] ConflictingRouteError),
}

/// Represents errors that can occur when unregistering a route from a
/// [`Router`].
///
/// [`Router`]: crate::Router
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnregisterError {
    /// No handler is registered for this route.
    #[error("no route is registered for this URL")]
    RouteNotFound,
    /// The route is malformed.
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] InvalidRouteError),
}

/// A failed match attempt.
///
/// ```
/// use deeplink::{RouteError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.register("app://home", "Welcome!")?;
///
/// // no routes match
/// if let Err(err) = router.route("app://foobar") {
///     assert_eq!(err, RouteError::RouteNotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No combination of trie edges matches the URL.
    #[error("no route matches this URL")]
    RouteNotFound,
    /// The URL is structurally unparsable.
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] InvalidRouteError),
}

// Catch-all names are optional, so messages render them back in route syntax.
fn catch_all(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("**{name}"),
        None => "**".to_owned(),
    }
}
