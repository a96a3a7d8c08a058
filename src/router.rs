use std::fmt;

use log::{debug, trace};

use crate::component::Component;
use crate::error::{
    ConflictingRouteError, InsertError, InvalidRouteError, RegisterError, RemoveError, RouteError,
    UnregisterError,
};
use crate::params::Params;
use crate::tree::Node;
use crate::url::Url;

/// A URL router for deep linking, backed by a route trie.
///
/// Routes are URL-shaped strings whose path segments may be constants
/// (`details`), parameters (`:id`), wildcards (`*`) or a trailing catch-all
/// (`**rest`). The scheme and host occupy the first two levels of the same
/// trie, so a dead end while matching the host or path backtracks into
/// alternative scheme and host edges exactly like any other level: the three
/// levels form one logical search tree.
///
/// Schemes and hosts compare case-insensitively (RFC 3986) and fall back to a
/// wildcard when absent; path segments are case-sensitive.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = deeplink::Router::new();
/// router.register("myapp://store/products/:id", "product")?;
///
/// let matched = router.route("MyApp://Store/products/42")?;
/// assert_eq!(*matched.handler, "product");
/// assert_eq!(matched.params.get("id"), Some("42"));
/// # Ok(())
/// # }
/// ```
///
/// The router is not internally synchronized; callers invoking it from
/// multiple threads must serialize [`register`](Router::register) and
/// [`unregister`](Router::unregister) against concurrent
/// [`route`](Router::route) calls, e.g. with a read-write lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router<T> {
    root: Node<T>,
}

/// A successful route lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'router, T> {
    /// The handler registered for the matched route.
    pub handler: &'router T,
    /// The values bound by parameter and named catch-all components.
    pub params: Params,
    /// The URL's decoded query items, in order of appearance.
    pub query: Vec<(String, String)>,
}

impl<T> Router<T> {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Registers a route with the given handler.
    ///
    /// The scheme and host are case-folded and register under a wildcard edge
    /// when absent, so `"/users/:id"` matches that path under any scheme and
    /// host. Query strings are ignored on registration.
    pub fn register(&mut self, route: &str, handler: T) -> Result<(), RegisterError> {
        let components = pattern_components(route)?;

        self.root
            .insert(&components, handler)
            .map_err(register_error)?;

        debug!("registered route {route:?}");
        Ok(())
    }

    /// Unregisters a route, returning the handler it was registered with.
    ///
    /// Every trie node left empty by the removal is pruned, so unregistering
    /// the last route under a scheme or host drops that entire subtree.
    pub fn unregister(&mut self, route: &str) -> Result<T, UnregisterError> {
        let components = pattern_components(route)?;

        let handler = self.root.remove(&components).map_err(|err| match err {
            RemoveError::RouteNotFound => UnregisterError::RouteNotFound,
            RemoveError::MisplacedCatchAllComponent(name) => {
                InvalidRouteError::MisplacedCatchAllComponent(name).into()
            }
            RemoveError::MisplacedEmptyComponent => {
                InvalidRouteError::MisplacedEmptyComponent.into()
            }
        })?;

        debug!("unregistered route {route:?}");
        Ok(handler)
    }

    /// Resolves a URL against the registered routes.
    ///
    /// Returns the matched handler together with the parameter bindings made
    /// along the way and the URL's decoded query items.
    pub fn route(&self, url: &str) -> Result<Match<'_, T>, RouteError> {
        let target = Url::parse(url).map_err(InvalidRouteError::from)?;

        // absent scheme/host match as the empty literal, which falls through
        // to the wildcard edge registered for routes without one
        let scheme = target.scheme.unwrap_or_default().to_lowercase();
        let host = target.host.unwrap_or_default().to_lowercase();

        let mut segments = Vec::with_capacity(target.segments.len() + 2);
        segments.push(scheme.as_str());
        segments.push(host.as_str());
        segments.extend_from_slice(&target.segments);

        let mut params = Params::new();
        let handler = self
            .root
            .at(&segments, &mut params)
            .ok_or(RouteError::RouteNotFound)?;

        let query = target.query.map(parse_query).unwrap_or_default();

        trace!("matched {url:?} binding {} parameter(s)", params.len());
        Ok(Match {
            handler,
            params,
            query,
        })
    }
}

impl<T: RouteHandler> Router<T> {
    /// Resolves a URL and immediately invokes the matched handler, returning
    /// its output.
    ///
    /// Matching and invocation are synchronous; whatever the handler defers
    /// to afterwards is its own business.
    pub fn dispatch(&self, url: &str) -> Result<T::Output, RouteError> {
        let matched = self.route(url)?;
        Ok(matched.handler.handle(url, matched.params, matched.query))
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Display for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

/// A handler that can be invoked for the route it was registered under.
///
/// Implemented for any compatible closure, so plain functions work directly
/// with [`Router::dispatch`]:
///
/// ```rust
/// use deeplink::Params;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = deeplink::Router::new();
/// router.register(
///     "app://profile/:user",
///     |_url: &str, params: Params, _query: Vec<(String, String)>| {
///         params.get("user").map(str::to_owned)
///     },
/// )?;
///
/// assert_eq!(router.dispatch("app://profile/ada")?, Some("ada".to_owned()));
/// # Ok(())
/// # }
/// ```
pub trait RouteHandler {
    /// The value produced by handling a matched route.
    type Output;

    /// Handles a matched route with its bound parameters and query items.
    fn handle(&self, url: &str, params: Params, query: Vec<(String, String)>) -> Self::Output;
}

impl<F, R> RouteHandler for F
where
    F: Fn(&str, Params, Vec<(String, String)>) -> R,
{
    type Output = R;

    fn handle(&self, url: &str, params: Params, query: Vec<(String, String)>) -> R {
        self(url, params, query)
    }
}

// Classifies a route pattern into trie components: case-folded scheme and
// host levels, classified path segments, and the Empty terminator.
fn pattern_components(route: &str) -> Result<Vec<Component>, InvalidRouteError> {
    let url = Url::parse(route)?;

    let mut components = Vec::with_capacity(url.segments.len() + 3);
    components.push(level_component(url.scheme)?);
    components.push(level_component(url.host)?);

    for segment in &url.segments {
        components.push(Component::parse(segment)?);
    }

    components.push(Component::Empty);
    Ok(components)
}

// Schemes and hosts compare case-insensitively, and an absent value registers
// under the wildcard edge so it matches any scheme/host. Only constant text
// is case-folded: a parameter in the scheme or host position keeps its
// binding name as written.
fn level_component(value: Option<&str>) -> Result<Component, InvalidRouteError> {
    match value {
        None => Ok(Component::Wildcard),
        Some(value) => match Component::parse(value)? {
            Component::Constant(value) => Ok(Component::Constant(value.to_lowercase())),
            component => Ok(component),
        },
    }
}

fn register_error(err: InsertError) -> RegisterError {
    match err {
        InsertError::ConflictingHandler => RegisterError::DuplicateRoute,
        InsertError::DuplicateParameterName(name) => {
            InvalidRouteError::DuplicateParameterName(name).into()
        }
        InsertError::MisplacedCatchAllComponent(name) => {
            InvalidRouteError::MisplacedCatchAllComponent(name).into()
        }
        InsertError::MisplacedEmptyComponent => InvalidRouteError::MisplacedEmptyComponent.into(),
        InsertError::ConflictingParameterName { existing, new } => {
            ConflictingRouteError::ParameterComponent { existing, new }.into()
        }
        InsertError::ConflictingCatchAllComponent { existing, new } => {
            ConflictingRouteError::CatchAllComponent { existing, new }.into()
        }
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
