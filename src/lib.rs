//! A trie-based URL router for deep linking.
//!
//! Routes are URL-shaped strings registered against handlers, with four kinds
//! of path segment:
//!
//! ```text
//! Syntax    Type
//! value     constant, matched by string equality
//! :name     parameter, matches any single segment and binds it
//! *         wildcard, matches any single segment without binding
//! **name    catch-all, greedily matches all remaining segments
//! ```
//!
//! Named parameters match exactly one segment:
//!
//! ```text
//! Route: myapp://store/products/:id
//!
//! myapp://store/products/42        match: id = "42"
//! myapp://store/products           no match
//! myapp://store/products/42/specs  no match
//! ```
//!
//! Catch-alls match one or more remaining segments and must be the final
//! component of a route:
//!
//! ```text
//! Route: myapp://files/**path
//!
//! myapp://files/a.png              match: path = "a.png"
//! myapp://files/img/a.png          match: path = "img/a.png"
//! myapp://files                    no match
//! ```
//!
//! When several routes overlap, more specific segments win: constants beat
//! parameters, parameters beat wildcards, wildcards beat catch-alls. The
//! match is an exhaustive backtracking search, so an early edge choice that
//! dead-ends deeper in the trie never hides a route that would have matched
//! through a less specific sibling.
//!
//! ```rust
//! use deeplink::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.register("myapp://store/products/:id", "product")?;
//! router.register("myapp://store/search/**terms", "search")?;
//!
//! let matched = router.route("myapp://store/products/42?ref=home")?;
//! assert_eq!(*matched.handler, "product");
//! assert_eq!(matched.params.get("id"), Some("42"));
//! assert_eq!(matched.query, [("ref".to_owned(), "home".to_owned())]);
//!
//! let matched = router.route("myapp://store/search/red/shoes")?;
//! assert_eq!(*matched.handler, "search");
//! assert_eq!(matched.params.get("terms"), Some("red/shoes"));
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod component;
mod error;
mod params;
mod router;
mod tree;
mod url;

pub use component::Component;
pub use error::{
    ConflictingRouteError, InsertError, InvalidComponent, InvalidRouteError, InvalidUrl,
    RegisterError, RemoveError, RouteError, UnregisterError,
};
pub use params::{Params, ParamsIter};
pub use router::{Match, RouteHandler, Router};
pub use tree::Node;
