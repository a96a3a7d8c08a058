use std::fmt;
use std::str::FromStr;

use crate::error::InvalidComponent;

/// A single classified segment of a route pattern.
///
/// Routes are registered as a sequence of components, one per URL segment:
///
/// ```text
/// Syntax    Component
/// value     Constant("value")
/// :name     Parameter("name")
/// *         Wildcard
/// **        CatchAll(None)
/// **name    CatchAll(Some("name"))
/// ```
///
/// `Constant` segments match by string equality. `Parameter` segments match
/// any single segment and bind its value under the parameter name. `Wildcard`
/// segments match any single segment without binding. `CatchAll` segments
/// greedily consume all remaining segments (at least one), are only valid at
/// the end of a route, and bind the `/`-joined remainder when named.
///
/// `Empty` is the synthetic terminator produced when a route ends; it marks
/// "a route ends here" without consuming an input segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// A literal segment, matched by exact string equality.
    Constant(String),
    /// A named single-segment match, binding `name -> segment`.
    Parameter(String),
    /// An anonymous single-segment match, binding nothing.
    Wildcard,
    /// A greedy terminal match over all remaining segments.
    CatchAll(Option<String>),
    /// The synthetic route terminator.
    Empty,
}

impl Component {
    /// Classifies a single, already-split segment.
    ///
    /// Segments are whole by construction, so embedded `/` separators are
    /// rejected, as are wildcard and parameter tokens without a well formed
    /// name (`*name`, `:`).
    ///
    /// ```
    /// use deeplink::Component;
    ///
    /// assert_eq!(Component::parse("users"), Ok(Component::Constant("users".to_owned())));
    /// assert_eq!(Component::parse(":id"), Ok(Component::Parameter("id".to_owned())));
    /// assert_eq!(Component::parse("*"), Ok(Component::Wildcard));
    /// assert_eq!(Component::parse("**rest"), Ok(Component::CatchAll(Some("rest".to_owned()))));
    /// assert!(Component::parse("*rest").is_err());
    /// ```
    pub fn parse(segment: &str) -> Result<Self, InvalidComponent> {
        if segment.contains('/') {
            return Err(InvalidComponent::EmbeddedSeparator(segment.to_owned()));
        }

        if segment.is_empty() {
            return Ok(Component::Empty);
        }

        if let Some(name) = segment.strip_prefix("**") {
            if name.contains('*') {
                return Err(InvalidComponent::MalformedWildcard(segment.to_owned()));
            }

            return Ok(Component::CatchAll((!name.is_empty()).then(|| name.to_owned())));
        }

        if let Some(rest) = segment.strip_prefix('*') {
            if !rest.is_empty() {
                return Err(InvalidComponent::MalformedWildcard(segment.to_owned()));
            }

            return Ok(Component::Wildcard);
        }

        if let Some(name) = segment.strip_prefix(':') {
            if name.is_empty() {
                return Err(InvalidComponent::UnnamedParameter);
            }

            return Ok(Component::Parameter(name.to_owned()));
        }

        Ok(Component::Constant(segment.to_owned()))
    }
}

impl FromStr for Component {
    type Err = InvalidComponent;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        Component::parse(segment)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Constant(value) => f.write_str(value),
            Component::Parameter(name) => write!(f, ":{name}"),
            Component::Wildcard => f.write_str("*"),
            Component::CatchAll(Some(name)) => write!(f, "**{name}"),
            Component::CatchAll(None) => f.write_str("**"),
            Component::Empty => Ok(()),
        }
    }
}
