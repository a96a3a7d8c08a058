use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::component::Component;
use crate::error::{InsertError, RemoveError};
use crate::params::Params;

/// A node in the route trie.
///
/// Each node owns one level of the trie: a map of constant edges, at most one
/// parameter edge, at most one wildcard edge, an optional terminal catch-all
/// and an optional handler marking a route terminus at this exact node. The
/// parent strictly owns its children, so the structure is an acyclic tree of
/// exclusively owned values.
///
/// Matching is an ordered exhaustive search: at every node the constant edge
/// is tried first, then the parameter edge, then the wildcard edge, then the
/// catch-all. The order is not just a tie-break among successful candidates,
/// it is the search order, so a dead end deeper in the tree backtracks into
/// the next sibling edge, unwinding any parameter bindings made along the
/// failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    constants: BTreeMap<String, Node<T>>,
    parameter: Option<Parameter<T>>,
    wildcard: Option<Box<Node<T>>>,
    catch_all: Option<CatchAll<T>>,
    handler: Option<T>,
}

// A parameter edge: matches any single segment and binds it under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Parameter<T> {
    name: String,
    node: Box<Node<T>>,
}

// A catch-all terminal: consumes all remaining segments. It carries the
// handler directly since nothing can be registered past it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CatchAll<T> {
    name: Option<String>,
    handler: T,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            constants: BTreeMap::new(),
            parameter: None,
            wildcard: None,
            catch_all: None,
            handler: None,
        }
    }
}

impl<T> Node<T> {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the node holds no edges, no catch-all and no
    /// handler. Empty nodes are pruned from their parent during removal.
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
            && self.parameter.is_none()
            && self.wildcard.is_none()
            && self.catch_all.is_none()
            && self.handler.is_none()
    }

    /// Inserts a route into the trie with the given handler.
    ///
    /// The route is walked component by component, reusing existing edges and
    /// lazily creating missing ones. A fresh suffix is built and validated in
    /// full before it is linked into the trie, so a failed insert leaves the
    /// trie exactly as it was.
    ///
    /// ```
    /// use deeplink::{Component, Node};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut node = Node::new();
    /// let route = [
    ///     Component::parse("users")?,
    ///     Component::parse(":id")?,
    ///     Component::Empty,
    /// ];
    /// node.insert(&route, "user-detail")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, route: &[Component], handler: T) -> Result<(), InsertError> {
        let mut seen = HashSet::new();
        self.insert_inner(route, handler, &mut seen)
    }

    fn insert_inner(
        &mut self,
        route: &[Component],
        handler: T,
        seen: &mut HashSet<String>,
    ) -> Result<(), InsertError> {
        let Some((head, rest)) = route.split_first() else {
            return self.set_handler(handler);
        };

        match head {
            Component::Empty => {
                if !rest.is_empty() {
                    return Err(InsertError::MisplacedEmptyComponent);
                }

                self.set_handler(handler)
            }
            Component::Constant(value) => match self.constants.get_mut(value) {
                Some(child) => child.insert_inner(rest, handler, seen),
                None => {
                    let child = Node::from_route(rest, handler, seen)?;
                    self.constants.insert(value.clone(), child);
                    Ok(())
                }
            },
            Component::Parameter(name) => {
                if !seen.insert(name.clone()) {
                    return Err(InsertError::DuplicateParameterName(name.clone()));
                }

                match &mut self.parameter {
                    Some(parameter) if parameter.name == *name => {
                        parameter.node.insert_inner(rest, handler, seen)
                    }
                    Some(parameter) => Err(InsertError::ConflictingParameterName {
                        existing: parameter.name.clone(),
                        new: name.clone(),
                    }),
                    None => {
                        let node = Box::new(Node::from_route(rest, handler, seen)?);
                        self.parameter = Some(Parameter {
                            name: name.clone(),
                            node,
                        });
                        Ok(())
                    }
                }
            }
            Component::Wildcard => match &mut self.wildcard {
                Some(child) => child.insert_inner(rest, handler, seen),
                None => {
                    self.wildcard = Some(Box::new(Node::from_route(rest, handler, seen)?));
                    Ok(())
                }
            },
            Component::CatchAll(name) => {
                // the terminating Empty is tolerated after a catch-all
                if !matches!(rest, [] | [Component::Empty]) {
                    return Err(InsertError::MisplacedCatchAllComponent(name.clone()));
                }

                if let Some(name) = name {
                    if seen.contains(name) {
                        return Err(InsertError::DuplicateParameterName(name.clone()));
                    }
                }

                match &self.catch_all {
                    Some(existing) if existing.name == *name => {
                        Err(InsertError::ConflictingHandler)
                    }
                    Some(existing) => Err(InsertError::ConflictingCatchAllComponent {
                        existing: existing.name.clone(),
                        new: name.clone(),
                    }),
                    None => {
                        self.catch_all = Some(CatchAll {
                            name: name.clone(),
                            handler,
                        });
                        Ok(())
                    }
                }
            }
        }
    }

    // Builds a fresh subtree for a route suffix. Failures discard the
    // partially built subtree before it was ever reachable from the trie.
    fn from_route(
        route: &[Component],
        handler: T,
        seen: &mut HashSet<String>,
    ) -> Result<Self, InsertError> {
        let mut node = Node::new();
        node.insert_inner(route, handler, seen)?;
        Ok(node)
    }

    fn set_handler(&mut self, handler: T) -> Result<(), InsertError> {
        if self.handler.is_some() {
            return Err(InsertError::ConflictingHandler);
        }

        self.handler = Some(handler);
        Ok(())
    }

    /// Matches literal segments against the trie, binding parameters into
    /// `params`, and returns the handler of the best matching route.
    ///
    /// Edges are tried in priority order: constant, parameter, wildcard,
    /// catch-all. Each candidate is recursed into and the first success wins;
    /// on failure any bindings made during the attempt are unwound before the
    /// next candidate is tried. A catch-all consumes all remaining segments
    /// (at least one) and never dead-ends.
    ///
    /// ```
    /// use deeplink::{Component, Node, Params};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut node = Node::new();
    /// node.insert(&[Component::parse(":name")?], "greeter")?;
    ///
    /// let mut params = Params::default();
    /// assert_eq!(node.at(&["world"], &mut params), Some(&"greeter"));
    /// assert_eq!(params.get("name"), Some("world"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn at(&self, segments: &[&str], params: &mut Params) -> Option<&T> {
        let Some((segment, rest)) = segments.split_first() else {
            return self.handler.as_ref();
        };

        if let Some(child) = self.constants.get(*segment) {
            if let Some(handler) = child.at(rest, params) {
                return Some(handler);
            }
        }

        if let Some(parameter) = &self.parameter {
            let checkpoint = params.len();
            params.push(&parameter.name, segment);

            if let Some(handler) = parameter.node.at(rest, params) {
                return Some(handler);
            }

            params.truncate(checkpoint);
        }

        if let Some(child) = &self.wildcard {
            if let Some(handler) = child.at(rest, params) {
                return Some(handler);
            }
        }

        if let Some(catch_all) = &self.catch_all {
            if let Some(name) = &catch_all.name {
                params.push(name, &segments.join("/"));
            }

            return Some(&catch_all.handler);
        }

        None
    }

    /// Removes a route from the trie, returning the registered handler.
    ///
    /// Descent is by structural equality of components: a constant matches by
    /// value, a parameter by name, a wildcard by presence and a catch-all by
    /// name. After the terminal handler is taken, every child node left with
    /// no edges and no handler is pruned from its parent on unwind.
    pub fn remove(&mut self, route: &[Component]) -> Result<T, RemoveError> {
        let Some((head, rest)) = route.split_first() else {
            return self.take_handler();
        };

        match head {
            Component::Empty => {
                if !rest.is_empty() {
                    return Err(RemoveError::MisplacedEmptyComponent);
                }

                self.take_handler()
            }
            Component::Constant(value) => {
                let child = self
                    .constants
                    .get_mut(value)
                    .ok_or(RemoveError::RouteNotFound)?;

                let handler = child.remove(rest)?;
                if child.is_empty() {
                    self.constants.remove(value);
                }

                Ok(handler)
            }
            Component::Parameter(name) => {
                let parameter = self.parameter.as_mut().ok_or(RemoveError::RouteNotFound)?;
                if parameter.name != *name {
                    return Err(RemoveError::RouteNotFound);
                }

                let handler = parameter.node.remove(rest)?;
                if parameter.node.is_empty() {
                    self.parameter = None;
                }

                Ok(handler)
            }
            Component::Wildcard => {
                let child = self.wildcard.as_mut().ok_or(RemoveError::RouteNotFound)?;

                let handler = child.remove(rest)?;
                if child.is_empty() {
                    self.wildcard = None;
                }

                Ok(handler)
            }
            Component::CatchAll(name) => {
                if !matches!(rest, [] | [Component::Empty]) {
                    return Err(RemoveError::MisplacedCatchAllComponent(name.clone()));
                }

                match self.catch_all.take() {
                    Some(existing) if existing.name == *name => Ok(existing.handler),
                    other => {
                        self.catch_all = other;
                        Err(RemoveError::RouteNotFound)
                    }
                }
            }
        }
    }

    fn take_handler(&mut self) -> Result<T, RemoveError> {
        self.handler.take().ok_or(RemoveError::RouteNotFound)
    }
}

impl<T: fmt::Debug> Node<T> {
    // Renders the node as an indented tree, one line per edge. Constant
    // edges come first in lexicographic order, then the parameter, wildcard
    // and catch-all edges, then the node's own handler.
    fn render(&self) -> String {
        let mut entries: Vec<(String, Option<String>)> = Vec::new();

        for (value, node) in &self.constants {
            entries.push((value.clone(), Some(node.render())));
        }

        if let Some(parameter) = &self.parameter {
            entries.push((format!(":{}", parameter.name), Some(parameter.node.render())));
        }

        if let Some(node) = &self.wildcard {
            entries.push(("*".to_owned(), Some(node.render())));
        }

        if let Some(catch_all) = &self.catch_all {
            let name = match &catch_all.name {
                Some(name) => format!("**{name}"),
                None => "**".to_owned(),
            };
            entries.push((name, Some(format!("└──● {:?}", catch_all.handler))));
        }

        if let Some(handler) = &self.handler {
            entries.push((format!("{handler:?}"), None));
        }

        let last = entries.len().saturating_sub(1);
        let forked = entries.len() > 1;

        entries
            .iter()
            .enumerate()
            .map(|(index, (name, child))| {
                let glyph = if index < last { "├" } else { "└" };

                match child {
                    None => format!("{glyph}──● {name}"),
                    Some(child) => {
                        let indent = if forked && index < last { "│  " } else { "   " };
                        let child = child
                            .lines()
                            .map(|line| format!("{indent}{line}"))
                            .collect::<Vec<_>>()
                            .join("\n");

                        format!("{glyph}──┬ {name}\n{child}")
                    }
                }
            })
            .collect::<Vec<_>>()
            .join("\n│\n")
    }
}

impl<T: fmt::Debug> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
