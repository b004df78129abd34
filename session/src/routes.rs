//! Declarative route table.
//!
//! DESIGN
//! ======
//! A route is pure data: a path pattern, whether the guard applies, and an
//! optional role allow-list. The view handle `V` is whatever the UI layer
//! renders; nothing in this crate inspects it.
//!
//! Patterns are `/`-separated segments: literals, `:name` parameters, and a
//! trailing `*` that swallows the rest of the path (including nothing).
//! When several patterns match, the most specific wins (literal beats
//! parameter beats wildcard, segment by segment); ties go to the earlier
//! declaration.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::HashSet;

use crate::error::RouteTableError;
use crate::user::Role;

const LITERAL_RANK: u8 = 3;
const PARAM_RANK: u8 = 2;
const WILDCARD_RANK: u8 = 1;

/// Specificity of a match: the rank of the pattern segment that consumed each
/// path segment, in order, then whether the pattern ended without a wildcard.
/// Compared lexicographically, so the first differing segment decides.
type Specificity = (Vec<u8>, bool);

/// One registered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDecl<V> {
    pub path: &'static str,
    pub view: V,
    /// Whether the guard must enforce a session.
    pub authenticated: bool,
    /// `None` admits any authenticated role.
    pub allowed_roles: Option<&'static [Role]>,
}

impl<V> RouteDecl<V> {
    /// Page reachable without a session (login, password reset).
    pub fn public(path: &'static str, view: V) -> Self {
        Self { path, view, authenticated: false, allowed_roles: None }
    }

    /// Page requiring a session, any role.
    pub fn protected(path: &'static str, view: V) -> Self {
        Self { path, view, authenticated: true, allowed_roles: None }
    }

    /// Restrict to `roles`.
    #[must_use]
    pub fn roles(mut self, roles: &'static [Role]) -> Self {
        self.allowed_roles = Some(roles);
        self
    }

    /// Whether `role` passes this route's allow-list.
    #[must_use]
    pub fn admits(&self, role: Option<Role>) -> bool {
        match self.allowed_roles {
            None => true,
            Some(allowed) => role.is_some_and(|r| allowed.contains(&r)),
        }
    }
}

/// A route matched against a concrete path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a, V> {
    pub route: &'a RouteDecl<V>,
    /// Captured `:name` parameters, plus `*` for the wildcard tail.
    pub params: Vec<(&'static str, String)>,
}

impl<V> RouteMatch<'_, V> {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

/// Ordered collection of routes. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable<V> {
    routes: Vec<RouteDecl<V>>,
}

impl<V> RouteTable<V> {
    #[must_use]
    pub fn new(routes: Vec<RouteDecl<V>>) -> Self {
        Self { routes }
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDecl<V>] {
        &self.routes
    }

    /// Check the table for structural mistakes.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in declaration order.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            let path = route.path;
            if !path.starts_with('/') {
                return Err(RouteTableError::NotAbsolute(path.to_owned()));
            }
            let segments = split(path);
            if let Some(pos) = segments.iter().position(|s| *s == "*") {
                if pos + 1 != segments.len() {
                    return Err(RouteTableError::MisplacedWildcard(path.to_owned()));
                }
            }
            if segments.iter().any(|s| *s == ":") {
                return Err(RouteTableError::EmptyParam(path.to_owned()));
            }
            if route.authenticated && route.allowed_roles.is_some_and(<[Role]>::is_empty) {
                return Err(RouteTableError::EmptyAllowList(path.to_owned()));
            }
            let shape: Vec<&str> = segments
                .iter()
                .map(|s| if s.starts_with(':') { ":" } else { *s })
                .collect();
            if !seen.insert(shape) {
                return Err(RouteTableError::Duplicate(path.to_owned()));
            }
        }
        Ok(())
    }

    /// Find the route for `path`. Query string and fragment are ignored.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let target = split(strip_query(path));
        let mut best: Option<(Specificity, RouteMatch<'_, V>)> = None;
        for route in &self.routes {
            let Some((score, params)) = match_segments(&split(route.path), &target) else {
                continue;
            };
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, RouteMatch { route, params }));
            }
        }
        best.map(|(_, m)| m)
    }
}

/// Path without its `?query` or `#fragment`.
#[must_use]
pub fn strip_query(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |idx| &path[..idx])
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_segments(pattern: &[&'static str], path: &[&str]) -> Option<(Specificity, Vec<(&'static str, String)>)> {
    let mut ranks = Vec::with_capacity(path.len());
    let mut params = Vec::new();
    for (idx, segment) in pattern.iter().enumerate() {
        if *segment == "*" {
            let tail = path.get(idx..).unwrap_or_default();
            ranks.resize(path.len(), WILDCARD_RANK);
            params.push(("*", tail.join("/")));
            return Some(((ranks, false), params));
        }
        let actual = path.get(idx)?;
        if let Some(name) = segment.strip_prefix(':') {
            params.push((name, (*actual).to_owned()));
            ranks.push(PARAM_RANK);
        } else if segment == actual {
            ranks.push(LITERAL_RANK);
        } else {
            return None;
        }
    }
    (pattern.len() == path.len()).then_some(((ranks, true), params))
}
