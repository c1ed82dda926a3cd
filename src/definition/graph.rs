//! Traversal and edits over the page graph.
//!
//! Pages are nodes, `next` entries are edges. The graph may contain cycles, and
//! edges to paths with no page are dead: traversal ignores them, strict edits
//! reject them.

use super::lookup::require_page_index;
use super::types::{FormDefinition, Link, LinkOptions};
use crate::error::DefinitionError;
use ahash::{AHashMap, AHashSet};
use std::borrow::Cow;
use tracing::debug;

/// Returns the pages on a route to `target_path`, ending with the target itself.
///
/// Walks backwards from the target. Parents are visited in page order and each
/// parent's ancestry is placed in front of the route built so far, so for
/// `/1 -> /2, /3; /2 -> /4; /3 -> /4` the route to `/4` is
/// `["/3", "/1", "/2", "/4"]`. Every path is visited at most once.
pub fn find_paths_to(definition: &FormDefinition, target_path: &str) -> Vec<String> {
    if target_path.is_empty() || definition.pages.is_empty() {
        return Vec::new();
    }

    let mut parents: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for page in &definition.pages {
        for link in &page.next {
            let entry = parents.entry(link.path.as_str()).or_default();
            if !entry.contains(&page.path.as_str()) {
                entry.push(page.path.as_str());
            }
        }
    }

    let mut visited = AHashSet::new();
    let route = walk_back(target_path, &parents, &mut visited);
    debug!(
        page = target_path,
        visited = visited.len(),
        "resolved paths to page"
    );
    route.into_iter().map(str::to_string).collect()
}

fn walk_back<'a>(
    path: &'a str,
    parents: &AHashMap<&'a str, Vec<&'a str>>,
    visited: &mut AHashSet<&'a str>,
) -> Vec<&'a str> {
    visited.insert(path);
    let mut route = vec![path];
    for &parent in parents.get(path).into_iter().flatten() {
        if visited.contains(parent) {
            continue;
        }
        let mut ancestry = walk_back(parent, parents, visited);
        ancestry.append(&mut route);
        route = ancestry;
    }
    route
}

/// Adds a `from -> to` link.
///
/// Returns the input untouched (`Cow::Borrowed`) when the link already exists,
/// so callers can detect the no-op by reference; otherwise an edited copy.
pub fn add_link<'a>(
    definition: &'a FormDefinition,
    from: &str,
    to: &str,
    options: LinkOptions,
) -> Result<Cow<'a, FormDefinition>, DefinitionError> {
    let from_index = require_page_index(definition, from)?;
    require_page_index(definition, to)?;

    if from == to {
        return Err(DefinitionError::SelfLink);
    }

    if definition.pages[from_index].links_to(to) {
        debug!(from, to, "link already exists");
        return Ok(Cow::Borrowed(definition));
    }

    let mut updated = definition.clone();
    updated.pages[from_index].next.push(Link {
        path: to.to_string(),
        condition: options.condition,
        redirect: options.redirect,
    });
    debug!(from, to, "added link");
    Ok(Cow::Owned(updated))
}

/// Sets or clears the condition on an existing `from -> to` link.
pub fn update_link<'a>(
    definition: &'a FormDefinition,
    from: &str,
    to: &str,
    condition: Option<&str>,
) -> Result<Cow<'a, FormDefinition>, DefinitionError> {
    let from_index = require_page_index(definition, from)?;
    require_page_index(definition, to)?;

    let link_index = definition.pages[from_index]
        .next
        .iter()
        .position(|link| link.path == to)
        .ok_or_else(|| DefinitionError::LinkNotFound {
            from: from.to_string(),
            to: to.to_string(),
        })?;

    if definition.pages[from_index].next[link_index].condition.as_deref() == condition {
        return Ok(Cow::Borrowed(definition));
    }

    let mut updated = definition.clone();
    updated.pages[from_index].next[link_index].condition = condition.map(str::to_string);
    Ok(Cow::Owned(updated))
}

/// Removes the `from -> to` link.
pub fn delete_link(
    definition: &FormDefinition,
    from: &str,
    to: &str,
) -> Result<FormDefinition, DefinitionError> {
    let from_index = require_page_index(definition, from)?;
    if !definition.pages[from_index].links_to(to) {
        return Err(DefinitionError::LinkNotFound {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let mut updated = definition.clone();
    updated.pages[from_index].next.retain(|link| link.path != to);
    Ok(updated)
}

/// Renames `old_path` to `new_path` on the page itself, on every link and on
/// the start page.
pub fn update_links_to(
    definition: &FormDefinition,
    old_path: &str,
    new_path: &str,
) -> FormDefinition {
    let mut updated = definition.clone();
    let mut rewritten = 0usize;

    for page in &mut updated.pages {
        if page.path == old_path {
            page.path = new_path.to_string();
        }
        for link in page.next.iter_mut().filter(|link| link.path == old_path) {
            link.path = new_path.to_string();
            rewritten += 1;
        }
    }

    if updated.start_page.as_deref() == Some(old_path) {
        updated.start_page = Some(new_path.to_string());
    }

    debug!(old_path, new_path, rewritten, "updated links to page");
    updated
}
