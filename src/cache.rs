//! Last-known project root paths.
use crate::delta::ProjectHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Tracks the last-known root path of each open project.
///
/// This should ONLY be used to determine the location of a project that has
/// been deleted; in that scenario the host no longer reports a location, so
/// the root observed while the project was live is the only evidence left.
///
/// Entries are overwritten opportunistically whenever a live project is seen
/// and are never expired; they only leave the map through [`remove`](Self::remove).
#[derive(Debug, Default)]
pub struct ProjectPathCache {
    projects: Mutex<HashMap<String, PathBuf>>,
}

impl ProjectPathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded root path of the named project.
    pub fn lookup(&self, name: &str) -> Option<PathBuf> {
        let projects = self.projects.lock().unwrap();
        projects.get(name).cloned()
    }

    /// Record the project's current root path, overwriting any previous
    /// entry. Ignored if the handle does not resolve to a name and path.
    pub fn update(&self, project: &ProjectHandle) {
        if project.name().is_empty() {
            return;
        }

        let Some(location) = project.location() else {
            return;
        };

        let location = location.to_path_buf();
        let mut projects = self.projects.lock().unwrap();
        projects.insert(project.name().to_string(), location);
    }

    /// Forget the named project.
    pub fn remove(&self, name: &str) {
        let mut projects = self.projects.lock().unwrap();
        projects.remove(name);
    }
}

#[cfg(test)]
#[path = "./cache_test.rs"]
mod cache_test;
