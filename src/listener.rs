//! Workbench resource-change listener.
use crate::cache::ProjectPathCache;
use crate::delta::{DeltaKind, DeltaResult, ProjectHandle, Resource, ResourceDelta, ResourceKind};
use crate::event::{ChangeEntry, ChangeKind};
use crossbeam::channel::Sender;
use std::path::PathBuf;

/// Converts workbench resource deltas into [`ChangeEntry`] lists for the
/// daemon connection.
///
/// One instance should exist per daemon connection. The listener owns the
/// [`ProjectPathCache`] so deletions can still be resolved to a path after
/// the host's own project handle stops reporting one.
pub struct ResourceChangeListener {
    /// Sends translated changes to the daemon connection.
    changes_tx: Sender<Vec<ChangeEntry>>,

    project_paths: ProjectPathCache,
}

impl ResourceChangeListener {
    pub fn new(changes_tx: Sender<Vec<ChangeEntry>>) -> Self {
        Self {
            changes_tx,
            project_paths: ProjectPathCache::new(),
        }
    }

    /// Last-known project root paths.
    /// Exposed so the connection can evict projects that are gone for good.
    pub fn project_paths(&self) -> &ProjectPathCache {
        &self.project_paths
    }

    /// Handle one resource-change notification from the host.
    ///
    /// A notification without a delta, or whose delta could not be fully
    /// traversed, is forwarded as an empty change list. This never panics;
    /// the listener must stay registered for subsequent events.
    pub fn resource_changed(&self, delta: DeltaResult) {
        let entries = match delta {
            Ok(Some(root)) => self.translate(&root),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::error!(?err, "could not traverse resource delta");
                Vec::new()
            }
        };

        if let Err(err) = self.changes_tx.send(entries) {
            tracing::error!(?err, "change consumer disconnected");
        }
    }

    /// Convert a delta tree into change entries, in visitation order.
    fn translate(&self, root: &ResourceDelta) -> Vec<ChangeEntry> {
        let mut entries = Vec::new();
        self.visit(root, &mut entries);
        entries
    }

    /// Depth-first walk.
    /// Every node is visited, including those below nodes that were filtered
    /// out.
    fn visit(&self, delta: &ResourceDelta, entries: &mut Vec<ChangeEntry>) {
        if let Some(entry) = self.convert_node(delta) {
            entries.push(entry);
        }

        for child in delta.children() {
            self.visit(child, entries);
        }
    }

    /// Classify, filter, and resolve a single node.
    ///
    /// # Returns
    /// `None` for nodes that should not be reported.
    fn convert_node(&self, delta: &ResourceDelta) -> Option<ChangeEntry> {
        let resource = delta.resource()?;

        if resource.kind() == ResourceKind::Project {
            if let Some(project) = resource.project() {
                self.project_paths.update(project);
            }
        }

        // Exclude a parent folder or project marked changed only because a
        // descendant changed.
        if delta.kind() == DeltaKind::Changed && delta.flags().is_empty() {
            return None;
        }

        let kind = match delta.kind() {
            DeltaKind::Added => ChangeKind::Create,
            DeltaKind::Removed => ChangeKind::Delete,
            DeltaKind::Changed => ChangeKind::Modify,

            // Ignore any unrecognized kinds, phantoms included.
            _ => return None,
        };

        if kind == ChangeKind::Modify {
            let flags = delta.flags();
            if !flags.content && !flags.replaced {
                // Some workbench operations, such as toggling a debug
                // breakpoint, touch a resource without changing its contents.
                return None;
            }
        }

        // The resource itself was checked above, but some underlying
        // resources may not (or no longer) report an owning project, for
        // example on project deletion events.
        let project = resource.project()?;

        let path = self.resolve_path(kind, resource, project)?;

        Some(ChangeEntry {
            path,
            kind,
            is_directory: resource.is_container(),
            project: project.name().to_string(),
        })
    }

    /// Resolve the on-disk path of a changed resource.
    ///
    /// Deletions fall back to the project root and finally to the last path
    /// the project was seen at, since the deleted resource no longer has a
    /// location of its own.
    fn resolve_path(
        &self,
        kind: ChangeKind,
        resource: &Resource,
        project: &ProjectHandle,
    ) -> Option<PathBuf> {
        if let Some(location) = resource.location() {
            return Some(location.to_path_buf());
        }

        if kind != ChangeKind::Delete {
            return None;
        }

        if let Some(root) = project.location() {
            // Whole-project deletion: individual child paths are already
            // gone, but the project handle still knows its root.
            return Some(root.to_path_buf());
        }

        if resource.kind() != ResourceKind::Project {
            return None;
        }

        let Some(last_root) = self.project_paths.lookup(project.name()) else {
            tracing::debug!(
                project = project.name(),
                "no last known path for deleted project"
            );
            return None;
        };

        // Only communicate the deletion if the files no longer exist;
        // otherwise the project was merely removed from the workspace.
        if last_root.exists() {
            tracing::debug!(
                project = project.name(),
                path = ?last_root,
                "project removed from workspace, files still on disk"
            );
            return None;
        }

        Some(last_root)
    }
}

#[cfg(test)]
#[path = "./listener_test.rs"]
mod listener_test;
