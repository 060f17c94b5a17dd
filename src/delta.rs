//! Workbench resource deltas.
//!
//! The host delivers one delta tree per resource-change notification,
//! describing the diff between two states of its resource tree. The host's
//! own tree is not portable, so the bridge owns a plain data model that the
//! host adapter populates before handing it off.
use crate::error::Error;
use std::path::{Path, PathBuf};

/// One resource-change notification as delivered by the host.
///
/// `Ok(None)` for notifications that carry no delta.
/// `Err` when the host could not fully traverse its delta tree.
pub type DeltaResult = std::result::Result<Option<ResourceDelta>, Error>;

/// A node of the host's delta tree.
#[derive(Clone, Debug)]
pub struct ResourceDelta {
    kind: DeltaKind,
    flags: DeltaFlags,
    resource: Option<Resource>,
    children: Vec<ResourceDelta>,
}

impl ResourceDelta {
    pub fn new(kind: DeltaKind, flags: DeltaFlags, resource: Option<Resource>) -> Self {
        Self {
            kind,
            flags,
            resource,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ResourceDelta>) -> Self {
        self.children = children;
        self
    }

    pub fn kind(&self) -> DeltaKind {
        self.kind
    }

    pub fn flags(&self) -> &DeltaFlags {
        &self.flags
    }

    /// # Returns
    /// `None` if the underlying resource no longer has a backing object.
    pub fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    pub fn children(&self) -> &[ResourceDelta] {
        &self.children
    }
}

/// Classification of a single node's change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaKind {
    Added,
    Removed,
    Changed,

    /// A phantom resource appeared, e.g. around project open.
    AddedPhantom,

    /// A phantom resource vanished, e.g. around project close.
    RemovedPhantom,

    NoChange,
}

/// Sub-classification of a [`DeltaKind::Changed`] node.
///
/// A container is marked changed whenever a descendant changes; such nodes
/// carry no flags of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeltaFlags {
    /// The resource's content changed.
    pub content: bool,

    /// The resource was replaced by a different resource at the same path.
    pub replaced: bool,

    /// Only resource markers changed, e.g. a debug breakpoint.
    pub markers: bool,
}

impl DeltaFlags {
    pub fn is_empty(&self) -> bool {
        !(self.content || self.replaced || self.markers)
    }
}

/// A file, folder, or project in the host's workspace model.
#[derive(Clone, Debug)]
pub struct Resource {
    kind: ResourceKind,
    location: Option<PathBuf>,
    project: Option<ProjectHandle>,
}

impl Resource {
    pub fn new(
        kind: ResourceKind,
        location: Option<PathBuf>,
        project: Option<ProjectHandle>,
    ) -> Self {
        Self {
            kind,
            location,
            project,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Current on-disk location, if the host still knows one.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Owning project. A project resource owns itself.
    pub fn project(&self) -> Option<&ProjectHandle> {
        self.project.as_ref()
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ResourceKind::Folder | ResourceKind::Project)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    File,
    Folder,
    Project,
}

/// Handle to a project in the host's workspace model.
#[derive(Clone, Debug)]
pub struct ProjectHandle {
    name: String,
    location: Option<PathBuf>,
}

impl ProjectHandle {
    pub fn new(name: impl Into<String>, location: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root location of the project.
    ///
    /// # Returns
    /// `None` once the project has been deleted; the host stops reporting a
    /// location for deleted projects.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }
}
