//! End-to-end project lifecycle scenarios against a real directory.
use crossbeam::channel::{unbounded, Receiver};
use std::fs;
use std::path::{Path, PathBuf};
use workbench_fs_bridge::delta::{
    DeltaFlags, DeltaKind, ProjectHandle, Resource, ResourceDelta, ResourceKind,
};
use workbench_fs_bridge::{ChangeEntry, ChangeKind, ResourceChangeListener};

const NO_FLAGS: DeltaFlags = DeltaFlags {
    content: false,
    replaced: false,
    markers: false,
};

fn project_node(kind: DeltaKind, project: &ProjectHandle) -> ResourceDelta {
    ResourceDelta::new(
        kind,
        NO_FLAGS,
        Some(Resource::new(
            ResourceKind::Project,
            project.location().map(Path::to_path_buf),
            Some(project.clone()),
        )),
    )
}

fn file_node(kind: DeltaKind, path: PathBuf, project: &ProjectHandle) -> ResourceDelta {
    ResourceDelta::new(
        kind,
        NO_FLAGS,
        Some(Resource::new(
            ResourceKind::File,
            Some(path),
            Some(project.clone()),
        )),
    )
}

fn recv(rx: &Receiver<Vec<ChangeEntry>>) -> Vec<ChangeEntry> {
    rx.try_recv().expect("changes should have been forwarded")
}

#[test_log::test]
fn project_closed_without_disk_deletion_should_stay_silent() {
    // setup
    let ws = tempfile::tempdir().expect("tempdir should work");
    let root = ws.path().join("foo");
    fs::create_dir(&root).expect("create project dir should work");

    let (tx, rx) = unbounded();
    let listener = ResourceChangeListener::new(tx);

    // the project appears in the workspace
    let foo = ProjectHandle::new("foo", Some(root.clone()));
    listener.resource_changed(Ok(Some(project_node(DeltaKind::Added, &foo))));

    let entries = recv(&rx);
    assert_eq!(
        entries,
        vec![ChangeEntry {
            path: root.clone(),
            kind: ChangeKind::Create,
            is_directory: true,
            project: "foo".into(),
        }]
    );

    // a file is added under the project root
    let file = root.join("a.txt");
    fs::write(&file, "a").expect("write should work");
    listener.resource_changed(Ok(Some(
        project_node(DeltaKind::Changed, &foo).with_children(vec![file_node(
            DeltaKind::Added,
            file.clone(),
            &foo,
        )]),
    )));

    let entries = recv(&rx);
    assert_eq!(entries.len(), 1, "container touch must not be reported");
    assert_eq!(entries[0].path, file);
    assert_eq!(entries[0].kind, ChangeKind::Create);

    // the project is closed out of the workspace; its files stay on disk
    let closed = ProjectHandle::new("foo", None);
    listener.resource_changed(Ok(Some(project_node(DeltaKind::Removed, &closed))));

    let entries = recv(&rx);
    assert!(
        entries.is_empty(),
        "workspace removal must not be reported as a deletion: {entries:?}"
    );
    assert!(root.exists(), "files must be untouched");
}

#[test_log::test]
fn project_deleted_from_disk_should_be_reported() {
    // setup
    let ws = tempfile::tempdir().expect("tempdir should work");
    let root = ws.path().join("bar");
    fs::create_dir(&root).expect("create project dir should work");

    let (tx, rx) = unbounded();
    let listener = ResourceChangeListener::new(tx);

    let bar = ProjectHandle::new("bar", Some(root.clone()));
    listener.resource_changed(Ok(Some(project_node(DeltaKind::Added, &bar))));
    let _ = recv(&rx);

    // the project is deleted from disk entirely; by the time the delta
    // arrives the handle no longer reports a location
    fs::remove_dir_all(&root).expect("remove project dir should work");

    let deleted = ProjectHandle::new("bar", None);
    listener.resource_changed(Ok(Some(project_node(DeltaKind::Removed, &deleted))));

    let entries = recv(&rx);
    assert_eq!(
        entries,
        vec![ChangeEntry {
            path: root,
            kind: ChangeKind::Delete,
            is_directory: true,
            project: "bar".into(),
        }]
    );
}

#[test_log::test]
fn connection_can_evict_projects_that_are_gone_for_good() {
    // setup
    let ws = tempfile::tempdir().expect("tempdir should work");
    let root = ws.path().join("baz");
    fs::create_dir(&root).expect("create project dir should work");

    let (tx, rx) = unbounded();
    let listener = ResourceChangeListener::new(tx);

    let baz = ProjectHandle::new("baz", Some(root.clone()));
    listener.resource_changed(Ok(Some(project_node(DeltaKind::Added, &baz))));
    let _ = recv(&rx);

    // once the connection decides the project is gone for good, a later
    // delete-kind delta has nothing to resolve against
    listener.project_paths().remove("baz");
    fs::remove_dir_all(&root).expect("remove project dir should work");

    let deleted = ProjectHandle::new("baz", None);
    listener.resource_changed(Ok(Some(project_node(DeltaKind::Removed, &deleted))));

    let entries = recv(&rx);
    assert!(entries.is_empty(), "evicted project should not resolve");
}
