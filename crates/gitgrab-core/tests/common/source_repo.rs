//! Throwaway upstream repositories for clone tests.

use std::path::{Path, PathBuf};

/// Initialises `root/name` with one commit holding `README.md` and returns its path.
pub fn create(root: &Path, name: &str, readme: &str) -> PathBuf {
    let path = root.join(name);
    let repo = git2::Repository::init(&path).expect("init source repo");
    std::fs::write(path.join("README.md"), readme).expect("write README");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new("README.md")).expect("stage README");
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    let sig = git2::Signature::now("git-grab tests", "tests@example.com").expect("signature");
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .expect("commit");

    path
}

/// `file://` URL for a local repository path.
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}
