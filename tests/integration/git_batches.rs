//! Batch committer against a temporary repository with a bare remote.

use super::test_utils::{git, TestRepo};
use playgen::vcs::{Batch, BatchCommitter, GitCli, VersionControl};
use std::fs;

#[test]
fn test_flush_stages_only_batch_files() {
    let repo = TestRepo::new();
    let lesson = repo.add_lesson("php", "arrays.mdx", "# Arrays\n");
    fs::write(&lesson, "# Arrays\n\n## Interactive Example\n\n<Sandpack />\n").unwrap();
    fs::write(repo.root().join("notes.txt"), "scratch\n").unwrap();

    let vcs = GitCli::new(repo.root(), "origin", "main");
    let committer = BatchCommitter::new(&vcs, "feat: add Sandpack playgrounds");
    let mut batch = Batch::new(10);
    batch.push(lesson.clone());

    let outcome = committer.flush(&mut batch, "php");

    assert!(outcome.committed);
    assert!(outcome.pushed);
    assert_eq!(
        repo.remote_subjects()[0],
        "feat: add Sandpack playgrounds - php batch 1 (1 lessons)"
    );
    assert_eq!(
        git(repo.root(), &["status", "--porcelain"]),
        "?? notes.txt"
    );
    assert_eq!(batch.number(), 2);
}

#[test]
fn test_push_failure_keeps_local_commit() {
    let repo = TestRepo::new();
    let lesson = repo.add_lesson("css", "grid.mdx", "# Grid\n");
    fs::write(&lesson, "# Grid\n\n<Sandpack />\n").unwrap();
    git(repo.root(), &["remote", "set-url", "origin", "/nonexistent/remote.git"]);

    let vcs = GitCli::new(repo.root(), "origin", "main");
    let committer = BatchCommitter::new(&vcs, "feat");
    let mut batch = Batch::new(1);
    batch.push(lesson);

    let outcome = committer.flush(&mut batch, "css");

    assert!(outcome.committed);
    assert!(!outcome.pushed);
    assert_eq!(
        git(repo.root(), &["log", "-1", "--format=%s"]),
        "feat - css batch 1 (1 lessons)"
    );
    assert!(!committer.push());
}

#[test]
fn test_commit_without_changes_is_reported() {
    let repo = TestRepo::new();
    let lesson = repo.add_lesson("html", "tables.mdx", "# Tables\n");

    let vcs = GitCli::new(repo.root(), "origin", "main");
    vcs.stage(&[lesson]).unwrap();
    assert!(vcs.commit("nothing changed").is_err());

    let committer = BatchCommitter::new(&vcs, "feat");
    let mut batch = Batch::new(10);
    batch.push(repo.pages().join("html").join("tables.mdx"));
    let outcome = committer.flush(&mut batch, "html");
    assert!(!outcome.committed);
    assert!(!outcome.pushed);
}
