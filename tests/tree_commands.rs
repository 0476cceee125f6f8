use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{bit_output, init_repository_dir, repository_dir, run_bit_command};

#[rstest]
fn list_tree_names_of_work_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let root = bit_output(repository_dir.path(), &["write-tree"]);
    let names = bit_output(repository_dir.path(), &["ls-tree", "--name-only", &root]);

    assert_eq!(names, "1.txt\na");

    Ok(())
}

#[rstest]
fn list_tree_entries_of_work_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let root = bit_output(repository_dir.path(), &["write-tree"]);
    let root_listing = bit_output(repository_dir.path(), &["ls-tree", &root]);
    let lines = root_listing.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "100644 blob 43dd47ea691c90a5fa7827892c70241913351963\t1.txt"
    );
    assert!(lines[1].starts_with("040000 tree "));
    assert!(lines[1].ends_with("\ta"));

    let subtree = &lines[1]["040000 tree ".len().."040000 tree ".len() + 40];
    let sub_listing = bit_output(repository_dir.path(), &["ls-tree", subtree]);

    assert!(sub_listing.starts_with(
        "100644 blob 64c5e5885a4b06010b3a0c20edb7900dd0311025\t2.txt\n040000 tree "
    ));
    assert!(sub_listing.ends_with("\tb"));

    Ok(())
}

#[rstest]
fn cat_file_prints_tree_entries(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let root = bit_output(repository_dir.path(), &["write-tree"]);

    let cat_file = bit_output(repository_dir.path(), &["cat-file", "-p", &root]);
    let ls_tree = bit_output(repository_dir.path(), &["ls-tree", &root]);

    assert_eq!(cat_file, ls_tree);

    Ok(())
}

#[rstest]
fn write_tree_is_deterministic(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let first = bit_output(repository_dir.path(), &["write-tree"]);
    let second = bit_output(repository_dir.path(), &["write-tree"]);

    assert_eq!(first, second);

    Ok(())
}

#[rstest]
fn list_tree_names_sorted_bytewise(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_bit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    for name in ["zeta.txt", "Alpha.txt", "beta.txt", "_under.txt"] {
        repository_dir.child(name).write_str(name)?;
    }

    let root = bit_output(repository_dir.path(), &["write-tree"]);
    let names = bit_output(repository_dir.path(), &["ls-tree", "--name-only", &root]);

    assert_eq!(names, "Alpha.txt\n_under.txt\nbeta.txt\nzeta.txt");

    Ok(())
}

#[rstest]
fn list_generated_files(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_bit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let files = common::file::write_generated_files(repository_dir.path(), 8);

    let root = bit_output(repository_dir.path(), &["write-tree"]);
    let names = bit_output(repository_dir.path(), &["ls-tree", "--name-only", &root]);

    let expected = files
        .iter()
        .filter_map(|file| file.path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(names, expected);

    Ok(())
}

#[rstest]
fn list_tree_of_blob_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_bit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    repository_dir.child("file.txt").write_str("content")?;
    let oid = bit_output(repository_dir.path(), &["hash-object", "-w", "file.txt"]);

    run_bit_command(repository_dir.path(), &["ls-tree", "--name-only", &oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a tree"));

    Ok(())
}

#[rstest]
fn list_empty_tree(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_bit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let root = bit_output(repository_dir.path(), &["write-tree"]);
    assert_eq!(root, "4b825dc642cb6eb9a060e54bf8d69288fbee4904");

    run_bit_command(repository_dir.path(), &["ls-tree", &root])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
