//! Integration tests for the check command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::gentags_cmd;

fn init_posts(temp: &TempDir) -> std::path::PathBuf {
    let posts = temp.path().join("pages").join("posts");
    fs::create_dir_all(&posts).unwrap();
    posts
}

#[test]
fn test_check_passes_on_valid_project() {
    let temp = TempDir::new().unwrap();
    let posts = init_posts(&temp);
    fs::write(posts.join("a.md"), "---\ntag: rust\n---\n").unwrap();

    gentags_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("检查通过"));
}

#[test]
fn test_check_fails_on_missing_posts_dir() {
    let temp = TempDir::new().unwrap();

    gentags_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("检查未通过"));
}

#[test]
fn test_check_warns_on_missing_tag_field() {
    let temp = TempDir::new().unwrap();
    let posts = init_posts(&temp);
    fs::write(posts.join("a.md"), "---\ndraft: false\n---\n").unwrap();

    gentags_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("缺少 tag"));
}

#[test]
fn test_check_fails_on_invalid_config() {
    let temp = TempDir::new().unwrap();
    init_posts(&temp);
    fs::write(temp.path().join("gentags.toml"), "posts_dir = [42]").unwrap();

    gentags_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("检查未通过"));
}

#[test]
fn test_check_fails_on_malformed_front_matter() {
    let temp = TempDir::new().unwrap();
    let posts = init_posts(&temp);
    fs::write(posts.join("bad.md"), "---\ntag: [unclosed\n---\n").unwrap();

    gentags_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("bad.md"));
}

#[test]
fn test_check_warns_on_empty_posts_dir() {
    let temp = TempDir::new().unwrap();
    init_posts(&temp);

    gentags_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("为空"));
}
