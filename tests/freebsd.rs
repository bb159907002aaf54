//! 在真实文件系统上验证 extattr 系统调用
//!
//! 需要支持 user 命名空间扩展属性的文件系统（UFS2 / ZFS）。

#![cfg(target_os = "freebsd")]

use std::ffi::OsString;
use std::os::unix::fs::symlink;

use extattr_core::{self as xattr, ErrorKind};

#[test]
fn test_set_get_list_remove() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path();

    xattr::set(path, "user.author", b"Alice").unwrap();
    xattr::set(path, "comment", b"").unwrap();

    assert_eq!(xattr::get(path, "user.author").unwrap(), b"Alice");
    assert!(xattr::get(path, "user.comment").unwrap().is_empty());

    let mut names = xattr::list(path).unwrap();
    names.sort();
    assert_eq!(names, vec![OsString::from("user.author"), OsString::from("user.comment")]);

    xattr::remove(path, "author").unwrap();
    let err = xattr::get(path, "user.author").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoAttribute);
    assert_eq!(err.op(), "extattr_get_file");
}

#[test]
fn test_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing");

    let err = xattr::list(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.op(), "extattr_list_file");
}

#[test]
fn test_link_variants_do_not_follow() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target");
    std::fs::write(&target, b"data").unwrap();
    let link = dir.path().join("link");
    symlink(&target, &link).unwrap();

    xattr::set(&target, "user.t", b"1").unwrap();
    assert_eq!(xattr::get(&link, "user.t").unwrap(), b"1");

    let err = xattr::get_link(&link, "user.t").unwrap_err();
    assert_eq!(err.op(), "extattr_get_link");
}
