//! extattr_core: BSD extattr 扩展属性库
//!
//! 基于 FreeBSD 的 `extattr_*` 系统调用族读写文件系统扩展属性，提供：
//! - **读取**属性值（[`get`]）
//! - **列出**属性名（[`list`]）
//! - **设置**属性值（[`set`]）
//! - **删除**属性（[`remove`]）
//!
//! 属性名使用 `user.` / `system.` 前缀选择命名空间，没有前缀的名称
//! 属于 user 命名空间。`*_link` 变体作用于符号链接本身。
//!
//! # 示例
//!
//! ```rust,ignore
//! use extattr_core::{self as xattr, Result};
//!
//! fn main() -> Result<()> {
//!     xattr::set("/tmp/file", "user.author", b"Alice")?;
//!     let value = xattr::get("/tmp/file", "user.author")?;
//!     assert_eq!(value, b"Alice");
//!
//!     for name in xattr::list("/tmp/file")? {
//!         println!("{}", name.to_string_lossy());
//!     }
//!
//!     xattr::remove("/tmp/file", "user.author")?;
//!     Ok(())
//! }
//! ```
//!
//! # 模块结构
//!
//! - [`error`] - 错误类型定义
//! - [`consts`] - 常量定义
//! - [`namespace`] - 命名空间前缀解析
//! - [`list`] - 属性名列表解码
//! - [`sys`] - 系统调用接口
//! - [`api`] - 绑定路径的属性句柄

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

/// 错误处理
pub mod error;

/// 常量定义
pub mod consts;

/// 命名空间
pub mod namespace;

/// 属性名列表
pub mod list;

/// 系统调用接口
pub mod sys;

/// 公共 API
pub mod api;

// ===== 公共导出 =====

pub use api::Attrs;
pub use error::{Error, ErrorKind, Result};
pub use namespace::Namespace;
pub use sys::{ExtattrSys, Follow};

#[cfg(target_os = "freebsd")]
pub use sys::Native;

#[cfg(target_os = "freebsd")]
mod native_api {
    use std::ffi::{OsStr, OsString};
    use std::path::Path;

    use crate::{api::Attrs, error::Result, sys::Native};

    /// 读取 `path` 上名为 `name` 的属性值
    pub fn get<P: AsRef<Path>, N: AsRef<OsStr>>(path: P, name: N) -> Result<Vec<u8>> {
        Attrs::new(Native, path).get(name)
    }

    /// 列出 `path` 上的所有属性名
    ///
    /// 返回的名称都带有 `user.` 或 `system.` 前缀。
    pub fn list<P: AsRef<Path>>(path: P) -> Result<Vec<OsString>> {
        Attrs::new(Native, path).list()
    }

    /// 设置 `path` 上名为 `name` 的属性值
    pub fn set<P: AsRef<Path>, N: AsRef<OsStr>>(path: P, name: N, value: &[u8]) -> Result<()> {
        Attrs::new(Native, path).set(name, value)
    }

    /// 删除 `path` 上名为 `name` 的属性
    pub fn remove<P: AsRef<Path>, N: AsRef<OsStr>>(path: P, name: N) -> Result<()> {
        Attrs::new(Native, path).remove(name)
    }

    /// 同 [`get`]，但不跟随符号链接
    pub fn get_link<P: AsRef<Path>, N: AsRef<OsStr>>(path: P, name: N) -> Result<Vec<u8>> {
        Attrs::new(Native, path).no_follow().get(name)
    }

    /// 同 [`list`]，但不跟随符号链接
    pub fn list_link<P: AsRef<Path>>(path: P) -> Result<Vec<OsString>> {
        Attrs::new(Native, path).no_follow().list()
    }

    /// 同 [`set`]，但不跟随符号链接
    pub fn set_link<P: AsRef<Path>, N: AsRef<OsStr>>(path: P, name: N, value: &[u8]) -> Result<()> {
        Attrs::new(Native, path).no_follow().set(name, value)
    }

    /// 同 [`remove`]，但不跟随符号链接
    pub fn remove_link<P: AsRef<Path>, N: AsRef<OsStr>>(path: P, name: N) -> Result<()> {
        Attrs::new(Native, path).no_follow().remove(name)
    }
}

#[cfg(target_os = "freebsd")]
pub use native_api::{get, get_link, list, list_link, remove, remove_link, set, set_link};
