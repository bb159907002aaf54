//! 错误类型定义
//!
//! 提供扩展属性操作的错误类型。每个错误记录失败的系统调用、路径、
//! 属性名（去除命名空间前缀后）以及底层的 OS 错误。

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::consts::ENOATTR;

/// 扩展属性操作错误
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    op: &'static str,
    path: PathBuf,
    name: String,
    source: io::Error,
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// I/O 错误
    Io,
    /// 属性不存在
    NoAttribute,
    /// 路径不存在
    NotFound,
    /// 权限错误
    PermissionDenied,
    /// 无效参数（包括路径或名称中的 NUL 字节）
    InvalidInput,
    /// 空间或配额不足
    NoSpace,
    /// 文件系统不支持扩展属性
    Unsupported,
    /// 值过大或写入不完整
    TooBig,
    /// 只读文件系统
    ReadOnly,
}

impl ErrorKind {
    /// 根据 errno 推断错误类别
    pub fn from_raw_os_error(errno: i32) -> Self {
        match errno {
            e if e == ENOATTR => ErrorKind::NoAttribute,
            libc::ENOENT | libc::ENOTDIR => ErrorKind::NotFound,
            libc::EPERM | libc::EACCES => ErrorKind::PermissionDenied,
            libc::EINVAL | libc::ENAMETOOLONG => ErrorKind::InvalidInput,
            libc::ENOSPC | libc::EDQUOT => ErrorKind::NoSpace,
            libc::EOPNOTSUPP => ErrorKind::Unsupported,
            libc::E2BIG => ErrorKind::TooBig,
            libc::EROFS => ErrorKind::ReadOnly,
            _ => ErrorKind::Io,
        }
    }
}

impl Error {
    /// 包装一个系统调用返回的错误
    pub fn new(op: &'static str, path: &Path, name: impl Into<String>, source: io::Error) -> Self {
        let kind = match source.raw_os_error() {
            Some(errno) => ErrorKind::from_raw_os_error(errno),
            None if source.kind() == io::ErrorKind::InvalidInput => ErrorKind::InvalidInput,
            None => ErrorKind::Io,
        };
        Self {
            kind,
            op,
            path: path.to_path_buf(),
            name: name.into(),
            source,
        }
    }

    /// 由 errno 构造错误
    pub fn from_errno(op: &'static str, path: &Path, name: impl Into<String>, errno: i32) -> Self {
        Self::new(op, path, name, io::Error::from_raw_os_error(errno))
    }

    /// 获取错误类别
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 失败的系统调用名
    pub const fn op(&self) -> &'static str {
        self.op
    }

    /// 操作的路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 属性名（不含命名空间前缀；list 操作为空）
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 底层 errno（如果有）
    pub fn raw_os_error(&self) -> Option<i32> {
        self.source.raw_os_error()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}: {}", self.op, self.path.display(), self.name, self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = err.source.kind();
        io::Error::new(kind, err)
    }
}

/// Result 类型别名
pub type Result<T> = core::result::Result<T, Error>;
