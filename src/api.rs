//! xattr 公共 API
//!
//! [`Attrs`] 把一个路径和一个 [`ExtattrSys`] 后端绑定在一起，提供
//! get / list / set / remove 四个操作。读取类操作都采用“先查询大小，
//! 再按大小分配缓冲区读取”的两次调用模式。

use std::ffi::{CString, OsStr, OsString};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    list::decode_name_list,
    namespace::{parse_name, qualify, Namespace},
    sys::{ExtattrSys, Follow},
};

/// 绑定到单个路径的扩展属性句柄
///
/// # 示例
///
/// ```rust,ignore
/// use extattr_core::{Attrs, sys::Native};
///
/// let attrs = Attrs::new(Native, "/tmp/file");
/// attrs.set("user.author", b"Alice")?;
/// assert_eq!(attrs.get("user.author")?, b"Alice");
/// for name in attrs.list()? {
///     println!("{:?}", name);
/// }
/// attrs.remove("author")?; // 无前缀的名称属于 user 命名空间
/// ```
#[derive(Debug)]
pub struct Attrs<S> {
    sys: S,
    path: PathBuf,
    /// 路径含 NUL 字节时为 None，在每个操作中报告为 InvalidInput
    c_path: Option<CString>,
    follow: Follow,
}

impl<S: ExtattrSys> Attrs<S> {
    /// 创建句柄，默认跟随符号链接
    pub fn new(sys: S, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let c_path = CString::new(path.as_os_str().as_bytes()).ok();
        Self {
            sys,
            path,
            c_path,
            follow: Follow::Symlinks,
        }
    }

    /// 切换为作用于符号链接本身（`*_link` 系统调用）
    pub fn no_follow(mut self) -> Self {
        self.follow = Follow::NoFollow;
        self
    }

    /// 绑定的路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 路径解析方式
    pub fn follow(&self) -> Follow {
        self.follow
    }

    /// 读取属性值
    ///
    /// 属性值为空时不会发起第二次系统调用。两次调用之间属性值变短时，
    /// 返回实际读到的部分。
    pub fn get(&self, name: impl AsRef<OsStr>) -> Result<Vec<u8>> {
        let (namespace, name) = parse_name(name.as_ref());
        let op = self.follow.get_op();
        let (c_path, c_name) = self.c_args(op, name)?;

        // 1. 查询大小
        log::trace!("[XATTR] {} {} {:?} probe", op, self.path.display(), name);
        let size = self
            .sys
            .get(self.follow, c_path, namespace.as_raw(), &c_name, None)
            .map_err(|err| self.error(op, name, err))?;

        let mut buf = vec![0u8; size];
        if size == 0 {
            return Ok(buf);
        }

        // 2. 按大小读取
        log::trace!("[XATTR] {} {} {:?} fill size={}", op, self.path.display(), name, size);
        let read = self
            .sys
            .get(self.follow, c_path, namespace.as_raw(), &c_name, Some(buf.as_mut_slice()))
            .map_err(|err| self.error(op, name, err))?;
        buf.truncate(read);
        Ok(buf)
    }

    /// 列出所有属性名（含命名空间前缀）
    ///
    /// 先返回 user 命名空间的名称，再返回 system 命名空间的名称。
    /// 无权查看 system 命名空间（EPERM）时只返回 user 命名空间的名称。
    pub fn list(&self) -> Result<Vec<OsString>> {
        let user = self.list_namespace(Namespace::User)?;

        let system = match self.list_namespace(Namespace::System) {
            Ok(names) => names,
            Err(err) if err.raw_os_error() == Some(libc::EPERM) => {
                log::debug!(
                    "[XATTR] system namespace of {} not visible: {}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        let mut names = Vec::with_capacity(user.len() + system.len());
        names.extend(user.iter().map(|name| qualify(Namespace::User, name)));
        names.extend(system.iter().map(|name| qualify(Namespace::System, name)));
        Ok(names)
    }

    /// 列出单个命名空间中的属性名（不含前缀）
    pub fn list_namespace(&self, namespace: Namespace) -> Result<Vec<OsString>> {
        let op = self.follow.list_op();
        let empty = OsStr::new("");
        let c_path = self.c_path(op, empty)?;

        // 1. 查询大小
        log::trace!("[XATTR] {} {} ns={} probe", op, self.path.display(), namespace.as_raw());
        let size = self
            .sys
            .list(self.follow, c_path, namespace.as_raw(), None)
            .map_err(|err| self.error(op, empty, err))?;
        if size == 0 {
            return Ok(Vec::new());
        }

        // 2. 按大小读取并解码
        let mut buf = vec![0u8; size];
        let read = self
            .sys
            .list(self.follow, c_path, namespace.as_raw(), Some(buf.as_mut_slice()))
            .map_err(|err| self.error(op, empty, err))?;
        Ok(decode_name_list(&buf[..read.min(size)]))
    }

    /// 设置属性值
    ///
    /// 值为空时创建空值属性。写入字节数与值长度不一致时返回 E2BIG。
    pub fn set(&self, name: impl AsRef<OsStr>, value: &[u8]) -> Result<()> {
        let (namespace, name) = parse_name(name.as_ref());
        let op = self.follow.set_op();
        let (c_path, c_name) = self.c_args(op, name)?;

        log::trace!("[XATTR] {} {} {:?} len={}", op, self.path.display(), name, value.len());
        let written = self
            .sys
            .set(self.follow, c_path, namespace.as_raw(), &c_name, value)
            .map_err(|err| self.error(op, name, err))?;

        if written != value.len() {
            log::warn!(
                "[XATTR] {} {} {:?} short write: {}/{}",
                op,
                self.path.display(),
                name,
                written,
                value.len()
            );
            return Err(Error::from_errno(op, &self.path, name.to_string_lossy(), libc::E2BIG));
        }

        Ok(())
    }

    /// 删除属性
    pub fn remove(&self, name: impl AsRef<OsStr>) -> Result<()> {
        let (namespace, name) = parse_name(name.as_ref());
        let op = self.follow.delete_op();
        let (c_path, c_name) = self.c_args(op, name)?;

        log::trace!("[XATTR] {} {} {:?}", op, self.path.display(), name);
        self.sys
            .delete(self.follow, c_path, namespace.as_raw(), &c_name)
            .map_err(|err| self.error(op, name, err))
    }

    fn c_path(&self, op: &'static str, name: &OsStr) -> Result<&CString> {
        self.c_path.as_ref().ok_or_else(|| {
            self.error(
                op,
                name,
                io::Error::new(io::ErrorKind::InvalidInput, "path contains a nul byte"),
            )
        })
    }

    fn c_args(&self, op: &'static str, name: &OsStr) -> Result<(&CString, CString)> {
        let c_path = self.c_path(op, name)?;
        let c_name = CString::new(name.as_bytes()).map_err(|_| {
            self.error(
                op,
                name,
                io::Error::new(io::ErrorKind::InvalidInput, "attribute name contains a nul byte"),
            )
        })?;
        Ok((c_path, c_name))
    }

    fn error(&self, op: &'static str, name: &OsStr, err: io::Error) -> Error {
        Error::new(op, &self.path, name.to_string_lossy(), err)
    }
}
