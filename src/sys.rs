//! extattr 系统调用接口
//!
//! [`ExtattrSys`] 抽象了 `extattr_{get,list,set,delete}_{file,link}` 系统调用族，
//! 上层的 [`Attrs`](crate::Attrs) 只通过这个 trait 访问内核。
//! FreeBSD 上由 [`Native`] 直接调用 libc 中的实现。

use std::ffi::CStr;
use std::io;

use libc::c_int;

/// 路径解析方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Follow {
    /// 跟随符号链接（`*_file` 系统调用）
    #[default]
    Symlinks,
    /// 作用于符号链接本身（`*_link` 系统调用）
    NoFollow,
}

impl Follow {
    /// 读取操作对应的系统调用名
    pub const fn get_op(self) -> &'static str {
        match self {
            Follow::Symlinks => "extattr_get_file",
            Follow::NoFollow => "extattr_get_link",
        }
    }

    /// 列表操作对应的系统调用名
    pub const fn list_op(self) -> &'static str {
        match self {
            Follow::Symlinks => "extattr_list_file",
            Follow::NoFollow => "extattr_list_link",
        }
    }

    /// 写入操作对应的系统调用名
    pub const fn set_op(self) -> &'static str {
        match self {
            Follow::Symlinks => "extattr_set_file",
            Follow::NoFollow => "extattr_set_link",
        }
    }

    /// 删除操作对应的系统调用名
    pub const fn delete_op(self) -> &'static str {
        match self {
            Follow::Symlinks => "extattr_delete_file",
            Follow::NoFollow => "extattr_delete_link",
        }
    }
}

/// extattr 系统调用接口
///
/// 实现此 trait 以提供底层扩展属性访问。所有方法返回的错误都应携带 errno。
///
/// # 示例
///
/// ```rust,ignore
/// use extattr_core::sys::{ExtattrSys, Follow};
///
/// struct MySys;
///
/// impl ExtattrSys for MySys {
///     fn get(&self, follow: Follow, path: &CStr, namespace: c_int, name: &CStr,
///            buf: Option<&mut [u8]>) -> io::Result<usize> {
///         // buf 为 None 时只返回属性值大小
///         Ok(0)
///     }
///     // ...
/// }
/// ```
pub trait ExtattrSys {
    /// 读取属性值
    ///
    /// `buf` 为 `None` 时只查询值的大小；否则最多读取 `buf.len()` 字节，
    /// 返回实际读取的字节数。
    fn get(
        &self,
        follow: Follow,
        path: &CStr,
        namespace: c_int,
        name: &CStr,
        buf: Option<&mut [u8]>,
    ) -> io::Result<usize>;

    /// 列出命名空间中的属性名
    ///
    /// `buf` 为 `None` 时只查询列表大小；否则返回写入的字节数。
    /// 列表格式见 [`crate::list`]。
    fn list(
        &self,
        follow: Follow,
        path: &CStr,
        namespace: c_int,
        buf: Option<&mut [u8]>,
    ) -> io::Result<usize>;

    /// 写入属性值，返回写入的字节数
    fn set(
        &self,
        follow: Follow,
        path: &CStr,
        namespace: c_int,
        name: &CStr,
        data: &[u8],
    ) -> io::Result<usize>;

    /// 删除属性
    fn delete(&self, follow: Follow, path: &CStr, namespace: c_int, name: &CStr) -> io::Result<()>;
}

impl<S: ExtattrSys + ?Sized> ExtattrSys for &S {
    fn get(
        &self,
        follow: Follow,
        path: &CStr,
        namespace: c_int,
        name: &CStr,
        buf: Option<&mut [u8]>,
    ) -> io::Result<usize> {
        (**self).get(follow, path, namespace, name, buf)
    }

    fn list(
        &self,
        follow: Follow,
        path: &CStr,
        namespace: c_int,
        buf: Option<&mut [u8]>,
    ) -> io::Result<usize> {
        (**self).list(follow, path, namespace, buf)
    }

    fn set(
        &self,
        follow: Follow,
        path: &CStr,
        namespace: c_int,
        name: &CStr,
        data: &[u8],
    ) -> io::Result<usize> {
        (**self).set(follow, path, namespace, name, data)
    }

    fn delete(&self, follow: Follow, path: &CStr, namespace: c_int, name: &CStr) -> io::Result<()> {
        (**self).delete(follow, path, namespace, name)
    }
}

#[cfg(target_os = "freebsd")]
pub use native::Native;

#[cfg(target_os = "freebsd")]
mod native {
    use std::ffi::CStr;
    use std::io;
    use std::ptr;

    use libc::{c_char, c_int, c_void, size_t, ssize_t};

    use super::{ExtattrSys, Follow};

    extern "C" {
        fn extattr_get_file(
            path: *const c_char,
            attrnamespace: c_int,
            attrname: *const c_char,
            data: *mut c_void,
            nbytes: size_t,
        ) -> ssize_t;
        fn extattr_get_link(
            path: *const c_char,
            attrnamespace: c_int,
            attrname: *const c_char,
            data: *mut c_void,
            nbytes: size_t,
        ) -> ssize_t;
        fn extattr_set_file(
            path: *const c_char,
            attrnamespace: c_int,
            attrname: *const c_char,
            data: *const c_void,
            nbytes: size_t,
        ) -> ssize_t;
        fn extattr_set_link(
            path: *const c_char,
            attrnamespace: c_int,
            attrname: *const c_char,
            data: *const c_void,
            nbytes: size_t,
        ) -> ssize_t;
        fn extattr_delete_file(
            path: *const c_char,
            attrnamespace: c_int,
            attrname: *const c_char,
        ) -> c_int;
        fn extattr_delete_link(
            path: *const c_char,
            attrnamespace: c_int,
            attrname: *const c_char,
        ) -> c_int;
        fn extattr_list_file(
            path: *const c_char,
            attrnamespace: c_int,
            data: *mut c_void,
            nbytes: size_t,
        ) -> ssize_t;
        fn extattr_list_link(
            path: *const c_char,
            attrnamespace: c_int,
            data: *mut c_void,
            nbytes: size_t,
        ) -> ssize_t;
    }

    /// FreeBSD 原生 extattr 系统调用
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Native;

    fn check(ret: ssize_t) -> io::Result<usize> {
        if ret < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(ret as usize)
        }
    }

    fn out_buf(buf: Option<&mut [u8]>) -> (*mut c_void, size_t) {
        match buf {
            Some(buf) => (buf.as_mut_ptr().cast(), buf.len()),
            None => (ptr::null_mut(), 0),
        }
    }

    impl ExtattrSys for Native {
        fn get(
            &self,
            follow: Follow,
            path: &CStr,
            namespace: c_int,
            name: &CStr,
            buf: Option<&mut [u8]>,
        ) -> io::Result<usize> {
            let (data, nbytes) = out_buf(buf);
            // SAFETY: path 和 name 以 NUL 结尾；data 为空或指向 nbytes 字节的可写内存
            let ret = unsafe {
                match follow {
                    Follow::Symlinks => {
                        extattr_get_file(path.as_ptr(), namespace, name.as_ptr(), data, nbytes)
                    }
                    Follow::NoFollow => {
                        extattr_get_link(path.as_ptr(), namespace, name.as_ptr(), data, nbytes)
                    }
                }
            };
            check(ret)
        }

        fn list(
            &self,
            follow: Follow,
            path: &CStr,
            namespace: c_int,
            buf: Option<&mut [u8]>,
        ) -> io::Result<usize> {
            let (data, nbytes) = out_buf(buf);
            // SAFETY: 同上
            let ret = unsafe {
                match follow {
                    Follow::Symlinks => extattr_list_file(path.as_ptr(), namespace, data, nbytes),
                    Follow::NoFollow => extattr_list_link(path.as_ptr(), namespace, data, nbytes),
                }
            };
            check(ret)
        }

        fn set(
            &self,
            follow: Follow,
            path: &CStr,
            namespace: c_int,
            name: &CStr,
            data: &[u8],
        ) -> io::Result<usize> {
            let ptr: *const c_void = data.as_ptr().cast();
            // SAFETY: data 指向 data.len() 字节的可读内存（空切片时长度为 0）
            let ret = unsafe {
                match follow {
                    Follow::Symlinks => {
                        extattr_set_file(path.as_ptr(), namespace, name.as_ptr(), ptr, data.len())
                    }
                    Follow::NoFollow => {
                        extattr_set_link(path.as_ptr(), namespace, name.as_ptr(), ptr, data.len())
                    }
                }
            };
            check(ret)
        }

        fn delete(
            &self,
            follow: Follow,
            path: &CStr,
            namespace: c_int,
            name: &CStr,
        ) -> io::Result<()> {
            // SAFETY: path 和 name 以 NUL 结尾
            let ret = unsafe {
                match follow {
                    Follow::Symlinks => extattr_delete_file(path.as_ptr(), namespace, name.as_ptr()),
                    Follow::NoFollow => extattr_delete_link(path.as_ptr(), namespace, name.as_ptr()),
                }
            };
            check(ret as ssize_t).map(|_| ())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_op_names() {
        assert_eq!(Follow::default(), Follow::Symlinks);
        assert_eq!(Follow::Symlinks.get_op(), "extattr_get_file");
        assert_eq!(Follow::Symlinks.list_op(), "extattr_list_file");
        assert_eq!(Follow::NoFollow.set_op(), "extattr_set_link");
        assert_eq!(Follow::NoFollow.delete_op(), "extattr_delete_link");
    }
}
