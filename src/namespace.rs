//! extattr 命名空间前缀处理
//!
//! 属性名以 "user." 或 "system." 开头时选择对应的命名空间，
//! 其余名称都视为 user 命名空间中的属性名。

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

use libc::c_int;

use crate::consts::*;

/// extattr 命名空间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// 用户命名空间
    User,
    /// 系统命名空间（通常只有特权用户可访问）
    System,
}

/// 命名空间前缀表条目
struct NamespacePrefix {
    prefix: &'static str,
    namespace: Namespace,
}

/// 命名空间前缀表
static PREFIX_TABLE: &[NamespacePrefix] = &[
    NamespacePrefix {
        prefix: EXTATTR_USER_PREFIX,
        namespace: Namespace::User,
    },
    NamespacePrefix {
        prefix: EXTATTR_SYSTEM_PREFIX,
        namespace: Namespace::System,
    },
];

impl Namespace {
    /// 传给系统调用的命名空间标识符
    pub const fn as_raw(self) -> c_int {
        match self {
            Namespace::User => EXTATTR_NAMESPACE_USER,
            Namespace::System => EXTATTR_NAMESPACE_SYSTEM,
        }
    }

    /// 由系统调用的命名空间标识符构造
    pub const fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            EXTATTR_NAMESPACE_USER => Some(Namespace::User),
            EXTATTR_NAMESPACE_SYSTEM => Some(Namespace::System),
            _ => None,
        }
    }

    /// 命名空间前缀（如 "user."）
    pub fn prefix(self) -> &'static str {
        PREFIX_TABLE
            .iter()
            .find(|entry| entry.namespace == self)
            .map(|entry| entry.prefix)
            .unwrap_or(EXTATTR_USER_PREFIX)
    }
}

/// 从完整属性名中解析命名空间并去除前缀
///
/// # 参数
///
/// * `full_name` - 完整的属性名（如 "user.comment"）
///
/// # 返回
///
/// 返回 (namespace, name)。没有可识别前缀的名称原样返回，
/// 命名空间为 [`Namespace::User`]。
///
/// # 示例
///
/// ```
/// use std::ffi::OsStr;
/// use extattr_core::namespace::{parse_name, Namespace};
///
/// assert_eq!(parse_name(OsStr::new("system.md5")), (Namespace::System, OsStr::new("md5")));
/// assert_eq!(parse_name(OsStr::new("comment")), (Namespace::User, OsStr::new("comment")));
/// ```
pub fn parse_name(full_name: &OsStr) -> (Namespace, &OsStr) {
    let bytes = full_name.as_bytes();

    for entry in PREFIX_TABLE {
        if let Some(rest) = bytes.strip_prefix(entry.prefix.as_bytes()) {
            return (entry.namespace, OsStr::from_bytes(rest));
        }
    }

    (Namespace::User, full_name)
}

/// 为去除前缀的属性名加上命名空间前缀
pub fn qualify(namespace: Namespace, name: &OsStr) -> OsString {
    let prefix = namespace.prefix().as_bytes();
    let mut full = Vec::with_capacity(prefix.len() + name.len());
    full.extend_from_slice(prefix);
    full.extend_from_slice(name.as_bytes());
    OsString::from_vec(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> (Namespace, &OsStr) {
        parse_name(OsStr::new(name))
    }

    #[test]
    fn test_parse_user() {
        assert_eq!(parse("user.comment"), (Namespace::User, OsStr::new("comment")));
    }

    #[test]
    fn test_parse_system() {
        assert_eq!(parse("system.md5"), (Namespace::System, OsStr::new("md5")));
    }

    #[test]
    fn test_parse_unprefixed_defaults_to_user() {
        assert_eq!(parse("comment"), (Namespace::User, OsStr::new("comment")));
        assert_eq!(parse("security.selinux"), (Namespace::User, OsStr::new("security.selinux")));
        // 前缀区分大小写
        assert_eq!(parse("USER.x"), (Namespace::User, OsStr::new("USER.x")));
    }

    #[test]
    fn test_parse_strips_only_once() {
        assert_eq!(parse("user.user.x"), (Namespace::User, OsStr::new("user.x")));
        assert_eq!(parse("system.user.x"), (Namespace::System, OsStr::new("user.x")));
    }

    #[test]
    fn test_parse_prefix_only() {
        assert_eq!(parse("user."), (Namespace::User, OsStr::new("")));
        assert_eq!(parse("system."), (Namespace::System, OsStr::new("")));
        assert_eq!(parse("system"), (Namespace::User, OsStr::new("system")));
    }

    #[test]
    fn test_parse_non_utf8() {
        let raw = OsStr::from_bytes(b"user.\xff\xfe");
        let (ns, name) = parse_name(raw);
        assert_eq!(ns, Namespace::User);
        assert_eq!(name.as_bytes(), b"\xff\xfe");
    }

    #[test]
    fn test_raw_identifiers() {
        assert_eq!(Namespace::User.as_raw(), 1);
        assert_eq!(Namespace::System.as_raw(), 2);
        assert_eq!(Namespace::from_raw(2), Some(Namespace::System));
        assert_eq!(Namespace::from_raw(0), None);
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify(Namespace::User, OsStr::new("a")), OsString::from("user.a"));
        assert_eq!(qualify(Namespace::System, OsStr::new("b")), OsString::from("system.b"));
    }
}
