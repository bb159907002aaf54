//! extattr 常量定义
//!
//! 这个模块包含了 extattr 系统调用相关的常量，包括：
//! - 命名空间标识符和名称前缀
//! - 属性名列表的线格式限制
//! - errno 别名

use libc::c_int;

//=============================================================================
// 命名空间
//=============================================================================

/// 用户命名空间（对应 `EXTATTR_NAMESPACE_USER`）
pub const EXTATTR_NAMESPACE_USER: c_int = 1;

/// 系统命名空间（对应 `EXTATTR_NAMESPACE_SYSTEM`）
pub const EXTATTR_NAMESPACE_SYSTEM: c_int = 2;

/// 用户命名空间前缀
pub const EXTATTR_USER_PREFIX: &str = "user.";

/// 系统命名空间前缀
pub const EXTATTR_SYSTEM_PREFIX: &str = "system.";

//=============================================================================
// 属性名列表
//=============================================================================

/// 列表中每个条目的长度前缀字节数
pub const EXTATTR_LIST_LEN_SIZE: usize = 1;

/// 单个属性名的最大长度（长度前缀只有一个字节）
pub const EXTATTR_MAXNAMELEN: usize = u8::MAX as usize;

//=============================================================================
// errno
//=============================================================================

/// 属性不存在
#[cfg(any(target_os = "freebsd", target_os = "macos"))]
pub const ENOATTR: c_int = libc::ENOATTR;

/// 属性不存在（没有 ENOATTR 的平台上对应 ENODATA）
#[cfg(not(any(target_os = "freebsd", target_os = "macos")))]
pub const ENOATTR: c_int = libc::ENODATA;
