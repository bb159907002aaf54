//! 属性名列表解码
//!
//! `extattr_list_file` 返回的缓冲区由若干条目组成，每个条目是一个长度字节
//! 加上对应长度的属性名，名称**不**以 NUL 结尾：
//!
//! ```text
//! +-----+-----------+-----+-------------+----
//! | len | name[len] | len | name[len]   | ...
//! +-----+-----------+-----+-------------+----
//! ```

use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

use crate::consts::EXTATTR_LIST_LEN_SIZE;

/// 属性名列表迭代器
///
/// 按顺序返回每个条目的名称字节。遇到长度超出缓冲区的条目时停止。
#[derive(Debug, Clone)]
pub struct NameListIter<'a> {
    buf: &'a [u8],
    offset: usize,
    truncated: bool,
}

impl<'a> NameListIter<'a> {
    /// 创建新的迭代器
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            truncated: false,
        }
    }

    /// 是否因为条目越界而提前结束
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<'a> Iterator for NameListIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.truncated || self.offset >= self.buf.len() {
            return None;
        }

        let name_len = self.buf[self.offset] as usize;
        let start = self.offset + EXTATTR_LIST_LEN_SIZE;
        let end = start + name_len;

        if end > self.buf.len() {
            self.truncated = true;
            return None;
        }

        self.offset = end;
        Some(&self.buf[start..end])
    }
}

/// 将属性名列表缓冲区解码为名称列表
///
/// 最后一个条目越界时丢弃该条目并记录警告。
pub fn decode_name_list(buf: &[u8]) -> Vec<OsString> {
    let mut iter = NameListIter::new(buf);
    let names: Vec<OsString> = iter
        .by_ref()
        .map(|name| OsString::from_vec(name.to_vec()))
        .collect();

    if iter.is_truncated() {
        log::warn!(
            "[XATTR] truncated name list: {} bytes, {} names decoded",
            buf.len(),
            names.len()
        );
    }

    names
}
