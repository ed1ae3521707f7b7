// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 文档站点在处理 HTTP 请求时可能遇到的异常情况。
//!
//! 页面路由本身是全函数（未知路径回退到安装页），因此这里只包含
//! 协议解析和静态资源查找两类错误。上层的连接处理器负责把每个变体
//! 映射为对应的 HTTP 状态码。

use std::fmt;

/// 处理请求过程中发生的异常类型。
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exception {
    /// 请求字节流不是合法的 UTF-8。
    RequestIsNotUtf8,
    /// 请求行格式错误，或使用了无法识别的方法。
    UnSupportedRequestMethod,
    /// 除 HTTP/1.1 以外的协议版本。
    UnsupportedHttpVersion,
    /// `/static/` 下请求的文件不存在，对应 `404 Not Found`。
    FileNotFound,
    /// 静态资源路径包含 `..` 等越权片段，对应 `400 Bad Request`。
    InvalidPath,
}

use Exception::*;

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestIsNotUtf8 => write!(f, "Request bytes can't be parsed in UTF-8"),
            UnSupportedRequestMethod => write!(f, "Unsupported request method"),
            UnsupportedHttpVersion => write!(f, "Unsupported HTTP version"),
            FileNotFound => write!(f, "File not found (404)"),
            InvalidPath => write!(f, "Invalid path (400)"),
        }
    }
}

impl Exception {
    /// 该异常对应的 HTTP 状态码。
    pub fn status_code(&self) -> u16 {
        match self {
            FileNotFound => 404,
            RequestIsNotUtf8 | UnSupportedRequestMethod | UnsupportedHttpVersion | InvalidPath => {
                400
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(FileNotFound.status_code(), 404);
        assert_eq!(InvalidPath.status_code(), 400);
        assert_eq!(RequestIsNotUtf8.status_code(), 400);
        assert_eq!(UnsupportedHttpVersion.status_code(), 400);
    }

    #[test]
    fn test_display() {
        assert_eq!(FileNotFound.to_string(), "File not found (404)");
        assert_eq!(InvalidPath.to_string(), "Invalid path (400)");
    }
}
