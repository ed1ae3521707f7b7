// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # HTTP 请求处理模块
//!
//! 将 TCP 流中读取的原始字节解析为强类型的 `Request`：
//! 1. 请求行（方法、路径、版本）。
//! 2. 内容协商相关的标头（`Accept`、`Accept-Encoding`）。
//! 3. 客户端路由使用的 `X-Requested-With`。

use crate::{exception::Exception, param::*};
use log::error;

/// 一个 HTTP 请求的元数据，不包含请求体。
#[derive(Debug, Clone)]
pub struct Request {
    method: HttpRequestMethod,
    /// 原始请求路径（包含查询字符串）
    path: String,
    version: HttpVersion,
    user_agent: String,
    /// 客户端支持的压缩编码列表（按解析顺序排列）
    accept_encoding: Vec<HttpEncoding>,
    accept: Option<String>,
    requested_with: Option<String>,
}

impl Request {
    /// 从原始字节缓冲区尝试构建 `Request`。
    ///
    /// # 参数
    /// * `buffer` - 从 Socket 读取的原始数据。
    /// * `id` - 请求 ID，用于在日志中追踪。
    pub fn try_from(buffer: &[u8], id: u128) -> Result<Self, Exception> {
        let request_string = match std::str::from_utf8(buffer) {
            Ok(string) => string.trim_end_matches('\0'),
            Err(_) => {
                error!("[ID{}]无法解析HTTP请求", id);
                return Err(Exception::RequestIsNotUtf8);
            }
        };

        let mut request_lines = request_string.split(CRLF);
        let first_line = request_lines.next().unwrap_or_default();

        // 请求行，例如 "GET /usage HTTP/1.1"
        let first_line_parts: Vec<&str> = first_line.split(' ').collect();
        if first_line_parts.len() < 3 {
            error!("[ID{}]HTTP请求行格式不正确：{}", id, first_line);
            return Err(Exception::UnSupportedRequestMethod);
        }

        let method_str = first_line_parts[0].to_uppercase();
        let method = match method_str.as_str() {
            "GET" => HttpRequestMethod::Get,
            "HEAD" => HttpRequestMethod::Head,
            "OPTIONS" => HttpRequestMethod::Options,
            "POST" => HttpRequestMethod::Post,
            _ => {
                error!("[ID{}]不支持的HTTP请求方法：{}", id, &method_str);
                return Err(Exception::UnSupportedRequestMethod);
            }
        };

        let version_str = first_line_parts[first_line_parts.len() - 1].to_uppercase();
        let version = match version_str.as_str() {
            "HTTP/1.1" => HttpVersion::V1_1,
            _ => {
                error!("[ID{}]不支持的HTTP协议版本：{}", id, &version_str);
                return Err(Exception::UnsupportedHttpVersion);
            }
        };

        // 路径中出现空格虽不规范，但通过 join 尽量恢复
        let path = first_line_parts[1..first_line_parts.len() - 1].join(" ");

        let mut user_agent = String::new();
        let mut accept_encoding = vec![];
        let mut accept = None;
        let mut requested_with = None;
        for line in request_lines {
            if line.is_empty() {
                break;
            }
            let (name, value) = match line.split_once(':') {
                Some((n, v)) => (n.trim().to_lowercase(), v.trim()),
                None => continue,
            };
            match name.as_str() {
                "user-agent" => user_agent = value.to_string(),
                "accept" => accept = Some(value.to_string()),
                "x-requested-with" => requested_with = Some(value.to_string()),
                "accept-encoding" => {
                    // 只要包含关键词即视为支持
                    if value.contains("gzip") {
                        accept_encoding.push(HttpEncoding::Gzip);
                    }
                    if value.contains("deflate") {
                        accept_encoding.push(HttpEncoding::Deflate);
                    }
                    if value.contains("br") {
                        accept_encoding.push(HttpEncoding::Br);
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            method,
            path,
            version,
            user_agent,
            accept_encoding,
            accept,
            requested_with,
        })
    }
}

impl Request {
    pub fn version(&self) -> &HttpVersion {
        &self.version
    }

    /// 请求路径（含查询参数）
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpRequestMethod {
        self.method
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn accept_encoding(&self) -> &[HttpEncoding] {
        &self.accept_encoding
    }

    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// 客户端是否要求 JSON 表示
    pub fn wants_json(&self) -> bool {
        self.accept.as_deref().map_or(false, |a| a.contains(JSON_MIME))
    }

    /// 客户端路由发起的请求只需要页面片段
    pub fn wants_fragment(&self) -> bool {
        self.requested_with
            .as_deref()
            .map_or(false, |v| v.eq_ignore_ascii_case(FRAGMENT_MARKER))
    }
}
