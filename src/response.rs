use crate::{
    cache::FileCache,
    config::Config,
    exception::Exception,
    param::*,
    request::Request,
    route::Router,
    shell,
    util::{resolve_static_path, HtmlBuilder},
};

use brotli::enc::{self, backward_references::BrotliEncoderParams};
use bytes::Bytes;
use chrono::prelude::*;
use flate2::{
    write::{DeflateEncoder, GzEncoder},
    Compression,
};
use log::{debug, error, warn};

use std::{
    ffi::OsStr,
    fs,
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex},
};

/// 内容随这些请求头变化，需要告知中间缓存
const VARY: &str = "Accept, Accept-Encoding, X-Requested-With";

#[derive(Debug, Clone)]
pub struct Response {
    version: HttpVersion,
    status_code: u16,
    information: String,
    content_type: Option<String>,
    content_length: u64,
    date: DateTime<Utc>,
    content_encoding: Option<HttpEncoding>,
    server_name: String,
    allow: Option<Vec<HttpRequestMethod>>,
    vary: Option<&'static str>,
    content: Option<Bytes>,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn new() -> Self {
        Self {
            version: HttpVersion::V1_1,
            status_code: 200,
            information: "OK".to_string(),
            content_type: None,
            content_length: 0,
            date: Utc::now(),
            content_encoding: None,
            server_name: SERVER_NAME.to_string(),
            allow: Some(ALLOWED_METHODS.to_vec()),
            vary: None,
            content: None,
        }
    }

    /// 根据请求生成响应。
    ///
    /// `/static/` 下的路径从资源目录读取文件，其余路径全部交给页面路由，
    /// 无法识别的页面路径由路由器回退到安装页，因此永远不会 404。
    pub fn from(
        request: &Request,
        id: u128,
        cache: &Arc<Mutex<FileCache>>,
        config: &Config,
    ) -> Response {
        let accept_encoding = request.accept_encoding();
        let method = request.method();

        if !ALLOWED_METHODS.contains(&method) {
            debug!("[ID{}]请求方法{}不被允许", id, method);
            return Self::from_status_code(405, accept_encoding, id);
        }
        if method == HttpRequestMethod::Options {
            debug!("[ID{}]请求方法为OPTIONS", id);
            return Self::from_status_code(204, accept_encoding, id);
        }
        let headonly = method == HttpRequestMethod::Head;

        let path = request.path();
        if let Some(relative) = path.strip_prefix(STATIC_PREFIX) {
            let result = resolve_static_path(config.www_root(), relative)
                .and_then(|file| Self::from_file(&file, request, id, cache, config, headonly));
            return match result {
                Ok(response) => response,
                Err(e) => {
                    warn!("[ID{}]静态资源{}无法提供：{}", id, path, e);
                    Self::from_exception(e, request, id)
                }
            };
        }

        let mut router = Router::new();
        router.navigate(path);
        debug!("[ID{}]路径{}路由到{}", id, path, router.current());
        Self::from_route(&router, request, id, config.site_title(), headonly)
    }

    /// 渲染一个页面。根据请求头选择完整文档、页面片段或 JSON。
    pub fn from_route(
        router: &Router,
        request: &Request,
        id: u128,
        site_title: &str,
        headonly: bool,
    ) -> Response {
        let route = router.current();
        let (body, mime) = if request.wants_json() {
            debug!("[ID{}]以JSON形式返回页面{}", id, route);
            match serde_json::to_vec(&shell::render_json(router)) {
                Ok(json) => (json, JSON_MIME),
                Err(e) => {
                    error!("[ID{}]序列化页面{}失败：{}", id, route, e);
                    return Self::from_status_code(500, request.accept_encoding(), id);
                }
            }
        } else if request.wants_fragment() {
            debug!("[ID{}]返回页面{}的片段", id, route);
            (shell::render_fragment(router).into_bytes(), HTML_MIME)
        } else {
            (shell::render_document(router, site_title).into_bytes(), HTML_MIME)
        };
        let mut response = Self::from_body(body, mime, request.accept_encoding(), id, headonly);
        response.vary = Some(VARY);
        response
    }

    fn from_file(
        path: &Path,
        request: &Request,
        id: u128,
        cache: &Arc<Mutex<FileCache>>,
        config: &Config,
        headonly: bool,
    ) -> Result<Response, Exception> {
        let metadata = match fs::metadata(path) {
            Ok(meta) if meta.is_file() => meta,
            _ => return Err(Exception::FileNotFound),
        };
        let modified_time = match metadata.modified() {
            Ok(time) => time,
            Err(e) => {
                error!("[ID{}]无法获取文件{}的修改时间: {}", id, path.display(), e);
                return Ok(Self::from_status_code(500, request.accept_encoding(), id));
            }
        };
        let key = path.to_string_lossy();

        let cached = {
            let mut cache_lock = match cache.lock() {
                Ok(lock) => lock,
                Err(poisoned) => {
                    warn!("[ID{}]缓存锁被污染，恢复并继续", id);
                    poisoned.into_inner()
                }
            };
            cache_lock.find(&key, modified_time)
        };

        let (content, mime) = match cached {
            Some(asset) => {
                debug!("[ID{}]缓存命中：{}", id, key);
                (asset.content.to_vec(), asset.mime)
            }
            None => {
                debug!("[ID{}]缓存未命中或文件已修改：{}", id, key);
                let content = match fs::read(path) {
                    Ok(c) => c,
                    Err(e) => {
                        error!("[ID{}]无法读取文件{}。错误：{}", id, key, e);
                        return Ok(Self::from_status_code(500, request.accept_encoding(), id));
                    }
                };
                let mime = path.extension().map_or(MIME_TYPES["_"], get_mime);
                if FileCache::should_cache(metadata.len(), config.max_cached_file_size()) {
                    let mut cache_lock = match cache.lock() {
                        Ok(lock) => lock,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    cache_lock.push(&key, Bytes::from(content.clone()), mime, modified_time);
                    debug!("[ID{}]文件已加入缓存", id);
                } else {
                    debug!("[ID{}]文件过大({} bytes)，跳过缓存", id, metadata.len());
                }
                (content, mime)
            }
        };
        Ok(Self::from_body(content, mime, request.accept_encoding(), id, headonly))
    }

    fn from_body(
        body: Vec<u8>,
        mime: &str,
        accept_encoding: &[HttpEncoding],
        id: u128,
        headonly: bool,
    ) -> Response {
        let mut response = Self::new();
        response.allow = None;
        response.content_type = Some(mime.to_string());

        response.content_encoding = if should_skip_compression(mime) {
            None
        } else {
            decide_encoding(accept_encoding)
        };
        let original_size = body.len();
        let body = match response.content_encoding {
            Some(_) => match compress(&body, response.content_encoding) {
                Ok(c) => c,
                Err(e) => {
                    error!("[ID{}]压缩失败: {}，返回未压缩内容", id, e);
                    response.content_encoding = None;
                    body
                }
            },
            None => body,
        };
        debug!(
            "[ID{}]响应体: {}, 编码: {:?}, {} bytes -> {} bytes",
            id,
            mime,
            response.content_encoding,
            original_size,
            body.len()
        );
        // HEAD 与 GET 的响应头一致，只是不带响应体
        response.content_length = body.len() as u64;
        if !headonly {
            response.content = Some(Bytes::from(body));
        }
        response
    }

    fn from_status_code(code: u16, accept_encoding: &[HttpEncoding], id: u128) -> Self {
        let mut response = Self::new();
        if code == 204 {
            response.set_code(code);
            return response;
        }
        let content = match code {
            404 => HtmlBuilder::from_status_code(404, Some(
                r"<h2>噢！</h2><p>你请求的资源不存在。</p>"
            )),
            405 => HtmlBuilder::from_status_code(405, Some(
                r"<h2>噢！</h2><p>本站点只接受 GET、HEAD 与 OPTIONS 请求。</p>"
            )),
            500 => HtmlBuilder::from_status_code(500, Some(
                r"<h2>噢！</h2><p>服务器出现了一个内部错误。</p>"
            )),
            _ => HtmlBuilder::from_status_code(code, None),
        }
        .build();
        let mut response_body = Self::from_body(content.into_bytes(), HTML_MIME, accept_encoding, id, false);
        if code == 405 {
            response_body.allow = response.allow.take();
        }
        response_body.set_code(code);
        response_body
    }

    fn from_exception(e: Exception, request: &Request, id: u128) -> Self {
        Self::from_status_code(e.status_code(), request.accept_encoding(), id)
    }

    /// 请求无法解析时使用，此时没有可用的 `Request`
    pub fn bad_request(id: u128) -> Self {
        Self::from_status_code(400, &[], id)
    }

    fn set_code(&mut self, code: u16) -> &mut Self {
        self.status_code = code;
        self.information = match STATUS_CODES.get(&code) {
            Some(&info) => info.to_string(),
            None => {
                error!("非法的状态码：{}。这条错误说明代码编写出现了错误。", code);
                "Unknown Status".to_string()
            }
        };
        self
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        let version = match self.version {
            HttpVersion::V1_1 => "HTTP/1.1",
        };
        let mut header = format!(
            "{} {} {}{}",
            version, self.status_code, self.information, CRLF
        );
        if let Some(t) = &self.content_type {
            header.push_str(&format!("Content-Type: {}{}", t, CRLF));
        }
        if let Some(e) = self.content_encoding {
            header.push_str(&format!("Content-Encoding: {}{}", e, CRLF));
        }
        if self.status_code != 204 {
            header.push_str(&format!("Content-Length: {}{}", self.content_length, CRLF));
        }
        header.push_str(&format!("Date: {}{}", format_date(&self.date), CRLF));
        header.push_str(&format!("Server: {}{}", self.server_name, CRLF));
        if let Some(a) = &self.allow {
            let methods: Vec<String> = a.iter().map(|m| m.to_string()).collect();
            header.push_str(&format!("Allow: {}{}", methods.join(", "), CRLF));
        }
        if let Some(v) = self.vary {
            header.push_str(&format!("Vary: {}{}", v, CRLF));
        }
        header.push_str("Connection: close");
        header.push_str(CRLF);
        header.push_str(CRLF);

        let mut bytes = header.into_bytes();
        if let Some(c) = &self.content {
            bytes.extend_from_slice(c);
        }
        bytes
    }
}

impl Response {
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn information(&self) -> &str {
        &self.information
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn content_encoding(&self) -> Option<HttpEncoding> {
        self.content_encoding
    }

    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    pub fn content(&self) -> Option<&Bytes> {
        self.content.as_ref()
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn compress(data: &[u8], mode: Option<HttpEncoding>) -> io::Result<Vec<u8>> {
    match mode {
        Some(HttpEncoding::Gzip) => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(data)?;
            encoder.finish()
        }
        Some(HttpEncoding::Deflate) => {
            let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(data)?;
            encoder.finish()
        }
        Some(HttpEncoding::Br) => {
            let params = BrotliEncoderParams::default();
            let mut output = Vec::new();
            enc::BrotliCompress(&mut io::Cursor::new(data), &mut output, &params)?;
            Ok(output)
        }
        None => Ok(data.to_vec()),
    }
}

fn should_skip_compression(mime_type: &str) -> bool {
    let skip_types = [
        "image/jpeg",
        "image/png",
        "image/gif",
        "image/webp",
        "image/x-icon",
        "font/woff",
        "font/woff2",
    ];

    skip_types
        .iter()
        .any(|&skip_type| mime_type.starts_with(skip_type))
}

/// 优先 gzip，其次 deflate，最后 brotli
fn decide_encoding(accept_encoding: &[HttpEncoding]) -> Option<HttpEncoding> {
    [HttpEncoding::Gzip, HttpEncoding::Deflate, HttpEncoding::Br]
        .into_iter()
        .find(|encoding| accept_encoding.contains(encoding))
}

fn get_mime(extension: &OsStr) -> &'static str {
    let extension = match extension.to_str() {
        Some(e) => e.to_lowercase(),
        None => {
            error!("无法将&OsStr转换为&str类型");
            return MIME_TYPES["_"];
        }
    };
    match MIME_TYPES.get(extension.as_str()) {
        Some(v) => *v,
        None => MIME_TYPES["_"],
    }
}
