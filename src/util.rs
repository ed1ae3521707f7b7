// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use std::path::{Component, Path, PathBuf};

use crate::{exception::Exception, param::STATUS_CODES, view::escape};

/// 完整 HTML 文档的外壳：`<head>` 中的标题、样式与脚本，加上 `<body>`。
pub struct HtmlBuilder {
    title: String,
    css: String,
    stylesheet: Option<String>,
    script: String,
    body_title: Option<String>,
    body: String,
}

impl HtmlBuilder {
    /// `body` 必须是已经转义过的 HTML
    pub fn new(title: &str, body: String) -> Self {
        Self {
            title: escape(title),
            css: String::new(),
            stylesheet: None,
            script: String::new(),
            body_title: None,
            body,
        }
    }

    pub fn stylesheet(mut self, href: &str) -> Self {
        self.stylesheet = Some(escape(href));
        self
    }

    pub fn script(mut self, script: &str) -> Self {
        self.script = script.to_string();
        self
    }

    /// 写入 `<body data-site-title>`，客户端路由据此更新 `document.title`
    pub fn site_title(mut self, site_title: &str) -> Self {
        self.body_title = Some(escape(site_title));
        self
    }

    pub fn from_status_code(code: u16, note: Option<&str>) -> Self {
        let title = format!("{}", code);
        let css = r"
            body {
                width: 35em;
                margin: 0 auto;
                font-family: Tahoma, Verdana, Arial, sans-serif;
            }
            "
        .to_string();
        let description = match note {
            Some(n) => n,
            None => STATUS_CODES.get(&code).copied().unwrap_or("Unknown Status"),
        };
        let body = format!(
            r#"
            <h1>{}</h1>
            <p>{}</p>
            <p><a href="/install">返回文档首页</a></p>
            "#,
            code, description
        );
        Self {
            title,
            css,
            stylesheet: None,
            script: String::new(),
            body_title: None,
            body,
        }
    }

    pub fn build(&self) -> String {
        let stylesheet = match &self.stylesheet {
            Some(href) => format!(r#"<link rel="stylesheet" href="{}">"#, href),
            None => String::new(),
        };
        let body_attr = match &self.body_title {
            Some(t) => format!(r#" data-site-title="{}""#, t),
            None => String::new(),
        };
        format!(
            r##"<!DOCTYPE html>
<html lang="zh-CN">
    <head>
        <meta charset="utf-8">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <title>{}</title>
        {}
        <style>{}</style>
    </head>
    <body{}>
    {}
    <script>{}</script>
    </body>
</html>"##,
            self.title, stylesheet, self.css, body_attr, self.body, self.script
        )
    }
}

/// 把 `/static/` 之后的相对路径安全地拼接到资源根目录下。
///
/// 只允许普通路径片段，`..`、绝对路径或空字节一律判为非法。
pub fn resolve_static_path(root: &str, relative: &str) -> Result<PathBuf, Exception> {
    let relative = match relative.find(|c| c == '?' || c == '#') {
        Some(index) => &relative[..index],
        None => relative,
    };
    if relative.is_empty() || relative.contains('\0') || relative.contains('\\') {
        return Err(Exception::InvalidPath);
    }
    let relative_path = Path::new(relative);
    let mut full_path = PathBuf::from(root);
    for component in relative_path.components() {
        match component {
            Component::Normal(part) => full_path.push(part),
            Component::CurDir => {}
            _ => return Err(Exception::InvalidPath),
        }
    }
    Ok(full_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_page_uses_reason_phrase() {
        let html = HtmlBuilder::from_status_code(404, None).build();
        assert!(html.contains("<title>404</title>"));
        assert!(html.contains("Not Found"));
    }

    #[test]
    fn test_status_page_with_note() {
        let html = HtmlBuilder::from_status_code(405, Some("仅支持 GET")).build();
        assert!(html.contains("仅支持 GET"));
        assert!(!html.contains("Method Not Allowed"));
    }

    #[test]
    fn test_unknown_status_code_does_not_panic() {
        let html = HtmlBuilder::from_status_code(299, None).build();
        assert!(html.contains("Unknown Status"));
    }

    #[test]
    fn test_build_document() {
        let html = HtmlBuilder::new("用法 - Yobatis", "<main></main>".to_string())
            .stylesheet("/static/site.css")
            .script("var a = 1;")
            .site_title("Yo\"batis")
            .build();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>用法 - Yobatis</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/site.css">"#));
        assert!(html.contains(r#"<body data-site-title="Yo&quot;batis">"#));
        assert!(html.contains("<script>var a = 1;</script>"));
    }

    #[test]
    fn test_resolve_static_path() {
        let path = resolve_static_path("static", "css/site.css").unwrap();
        assert_eq!(path, PathBuf::from("static/css/site.css"));

        let path = resolve_static_path("static", "site.css?v=2").unwrap();
        assert_eq!(path, PathBuf::from("static/site.css"));
    }

    #[test]
    fn test_resolve_static_path_rejects_traversal() {
        for attack in ["../Cargo.toml", "css/../../etc/passwd", "/etc/passwd", "a\0b", "..\\x", ""] {
            assert_eq!(
                resolve_static_path("static", attack),
                Err(Exception::InvalidPath),
                "{}",
                attack
            );
        }
    }
}
