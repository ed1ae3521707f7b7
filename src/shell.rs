// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 根外壳
//!
//! 把导航栏和路由选中的页面组合成浏览器看到的完整文档。
//! 导航栏与内容区都从同一个 [`Router`] 读取当前页面。

use serde_json::json;

use crate::{
    model::UsageEntry,
    nav::{self, NAV_SCRIPT},
    pages::{self, usage},
    route::{Route, Router},
    util::HtmlBuilder,
    view::Node,
};

pub const STYLESHEET: &str = "/static/site.css";

/// 渲染除 `<html>` 外壳以外的可见部分：页头、导航栏与内容区
pub fn render_layout(router: &Router, site_title: &str) -> Node {
    Node::element("div")
        .attr("class", "layout")
        .child(
            Node::element("header").attr("class", "site-header").child(
                Node::element("a")
                    .attr("href", Route::FALLBACK.path())
                    .attr("class", "brand")
                    .child(Node::text(site_title)),
            ),
        )
        .child(nav::render(router.current()))
        .child(
            Node::element("main")
                .attr("id", "content")
                .child(pages::render(router.current())),
        )
}

pub fn render_document(router: &Router, site_title: &str) -> String {
    let title = format!("{} - {}", router.current().title(), site_title);
    HtmlBuilder::new(&title, render_layout(router, site_title).to_html())
        .stylesheet(STYLESHEET)
        .site_title(site_title)
        .script(NAV_SCRIPT)
        .build()
}

/// 客户端路由只替换内容区，因此只渲染页面本身
pub fn render_fragment(router: &Router) -> String {
    pages::render(router.current()).to_html()
}

/// 页面的 JSON 表示，只有用法页带有条目
pub fn render_json(router: &Router) -> serde_json::Value {
    let route = router.current();
    let entries: &[UsageEntry] = match route {
        Route::Usage => usage::entries(),
        _ => &[],
    };
    json!({
        "route": route.segment(),
        "title": route.title(),
        "entries": entries,
    })
}
