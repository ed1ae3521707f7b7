// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 页面
//!
//! 每个路由对应一个页面模块，各自提供 `render` 生成视图树。

pub mod code_intro;
pub mod config;
pub mod install;
pub mod usage;

use crate::{route::Route, view::Node};

/// 渲染路由对应的页面
pub fn render(route: Route) -> Node {
    match route {
        Route::Install => install::render(),
        Route::Config => config::render(),
        Route::CodeIntro => code_intro::render(),
        Route::Usage => usage::render(usage::entries()),
    }
}

pub(crate) fn page(route: Route) -> Node {
    Node::element("article")
        .attr("class", format!("page {}", route.segment()))
        .attr("data-path", route.path())
        .child(Node::with_text("h1", route.title()))
}

pub(crate) fn code_block(language: &'static str, code: &'static str) -> Node {
    Node::element("pre").child(
        Node::with_text("code", code).attr("class", format!("language-{}", language)),
    )
}

pub(crate) fn paragraph(text: &'static str) -> Node {
    Node::with_text("p", text)
}

pub(crate) fn list(tag: &'static str, items: &[&'static str]) -> Node {
    Node::element(tag).children(items.iter().map(|item| Node::with_text("li", *item)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_route_renders_its_own_page() {
        for route in Route::ALL {
            let node = render(route);
            let class = node.get_attr("class").unwrap_or_default();
            assert_eq!(node.tag(), Some("article"));
            assert!(class.split(' ').any(|c| c == route.segment()), "{}", class);
        }
    }

    #[test]
    fn test_static_pages_have_content() {
        for route in [Route::Install, Route::Config, Route::CodeIntro] {
            let node = render(route);
            assert!(!node.find_all(&|n| n.tag() == Some("pre")).is_empty());
            assert!(node.text_content().contains("Yobatis"));
        }
    }
}
