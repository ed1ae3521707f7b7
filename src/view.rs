// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 视图树
//!
//! 每个页面都以 `render(model) -> Node` 的形式给出自己的视图树，
//! 序列化为 HTML 的工作统一在这里完成。文本节点和属性值总会被转义，
//! 只有 [`Node::Raw`] 原样输出（用在内联脚本等受控内容上）。

use std::fmt::Write;

/// 不需要闭合标签的 HTML 元素
const VOID_TAGS: [&str; 5] = ["br", "hr", "img", "link", "meta"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
    /// 不做转义的受控 HTML 片段
    Raw(&'static str),
}

impl Node {
    pub fn element(tag: &'static str) -> Self {
        Node::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// 追加一个属性。对非元素节点不产生任何效果。
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// `<tag>text</tag>` 的简写
    pub fn with_text(tag: &'static str, text: impl Into<String>) -> Self {
        Node::element(tag).child(Node::text(text))
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Node::Element { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// 深度优先查找所有满足条件的元素
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Node) -> bool) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect(predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&Node) -> bool, found: &mut Vec<&'a Node>) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.child_nodes() {
            child.collect(predicate, found);
        }
    }

    /// 所有后代文本节点拼接后的内容
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Raw(_) => String::new(),
            Node::Element { children, .. } => {
                children.iter().map(Node::text_content).collect()
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Raw(html) => out.push_str(html),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    // 写入 String 不会失败
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                out.push('>');
                if VOID_TAGS.contains(tag) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

/// HTML 文本与属性值转义
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"List<Employee> a = "x" & 'y'"#),
            "List&lt;Employee&gt; a = &quot;x&quot; &amp; &#39;y&#39;"
        );
    }

    #[test]
    fn test_element_to_html() {
        let node = Node::element("a")
            .attr("href", "/usage")
            .attr("class", "active")
            .child(Node::text("用法"));
        assert_eq!(node.to_html(), r#"<a href="/usage" class="active">用法</a>"#);
    }

    #[test]
    fn test_void_tag_has_no_closing_tag() {
        let node = Node::element("link").attr("rel", "stylesheet");
        assert_eq!(node.to_html(), r#"<link rel="stylesheet">"#);
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let node = Node::element("script").child(Node::Raw("if (a < b) {}"));
        assert_eq!(node.to_html(), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn test_attr_on_text_is_ignored() {
        let node = Node::text("x").attr("id", "y").child(Node::text("z"));
        assert_eq!(node, Node::Text("x".to_string()));
    }

    #[test]
    fn test_find_all_and_text_content() {
        let node = Node::element("ul").children(vec![
            Node::with_text("li", "a"),
            Node::with_text("li", "b"),
        ]);
        let items = node.find_all(&|n| n.tag() == Some("li"));
        assert_eq!(items.len(), 2);
        assert_eq!(node.text_content(), "ab");
        assert_eq!(items[1].text_content(), "b");
    }
}
