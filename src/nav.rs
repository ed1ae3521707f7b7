// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 导航栏
//!
//! 与路由表一一对应的链接列表，当前页面对应的链接高亮。
//! 点击链接时由 [`NAV_SCRIPT`] 拦截，只替换内容区，不刷新整个页面。

use crate::{route::Route, view::Node};

/// 客户端路由脚本。请求片段时携带 `X-Requested-With: fragment`。
pub const NAV_SCRIPT: &str = r#"
(function () {
  var content = document.getElementById('content');
  var siteTitle = document.body.getAttribute('data-site-title');
  function highlight(path) {
    var links = document.querySelectorAll('a[data-route]');
    for (var i = 0; i < links.length; i++) {
      var active = links[i].getAttribute('href') === path;
      links[i].classList.toggle('active', active);
      if (active) {
        links[i].setAttribute('aria-current', 'page');
        document.title = links[i].textContent + ' - ' + siteTitle;
      } else {
        links[i].removeAttribute('aria-current');
      }
    }
  }
  function load(path, push) {
    fetch(path, { headers: { 'X-Requested-With': 'fragment' } })
      .then(function (resp) { return resp.text(); })
      .then(function (html) {
        content.innerHTML = html;
        highlight(content.firstElementChild.getAttribute('data-path'));
        if (push) { history.pushState({}, '', path); }
        window.scrollTo(0, 0);
      })
      .catch(function () { window.location.href = path; });
  }
  document.addEventListener('click', function (event) {
    var link = event.target.closest('a[data-route]');
    if (!link || event.ctrlKey || event.metaKey || event.shiftKey) { return; }
    event.preventDefault();
    load(link.getAttribute('href'), true);
  });
  window.addEventListener('popstate', function () { load(window.location.pathname, false); });
})();
"#;

pub fn render(current: Route) -> Node {
    let links = Route::ALL.into_iter().map(|route| {
        let link = Node::element("a")
            .attr("href", route.path())
            .attr("data-route", route.segment());
        let link = if route == current {
            link.attr("class", "active").attr("aria-current", "page")
        } else {
            link
        };
        Node::element("li").child(link.child(Node::text(route.title())))
    });
    Node::element("nav")
        .attr("class", "site-nav")
        .child(Node::element("ul").children(links))
}
