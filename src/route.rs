// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 页面路由
//!
//! URL 路径到页面的静态映射表。解析是全函数：无法识别的路径
//! （包括空路径）一律落到安装页。查询字符串和片段标识不参与匹配。

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Install,
    Config,
    CodeIntro,
    Usage,
}

impl Route {
    /// 导航栏中的展示顺序
    pub const ALL: [Route; 4] = [Route::Install, Route::Config, Route::CodeIntro, Route::Usage];

    /// 无法识别的路径使用的回退页面
    pub const FALLBACK: Route = Route::Install;

    pub fn resolve(path: &str) -> Route {
        let path = match path.find(|c| c == '?' || c == '#') {
            Some(index) => &path[..index],
            None => path,
        };
        let segment = path.trim_matches('/');
        Route::from_segment(segment).unwrap_or(Route::FALLBACK)
    }

    pub fn from_segment(segment: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.segment() == segment)
    }

    pub fn segment(&self) -> &'static str {
        match self {
            Route::Install => "install",
            Route::Config => "config",
            Route::CodeIntro => "code-intro",
            Route::Usage => "usage",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Install => "/install",
            Route::Config => "/config",
            Route::CodeIntro => "/code-intro",
            Route::Usage => "/usage",
        }
    }

    /// 导航栏与 `<title>` 中使用的页面名
    pub fn title(&self) -> &'static str {
        match self {
            Route::Install => "安装",
            Route::Config => "配置",
            Route::CodeIntro => "生成的代码",
            Route::Usage => "用法",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// 持有当前路由的路由器。导航栏和内容区都从这里读取当前页面。
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Route> for Router {
    fn from(current: Route) -> Self {
        Self { current }
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::FALLBACK,
        }
    }

    /// 切换到 `path` 对应的页面并返回它
    pub fn navigate(&mut self, path: &str) -> Route {
        self.current = Route::resolve(path);
        self.current
    }

    pub fn current(&self) -> Route {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::resolve("/config"), Route::Config);
        assert_eq!(Route::resolve("/install"), Route::Install);
        assert_eq!(Route::resolve("/code-intro"), Route::CodeIntro);
        assert_eq!(Route::resolve("/usage"), Route::Usage);
    }

    #[test]
    fn test_paths_without_leading_slash() {
        assert_eq!(Route::resolve("config"), Route::Config);
        assert_eq!(Route::resolve("usage"), Route::Usage);
    }

    #[test]
    fn test_fallback_to_install() {
        assert_eq!(Route::resolve(""), Route::Install);
        assert_eq!(Route::resolve("/"), Route::Install);
        assert_eq!(Route::resolve("/nonexistent-path"), Route::Install);
        assert_eq!(Route::resolve("/usage/extra"), Route::Install);
        assert_eq!(Route::resolve("/Usage"), Route::Install);
        assert_eq!(Route::resolve("*"), Route::Install);
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        assert_eq!(Route::resolve("/usage?tab=2"), Route::Usage);
        assert_eq!(Route::resolve("/config#jdbc"), Route::Config);
        assert_eq!(Route::resolve("/code-intro/"), Route::CodeIntro);
    }

    #[test]
    fn test_path_and_segment_agree() {
        for route in Route::ALL {
            assert_eq!(route.path(), format!("/{}", route.segment()));
            assert_eq!(Route::resolve(route.path()), route);
            assert_eq!(route.to_string(), route.path());
        }
    }

    #[test]
    fn test_router_tracks_current_route() {
        let mut router = Router::new();
        assert_eq!(router.current(), Route::Install);

        assert_eq!(router.navigate("/usage"), Route::Usage);
        assert_eq!(router.current(), Route::Usage);

        assert_eq!(router.navigate("/missing"), Route::Install);
        assert_eq!(router.current(), Route::Install);

        assert_eq!(Router::from(Route::Config).current(), Route::Config);
    }

    proptest! {
        #[test]
        fn resolve_is_total(path in ".*") {
            let route = Route::resolve(&path);
            prop_assert!(Route::ALL.contains(&route));
        }

        #[test]
        fn unknown_segments_fall_back(segment in "[a-z]{1,12}") {
            prop_assume!(Route::from_segment(&segment).is_none());
            prop_assert_eq!(Route::resolve(&format!("/{}", segment)), Route::Install);
        }
    }
}
