// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! 安装页，同时也是未知路径的回退页。

use super::{code_block, list, page, paragraph};
use crate::{route::Route, view::Node};

pub fn render() -> Node {
    page(Route::Install)
        .child(paragraph(
            "Yobatis 是一个 Eclipse 插件，它读取 Maven Web 项目中的 pom.xml、web.xml 与 Spring 配置，\
             找到数据源后为数据库中的表生成 MyBatis Generator 配置、Java 模型、DAO 与 mapper 文件。",
        ))
        .child(Node::with_text("h2", "环境要求"))
        .child(list(
            "ul",
            &[
                "Eclipse（支持 dropins 目录的版本）",
                "JDK 1.7 或以上",
                "使用 Maven 构建、包含 web.xml 的 Web 项目",
                "MySQL 数据库，且数据源配置在 Spring 配置文件或其引用的 properties 文件中",
            ],
        ))
        .child(Node::with_text("h2", "安装步骤"))
        .child(list(
            "ol",
            &[
                "下载最新版本的 yobatis 插件 jar 包。",
                "将 jar 包复制到 Eclipse 安装目录下的 dropins 目录。",
                "重启 Eclipse。",
                "在 Project Explorer 中右键点击项目，菜单中出现 Yobatis 即表示安装成功。",
            ],
        ))
        .child(code_block(
            "shell",
            "cp yobatis-*.jar /path/to/eclipse/dropins/\n# 重启 Eclipse",
        ))
        .child(paragraph(
            "首次点击 Yobatis 菜单时，插件会在项目根目录生成 mybatisGeneratorConfig.xml，详见“配置”一节。",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_dropins() {
        let text = render().text_content();
        assert!(text.contains("dropins"));
        assert!(text.contains("mybatisGeneratorConfig.xml"));
    }
}
