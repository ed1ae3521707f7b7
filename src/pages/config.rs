// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! 配置页：mybatisGeneratorConfig.xml 的结构说明。

use super::{code_block, list, page, paragraph};
use crate::{route::Route, view::Node};

const GENERATOR_CONFIG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE generatorConfiguration PUBLIC "-//mybatis.org//DTD MyBatis Generator Configuration 1.0//EN"
  "http://mybatis.org/dtd/mybatis-generator-config_1_0.dtd">
<generatorConfiguration>
  <classPathEntry location="/home/user/.m2/repository/mysql/mysql-connector-java/5.1.25/mysql-connector-java-5.1.25.jar"/>
  <context id="yobatis" targetRuntime="MyBatis3">
    <plugin type="org.mybatis.generator.plugins.YobatisDaoPlugin"/>
    <jdbcConnection driverClass="com.mysql.jdbc.Driver"
                    connectionURL="jdbc:mysql://localhost:3306/demo"
                    userId="root" password="123456"/>
    <javaTypeResolver>
      <property name="forceBigDecimals" value="false"/>
    </javaTypeResolver>
    <javaModelGenerator targetPackage="org.example.model" targetProject="/demo/src/main/java"/>
    <sqlMapGenerator targetPackage="mybatis-mappers" targetProject="/demo/src/main/resources"/>
    <javaClientGenerator type="XMLMAPPER" targetPackage="org.example.dao" targetProject="/demo/src/main/java"/>
    <table tableName="employee" schema="demo" modelType="flat">
      <generatedKey column="id" sqlStatement="mysql" identity="true"/>
    </table>
  </context>
</generatorConfiguration>"#;

pub fn render() -> Node {
    page(Route::Config)
        .child(paragraph(
            "第一次运行 Yobatis 时，插件会分析项目结构与数据源，在项目根目录生成 mybatisGeneratorConfig.xml。\
             之后的每次运行都会读取该文件，因此可以手工调整后再生成代码。",
        ))
        .child(code_block("xml", GENERATOR_CONFIG))
        .child(Node::with_text("h2", "主要元素"))
        .child(list(
            "ul",
            &[
                "classPathEntry：JDBC 驱动 jar 的位置，从本地 Maven 仓库中查找。",
                "context：id 固定为 yobatis，targetRuntime 为 MyBatis3。",
                "jdbcConnection：从 Spring 配置及其引用的 properties 文件解析出的数据源。",
                "javaModelGenerator / javaClientGenerator：模型与 DAO 的包名和源码目录，根据项目中的 model、dao 目录推断。",
                "sqlMapGenerator：mapper XML 的输出位置，位于 resources 目录下的 mybatis-mappers。",
                "table：需要生成代码的表，自增主键会生成 generatedKey 元素。",
            ],
        ))
        .child(paragraph(
            "删除不需要的 table 元素即可跳过对应的表；存在多个 model 目录时会按表名相似度分组并生成多个 context。",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_sample_is_escaped() {
        let html = render().to_html();
        assert!(html.contains("&lt;context id=&quot;yobatis&quot; targetRuntime=&quot;MyBatis3&quot;&gt;"));
        assert!(!html.contains("<generatorConfiguration>"));
    }
}
