// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! 代码生成介绍页：以 employee 表为例展示生成的文件。

use super::{code_block, list, page, paragraph};
use crate::{route::Route, view::Node};

const TABLE_DDL: &str = r#"CREATE TABLE employee (
  id BIGINT NOT NULL AUTO_INCREMENT,
  name VARCHAR(64) NOT NULL,
  phone VARCHAR(32),
  PRIMARY KEY (id)
);"#;

const GENERATED_TREE: &str = r#"src/main/java/org/example/model/
    BaseEmployee.java      // 与表字段一一对应，每次生成都会覆盖
    Employee.java          // 继承 BaseEmployee，仅首次生成，可以放心修改
    criteria/EmployeeCriteria.java
src/main/java/org/example/dao/
    EmployeeDao.java       // DAO 接口
    impl/EmployeeDaoImpl.java
src/main/resources/mybatis-mappers/
    EmployeeMapper.xml     // SQL 映射，每次生成都会覆盖"#;

const CRITERIA_SAMPLE: &str = r#"// where name = 'Alice' and phone is not null
EmployeeCriteria criteria = EmployeeCriteria.nameEqualTo("Alice").andPhoneIsNotNull();
List<Employee> list = employeeDao.selectList(criteria);"#;

pub fn render() -> Node {
    page(Route::CodeIntro)
        .child(paragraph(
            "在项目上右键选择 Yobatis 后，插件会根据 mybatisGeneratorConfig.xml 为每张表生成模型、criteria、DAO 与 mapper。\
             下面以 employee 表为例。",
        ))
        .child(code_block("sql", TABLE_DDL))
        .child(Node::with_text("h2", "生成的文件"))
        .child(code_block("text", GENERATED_TREE))
        .child(list(
            "ul",
            &[
                "BaseEmployee：字段与 getter/setter，表结构变化后重新生成即可同步。",
                "Employee：业务代码使用的模型，手写的方法放在这里，不会被覆盖。",
                "EmployeeCriteria：类型安全的查询条件构造器，支持 and/or、排序、limit/offset 与 for update。",
                "EmployeeDao：插入、查询、统计、更新与删除方法，详见“用法”一节。",
            ],
        ))
        .child(Node::with_text("h2", "Criteria"))
        .child(paragraph("每个字段都会生成 xxxEqualTo、xxxIsNull、xxxLessThan 等静态入口和对应的 andXxx 方法。"))
        .child(code_block("java", CRITERIA_SAMPLE))
}
