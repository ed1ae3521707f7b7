// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! 用法页：生成的 DAO 各方法签名、说明、返回值与示例。

use crate::{model::UsageEntry, route::Route, view::Node};

static ENTRIES: [UsageEntry; 9] = [
    UsageEntry::new(
        "int insert(BaseEmployee record)",
        "插入一条记录",
        "调用该方法向表中插入一条记录，如表为自增主键且record中对应主键的field为null，该方法会将新主键设置到record对应的field中；如表为自增主键且record中对应主键的field不为null，则将对应的主键插入表中。",
        "返回1若插入成功。",
        r#"
Employee employee = new Employee();
employee.setName('Alice');
employee.setPhone('123');
employeeDao.insert(employee);
System.out.println('新纪录的id是:' + employee.getId());

employee = new Employee();
employee.setName('Bob');
employee.setPhone('124');
employee.setId(2L);
employeeDao.insert(employee); // 新记录的id(主键)为2"#,
    ),
    UsageEntry::new(
        "Employee selectOne(Long pk)",
        "通过主键查询一条记录",
        "根据主键查询记录。",
        "返回记录对应的对象或者null。",
        r#"
Employee employee = employeeDao.selectOne(1L);
if (employee == null) {
  System.out.println('没有id为1的员工.');
} else {
  System.out.println('员工的信息为:' + employee.toString());
}"#,
    ),
    UsageEntry::new(
        "Employee selectOne(EmployeeCriteria criteria)",
        "通过criteria查询一条记录",
        "通过criteria查询一条记录。",
        "返回记录对应的对象或者null，若查询条件命中多条记录则抛出异常。",
        r#"
try {
  Employee employee = employeeDao.selectOne(EmployeeCriteria.nameEqualTo("Alice"));
  if (employee == null) {
    System.out.println("没有名字为Alice的记录");
  } else {
    System.out.println("找到一条名字为Alice的记录:", employee.toString());
  }
} catch (TooManyResultsException e) {
  System.out.println("找到多条名字为Alice的记录");
}"#,
    ),
    UsageEntry::new(
        "List<Employee> selectList(EmployeeCriteria criteria)",
        "通过criteria查询多条记录",
        "通过criteria查询多条记录。",
        "返回查询到的记录，或者一个空List如果没有查询到相应记录。",
        r#"
// where name = 'Alice' and phone is not null;
List<Employee> list = employeeDao.selectList(EmployeeCriteria.nameEqualTo("Alice").andPhoneIsNotNull());
// 该方法不会返回null
for (Employee employee : list) {
  System.out.println(employee.toString());
}

// where (name = 'Alice' and phone is not null) or (name = 'Bob')
List<Employee> list = employeeDao.selectList(EmployeeCriteria.nameEqualTo("Alice").andPhoneIsNotNull()
		.or() // <-加入or
		.andNameEqualTo("Bob"));
for (Employee employee : list) {
  System.out.println(employee.toString());
}

// select id, name, phone from employee where id is not null limit 10 offset 1 order by name asc, phone desc for update
List<Employee> list = employeeDao.selectList(EmployeeCriteria.idIsNotNull()
  .setLimit(10L) // 最多10条记录
  .setOffset(1L) // offset为1
  .ascOrderBy("name") // 通过name字段做asc排序, 参数为数据库中的字段名
  .descOrderBy("phone") // 若name相同则通过phone desc排序, 参数为数据库中的字段名
  .setForUpdate(true) // 设置for update, 小心使用
);
for (Employee employee : list) {
  System.out.println(employee.toString());
}
"#,
    ),
    UsageEntry::new(
        "int count(EmployeeCriteria criteria)",
        "统计符合criteria的记录数量",
        "通过criteria统计记录数量。",
        "返回统计数量。",
        r#"
int count = employeeDao.count(EmployeeCriteria.phoneIsNotNull());
System.out.println("找到" + count + "电话不为空的记录");"#,
    ),
    UsageEntry::new(
        "int update(BaseEmployee record)",
        "通过主键更新记录",
        "该方法将record中不为null的field更新到对应主键的记录中",
        "返回1如果更新成功，0如果该记录不存在",
        r#"
Employee employee = new Employee();
employee.setId(2L);
// 只更新phone, name保持现状
employee.setPhone("156");
int count = employeeDao.update(employee);
if (count == 1) {
  System.out.println("更新成功。");
} else {
  System.out.println("没有找到id为2的记录");
}"#,
    ),
    UsageEntry::new(
        "int update(BaseEmployee record, EmployeeCriteria criteria)",
        "通过criteria批量更新记录",
        "该方法将record中不为null的field更新到criteria选中的记录。",
        "返回被更新记录数量。",
        r#"
Employee employee = new Employee();
employee.setPhone("156");
// update employee set phone = '156' where id <= 4
int count = employeeDao.update(employee, EmployeeCriteria.idLessThanOrEqualTo(4L));
System.out.println("成功更新" + count + "条记录");"#,
    ),
    UsageEntry::new(
        "int delete(Long pk)",
        "删除主键对应的记录",
        "删除主键对应的记录。",
        "返回1如果删除成功，0如果没有该记录。",
        r#"
// delete from employee where id = 1
int count = employeeDao.delete(1L);
if (count == 1) {
  System.out.println("删除成功");
} else {
  System.out.println("没有找到该记录");
}"#,
    ),
    UsageEntry::new(
        "int delete(EmployeeCriteria criteria)",
        "通过条件批量删除",
        "批量删除，小心使用。",
        "被删除记录数量。",
        r#"
// delete from employee where id is not null
// 务必保证这是你想要的。
int count = employeeDao.delete(EmployeeCriteria.idIsNotNull());
System.out.println("一共删除" + count + "条记录");"#,
    ),
];

/// 用法页持有的全部条目，顺序固定
pub fn entries() -> &'static [UsageEntry] {
    &ENTRIES
}

pub fn render(entries: &[UsageEntry]) -> Node {
    super::page(Route::Usage)
        .child(Node::with_text(
            "p",
            "以下以 employee 表为例，列出 Yobatis 生成的 EmployeeDao 所提供的方法。",
        ))
        .children(entries.iter().map(render_entry))
}

fn render_entry(entry: &UsageEntry) -> Node {
    Node::element("section")
        .attr("class", "usage-entry")
        .child(
            Node::element("h2")
                .attr("class", "usage-name")
                .child(Node::with_text("code", entry.name())),
        )
        .child(Node::with_text("p", entry.brief()).attr("class", "usage-brief"))
        .child(Node::with_text("p", entry.doc()).attr("class", "usage-doc"))
        .child(
            Node::element("p")
                .attr("class", "usage-return")
                .child(Node::with_text("strong", "返回值："))
                .child(Node::text(entry.return_value())),
        )
        .child(
            Node::element("pre")
                .attr("class", "usage-example")
                .child(Node::with_text("code", entry.example()).attr("class", "language-java")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(page: &Node) -> Vec<&Node> {
        page.find_all(&|n| n.get_attr("class") == Some("usage-entry"))
    }

    #[test]
    fn test_nine_complete_entries() {
        assert_eq!(entries().len(), 9);
        assert!(entries().iter().all(UsageEntry::is_complete));
    }

    #[test]
    fn test_entry_order() {
        let names: Vec<&str> = entries().iter().map(UsageEntry::name).collect();
        assert_eq!(names.first(), Some(&"int insert(BaseEmployee record)"));
        assert_eq!(names[3], "List<Employee> selectList(EmployeeCriteria criteria)");
        assert_eq!(names.last(), Some(&"int delete(EmployeeCriteria criteria)"));
    }

    #[test]
    fn test_examples_keep_surrounding_line_breaks() {
        assert!(entries().iter().all(|e| e.example().starts_with('\n')));
        assert!(entries()[3].example().ends_with("}\n"));
        assert!(entries()[4].example().ends_with("的记录\");"));
    }

    #[test]
    fn test_render_one_section_per_entry_in_order() {
        let page = render(entries());
        let blocks = sections(&page);
        assert_eq!(blocks.len(), 9);
        for (block, entry) in blocks.iter().zip(entries()) {
            let text = block.text_content();
            assert!(text.starts_with(entry.name()));
            assert!(text.contains(entry.brief()));
            assert!(text.contains(entry.doc()));
            assert!(text.contains(entry.return_value()));
            assert!(text.contains(entry.example()));
        }
    }

    #[test]
    fn test_example_is_escaped_verbatim() {
        let html = render(entries()).to_html();
        assert!(html.contains("List&lt;Employee&gt; selectList"));
        assert!(html.contains("if (employee == null) {\n  System.out.println("));
    }

    #[test]
    fn test_render_is_idempotent() {
        let before: Vec<UsageEntry> = entries().to_vec();
        let first = render(entries()).to_html();
        let second = render(entries()).to_html();
        assert_eq!(first, second);
        assert_eq!(before.as_slice(), entries());
    }
}
