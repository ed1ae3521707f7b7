// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 内容模型
//!
//! 站点唯一的数据实体：一个 DAO 方法的用法说明。所有字段都是
//! 编译期确定的字面量，构造后不可变。

use serde_derive::Serialize;

/// 一个 DAO 方法签名及其说明、返回值约定和示例代码。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageEntry {
    name: &'static str,
    brief: &'static str,
    doc: &'static str,
    #[serde(rename = "returnValue")]
    return_value: &'static str,
    example: &'static str,
}

impl UsageEntry {
    pub const fn new(
        name: &'static str,
        brief: &'static str,
        doc: &'static str,
        return_value: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            name,
            brief,
            doc,
            return_value,
            example,
        }
    }

    /// 方法签名，仅用于展示，不做解析
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn brief(&self) -> &'static str {
        self.brief
    }

    pub fn doc(&self) -> &'static str {
        self.doc
    }

    pub fn return_value(&self) -> &'static str {
        self.return_value
    }

    /// 示例代码，原样展示
    pub fn example(&self) -> &'static str {
        self.example
    }

    pub fn is_complete(&self) -> bool {
        [self.name, self.brief, self.doc, self.return_value, self.example]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: UsageEntry = UsageEntry::new(
        "int count(EmployeeCriteria criteria)",
        "统计符合criteria的记录数量",
        "通过criteria统计记录数量。",
        "返回统计数量。",
        "int count = employeeDao.count(EmployeeCriteria.phoneIsNotNull());",
    );

    #[test]
    fn test_accessors() {
        assert_eq!(ENTRY.name(), "int count(EmployeeCriteria criteria)");
        assert_eq!(ENTRY.return_value(), "返回统计数量。");
        assert!(ENTRY.is_complete());
    }

    #[test]
    fn test_blank_field_is_incomplete() {
        let entry = UsageEntry::new("int count()", "b", "d", "  ", "e");
        assert!(!entry.is_complete());
    }

    #[test]
    fn test_serialize_uses_camel_case_return_value() {
        let json = serde_json::to_value(ENTRY).unwrap();
        assert_eq!(json["returnValue"], "返回统计数量。");
        assert_eq!(json["name"], "int count(EmployeeCriteria criteria)");
        assert!(json.get("return_value").is_none());
    }
}
