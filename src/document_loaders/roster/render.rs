use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::document_loaders::{Record, Table};

use super::{RosterOptions, Verbosity};

/// Printed in the numbered roster when a name, position, id or age is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rows sharing one department value, in table order.
#[derive(Debug)]
pub(crate) struct Group<'a> {
    pub department: &'a str,
    pub members: Vec<&'a Record>,
}

/// Partitions the table by the department column.
///
/// Groups come out in ascending department order: numeric when every key
/// parses as a number, otherwise by string. Rows without a department value
/// are left out.
pub(crate) fn group_by<'a>(table: &'a Table, column: usize) -> Vec<Group<'a>> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group<'a>> = Vec::new();

    for record in table.records() {
        let Some(department) = record.get(column) else {
            continue;
        };
        let index = *positions.entry(department).or_insert_with(|| {
            groups.push(Group {
                department,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].members.push(record);
    }

    let numeric: Option<Vec<f64>> = groups
        .iter()
        .map(|g| g.department.trim().parse::<f64>().ok())
        .collect();

    match numeric {
        Some(keys) => {
            let mut keyed: Vec<(f64, Group<'a>)> = keys.into_iter().zip(groups).collect();
            keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
            keyed.into_iter().map(|(_, g)| g).collect()
        }
        None => {
            groups.sort_by(|a, b| a.department.cmp(b.department));
            groups
        }
    }
}

/// Counts each distinct non-missing value, most frequent first. Equal counts
/// keep the order in which the values first appear.
pub(crate) fn tally<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for value in values.into_iter().flatten() {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Writes the text of one department document.
pub(crate) struct GroupRenderer<'a> {
    table: &'a Table,
    options: &'a RosterOptions,
}

impl<'a> GroupRenderer<'a> {
    pub fn new(table: &'a Table, options: &'a RosterOptions) -> Self {
        Self { table, options }
    }

    pub fn render(&self, group: &Group<'_>) -> Result<String, fmt::Error> {
        let mut out = String::new();
        let d = group.department;
        let n = group.members.len();

        self.write_header(&mut out, d, n)?;
        self.write_keywords(&mut out, d)?;
        self.write_roster(&mut out, d, &group.members)?;
        self.write_details(&mut out, d, &group.members)?;

        writeln!(out, "この部署（{d}）には合計{n}名の従業員が所属しています。")?;

        if self.table.has_column(&self.options.columns.position) {
            self.write_positions(&mut out, &group.members)?;
        }

        Ok(out)
    }

    fn field<'r>(&self, record: &'r Record, column: &str) -> &'r str {
        self.table.value(record, column).unwrap_or(NOT_AVAILABLE)
    }

    fn write_header(&self, out: &mut String, d: &str, n: usize) -> fmt::Result {
        writeln!(out, "部署: {d}")?;
        writeln!(out, "部署名: {d}")?;
        writeln!(out, "{d}部署")?;
        writeln!(out, "{d}の部署")?;
        writeln!(out, "所属人数: {n}名")?;
        writeln!(out, "従業員総数: {n}人")?;
        writeln!(out, "スタッフ数: {n}人")?;
        writeln!(out, "メンバー数: {n}人")?;
        writeln!(out, "{d}に所属している従業員: {n}名")?;
        writeln!(out, "{d}に所属する従業員情報: {n}名")?;
        writeln!(out, "{d}の従業員一覧: {n}名")?;
        writeln!(out, "{d}所属の社員: {n}名")?;
        writeln!(out)
    }

    fn write_keywords(&self, out: &mut String, d: &str) -> fmt::Result {
        write!(
            out,
            "【検索キーワード】{d} {d}部署 {d}の部署 従業員 社員 スタッフ メンバー 人事 一覧 リスト 名簿 所属 情報 詳細 "
        )?;
        write!(
            out,
            "{d}に所属している {d}に所属する {d}の従業員 {d}の社員 {d}のスタッフ "
        )?;
        write!(out, "{d}従業員情報 {d}社員情報 {d}スタッフ情報 {d}メンバー情報 ")?;
        writeln!(out, "一覧化 リスト化 教えて 紹介 表示")?;
        writeln!(out)?;

        if self.options.verbosity == Verbosity::Extended {
            write!(
                out,
                "【{d}専用検索強化】{d}に所属している従業員情報を一覧化 {d}の従業員情報 {d}従業員一覧 "
            )?;
            write!(
                out,
                "{d}社員一覧 {d}スタッフ一覧 {d}メンバー一覧 {d}の社員情報 {d}のスタッフ情報 "
            )?;
            write!(
                out,
                "{d}に所属する従業員 {d}に所属している社員 {d}に所属しているスタッフ "
            )?;
            writeln!(out, "{d}の人員 {d}の職員 {d}の構成員 {d}チーム {d}組織")?;
            writeln!(out)?;
        }

        Ok(())
    }

    fn write_roster(&self, out: &mut String, d: &str, members: &[&Record]) -> fmt::Result {
        let columns = &self.options.columns;
        let n = members.len();

        writeln!(out, "【{d}従業員名簿・一覧】（全{n}名）")?;
        writeln!(out, "{d}に所属している従業員の一覧は以下の通りです：")?;

        for (i, record) in members.iter().enumerate() {
            let i = i + 1;
            let name = self.field(record, &columns.full_name);
            let position = self.field(record, &columns.position);
            let employee_id = self.field(record, &columns.employee_id);

            match self.options.verbosity {
                Verbosity::Extended => {
                    let age = self.field(record, &columns.age);
                    writeln!(
                        out,
                        "{i}. 【従業員{i}】{name} - 役職: {position} - 年齢: {age}歳 - ID: {employee_id}"
                    )?;
                }
                Verbosity::Standard => {
                    writeln!(
                        out,
                        "{i}. 【従業員{i}】{name} - 役職: {position} - ID: {employee_id}"
                    )?;
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "上記{n}名が{d}に所属している全従業員です。")?;
        writeln!(out, "{d}の従業員情報は合計{n}名分あります。")?;
        writeln!(out, "{d}に所属する社員は{n}人です。")?;
        writeln!(out)
    }

    fn write_details(&self, out: &mut String, d: &str, members: &[&Record]) -> fmt::Result {
        let n = members.len();

        writeln!(out, "【{d}の詳細従業員情報一覧（全{n}名）】")?;
        writeln!(out, "{d}に所属している各従業員の詳細情報：")?;
        writeln!(out)?;

        for (i, record) in members.iter().enumerate() {
            let name = self.field(record, &self.options.columns.full_name);
            writeln!(out, "■ 従業員{} - {name}（{d}所属）", i + 1)?;

            for (column, value) in self.table.headers().iter().zip(record.values()) {
                if let Some(value) = value {
                    writeln!(out, "  {column}: {value}")?;
                }
            }

            writeln!(out, "  所属部署: {d}")?;
            writeln!(out, "  この従業員は{d}に所属しています。")?;
            write!(out, "\n---\n\n")?;
        }

        Ok(())
    }

    fn write_positions(&self, out: &mut String, members: &[&Record]) -> fmt::Result {
        let column = &self.options.columns.position;
        let counts = tally(members.iter().map(|r| self.table.value(r, column)));

        let positions = counts
            .iter()
            .map(|(position, count)| format!("{position}({count}名)"))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(out, "役職構成: {positions}")
    }
}
