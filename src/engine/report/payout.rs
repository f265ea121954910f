use std::collections::BTreeMap;
use std::io::{self, Write};

use super::write_row;
use crate::engine::{employee::Employee, Decimal};

const COLUMNS: [&str; 4] = ["name", "hours", "rate", "payout"];

/// One employee line of the payout report.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutLine {
    pub name: String,
    pub hours_worked: Decimal,
    pub rate: Decimal,
    pub payout: Decimal,
}

impl PayoutLine {
    fn cells(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.hours_worked.to_string(),
            self.rate.to_string(),
            format!("${}", self.payout.round_dp(2).normalize()),
        ]
    }
}

/// Payout lines of a single department, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentPayout {
    pub department: String,
    pub lines: Vec<PayoutLine>,
}

/// Compute the payout of every employee, grouped by department name.
pub fn payout_by_department(employees: &[Employee]) -> Vec<DepartmentPayout> {
    let mut grouped: BTreeMap<&str, Vec<PayoutLine>> = BTreeMap::new();
    for employee in employees {
        grouped
            .entry(employee.department())
            .or_default()
            .push(PayoutLine {
                name: employee.name().to_owned(),
                hours_worked: employee.hours_worked(),
                rate: employee.rate(),
                payout: employee.payout(),
            });
    }

    grouped
        .into_iter()
        .map(|(department, lines)| DepartmentPayout {
            department: department.to_owned(),
            lines,
        })
        .collect()
}

/// Render the payout report, one table per department.
pub fn write_payout<W: Write>(groups: &[DepartmentPayout], mut writer: W) -> io::Result<()> {
    for group in groups {
        writeln!(writer)?;
        writeln!(writer, "{}", group.department)?;

        let rows: Vec<[String; 4]> = group.lines.iter().map(PayoutLine::cells).collect();
        let widths: Vec<usize> = COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .fold(column.len(), usize::max)
            })
            .collect();

        write_row(&mut writer, &COLUMNS, &widths)?;
        let dashes: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        write_row(&mut writer, &dashes, &widths)?;
        for row in &rows {
            write_row(&mut writer, row, &widths)?;
        }
    }
    writer.flush()
}
