use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::engine::{employee::Employee, Decimal};

/// Mean pay rate of one department.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentMeanRate {
    pub department: String,
    pub employees: usize,
    pub mean_rate: Decimal,
}

/// Average the pay rate over the employees of each department.
pub fn mean_rate_by_department(employees: &[Employee]) -> Vec<DepartmentMeanRate> {
    let mut rates: BTreeMap<&str, Vec<Decimal>> = BTreeMap::new();
    for employee in employees {
        rates
            .entry(employee.department())
            .or_default()
            .push(employee.rate());
    }

    rates
        .into_iter()
        .map(|(department, rates)| DepartmentMeanRate {
            department: department.to_owned(),
            employees: rates.len(),
            mean_rate: mean(&rates).normalize(),
        })
        .collect()
}

/// Arithmetic mean of non-negative rates; `rates` must not be empty.
///
/// Uses the exact sum when it fits, otherwise a running mean whose steps stay
/// within `Decimal` range.
fn mean(rates: &[Decimal]) -> Decimal {
    let count = Decimal::from(rates.len());
    if let Some(sum) = rates
        .iter()
        .try_fold(Decimal::ZERO, |sum, rate| sum.checked_add(*rate))
    {
        return sum / count;
    }

    log::debug!("Rate sum overflowed, falling back to a running mean");
    rates
        .iter()
        .zip(1u64..)
        .fold(Decimal::ZERO, |mean, (rate, n)| {
            mean + (*rate - mean) / Decimal::from(n)
        })
}

/// Render the mean rate report as a two column table.
pub fn write_mean_rate<W: Write>(rows: &[DepartmentMeanRate], mut writer: W) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Department\tMean Rate")?;
    writeln!(writer, "----------\t---------")?;
    for row in rows {
        writeln!(
            writer,
            "{:<10}\t{:.2}",
            row.department,
            row.mean_rate.round_dp(2)
        )?;
    }
    writer.flush()
}
