mod mean_rate;
mod payout;

pub use mean_rate::{mean_rate_by_department, write_mean_rate, DepartmentMeanRate};
pub use payout::{payout_by_department, write_payout, DepartmentPayout, PayoutLine};

use std::io::{self, Write};

/// Report kinds the engine can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Report {
    /// Hours worked times rate for every employee, grouped by department
    #[value(name = "payout")]
    Payout,
    /// Arithmetic mean pay rate per department
    #[value(name = "mean_rate_department")]
    MeanRateDepartment,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Payout => write!(f, "payout"),
            Report::MeanRateDepartment => write!(f, "mean_rate_department"),
        }
    }
}

/// Write one table row: cells left-aligned to their column width, tab separated.
fn write_row<W: Write, S: AsRef<str>>(
    writer: &mut W,
    cells: &[S],
    widths: &[usize],
) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(writer, "{line}")
}
