pub(crate) use clap::Parser;
use payroll_report::Report;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "payroll-report",
    author,
    version,
    about = "Builds payout and mean rate reports from employee CSV files",
    long_about = None,
    after_help = "INPUT:\n    CSV files with a header row and the columns id, email, name, department,\n    hours_worked and one of hourly_rate, rate or salary. Invalid rows are skipped.\n\nOUTPUT:\n    The report is printed to stdout as a plain text table:\n\n    payroll-report data1.csv data2.csv --report payout"
)]
pub struct Args {
    /// Paths to the input employee CSV files
    #[arg(
        required = true,
        value_name = "FILE",
        help = "Input CSV files; rows from all files are combined"
    )]
    pub files: Vec<PathBuf>,

    /// Report to generate
    #[arg(long, value_enum, value_name = "REPORT")]
    pub report: Report,
}
