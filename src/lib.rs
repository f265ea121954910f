//! Payroll reports from employee CSV files.
//!
//! Load one or more CSV sources into a [`ReportEngine`], then render either a
//! per-employee payout report or a per-department mean rate report.

mod engine;

pub use engine::{
    DepartmentMeanRate, DepartmentPayout, Employee, EmployeeRecord, Error, LoadSummary,
    PayoutLine, RecordError, Report, ReportEngine,
};
