//! Report engine module.
//!
//! This module contains the core report logic including:
//! - `ReportEngine` - Loads CSV sources and holds the validated employees
//! - `Employee` - Raw and validated employee rows
//! - `header` - Required columns and pay-rate alias resolution
//! - `Report` types - Payout and mean rate per department
//! - `Error` types - File-level and row-level errors

mod employee;
mod error;
mod header;
mod report;
mod report_engine;

pub(crate) use rust_decimal::Decimal;

pub use employee::{Employee, EmployeeRecord};
pub use error::{Error, RecordError};
pub use report::{DepartmentMeanRate, DepartmentPayout, PayoutLine, Report};
pub use report_engine::{LoadSummary, ReportEngine};
