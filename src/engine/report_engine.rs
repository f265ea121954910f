use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::employee::{Employee, EmployeeRecord};
use super::error::{Error, RecordError};
use super::header;
use super::report::{
    mean_rate_by_department, payout_by_department, write_mean_rate, write_payout,
    DepartmentMeanRate, DepartmentPayout, Report,
};

/// Outcome of loading one CSV source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows that passed validation and were kept
    pub accepted: usize,
    /// Rows that were dropped
    pub skipped: usize,
}

/// The core report engine.
///
/// Collects validated employees from any number of CSV sources and
/// aggregates them into payout or mean rate reports.
#[derive(Debug, Default)]
pub struct ReportEngine {
    /// Validated employees from every source, in load order
    employees: Vec<Employee>,
}

impl ReportEngine {
    /// Create a new `ReportEngine` with no employees
    pub fn new() -> Self {
        log::trace!("ReportEngine initialized");
        Self {
            employees: Vec::new(),
        }
    }

    /// Primary API: Load employees from any source (File, `Cursor`, etc.)
    /// Note that the CSV reader is buffered automatically, so you should not wrap rdr in a buffered reader like `io::BufReader`.
    ///
    /// `source` only labels log lines. Invalid rows are skipped; header and
    /// CSV syntax errors abort the load.
    pub fn load_csv<R: Read>(&mut self, reader: R, source: &str) -> Result<LoadSummary, Error> {
        log::info!("Loading employees from {source}");

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All) // trim whitespace from fields
            .flexible(true) // short/long rows are skipped below, not fatal
            .from_reader(reader);

        let mut summary = LoadSummary::default();
        // Only committed to the engine once the whole source has been read
        let mut loaded = Vec::new();

        let raw_header = csv_reader.headers()?.clone();
        if raw_header.is_empty() {
            log::info!("{source} is empty, nothing to load");
            return Ok(summary);
        }
        let resolved = header::resolve(&raw_header)?;
        log::debug!("{source}: pay rate read from '{}'", resolved.rate_column);

        for result in csv_reader.records() {
            let row = result?;
            let line = row.position().map_or(0, csv::Position::line);

            // Step 1: Check the row shape against the header
            if row.len() != resolved.record.len() {
                let e = RecordError::ColumnCount {
                    expected: resolved.record.len(),
                    got: row.len(),
                };
                log::debug!("[{source}:{line}] - Skipped: {e}");
                summary.skipped += 1;
                continue;
            }

            // Step 2: Map the row onto the raw EmployeeRecord
            let record: EmployeeRecord = row.deserialize(Some(&resolved.record))?;
            log::trace!("[{source}:{line}] Parsing: {record}");

            // Step 3: Validate into an Employee
            match Employee::try_from(record) {
                Ok(employee) => {
                    loaded.push(employee);
                    summary.accepted += 1;
                }
                Err(
                    e @ (RecordError::OutOfRange { .. } | RecordError::Overflow { .. }),
                ) => {
                    log::warn!("[{source}:{line}] - Skipped: {e}");
                    summary.skipped += 1;
                }
                Err(e) => {
                    log::debug!("[{source}:{line}] - Skipped: {e}");
                    summary.skipped += 1;
                }
            }
        }

        self.employees.extend(loaded);
        log::info!(
            "Loading complete for {}: {} accepted, {} skipped, {} employees total",
            source,
            summary.accepted,
            summary.skipped,
            self.employees.len()
        );
        Ok(summary)
    }

    /// Load employees from a CSV file on disk.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.load_csv(file, &path.display().to_string())
    }

    /// Returns the number of employees loaded so far
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Returns the validated employees in load order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Payout per employee, grouped by department
    pub fn payout_report(&self) -> Vec<DepartmentPayout> {
        payout_by_department(&self.employees)
    }

    /// Mean pay rate per department
    pub fn mean_rate_report(&self) -> Vec<DepartmentMeanRate> {
        mean_rate_by_department(&self.employees)
    }

    /// Secondary API: Render a report to any sink (Stdout, File, etc.)
    pub fn write_report<W: Write>(&self, report: Report, writer: W) -> Result<(), Error> {
        log::info!(
            "Writing {report} report for {} employees",
            self.employees.len()
        );
        match report {
            Report::Payout => write_payout(&self.payout_report(), writer)?,
            Report::MeanRateDepartment => write_mean_rate(&self.mean_rate_report(), writer)?,
        }
        log::trace!("Report complete");
        Ok(())
    }
}
