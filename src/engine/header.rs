use csv::StringRecord;

use super::error::Error;

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["id", "email", "name", "department", "hours_worked"];

/// Accepted names of the pay rate column, in priority order.
pub const RATE_COLUMNS: [&str; 3] = ["hourly_rate", "rate", "salary"];

/// Field name `EmployeeRecord` expects for the pay rate.
const RATE_FIELD: &str = "rate";

/// Header row after alias resolution.
#[derive(Debug, Clone)]
pub struct ResolvedHeader {
    /// Header with the chosen alias renamed to `rate`, the other aliases and
    /// earlier duplicates blanked.
    pub record: StringRecord,
    /// Which alias supplied the pay rate.
    pub rate_column: &'static str,
}

/// Check the required columns and pick the pay rate column.
pub fn resolve(header: &StringRecord) -> Result<ResolvedHeader, Error> {
    let names: Vec<&str> = header.iter().map(str::trim).collect();

    for column in REQUIRED_COLUMNS {
        if !names.contains(&column) {
            return Err(Error::MissingColumn { column });
        }
    }

    let rate_column = RATE_COLUMNS
        .into_iter()
        .find(|alias| names.contains(alias))
        .ok_or(Error::MissingRateColumn {
            expected: &RATE_COLUMNS,
        })?;

    let mut fields: Vec<&str> = names
        .iter()
        .map(|&name| {
            if name == rate_column {
                RATE_FIELD
            } else if RATE_COLUMNS.contains(&name) {
                ""
            } else {
                name
            }
        })
        .collect();

    // A repeated column name reads from its last occurrence
    for i in 0..fields.len() {
        if !fields[i].is_empty() && fields[i + 1..].contains(&fields[i]) {
            log::debug!("Column '{}' repeats, using its last occurrence", fields[i]);
            fields[i] = "";
        }
    }
    let record = StringRecord::from(fields);

    log::trace!("Resolved pay rate column: {rate_column}");
    Ok(ResolvedHeader {
        record,
        rate_column,
    })
}
