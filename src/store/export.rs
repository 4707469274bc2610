//! CSV serialization of report snapshots
//!
//! Output is UTF-8 with the header `id,title,owner,regDate` followed by one
//! row per report. Fields containing commas, quotes, or newlines are quoted
//! per RFC 4180, so arbitrary titles and owner names round-trip safely.

use crate::models::Report;

/// Column order of the exported file
const CSV_HEADER: [&str; 4] = ["id", "title", "owner", "regDate"];

/// Filename suggested to the browser via Content-Disposition
pub const EXPORT_FILENAME: &str = "p01a04_list.csv";

/// Serialize reports to CSV bytes, header first, rows in the given order.
pub fn to_csv(reports: &[Report]) -> csv::Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;

    for report in reports {
        wtr.write_record(&[
            report.id.to_string(),
            report.title.clone(),
            report.owner.clone(),
            report.reg_date.clone(),
        ])?;
    }

    wtr.into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
