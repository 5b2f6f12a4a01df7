//! Leave history as a downloadable table.

use leavedesk_domain::LeaveRecord;

pub const EMPLOYEE_HEADER: [&str; 6] = ["From", "To", "Days", "Type", "Reason", "Status"];
pub const ADMIN_HEADER: [&str; 6] = ["Employee", "From", "To", "Type", "Reason", "Status"];

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn employee_rows(records: &[LeaveRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            vec![
                record.from_date.format(DATE_FORMAT).to_string(),
                record.to_date.format(DATE_FORMAT).to_string(),
                record.duration_days().to_string(),
                record.leave_type.to_string(),
                record.reason.clone(),
                record.status.to_string(),
            ]
        })
        .collect()
}

pub fn admin_rows(records: &[LeaveRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            vec![
                record
                    .owner_name
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                record.from_date.format(DATE_FORMAT).to_string(),
                record.to_date.format(DATE_FORMAT).to_string(),
                record.leave_type.to_string(),
                record.reason.clone(),
                record.status.to_string(),
            ]
        })
        .collect()
}

pub fn to_csv(header: &[&str], rows: &[Vec<String>]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
