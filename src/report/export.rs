//! CSV export of recorded history

use crate::core::{Error, HistoricalRecord, Result};
use crate::i18n::I18n;
use chrono::NaiveDate;
use csv::WriterBuilder;
use std::io::Write;

/// Write the records dated within `[from, to]` as `;`-separated CSV, newest first
///
/// Returns the number of data rows written. An empty range still produces the
/// header line.
pub fn export_csv<W: Write>(
    writer: W,
    records: &[HistoricalRecord],
    from: NaiveDate,
    to: NaiveDate,
    i18n: &I18n,
) -> Result<usize> {
    if to < from {
        return Err(Error::invalid(format!("export range ends ({}) before it starts ({})", to, from)));
    }

    let mut rows: Vec<&HistoricalRecord> = records
        .iter()
        .filter(|r| r.date >= from && r.date <= to)
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(writer);

    writer.write_record([
        i18n.get("export.header.date"),
        i18n.get("export.header.appliance"),
        i18n.get("export.header.consumption"),
        i18n.get("export.header.cost"),
        i18n.get("export.header.tariff"),
        i18n.get("export.header.usage_hours"),
    ])?;

    let general = i18n.get("export.general");
    for record in &rows {
        writer.write_record([
            record.date.to_string(),
            record.appliance_name.clone().unwrap_or_else(|| general.clone()),
            format!("{:.4}", record.consumption_kwh),
            format!("{:.2}", record.cost),
            record.tariff_label.clone().unwrap_or_default(),
            record.usage_hours.map(|h| format!("{:.2}", h)).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    log::info!("Exported {} records from {} to {}", rows.len(), from, to);
    Ok(rows.len())
}

/// Same as [`export_csv`], collected into a string
pub fn export_csv_string(
    records: &[HistoricalRecord],
    from: NaiveDate,
    to: NaiveDate,
    i18n: &I18n,
) -> Result<String> {
    let mut buffer = Vec::new();
    export_csv(&mut buffer, records, from, to, i18n)?;
    String::from_utf8(buffer).map_err(|e| Error::Serialization(e.to_string()))
}
