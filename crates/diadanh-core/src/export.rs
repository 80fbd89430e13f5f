// crates/diadanh-core/src/export.rs

//! Spreadsheet export of records as CSV, using the dataset's own column
//! names so the file re-imports cleanly into the tools it came from.

use crate::error::Result;
use crate::model::PlaceRecord;
use crate::traits::GazetteerBackend;
use std::io::Write;

/// Column headers, identical to the source dataset keys (the trailing space
/// on the new ward code is part of the key).
pub const CSV_HEADERS: [&str; 9] = [
    "Tên tỉnh/TP mới",
    "Tên tỉnh/TP cũ",
    "Tên Quận huyện TMS (cũ)",
    "Tên Quận huyện TMS (mới)",
    "Tên Phường/Xã mới",
    "Tên Phường/Xã cũ",
    "Mã phường/xã mới ",
    "Mã phường/xã cũ",
    "Mã Quận huyện TMS (cũ)",
];

fn row<B: GazetteerBackend>(r: &PlaceRecord<B>) -> [&str; 9] {
    [
        r.province_new(),
        r.province_old(),
        r.district_old(),
        r.district_new(),
        r.ward_new(),
        r.ward_old(),
        r.ward_code_new(),
        r.ward_code_old(),
        r.district_code_old(),
    ]
    .map(|v| v.unwrap_or(""))
}

/// Writes a header row followed by one row per record. Returns the number
/// of data rows written.
pub fn export_csv<'a, B, I, W>(records: I, writer: W) -> Result<usize>
where
    B: GazetteerBackend,
    I: IntoIterator<Item = &'a PlaceRecord<B>>,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;

    let mut rows = 0;
    for record in records {
        wtr.write_record(row(record))?;
        rows += 1;
    }
    wtr.flush()?;
    log::debug!("exported {rows} records as CSV");
    Ok(rows)
}
