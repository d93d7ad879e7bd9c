//! Conversion of raw registry records into [`Organization`] values.

use super::RawRecord;
use reestr_core::{Dataset, Organization, ReestrError, ReestrResult};

/// Separator between levels of the hierarchical name.
pub const NAME_SEPARATOR: char = '\\';

/// Splits a hierarchical name into trimmed parts.
///
/// Empty segments are kept so positions line up with the source hierarchy:
/// a name with `k` separators always yields `k + 1` parts.
#[must_use]
pub fn split_name(name: &str) -> Vec<String> {
    name.split(NAME_SEPARATOR)
        .map(|part| part.trim().to_string())
        .collect()
}

/// Normalizes one raw record.
///
/// # Errors
///
/// Returns `MalformedRecord` when the record has no name.
pub fn normalize(record: RawRecord) -> ReestrResult<Organization> {
    let name = record
        .name
        .ok_or_else(|| ReestrError::MalformedRecord("record has no flNameRu".to_string()))?;

    Ok(Organization {
        bin: record.bin,
        name_parts: split_name(&name),
        organizational_form: record.opf,
        ownership_level0: record.kfs_l0,
        ownership_level1: record.kfs_l1,
        ownership_level2: record.kfs_l2,
        economic_activity_code: record.oked_l0,
        state_involvement: record.state_involvement,
        status: record.status,
        owner_bin: record.owner_bin,
        government_agency_bin: record.ogu_bin,
    })
}

/// Normalizes a full listing, keeping upstream order.
///
/// One malformed record fails the whole batch so a partial dataset is never
/// produced.
pub fn normalize_all(records: Vec<RawRecord>) -> ReestrResult<Dataset> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let bin = record.bin.clone();
            normalize(record).map_err(|e| match e {
                ReestrError::MalformedRecord(reason) => ReestrError::MalformedRecord(format!(
                    "record #{} (bin {}): {}",
                    index,
                    bin.as_deref().unwrap_or("-"),
                    reason
                )),
                other => other,
            })
        })
        .collect()
}
