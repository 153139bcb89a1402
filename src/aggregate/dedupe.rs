//! Medical-device deduplication: one surviving row per device type.

use std::collections::HashMap;

use super::view::MedicalDeviceRow;

/// Collapse measurement rows to one per device-type id, keeping the row with
/// the latest `last_measurement_date`. On an exact timestamp tie the
/// later-encountered row wins; the incumbent survives only while strictly
/// newer. Output preserves the order in which keys were first seen.
pub fn dedupe_by_latest(records: Vec<MedicalDeviceRow>) -> Vec<MedicalDeviceRow> {
    let mut slot_by_id: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<MedicalDeviceRow> = Vec::new();

    for record in records {
        match slot_by_id.get(&record.id) {
            Some(&slot) => {
                if out[slot].last_measurement_date <= record.last_measurement_date {
                    out[slot] = record;
                }
            }
            None => {
                slot_by_id.insert(record.id.clone(), out.len());
                out.push(record);
            }
        }
    }

    out
}
