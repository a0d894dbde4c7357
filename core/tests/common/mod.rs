//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use seqfix::{CellValue, LookupEntry, LookupTable};

pub fn header(labels: &[&str]) -> Vec<CellValue> {
    labels.iter().map(|label| CellValue::text(*label)).collect()
}

pub fn text_row(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|value| CellValue::text(*value)).collect()
}

pub fn table(pairs: &[(&str, &str)]) -> LookupTable {
    LookupTable::from_entries(
        pairs
            .iter()
            .map(|(id, sequence)| LookupEntry {
                id: (*id).to_string(),
                sequence: (*sequence).to_string(),
            })
            .collect(),
    )
}
