use super::{FlowRecord, FlowTable, LocationRule};
use crate::error::TableConversionError;
use serde::{Deserialize, Serialize};

/// One row of the storage collaborator's schema.
///
/// Field names follow the storage contract: two named location slots, each
/// half nullable independently of the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFlowRow {
    pub code: String,
    pub mapping: String,
    pub flow_name: String,
    #[serde(default)]
    pub physical_location_1: Option<String>,
    #[serde(default)]
    pub time_rule_1: Option<String>,
    #[serde(default)]
    pub physical_location_2: Option<String>,
    #[serde(default)]
    pub time_rule_2: Option<String>,
    #[serde(default)]
    pub attached_flow: Option<String>,
}

impl RawFlowRow {
    /// Converts a raw row into the typed model.
    ///
    /// A location slot contributes a `LocationRule` only when BOTH its
    /// location and its rule string are non-empty; a half-filled slot is
    /// silently dropped, not an error.
    pub fn into_record(self) -> Result<FlowRecord, TableConversionError> {
        if self.code.trim().is_empty() {
            return Err(TableConversionError::ValidationError(
                "row has an empty flow code".to_string(),
            ));
        }

        let slots = [
            (self.physical_location_1, self.time_rule_1),
            (self.physical_location_2, self.time_rule_2),
        ];
        let mut location_rules = Vec::new();
        for (location, rule) in slots {
            if let (Some(location), Some(rule)) = (location, rule) {
                if !location.trim().is_empty() && !rule.trim().is_empty() {
                    location_rules.push(LocationRule { location, rule });
                }
            }
        }

        let attached_mapping = self
            .attached_flow
            .filter(|mapping| !mapping.trim().is_empty());

        Ok(FlowRecord {
            code: self.code,
            mapping: self.mapping,
            name: self.flow_name,
            location_rules,
            attached_mapping,
        })
    }
}

/// A trait for custom storage formats that can be converted into a
/// `FlowTable`. The in-tree `RawFlowRow` format implements it; a real
/// storage collaborator provides its own.
pub trait IntoFlowTable {
    fn into_table(self) -> Result<FlowTable, TableConversionError>;
}

impl IntoFlowTable for Vec<RawFlowRow> {
    fn into_table(self) -> Result<FlowTable, TableConversionError> {
        let records: Vec<FlowRecord> = self
            .into_iter()
            .map(RawFlowRow::into_record)
            .collect::<Result<_, _>>()?;
        Ok(records.into_iter().collect())
    }
}
