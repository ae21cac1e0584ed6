use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the laboratory tests list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabTest {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub test_name: String,
    pub performed_on: NaiveDate,
    #[serde(default)]
    pub result: Option<String>,
}

/// One row of the medical histories list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub diagnosis: String,
    pub recorded_on: NaiveDate,
    #[serde(default)]
    pub treatment: Option<String>,
}
