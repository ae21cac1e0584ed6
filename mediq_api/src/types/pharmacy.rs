use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the medicines list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub unit_price: f64,
    pub stock: i64,
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
}

/// One row of the prescriptions list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    pub issued_on: NaiveDate,
    pub medicine_count: i64,
}
