use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the transactions list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
    #[serde(default)]
    pub method: Option<String>,
}

/// One row of the revenue report list view. Aggregated per period,
/// so there is no entity id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub period: String,
    pub total: f64,
    pub transaction_count: i64,
}
