//! Table and JSON rendering for list output.

use anyhow::Result;
use serde::Serialize;
use tabled::{Table, Tabled};

use mediq_lib::types::{
    Appointment, LabTest, MedicalHistory, Medicine, PageEnvelope, Prescription, RevenueReport,
    Role, Transaction, User,
};

#[derive(Clone, Copy, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

/// A list item that knows its table representation.
pub trait ToRow {
    type Row: Tabled;
    fn to_row(&self) -> Self::Row;
}

fn print_table<T: ToRow>(items: &[T]) {
    let rows: Vec<T::Row> = items.iter().map(ToRow::to_row).collect();
    println!("{}", Table::new(rows));
}

/// Prints one page plus a pagination footer in table mode, or the whole
/// envelope in JSON mode.
pub fn print_page<T: ToRow + Serialize>(
    page: &PageEnvelope<T>,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page)?),
        OutputFormat::Table => {
            print_table(&page.data);
            let paging = &page.pagination;
            println!(
                "page {} of {} ({} items total)",
                paging.page_number, paging.total_pages, paging.total_items
            );
        }
    }
    Ok(())
}

/// Prints an accumulated item list (`--all` output).
pub fn print_items<T: ToRow + Serialize>(items: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Table => {
            print_table(items);
            println!("{} items", items.len());
        }
    }
    Ok(())
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn roles_to_string(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|r| format!("{:?}", r))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Tabled)]
pub struct AppointmentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Patient")]
    patient: String,
    #[tabled(rename = "Doctor")]
    doctor: String,
    #[tabled(rename = "Scheduled")]
    scheduled: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl ToRow for Appointment {
    type Row = AppointmentRow;
    fn to_row(&self) -> AppointmentRow {
        AppointmentRow {
            id: self.id,
            patient: self.patient_name.clone(),
            doctor: self.doctor_name.clone(),
            scheduled: self.scheduled_at.format("%Y-%m-%d %H:%M").to_string(),
            status: format!("{:?}", self.status),
        }
    }
}

#[derive(Tabled)]
pub struct MedicineRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Unit price")]
    unit_price: String,
    #[tabled(rename = "Stock")]
    stock: i64,
    #[tabled(rename = "Expires")]
    expires: String,
}

impl ToRow for Medicine {
    type Row = MedicineRow;
    fn to_row(&self) -> MedicineRow {
        MedicineRow {
            id: self.id,
            name: self.name.clone(),
            unit_price: format!("{:.2}", self.unit_price),
            stock: self.stock,
            expires: self
                .expires_on
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Tabled)]
pub struct PrescriptionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Patient")]
    patient: String,
    #[tabled(rename = "Doctor")]
    doctor: String,
    #[tabled(rename = "Issued")]
    issued: String,
    #[tabled(rename = "Medicines")]
    medicines: i64,
}

impl ToRow for Prescription {
    type Row = PrescriptionRow;
    fn to_row(&self) -> PrescriptionRow {
        PrescriptionRow {
            id: self.id,
            patient: self.patient_name.clone(),
            doctor: self.doctor_name.clone(),
            issued: self.issued_on.to_string(),
            medicines: self.medicine_count,
        }
    }
}

#[derive(Tabled)]
pub struct LabTestRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Patient")]
    patient: String,
    #[tabled(rename = "Test")]
    test: String,
    #[tabled(rename = "Performed")]
    performed: String,
    #[tabled(rename = "Result")]
    result: String,
}

impl ToRow for LabTest {
    type Row = LabTestRow;
    fn to_row(&self) -> LabTestRow {
        LabTestRow {
            id: self.id,
            patient: self.patient_name.clone(),
            test: self.test_name.clone(),
            performed: self.performed_on.to_string(),
            result: self
                .result
                .clone()
                .unwrap_or_else(|| "pending".to_string()),
        }
    }
}

#[derive(Tabled)]
pub struct MedicalHistoryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Patient")]
    patient: String,
    #[tabled(rename = "Diagnosis")]
    diagnosis: String,
    #[tabled(rename = "Recorded")]
    recorded: String,
    #[tabled(rename = "Treatment")]
    treatment: String,
}

impl ToRow for MedicalHistory {
    type Row = MedicalHistoryRow;
    fn to_row(&self) -> MedicalHistoryRow {
        MedicalHistoryRow {
            id: self.id,
            patient: self.patient_name.clone(),
            diagnosis: self.diagnosis.clone(),
            recorded: self.recorded_on.to_string(),
            treatment: or_dash(&self.treatment),
        }
    }
}

#[derive(Tabled)]
pub struct TransactionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Patient")]
    patient: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Method")]
    method: String,
}

impl ToRow for Transaction {
    type Row = TransactionRow;
    fn to_row(&self) -> TransactionRow {
        TransactionRow {
            id: self.id,
            patient: self.patient_name.clone(),
            amount: format!("{:.2}", self.amount),
            paid: self.paid_at.format("%Y-%m-%d %H:%M").to_string(),
            method: or_dash(&self.method),
        }
    }
}

#[derive(Tabled)]
pub struct RevenueReportRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Transactions")]
    transactions: i64,
}

impl ToRow for RevenueReport {
    type Row = RevenueReportRow;
    fn to_row(&self) -> RevenueReportRow {
        RevenueReportRow {
            period: self.period.clone(),
            total: format!("{:.2}", self.total),
            transactions: self.transaction_count,
        }
    }
}

#[derive(Tabled)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Roles")]
    roles: String,
    #[tabled(rename = "Deleted")]
    deleted: String,
}

impl ToRow for User {
    type Row = UserRow;
    fn to_row(&self) -> UserRow {
        UserRow {
            id: self.id,
            username: self.username.clone(),
            name: or_dash(&self.full_name),
            roles: roles_to_string(&self.roles),
            deleted: if self.is_deleted { "yes" } else { "no" }.to_string(),
        }
    }
}
