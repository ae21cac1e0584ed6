//! The fixed set of paginated clinic collections.

use std::fmt;

/// A paginated collection exposed by the clinic API.
///
/// Every collection shares the same list contract
/// (`GET /{path}?pageSize=&pageNumber=`) and the same soft-delete route
/// (`PUT /{path}/DeleteById/{id}`); only the path differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Appointments,
    Medicines,
    Prescriptions,
    LabTests,
    MedicalHistories,
    Transactions,
    RevenueReports,
    Users,
}

impl Resource {
    /// URL path segment for this collection's endpoints.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Appointments => "/appointments",
            Resource::Medicines => "/medicines",
            Resource::Prescriptions => "/prescriptions",
            Resource::LabTests => "/laboratory-tests",
            Resource::MedicalHistories => "/medical-histories",
            Resource::Transactions => "/transactions",
            Resource::RevenueReports => "/revenue-reports",
            Resource::Users => "/users",
        }
    }

    /// Stable short name, used for cache keys and logging.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Appointments => "appointments",
            Resource::Medicines => "medicines",
            Resource::Prescriptions => "prescriptions",
            Resource::LabTests => "lab-tests",
            Resource::MedicalHistories => "medical-histories",
            Resource::Transactions => "transactions",
            Resource::RevenueReports => "revenue-reports",
            Resource::Users => "users",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
