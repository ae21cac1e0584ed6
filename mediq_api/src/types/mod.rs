mod envelope;
pub use self::envelope::{Envelope, PageEnvelope, Pagination};

mod identity;
pub use self::identity::{Identity, Role};

mod appointment;
pub use self::appointment::{Appointment, AppointmentStatus};

mod pharmacy;
pub use self::pharmacy::{Medicine, Prescription};

mod records;
pub use self::records::{LabTest, MedicalHistory};

mod billing;
pub use self::billing::{RevenueReport, Transaction};

mod user;
pub use self::user::User;
