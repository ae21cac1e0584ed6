use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;

use mediq_lib::types::{
    Appointment, LabTest, MedicalHistory, Medicine, Prescription, RevenueReport, Transaction,
    User,
};
use mediq_lib::{ClinicClient, PageQuery, RequestContext, Resource};

use crate::output::{self, OutputFormat, ToRow};

#[derive(Clone, Copy, ValueEnum)]
pub enum ResourceArg {
    Appointments,
    Medicines,
    Prescriptions,
    LabTests,
    MedicalHistories,
    Transactions,
    RevenueReports,
    Users,
}

impl From<ResourceArg> for Resource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Appointments => Resource::Appointments,
            ResourceArg::Medicines => Resource::Medicines,
            ResourceArg::Prescriptions => Resource::Prescriptions,
            ResourceArg::LabTests => Resource::LabTests,
            ResourceArg::MedicalHistories => Resource::MedicalHistories,
            ResourceArg::Transactions => Resource::Transactions,
            ResourceArg::RevenueReports => Resource::RevenueReports,
            ResourceArg::Users => Resource::Users,
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Collection to list
    #[arg(value_enum)]
    pub resource: ResourceArg,

    /// Page number (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value_t = 10)]
    pub page_size: i64,

    /// Walk every page and print the accumulated items
    #[arg(long)]
    pub all: bool,
}

pub async fn run(
    args: &ListArgs,
    client: &ClinicClient,
    ctx: &RequestContext,
    format: &OutputFormat,
) -> Result<()> {
    match args.resource {
        ResourceArg::Appointments => list_resource::<Appointment>(args, client, ctx, format).await,
        ResourceArg::Medicines => list_resource::<Medicine>(args, client, ctx, format).await,
        ResourceArg::Prescriptions => {
            list_resource::<Prescription>(args, client, ctx, format).await
        }
        ResourceArg::LabTests => list_resource::<LabTest>(args, client, ctx, format).await,
        ResourceArg::MedicalHistories => {
            list_resource::<MedicalHistory>(args, client, ctx, format).await
        }
        ResourceArg::Transactions => list_resource::<Transaction>(args, client, ctx, format).await,
        ResourceArg::RevenueReports => {
            list_resource::<RevenueReport>(args, client, ctx, format).await
        }
        ResourceArg::Users => list_resource::<User>(args, client, ctx, format).await,
    }
}

async fn list_resource<T>(
    args: &ListArgs,
    client: &ClinicClient,
    ctx: &RequestContext,
    format: &OutputFormat,
) -> Result<()>
where
    T: ToRow + Serialize + DeserializeOwned,
{
    let resource = Resource::from(args.resource);
    if args.all {
        let items = client
            .walk::<T>(resource, ctx, args.page_size)?
            .collect_all()
            .await?;
        output::print_items(&items, format)
    } else {
        let query = PageQuery::default()
            .with_page(args.page)
            .with_page_size(args.page_size);
        let page = client.list::<T>(resource, ctx, &query).await?;
        output::print_page(&page, format)
    }
}
