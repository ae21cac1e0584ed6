//! Forward-only lazy pagination walk.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use mediq_api::types::PageEnvelope;
use mediq_api::{PageQuery, RequestContext, Resource};

use crate::client::ClinicClient;
use crate::error::MediqError;

/// Lazy, finite, forward-only walk over one resource's pages.
///
/// Nothing is fetched until [`next_page`](Self::next_page) is called, and
/// page N+1 is never requested before page N's envelope (and its has-next
/// flag) is known, so accumulated items always match server order. Dropping
/// the walker issues no further requests; there is no background prefetch.
/// Not restartable: build a new walker to start over from page 1.
pub struct PageWalker<'a, T> {
    client: &'a ClinicClient,
    ctx: &'a RequestContext,
    resource: Resource,
    page_size: i64,
    next_page: i64,
    finished: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> PageWalker<'a, T>
where
    T: DeserializeOwned + Serialize,
{
    pub(crate) fn new(
        client: &'a ClinicClient,
        ctx: &'a RequestContext,
        resource: Resource,
        page_size: i64,
    ) -> Result<Self, MediqError> {
        if page_size < 1 {
            return Err(MediqError::InvalidInput(format!(
                "page size must be positive, got {}",
                page_size
            )));
        }
        Ok(Self {
            client,
            ctx,
            resource,
            page_size,
            next_page: 1,
            finished: false,
            _marker: PhantomData,
        })
    }

    /// Fetches the next page, or `None` once the walk is complete.
    ///
    /// A failed fetch is returned as `Err` without advancing the walk:
    /// calling again retries the same page number, and pages already yielded
    /// are unaffected.
    pub async fn next_page(&mut self) -> Option<Result<PageEnvelope<T>, MediqError>> {
        if self.finished {
            return None;
        }
        let query = PageQuery::default()
            .with_page(self.next_page)
            .with_page_size(self.page_size);
        match self.client.list(self.resource, self.ctx, &query).await {
            Ok(envelope) => {
                if envelope.pagination.has_next() {
                    self.next_page += 1;
                } else {
                    self.finished = true;
                }
                Some(Ok(envelope))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Drains the walk, concatenating items in fetch order.
    ///
    /// Duplicates are not removed: if the upstream data shifts between page
    /// fetches an item may appear twice. Accepted, not corrected.
    pub async fn collect_all(mut self) -> Result<Vec<T>, MediqError> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await {
            items.extend(page?.data);
        }
        Ok(items)
    }
}
