//! Caching and retrying wrapper around the API client.

use std::time::Duration;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;

use mediq_api::types::{
    Appointment, Envelope, LabTest, MedicalHistory, Medicine, PageEnvelope, Prescription,
    RevenueReport, Transaction, User,
};
use mediq_api::{Client, PageQuery, RequestContext, Resource};

use crate::cache::QueryCache;
use crate::error::MediqError;
use crate::pager::PageWalker;

/// Retry policy for list reads: bounded attempts with jittered exponential
/// backoff. Client errors (4xx other than 429) are never retried.
pub struct RetryConfig {
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 2000,
            max_delay_ms: 30000,
        }
    }
}

impl RetryConfig {
    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = self
            .base_delay_ms
            .saturating_mul(exp)
            .min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

/// API client wrapper that adds the query cache and bounded retries.
///
/// List reads check the cache first; misses go through the retry policy and
/// are cached on success. Mutations are never retried or cached, and each
/// successful mutation invalidates only the owning resource's cache keys.
/// Session resolution does not go through this wrapper at all.
pub struct ClinicClient {
    inner: Client,
    cache: QueryCache,
    retry: RetryConfig,
}

impl ClinicClient {
    /// Creates a wrapper around the given API client and cache.
    pub fn new(inner: Client, cache: QueryCache) -> Self {
        Self {
            inner,
            cache,
            retry: RetryConfig::default(),
        }
    }

    /// Overrides the retry policy. Used in tests to shrink backoff delays.
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    async fn with_retry<T, F, Fut>(&self, label: &str, mut f: F) -> Result<T, MediqError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, MediqError>>,
    {
        let mut attempt = 0usize;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt > self.retry.max_retries || !is_retryable(&err) {
                        return Err(err);
                    }
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{} request failed (attempt {}/{}), retrying in {:.1}s",
                        label,
                        attempt,
                        self.retry.max_retries,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Fetches one page of `resource`, returning cached results when
    /// available.
    pub async fn list<T>(
        &self,
        resource: Resource,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<T>, MediqError>
    where
        T: DeserializeOwned + Serialize,
    {
        let key = QueryCache::key(resource, query.page_size, query.page_number);
        if let Some(cached) = self.cache.get(&key) {
            let page: PageEnvelope<T> = serde_json::from_str(&cached)?;
            return Ok(page);
        }

        let page = self
            .with_retry(resource.name(), || async {
                Ok(self.inner.list(resource, ctx, query).await?)
            })
            .await?;
        if let Ok(json) = serde_json::to_string(&page) {
            self.cache.set(key, json);
        }
        Ok(page)
    }

    /// Starts a lazy page walk over `resource` from page 1.
    pub fn walk<'a, T>(
        &'a self,
        resource: Resource,
        ctx: &'a RequestContext,
        page_size: i64,
    ) -> Result<PageWalker<'a, T>, MediqError>
    where
        T: DeserializeOwned + Serialize,
    {
        PageWalker::new(self, ctx, resource, page_size)
    }

    /// Fetches a page of appointments.
    pub async fn get_appointments(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<Appointment>, MediqError> {
        self.list(Resource::Appointments, ctx, query).await
    }

    /// Fetches a page of medicines.
    pub async fn get_medicines(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<Medicine>, MediqError> {
        self.list(Resource::Medicines, ctx, query).await
    }

    /// Fetches a page of prescriptions.
    pub async fn get_prescriptions(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<Prescription>, MediqError> {
        self.list(Resource::Prescriptions, ctx, query).await
    }

    /// Fetches a page of laboratory tests.
    pub async fn get_lab_tests(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<LabTest>, MediqError> {
        self.list(Resource::LabTests, ctx, query).await
    }

    /// Fetches a page of medical histories.
    pub async fn get_medical_histories(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<MedicalHistory>, MediqError> {
        self.list(Resource::MedicalHistories, ctx, query).await
    }

    /// Fetches a page of transactions.
    pub async fn get_transactions(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<Transaction>, MediqError> {
        self.list(Resource::Transactions, ctx, query).await
    }

    /// Fetches a page of revenue reports.
    pub async fn get_revenue_reports(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<RevenueReport>, MediqError> {
        self.list(Resource::RevenueReports, ctx, query).await
    }

    /// Fetches a page of users.
    pub async fn get_users(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<User>, MediqError> {
        self.list(Resource::Users, ctx, query).await
    }

    /// Creates an entity, then invalidates the owning resource's cached
    /// pages. Mutations are never retried.
    pub async fn create<T, F>(
        &self,
        resource: Resource,
        ctx: &RequestContext,
        form: &F,
    ) -> Result<Envelope<T>, MediqError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let resp = self.inner.create(resource, ctx, form).await?;
        self.cache.invalidate(resource);
        Ok(resp)
    }

    /// Updates an entity, then invalidates the owning resource's cached
    /// pages.
    pub async fn update<T, F>(
        &self,
        resource: Resource,
        id: i64,
        ctx: &RequestContext,
        form: &F,
    ) -> Result<Envelope<T>, MediqError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let resp = self.inner.update(resource, id, ctx, form).await?;
        self.cache.invalidate(resource);
        Ok(resp)
    }

    /// Soft-deletes an entity, then invalidates the owning resource's
    /// cached pages.
    pub async fn soft_delete<T>(
        &self,
        resource: Resource,
        id: i64,
        ctx: &RequestContext,
    ) -> Result<Envelope<T>, MediqError>
    where
        T: DeserializeOwned,
    {
        let resp = self.inner.soft_delete(resource, id, ctx).await?;
        self.cache.invalidate(resource);
        Ok(resp)
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

fn is_retryable(err: &MediqError) -> bool {
    match err {
        MediqError::Api(api_err) => match api_err {
            mediq_api::Error::Transport | mediq_api::Error::Timeout => true,
            mediq_api::Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        },
        _ => false,
    }
}
