use serde::{Deserialize, Serialize};

/// Pagination metadata reported by every list endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_number: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// True when a further page exists.
    ///
    /// This is the single termination rule used everywhere:
    /// `pageNumber * pageSize < totalItems`. `totalPages` is carried for
    /// display but never consulted for termination.
    pub fn has_next(&self) -> bool {
        self.page_number * self.page_size < self.total_items
    }
}

/// Envelope returned by list endpoints: items plus pagination metadata.
/// Item order is server-defined and preserved as-is.
#[derive(Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub status: i64,
    pub message: Option<String>,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Envelope returned by single-entity and identity endpoints.
#[derive(Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: i64,
    #[serde(default)]
    pub data: Option<T>,
}
