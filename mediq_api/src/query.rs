//! Pagination query parameters shared by every list endpoint.

use url::Url;

/// Page-number pagination parameters (`pageNumber`/`pageSize`).
///
/// Page numbers are 1-indexed. Every collection endpoint accepts exactly
/// these two parameters; there is no cursor variant.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page_number: i64,
    /// Results per page. Defaults to 10.
    pub page_size: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 10,
        }
    }
}

impl PageQuery {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page_number: i64) -> Self {
        self.page_number = page_number;
        self
    }

    /// Sets the number of results per page.
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Appends the pagination parameters to the given URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("pageSize", &self.page_size.to_string())
            .append_pair("pageNumber", &self.page_number.to_string());
        url
    }
}
