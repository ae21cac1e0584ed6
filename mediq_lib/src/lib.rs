//! Core logic layer for the MediQ clinic front end.
//!
//! Wraps the `mediq_api` client with session resolution, role-based route
//! authorization, the shared pagination walk, and an in-memory TTL query
//! cache with per-resource invalidation.

pub mod access;
pub mod cache;
pub mod client;
pub mod error;
pub mod pager;
pub mod session;

pub use mediq_api;
pub use mediq_api::types;
pub use mediq_api::{ApiConfig, ConfigError, PageQuery, RequestContext, Resource};

pub use access::{enforce, Access, Authorizer, Redirect, RouteGuard};
pub use cache::QueryCache;
pub use client::{ClinicClient, RetryConfig};
pub use error::MediqError;
pub use pager::PageWalker;
pub use session::{ResolveFailure, SessionResolver};
