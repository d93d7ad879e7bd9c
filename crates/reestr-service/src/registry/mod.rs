//! Upstream side of the pipeline: the registry client, record
//! normalization and the fetcher that ties them to the cache.

mod client;
mod fetcher;
mod normalizer;
mod records;

pub use client::{HttpRegistryClient, RegistryClient};
#[cfg(test)]
pub use client::MockRegistryClient;
pub use fetcher::{FetchOutcome, UpstreamFetcher};
pub use normalizer::{normalize, normalize_all, split_name, NAME_SEPARATOR};
pub use records::{RawRecord, RegistryResponse};
