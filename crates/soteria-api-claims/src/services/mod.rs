//! Distributed-claims services.

pub mod partition;
pub mod profile;

pub use partition::{
    partition_claims, ClaimPartition, ClaimSource, CLAIM_NAMES, CLAIM_SOURCES,
    MAX_INLINE_CLAIM_COUNT,
};
pub use profile::ProfileService;
