//! Distributed-claims API handlers.

mod claims;

pub use claims::{get_claim_handler, DISTRIBUTED_CLAIM_TOKEN_LIFETIME_SECS};
