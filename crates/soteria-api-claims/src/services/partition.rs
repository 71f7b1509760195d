//! Claims partitioning: inline vs. distributed.
//!
//! Claim types with many values bloat identity tokens, so the partitioner
//! externalizes them: the type is dropped from the inline set and replaced
//! by the OIDC aggregated/distributed claims indirection (`_claim_names`
//! plus `_claim_sources`), pointing at the per-claim retrieval endpoint.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use soteria_core::Claim;
use std::collections::{BTreeMap, HashMap};

/// Maximum number of claims of one type kept inline. A type with strictly
/// more claims than this is externalized.
pub const MAX_INLINE_CLAIM_COUNT: usize = 5;

/// Synthetic claim type carrying the claim-name indirection mapping.
pub const CLAIM_NAMES: &str = "_claim_names";

/// Synthetic claim type carrying the claim-source descriptors.
pub const CLAIM_SOURCES: &str = "_claim_sources";

/// Characters escaped when a claim type is placed into a URL path segment.
/// Mirrors the url crate's path-segment set.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/');

/// Source descriptor for one externalized claim type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSource {
    /// Retrieval endpoint for the claim type.
    pub endpoint: String,
}

/// Result of partitioning a subject's claim set.
///
/// Claim types present in `claim_sources` never have claims in
/// `inline_claims`; together the two cover every claim type of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimPartition {
    /// Claims kept inline, in group encounter order.
    pub inline_claims: Vec<Claim>,

    /// Externalized claim types, mapped to themselves (the key doubles as
    /// the indirection pointer per the distributed claims convention).
    pub claim_names: BTreeMap<String, String>,

    /// Externalized claim types mapped to their retrieval endpoints.
    pub claim_sources: BTreeMap<String, ClaimSource>,
}

impl ClaimPartition {
    /// Whether any claim type was externalized.
    #[must_use]
    pub fn has_distributed(&self) -> bool {
        !self.claim_names.is_empty()
    }

    /// Flatten into the claim set embedded in a profile or identity token:
    /// the inline claims, plus the two synthetic JSON-valued indirection
    /// claims when anything was externalized.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the indirection mappings cannot be
    /// encoded as JSON.
    pub fn into_claims(self) -> Result<Vec<Claim>, serde_json::Error> {
        let mut claims = self.inline_claims;
        if !self.claim_names.is_empty() {
            claims.push(Claim::json(
                CLAIM_NAMES,
                serde_json::to_string(&self.claim_names)?,
            ));
            claims.push(Claim::json(
                CLAIM_SOURCES,
                serde_json::to_string(&self.claim_sources)?,
            ));
        }
        Ok(claims)
    }
}

/// Partition a claim set into inline claims and distributed-claim pointers.
///
/// Groups claims by type, keeping group encounter order for the inline
/// output. A type is externalized iff its claim count strictly exceeds
/// [`MAX_INLINE_CLAIM_COUNT`]; its endpoint is `base_retrieval_url` plus the
/// percent-encoded claim type. Pure transform: the input is never mutated
/// and no I/O happens here.
#[must_use]
pub fn partition_claims(claims: &[Claim], base_retrieval_url: &str) -> ClaimPartition {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Claim>> = HashMap::new();
    for claim in claims {
        groups
            .entry(claim.claim_type.as_str())
            .or_insert_with(|| {
                order.push(claim.claim_type.as_str());
                Vec::new()
            })
            .push(claim);
    }

    let mut partition = ClaimPartition::default();
    for claim_type in order {
        let group = &groups[claim_type];
        if group.len() > MAX_INLINE_CLAIM_COUNT {
            partition
                .claim_names
                .insert(claim_type.to_string(), claim_type.to_string());
            partition.claim_sources.insert(
                claim_type.to_string(),
                ClaimSource {
                    endpoint: format!(
                        "{base_retrieval_url}{}",
                        utf8_percent_encode(claim_type, PATH_SEGMENT)
                    ),
                },
            );
        } else {
            partition
                .inline_claims
                .extend(group.iter().map(|c| (*c).clone()));
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const BASE: &str = "https://idp.example.com/claims/";

    fn group_claims(n: usize) -> Vec<Claim> {
        (0..n).map(|i| Claim::new("group", format!("team-{i}"))).collect()
    }

    #[test]
    fn test_partition_keeps_small_groups_inline() {
        let mut claims = group_claims(MAX_INLINE_CLAIM_COUNT);
        claims.push(Claim::new("email", "u1@example.com"));

        let partition = partition_claims(&claims, BASE);

        assert!(!partition.has_distributed());
        assert_eq!(partition.inline_claims.len(), MAX_INLINE_CLAIM_COUNT + 1);
        assert!(partition.claim_names.is_empty());
        assert!(partition.claim_sources.is_empty());
    }

    #[test]
    fn test_partition_externalizes_above_threshold() {
        // Threshold + 1 claims of one type, one claim of another
        let mut claims = group_claims(MAX_INLINE_CLAIM_COUNT + 1);
        claims.push(Claim::new("email", "u1@example.com"));

        let partition = partition_claims(&claims, BASE);

        assert!(partition.has_distributed());
        assert_eq!(partition.claim_names.get("group"), Some(&"group".to_string()));
        assert_eq!(
            partition.claim_sources.get("group"),
            Some(&ClaimSource {
                endpoint: format!("{BASE}group"),
            })
        );
        // The externalized type leaves no claims inline
        assert!(partition
            .inline_claims
            .iter()
            .all(|c| c.claim_type != "group"));
        assert_eq!(partition.inline_claims.len(), 1);
    }

    #[test]
    fn test_partition_covers_every_type_exactly_once() {
        let mut claims = group_claims(8);
        claims.push(Claim::new("email", "u1@example.com"));
        claims.extend((0..7).map(|i| Claim::new("role", format!("r{i}"))));
        claims.push(Claim::new("name", "Alice"));

        let partition = partition_claims(&claims, BASE);

        let inline_types: BTreeSet<_> = partition
            .inline_claims
            .iter()
            .map(|c| c.claim_type.clone())
            .collect();
        let distributed_types: BTreeSet<_> = partition.claim_sources.keys().cloned().collect();

        assert!(inline_types.is_disjoint(&distributed_types));
        let all: BTreeSet<_> = inline_types.union(&distributed_types).cloned().collect();
        let input_types: BTreeSet<_> = claims.iter().map(|c| c.claim_type.clone()).collect();
        assert_eq!(all, input_types);
        // Names and sources always agree on keys
        let name_types: BTreeSet<_> = partition.claim_names.keys().cloned().collect();
        assert_eq!(name_types, distributed_types);
    }

    #[test]
    fn test_partition_empty_claim_set() {
        let partition = partition_claims(&[], BASE);

        assert!(partition.inline_claims.is_empty());
        assert!(!partition.has_distributed());
        assert!(partition.into_claims().unwrap().is_empty());
    }

    #[test]
    fn test_partition_is_deterministic() {
        let mut claims = group_claims(7);
        claims.push(Claim::new("email", "u1@example.com"));

        let a = partition_claims(&claims, BASE);
        let b = partition_claims(&claims, BASE);

        assert_eq!(a, b);
    }

    #[test]
    fn test_partition_percent_encodes_claim_type_in_endpoint() {
        let claims: Vec<Claim> = (0..6)
            .map(|i| Claim::new("custom/claim type", format!("v{i}")))
            .collect();

        let partition = partition_claims(&claims, BASE);

        assert_eq!(
            partition.claim_sources["custom/claim type"].endpoint,
            format!("{BASE}custom%2Fclaim%20type")
        );
    }

    #[test]
    fn test_into_claims_appends_synthetic_claims() {
        let claims = group_claims(6);
        let result = partition_claims(&claims, BASE).into_claims().unwrap();

        assert_eq!(result.len(), 2);
        let names = result.iter().find(|c| c.claim_type == CLAIM_NAMES).unwrap();
        let sources = result.iter().find(|c| c.claim_type == CLAIM_SOURCES).unwrap();

        assert!(names.is_json());
        assert!(sources.is_json());
        assert_eq!(names.value, r#"{"group":"group"}"#);
        assert_eq!(
            sources.value,
            format!(r#"{{"group":{{"endpoint":"{BASE}group"}}}}"#)
        );
    }

    #[test]
    fn test_into_claims_no_synthetics_without_externalization() {
        let claims = group_claims(3);
        let result = partition_claims(&claims, BASE).into_claims().unwrap();

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|c| c.claim_type == "group"));
    }

    #[test]
    fn test_six_groups_one_email_externalizes_only_groups() {
        // Worked example: 6 "group" claims and 1 "email" claim, threshold 5
        let mut claims = group_claims(6);
        claims.push(Claim::new("email", "u1@example.com"));

        let result = partition_claims(&claims, BASE).into_claims().unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0], Claim::new("email", "u1@example.com"));
        assert_eq!(result[1].claim_type, CLAIM_NAMES);
        assert_eq!(result[2].claim_type, CLAIM_SOURCES);
    }
}
