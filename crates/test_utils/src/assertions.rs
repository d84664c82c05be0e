//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for claims that give
//! more meaningful error messages than standard assertions.

use domain_claims::UserClaim;

/// Asserts that every claim is an investment option
pub fn assert_all_paid(claims: &[UserClaim]) {
    for claim in claims {
        assert!(
            claim.is_paid(),
            "Expected paid claim, got index={} type={:?}",
            claim.index,
            claim.claim_type
        );
    }
}

/// Asserts that every claim is free
pub fn assert_all_free(claims: &[UserClaim]) {
    for claim in claims {
        assert!(
            claim.is_free(),
            "Expected free claim, got index={} type={:?}",
            claim.index,
            claim.claim_type
        );
    }
}

/// Asserts that `subset` appears in `superset` in the same relative order
pub fn assert_order_preserved(subset: &[UserClaim], superset: &[UserClaim]) {
    let mut remaining = superset.iter();
    for claim in subset {
        assert!(
            remaining.any(|c| c == claim),
            "Claim index={} is missing or out of order",
            claim.index
        );
    }
}

/// Asserts that a repository path ends with the network directory
pub fn assert_repo_path_for(path: &str, segment: &str) {
    let expected = format!("{segment}/");
    assert!(
        path.ends_with(&expected),
        "Expected repository path ending in {expected:?}, got {path:?}"
    );
}
