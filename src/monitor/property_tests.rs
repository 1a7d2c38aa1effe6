//! Property-Based Tests for the Expiration Monitor
//!
//! Uses proptest to verify the expiry predicate and the sweep's
//! partitioning of a batch into closed and untouched auctions.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use proptest::prelude::*;

use crate::models::{Auction, AuctionStatus, ProductCondition};
use crate::monitor::expiration::{close_expired, is_expired};
use crate::store::{AuctionStore, MemoryStore};

// == Strategies ==
/// Offsets well clear of the expiration boundary, so that a second of
/// wall-clock drift during the test cannot flip the expected outcome.
/// Expiration in these tests is fixed at 3600 seconds.
fn safe_offset_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        0i64..3000,    // comfortably fresh
        3700i64..7200, // comfortably expired
    ]
}

const TEST_EXPIRATION_SECS: u64 = 3600;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The predicate is exact: an auction expires strictly after
    // created_at + expiration, never at the boundary itself.
    #[test]
    fn prop_expiry_predicate_is_strict(
        created_at in 0i64..2_000_000_000,
        expiration_secs in 0u64..1_000_000,
        delta in -1_000_000i64..1_000_000
    ) {
        let expiration = Duration::from_secs(expiration_secs);
        let expires_at = created_at + expiration_secs as i64;
        let now = expires_at + delta;

        prop_assert_eq!(
            is_expired(created_at, expiration, now),
            delta > 0,
            "created_at={} expiration={}s now={}",
            created_at,
            expiration_secs,
            now
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // For any batch of active auctions, one pass over it closes exactly
    // the expired ones and leaves the rest active.
    #[test]
    fn prop_close_expired_partitions_batch(
        offsets in prop::collection::vec(safe_offset_strategy(), 1..20)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let store = Arc::new(MemoryStore::new());
            let now = Utc::now().timestamp();
            let mut expected = Vec::new();

            for offset in &offsets {
                let mut auction = Auction::new(
                    "Test Product",
                    "Electronics",
                    "Test Description",
                    ProductCondition::New,
                );
                auction.created_at = now - offset;
                expected.push((auction.id.clone(), *offset > TEST_EXPIRATION_SECS as i64));
                store.insert(auction).await.unwrap();
            }

            let batch = store.find_by_status(AuctionStatus::Active).await.unwrap();
            close_expired(
                store.as_ref(),
                &batch,
                Duration::from_secs(TEST_EXPIRATION_SECS),
            )
            .await;

            for (id, should_be_closed) in expected {
                let found = store.find_by_id(&id).await.unwrap();
                let expected_status = if should_be_closed {
                    AuctionStatus::Completed
                } else {
                    AuctionStatus::Active
                };
                prop_assert_eq!(
                    found.status,
                    expected_status,
                    "auction {} with offset beyond/within window",
                    id
                );
            }

            Ok(())
        })?;
    }
}
