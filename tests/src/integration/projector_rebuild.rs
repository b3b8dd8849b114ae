//! # Projector Rebuild Tests
//!
//! Full-state rebuild is the projector's correctness baseline: any
//! batching of the same ordered log must land on the same snapshot, and
//! replaying into a warm store must equal rebuilding from scratch.

#[cfg(test)]
mod tests {
    use ab_05_event_projector::{
        DAppStatus, EventPosition, LedgerEvent, OrderedEvent, ProjectionStore,
    };
    use primitive_types::U256;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_types::ClaimType;

    /// A mixed event log with deterministic positions and seeded-random
    /// payloads.
    fn generate_log(events: usize, seed: u64) -> Vec<OrderedEvent> {
        let mut rng = StdRng::seed_from_u64(seed);
        let claim_types = [
            ClaimType::Timeout,
            ClaimType::IllegalSignature,
            ClaimType::FailedArbitration,
            ClaimType::ArbitratorFee,
        ];

        let mut log = Vec::with_capacity(events);
        let mut height = 1u64;
        let mut index = 0u32;
        for i in 0..events {
            // A few events per block.
            if rng.gen_bool(0.4) {
                height += 1;
                index = 0;
            }
            let dapp = [rng.gen_range(0..4u8); 20];
            let event = match i % 6 {
                0 => LedgerEvent::DAppRegistered {
                    dapp,
                    owner: [rng.gen::<u8>(); 20],
                },
                1 => LedgerEvent::DAppAuthorized { dapp },
                2 => LedgerEvent::CompensationClaimed {
                    id: [rng.gen_range(0..8u8); 32],
                    claim_type: claim_types[rng.gen_range(0..4)],
                    claimer: [rng.gen::<u8>(); 20],
                    arbiter: [rng.gen::<u8>(); 20],
                    amount: U256::from(rng.gen::<u64>()),
                },
                3 => LedgerEvent::CompensationWithdrawn {
                    id: [rng.gen_range(0..8u8); 32],
                },
                4 => LedgerEvent::ConfigUpdated {
                    key: format!("param-{}", rng.gen_range(0..5)),
                    value: rng.gen_range(0..10_000),
                },
                _ => LedgerEvent::Transfer {
                    token_id: U256::from(rng.gen_range(0..6u64)),
                    from: [rng.gen::<u8>(); 20],
                    to: [rng.gen::<u8>(); 20],
                },
            };
            log.push(OrderedEvent::new(EventPosition::new(height, index), event));
            index += 1;
        }
        log
    }

    #[test]
    fn test_any_batching_matches_full_rebuild() {
        let log = generate_log(60, 7);

        let from_scratch = ProjectionStore::new();
        from_scratch.replay(log.clone()).unwrap();

        for batch_size in [1, 2, 3, 7, 13, 60] {
            let incremental = ProjectionStore::new();
            for batch in log.chunks(batch_size) {
                incremental.replay(batch.to_vec()).unwrap();
            }
            assert_eq!(
                incremental.snapshot(),
                from_scratch.snapshot(),
                "batch size {} diverged from full rebuild",
                batch_size
            );
        }
    }

    #[test]
    fn test_rebuild_is_deterministic_across_runs() {
        let log = generate_log(40, 99);

        let a = ProjectionStore::new();
        a.replay(log.clone()).unwrap();
        let b = ProjectionStore::new();
        b.replay(log).unwrap();

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_duplicate_tail_redelivery_converges() {
        // At-least-once delivery: the last event shows up again after a
        // reconnect. The snapshot must not change.
        let log = generate_log(25, 3);
        let store = ProjectionStore::new();
        store.replay(log.clone()).unwrap();
        let before = store.snapshot();

        store.apply(log.last().unwrap()).unwrap();
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_status_walk_depends_on_order() {
        let dapp = [0x77u8; 20];
        let owner = [0x88u8; 20];

        let forward = ProjectionStore::new();
        forward
            .replay(vec![
                OrderedEvent::new(
                    EventPosition::new(1, 0),
                    LedgerEvent::DAppRegistered { dapp, owner },
                ),
                OrderedEvent::new(
                    EventPosition::new(1, 1),
                    LedgerEvent::DAppAuthorized { dapp },
                ),
                OrderedEvent::new(
                    EventPosition::new(1, 2),
                    LedgerEvent::DAppSuspended { dapp },
                ),
            ])
            .unwrap();
        assert_eq!(forward.dapp_status(&dapp), DAppStatus::Suspended);

        let reversed = ProjectionStore::new();
        reversed
            .replay(vec![
                OrderedEvent::new(
                    EventPosition::new(1, 0),
                    LedgerEvent::DAppSuspended { dapp },
                ),
                OrderedEvent::new(
                    EventPosition::new(1, 1),
                    LedgerEvent::DAppAuthorized { dapp },
                ),
                OrderedEvent::new(
                    EventPosition::new(1, 2),
                    LedgerEvent::DAppRegistered { dapp, owner },
                ),
            ])
            .unwrap();
        assert_eq!(reversed.dapp_status(&dapp), DAppStatus::Pending);
    }

    #[test]
    fn test_warm_store_continues_where_rebuild_lands() {
        let log = generate_log(50, 21);
        let (head, tail) = log.split_at(30);

        let warm = ProjectionStore::new();
        warm.replay(head.to_vec()).unwrap();
        warm.replay(tail.to_vec()).unwrap();

        let cold = ProjectionStore::new();
        cold.replay(log.clone()).unwrap();

        assert_eq!(warm.snapshot(), cold.snapshot());
        assert_eq!(warm.last_position(), Some(log.last().unwrap().position));
    }
}
