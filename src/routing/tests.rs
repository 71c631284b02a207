#[cfg(test)]
mod tests {
    use crate::routing::ring::{HashFn, HashRing};

    /// Hash that parses the input as a decimal number, so virtual-node
    /// positions can be chosen exactly in tests.
    fn numeric_hash() -> Option<HashFn> {
        Some(Box::new(|data: &[u8]| {
            std::str::from_utf8(data)
                .expect("test keys are ascii")
                .parse::<u32>()
                .expect("test keys are numeric")
        }))
    }

    #[test]
    fn test_ring_placement_is_stable() {
        let mut ring = HashRing::new(3, numeric_hash());
        // Peers "6", "4", "2" produce virtual nodes at
        // 2/12/22, 4/14/24, 6/16/26.
        ring.add(["6", "4", "2"]);

        let cases = [("2", "2"), ("11", "2"), ("23", "4"), ("27", "2")];
        for (key, owner) in cases {
            assert_eq!(ring.get(key), Some(owner), "key {key}");
        }

        // Peer "8" claims 8/18/28; only keys near those points move.
        ring.add(["8"]);
        assert_eq!(ring.get("27"), Some("8"));
        assert_eq!(ring.get("2"), Some("2"));

        // Removing it restores the previous placement.
        ring.remove("8");
        for (key, owner) in cases {
            assert_eq!(ring.get(key), Some(owner), "key {key} after remove");
        }
    }

    #[test]
    fn test_ring_wraps_past_the_largest_hash() {
        let mut ring = HashRing::new(1, numeric_hash());
        ring.add(["10", "20"]);

        // 25 is past every virtual node, so it wraps to the smallest.
        assert_eq!(ring.get("25"), Some("10"));
    }

    #[test]
    fn test_empty_ring_has_no_owner() {
        let ring = HashRing::new(3, None);
        assert!(ring.is_empty());
        assert_eq!(ring.get("anything"), None);
    }

    #[test]
    fn test_ring_is_deterministic() {
        let mut a = HashRing::new(50, None);
        let mut b = HashRing::new(50, None);
        a.add(["node-1", "node-2", "node-3"]);
        b.add(["node-1", "node-2", "node-3"]);

        for i in 0..200 {
            let key = format!("key_{i}");
            assert_eq!(a.get(&key), b.get(&key), "same config maps {key} identically");
        }
    }

    #[test]
    fn test_ring_spreads_keys_across_peers() {
        let mut ring = HashRing::new(50, None);
        ring.add(["node-1", "node-2", "node-3"]);

        let mut owners = std::collections::HashSet::new();
        for i in 0..500 {
            if let Some(owner) = ring.get(&format!("key_{i}")) {
                owners.insert(owner.to_string());
            }
        }
        assert_eq!(owners.len(), 3, "every peer should own part of the keyspace");
    }

    #[test]
    fn test_removing_unknown_peer_is_harmless() {
        let mut ring = HashRing::new(3, numeric_hash());
        ring.add(["2"]);
        ring.remove("9");

        assert_eq!(ring.get("2"), Some("2"));
    }
}
