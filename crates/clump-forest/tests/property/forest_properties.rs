use std::collections::HashMap;

use proptest::prelude::*;

use clump_forest::{compress, MergeConfig, MergeEngine};
use clump_store::MarkerStore;
use clump_types::{Marker, NodeId, Span};

fn marker_strategy() -> impl Strategy<Value = Vec<Marker>> {
    prop::collection::vec(
        (-200i64..200, 0i64..50, 0i64..100)
            .prop_map(|(start, width, weight)| Marker::new(start, start + width, weight)),
        0..40,
    )
}

fn store_of(markers: &[Marker]) -> MarkerStore {
    let mut store = MarkerStore::new();
    for marker in markers {
        store.add(*marker).unwrap();
    }
    store
}

/// Brute-force reference: connected components of the pairwise
/// overlaps-within relation, via union-find.
struct Dsu {
    parent: Vec<usize>,
}

impl Dsu {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Expected clusters as sorted `(hull, weight sum)` pairs.
fn expected_clusters(markers: &[Marker], slack: i64) -> Vec<(Span, i64)> {
    let mut dsu = Dsu::new(markers.len());
    for i in 0..markers.len() {
        for j in (i + 1)..markers.len() {
            if markers[i].span.overlaps_within(&markers[j].span, slack) {
                dsu.union(i, j);
            }
        }
    }

    let mut by_root: HashMap<usize, (Span, i64)> = HashMap::new();
    for (i, marker) in markers.iter().enumerate() {
        let root = dsu.find(i);
        by_root
            .entry(root)
            .and_modify(|(span, weight)| {
                *span = span.hull(&marker.span);
                *weight += marker.weight;
            })
            .or_insert((marker.span, marker.weight));
    }

    let mut clusters: Vec<(Span, i64)> = by_root.into_values().collect();
    clusters.sort();
    clusters
}

proptest! {
    #[test]
    fn live_rows_match_the_cluster_oracle(
        markers in marker_strategy(),
        slack in 0i64..8,
    ) {
        let mut store = store_of(&markers);
        let engine = MergeEngine::with_config(MergeConfig::with_slack(slack));
        engine.merge(&mut store);

        let mut live: Vec<(Span, i64)> = store
            .markers()
            .iter()
            .map(|m| (m.span, m.weight))
            .collect();
        live.sort();

        prop_assert_eq!(live, expected_clusters(&markers, slack));
    }

    #[test]
    fn live_rows_never_overlap_within_slack(
        markers in marker_strategy(),
        slack in 0i64..8,
    ) {
        let mut store = store_of(&markers);
        let engine = MergeEngine::with_config(MergeConfig::with_slack(slack));
        engine.merge(&mut store);

        let live = store.markers();
        for i in 0..live.len() {
            for j in (i + 1)..live.len() {
                prop_assert!(
                    !live[i].span.overlaps_within(&live[j].span, slack),
                    "live rows {} and {} still overlap",
                    live[i].span,
                    live[j].span
                );
            }
        }
    }

    #[test]
    fn merged_table_is_structurally_valid(
        markers in marker_strategy(),
        slack in 0i64..8,
    ) {
        let mut store = store_of(&markers);
        let engine = MergeEngine::with_config(MergeConfig::with_slack(slack));
        engine.merge(&mut store);

        prop_assert!(store.validate().is_ok());

        for (index, node) in store.nodes().iter().enumerate() {
            // deleted exactly when claimed as a child, i.e. branch role
            prop_assert_eq!(node.deleted, !node.role().is_representative());
            if let Some((left, right)) = node.children {
                prop_assert!(left.index() < index);
                prop_assert!(right.index() < index);
            }
        }
    }

    #[test]
    fn merge_outcome_counts_add_up(
        markers in marker_strategy(),
        slack in 0i64..8,
    ) {
        let mut store = store_of(&markers);
        let engine = MergeEngine::with_config(MergeConfig::with_slack(slack));
        let outcome = engine.merge(&mut store);

        prop_assert_eq!(outcome.total, markers.len() + outcome.created);
        prop_assert_eq!(outcome.total, store.len());
        prop_assert_eq!(store.live_ids().len(), markers.len() - outcome.created);
    }

    #[test]
    fn second_pass_never_creates_rows(
        markers in marker_strategy(),
        slack in 0i64..8,
    ) {
        let mut store = store_of(&markers);
        let engine = MergeEngine::with_config(MergeConfig::with_slack(slack));
        let first = engine.merge(&mut store);
        let second = engine.merge(&mut store);

        prop_assert_eq!(second.created, 0);
        prop_assert_eq!(second.total, first.total);
    }

    #[test]
    fn compress_keeps_exactly_the_live_payloads(
        markers in marker_strategy(),
        slack in 0i64..8,
    ) {
        let mut store = store_of(&markers);
        let engine = MergeEngine::with_config(MergeConfig::with_slack(slack));
        let outcome = engine.merge(&mut store);

        let live_before = store.markers();
        let compaction = compress(&mut store);

        prop_assert_eq!(compaction.previous, outcome.total);
        prop_assert_eq!(compaction.retained, live_before.len());
        prop_assert_eq!(store.len(), compaction.retained);
        prop_assert_eq!(store.markers(), live_before);

        let all_live_leaves = store
            .live_ids()
            .iter()
            .all(|id| store.node(*id).is_some_and(|node| node.is_leaf() && !node.deleted));
        prop_assert!(all_live_leaves);
    }

    #[test]
    fn remap_is_consistent_and_order_preserving(
        markers in marker_strategy(),
        slack in 0i64..8,
    ) {
        let mut store = store_of(&markers);
        let engine = MergeEngine::with_config(MergeConfig::with_slack(slack));
        engine.merge(&mut store);

        let before = store.clone();
        let compaction = compress(&mut store);

        prop_assert_eq!(compaction.remap.len(), before.len());

        let mut last_new: Option<NodeId> = None;
        for index in 0..before.len() {
            let old = NodeId::new(index as u32);
            match compaction.new_index(old) {
                Some(new) => {
                    // survivors map in order, payloads intact
                    if let Some(previous) = last_new {
                        prop_assert!(previous < new);
                    }
                    last_new = Some(new);
                    prop_assert_eq!(store.marker(new), before.marker(old));
                }
                None => prop_assert_eq!(before.is_deleted(old), Some(true)),
            }
        }
    }

    #[test]
    fn compress_is_idempotent(
        markers in marker_strategy(),
        slack in 0i64..8,
    ) {
        let mut store = store_of(&markers);
        let engine = MergeEngine::with_config(MergeConfig::with_slack(slack));
        engine.merge(&mut store);
        compress(&mut store);

        let payloads = store.markers();
        let again = compress(&mut store);

        prop_assert_eq!(again.previous, again.retained);
        prop_assert_eq!(store.markers(), payloads);
    }
}
