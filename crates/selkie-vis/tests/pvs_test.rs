use selkie_graph::counter_clockwise_order;
use selkie_graph::fixtures::{grid, map1};
use selkie_vis::{FloodSets, portal_flood_set};

#[test]
fn map1_flood_sets_match_hand_traces() {
    let graph = map1();
    let ccp = counter_clockwise_order(&graph);
    let sets = FloodSets::compute(&graph, &ccp);
    assert_eq!(sets.len(), graph.portal_count());
    assert_eq!(sets.get(0).to_vec(), vec![0, 2, 6, 8, 12]);
    assert_eq!(sets.get(2).to_vec(), vec![2, 6, 8, 12]);
    assert_eq!(sets.get(6).to_vec(), vec![6, 8, 11, 12]);
    assert_eq!(sets.get(8).to_vec(), vec![8]);
    assert_eq!(sets.get(12).to_vec(), vec![12]);
}

#[test]
fn every_portal_floods_into_itself() {
    for graph in [map1(), grid(7, 5)] {
        let ccp = counter_clockwise_order(&graph);
        let sets = FloodSets::compute(&graph, &ccp);
        for (k, set) in sets.iter().enumerate() {
            assert!(set.contains(k), "portal {k} missing from its own flood set");
            assert_eq!(set.capacity(), graph.portal_count());
        }
    }
}

#[test]
fn parallel_and_sequential_agree() {
    for graph in [map1(), grid(8, 6)] {
        let ccp = counter_clockwise_order(&graph);
        assert_eq!(
            FloodSets::compute(&graph, &ccp),
            FloodSets::compute_sequential(&graph, &ccp)
        );
    }
}

#[test]
fn single_portal_lookup_agrees_with_the_table() {
    let graph = grid(4, 3);
    let ccp = counter_clockwise_order(&graph);
    let sets = FloodSets::compute_sequential(&graph, &ccp);
    for k in 0..graph.portal_count() {
        assert_eq!(&portal_flood_set(&graph, &ccp, k).unwrap(), sets.get(k));
    }
    assert!(portal_flood_set(&graph, &ccp, graph.portal_count()).is_err());
}
