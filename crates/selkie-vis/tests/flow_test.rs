use selkie_graph::fixtures::{grid, map1};
use selkie_graph::{CcpOrder, PortalGraph, counter_clockwise_order};
use selkie_vis::{FloodSets, FlowOptions, FlowOutcome, FlowPasses, Limit, flow};

struct Fixture {
    graph: PortalGraph,
    ccp: CcpOrder,
    flood: FloodSets,
}

impl Fixture {
    fn new(graph: PortalGraph) -> Self {
        let ccp = counter_clockwise_order(&graph);
        let flood = FloodSets::compute(&graph, &ccp);
        Self { graph, ccp, flood }
    }

    fn run(&self, start: usize, limit: Limit, options: FlowOptions) -> FlowOutcome {
        flow(&self.graph, &self.ccp, &self.flood, start, limit, &options).unwrap()
    }
}

fn lazy() -> FlowOptions {
    FlowOptions {
        eager_marking: false,
        ..Default::default()
    }
}

#[test]
fn eager_flow_from_portal_0_prunes_the_leaves() {
    let f = Fixture::new(map1());
    let out = f.run(0, Limit::Unbounded, FlowOptions::default());
    assert_eq!(out.trace, vec![0, 2, 6, 7, 3, 1]);
    assert_eq!(out.confirmed.to_vec(), vec![0, 2, 6, 8, 12]);
    assert_eq!(out.cansee, *f.flood.get(0));
    assert_eq!(out.stack, vec![0]);
    assert_eq!(out.passes, 1);
}

#[test]
fn lazy_flow_from_portal_0_enters_every_unconfirmed_leaf() {
    let f = Fixture::new(map1());
    let out = f.run(0, Limit::Unbounded, lazy());
    assert_eq!(out.trace, vec![0, 2, 6, 12, 13, 8, 9, 7, 3, 1]);
    assert_eq!(out.confirmed.to_vec(), vec![0, 2, 6, 8, 12]);
}

#[test]
fn limited_flow_reports_the_frame_it_stopped_in() {
    let f = Fixture::new(map1());

    let out = f.run(0, Limit::Steps(3), FlowOptions::default());
    assert_eq!(out.trace, vec![0, 2, 6]);
    assert_eq!(out.stack, vec![0, 2, 6]);
    assert_eq!(out.cansee.to_vec(), vec![6, 8, 12]);
    // 6 was confirmed eagerly from 2; the limit hit before 6's own neighbours were marked.
    assert_eq!(out.confirmed.to_vec(), vec![0, 2, 6]);
    assert!(out.is_truncated(Limit::Steps(3)));

    // Stopping on a close marker reports the frame that was just closed.
    let out = f.run(0, Limit::Steps(4), FlowOptions::default());
    assert_eq!(out.trace, vec![0, 2, 6, 7]);
    assert_eq!(out.stack, vec![0, 2, 6]);
    assert_eq!(out.cansee.to_vec(), vec![6, 8, 12]);
}

#[test]
fn zero_limit_emits_nothing() {
    let f = Fixture::new(map1());
    let out = f.run(0, Limit::Steps(0), FlowOptions::default());
    assert!(out.trace.is_empty());
    assert!(out.confirmed.is_empty());
    assert_eq!(out.passes, 0);
}

#[test]
fn confirmed_stays_inside_cansee_at_every_cut() {
    for graph in [map1(), grid(4, 3)] {
        let f = Fixture::new(graph);
        for start in 0..f.graph.portal_count() {
            for options in [FlowOptions::default(), lazy()] {
                let full = f.run(start, Limit::Unbounded, options);
                assert!(full.confirmed.is_subset(&full.cansee));
                for limit in 0..=full.trace.len() {
                    let cut = f.run(start, Limit::Steps(limit), options);
                    assert!(cut.confirmed.is_subset(f.flood.get(start)));
                    assert!(cut.cansee.is_subset(f.flood.get(start)));
                    assert_eq!(cut.trace.as_slice(), &full.trace[..limit]);
                }
            }
        }
    }
}

#[test]
fn rejects_unknown_start_and_negative_limits() {
    let f = Fixture::new(map1());
    let err = flow(&f.graph, &f.ccp, &f.flood, 14, Limit::Unbounded, &FlowOptions::default());
    assert!(matches!(err, Err(selkie_vis::Error::Graph(_))));
    assert!(matches!(
        Limit::from_raw(-5),
        Err(selkie_vis::Error::InvalidLimit { limit: -5 })
    ));
}

#[test]
fn until_stable_reruns_while_confirmed_grows() {
    let f = Fixture::new(map1());
    let opts = FlowOptions {
        eager_marking: true,
        passes: FlowPasses::UntilStable { max_passes: 8 },
    };
    let out = f.run(0, Limit::Unbounded, opts);
    assert_eq!(out.passes, 2);
    assert_eq!(out.trace, vec![0, 2, 6, 7, 3, 1, 0, 1]);
    assert_eq!(out.confirmed.to_vec(), vec![0, 2, 6, 8, 12]);
}

#[test]
fn single_pass_is_the_default() {
    assert_eq!(FlowOptions::default().passes, FlowPasses::Single);
    assert!(FlowOptions::default().eager_marking);
}

#[test]
fn deep_grid_flows_without_recursion() {
    let f = Fixture::new(grid(8, 8));
    let out = f.run(0, Limit::Unbounded, FlowOptions::default());
    assert!(out.confirmed.len() > 50);
    assert!(out.confirmed.is_subset(&out.cansee));

    let f = Fixture::new(grid(20, 20));
    let out = f.run(0, Limit::Steps(10_000), FlowOptions::default());
    assert_eq!(out.trace.len(), 10_000);
    assert!(out.confirmed.is_subset(f.flood.get(0)));
}
