use std::collections::{HashMap, VecDeque};

use proptest::prelude::*;
use spanning::{
    minimum_spanning_tree, Algorithm, Graph, IntegerWeightOperations, SpanningTree, UndirectedGraph,
};

/// Edges are `(id, weight)` pairs so parallel edges stay distinct.
type Edge = (usize, i64);
type Input = UndirectedGraph<u32, Edge>;
type Tree = SpanningTree<u32, Edge, i64>;

fn weight(e: &Edge) -> i64 {
    e.1
}

fn arb_graph() -> impl Strategy<Value = Input> {
    (1_u32..12).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, -5_i64..20), 0..30).prop_map(move |edges| {
            let mut g = UndirectedGraph::new();
            for v in 0..n {
                g.add_vertex(v);
            }
            for (id, (h, t, w)) in edges.into_iter().enumerate() {
                if h != t {
                    g.add_edge(&h, (id, w), &t).unwrap();
                }
            }
            g
        })
    })
}

/// A random spanning path plus random chords, so the graph is connected.
fn arb_connected_graph() -> impl Strategy<Value = Input> {
    (2_u32..12).prop_flat_map(|n| {
        (
            proptest::collection::vec(0_i64..20, (n - 1) as usize),
            proptest::collection::vec((0..n, 0..n, 0_i64..20), 0..20),
        )
            .prop_map(move |(spine, chords)| {
                let mut g = UndirectedGraph::new();
                for v in 0..n {
                    g.add_vertex(v);
                }
                let mut id = 0;
                for (v, w) in (1..n).zip(spine) {
                    g.add_edge(&(v - 1), (id, w), &v).unwrap();
                    id += 1;
                }
                for (h, t, w) in chords {
                    if h != t {
                        g.add_edge(&h, (id, w), &t).unwrap();
                        id += 1;
                    }
                }
                g
            })
    })
}

fn solve(g: &Input, algorithm: Algorithm) -> Tree {
    minimum_spanning_tree(g)
        .unwrap()
        .where_edges_have_weights(weight)
        .unwrap()
        .applying(algorithm, IntegerWeightOperations)
        .unwrap()
}

fn component_count(g: &Input) -> usize {
    let n = g.order();
    let mut parent: Vec<usize> = (0..n).collect();
    fn root(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }
    let mut count = n;
    for e in g.edges() {
        let (h, t) = g.endpoints(e).unwrap();
        let (a, b) = (root(&mut parent, *h as usize), root(&mut parent, *t as usize));
        if a != b {
            parent[a] = b;
            count -= 1;
        }
    }
    count
}

/// Heaviest edge weight on the tree path between `from` and `to`, if any.
fn path_max(tree: &Tree, from: u32, to: u32) -> Option<i64> {
    let mut best: HashMap<u32, Option<i64>> = HashMap::new();
    let mut queue = VecDeque::new();
    best.insert(from, None);
    queue.push_back(from);
    while let Some(v) = queue.pop_front() {
        if v == to {
            return best[&v];
        }
        let here = best[&v];
        for e in tree.incident_edges(&v) {
            let (h, t) = tree.endpoints(e).unwrap();
            let next = if *h == v { *t } else { *h };
            if !best.contains_key(&next) {
                let w = here.map_or(e.1, |m| m.max(e.1));
                best.insert(next, Some(w));
                queue.push_back(next);
            }
        }
    }
    None
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn all_algorithms_agree_on_weight(g in arb_graph()) {
        let weights: Vec<i64> = Algorithm::all()
            .iter()
            .map(|&a| *solve(&g, a).weight())
            .collect();
        prop_assert!(weights.windows(2).all(|w| w[0] == w[1]), "weights {weights:?}");
    }

    #[test]
    fn connected_graph_gives_one_tree(g in arb_connected_graph()) {
        for &algorithm in Algorithm::all() {
            let tree = solve(&g, algorithm);
            prop_assert_eq!(tree.size(), g.order() - 1, "{}", algorithm);
            prop_assert_eq!(tree.component_count(), 1);
        }
    }

    #[test]
    fn forest_spans_every_component(g in arb_graph()) {
        let components = component_count(&g);
        for &algorithm in Algorithm::all() {
            let tree = solve(&g, algorithm);
            prop_assert_eq!(tree.order(), g.order());
            prop_assert!(g.vertices().all(|v| tree.contains_vertex(v)));
            prop_assert_eq!(tree.size(), g.order() - components, "{}", algorithm);
            prop_assert_eq!(tree.component_count(), components);
        }
    }

    #[test]
    fn tree_edges_come_from_the_input(g in arb_graph()) {
        for &algorithm in Algorithm::all() {
            let tree = solve(&g, algorithm);
            for e in tree.edges() {
                prop_assert!(g.contains_edge(e));
                let (h, t) = tree.endpoints(e).unwrap();
                let (gh, gt) = g.endpoints(e).unwrap();
                prop_assert!((h, t) == (gh, gt) || (h, t) == (gt, gh));
            }
            let total: i64 = tree.edges().map(|e| e.1).sum();
            prop_assert_eq!(*tree.weight(), total);
        }
    }

    #[test]
    fn no_edge_can_replace_a_heavier_tree_edge(g in arb_graph()) {
        let tree = solve(&g, Algorithm::Kruskal);
        for e in g.edges() {
            if tree.graph().contains_edge(e) {
                continue;
            }
            let (h, t) = g.endpoints(e).unwrap();
            let heaviest = path_max(&tree, *h, *t);
            prop_assert!(heaviest.is_some(), "{:?} joins two trees", e);
            prop_assert!(heaviest.unwrap() <= e.1, "{:?} is lighter than the path", e);
        }
    }

    #[test]
    fn repeated_solves_match(g in arb_graph()) {
        for &algorithm in Algorithm::all() {
            let first: Vec<Edge> = solve(&g, algorithm).edges().copied().collect();
            let second: Vec<Edge> = solve(&g, algorithm).edges().copied().collect();
            prop_assert_eq!(first, second);
        }
    }
}
