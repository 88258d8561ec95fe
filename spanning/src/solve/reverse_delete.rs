use std::collections::VecDeque;

use log::{debug, trace};
use smallvec::SmallVec;

use super::Snapshot;
use crate::algebra::WeightAlgebra;
use crate::graph::Graph;
use crate::tree::SpanningTree;

/// Reverse-Delete: start from every edge and, heaviest first, drop each
/// edge whose endpoints stay connected without it.
///
/// An empty graph is valid input and yields an empty tree.
pub fn reverse_delete<G, W, M, A>(
    graph: &G,
    weights: M,
    algebra: &A,
) -> SpanningTree<G::Vertex, G::Edge, W>
where
    G: Graph,
    M: Fn(&G::Edge) -> W,
    A: WeightAlgebra<W>,
{
    let snapshot = Snapshot::new(graph, &weights);
    debug!(
        "reverse-delete: {} vertices, {} edges",
        snapshot.vertices.len(),
        snapshot.edges.len()
    );

    let adjacency = snapshot.adjacency();
    let mut alive = vec![true; snapshot.edges.len()];
    let mut search = Reachability::new(snapshot.vertices.len());

    for i in snapshot.sorted_edges(algebra, true) {
        let e = &snapshot.edges[i];
        alive[i] = false;
        if search.connected(e.head, e.tail, &adjacency, &alive, &snapshot) {
            trace!("reverse-delete: remove {:?}", e.edge);
        } else {
            alive[i] = true;
            trace!("reverse-delete: keep {:?}, endpoints would disconnect", e.edge);
        }
    }

    let mut tree = snapshot.seed_tree(algebra);
    for (i, &kept) in alive.iter().enumerate() {
        if kept {
            snapshot.keep(&mut tree, i, algebra);
        }
    }

    debug!("reverse-delete: kept {} edges", tree.size());
    tree
}

/// Breadth-first reachability with a reusable visited set.
///
/// Each search bumps `epoch` instead of clearing `seen`, so a search only
/// pays for the vertices it actually reaches. `seen` is cleared only when
/// the epoch wraps.
struct Reachability {
    seen: Vec<u32>,
    epoch: u32,
    queue: VecDeque<usize>,
}

impl Reachability {
    fn new(n: usize) -> Self {
        Self {
            seen: vec![0; n],
            epoch: 0,
            queue: VecDeque::new(),
        }
    }

    /// Whether `to` is reachable from `from` over edges marked alive.
    fn connected<V, E, W>(
        &mut self,
        from: usize,
        to: usize,
        adjacency: &[SmallVec<[usize; 4]>],
        alive: &[bool],
        snapshot: &Snapshot<'_, V, E, W>,
    ) -> bool {
        if from == to {
            return true;
        }
        self.next_epoch();
        self.queue.clear();
        self.seen[from] = self.epoch;
        self.queue.push_back(from);

        while let Some(v) = self.queue.pop_front() {
            for &e in &adjacency[v] {
                if !alive[e] {
                    continue;
                }
                let next = snapshot.edges[e].opposite(v);
                if next == to {
                    return true;
                }
                if self.seen[next] != self.epoch {
                    self.seen[next] = self.epoch;
                    self.queue.push_back(next);
                }
            }
        }
        false
    }

    fn next_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            self.seen.fill(0);
            self.epoch = 1;
        }
    }
}
