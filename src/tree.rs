//! TrajectoryTree — merged Collatz trajectory tree.
//!
//! Many starting integers share trajectory suffixes; the tree stores each id
//! once and splices new trajectories onto the first already-known node, so
//! insertion cost is proportional to the previously-unseen suffix only.

use std::collections::HashMap;

use log::debug;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::Error;

/// Id of the tree root. Every trajectory terminates here.
pub const ROOT_ID: u64 = 1;

/// One Collatz step: halve even values, 3x+1 odd values.
pub fn collatz_step(x: u64) -> u64 {
    if x % 2 == 0 { x / 2 } else { 3 * x + 1 }
}

/// Node metadata stored in the graph arena.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: u64,
    /// Distance from the root along tree edges.
    pub depth: u32,
    /// Parent id; None only for the root.
    pub parent: Option<u64>,
}

/// The merged trajectory tree.
///
/// Wraps a petgraph DiGraph (edges point parent → child) plus an
/// id → NodeIndex side map for O(1) membership tests during insertion.
pub struct TrajectoryTree {
    digraph: DiGraph<NodeData, ()>,
    /// Maps node id → petgraph NodeIndex.
    node_index: HashMap<u64, NodeIndex>,
}

impl TrajectoryTree {
    /// Create a tree containing only the root node, id 1.
    pub fn new() -> Self {
        let mut digraph = DiGraph::new();
        let mut node_index = HashMap::new();
        let root = digraph.add_node(NodeData {
            id: ROOT_ID,
            depth: 0,
            parent: None,
        });
        node_index.insert(ROOT_ID, root);
        Self { digraph, node_index }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn node(&self, id: u64) -> Option<&NodeData> {
        self.node_index.get(&id).map(|&ix| &self.digraph[ix])
    }

    /// Children of `id` in the order their edges were created.
    pub fn children(&self, id: u64) -> Vec<u64> {
        match self.node_index.get(&id) {
            None => Vec::new(),
            Some(&ix) => {
                // petgraph walks out-edges newest-first; reverse to creation order.
                let mut out: Vec<u64> = self
                    .digraph
                    .neighbors_directed(ix, Direction::Outgoing)
                    .map(|c| self.digraph[c].id)
                    .collect();
                out.reverse();
                out
            }
        }
    }

    /// Insert the full trajectory of `number`, reusing any known suffix.
    ///
    /// Fails on non-positive input; a number already present is a no-op.
    pub fn insert(&mut self, number: i64) -> Result<(), Error> {
        if number < 1 {
            return Err(Error::InvalidInput(number));
        }
        let start = number as u64;
        if self.contains(start) {
            return Ok(());
        }

        // Walk forward until a known id; the root guarantees termination.
        let mut unknown: Vec<u64> = Vec::new();
        let mut cur = start;
        while !self.contains(cur) {
            unknown.push(cur);
            cur = collatz_step(cur);
        }

        // Splice the unseen suffix under the known node, root-side first.
        let mut parent_id = cur;
        for &id in unknown.iter().rev() {
            let parent_ix = self.node_index[&parent_id];
            let depth = self.digraph[parent_ix].depth + 1;
            let ix = self.digraph.add_node(NodeData {
                id,
                depth,
                parent: Some(parent_id),
            });
            self.digraph.add_edge(parent_ix, ix, ());
            self.node_index.insert(id, ix);
            parent_id = id;
        }
        Ok(())
    }

    /// Insert every number in order. Not atomic: numbers before a failing
    /// entry stay inserted.
    pub fn insert_all(&mut self, numbers: &[i64]) -> Result<(), Error> {
        self.insert_all_with_progress(numbers, |_| {})
    }

    /// Like [`insert_all`](Self::insert_all), reporting the fraction of
    /// numbers processed after each insertion (final call is 1.0 for
    /// non-empty input). The callback must not block.
    pub fn insert_all_with_progress(
        &mut self,
        numbers: &[i64],
        mut progress: impl FnMut(f64),
    ) -> Result<(), Error> {
        for (i, &n) in numbers.iter().enumerate() {
            self.insert(n)?;
            progress((i + 1) as f64 / numbers.len() as f64);
        }
        debug!(
            "inserted {} trajectories, tree has {} nodes",
            numbers.len(),
            self.node_count()
        );
        Ok(())
    }

    /// Largest depth among all nodes; 0 for a root-only tree.
    pub fn max_depth(&self) -> u32 {
        self.digraph
            .node_weights()
            .map(|n| n.depth)
            .max()
            .unwrap_or(0)
    }

    /// Deterministic parent-before-child traversal.
    ///
    /// LIFO stack order: pop a node, call `visit_leaf` or `visit_inner`, and
    /// push the children of inner nodes in their stored order — so the
    /// first-created child is visited last among siblings. Layouts depend on
    /// this exact order; do not swap it for a conventional DFS/BFS.
    pub fn traverse(
        &self,
        mut visit_inner: impl FnMut(&NodeData),
        mut visit_leaf: impl FnMut(&NodeData),
    ) {
        self.walk(|node, is_leaf| {
            if is_leaf {
                visit_leaf(node)
            } else {
                visit_inner(node)
            }
        });
    }

    /// [`traverse`](Self::traverse) with one visitor for both node kinds.
    pub fn for_each(&self, mut visit: impl FnMut(&NodeData)) {
        self.walk(|node, _| visit(node));
    }

    fn walk(&self, mut f: impl FnMut(&NodeData, bool)) {
        let root = self.node_index[&ROOT_ID];
        let mut stack = vec![root];
        while let Some(ix) = stack.pop() {
            // Newest out-edge first; reverse so children are pushed in
            // creation order.
            let mut children: Vec<NodeIndex> = self
                .digraph
                .neighbors_directed(ix, Direction::Outgoing)
                .collect();
            children.reverse();
            let node = &self.digraph[ix];
            if children.is_empty() {
                f(node, true);
            } else {
                f(node, false);
                stack.extend(children);
            }
        }
    }
}

impl Default for TrajectoryTree {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
