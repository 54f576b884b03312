//! Maximum-cardinality matching via augmenting-path search (Kuhn's algorithm)

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{BipartiteGraph, LeftId, RightId};

/// Terminal state of a single augmenting-path search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An unmatched right vertex was reached and the path to it was flipped;
    /// the matching grew by one pair
    Found,
    /// The frontier emptied without reaching an unmatched right vertex; the
    /// matching is unchanged
    Exhausted,
}

/// Augmenting-path matching engine over a borrowed [`BipartiteGraph`].
///
/// The engine owns the matching state as a pair of mirrored partner maps, one
/// per direction, kept in lockstep so either side can be queried. Growth
/// happens one augmenting path at a time: a depth-first search from a free
/// left vertex that may pass through already-matched right vertices, rerouting
/// their partners instead of overwriting them.
pub struct MatchingEngine<'a> {
    graph: &'a BipartiteGraph,
    /// matched_left[v] = left partner of right vertex v
    matched_left: Vec<Option<LeftId>>,
    /// matched_right[u] = right partner of left vertex u, mirror of `matched_left`
    matched_right: Vec<Option<RightId>>,
    /// Left vertices expanded by the search in progress
    visited: Vec<bool>,
    /// parent[u] = left vertex that discovered u through u's matched edge
    /// during the search in progress
    parent: Vec<Option<LeftId>>,
}

impl<'a> MatchingEngine<'a> {
    /// Create an engine with every vertex unmatched
    pub fn new(graph: &'a BipartiteGraph) -> Self {
        let n = graph.vertex_space();
        MatchingEngine {
            graph,
            matched_left: vec![None; n],
            matched_right: vec![None; n],
            visited: vec![false; n],
            parent: vec![None; n],
        }
    }

    /// Compute a maximum matching and return its size.
    ///
    /// Resets the matching to empty, then runs one augmenting-path search
    /// from each distinct left vertex in first-appearance order. Because the
    /// state is reset first, calling this again recomputes from scratch and
    /// returns the same result.
    pub fn compute(&mut self) -> usize {
        self.matched_left.fill(None);
        self.matched_right.fill(None);

        let mut size = 0;
        for &start in self.graph.left_vertices() {
            if self.augment_from(start) == SearchOutcome::Found {
                size += 1;
            }
        }
        debug!(
            "matched {} of {} left vertices",
            size,
            self.graph.left_vertices().len()
        );
        size
    }

    /// Search for an augmenting path starting at `start` and flip it if one
    /// is found.
    ///
    /// The search is depth-first and scans each left vertex's edges in input
    /// order, so the matching it builds is fully determined by the edge list.
    /// Augmenting paths begin at free vertices: a call on an already-matched
    /// left vertex reports `Exhausted` without touching any state.
    pub fn augment_from(&mut self, start: LeftId) -> SearchOutcome {
        if self.matched_right[start.0].is_some() {
            return SearchOutcome::Exhausted;
        }
        self.visited.fill(false);
        self.parent.fill(None);

        let mut frontier = vec![start];
        while let Some(cur) = frontier.pop() {
            // A vertex can be pushed through several edges before it is popped.
            if self.visited[cur.0] {
                continue;
            }
            self.visited[cur.0] = true;

            for &to in self.graph.neighbors(cur) {
                match self.matched_left[to.0] {
                    None => {
                        self.flip_path(cur, to);
                        trace!("augmenting path from {} ends at free right {}", start, to);
                        return SearchOutcome::Found;
                    }
                    Some(partner) if !self.visited[partner.0] => {
                        self.parent[partner.0] = Some(cur);
                        frontier.push(partner);
                    }
                    Some(_) => {}
                }
            }
        }
        trace!("no augmenting path from {}", start);
        SearchOutcome::Exhausted
    }

    /// Flip every edge on the alternating path discovered by the current
    /// search, ending at the free right vertex `free` reached from `last`.
    ///
    /// Walks the path backward: each right vertex is handed to the left
    /// vertex that reached it, and that left vertex's displaced partner
    /// becomes the next right vertex to reassign. The walk stops at the
    /// search's start vertex, which had no partner to displace.
    fn flip_path(&mut self, last: LeftId, free: RightId) {
        let mut left = last;
        let mut right = free;
        loop {
            let displaced = self.matched_right[left.0].replace(right);
            self.matched_left[right.0] = Some(left);
            match (displaced, self.parent[left.0]) {
                (Some(prev_right), Some(prev_left)) => {
                    right = prev_right;
                    left = prev_left;
                }
                _ => break,
            }
        }
    }

    /// Number of matched pairs currently held
    pub fn matching_size(&self) -> usize {
        self.matched_left.iter().filter(|p| p.is_some()).count()
    }

    /// Right partner of a left vertex, if any
    pub fn partner_of_left(&self, left: LeftId) -> Option<RightId> {
        self.matched_right[left.0]
    }

    /// Left partner of a right vertex, if any
    pub fn partner_of_right(&self, right: RightId) -> Option<LeftId> {
        self.matched_left[right.0]
    }

    /// Matched pairs in ascending right-vertex order
    pub fn matched_pairs(&self) -> Vec<(LeftId, RightId)> {
        self.matched_left
            .iter()
            .enumerate()
            .filter_map(|(v, &partner)| partner.map(|u| (u, RightId(v))))
            .collect()
    }

    /// Check that the stored matching is self-consistent.
    ///
    /// Fails if a left vertex is claimed by two right vertices or if the
    /// mirrored partner maps disagree. Neither can happen unless the path
    /// flip is broken; this exists for test instrumentation.
    pub fn verify_matching(&self) -> Result<()> {
        let mut claimed = vec![false; self.graph.vertex_space()];
        for (v, &partner) in self.matched_left.iter().enumerate() {
            let Some(u) = partner else { continue };
            if claimed[u.0] {
                return Err(Error::invariant(format!(
                    "left vertex {} is claimed by two right vertices",
                    u
                )));
            }
            claimed[u.0] = true;
            if self.matched_right[u.0] != Some(RightId(v)) {
                return Err(Error::invariant(format!(
                    "right vertex {} points at left vertex {} which does not point back",
                    v, u
                )));
            }
        }
        for (u, &partner) in self.matched_right.iter().enumerate() {
            let Some(v) = partner else { continue };
            if self.matched_left[v.0] != Some(LeftId(u)) {
                return Err(Error::invariant(format!(
                    "left vertex {} points at right vertex {} which does not point back",
                    u, v
                )));
            }
        }
        Ok(())
    }
}
