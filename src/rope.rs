//! Rope/worm connection graph
//!
//! Nodes live in a flat position table and connections refer to them by
//! index, so two links sharing a joint both see the same live position.
//! Segments are rebuilt from the table on every query and never cached.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::SHORTEN_FACTOR;
use crate::geom::{LineSegment, Vector2D, find_pair, for_each_pair_indexed, intersects_with_factor};
use crate::settings::Settings;

/// Index of a node in a `Rope`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// An edge between two distinct nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub a: NodeId,
    pub b: NodeId,
}

/// Errors from building or editing a rope
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RopeError {
    /// A connection may not join a node to itself
    #[error("connection endpoints must differ (both are node {0})")]
    SelfLoop(usize),

    /// Referenced a node that is not in the table
    #[error("unknown node {id} (rope has {len} nodes)")]
    UnknownNode { id: usize, len: usize },
}

/// Node positions plus the connections between them
///
/// Deserializing re-checks every connection, so a loaded rope upholds the
/// same invariants as one built through `connect`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RopeData")]
pub struct Rope {
    nodes: Vec<Vector2D>,
    connections: Vec<Connection>,
}

/// Unchecked wire form of a `Rope`
#[derive(Deserialize)]
struct RopeData {
    nodes: Vec<Vector2D>,
    connections: Vec<Connection>,
}

impl TryFrom<RopeData> for Rope {
    type Error = RopeError;

    fn try_from(data: RopeData) -> Result<Self, RopeError> {
        let mut rope = Rope {
            nodes: data.nodes,
            connections: Vec::with_capacity(data.connections.len()),
        };
        for conn in data.connections {
            rope.connect(conn.a, conn.b)?;
        }
        Ok(rope)
    }
}

impl Rope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain linking each position to the next
    pub fn chain(positions: &[Vector2D]) -> Self {
        let mut rope = Self::new();
        let ids: Vec<NodeId> = positions.iter().map(|&p| rope.add_node(p)).collect();
        for pair in ids.windows(2) {
            rope.connections.push(Connection { a: pair[0], b: pair[1] });
        }
        rope
    }

    pub fn add_node(&mut self, pos: Vector2D) -> NodeId {
        self.nodes.push(pos);
        NodeId(self.nodes.len() - 1)
    }

    /// Add a connection, returning its index
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<usize, RopeError> {
        if a == b {
            return Err(RopeError::SelfLoop(a.0));
        }
        self.check(a)?;
        self.check(b)?;
        self.connections.push(Connection { a, b });
        Ok(self.connections.len() - 1)
    }

    pub fn position(&self, id: NodeId) -> Option<Vector2D> {
        self.nodes.get(id.0).copied()
    }

    /// Move a node; every connection touching it follows
    pub fn set_position(&mut self, id: NodeId, pos: Vector2D) -> Result<(), RopeError> {
        let len = self.nodes.len();
        let slot = self
            .nodes
            .get_mut(id.0)
            .ok_or(RopeError::UnknownNode { id: id.0, len })?;
        *slot = pos;
        Ok(())
    }

    pub fn nodes(&self) -> &[Vector2D] {
        &self.nodes
    }

    /// Mutable access to all node positions for per-frame updates
    pub fn nodes_mut(&mut self) -> &mut [Vector2D] {
        &mut self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Current segment for a connection
    pub fn segment(&self, conn: &Connection) -> Option<LineSegment> {
        Some(LineSegment::new(self.position(conn.a)?, self.position(conn.b)?))
    }

    /// Connection index pairs whose segments currently cross, in scan order
    pub fn crossings(&self) -> Vec<(usize, usize)> {
        self.crossings_with_factor(SHORTEN_FACTOR)
    }

    /// Crossings using the shortening factor from `settings`
    pub fn crossings_with(&self, settings: &Settings) -> Vec<(usize, usize)> {
        self.crossings_with_factor(settings.shorten_factor)
    }

    fn crossings_with_factor(&self, factor: f64) -> Vec<(usize, usize)> {
        let segments = self.segments();
        let mut found = Vec::new();
        for_each_pair_indexed(&segments, |i, j, a, b| {
            if intersects_with_factor(a, b, factor) {
                found.push((i, j));
            }
        });
        if !found.is_empty() {
            log::debug!(
                "{} crossing(s) among {} connections",
                found.len(),
                segments.len()
            );
        }
        found
    }

    /// First crossing in scan order
    pub fn first_crossing(&self) -> Option<(usize, usize)> {
        self.first_crossing_with_factor(SHORTEN_FACTOR)
    }

    /// First crossing using the shortening factor from `settings`
    pub fn first_crossing_with(&self, settings: &Settings) -> Option<(usize, usize)> {
        self.first_crossing_with_factor(settings.shorten_factor)
    }

    fn first_crossing_with_factor(&self, factor: f64) -> Option<(usize, usize)> {
        let segments = self.segments();
        find_pair(&segments, |a, b| intersects_with_factor(a, b, factor))
    }

    pub fn is_tangled(&self) -> bool {
        self.first_crossing().is_some()
    }

    pub fn is_tangled_with(&self, settings: &Settings) -> bool {
        self.first_crossing_with(settings).is_some()
    }

    // Every connection was checked by `connect` and nodes are never removed
    fn segments(&self) -> Vec<LineSegment> {
        self.connections
            .iter()
            .map(|c| LineSegment::new(self.nodes[c.a.0], self.nodes[c.b.0]))
            .collect()
    }

    fn check(&self, id: NodeId) -> Result<(), RopeError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(RopeError::UnknownNode {
                id: id.0,
                len: self.nodes.len(),
            })
        }
    }
}
