//! Node frames on the canvas and the geometric queries the editor runs over them.
//!
//! Every query here goes through [`Rect`]: node hit-testing uses
//! [`Rect::contains_point`], marquee selection uses [`Rect::intersects`] or
//! [`Rect::contains_rect`], and group framing uses [`Rect::bounding`].

use crate::constants::{GROUP_PADDING, NODE_HEIGHT, NODE_WIDTH};
use crate::point::Point;
use crate::rect::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for node frames.
pub type NodeId = Uuid;

/// The on-canvas box of a single node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeFrame {
    /// Unique identifier for this node
    pub id: NodeId,
    /// User-displayable name of the node
    pub name: String,
    /// Center of the frame on the canvas as (x, y) world coordinates
    pub position: (f32, f32),
}

impl NodeFrame {
    /// Creates a new node frame.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name for the node
    /// * `position` - The (x, y) center of the frame on the canvas
    ///
    /// # Returns
    ///
    /// A new `NodeFrame` with a unique ID.
    pub fn new(name: String, position: (f32, f32)) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            position,
        }
    }

    /// Computes the world-space rect of this frame, centered at its position.
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position.0, self.position.1, NODE_WIDTH, NODE_HEIGHT)
    }
}

/// All node frames placed on a canvas, in drawing order.
///
/// Frames later in the list are drawn on top of earlier ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasLayout {
    /// Frames in drawing order
    pub nodes: Vec<NodeFrame>,
}

impl CanvasLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the layout to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a layout from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds a frame on top of all existing frames.
    ///
    /// # Returns
    ///
    /// The ID of the newly added frame.
    pub fn add_node(&mut self, node: NodeFrame) -> NodeId {
        let id = node.id;
        log::debug!("adding node {} ({}) at {:?}", node.name, id, node.position);
        self.nodes.push(node);
        id
    }

    /// Looks up a frame by ID.
    pub fn node(&self, node_id: &NodeId) -> Option<&NodeFrame> {
        self.nodes.iter().find(|n| n.id == *node_id)
    }

    /// Removes a frame from the layout.
    ///
    /// # Returns
    ///
    /// `true` if the frame was found and removed, `false` if it didn't exist.
    pub fn remove_node(&mut self, node_id: &NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != *node_id);
        let removed = self.nodes.len() != before;
        if removed {
            log::debug!("removed node {}", node_id);
        }
        removed
    }

    /// Moves a frame so that it is centered at `position`.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the frame was moved, or an error message if it doesn't exist.
    pub fn move_node(&mut self, node_id: NodeId, position: (f32, f32)) -> Result<(), String> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| "Node does not exist".to_string())?;
        log::debug!("moving node {} from {:?} to {:?}", node_id, node.position, position);
        node.position = position;
        Ok(())
    }

    /// Finds the topmost frame at the given world position, if any.
    ///
    /// # Arguments
    ///
    /// * `pos` - Position in world space to check
    ///
    /// # Returns
    ///
    /// The ID of the frame at that position, or `None` if no frame is there
    pub fn node_at(&self, pos: impl Into<Point>) -> Option<NodeId> {
        let pos = pos.into();
        let hit = self
            .nodes
            .iter()
            .rev()
            .find(|n| n.bounds().contains_point(pos))
            .map(|n| n.id);
        log::trace!("hit test at {} -> {:?}", pos, hit);
        hit
    }

    /// Collects the frames overlapping a selection rectangle.
    ///
    /// The selection may be a raw drag rectangle with negative extents.
    /// Results are in drawing order.
    pub fn nodes_touching(&self, selection: &Rect) -> Vec<NodeId> {
        let hits: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.bounds().intersects(selection))
            .map(|n| n.id)
            .collect();
        log::trace!("{} nodes touching {}", hits.len(), selection);
        hits
    }

    /// Collects the frames lying entirely inside a selection rectangle.
    ///
    /// Results are in drawing order.
    pub fn nodes_within(&self, selection: &Rect) -> Vec<NodeId> {
        let hits: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| selection.contains_rect(&n.bounds()))
            .map(|n| n.id)
            .collect();
        log::trace!("{} nodes within {}", hits.len(), selection);
        hits
    }

    /// Computes the padded bounding rect of a group of frames.
    ///
    /// IDs that don't resolve to a frame are skipped.
    ///
    /// # Returns
    ///
    /// The union of the member frames grown by [`GROUP_PADDING`] on every side,
    /// or `None` if no member was found.
    pub fn group_bounds(&self, members: &[NodeId]) -> Option<Rect> {
        let rects = members
            .iter()
            .filter_map(|id| self.node(id))
            .map(NodeFrame::bounds);
        Rect::bounding(rects).map(|r| r.expanded(GROUP_PADDING, GROUP_PADDING))
    }

    /// Computes the unpadded bounding rect of every frame, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.nodes.iter().map(NodeFrame::bounds))
    }
}

#[cfg(test)]
mod tests;
