//! Shared layout constants.
//! Centralizes the tweakable sizes used when framing nodes on the canvas.

// Node frames
/// Default node frame width in world units.
pub const NODE_WIDTH: f32 = 100.0;
/// Default node frame height in world units.
pub const NODE_HEIGHT: f32 = 70.0;

// Group framing
/// Padding (in world units) added around the union of member frames when computing a group's rect.
pub const GROUP_PADDING: f32 = 25.0;
