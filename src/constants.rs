//! Interaction constants.
//!
//! Centralizes hit-area and hover-box values so hit testing, previews and
//! the host renderer agree on the same reach.

// ============================================================================
// Hit Testing
// ============================================================================

/// Side length of the square hover box around each anchor handle, in
/// viewport pixels. A pointer inside this box grabs the anchor.
pub const ANCHOR_HOVER_SIZE: f32 = 16.0;

/// Thickness of the boundary band straddling a rectangle's edge, in viewport
/// pixels. Half of it reaches outward, half inward.
pub const BOUNDARY_HOVER_THICKNESS: f32 = 16.0;

// ============================================================================
// Gestures
// ============================================================================

/// Scale factor applied to the torque-like quantity driving rotation.
pub const ROTATION_SCALE_FACTOR: f32 = 0.5;
