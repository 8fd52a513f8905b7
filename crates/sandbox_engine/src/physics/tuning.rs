//! Collision tuning constants
//!
//! These values are coupled to the mover eye-height convention (colliders
//! receive the mover's eye position, not its feet) and were tuned by hand.
//! Changing any of them changes how walls, platforms and floors feel.

/// Distance from a mover's eye down to its feet
pub const EYE_TO_FEET: f32 = 1.7;

/// Distance from a mover's eye up to the top of its head
pub const EYE_TO_HEAD: f32 = 0.2;

/// A mover whose feet are within this distance below a box top is treated as standing on it
pub const TOP_CLEARANCE: f32 = 0.5;

/// Boxes whose base sits above this height can be walked underneath
pub const ELEVATED_BASE_Y: f32 = 2.0;

/// Extra distance added to every push-out so the mover ends clear of the face
pub const PUSH_MARGIN: f32 = 0.01;

/// Separation below which a sphere/cylinder push direction is undefined
pub const DEGENERATE_DISTANCE: f32 = 0.001;

/// How far above the feet a floor top may be and still be snapped up onto
pub const FLOOR_SNAP_BELOW: f32 = 0.5;

/// How far above a floor the feet may be while it still counts as the floor
pub const FLOOR_STAY_ABOVE: f32 = 10.0;

/// Maximum X/Z Euler tilt (radians) for an oriented box to count as flat
pub const FLAT_TILT_EPSILON: f32 = 0.01;

/// World normal component above which the matching velocity axis is zeroed
pub const NORMAL_AXIS_THRESHOLD: f32 = 0.5;

/// Step tolerance used by the external ground providers
pub const STEP_TOLERANCE: f32 = FLOOR_SNAP_BELOW;
