//! Blaze - grid raycasting and convex collision core
//!
//! Core modules:
//! - `map`: Immutable tile grid and level file validation
//! - `ray`: DDA raycaster over the tile grid
//! - `view`: Camera column rays and wall projection
//! - `physics`: Convex colliders with GJK/EPA narrow phase
//! - `settings`: Serializable view configuration
//!
//! Nothing in here touches a rendering surface, input device or file system.
//! Callers hand in grids and colliders and get hit records and penetration
//! vectors back.

pub mod map;
pub mod physics;
pub mod ray;
pub mod settings;
pub mod vectors;
pub mod view;

pub use map::{GridMap, MapError, MapFile};
pub use physics::{Aabb, Circle, Collider, CollisionResult, test_collision};
pub use ray::{Axis, CastResult, Ray, cast};
pub use settings::Settings;
pub use view::{Camera, ColumnHit, Viewport};

/// Engine constants
pub mod consts {
    /// Maximum GJK simplex evolutions before giving up (no collision)
    pub const GJK_MAX_ITERATIONS: usize = 16;

    /// Maximum EPA polytope expansions before returning the best edge
    pub const EPA_MAX_ITERATIONS: usize = 16;
    /// EPA convergence tolerance, also added to the reported depth
    pub const EPA_TOLERANCE: f32 = 0.005;

    /// Rotation applied to a circle's support point to fake its neighbours (4°)
    pub const CIRCLE_NEIGHBOUR_ANGLE: f32 = std::f32::consts::PI / 45.0;

    /// Default horizontal field of view in degrees
    pub const DEFAULT_FOV_DEGREES: f32 = 70.0;
}
