//! The scoring pipeline: hole records → strokes totals and Wolf points →
//! normalized Wolf scores → medals.

pub mod medals;
pub mod normalize;
pub mod totals;
pub mod wolf;

pub use medals::{Medal, PlayerMedals, PODIUM_SIZE, medals};
pub use normalize::normalize;
pub use totals::totals;
pub use wolf::{hole_points, hole_points_with, wolf_points, wolf_points_with};
