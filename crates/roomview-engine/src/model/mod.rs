//! Scene model: the single source of truth for room and furniture state.
//!
//! The renderer never reads [`SceneModel`] directly. It receives a
//! [`SceneSnapshot`] per frame, so a frame is always drawn from one consistent
//! state even if the model is mutated between frames.

mod change;
mod furniture;
mod plan;
mod room;
mod scene_model;

pub use change::{SceneChange, SubscriptionId};
pub use furniture::{FurnitureItem, FurnitureKind, ItemId, Position, Size, TableStyle, MAX_EXTENT, MIN_EXTENT};
pub use plan::PlanMapping;
pub use room::{RoomShape, RoomSpec, L_CUT_DENOMINATOR, L_CUT_NUMERATOR};
pub use scene_model::{parse_scale_factor, SceneModel, SceneSnapshot, SCALE_RANGE};
