use super::ItemId;

/// Change descriptor published by [`SceneModel`](super::SceneModel) after every mutation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SceneChange {
    ItemAdded(ItemId),
    ItemRemoved(ItemId),
    ItemUpdated(ItemId),
    RoomChanged,
    LightingChanged,
}

/// Handle returned by `SceneModel::subscribe`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
