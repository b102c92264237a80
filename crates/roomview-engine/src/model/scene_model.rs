use core::ops::RangeInclusive;

use crate::error::InputError;
use crate::lighting::LightingState;
use crate::paint::Rgb;

use super::{FurnitureItem, ItemId, RoomShape, RoomSpec, SceneChange, SubscriptionId};

/// Range the scale dialog clamps a factor into.
pub const SCALE_RANGE: RangeInclusive<f32> = 0.5..=2.0;

type Listener = Box<dyn FnMut(&SceneChange)>;

/// Read-only copy of the model handed to the renderer for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub room: RoomSpec,
    /// Items in insertion order.
    pub items: Vec<FurnitureItem>,
}

/// Owns room, furniture and lighting for one design session.
///
/// Every mutation publishes a [`SceneChange`] twice: to the registered
/// callbacks immediately, and to a queue that a frame loop can poll with
/// [`drain_changes`](Self::drain_changes).
///
/// The model is single-threaded. If input ever arrives on another thread it
/// must be funnelled through one writer before the next frame snapshots.
pub struct SceneModel {
    room: RoomSpec,
    items: Vec<FurnitureItem>,
    lighting: LightingState,

    next_item_id: u64,
    next_subscription_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    pending: Vec<SceneChange>,
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new(RoomSpec::default(), LightingState::default())
    }
}

impl SceneModel {
    pub fn new(room: RoomSpec, lighting: LightingState) -> Self {
        Self {
            room,
            items: Vec::new(),
            lighting,
            next_item_id: 1,
            next_subscription_id: 1,
            listeners: Vec::new(),
            pending: Vec::new(),
        }
    }

    // ── observation ───────────────────────────────────────────────────────

    /// Registers a callback invoked synchronously after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&SceneChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Takes every change published since the previous call, oldest first.
    pub fn drain_changes(&mut self) -> Vec<SceneChange> {
        std::mem::take(&mut self.pending)
    }

    fn publish(&mut self, change: SceneChange) -> SceneChange {
        log::trace!("scene change: {change:?}");
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
        self.pending.push(change);
        change
    }

    // ── reads ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn room(&self) -> &RoomSpec {
        &self.room
    }

    #[inline]
    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&FurnitureItem> {
        self.items.iter().find(|it| it.id == id)
    }

    #[inline]
    pub fn lighting(&self) -> &LightingState {
        &self.lighting
    }

    /// Consistent copy of room and furniture for one frame.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot { room: self.room, items: self.items.clone() }
    }

    // ── furniture ─────────────────────────────────────────────────────────

    /// Appends an item and assigns it a fresh id.
    pub fn add_item(&mut self, mut item: FurnitureItem) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        item.id = id;
        self.items.push(item);
        self.publish(SceneChange::ItemAdded(id));
        id
    }

    pub fn remove_item(&mut self, id: ItemId) -> Result<FurnitureItem, InputError> {
        let idx = self.index_of(id)?;
        let item = self.items.remove(idx);
        self.publish(SceneChange::ItemRemoved(id));
        Ok(item)
    }

    /// Applies `edit` to the item in place. The id cannot be changed.
    pub fn update_item<F>(&mut self, id: ItemId, edit: F) -> Result<SceneChange, InputError>
    where
        F: FnOnce(&mut FurnitureItem),
    {
        let idx = self.index_of(id)?;
        let item = &mut self.items[idx];
        edit(item);
        item.id = id;
        Ok(self.publish(SceneChange::ItemUpdated(id)))
    }

    /// Moves an item to a new floor position.
    pub fn move_item(&mut self, id: ItemId, x: i32, z: i32) -> Result<SceneChange, InputError> {
        self.update_item(id, |item| {
            item.position.x = x;
            item.position.z = z;
        })
    }

    /// Multiplies the item's scale by `factor`, clamped into [`SCALE_RANGE`].
    pub fn scale_item(&mut self, id: ItemId, factor: f32) -> Result<SceneChange, InputError> {
        if !factor.is_finite() {
            return Err(InputError::InvalidScale(factor.to_string()));
        }
        let factor = factor.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end());
        self.update_item(id, |item| {
            item.scale = Some(item.scale.unwrap_or(1.0) * factor);
        })
    }

    fn index_of(&self, id: ItemId) -> Result<usize, InputError> {
        self.items
            .iter()
            .position(|it| it.id == id)
            .ok_or(InputError::UnknownItem(id))
    }

    // ── room ──────────────────────────────────────────────────────────────

    pub fn set_room_dimensions(&mut self, width: u32, length: u32, height: u32) -> Result<SceneChange, InputError> {
        self.room.set_dimensions(width, length, height)?;
        Ok(self.publish(SceneChange::RoomChanged))
    }

    /// Applies the room form's three text fields. Nothing changes unless all parse.
    pub fn apply_room_form(&mut self, width: &str, length: &str, height: &str) -> Result<SceneChange, InputError> {
        let (w, l, h) = RoomSpec::parse_dimensions(width, length, height).inspect_err(|e| {
            log::warn!("room form rejected: {e}");
        })?;
        self.set_room_dimensions(w, l, h)
    }

    pub fn set_room_shape(&mut self, shape: RoomShape) -> SceneChange {
        self.room.shape = shape;
        self.publish(SceneChange::RoomChanged)
    }

    pub fn set_room_color(&mut self, color: Rgb) -> SceneChange {
        self.room.color = color;
        self.publish(SceneChange::RoomChanged)
    }

    // ── lighting ──────────────────────────────────────────────────────────

    /// Clamps into `[0, 1]`. Non-finite input is ignored and nothing is published.
    pub fn set_light_intensity(&mut self, v: f32) -> Option<SceneChange> {
        self.lighting.set_light_intensity(v).then(|| self.publish(SceneChange::LightingChanged))
    }

    /// Clamps into `[0, 1]`. Non-finite input is ignored and nothing is published.
    pub fn set_shadow_intensity(&mut self, v: f32) -> Option<SceneChange> {
        self.lighting.set_shadow_intensity(v).then(|| self.publish(SceneChange::LightingChanged))
    }

    /// Clamps into `[0.5, 1.5]`. Non-finite input is ignored and nothing is published.
    pub fn set_contrast(&mut self, v: f32) -> Option<SceneChange> {
        self.lighting.set_contrast(v).then(|| self.publish(SceneChange::LightingChanged))
    }

    pub fn set_ambient_color(&mut self, color: Rgb) -> SceneChange {
        self.lighting.set_ambient_color(color);
        self.publish(SceneChange::LightingChanged)
    }
}

/// Parses the scale dialog's text field. The result is not yet clamped.
pub fn parse_scale_factor(raw: &str) -> Result<f32, InputError> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidScale(raw.to_owned())),
    }
}
