use crate::coords::Affine2;
use crate::error::RenderError;
use crate::lighting::LightingState;
use crate::model::{FurnitureItem, SceneSnapshot};
use crate::scene::{Border, DrawCmd, DrawItem, DrawList, ZIndex};
use crate::view::ViewState;

use super::config::RenderConfig;
use super::depth::{back_to_front, perspective_scale};
use super::furniture::{compose, emit_parts};
use super::projector::projection;
use super::room::draw_room;
use super::shadow::draw_shadows;

/// Per-frame counters.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub items_drawn: usize,
    pub items_skipped: usize,
    pub shadows: usize,
}

/// One rendered frame: a projection plus scene-space commands in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Scene-to-surface transform applied to every command.
    pub transform: Affine2,
    /// Commands tagged with their layer, already in paint order.
    pub items: Vec<DrawItem>,
    pub stats: FrameStats,
}

impl Frame {
    /// Commands in paint order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    /// Commands of a single layer, in paint order.
    pub fn layer(&self, z: ZIndex) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().filter(move |item| item.z == z).map(|item| &item.cmd)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Renders with [`RenderConfig::default`].
pub fn render(snapshot: &SceneSnapshot, view: &ViewState, lighting: &LightingState) -> Frame {
    render_with(&RenderConfig::default(), snapshot, view, lighting)
}

/// Builds the full frame for one snapshot.
///
/// An item that fails to produce geometry is logged and left out; the rest of
/// the frame is unaffected.
pub fn render_with(config: &RenderConfig, snapshot: &SceneSnapshot, view: &ViewState, lighting: &LightingState) -> Frame {
    let outline = Border::outline(config.outline_width);
    let mut list = DrawList::new();
    let mut scratch = Vec::new();
    let mut stats = FrameStats::default();

    draw_room(&snapshot.room, lighting, &outline, &mut scratch);
    list.extend(ZIndex::ROOM, scratch.drain(..));

    stats.shadows = draw_shadows(&snapshot.room, &snapshot.items, lighting, &mut scratch);
    list.extend(ZIndex::SHADOW, scratch.drain(..));

    for item in back_to_front(&snapshot.items) {
        match render_item(config, item, lighting, &outline, &mut scratch) {
            Ok(()) => {
                list.extend(ZIndex::FURNITURE, scratch.drain(..));
                stats.items_drawn += 1;
            }
            Err(e) => {
                log::warn!("skipping {} {}: {e}", item.kind, item.id);
                scratch.clear();
                stats.items_skipped += 1;
            }
        }
    }

    log::debug!(
        "frame: {} commands, {} items drawn, {} skipped, {} shadows",
        list.len(),
        stats.items_drawn,
        stats.items_skipped,
        stats.shadows
    );

    Frame {
        transform: projection(view, config.viewport),
        items: list.into_paint_order(),
        stats,
    }
}

/// Appends the commands of one item to `out`. On error `out` may hold a
/// partial item and must be discarded.
fn render_item(
    config: &RenderConfig,
    item: &FurnitureItem,
    lighting: &LightingState,
    outline: &Border,
    out: &mut Vec<DrawCmd>,
) -> Result<(), RenderError> {
    let mut size = item.drawable_size()?;
    if config.perspective_attenuation {
        size = size.scaled(perspective_scale(item.position.z)).clamped();
    }

    let p = item.position;
    // Screen anchor: floor position lifted by the height above the floor.
    let parts = compose(item.kind, p.x, p.z - p.y, size, item.color, lighting);
    if !parts.iter().all(|part| part.is_finite()) {
        return Err(RenderError::NonFiniteGeometry { id: item.id });
    }
    emit_parts(&parts, outline, out);
    Ok(())
}
