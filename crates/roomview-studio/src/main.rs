//! Headless driver: builds a demo room, spins the view and renders frames.
//!
//! Usage: `roomview-studio [frames] [shape]` where `shape` is one of
//! `Rectangle`, `Square` or `L-Shape`.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use roomview_engine::logging::{init_logging, LoggingConfig};
use roomview_engine::model::{FurnitureItem, FurnitureKind, PlanMapping, RoomShape, SceneModel, TableStyle};
use roomview_engine::paint::Rgb;
use roomview_engine::render::{render_with, RenderConfig};
use roomview_engine::time::FrameClock;
use roomview_engine::view::{RotateDirection, ViewController, ViewInput, AUTO_ROTATE_INTERVAL};

const DEFAULT_FRAMES: u64 = 40;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(raw) => raw.parse::<u64>().with_context(|| format!("invalid frame count {raw:?}"))?,
        None => DEFAULT_FRAMES,
    };
    let shape = match args.next() {
        Some(name) => match RoomShape::from_name(&name) {
            Some(shape) => shape,
            None => bail!("unknown room shape {name:?}"),
        },
        None => RoomShape::Rectangle,
    };

    let mut model = build_demo(shape)?;
    model.subscribe(|change| log::info!("scene: {change:?}"));
    model.set_shadow_intensity(0.6);

    let mut controller = ViewController::default();
    controller.apply(ViewInput::StartAutoRotate(RotateDirection::Right));

    let config = RenderConfig::default();
    let mut clock = FrameClock::new();

    for _ in 0..frames {
        let ft = clock.advance(AUTO_ROTATE_INTERVAL);
        controller.tick(ft.delta);

        for change in model.drain_changes() {
            log::debug!("frame {}: applying {change:?}", ft.frame_index);
        }

        let frame = render_with(&config, &model.snapshot(), controller.view(), model.lighting());
        log::info!(
            "frame {:>3}: yaw {:>5.1}° {:>4} commands, {} items, {} shadows",
            ft.frame_index,
            controller.view().rotation_y(),
            frame.len(),
            frame.stats.items_drawn,
            frame.stats.shadows,
        );

        std::thread::sleep(Duration::from_millis(5));
    }

    controller.apply(ViewInput::StopAutoRotate);
    Ok(())
}

/// A furnished bedroom-and-dining demo laid out through the plan editor's
/// coordinate system.
fn build_demo(shape: RoomShape) -> Result<SceneModel> {
    let mut model = SceneModel::default();
    model
        .apply_room_form("500", "400", "250")
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    model.set_room_shape(shape);
    model.set_room_color(Rgb::new(245, 245, 220));

    let plan = PlanMapping::default();
    let walnut = Rgb::new(120, 72, 40);
    let placements = [
        (FurnitureKind::Table(TableStyle::Dining), 250, 200, walnut),
        (FurnitureKind::Chair, 190, 200, walnut),
        (FurnitureKind::Chair, 310, 200, walnut),
        (FurnitureKind::Bed, 120, 90, Rgb::new(150, 110, 80)),
        (FurnitureKind::Wardrobe, 420, 60, Rgb::new(200, 180, 150)),
        (FurnitureKind::Sofa, 380, 320, Rgb::new(90, 110, 140)),
    ];
    for (kind, px, py, color) in placements {
        let (w, h) = kind.catalogue_size().context("demo furniture must come from the catalogue")?;
        model.add_item(FurnitureItem::from_plan(kind, plan, px, py, w, h, color));
    }

    let mut lamp = FurnitureItem::from_plan(FurnitureKind::Lamp, plan, 60, 330, 40, 160, Rgb::new(230, 200, 120));
    lamp.size.depth = 40;
    let lamp = model.add_item(lamp);
    model
        .scale_item(lamp, 1.2)
        .with_context(|| format!("scaling lamp {lamp}"))?;

    Ok(model)
}
