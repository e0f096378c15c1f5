//! Shelf layout: where figures stand, what they look like and what they are worth.

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::constants::*;
use crate::error::ConfigError;
use crate::picking::{HitBox, ShelfCaster};
use crate::target::{Target, TargetId};
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureKind {
    Bottle,
    Can,
    Duck,
}

impl FigureKind {
    pub const ALL: [FigureKind; 3] = [FigureKind::Bottle, FigureKind::Can, FigureKind::Duck];

    /// Hit-box half extents in the upright pose.
    pub fn half_extents(self) -> Vec3 {
        match self {
            FigureKind::Bottle => Vec3::new(0.16, 0.45, 0.16),
            FigureKind::Can => Vec3::new(0.22, 0.3, 0.22),
            FigureKind::Duck => Vec3::new(0.32, 0.28, 0.14),
        }
    }

    /// Numeric tag shared with the renderer.
    pub fn code(self) -> u32 {
        match self {
            FigureKind::Bottle => 0,
            FigureKind::Can => 1,
            FigureKind::Duck => 2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShelfLayout {
    pub rows: usize,
    pub columns: usize,
    pub column_spacing: f32,
    pub row_height: f32,
    pub row_setback: f32,
    pub base: Vec3,
    /// Max random sideways offset per figure.
    pub jitter: f32,
    pub seed: u64,
}

impl Default for ShelfLayout {
    fn default() -> Self {
        Self {
            rows: SHELF_ROWS,
            columns: SHELF_COLUMNS,
            column_spacing: SHELF_COLUMN_SPACING,
            row_height: SHELF_ROW_HEIGHT,
            row_setback: SHELF_ROW_SETBACK,
            base: Vec3::new(0.0, SHELF_BASE_Y, SHELF_BASE_Z),
            jitter: 0.12,
            seed: LAYOUT_SEED,
        }
    }
}

/// One placed figure: simulation id plus the geometry the renderer draws.
#[derive(Clone, Debug)]
pub struct Figure {
    pub id: TargetId,
    pub kind: FigureKind,
    pub row: usize,
    pub hit_box: HitBox,
}

/// Everything produced at world-build time.
#[derive(Clone, Debug)]
pub struct World {
    pub targets: Vec<Target>,
    pub figures: Vec<Figure>,
}

impl World {
    pub fn build(layout: &ShelfLayout, config: &GameConfig) -> Result<Self, ConfigError> {
        if layout.rows == 0 || layout.columns == 0 {
            return Err(ConfigError::EmptyLayout);
        }
        let mut rng = StdRng::seed_from_u64(layout.seed);
        let mut targets = Vec::with_capacity(layout.rows * layout.columns);
        let mut figures = Vec::with_capacity(layout.rows * layout.columns);
        let half_span = (layout.columns - 1) as f32 * 0.5;

        for row in 0..layout.rows {
            for col in 0..layout.columns {
                let id = TargetId((row * layout.columns + col) as u32);
                let kind = *FigureKind::ALL.choose(&mut rng).unwrap_or(&FigureKind::Can);
                let jitter = if layout.jitter > 0.0 {
                    rng.gen_range(-layout.jitter..layout.jitter)
                } else {
                    0.0
                };
                let pivot = layout.base
                    + Vec3::new(
                        (col as f32 - half_span) * layout.column_spacing + jitter,
                        row as f32 * layout.row_height,
                        -(row as f32) * layout.row_setback,
                    );
                let half_extents = kind.half_extents();
                let hit_box = HitBox {
                    pivot,
                    center_offset: Vec3::new(0.0, half_extents.y, 0.0),
                    half_extents,
                };
                targets.push(Target::new(id, pivot, row, config.points_for_row(row)));
                figures.push(Figure {
                    id,
                    kind,
                    row,
                    hit_box,
                });
            }
        }
        log::info!(
            "[world] built {} figures on {} shelves",
            figures.len(),
            layout.rows
        );
        Ok(Self { targets, figures })
    }

    /// Ray caster over this world's figures.
    pub fn caster(&self, camera: Camera) -> ShelfCaster {
        ShelfCaster::new(camera, self.figures.iter().map(|f| (f.id, f.hit_box)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_grid_with_row_scores() {
        let world = World::build(&ShelfLayout::default(), &GameConfig::default()).unwrap();
        assert_eq!(world.targets.len(), SHELF_ROWS * SHELF_COLUMNS);
        for t in &world.targets {
            assert_eq!(t.points, (t.row as u32 + 1) * POINTS_PER_ROW);
            assert!(t.is_standing());
        }
        let top = world.targets.last().unwrap();
        let bottom = &world.targets[0];
        assert!(top.position.y > bottom.position.y);
        assert!(top.position.z < bottom.position.z);
    }

    #[test]
    fn same_seed_same_world() {
        let a = World::build(&ShelfLayout::default(), &GameConfig::default()).unwrap();
        let b = World::build(&ShelfLayout::default(), &GameConfig::default()).unwrap();
        for (fa, fb) in a.figures.iter().zip(&b.figures) {
            assert_eq!(fa.kind, fb.kind);
            assert_eq!(fa.hit_box, fb.hit_box);
        }
    }

    #[test]
    fn empty_layout_is_rejected() {
        let layout = ShelfLayout {
            rows: 0,
            ..ShelfLayout::default()
        };
        assert_eq!(
            World::build(&layout, &GameConfig::default()).err(),
            Some(ConfigError::EmptyLayout)
        );
    }
}
