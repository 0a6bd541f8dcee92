/// Local scene positions onto the minimap widget
use crate::geometry::ScreenPoint;
use crate::scene::LocalPoint;
use crate::trig::{self, FIXED_SHIFT};

/// Local units per minimap pixel.
pub const MINIMAP_UNITS_PER_PIXEL: i32 = 32;
/// Squared minimap-pixel distance from the player beyond which nothing is
/// drawn.
pub const MINIMAP_DRAW_RADIUS_SQ: i32 = 6400;

/// Minimap state for one frame: where it is drawn, whose position it is
/// centred on and how far it is rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimap {
    pub center: ScreenPoint,
    pub player: LocalPoint,
    pub angle: i32,
    pub radius_sq: i32,
}

impl Minimap {
    pub fn new(center: ScreenPoint, player: LocalPoint, angle: i32) -> Self {
        Self {
            center,
            player,
            angle,
            radius_sq: MINIMAP_DRAW_RADIUS_SQ,
        }
    }
}

/// Map a local scene position onto the minimap, or `None` past its radius.
pub fn world_to_minimap(minimap: &Minimap, x: i32, y: i32) -> Option<ScreenPoint> {
    let dx = x / MINIMAP_UNITS_PER_PIXEL - minimap.player.x / MINIMAP_UNITS_PER_PIXEL;
    let dy = y / MINIMAP_UNITS_PER_PIXEL - minimap.player.y / MINIMAP_UNITS_PER_PIXEL;
    let (dx, dy) = (i64::from(dx), i64::from(dy));
    if dx * dx + dy * dy >= i64::from(minimap.radius_sq) {
        return None;
    }

    let sin = i64::from(trig::sine(minimap.angle));
    let cos = i64::from(trig::cosine(minimap.angle));
    let map_x = (dy * sin + dx * cos) >> FIXED_SHIFT;
    let map_y = (dx * sin - dy * cos) >> FIXED_SHIFT;

    Some(ScreenPoint::new(
        minimap.center.x + map_x as i32,
        minimap.center.y + map_y as i32,
    ))
}
