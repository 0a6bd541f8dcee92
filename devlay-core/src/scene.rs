/// Scene coordinate systems and terrain height sampling
use serde::{Deserialize, Serialize};

pub const LOCAL_COORD_BITS: u32 = 7;
/// Local units per tile edge.
pub const LOCAL_TILE_SIZE: i32 = 1 << LOCAL_COORD_BITS;
pub const LOCAL_HALF_TILE_SIZE: i32 = LOCAL_TILE_SIZE / 2;
/// Tiles per edge of the loaded scene.
pub const SCENE_SIZE: i32 = 104;
pub const MAX_PLANES: usize = 4;
/// Inclusive local-coordinate bounds inside which terrain is sampled and
/// points are projected. The outermost tile ring is never drawn.
pub const SCENE_MIN: i32 = LOCAL_TILE_SIZE;
pub const SCENE_MAX: i32 = (SCENE_SIZE - 2) * LOCAL_TILE_SIZE;

/// A position relative to the loaded scene, 128 units per tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}

impl LocalPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The centre of a scene tile.
    pub fn from_scene(scene_x: i32, scene_y: i32) -> Self {
        Self::new(
            (scene_x << LOCAL_COORD_BITS) + LOCAL_HALF_TILE_SIZE,
            (scene_y << LOCAL_COORD_BITS) + LOCAL_HALF_TILE_SIZE,
        )
    }

    /// The centre of the tile holding a world point, if that tile is loaded.
    pub fn from_world(base: SceneBase, world: WorldPoint) -> Option<Self> {
        let scene_x = world.x - base.x;
        let scene_y = world.y - base.y;
        if !(0..SCENE_SIZE).contains(&scene_x) || !(0..SCENE_SIZE).contains(&scene_y) {
            return None;
        }
        Some(Self::from_scene(scene_x, scene_y))
    }

    pub fn scene_x(&self) -> i32 {
        self.x >> LOCAL_COORD_BITS
    }

    pub fn scene_y(&self) -> i32 {
        self.y >> LOCAL_COORD_BITS
    }

    /// Euclidean distance, truncated to whole local units.
    pub fn distance_to(&self, other: &LocalPoint) -> i32 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt() as i32
    }

    pub fn in_scene_bounds(&self) -> bool {
        (SCENE_MIN..=SCENE_MAX).contains(&self.x) && (SCENE_MIN..=SCENE_MAX).contains(&self.y)
    }
}

/// World tile coordinate of the scene's south-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SceneBase {
    pub x: i32,
    pub y: i32,
}

/// An absolute tile position in the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    pub fn from_local(base: SceneBase, local: LocalPoint, plane: i32) -> Self {
        Self::new(base.x + local.scene_x(), base.y + local.scene_y(), plane)
    }
}

/// Ground height lookups. Heights follow the scene convention: negative
/// is up.
pub trait TileHeights {
    fn tile_height(&self, local: LocalPoint, plane: usize) -> i32;
}

/// Terrain that is level everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatGround;

impl TileHeights for FlatGround {
    fn tile_height(&self, _local: LocalPoint, _plane: usize) -> i32 {
        0
    }
}

const CORNERS: usize = SCENE_SIZE as usize + 1;

/// Per-plane tile corner heights for the loaded scene.
///
/// Tiles flagged as bridges take their height from the plane above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    corners: Vec<i32>,
    bridges: Vec<bool>,
}

impl HeightMap {
    pub fn new() -> Self {
        Self {
            corners: vec![0; MAX_PLANES * CORNERS * CORNERS],
            bridges: vec![false; SCENE_SIZE as usize * SCENE_SIZE as usize],
        }
    }

    fn corner_index(plane: usize, x: usize, y: usize) -> Option<usize> {
        (plane < MAX_PLANES && x < CORNERS && y < CORNERS)
            .then(|| (plane * CORNERS + x) * CORNERS + y)
    }

    fn tile_index(x: i32, y: i32) -> Option<usize> {
        ((0..SCENE_SIZE).contains(&x) && (0..SCENE_SIZE).contains(&y))
            .then(|| x as usize * SCENE_SIZE as usize + y as usize)
    }

    pub fn corner_height(&self, plane: usize, x: usize, y: usize) -> i32 {
        Self::corner_index(plane, x, y)
            .map(|i| self.corners[i])
            .unwrap_or(0)
    }

    /// Set the height of the south-west corner of tile (`x`, `y`).
    /// Out-of-range corners are ignored.
    pub fn set_corner_height(&mut self, plane: usize, x: usize, y: usize, height: i32) {
        if let Some(i) = Self::corner_index(plane, x, y) {
            self.corners[i] = height;
        }
    }

    pub fn set_bridge(&mut self, x: i32, y: i32, bridge: bool) {
        if let Some(i) = Self::tile_index(x, y) {
            self.bridges[i] = bridge;
        }
    }

    pub fn is_bridge(&self, x: i32, y: i32) -> bool {
        Self::tile_index(x, y).is_some_and(|i| self.bridges[i])
    }
}

impl Default for HeightMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TileHeights for HeightMap {
    /// Bilinear interpolation between the four corners of the tile under
    /// `local`. Zero outside the scene.
    fn tile_height(&self, local: LocalPoint, plane: usize) -> i32 {
        let (scene_x, scene_y) = (local.scene_x(), local.scene_y());
        if !(0..SCENE_SIZE).contains(&scene_x) || !(0..SCENE_SIZE).contains(&scene_y) {
            return 0;
        }

        let plane = if plane < MAX_PLANES - 1 && self.is_bridge(scene_x, scene_y) {
            plane + 1
        } else {
            plane
        };

        let (sx, sy) = (scene_x as usize, scene_y as usize);
        let fx = local.x & (LOCAL_TILE_SIZE - 1);
        let fy = local.y & (LOCAL_TILE_SIZE - 1);
        let south = (fx * self.corner_height(plane, sx + 1, sy)
            + (LOCAL_TILE_SIZE - fx) * self.corner_height(plane, sx, sy))
            >> LOCAL_COORD_BITS;
        let north = ((LOCAL_TILE_SIZE - fx) * self.corner_height(plane, sx, sy + 1)
            + fx * self.corner_height(plane, sx + 1, sy + 1))
            >> LOCAL_COORD_BITS;
        ((LOCAL_TILE_SIZE - fy) * south + fy * north) >> LOCAL_COORD_BITS
    }
}
