/// devlay core - overlay geometry for a tile-based 3D game client
///
/// Projects local scene coordinates onto the canvas, outlines rotated
/// models with convex hulls, derives per-entity geometry and plans the
/// developer-tools overlay. Everything here is pure: each call works on the
/// camera snapshot and vertex data it is handed.

pub mod actor;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod minimap;
pub mod model_io;
pub mod overlay;
pub mod projection;
pub mod scene;
pub mod silhouette;
pub mod transform;
pub mod trig;

// Re-export commonly used types
pub use actor::{ActorEvent, ActorEvents, ActorObserver, ActorRef, CombatInfo, EntityGeometry};
pub use camera::{CameraState, Viewport};
pub use error::{CameraError, ModelError};
pub use geometry::{Model, Polygon, Rect, ScreenPoint, Vertex};
pub use hull::convex_hull;
pub use minimap::{world_to_minimap, Minimap};
pub use overlay::{plan_overlay, DrawCommand, OverlayScene, OverlayToggles, Rgba, TextMetrics};
pub use projection::{
    canvas_image_location, canvas_text_location, canvas_tile_poly, local_to_canvas, project,
    SceneView,
};
pub use scene::{FlatGround, HeightMap, LocalPoint, SceneBase, TileHeights, WorldPoint};
pub use silhouette::{compute_scene_silhouette, compute_silhouette};
pub use transform::{rotate, rotate_model, Spin};
