/// Perspective projection from the local scene onto the canvas
use crate::camera::CameraState;
use crate::geometry::{Polygon, ScreenPoint};
use crate::scene::{LocalPoint, TileHeights, LOCAL_HALF_TILE_SIZE};
use crate::trig::{self, FIXED_SHIFT};

/// Points closer to the camera than this, along the view axis, are culled.
pub const MIN_DEPTH: i64 = 50;

/// Project a point in local scene units onto the canvas.
///
/// `x`/`y` are ground-plane coordinates and `z` is height (negative is
/// up). Returns `None` when the point is behind or too close to the camera
/// plane, or lands outside the representable canvas range.
pub fn project(camera: &CameraState, x: i32, y: i32, z: i32) -> Option<ScreenPoint> {
    let eye = camera.position();
    let x = i64::from(x) - i64::from(eye.x);
    let y = i64::from(y) - i64::from(eye.y);
    let z = i64::from(z) - i64::from(eye.z);

    let pitch_sin = i64::from(trig::sine(camera.pitch()));
    let pitch_cos = i64::from(trig::cosine(camera.pitch()));
    let yaw_sin = i64::from(trig::sine(camera.yaw()));
    let yaw_cos = i64::from(trig::cosine(camera.yaw()));

    // Yaw about the vertical axis, then pitch about the camera's x axis.
    let right = (yaw_cos * x + yaw_sin * y) >> FIXED_SHIFT;
    let forward = (yaw_cos * y - yaw_sin * x) >> FIXED_SHIFT;
    let down = (pitch_cos * z - pitch_sin * forward) >> FIXED_SHIFT;
    let depth = (pitch_sin * z + pitch_cos * forward) >> FIXED_SHIFT;

    if depth < MIN_DEPTH {
        return None;
    }

    let viewport = camera.viewport();
    let scale = i64::from(camera.scale());
    let canvas_x = i64::from(viewport.width / 2) + right.checked_mul(scale)? / depth;
    let canvas_y = i64::from(viewport.height / 2) + down.checked_mul(scale)? / depth;

    Some(ScreenPoint::new(
        i32::try_from(canvas_x).ok()?.checked_add(viewport.x_offset)?,
        i32::try_from(canvas_y).ok()?.checked_add(viewport.y_offset)?,
    ))
}

/// Everything needed to place scene-anchored geometry for one frame.
#[derive(Clone, Copy)]
pub struct SceneView<'a> {
    pub camera: &'a CameraState,
    pub heights: &'a dyn TileHeights,
    pub plane: usize,
}

impl<'a> SceneView<'a> {
    pub fn new(camera: &'a CameraState, heights: &'a dyn TileHeights, plane: usize) -> Self {
        Self {
            camera,
            heights,
            plane,
        }
    }
}

/// Project a ground-plane position sitting on the terrain, raised by
/// `z_offset` units.
///
/// Points outside the drawable scene bounds are never projected.
pub fn local_to_canvas(view: &SceneView<'_>, local: LocalPoint, z_offset: i32) -> Option<ScreenPoint> {
    if !local.in_scene_bounds() {
        return None;
    }
    let z = view.heights.tile_height(local, view.plane).checked_sub(z_offset)?;
    project(view.camera, local.x, local.y, z)
}

/// The outline of the tile centred on `local`, or `None` if any corner
/// fails to project.
pub fn canvas_tile_poly(view: &SceneView<'_>, local: LocalPoint) -> Option<Polygon> {
    let h = LOCAL_HALF_TILE_SIZE;
    let corners = [(-h, -h), (-h, h), (h, h), (h, -h)];
    let points = corners
        .iter()
        .map(|&(dx, dy)| local_to_canvas(view, LocalPoint::new(local.x + dx, local.y + dy), 0))
        .collect::<Option<Vec<_>>>()?;
    Some(Polygon::new(points))
}

/// Where to start drawing `text_width` pixels of text so it is centred
/// horizontally `z_offset` units above `local`.
pub fn canvas_text_location(
    view: &SceneView<'_>,
    local: LocalPoint,
    text_width: i32,
    z_offset: i32,
) -> Option<ScreenPoint> {
    let anchor = local_to_canvas(view, local, z_offset)?;
    Some(ScreenPoint::new(anchor.x - text_width / 2, anchor.y))
}

/// Top-left corner for an image (or sprite) of `size` pixels centred
/// `z_offset` units above `local`.
pub fn canvas_image_location(
    view: &SceneView<'_>,
    local: LocalPoint,
    size: (i32, i32),
    z_offset: i32,
) -> Option<ScreenPoint> {
    let anchor = local_to_canvas(view, local, z_offset)?;
    Some(ScreenPoint::new(anchor.x - size.0 / 2, anchor.y - size.1 / 2))
}
