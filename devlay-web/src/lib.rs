/// devlay web - WASM bindings for overlay geometry
///
/// Lets a browser-side overlay project points, outline tiles and compute
/// model silhouettes. Coordinates cross the boundary as flat `i32` arrays
/// of `[x0, y0, x1, y1, ...]`.

use devlay_core::{
    canvas_tile_poly, compute_silhouette, project, CameraError, CameraState, FlatGround,
    LocalPoint, Model, Polygon, SceneView, Vertex, Viewport,
};
use nalgebra::Point3;
use wasm_bindgen::prelude::*;

/// Straight-down view used until the page positions the camera.
const TOP_DOWN_PITCH: i32 = 512;
const DEFAULT_HEIGHT: i32 = -1000;

#[wasm_bindgen]
pub struct WebOverlay {
    camera: CameraState,
}

impl WebOverlay {
    fn from_viewport(width: i32, height: i32, scale: i32) -> Result<Self, CameraError> {
        let camera = CameraState::new(
            Point3::new(0, 0, DEFAULT_HEIGHT),
            TOP_DOWN_PITCH,
            0,
            scale,
            Viewport::new(width, height),
        )?;
        Ok(Self { camera })
    }

    fn place_camera(
        &mut self,
        position: Point3<i32>,
        pitch: i32,
        yaw: i32,
    ) -> Result<(), CameraError> {
        self.camera = CameraState::new(
            position,
            pitch,
            yaw,
            self.camera.scale(),
            self.camera.viewport(),
        )?;
        Ok(())
    }

    fn outline(
        &self,
        vertices: &[i32],
        orientation: i32,
        local_x: i32,
        local_y: i32,
    ) -> Option<Polygon> {
        let model = model_from_flat(vertices)?;
        compute_silhouette(&model, orientation, local_x, local_y, &self.camera)
    }
}

#[wasm_bindgen]
impl WebOverlay {
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32, scale: i32) -> Result<WebOverlay, JsValue> {
        Self::from_viewport(width, height, scale).map_err(to_js)
    }

    /// Move the camera to `(x, y, z)` looking along `pitch` and `yaw`.
    pub fn set_camera(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        pitch: i32,
        yaw: i32,
    ) -> Result<(), JsValue> {
        self.place_camera(Point3::new(x, y, z), pitch, yaw).map_err(to_js)
    }

    /// Canvas position of a local point, or nothing when it is too close to
    /// or behind the camera.
    pub fn project(&self, x: i32, y: i32, z: i32) -> Option<Vec<i32>> {
        project(&self.camera, x, y, z).map(|p| vec![p.x, p.y])
    }

    /// Corners of the tile under `(local_x, local_y)` on level ground. Empty
    /// when the tile is outside the scene or not visible.
    pub fn tile_polygon(&self, local_x: i32, local_y: i32) -> Vec<i32> {
        let view = SceneView::new(&self.camera, &FlatGround, 0);
        canvas_tile_poly(&view, LocalPoint::new(local_x, local_y))
            .map(flatten)
            .unwrap_or_default()
    }

    /// Hull of a model given as flat `[x, y, z, ...]` vertices. Empty when
    /// the model has no visible outline.
    pub fn silhouette(
        &self,
        vertices: &[i32],
        orientation: i32,
        local_x: i32,
        local_y: i32,
    ) -> Result<Vec<i32>, JsValue> {
        if vertices.len() % 3 != 0 {
            return Err(JsValue::from_str("vertex array length must be a multiple of 3"));
        }
        Ok(self
            .outline(vertices, orientation, local_x, local_y)
            .map(flatten)
            .unwrap_or_default())
    }
}

fn to_js(err: CameraError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn model_from_flat(vertices: &[i32]) -> Option<Model> {
    if vertices.len() % 3 != 0 {
        return None;
    }
    Some(
        vertices
            .chunks_exact(3)
            .map(|v| Vertex::new(v[0], v[1], v[2]))
            .collect::<Vec<_>>()
            .into(),
    )
}

fn flatten(polygon: Polygon) -> Vec<i32> {
    polygon
        .into_points()
        .into_iter()
        .flat_map(|p| [p.x, p.y])
        .collect()
}
