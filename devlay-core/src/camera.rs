/// Camera pose and viewport snapshots
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;
use crate::geometry::ScreenPoint;
use crate::trig;

/// The rectangle of the canvas the 3D scene is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default)]
    pub x_offset: i32,
    #[serde(default)]
    pub y_offset: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            x_offset: 0,
            y_offset: 0,
            width,
            height,
        }
    }

    pub fn with_offset(self, x_offset: i32, y_offset: i32) -> Self {
        Self {
            x_offset,
            y_offset,
            ..self
        }
    }

    /// The canvas point the camera looks through.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(
            self.x_offset + self.width / 2,
            self.y_offset + self.height / 2,
        )
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x_offset
            && point.y >= self.y_offset
            && point.x < self.x_offset + self.width
            && point.y < self.y_offset + self.height
    }
}

/// One frame's camera pose.
///
/// Position is in local scene units with `z` as height (negative is up).
/// Pitch and yaw are in 2048-unit circle angles; `scale` is the zoom
/// factor applied before the perspective divide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraState {
    position: Point3<i32>,
    pitch: i32,
    yaw: i32,
    scale: i32,
    viewport: Viewport,
}

impl CameraState {
    pub fn new(
        position: Point3<i32>,
        pitch: i32,
        yaw: i32,
        scale: i32,
        viewport: Viewport,
    ) -> Result<Self, CameraError> {
        if viewport.width <= 0 || viewport.height <= 0 {
            return Err(CameraError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if scale <= 0 {
            return Err(CameraError::InvalidScale(scale));
        }
        let camera = Self {
            position,
            pitch: trig::wrap_angle(pitch),
            yaw: trig::wrap_angle(yaw),
            scale,
            viewport,
        };
        tracing::debug!(?position, pitch, yaw, scale, "camera snapshot");
        Ok(camera)
    }

    /// A camera `distance` units away from `focus`, looking at it along the
    /// direction given by `pitch` and `yaw`.
    pub fn orbit(
        focus: Point3<i32>,
        distance: i32,
        pitch: i32,
        yaw: i32,
        scale: i32,
        viewport: Viewport,
    ) -> Result<Self, CameraError> {
        let (pitch_rad, yaw_rad) = (trig::to_radians(pitch), trig::to_radians(yaw));
        let distance = f64::from(distance);
        let forward_x = -yaw_rad.sin() * pitch_rad.cos();
        let forward_y = yaw_rad.cos() * pitch_rad.cos();
        let forward_z = pitch_rad.sin();
        let position = Point3::new(
            focus.x - (distance * forward_x).round() as i32,
            focus.y - (distance * forward_y).round() as i32,
            focus.z - (distance * forward_z).round() as i32,
        );
        Self::new(position, pitch, yaw, scale, viewport)
    }

    pub fn position(&self) -> Point3<i32> {
        self.position
    }

    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    pub fn yaw(&self) -> i32 {
        self.yaw
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
