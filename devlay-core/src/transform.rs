/// Model rotation by entity orientation
use crate::geometry::{Model, Vertex};
use crate::trig::{self, FIXED_SHIFT};

/// Rotate a vertex about the model's vertical axis.
///
/// Only the ground-plane coordinates (`x`, `z`) change; height is kept.
/// Orientation is in 2048-unit circle angles and wraps.
pub fn rotate(vertex: Vertex, orientation: i32) -> Vertex {
    let orientation = trig::wrap_angle(orientation);
    if orientation == 0 {
        return vertex;
    }

    let sin = i64::from(trig::sine(orientation));
    let cos = i64::from(trig::cosine(orientation));
    let x = i64::from(vertex.x());
    let z = i64::from(vertex.z());
    Vertex::new(
        saturate((x * cos + z * sin) >> FIXED_SHIFT),
        vertex.y(),
        saturate((z * cos - x * sin) >> FIXED_SHIFT),
    )
}

/// Clamp into `i32`. Turning a point near the limits can carry it past them.
fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// A fresh model with every vertex rotated.
pub fn rotate_model(model: &Model, orientation: i32) -> Model {
    model
        .vertices
        .iter()
        .map(|&v| rotate(v, orientation))
        .collect::<Vec<_>>()
        .into()
}

/// An entity's facing that turns over time, wrapping at a full circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spin {
    pub orientation: i32,
}

impl Spin {
    pub fn new(orientation: i32) -> Self {
        Self {
            orientation: trig::wrap_angle(orientation),
        }
    }

    /// Turn by `delta` angle units.
    pub fn turn(&mut self, delta: i32) {
        self.orientation = trig::wrap_angle(self.orientation.wrapping_add(delta));
    }
}
