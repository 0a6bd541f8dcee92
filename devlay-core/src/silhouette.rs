/// On-screen outlines of rotated models
use crate::camera::CameraState;
use crate::geometry::{Model, Polygon, ScreenPoint, Vertex};
use crate::hull::convex_hull;
use crate::projection::{local_to_canvas, project, SceneView};
use crate::scene::LocalPoint;
use crate::transform::rotate;

/// The convex outline of `model` facing `orientation` and standing at
/// (`local_x`, `local_y`) on level ground.
///
/// Vertex `x`/`z` offset the entity position on the ground plane and `y`
/// is used directly as height. Vertices whose offset position overflows
/// are left out of the hull.
pub fn compute_silhouette(
    model: &Model,
    orientation: i32,
    local_x: i32,
    local_y: i32,
    camera: &CameraState,
) -> Option<Polygon> {
    hull_of(model, orientation, |v| {
        let x = local_x.checked_add(v.x())?;
        let y = local_y.checked_add(v.z())?;
        project(camera, x, y, v.y())
    })
}

/// Like [`compute_silhouette`], but every vertex sits on the sampled
/// terrain and must fall inside the drawable scene.
pub fn compute_scene_silhouette(
    model: &Model,
    orientation: i32,
    local: LocalPoint,
    view: &SceneView<'_>,
) -> Option<Polygon> {
    hull_of(model, orientation, |v| {
        let ground = LocalPoint::new(local.x.checked_add(v.x())?, local.y.checked_add(v.z())?);
        local_to_canvas(view, ground, v.y().checked_neg()?)
    })
}

fn hull_of<F>(model: &Model, orientation: i32, project_vertex: F) -> Option<Polygon>
where
    F: Fn(Vertex) -> Option<ScreenPoint>,
{
    if model.is_empty() {
        return None;
    }

    let points: Vec<ScreenPoint> = model
        .vertices
        .iter()
        .map(|&v| rotate(v, orientation))
        .filter_map(project_vertex)
        .collect();

    if points.is_empty() {
        tracing::trace!(vertices = model.len(), "model fully culled");
        return None;
    }
    convex_hull(&points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Viewport;
    use crate::scene::{FlatGround, HeightMap};
    use nalgebra::Point3;

    fn overhead() -> CameraState {
        CameraState::new(Point3::new(0, 0, -1000), 512, 0, 1000, Viewport::new(800, 600)).unwrap()
    }

    fn near(p: ScreenPoint, x: f64, y: f64, tolerance: f64) -> bool {
        (f64::from(p.x) - x).abs() <= tolerance && (f64::from(p.y) - y).abs() <= tolerance
    }

    #[test]
    fn test_cube_from_above_is_its_top_face() {
        let outline = compute_silhouette(&Model::cube(10), 0, 0, 0, &overhead()).unwrap();
        assert_eq!(outline.len(), 4);
        assert!(outline.is_convex());
        // Top face at depth 990 spans 10 * 1000 / 990 pixels either side.
        let r = 10.0 * 1000.0 / 990.0;
        for (x, y) in [(400.0 - r, 300.0 - r), (400.0 + r, 300.0 - r), (400.0 + r, 300.0 + r), (400.0 - r, 300.0 + r)] {
            assert!(
                outline.points().iter().any(|&p| near(p, x, y, 1.0)),
                "no corner near ({x}, {y}) in {outline:?}"
            );
        }
    }

    #[test]
    fn test_cube_turned_eighth_is_a_diamond() {
        let outline = compute_silhouette(&Model::cube(10), 256, 0, 0, &overhead()).unwrap();
        assert_eq!(outline.len(), 4);
        assert!(outline.is_convex());
        assert!(outline.signed_area2() > 0);
        let r = 10.0 * std::f64::consts::SQRT_2 * 1000.0 / 990.0;
        for (x, y) in [(400.0 + r, 300.0), (400.0, 300.0 + r), (400.0 - r, 300.0), (400.0, 300.0 - r)] {
            assert!(
                outline.points().iter().any(|&p| near(p, x, y, 1.5)),
                "no corner near ({x}, {y}) in {outline:?}"
            );
        }
    }

    #[test]
    fn test_entity_position_offsets_outline() {
        let camera = overhead();
        let at_origin = compute_silhouette(&Model::cube(10), 0, 0, 0, &camera).unwrap();
        let moved = compute_silhouette(&Model::cube(10), 0, 100, 0, &camera).unwrap();
        for (a, b) in at_origin.points().iter().zip(moved.points()) {
            assert!((b.x - a.x - 101).abs() <= 1 && a.y == b.y, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn test_overflowing_vertex_is_left_out() {
        let camera = overhead();
        let mut model = Model::cube(10);
        model.add_vertex(Vertex::new(i32::MAX, 0, 0));
        assert_eq!(
            compute_silhouette(&model, 0, 100, 0, &camera),
            compute_silhouette(&Model::cube(10), 0, 100, 0, &camera)
        );

        let mut far = Model::new();
        far.add_vertex(Vertex::new(i32::MAX, 0, 0));
        far.add_vertex(Vertex::new(0, 0, i32::MAX));
        far.add_vertex(Vertex::new(i32::MAX, 0, i32::MAX));
        assert_eq!(compute_silhouette(&far, 0, 3200, 3200, &camera), None);
    }

    #[test]
    fn test_empty_model_is_absent() {
        assert_eq!(compute_silhouette(&Model::new(), 0, 0, 0, &overhead()), None);
    }

    #[test]
    fn test_model_behind_camera_is_absent() {
        let camera =
            CameraState::new(Point3::new(0, 0, -100), 0, 0, 512, Viewport::new(512, 334)).unwrap();
        assert_eq!(compute_silhouette(&Model::cube(10), 0, 0, -600, &camera), None);
    }

    #[test]
    fn test_flat_model_seen_edge_on_is_absent() {
        // A single vertical line of vertices collapses to a segment.
        let pole = Model::from_vertices(vec![
            Vertex::new(0, 0, 0),
            Vertex::new(0, -50, 0),
            Vertex::new(0, -100, 0),
        ]);
        assert_eq!(compute_silhouette(&pole, 0, 0, 0, &overhead()), None);
    }

    #[test]
    fn test_scene_silhouette_matches_flat_projection() {
        let camera =
            CameraState::new(Point3::new(3000, 3000, -1000), 512, 0, 1000, Viewport::new(800, 600))
                .unwrap();
        let view = SceneView::new(&camera, &FlatGround, 0);
        let cube = Model::cube(40);
        let local = LocalPoint::new(3000, 3000);
        assert_eq!(
            compute_scene_silhouette(&cube, 300, local, &view),
            compute_silhouette(&cube, 300, local.x, local.y, &camera)
        );
    }

    #[test]
    fn test_scene_silhouette_skips_unnegatable_height() {
        let camera =
            CameraState::new(Point3::new(3000, 3000, -1000), 512, 0, 1000, Viewport::new(800, 600))
                .unwrap();
        let view = SceneView::new(&camera, &FlatGround, 0);
        let local = LocalPoint::new(3000, 3000);
        let mut model = Model::cube(40);
        model.add_vertex(Vertex::new(0, i32::MIN, 0));
        model.add_vertex(Vertex::new(i32::MAX, 0, 0));
        assert_eq!(
            compute_scene_silhouette(&model, 0, local, &view),
            compute_scene_silhouette(&Model::cube(40), 0, local, &view)
        );
    }

    #[test]
    fn test_scene_silhouette_rides_terrain() {
        let camera =
            CameraState::new(Point3::new(3000, 2000, -400), 0, 0, 512, Viewport::new(512, 334))
                .unwrap();
        let mut hill = HeightMap::new();
        for x in 20..28 {
            for y in 20..28 {
                hill.set_corner_height(0, x, y, -150);
            }
        }
        let local = LocalPoint::new(3000, 3000);
        let cube = Model::cube(40);
        let flat = compute_scene_silhouette(&cube, 0, local, &SceneView::new(&camera, &FlatGround, 0))
            .unwrap();
        let raised = compute_scene_silhouette(&cube, 0, local, &SceneView::new(&camera, &hill, 0))
            .unwrap();
        let top = |p: &Polygon| p.points().iter().map(|q| q.y).min().unwrap();
        assert!(top(&raised) < top(&flat));
    }

    #[test]
    fn test_scene_silhouette_outside_scene_is_absent() {
        let view_camera = overhead();
        let view = SceneView::new(&view_camera, &FlatGround, 0);
        assert_eq!(
            compute_scene_silhouette(&Model::cube(10), 0, LocalPoint::new(0, 0), &view),
            None
        );
    }
}
