/// Convex hulls of projected points by gift wrapping (Jarvis march)
use crate::geometry::{cross, distance_squared, Polygon, ScreenPoint};

/// The convex hull of a set of canvas points.
///
/// Duplicate points are ignored and the result does not depend on input
/// order. The walk starts at the leftmost point (lowest `y` on ties) and
/// always takes the most clockwise candidate; among exactly collinear
/// candidates the farthest wins, so hull edges never carry intermediate
/// points. The polygon has positive [`Polygon::signed_area2`].
///
/// Returns `None` for fewer than three distinct points or when every point
/// lies on one line.
pub fn convex_hull(points: &[ScreenPoint]) -> Option<Polygon> {
    let mut points = points.to_vec();
    points.sort_unstable_by_key(|p| (p.x, p.y));
    points.dedup();
    if points.len() < 3 {
        return None;
    }

    let start = points[0];
    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(current);
        // A correct walk can never visit more points than exist.
        if hull.len() > points.len() {
            tracing::warn!(points = points.len(), "hull walk did not close");
            return None;
        }

        let mut next: Option<ScreenPoint> = None;
        for &candidate in &points {
            if candidate == current {
                continue;
            }
            next = match next {
                None => Some(candidate),
                Some(best) => {
                    let turn = cross(current, best, candidate);
                    let farther = distance_squared(current, candidate)
                        > distance_squared(current, best);
                    if turn < 0 || (turn == 0 && farther) {
                        Some(candidate)
                    } else {
                        Some(best)
                    }
                }
            };
        }

        current = next?;
        if current == start {
            break;
        }
    }

    if hull.len() < 3 {
        return None;
    }
    Some(Polygon::new(hull))
}
