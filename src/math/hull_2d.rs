use super::{Point3, TOLERANCE};

/// Computes the 2D convex hull of a point set, ignoring the z coordinate.
///
/// Andrew's monotone chain over the XY projection. Returns indices into
/// `points` in counter-clockwise order, without repeating the first point.
/// Collinear points on hull edges are dropped. Inputs with fewer than 3
/// points (or all collinear) return fewer than 3 indices.
#[must_use]
pub fn convex_hull_indices(points: &[Point3]) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (&points[a], &points[b]);
        pa.x.partial_cmp(&pb.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(pa.y.partial_cmp(&pb.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    let cross = |o: usize, a: usize, b: usize| -> f64 {
        (points[a].x - points[o].x) * (points[b].y - points[o].y)
            - (points[a].y - points[o].y) * (points[b].x - points[o].x)
    };

    let mut lower: Vec<usize> = Vec::new();
    for &i in &order {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], i) <= TOLERANCE
        {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::new();
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], i) <= TOLERANCE
        {
            upper.pop();
        }
        upper.push(i);
    }

    // Endpoints of each chain coincide with the other chain's start.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
