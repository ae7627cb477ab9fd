use serde::{Deserialize, Serialize};

/// Axis-aligned box, `xmin <= xmax` and `ymin <= ymax`.
///
/// Used for label boxes, the optional bounds box, and rectangular obstacles.
/// Coordinates are plain Cartesian; the engine never interprets them as
/// pixels, tiles, or projected units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Extent {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.xmin += dx;
        self.xmax += dx;
        self.ymin += dy;
        self.ymax += dy;
    }

    pub fn intersects(&self, other: &Extent) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    /// Area of the intersection with `other`, zero when disjoint.
    pub fn intersection_area(&self, other: &Extent) -> f64 {
        let w = (self.xmax.min(other.xmax) - self.xmin.max(other.xmin)).max(0.0);
        let h = (self.ymax.min(other.ymax) - self.ymin.max(other.ymin)).max(0.0);
        w * h
    }

    /// True when `other` lies fully inside this box (edges inclusive).
    pub fn contains_extent(&self, other: &Extent) -> bool {
        other.xmin >= self.xmin
            && other.xmax <= self.xmax
            && other.ymin >= self.ymin
            && other.ymax <= self.ymax
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.xmin.is_finite()
            && self.ymin.is_finite()
            && self.xmax.is_finite()
            && self.ymax.is_finite()
            && self.xmin <= self.xmax
            && self.ymin <= self.ymax
    }
}

/// The fixed point or small circular region a label is attached to.
///
/// `anchors[i]` pairs with `labels[i]`; anchors never move during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// Bounding box of the anchor circle.
    pub fn extent(&self) -> Extent {
        Extent::new(
            self.x - self.radius,
            self.y - self.radius,
            self.x + self.radius,
            self.y + self.radius,
        )
    }

    /// Exact circle-vs-box test: clamp the center onto the box and compare
    /// the residual distance against the radius.
    pub fn intersects_extent(&self, extent: &Extent) -> bool {
        let cx = self.x.clamp(extent.xmin, extent.xmax);
        let cy = self.y.clamp(extent.ymin, extent.ymax);
        let dx = self.x - cx;
        let dy = self.y - cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.radius.is_finite() && self.radius >= 0.0
    }
}

/// A non-anchor map feature labels should avoid covering.
///
/// Every variant exposes a cheap bounding box (`extent`) and an exact
/// intersection test against a label box. Obstacle count is unrelated to the
/// label/anchor count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Obstacle {
    Rect(Extent),
    Circle { x: f64, y: f64, radius: f64 },
    Polygon { points: Vec<(f64, f64)> },
}

impl Obstacle {
    pub fn extent(&self) -> Extent {
        match self {
            Obstacle::Rect(extent) => *extent,
            Obstacle::Circle { x, y, radius } => {
                Extent::new(x - radius, y - radius, x + radius, y + radius)
            }
            Obstacle::Polygon { points } => {
                let mut extent = Extent::new(
                    f64::INFINITY,
                    f64::INFINITY,
                    f64::NEG_INFINITY,
                    f64::NEG_INFINITY,
                );
                for &(x, y) in points {
                    extent.xmin = extent.xmin.min(x);
                    extent.ymin = extent.ymin.min(y);
                    extent.xmax = extent.xmax.max(x);
                    extent.ymax = extent.ymax.max(y);
                }
                extent
            }
        }
    }

    pub fn intersects_extent(&self, extent: &Extent) -> bool {
        match self {
            Obstacle::Rect(rect) => rect.intersects(extent),
            Obstacle::Circle { x, y, radius } => {
                Anchor::new(*x, *y, *radius).intersects_extent(extent)
            }
            Obstacle::Polygon { points } => polygon_intersects_extent(points, extent),
        }
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        match self {
            Obstacle::Rect(rect) => rect.is_well_formed(),
            Obstacle::Circle { x, y, radius } => {
                x.is_finite() && y.is_finite() && radius.is_finite() && *radius >= 0.0
            }
            Obstacle::Polygon { points } => {
                points.len() >= 3 && points.iter().all(|(x, y)| x.is_finite() && y.is_finite())
            }
        }
    }
}

/// Everything one optimization run reads and mutates, as a single aggregate.
///
/// The scheduler takes this by exclusive reference; labels are repositioned in
/// place and the caller's state is the single source of truth once the run
/// returns. No external mutation is permitted while a run is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementState {
    pub labels: Vec<Extent>,
    pub anchors: Vec<Anchor>,
    #[serde(default)]
    pub bounds: Option<Extent>,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

fn polygon_intersects_extent(points: &[(f64, f64)], extent: &Extent) -> bool {
    if points.len() < 3 {
        return false;
    }
    if points.iter().any(|&(x, y)| extent.contains_point(x, y)) {
        return true;
    }
    let corners = [
        (extent.xmin, extent.ymin),
        (extent.xmax, extent.ymin),
        (extent.xmax, extent.ymax),
        (extent.xmin, extent.ymax),
    ];
    if corners
        .iter()
        .any(|&(x, y)| point_in_polygon(points, x, y))
    {
        return true;
    }
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        for j in 0..4 {
            if segments_intersect(a, b, corners[j], corners[(j + 1) % 4]) {
                return true;
            }
        }
    }
    false
}

fn point_in_polygon(points: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn point_on_segment(point: (f64, f64), a: (f64, f64), b: (f64, f64), eps: f64) -> bool {
    point.0 >= a.0.min(b.0) - eps
        && point.0 <= a.0.max(b.0) + eps
        && point.1 >= a.1.min(b.1) - eps
        && point.1 <= a.1.max(b.1) + eps
}

fn segments_intersect(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> bool {
    let eps = 1e-12;
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    let crosses = ((o1 > eps && o2 < -eps) || (o1 < -eps && o2 > eps))
        && ((o3 > eps && o4 < -eps) || (o3 < -eps && o4 > eps));
    if crosses {
        return true;
    }
    if o1.abs() <= eps && point_on_segment(c, a, b, eps) {
        return true;
    }
    if o2.abs() <= eps && point_on_segment(d, a, b, eps) {
        return true;
    }
    if o3.abs() <= eps && point_on_segment(a, c, d, eps) {
        return true;
    }
    if o4.abs() <= eps && point_on_segment(b, c, d, eps) {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_area_disjoint_boxes() {
        let a = Extent::new(0.0, 0.0, 10.0, 10.0);
        let b = Extent::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn intersection_area_partial_overlap() {
        let a = Extent::new(0.0, 0.0, 10.0, 10.0);
        let b = Extent::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.intersection_area(&b), 25.0);
    }

    #[test]
    fn intersection_area_contained_box() {
        let a = Extent::new(0.0, 0.0, 20.0, 20.0);
        let b = Extent::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&b), 25.0);
    }

    #[test]
    fn contains_extent_is_edge_inclusive() {
        let bounds = Extent::new(0.0, 0.0, 10.0, 10.0);
        let touching = Extent::new(0.0, 0.0, 10.0, 4.0);
        let poking_out = Extent::new(0.0, 0.0, 10.1, 4.0);
        assert!(bounds.contains_extent(&touching));
        assert!(!bounds.contains_extent(&poking_out));
    }

    #[test]
    fn anchor_intersects_touching_box() {
        let anchor = Anchor::new(0.0, 0.0, 2.0);
        // Box edge exactly `radius` away from the center.
        let touching = Extent::new(2.0, -1.0, 5.0, 1.0);
        let clear = Extent::new(2.1, -1.0, 5.0, 1.0);
        assert!(anchor.intersects_extent(&touching));
        assert!(!anchor.intersects_extent(&clear));
    }

    #[test]
    fn anchor_misses_box_on_diagonal() {
        // Bounding squares overlap but the circle does not reach the corner.
        let anchor = Anchor::new(0.0, 0.0, 2.0);
        let diagonal = Extent::new(1.8, 1.8, 5.0, 5.0);
        assert!(anchor.extent().intersects(&diagonal));
        assert!(!anchor.intersects_extent(&diagonal));
    }

    #[test]
    fn polygon_obstacle_edge_crossing() {
        // Thin triangle slicing through the box without any vertex inside.
        let obstacle = Obstacle::Polygon {
            points: vec![(-5.0, 5.0), (15.0, 5.0), (5.0, 20.0)],
        };
        let label = Extent::new(0.0, 0.0, 10.0, 10.0);
        assert!(obstacle.intersects_extent(&label));
    }

    #[test]
    fn polygon_obstacle_containing_box() {
        let obstacle = Obstacle::Polygon {
            points: vec![(-10.0, -10.0), (30.0, -10.0), (30.0, 30.0), (-10.0, 30.0)],
        };
        let label = Extent::new(0.0, 0.0, 10.0, 10.0);
        assert!(obstacle.intersects_extent(&label));
    }

    #[test]
    fn polygon_obstacle_clear_of_box() {
        let obstacle = Obstacle::Polygon {
            points: vec![(20.0, 20.0), (30.0, 20.0), (25.0, 30.0)],
        };
        let label = Extent::new(0.0, 0.0, 10.0, 10.0);
        assert!(!obstacle.intersects_extent(&label));
    }

    #[test]
    fn degenerate_extent_rejected() {
        assert!(!Extent::new(5.0, 0.0, 0.0, 4.0).is_well_formed());
        assert!(!Extent::new(0.0, f64::NAN, 10.0, 4.0).is_well_formed());
        assert!(Extent::new(0.0, 0.0, 10.0, 4.0).is_well_formed());
    }
}
