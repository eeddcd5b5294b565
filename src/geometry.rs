//! 3D points and line segments used by the classifiers. Pure math, no
//! knowledge of joints or tracking.

/// Two line endpoints closer than this are considered coincident and
/// produce no usable direction.
const DEGENERATE_EPS: f32 = 1e-5;

/// Denominator threshold below which two lines are treated as parallel.
const PARALLEL_EPS: f32 = 1e-8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: Point3) -> f32 {
        let d = sub(other, *self);
        dot(d, d).sqrt()
    }

    /// Euclidean distance is within `tolerance`.
    pub fn coincides_with(&self, other: Point3, tolerance: f32) -> bool {
        self.distance_to(other) <= tolerance
    }
}

/// A line through two distinct points, also usable as the segment between
/// them.
#[derive(Clone, Copy, Debug)]
pub struct Line3 {
    pub start: Point3,
    pub end: Point3,
}

impl Line3 {
    /// Returns `None` when the endpoints coincide and the line has no
    /// direction.
    pub fn between(start: Point3, end: Point3) -> Option<Line3> {
        if start.distance_to(end) < DEGENERATE_EPS {
            return None;
        }
        Some(Line3 { start, end })
    }

    fn direction(&self) -> Point3 {
        sub(self.end, self.start)
    }

    fn point_at(&self, t: f32) -> Point3 {
        let d = self.direction();
        Point3::new(
            self.start.x + d.x * t,
            self.start.y + d.y * t,
            self.start.z + d.z * t,
        )
    }

    /// Angle between the two lines' direction vectors, in degrees within
    /// [0, 180].
    pub fn angle_to_degrees(&self, other: &Line3) -> f32 {
        let a = self.direction();
        let b = other.direction();
        let cos = dot(a, b) / (dot(a, a).sqrt() * dot(b, b).sqrt());
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Closest point on this line to a closest point on `other`. With
    /// `clamp_to_segments` the parametric solutions are clamped to [0, 1]
    /// so each point lies on its segment.
    pub fn closest_points(&self, other: &Line3, clamp_to_segments: bool) -> (Point3, Point3) {
        let d1 = self.direction();
        let d2 = other.direction();
        let r = sub(self.start, other.start);

        let a = dot(d1, d1);
        let e = dot(d2, d2);
        let b = dot(d1, d2);
        let c = dot(d1, r);
        let f = dot(d2, r);

        let denom = a * e - b * b;
        let mut s = if denom.abs() > PARALLEL_EPS {
            (b * f - c * e) / denom
        } else {
            0.0
        };
        let mut t = (b * s + f) / e;

        if clamp_to_segments {
            s = s.clamp(0.0, 1.0);
            t = ((b * s + f) / e).clamp(0.0, 1.0);
            s = ((b * t - c) / a).clamp(0.0, 1.0);
        }

        (self.point_at(s), other.point_at(t))
    }
}

fn sub(a: Point3, b: Point3) -> Point3 {
    Point3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

fn dot(a: Point3, b: Point3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}
