//! Small linear-algebra kit for the decorative scenes. Matrices are
//! column-major so they can be handed to WebGL as-is.

use std::f32::consts::PI;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self * (1.0 / len)
        }
    }

    pub fn push_to(self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[self.x, self.y, self.z]);
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fov_y_degrees.to_radians() / 2.0).tan();
        let nf = 1.0 / (near - far);
        let mut m = [0.0; 16];
        m[0] = f / aspect;
        m[5] = f;
        m[10] = (far + near) * nf;
        m[11] = -1.0;
        m[14] = 2.0 * far * near * nf;
        Mat4(m)
    }

    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        Mat4([
            x.x, y.x, z.x, 0.0, //
            x.y, y.y, z.y, 0.0, //
            x.z, y.z, z.z, 0.0, //
            -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
        ])
    }

    #[cfg(test)]
    pub fn translation(v: Vec3) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        m.0[12] = v.x;
        m.0[13] = v.y;
        m.0[14] = v.z;
        m
    }

    pub fn rotation_x(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        Mat4([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn rotation_y(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        Mat4([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[cfg(test)]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.0;
        let x = m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12];
        let y = m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13];
        let z = m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14];
        let w = m[3] * p.x + m[7] * p.y + m[11] * p.z + m[15];
        if w == 0.0 || w == 1.0 {
            Vec3::new(x, y, z)
        } else {
            Vec3::new(x / w, y / w, z / w)
        }
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        let (a, b) = (&self.0, &rhs.0);
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
            }
        }
        Mat4(out)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn new(fov: f32, position: Vec3) -> Self {
        Self {
            fov,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position,
            target: Vec3::ZERO,
        }
    }

    /// Degenerate sizes (collapsed containers) keep the previous aspect.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, Vec3::UP)
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Frame-rate independent exponential approach of `current` toward `target`.
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    lerp(current, target, 1.0 - (-rate * dt).exp())
}

/// A pointer position eased toward wherever the pointer last was.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothedPointer {
    pub x: f32,
    pub y: f32,
    target: (f32, f32),
    rate: f32,
    engaged: bool,
}

impl SmoothedPointer {
    pub fn new(rate: f32) -> Self {
        Self {
            rate,
            ..Self::default()
        }
    }

    pub fn aim(&mut self, x: f32, y: f32) {
        self.target = (x, y);
        self.engaged = true;
    }

    /// True once the pointer has moved over the surface at least once.
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    pub fn step(&mut self, dt: f32) -> (f32, f32) {
        self.x = damp(self.x, self.target.0, self.rate, dt);
        self.y = damp(self.y, self.target.1, self.rate, dt);
        (self.x, self.y)
    }
}

/// Uniform Catmull-Rom spline through `points`, open at both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct CatmullRom {
    points: Vec<Vec3>,
}

impl CatmullRom {
    pub fn new(points: Vec<Vec3>) -> Self {
        assert!(points.len() >= 2, "a curve needs at least two points");
        Self { points }
    }

    /// Point at `t` in `[0, 1]` over the whole curve.
    pub fn point(&self, t: f32) -> Vec3 {
        let pts = &self.points;
        let l = pts.len();
        let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
        let mut index = p.floor() as usize;
        let mut weight = p - index as f32;
        if index >= l - 1 {
            index = l - 2;
            weight = 1.0;
        }

        let p0 = if index > 0 {
            pts[index - 1]
        } else {
            pts[0] * 2.0 - pts[1]
        };
        let p1 = pts[index];
        let p2 = pts[index + 1];
        let p3 = if index + 2 < l {
            pts[index + 2]
        } else {
            pts[l - 1] * 2.0 - pts[l - 2]
        };

        let t2 = weight * weight;
        let t3 = t2 * weight;
        (p1 * 2.0
            + (p2 - p0) * weight
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
            + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
            * 0.5
    }

    /// `divisions + 1` evenly spaced samples including both ends.
    pub fn sample(&self, divisions: usize) -> Vec<Vec3> {
        (0..=divisions)
            .map(|i| self.point(i as f32 / divisions as f32))
            .collect()
    }
}

/// Evenly spread points on a sphere surface.
pub fn fibonacci_sphere(count: usize, radius: f32) -> Vec<Vec3> {
    let golden = PI * (3.0 - 5.0_f32.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 + 0.5) / count as f32 * 2.0;
            let ring = (1.0 - y * y).sqrt();
            let theta = golden * i as f32;
            Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius
        })
        .collect()
}

/// Deterministic scatter in `[0, 1)` for seeding particles.
pub fn hash01(seed: u32) -> f32 {
    let mut x = seed;
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    (x >> 8) as f32 / (1u32 << 24) as f32
}

/// Client coordinates to normalized device coordinates of a rect, y up.
pub fn to_ndc(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client_x - left) / width * 2.0 - 1.0;
    let y = -((client_y - top) / height) * 2.0 + 1.0;
    (x as f32, y as f32)
}

/// How far an element has travelled through the viewport: 0 when its top
/// meets the viewport bottom, 1 when its bottom leaves the viewport top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn close_vec(a: Vec3, b: Vec3) -> bool {
        close(a.x, b.x) && close(a.y, b.y) && close(a.z, b.z)
    }

    #[test]
    fn perspective_maps_near_plane_to_minus_one() {
        let m = Mat4::perspective(75.0, 1.5, 0.1, 1000.0);
        let p = m.transform_point(Vec3::new(0.0, 0.0, -0.1));
        assert!(close(p.z, -1.0));
        let p = m.transform_point(Vec3::new(0.0, 0.0, -1000.0));
        assert!(close(p.z, 1.0));
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(2.0, 1.0, 15.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
        assert!(close_vec(view.transform_point(eye), Vec3::ZERO));
        // The target ends up straight ahead, down -z.
        let target = view.transform_point(Vec3::ZERO);
        assert!(close(target.x, 0.0) && close(target.y, 0.0));
        assert!(target.z < 0.0);
    }

    #[test]
    fn rotation_y_quarter_turn() {
        let m = Mat4::rotation_y(PI / 2.0);
        assert!(close_vec(m.transform_point(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn multiply_composes_right_to_left() {
        let m = Mat4::translation(Vec3::new(1.0, 0.0, 0.0)) * Mat4::rotation_y(PI / 2.0);
        let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(close_vec(p, Vec3::new(1.0, 0.0, -1.0)));
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn camera_aspect_follows_viewport() {
        let mut camera = Camera::new(75.0, Vec3::new(0.0, 0.0, 5.0));
        camera.set_viewport(1600.0, 900.0);
        assert!(close(camera.aspect, 16.0 / 9.0));
        camera.set_viewport(800.0, 0.0);
        assert!(close(camera.aspect, 16.0 / 9.0));
    }

    #[test]
    fn damp_converges_without_overshoot() {
        let mut value = 0.0;
        for _ in 0..240 {
            value = damp(value, 1.0, 4.0, 1.0 / 60.0);
            assert!(value <= 1.0);
        }
        assert!(close(value, 1.0) || (1.0 - value) < 1e-3);
        assert_eq!(damp(0.3, 1.0, 4.0, 0.0), 0.3);
    }

    #[test]
    fn pointer_engages_on_first_aim() {
        let mut pointer = SmoothedPointer::new(5.0);
        assert!(!pointer.engaged());
        pointer.aim(1.0, -1.0);
        assert!(pointer.engaged());
        let (x, y) = pointer.step(0.1);
        assert!(x > 0.0 && x < 1.0);
        assert!(y < 0.0 && y > -1.0);
    }

    #[test]
    fn curve_passes_through_ends() {
        let points = vec![
            Vec3::new(-10.0, -5.0, 0.0),
            Vec3::new(-5.0, 5.0, -5.0),
            Vec3::new(0.0, -2.0, -8.0),
            Vec3::new(5.0, 3.0, -5.0),
            Vec3::new(10.0, -4.0, 0.0),
        ];
        let curve = CatmullRom::new(points.clone());
        assert!(close_vec(curve.point(0.0), points[0]));
        assert!(close_vec(curve.point(1.0), points[4]));
        assert!(close_vec(curve.point(0.5), points[2]));
        assert_eq!(curve.sample(50).len(), 51);
    }

    #[test]
    fn sphere_points_sit_on_radius() {
        let points = fibonacci_sphere(500, 2.5);
        assert_eq!(points.len(), 500);
        assert!(points.iter().all(|p| close(p.length(), 2.5)));
    }

    #[test]
    fn hash_stays_in_unit_range() {
        let values: Vec<f32> = (0..1000).map(hash01).collect();
        assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
        assert_eq!(hash01(42), hash01(42));
        assert_ne!(hash01(1), hash01(2));
    }

    #[test]
    fn ndc_corners() {
        assert_eq!(to_ndc(100.0, 50.0, 100.0, 50.0, 200.0, 100.0), (-1.0, 1.0));
        assert_eq!(to_ndc(300.0, 150.0, 100.0, 50.0, 200.0, 100.0), (1.0, -1.0));
        assert_eq!(to_ndc(5.0, 5.0, 0.0, 0.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn scroll_progress_clamps() {
        assert_eq!(scroll_progress(1000.0, 500.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-600.0, 500.0, 800.0), 1.0);
        assert!((scroll_progress(150.0, 500.0, 800.0) - 0.5).abs() < 1e-9);
    }
}
