use std::f32::consts::TAU;

use web_sys::{WebGlRenderingContext as GL, WebGlUniformLocation};

use crate::error::AppError;

use super::gl::{set_f32, set_mat4, set_vec3, Geometry, Program, Surface};
use super::math::{Camera, Mat4, Vec3};
use super::Scene;

const VERTEX: &str = r#"
attribute vec3 aPosition;
attribute vec3 aNormal;
attribute float aAround;

uniform mat4 uProjection;
uniform mat4 uView;
uniform mat4 uModel;
uniform float uTime;
uniform float uPointScale;

varying float vAround;
varying vec3 vNormal;
varying vec3 vWorld;

void main() {
    vAround = aAround;
    vec3 pos = aPosition + aNormal * sin(uTime * 2.0 + aPosition.x * 2.0) * 0.1;
    vec4 world = uModel * vec4(pos, 1.0);
    vWorld = world.xyz;
    vNormal = normalize((uModel * vec4(aNormal, 0.0)).xyz);
    gl_Position = uProjection * uView * world;
    gl_PointSize = 3.0 * uPointScale;
}
"#;

const FRAGMENT: &str = r#"
precision mediump float;

uniform float uTime;
uniform vec3 uLight;

varying float vAround;
varying vec3 vNormal;
varying vec3 vWorld;

void main() {
    vec2 c = gl_PointCoord - 0.5;
    if (dot(c, c) > 0.25) discard;

    vec3 base = mix(vec3(0.3, 0.6, 1.0), vec3(0.1, 0.3, 0.6), vAround + sin(uTime) * 0.2);
    float rim = pow(1.0 - max(dot(vNormal, vec3(0.0, 0.0, 1.0)), 0.0), 2.0);
    vec3 color = mix(base, vec3(1.0), rim * 0.5);

    float diffuse = max(dot(vNormal, normalize(uLight - vWorld)), 0.0);
    color += vec3(0.25, 0.41, 0.88) * diffuse * 0.5 + vec3(0.25) * 0.2;
    gl_FragColor = vec4(color, 1.0);
}
"#;

const RADIUS: f32 = 1.0;
const TUBE: f32 = 0.2;
const RADIAL_SEGMENTS: usize = 24;
const TUBULAR_SEGMENTS: usize = 96;
const SPIN_PER_FRAME: f32 = 0.02;

/// Point samples over a torus surface lying in the xy plane.
#[derive(Debug, Default, PartialEq)]
pub struct TorusCloud {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    /// 0..1 position around the main ring.
    pub around: Vec<f32>,
}

pub fn torus_cloud(radius: f32, tube: f32, radial: usize, tubular: usize) -> TorusCloud {
    let mut cloud = TorusCloud::default();
    for j in 0..radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let point = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            point.push_to(&mut cloud.positions);
            (point - center).normalize().push_to(&mut cloud.normals);
            cloud.around.push(i as f32 / tubular as f32);
        }
    }
    cloud
}

/// Where the orbiting light sits `elapsed` seconds in.
pub fn light_position(elapsed: f32) -> Vec3 {
    Vec3::new(elapsed.sin() * 3.0, elapsed.cos() * 3.0, 4.0)
}

/// The spinning ring shown while something is loading.
pub struct LoadingRing {
    program: Program,
    ring: Geometry,
    camera: Camera,
    spin: f32,
    projection: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    point_scale: Option<WebGlUniformLocation>,
    light: Option<WebGlUniformLocation>,
    // Dropped last so buffers and programs are deleted on a live context.
    surface: Surface,
}

impl LoadingRing {
    pub fn new(surface: Surface) -> Result<Self, AppError> {
        let gl = surface.gl();
        let program = Program::new(gl, VERTEX, FRAGMENT)?;
        let cloud = torus_cloud(RADIUS, TUBE, RADIAL_SEGMENTS, TUBULAR_SEGMENTS);
        let ring = Geometry::new(GL::POINTS)
            .with_attribute(gl, &program, "aPosition", &cloud.positions, 3)?
            .with_attribute(gl, &program, "aNormal", &cloud.normals, 3)?
            .with_attribute(gl, &program, "aAround", &cloud.around, 1)?;

        Ok(Self {
            projection: program.uniform("uProjection"),
            view: program.uniform("uView"),
            model: program.uniform("uModel"),
            time: program.uniform("uTime"),
            point_scale: program.uniform("uPointScale"),
            light: program.uniform("uLight"),
            camera: Camera::new(75.0, Vec3::new(0.0, 0.0, 5.0)),
            spin: 0.0,
            surface,
            program,
            ring,
        })
    }
}

impl Scene for LoadingRing {
    fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.camera.set_viewport(width, height);
    }

    fn render(&mut self, elapsed: f32, _dt: f32) {
        self.spin += SPIN_PER_FRAME;
        let model = Mat4::rotation_x((elapsed * 0.5).sin() * 0.5) * Mat4::rotation_y(self.spin);

        let gl = self.surface.gl();
        self.surface.clear();
        self.program.activate();
        set_mat4(gl, &self.projection, &self.camera.projection());
        set_mat4(gl, &self.view, &self.camera.view());
        set_mat4(gl, &self.model, &model);
        set_f32(gl, &self.time, elapsed);
        set_f32(gl, &self.point_scale, self.surface.pixel_ratio());
        set_vec3(gl, &self.light, light_position(elapsed));
        self.ring.draw(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn torus_has_one_sample_per_segment_pair() {
        let cloud = torus_cloud(1.0, 0.2, 8, 16);
        assert_eq!(cloud.positions.len(), 8 * 16 * 3);
        assert_eq!(cloud.normals.len(), cloud.positions.len());
        assert_eq!(cloud.around.len(), 8 * 16);
    }

    #[test]
    fn torus_points_sit_on_the_tube() {
        let cloud = torus_cloud(1.0, 0.2, 8, 16);
        for point in cloud.positions.chunks(3) {
            let p = Vec3::new(point[0], point[1], point[2]);
            let ring = (p.x * p.x + p.y * p.y).sqrt();
            let from_center = ((ring - 1.0).powi(2) + p.z * p.z).sqrt();
            assert!((from_center - 0.2).abs() < 1e-4);
        }
    }

    #[test]
    fn normals_are_unit_length() {
        let cloud = torus_cloud(1.0, 0.2, 6, 12);
        for n in cloud.normals.chunks(3) {
            let len = Vec3::new(n[0], n[1], n[2]).length();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn light_orbits_at_fixed_depth() {
        let start = light_position(0.0);
        assert_eq!(start, Vec3::new(0.0, 3.0, 4.0));
        let later = light_position(1.3);
        assert!(((later.x * later.x + later.y * later.y).sqrt() - 3.0).abs() < 1e-4);
        assert_eq!(later.z, 4.0);
    }
}
