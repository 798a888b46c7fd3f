use web_sys::{WebGlRenderingContext as GL, WebGlUniformLocation};

use crate::error::AppError;

use super::gl::{set_f32, set_mat4, Geometry, Program, Surface};
use super::math::{fibonacci_sphere, hash01, Camera, Mat4, SmoothedPointer, Vec3};
use super::Scene;

const VERTEX: &str = r#"
attribute vec3 aPosition;
attribute float aSeed;
attribute float aHalo;

uniform mat4 uProjection;
uniform mat4 uView;
uniform mat4 uModel;
uniform float uTime;
uniform float uPointScale;

varying float vSeed;
varying float vHalo;
varying float vDepth;

void main() {
    vec3 pos = aPosition * (1.0 + aHalo * 0.08 * sin(uTime * 0.6 + aSeed * 6.2831));
    vec4 view = uView * uModel * vec4(pos, 1.0);
    vDepth = clamp((-view.z - 3.0) / 6.0, 0.0, 1.0);
    vSeed = aSeed;
    vHalo = aHalo;
    float twinkle = 0.75 + 0.25 * sin(uTime * 2.0 + aSeed * 40.0);
    gl_PointSize = mix(2.5, 1.5, aHalo) * twinkle * uPointScale * (1.6 - vDepth);
    gl_Position = uProjection * view;
}
"#;

const FRAGMENT: &str = r#"
precision mediump float;

varying float vSeed;
varying float vHalo;
varying float vDepth;

void main() {
    float d = length(gl_PointCoord - 0.5);
    if (d > 0.5) discard;
    float glow = smoothstep(0.5, 0.0, d);
    vec3 color = mix(vec3(0.38, 0.55, 1.0), vec3(0.66, 0.45, 1.0), vSeed);
    float alpha = glow * mix(0.9, 0.45, vHalo) * (1.0 - vDepth * 0.6);
    gl_FragColor = vec4(color, alpha);
}
"#;

const SPHERE_POINTS: usize = 1400;
const HALO_POINTS: usize = 500;
const SPHERE_RADIUS: f32 = 2.0;
const HALO_INNER: f32 = 2.6;
const HALO_OUTER: f32 = 4.0;
const POINTER_RATE: f32 = 3.0;

#[derive(Debug, Default, PartialEq)]
pub struct GlobeCloud {
    pub positions: Vec<f32>,
    pub seeds: Vec<f32>,
    pub halo: Vec<f32>,
}

/// A dense particle sphere wrapped in a looser halo shell.
pub fn globe_cloud(sphere_points: usize, halo_points: usize) -> GlobeCloud {
    let mut cloud = GlobeCloud::default();
    for (i, point) in fibonacci_sphere(sphere_points, SPHERE_RADIUS).into_iter().enumerate() {
        point.push_to(&mut cloud.positions);
        cloud.seeds.push(hash01(i as u32));
        cloud.halo.push(0.0);
    }
    for (i, direction) in fibonacci_sphere(halo_points, 1.0).into_iter().enumerate() {
        let seed = hash01((sphere_points + i) as u32);
        let radius = HALO_INNER + (HALO_OUTER - HALO_INNER) * hash01(i as u32 ^ 0x9e37_79b9);
        (direction * radius).push_to(&mut cloud.positions);
        cloud.seeds.push(seed);
        cloud.halo.push(1.0);
    }
    cloud
}

/// Slow spin around y plus a tilt toward the pointer.
pub fn globe_model(elapsed: f32, pointer: (f32, f32)) -> Mat4 {
    Mat4::rotation_x(0.3 - pointer.1 * 0.35) * Mat4::rotation_y(elapsed * 0.15 + pointer.0 * 0.6)
}

/// Particle globe behind the hero heading.
pub struct HeroGlobe {
    program: Program,
    cloud: Geometry,
    camera: Camera,
    pointer: SmoothedPointer,
    projection: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    point_scale: Option<WebGlUniformLocation>,
    surface: Surface,
}

impl HeroGlobe {
    pub fn new(surface: Surface) -> Result<Self, AppError> {
        let gl = surface.gl();
        let program = Program::new(gl, VERTEX, FRAGMENT)?;
        let data = globe_cloud(SPHERE_POINTS, HALO_POINTS);
        let cloud = Geometry::new(GL::POINTS)
            .with_attribute(gl, &program, "aPosition", &data.positions, 3)?
            .with_attribute(gl, &program, "aSeed", &data.seeds, 1)?
            .with_attribute(gl, &program, "aHalo", &data.halo, 1)?;

        Ok(Self {
            projection: program.uniform("uProjection"),
            view: program.uniform("uView"),
            model: program.uniform("uModel"),
            time: program.uniform("uTime"),
            point_scale: program.uniform("uPointScale"),
            camera: Camera::new(60.0, Vec3::new(0.0, 0.0, 6.0)),
            pointer: SmoothedPointer::new(POINTER_RATE),
            program,
            cloud,
            surface,
        })
    }
}

impl Scene for HeroGlobe {
    fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.camera.set_viewport(width, height);
    }

    fn point_at(&mut self, x: f32, y: f32) {
        self.pointer.aim(x, y);
    }

    fn render(&mut self, elapsed: f32, dt: f32) {
        let pointer = self.pointer.step(dt);

        let gl = self.surface.gl();
        self.surface.clear();
        self.program.activate();
        set_mat4(gl, &self.projection, &self.camera.projection());
        set_mat4(gl, &self.view, &self.camera.view());
        set_mat4(gl, &self.model, &globe_model(elapsed, pointer));
        set_f32(gl, &self.time, elapsed);
        set_f32(gl, &self.point_scale, self.surface.pixel_ratio());
        self.cloud.draw(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_holds_sphere_and_halo() {
        let cloud = globe_cloud(100, 40);
        assert_eq!(cloud.seeds.len(), 140);
        assert_eq!(cloud.positions.len(), 140 * 3);
        assert_eq!(cloud.halo.iter().filter(|h| **h == 1.0).count(), 40);
    }

    #[test]
    fn halo_sits_outside_the_sphere() {
        let cloud = globe_cloud(50, 50);
        for (point, halo) in cloud.positions.chunks(3).zip(&cloud.halo) {
            let r = Vec3::new(point[0], point[1], point[2]).length();
            if *halo == 1.0 {
                assert!(r >= HALO_INNER - 1e-3 && r <= HALO_OUTER + 1e-3);
            } else {
                assert!((r - SPHERE_RADIUS).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn centered_pointer_only_spins() {
        let model = globe_model(0.0, (0.0, 0.0));
        assert_eq!(model, Mat4::rotation_x(0.3) * Mat4::rotation_y(0.0));
    }
}
