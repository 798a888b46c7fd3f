use std::f32::consts::TAU;

use web_sys::{WebGlRenderingContext as GL, WebGlUniformLocation};

use crate::error::AppError;

use super::gl::{set_f32, set_mat4, Geometry, Program, Surface};
use super::math::{hash01, Camera, Mat4, SmoothedPointer, Vec3};
use super::Scene;

const VERTEX: &str = r#"
attribute vec3 aPosition;
attribute float aLevel;
attribute float aPhase;
attribute float aKind;

uniform mat4 uProjection;
uniform mat4 uView;
uniform mat4 uModel;
uniform float uTime;
uniform float uPointScale;

varying float vKind;
varying float vLevel;

void main() {
    vec3 pos = aPosition;
    pos.y += aKind * sin(uTime + aPhase * 6.2831) * 0.3;
    vec4 view = uView * uModel * vec4(pos, 1.0);
    float pulse = 1.0 + 0.1 * sin(uTime * 2.0 + aPhase * 6.2831);
    float size = mix(2.0, (18.0 + aLevel * 30.0) * pulse, aKind);
    gl_PointSize = size * uPointScale * (8.0 / max(-view.z, 0.1));
    gl_Position = uProjection * view;
    vKind = aKind;
    vLevel = aLevel;
}
"#;

const FRAGMENT: &str = r#"
precision mediump float;

varying float vKind;
varying float vLevel;

void main() {
    float d = length(gl_PointCoord - 0.5);
    if (d > 0.5) discard;
    vec3 core = mix(vec3(0.29, 0.56, 0.89), vec3(0.55, 0.4, 0.95), vLevel);
    float body = smoothstep(0.5, 0.15, d);
    float highlight = smoothstep(0.2, 0.0, length(gl_PointCoord - vec2(0.35)));
    vec3 color = core + highlight * 0.4 * vKind;
    gl_FragColor = vec4(color, mix(0.35, body, vKind));
}
"#;

const ORBIT_RADIUS: f32 = 3.0;
const RING_DOTS: usize = 160;
const POINTER_RATE: f32 = 2.5;

#[derive(Debug, Default, PartialEq)]
pub struct OrbCloud {
    pub positions: Vec<f32>,
    pub levels: Vec<f32>,
    pub phases: Vec<f32>,
    /// 1 for a skill orb, 0 for a dot of the orbit ring.
    pub kinds: Vec<f32>,
}

/// One orb per skill level spaced evenly on the orbit, plus the orbit
/// itself as a dotted ring.
pub fn orb_layout(levels: &[u8], ring_dots: usize) -> OrbCloud {
    let mut cloud = OrbCloud::default();
    let mut push = |angle: f32, level: f32, phase: f32, kind: f32| {
        Vec3::new(angle.cos() * ORBIT_RADIUS, 0.0, angle.sin() * ORBIT_RADIUS).push_to(&mut cloud.positions);
        cloud.levels.push(level);
        cloud.phases.push(phase);
        cloud.kinds.push(kind);
    };

    for (i, level) in levels.iter().enumerate() {
        let angle = i as f32 / levels.len() as f32 * TAU;
        push(angle, (*level).min(100) as f32 / 100.0, hash01(i as u32), 1.0);
    }
    for i in 0..ring_dots {
        let angle = i as f32 / ring_dots as f32 * TAU;
        push(angle, 0.0, i as f32 / ring_dots as f32, 0.0);
    }
    cloud
}

pub fn orbit_model(elapsed: f32, pointer: (f32, f32)) -> Mat4 {
    Mat4::rotation_x(-pointer.1 * 0.25) * Mat4::rotation_y(elapsed * 0.2 + pointer.0 * 0.6)
}

/// Skill orbs circling behind the skills list.
pub struct SkillOrbs {
    program: Program,
    orbs: Geometry,
    camera: Camera,
    pointer: SmoothedPointer,
    projection: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    point_scale: Option<WebGlUniformLocation>,
    surface: Surface,
}

impl SkillOrbs {
    pub fn new(surface: Surface, levels: &[u8]) -> Result<Self, AppError> {
        let gl = surface.gl();
        let program = Program::new(gl, VERTEX, FRAGMENT)?;
        let data = orb_layout(levels, RING_DOTS);
        let orbs = Geometry::new(GL::POINTS)
            .with_attribute(gl, &program, "aPosition", &data.positions, 3)?
            .with_attribute(gl, &program, "aLevel", &data.levels, 1)?
            .with_attribute(gl, &program, "aPhase", &data.phases, 1)?
            .with_attribute(gl, &program, "aKind", &data.kinds, 1)?;

        Ok(Self {
            projection: program.uniform("uProjection"),
            view: program.uniform("uView"),
            model: program.uniform("uModel"),
            time: program.uniform("uTime"),
            point_scale: program.uniform("uPointScale"),
            camera: Camera::new(60.0, Vec3::new(0.0, 1.5, 8.0)),
            pointer: SmoothedPointer::new(POINTER_RATE),
            program,
            orbs,
            surface,
        })
    }
}

impl Scene for SkillOrbs {
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
        set_mat4(gl, &self.model, &orbit_model(elapsed, pointer));
        set_f32(gl, &self.time, elapsed);
        set_f32(gl, &self.point_scale, self.surface.pixel_ratio());
        self.orbs.draw(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_orb_per_skill() {
        let cloud = orb_layout(&[90, 85, 80], 10);
        assert_eq!(cloud.kinds.iter().filter(|k| **k == 1.0).count(), 3);
        assert_eq!(cloud.kinds.len(), 13);
        assert_eq!(&cloud.levels[..3], &[0.9, 0.85, 0.8]);
    }

    #[test]
    fn levels_are_clamped() {
        let cloud = orb_layout(&[250], 0);
        assert_eq!(cloud.levels, vec![1.0]);
    }

    #[test]
    fn everything_sits_on_the_orbit() {
        let cloud = orb_layout(&[10, 20, 30, 40, 50], 32);
        for p in cloud.positions.chunks(3) {
            let r = Vec3::new(p[0], p[1], p[2]).length();
            assert!((r - ORBIT_RADIUS).abs() < 1e-4);
            assert_eq!(p[1], 0.0);
        }
    }

    #[test]
    fn no_skills_still_draws_the_ring() {
        let cloud = orb_layout(&[], 8);
        assert_eq!(cloud.kinds, vec![0.0; 8]);
    }
}
