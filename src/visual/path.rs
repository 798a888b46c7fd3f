use web_sys::{WebGlRenderingContext as GL, WebGlUniformLocation};

use crate::error::AppError;

use super::gl::{set_f32, set_mat4, Geometry, Program, Surface};
use super::math::{CatmullRom, Camera, SmoothedPointer, Vec3};
use super::Scene;

const VERTEX: &str = r#"
attribute vec3 aPosition;
attribute float aIndex;

uniform mat4 uProjection;
uniform mat4 uView;
uniform float uTime;
uniform float uPointScale;

void main() {
    vec3 pos = aPosition;
    float marker = step(0.0, aIndex);
    pos.y += marker * sin(uTime + aIndex) * 0.3;
    vec4 view = uView * vec4(pos, 1.0);
    gl_PointSize = 13.0 * uPointScale * (15.0 / max(-view.z, 0.1));
    gl_Position = uProjection * view;
}
"#;

const FRAGMENT: &str = r#"
precision mediump float;

uniform float uPoints;

void main() {
    if (uPoints > 0.5) {
        vec2 c = gl_PointCoord - 0.5;
        float d = length(c);
        if (d > 0.5) discard;
        vec3 normal = normalize(vec3(c * 2.0, sqrt(max(0.25 - d * d, 0.0)) * 2.0));
        float diffuse = max(dot(normal, normalize(vec3(0.6, 0.6, 1.0))), 0.0);
        vec3 base = vec3(0.29, 0.56, 0.89);
        gl_FragColor = vec4(base * (0.7 + 0.5 * diffuse), 1.0);
    } else {
        gl_FragColor = vec4(0.5, 0.5, 0.5, 0.8);
    }
}
"#;

pub const CONTROL_POINTS: [Vec3; 5] = [
    Vec3::new(-10.0, -5.0, 0.0),
    Vec3::new(-5.0, 5.0, -5.0),
    Vec3::new(0.0, -2.0, -8.0),
    Vec3::new(5.0, 3.0, -5.0),
    Vec3::new(10.0, -4.0, 0.0),
];

const PATH_DIVISIONS: usize = 50;
const CAMERA_DISTANCE: f32 = 15.0;
const POINTER_RATE: f32 = 4.0;

/// Marker positions spread evenly along the curve, ends included.
pub fn marker_positions(curve: &CatmullRom, count: usize) -> Vec<Vec3> {
    match count {
        0 => Vec::new(),
        1 => vec![curve.point(0.0)],
        _ => (0..count)
            .map(|i| curve.point(i as f32 / (count - 1) as f32))
            .collect(),
    }
}

/// Idle sway until the pointer shows up, then follow it.
pub fn camera_position(elapsed: f32, pointer: Option<(f32, f32)>) -> Vec3 {
    match pointer {
        Some((x, y)) => Vec3::new(x * 3.0, y * 2.0, CAMERA_DISTANCE),
        None => Vec3::new((elapsed * 0.5).sin() * 2.0, 0.0, CAMERA_DISTANCE),
    }
}

/// The career path drawn behind the timeline, one marker per milestone.
pub struct TimelinePath {
    program: Program,
    path: Geometry,
    markers: Geometry,
    camera: Camera,
    pointer: SmoothedPointer,
    projection: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    point_scale: Option<WebGlUniformLocation>,
    points: Option<WebGlUniformLocation>,
    surface: Surface,
}

impl TimelinePath {
    pub fn new(surface: Surface, milestones: usize) -> Result<Self, AppError> {
        let gl = surface.gl();
        let program = Program::new(gl, VERTEX, FRAGMENT)?;
        let curve = CatmullRom::new(CONTROL_POINTS.to_vec());

        let mut line = Vec::new();
        for point in curve.sample(PATH_DIVISIONS) {
            point.push_to(&mut line);
        }
        let path = Geometry::new(GL::LINE_STRIP)
            .with_attribute(gl, &program, "aPosition", &line, 3)?
            .with_attribute(gl, &program, "aIndex", &vec![-1.0; PATH_DIVISIONS + 1], 1)?;

        let mut spots = Vec::new();
        for point in marker_positions(&curve, milestones) {
            point.push_to(&mut spots);
        }
        let indices: Vec<f32> = (0..milestones).map(|i| i as f32).collect();
        let markers = Geometry::new(GL::POINTS)
            .with_attribute(gl, &program, "aPosition", &spots, 3)?
            .with_attribute(gl, &program, "aIndex", &indices, 1)?;

        Ok(Self {
            projection: program.uniform("uProjection"),
            view: program.uniform("uView"),
            time: program.uniform("uTime"),
            point_scale: program.uniform("uPointScale"),
            points: program.uniform("uPoints"),
            camera: Camera::new(75.0, Vec3::new(0.0, 0.0, CAMERA_DISTANCE)),
            pointer: SmoothedPointer::new(POINTER_RATE),
            program,
            path,
            markers,
            surface,
        })
    }
}

impl Scene for TimelinePath {
    fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.camera.set_viewport(width, height);
    }

    fn point_at(&mut self, x: f32, y: f32) {
        self.pointer.aim(x, y);
    }

    fn render(&mut self, elapsed: f32, dt: f32) {
        let pointer = self.pointer.step(dt);
        let engaged = self.pointer.engaged().then_some(pointer);
        self.camera.position = camera_position(elapsed, engaged);

        let gl = self.surface.gl();
        self.surface.clear();
        self.program.activate();
        set_mat4(gl, &self.projection, &self.camera.projection());
        set_mat4(gl, &self.view, &self.camera.view());
        set_f32(gl, &self.time, elapsed);
        set_f32(gl, &self.point_scale, self.surface.pixel_ratio());

        set_f32(gl, &self.points, 0.0);
        self.path.draw(gl);
        set_f32(gl, &self.points, 1.0);
        self.markers.draw(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> CatmullRom {
        CatmullRom::new(CONTROL_POINTS.to_vec())
    }

    #[test]
    fn markers_span_the_whole_curve() {
        let markers = marker_positions(&curve(), 4);
        assert_eq!(markers.len(), 4);
        assert_eq!(markers[0], CONTROL_POINTS[0]);
        assert!((markers[3] - CONTROL_POINTS[4]).length() < 1e-4);
    }

    #[test]
    fn degenerate_marker_counts() {
        assert!(marker_positions(&curve(), 0).is_empty());
        assert_eq!(marker_positions(&curve(), 1), vec![CONTROL_POINTS[0]]);
    }

    #[test]
    fn camera_sways_until_pointer_arrives() {
        assert_eq!(camera_position(0.0, None), Vec3::new(0.0, 0.0, 15.0));
        let swayed = camera_position(std::f32::consts::PI, None);
        assert!((swayed.x - 2.0).abs() < 1e-4);
        assert_eq!(camera_position(9.0, Some((1.0, -0.5))), Vec3::new(3.0, -1.0, 15.0));
    }
}
