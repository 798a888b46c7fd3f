//! Thin owned wrappers over WebGL 1 objects. Everything here releases its
//! GPU-side object on `Drop`.

use wasm_bindgen::JsCast;
use web_sys::js_sys::Float32Array;
use web_sys::{
    window, HtmlCanvasElement, WebGlBuffer, WebGlContextAttributes, WebGlProgram,
    WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation, WebglLoseContext,
};

use crate::config::MAX_PIXEL_RATIO;
use crate::error::AppError;

use super::math::{Mat4, Vec3};

/// A canvas with its WebGL context, sized in device pixels.
pub struct Surface {
    canvas: HtmlCanvasElement,
    gl: GL,
    pixel_ratio: f64,
}

impl Surface {
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, AppError> {
        let attributes = WebGlContextAttributes::new();
        attributes.set_alpha(true);
        attributes.set_antialias(true);
        attributes.set_premultiplied_alpha(false);

        let gl = canvas
            .get_context_with_context_options("webgl", &attributes)?
            .ok_or(AppError::ContextUnavailable)?
            .dyn_into::<GL>()
            .map_err(|_| AppError::ContextUnavailable)?;

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        let pixel_ratio = window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .clamp(1.0, MAX_PIXEL_RATIO);

        Ok(Self {
            canvas,
            gl,
            pixel_ratio,
        })
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio as f32
    }

    /// Resizes the drawing buffer to a CSS size.
    pub fn resize(&self, css_width: f64, css_height: f64) {
        let (width, height) = buffer_size(css_width, css_height, self.pixel_ratio);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    pub fn clear(&self) {
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        if let Ok(Some(extension)) = self.gl.get_extension("WEBGL_lose_context") {
            extension.unchecked_into::<WebglLoseContext>().lose_context();
        }
    }
}

pub fn buffer_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let scale = |v: f64| (v * pixel_ratio).round().max(1.0) as u32;
    (scale(css_width), scale(css_height))
}

pub struct Program {
    gl: GL,
    program: WebGlProgram,
    shaders: [WebGlShader; 2],
}

impl Program {
    pub fn new(gl: &GL, vertex: &str, fragment: &str) -> Result<Self, AppError> {
        let vertex = compile(gl, GL::VERTEX_SHADER, vertex)?;
        let fragment = match compile(gl, GL::FRAGMENT_SHADER, fragment) {
            Ok(shader) => shader,
            Err(err) => {
                gl.delete_shader(Some(&vertex));
                return Err(err);
            }
        };

        let program = gl
            .create_program()
            .ok_or_else(|| AppError::Link("unable to create program".into()))?;
        gl.attach_shader(&program, &vertex);
        gl.attach_shader(&program, &fragment);
        gl.link_program(&program);

        let program = Self {
            gl: gl.clone(),
            program,
            shaders: [vertex, fragment],
        };
        let linked = gl
            .get_program_parameter(&program.program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let log = gl.get_program_info_log(&program.program).unwrap_or_default();
            return Err(AppError::Link(log));
        }
        Ok(program)
    }

    pub fn activate(&self) {
        self.gl.use_program(Some(&self.program));
    }

    pub fn attribute(&self, name: &str) -> Result<u32, AppError> {
        let location = self.gl.get_attrib_location(&self.program, name);
        u32::try_from(location).map_err(|_| AppError::Link(format!("attribute {} is not active", name)))
    }

    pub fn uniform(&self, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(&self.program, name)
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        for shader in &self.shaders {
            self.gl.detach_shader(&self.program, shader);
            self.gl.delete_shader(Some(shader));
        }
        self.gl.delete_program(Some(&self.program));
    }
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, AppError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| AppError::Shader("unable to create shader".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(AppError::Shader(log))
    }
}

struct VertexBuffer {
    gl: GL,
    buffer: WebGlBuffer,
    components: i32,
}

impl VertexBuffer {
    fn new(gl: &GL, data: &[f32], components: i32) -> Result<Self, AppError> {
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| AppError::Js("unable to create buffer".into()))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let view = Float32Array::from(data);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
        Ok(Self {
            gl: gl.clone(),
            buffer,
            components,
        })
    }

    fn bind(&self, location: u32) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
        self.gl.enable_vertex_attrib_array(location);
        self.gl
            .vertex_attrib_pointer_with_i32(location, self.components, GL::FLOAT, false, 0, 0);
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.buffer));
    }
}

/// Vertex attributes drawn together with a single `draw_arrays` call.
pub struct Geometry {
    mode: u32,
    count: i32,
    attributes: Vec<(u32, VertexBuffer)>,
}

impl Geometry {
    pub fn new(mode: u32) -> Self {
        Self {
            mode,
            count: 0,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        gl: &GL,
        program: &Program,
        name: &str,
        data: &[f32],
        components: i32,
    ) -> Result<Self, AppError> {
        let count = (data.len() / components as usize) as i32;
        if !self.attributes.is_empty() && count != self.count {
            return Err(AppError::Link(format!(
                "attribute {} has {} vertices, expected {}",
                name, count, self.count
            )));
        }
        let location = program.attribute(name)?;
        self.attributes.push((location, VertexBuffer::new(gl, data, components)?));
        self.count = count;
        Ok(self)
    }

    pub fn draw(&self, gl: &GL) {
        for (location, buffer) in &self.attributes {
            buffer.bind(*location);
        }
        gl.draw_arrays(self.mode, 0, self.count);
    }
}

pub fn set_f32(gl: &GL, location: &Option<WebGlUniformLocation>, value: f32) {
    gl.uniform1f(location.as_ref(), value);
}

pub fn set_vec3(gl: &GL, location: &Option<WebGlUniformLocation>, value: Vec3) {
    gl.uniform3f(location.as_ref(), value.x, value.y, value.z);
}

pub fn set_mat4(gl: &GL, location: &Option<WebGlUniformLocation>, value: &Mat4) {
    gl.uniform_matrix4fv_with_f32_array(location.as_ref(), false, &value.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_size_scales_by_pixel_ratio() {
        assert_eq!(buffer_size(200.0, 200.0, 2.0), (400, 400));
        assert_eq!(buffer_size(333.3, 100.0, 1.5), (500, 150));
    }

    #[test]
    fn buffer_size_never_collapses() {
        assert_eq!(buffer_size(0.0, 0.0, 2.0), (1, 1));
    }
}
