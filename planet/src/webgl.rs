//! [`Backend`] over a browser `WebGlRenderingContext`.
//!
//! This module is the only place that touches WebGL. Handles index into
//! vectors owned by [`WebGlBackend`]. Buffers, programs and textures are
//! never deleted because the scene is built once per page; shader objects
//! are deleted as soon as their program is linked.

#[cfg(test)]
#[path = "webgl_test.rs"]
mod webgl_test;

use glam::Vec4;
use js_sys::{Float32Array, Uint16Array};
use wasm_bindgen::JsValue;
use web_sys::{
    HtmlImageElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader, WebGlTexture,
    WebGlUniformLocation,
};

use crate::backend::{Backend, DrawMode, MeshId, ProgramId, TextureId, Uniform};
use crate::error::PlanetError;
use crate::geometry::Mesh;

/// Vertex attribute names the shaders are expected to declare.
const POSITION_ATTRIBUTE: &str = "vertexPosition";
const NORMAL_ATTRIBUTE: &str = "vertexNormal";
const TEX_COORD_ATTRIBUTE: &str = "vertexTexCoords";

struct GlMesh {
    positions: WebGlBuffer,
    normals: WebGlBuffer,
    tex_coords: WebGlBuffer,
    triangles: WebGlBuffer,
    triangle_indices: i32,
    lines: WebGlBuffer,
    line_indices: i32,
}

pub struct WebGlBackend {
    gl: Gl,
    programs: Vec<WebGlProgram>,
    meshes: Vec<GlMesh>,
    textures: Vec<WebGlTexture>,
}

impl WebGlBackend {
    #[must_use]
    pub fn new(gl: Gl) -> Self {
        Self { gl, programs: Vec::new(), meshes: Vec::new(), textures: Vec::new() }
    }

    /// Upload a loaded image as a mipmapped RGBA texture.
    #[allow(clippy::cast_possible_wrap)]
    pub fn upload_image(&mut self, image: &HtmlImageElement) -> Result<TextureId, PlanetError> {
        let texture = self.gl.create_texture().ok_or_else(|| webgl("create_texture returned null"))?;
        self.gl.bind_texture(Gl::TEXTURE_2D, Some(&texture));
        self.gl.pixel_storei(Gl::UNPACK_FLIP_Y_WEBGL, 1);
        self.gl
            .tex_image_2d_with_u32_and_u32_and_image(
                Gl::TEXTURE_2D,
                0,
                Gl::RGBA as i32,
                Gl::RGBA,
                Gl::UNSIGNED_BYTE,
                image,
            )
            .map_err(js_error)?;
        self.gl.generate_mipmap(Gl::TEXTURE_2D);
        self.gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MIN_FILTER, Gl::LINEAR_MIPMAP_LINEAR as i32);
        self.gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MAG_FILTER, Gl::LINEAR as i32);
        self.gl.bind_texture(Gl::TEXTURE_2D, None);

        log::debug!("uploaded {}x{} texture {}", image.natural_width(), image.natural_height(), image.src());
        self.textures.push(texture);
        Ok(TextureId(self.textures.len() - 1))
    }

    fn program(&self, id: ProgramId) -> Result<&WebGlProgram, PlanetError> {
        self.programs.get(id.0).ok_or(PlanetError::UnknownProgram(id))
    }

    /// Make `id` current and look up `name`. Uniforms the compiler dropped
    /// have no location; writes to them are skipped.
    fn uniform_location(&self, id: ProgramId, name: &str) -> Result<Option<WebGlUniformLocation>, PlanetError> {
        let program = self.program(id)?;
        self.gl.use_program(Some(program));
        let location = self.gl.get_uniform_location(program, name);
        if location.is_none() {
            log::trace!("program {} has no uniform {name}", id.0);
        }
        Ok(location)
    }

    fn array_buffer(&self, data: &[f32]) -> Result<WebGlBuffer, PlanetError> {
        let buffer = self.gl.create_buffer().ok_or_else(|| webgl("create_buffer returned null"))?;
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
        self.gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &Float32Array::from(data), Gl::STATIC_DRAW);
        Ok(buffer)
    }

    fn index_buffer(&self, data: &[u16]) -> Result<(WebGlBuffer, i32), PlanetError> {
        let count = i32::try_from(data.len()).map_err(|_| PlanetError::MeshTooLarge(data.len()))?;
        let buffer = self.gl.create_buffer().ok_or_else(|| webgl("create_buffer returned null"))?;
        self.gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&buffer));
        self.gl.buffer_data_with_array_buffer_view(
            Gl::ELEMENT_ARRAY_BUFFER,
            &Uint16Array::from(data),
            Gl::STATIC_DRAW,
        );
        Ok((buffer, count))
    }

    /// Point attribute `name` at `buffer`, if the program uses it.
    fn bind_attribute(&self, program: &WebGlProgram, name: &str, buffer: &WebGlBuffer, components: i32) {
        let Ok(location) = u32::try_from(self.gl.get_attrib_location(program, name)) else {
            return;
        };
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(buffer));
        self.gl.vertex_attrib_pointer_with_i32(location, components, Gl::FLOAT, false, 0, 0);
        self.gl.enable_vertex_attrib_array(location);
    }
}

impl Backend for WebGlBackend {
    fn create_program(&mut self, vertex: &str, fragment: &str) -> Result<ProgramId, PlanetError> {
        let program = build_program(&self.gl, vertex, fragment)?;
        self.programs.push(program);
        log::debug!("linked program {}", self.programs.len() - 1);
        Ok(ProgramId(self.programs.len() - 1))
    }

    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<MeshId, PlanetError> {
        let (triangles, triangle_indices) = self.index_buffer(&mesh.triangles)?;
        let (lines, line_indices) = self.index_buffer(&mesh.lines)?;
        let uploaded = GlMesh {
            positions: self.array_buffer(&mesh.positions)?,
            normals: self.array_buffer(&mesh.normals)?,
            tex_coords: self.array_buffer(&mesh.tex_coords)?,
            triangles,
            triangle_indices,
            lines,
            line_indices,
        };
        self.meshes.push(uploaded);
        Ok(MeshId(self.meshes.len() - 1))
    }

    fn set_uniform(&mut self, program: ProgramId, name: &str, value: Uniform) -> Result<(), PlanetError> {
        let Some(location) = self.uniform_location(program, name)? else {
            return Ok(());
        };
        let location = Some(&location);
        match value {
            Uniform::Bool(b) => self.gl.uniform1i(location, i32::from(b)),
            Uniform::Int(i) => self.gl.uniform1i(location, i),
            Uniform::Float(f) => self.gl.uniform1f(location, f),
            Uniform::Vec3(v) => self.gl.uniform3fv_with_f32_array(location, &v.to_array()),
            Uniform::Vec4(v) => self.gl.uniform4fv_with_f32_array(location, &v.to_array()),
            Uniform::Mat3(m) => self.gl.uniform_matrix3fv_with_f32_array(location, false, &m.to_cols_array()),
            Uniform::Mat4(m) => self.gl.uniform_matrix4fv_with_f32_array(location, false, &m.to_cols_array()),
        }
        Ok(())
    }

    fn bind_texture(
        &mut self,
        program: ProgramId,
        name: &str,
        unit: u32,
        texture: TextureId,
    ) -> Result<(), PlanetError> {
        let handle = self.textures.get(texture.0).ok_or(PlanetError::UnknownTexture(texture))?;
        self.gl.active_texture(Gl::TEXTURE0 + unit);
        self.gl.bind_texture(Gl::TEXTURE_2D, Some(handle));
        let sampler = i32::try_from(unit).map_err(|_| webgl("texture unit out of range"))?;
        self.set_uniform(program, name, Uniform::Int(sampler))
    }

    fn draw_mesh(&mut self, program: ProgramId, mesh: MeshId, mode: DrawMode) -> Result<(), PlanetError> {
        let gl_program = self.program(program)?;
        let m = self.meshes.get(mesh.0).ok_or(PlanetError::UnknownMesh(mesh))?;
        self.gl.use_program(Some(gl_program));
        self.bind_attribute(gl_program, POSITION_ATTRIBUTE, &m.positions, 3);
        self.bind_attribute(gl_program, NORMAL_ATTRIBUTE, &m.normals, 3);
        self.bind_attribute(gl_program, TEX_COORD_ATTRIBUTE, &m.tex_coords, 2);

        let (buffer, count, primitive) = match mode {
            DrawMode::Triangles => (&m.triangles, m.triangle_indices, Gl::TRIANGLES),
            DrawMode::Lines => (&m.lines, m.line_indices, Gl::LINES),
        };
        self.gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(buffer));
        self.gl.draw_elements_with_i32(primitive, count, Gl::UNSIGNED_SHORT, 0);
        Ok(())
    }

    fn begin_frame(&mut self, clear_color: Vec4) {
        self.gl.enable(Gl::DEPTH_TEST);
        self.gl.depth_func(Gl::LESS);
        self.gl.clear_color(clear_color.x, clear_color.y, clear_color.z, clear_color.w);
        self.gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
    }
}

/// The shader steps of program creation.
trait ShaderLinker {
    type Shader;
    type Program;

    fn compile(&self, kind: u32, source: &str) -> Result<Self::Shader, PlanetError>;

    /// Link into a program. The shaders are detached again either way.
    fn link(&self, vs: &Self::Shader, fs: &Self::Shader) -> Result<Self::Program, PlanetError>;

    fn delete_shader(&self, shader: &Self::Shader);
}

/// Compile and link a program. No shader object outlives the call, on
/// success or on any failure.
fn build_program<L: ShaderLinker>(linker: &L, vertex: &str, fragment: &str) -> Result<L::Program, PlanetError> {
    let vs = linker.compile(Gl::VERTEX_SHADER, vertex)?;
    let fs = match linker.compile(Gl::FRAGMENT_SHADER, fragment) {
        Ok(fs) => fs,
        Err(e) => {
            linker.delete_shader(&vs);
            return Err(e);
        }
    };
    let linked = linker.link(&vs, &fs);
    linker.delete_shader(&vs);
    linker.delete_shader(&fs);
    linked
}

impl ShaderLinker for Gl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;

    fn compile(&self, kind: u32, source: &str) -> Result<WebGlShader, PlanetError> {
        let shader = self.create_shader(kind).ok_or_else(|| webgl("create_shader returned null"))?;
        self.shader_source(&shader, source);
        self.compile_shader(&shader);
        if self.get_shader_parameter(&shader, Gl::COMPILE_STATUS).as_bool().unwrap_or(false) {
            Ok(shader)
        } else {
            let log = self.get_shader_info_log(&shader).unwrap_or_default();
            self.delete_shader(Some(&shader));
            Err(PlanetError::Shader(log))
        }
    }

    fn link(&self, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, PlanetError> {
        let program = self.create_program().ok_or_else(|| webgl("create_program returned null"))?;
        self.attach_shader(&program, vs);
        self.attach_shader(&program, fs);
        self.link_program(&program);
        self.detach_shader(&program, vs);
        self.detach_shader(&program, fs);
        if self.get_program_parameter(&program, Gl::LINK_STATUS).as_bool().unwrap_or(false) {
            Ok(program)
        } else {
            let log = self.get_program_info_log(&program).unwrap_or_default();
            self.delete_program(Some(&program));
            Err(PlanetError::Shader(log))
        }
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        Gl::delete_shader(self, Some(shader));
    }
}

fn webgl(message: &str) -> PlanetError {
    PlanetError::WebGl(message.to_owned())
}

fn js_error(value: JsValue) -> PlanetError {
    PlanetError::WebGl(format!("{value:?}"))
}
