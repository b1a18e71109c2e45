//! Graphics backend capability consumed by the scene graph.
//!
//! Scene nodes only see opaque handles and [`Uniform`] values. The browser
//! implementation lives in [`crate::webgl`]; [`RecordingBackend`] keeps the
//! calls in memory so drawing can be inspected without a GPU.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::error::PlanetError;
use crate::geometry::Mesh;

/// Handle to a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub usize);

/// Handle to an uploaded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Handle to an uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// A typed uniform value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat3(Mat3),
    Mat4(Mat4),
}

/// Which index list of a mesh to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Triangles,
    Lines,
}

/// GPU operations needed by the scene graph.
pub trait Backend {
    /// Compile and link a program from vertex and fragment shader sources.
    fn create_program(&mut self, vertex: &str, fragment: &str) -> Result<ProgramId, PlanetError>;

    /// Upload vertex attributes and both index lists of `mesh`.
    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<MeshId, PlanetError>;

    fn set_uniform(&mut self, program: ProgramId, name: &str, value: Uniform) -> Result<(), PlanetError>;

    /// Bind `texture` to texture `unit` and point the sampler `name` at it.
    fn bind_texture(&mut self, program: ProgramId, name: &str, unit: u32, texture: TextureId)
    -> Result<(), PlanetError>;

    fn draw_mesh(&mut self, program: ProgramId, mesh: MeshId, mode: DrawMode) -> Result<(), PlanetError>;

    /// Enable depth testing and clear color and depth buffers.
    fn begin_frame(&mut self, clear_color: Vec4);
}

/// One recorded [`Backend`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateProgram(ProgramId),
    UploadMesh { mesh: MeshId, vertices: usize, triangles: usize, lines: usize },
    SetUniform { program: ProgramId, name: String, value: Uniform },
    BindTexture { program: ProgramId, name: String, unit: u32, texture: TextureId },
    DrawMesh { program: ProgramId, mesh: MeshId, mode: DrawMode },
    BeginFrame(Vec4),
}

/// A [`Backend`] that validates handles and appends every call to a list.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
    programs: Vec<(String, String)>,
    meshes: usize,
    textures: usize,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a texture handle, standing in for an uploaded image.
    pub fn create_texture(&mut self) -> TextureId {
        self.textures += 1;
        TextureId(self.textures - 1)
    }

    /// Shader sources a program was created from.
    #[must_use]
    pub fn program_sources(&self, program: ProgramId) -> Option<(&str, &str)> {
        self.programs.get(program.0).map(|(vs, fs)| (vs.as_str(), fs.as_str()))
    }

    /// The most recent value set for `name` on `program`.
    #[must_use]
    pub fn uniform(&self, program: ProgramId, name: &str) -> Option<Uniform> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::SetUniform { program: p, name: n, value } if *p == program && n == name => Some(*value),
            _ => None,
        })
    }

    /// Every draw call in order.
    #[must_use]
    pub fn draws(&self) -> Vec<(ProgramId, MeshId, DrawMode)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DrawMesh { program, mesh, mode } => Some((*program, *mesh, *mode)),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls but keep the created handles.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn check_program(&self, program: ProgramId) -> Result<(), PlanetError> {
        if program.0 < self.programs.len() { Ok(()) } else { Err(PlanetError::UnknownProgram(program)) }
    }
}

impl Backend for RecordingBackend {
    fn create_program(&mut self, vertex: &str, fragment: &str) -> Result<ProgramId, PlanetError> {
        let id = ProgramId(self.programs.len());
        self.programs.push((vertex.to_owned(), fragment.to_owned()));
        self.calls.push(Call::CreateProgram(id));
        Ok(id)
    }

    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<MeshId, PlanetError> {
        let id = MeshId(self.meshes);
        self.meshes += 1;
        self.calls.push(Call::UploadMesh {
            mesh: id,
            vertices: mesh.vertex_count(),
            triangles: mesh.triangles.len() / 3,
            lines: mesh.lines.len() / 2,
        });
        Ok(id)
    }

    fn set_uniform(&mut self, program: ProgramId, name: &str, value: Uniform) -> Result<(), PlanetError> {
        self.check_program(program)?;
        self.calls.push(Call::SetUniform { program, name: name.to_owned(), value });
        Ok(())
    }

    fn bind_texture(
        &mut self,
        program: ProgramId,
        name: &str,
        unit: u32,
        texture: TextureId,
    ) -> Result<(), PlanetError> {
        self.check_program(program)?;
        if texture.0 >= self.textures {
            return Err(PlanetError::UnknownTexture(texture));
        }
        self.calls.push(Call::BindTexture { program, name: name.to_owned(), unit, texture });
        Ok(())
    }

    fn draw_mesh(&mut self, program: ProgramId, mesh: MeshId, mode: DrawMode) -> Result<(), PlanetError> {
        self.check_program(program)?;
        if mesh.0 >= self.meshes {
            return Err(PlanetError::UnknownMesh(mesh));
        }
        self.calls.push(Call::DrawMesh { program, mesh, mode });
        Ok(())
    }

    fn begin_frame(&mut self, clear_color: Vec4) {
        self.calls.push(Call::BeginFrame(clear_color));
    }
}
