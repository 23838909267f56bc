// Full-screen animated grid drawn behind the page.

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

pub const VERTEX_SRC: &str = r#"
attribute vec2 position;
varying vec2 vUv;

void main() {
  vUv = position * 0.5 + 0.5;
  gl_Position = vec4(position, 0.0, 1.0);
}
"#;

pub const FRAGMENT_SRC: &str = r#"
#extension GL_OES_standard_derivatives : enable
precision mediump float;
varying vec2 vUv;
uniform float uTime;
uniform vec2 uResolution;

void main() {
  vec2 p = (gl_FragCoord.xy * 2.0 - uResolution) / min(uResolution.x, uResolution.y);

  // grid mask
  vec2 grid = abs(fract(p * 10.0) - 0.5) / fwidth(p * 10.0);
  float line = min(grid.x, grid.y);
  line = 1.0 - min(line, 1.0);

  float wave = sin(p.x * 3.0 + uTime * 2.0) * 0.1 + sin(p.y * 2.0 + uTime * 1.5) * 0.1;

  vec3 cyan = vec3(0.0, 0.96, 1.0);
  vec3 green = vec3(0.0, 1.0, 0.5);
  vec3 purple = vec3(0.5, 0.0, 1.0);

  vec3 color = mix(cyan, green, sin(uTime + p.x + p.y) * 0.5 + 0.5);
  color = mix(color, purple, wave * 0.5 + 0.5);
  color *= line * 0.3;

  gl_FragColor = vec4(color, 1.0);
}
"#;

// Names shared by both stages and the host; must match the sources above.
pub const ATTR_POSITION: &str = "position";
pub const UNIFORM_TIME: &str = "uTime";
pub const UNIFORM_RESOLUTION: &str = "uResolution";

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

/// Triangle-strip quad covering clip space.
pub const QUAD: [QuadVertex; 4] = [
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [-1.0, 1.0] },
    QuadVertex { position: [1.0, 1.0] },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

#[derive(Debug, Error, PartialEq)]
pub enum ShaderError {
    #[error("no WebGL context available")]
    NoContext,
    #[error("{stage:?} shader compilation error: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("program linking error: {0}")]
    Link(String),
    #[error("failed to create vertex buffer")]
    Buffer,
    #[error("attribute `{0}` not found in linked program")]
    MissingAttribute(&'static str),
}

/// The slice of a WebGL 1 context used by the background loop.
pub trait GlBackend {
    type Shader;
    type Program;
    type Buffer;
    type Uniform;

    fn compile(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;
    fn link(&self, vs: &Self::Shader, fs: &Self::Shader) -> Result<Self::Program, String>;
    fn create_vertex_buffer(&self, vertices: &[QuadVertex]) -> Option<Self::Buffer>;
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::Uniform>;

    fn use_program(&self, program: &Self::Program);
    fn uniform1f(&self, location: &Self::Uniform, v: f32);
    fn uniform2f(&self, location: &Self::Uniform, x: f32, y: f32);
    /// Bind `buffer` and point `attrib` at tightly packed vec2 floats.
    fn bind_vertices(&self, buffer: &Self::Buffer, attrib: u32);
    fn draw_triangle_strip(&self, count: i32);
    fn viewport(&self, width: i32, height: i32);
}

pub struct ShaderLoop<G: GlBackend> {
    gl: G,
    program: G::Program,
    buffer: G::Buffer,
    position_attrib: u32,
    time_uniform: Option<G::Uniform>,
    resolution_uniform: Option<G::Uniform>,
}

impl<G: GlBackend> ShaderLoop<G> {
    /// Compile, link and upload everything a frame needs. Any failure means
    /// the loop must not be started.
    pub fn new(gl: G) -> Result<Self, ShaderError> {
        let vs = gl
            .compile(ShaderStage::Vertex, VERTEX_SRC)
            .map_err(|log| ShaderError::Compile {
                stage: ShaderStage::Vertex,
                log,
            })?;
        let fs = gl
            .compile(ShaderStage::Fragment, FRAGMENT_SRC)
            .map_err(|log| ShaderError::Compile {
                stage: ShaderStage::Fragment,
                log,
            })?;
        let program = gl.link(&vs, &fs).map_err(ShaderError::Link)?;
        let buffer = gl.create_vertex_buffer(&QUAD).ok_or(ShaderError::Buffer)?;
        let position_attrib = gl
            .attrib_location(&program, ATTR_POSITION)
            .ok_or(ShaderError::MissingAttribute(ATTR_POSITION))?;
        // A uniform the compiler optimised away has no location; writes to it
        // are skipped rather than treated as fatal.
        let time_uniform = gl.uniform_location(&program, UNIFORM_TIME);
        let resolution_uniform = gl.uniform_location(&program, UNIFORM_RESOLUTION);
        if time_uniform.is_none() || resolution_uniform.is_none() {
            log::warn!("[shader] uniform location missing; time/resolution may not animate");
        }
        Ok(Self {
            gl,
            program,
            buffer,
            position_attrib,
            time_uniform,
            resolution_uniform,
        })
    }

    #[cfg(test)]
    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// Draw one frame at `time_sec` for a `width` x `height` surface.
    pub fn draw(&self, time_sec: f32, width: u32, height: u32) {
        self.gl.use_program(&self.program);
        if let Some(loc) = &self.time_uniform {
            self.gl.uniform1f(loc, time_sec);
        }
        if let Some(loc) = &self.resolution_uniform {
            self.gl.uniform2f(loc, width as f32, height as f32);
        }
        self.gl.bind_vertices(&self.buffer, self.position_attrib);
        self.gl.draw_triangle_strip(QUAD.len() as i32);
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.gl.viewport(width as i32, height as i32);
    }
}
