use crate::shader::{GlBackend, QuadVertex, ShaderError, ShaderStage};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlUniformLocation,
};

/// WebGL 1 context backing the background shader.
pub struct WebGlBackend {
    gl: GL,
}

impl WebGlBackend {
    /// Acquire `webgl`, falling back to the `experimental-webgl` name older
    /// hosts still use.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, ShaderError> {
        let gl = ["webgl", "experimental-webgl"]
            .iter()
            .find_map(|name| {
                canvas
                    .get_context(name)
                    .ok()
                    .flatten()
                    .and_then(|ctx| ctx.dyn_into::<GL>().ok())
            })
            .ok_or(ShaderError::NoContext)?;
        // fwidth() in the fragment stage needs derivatives on WebGL 1
        if gl.get_extension("OES_standard_derivatives").ok().flatten().is_none() {
            log::warn!("[shader] OES_standard_derivatives unavailable");
        }
        Ok(Self { gl })
    }
}

impl GlBackend for WebGlBackend {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Uniform = WebGlUniformLocation;

    fn compile(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader, String> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or_else(|| "unable to create shader object".to_string())?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);
        let ok = self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(shader)
        } else {
            let log = self.gl.get_shader_info_log(&shader).unwrap_or_default();
            self.gl.delete_shader(Some(&shader));
            Err(log)
        }
    }

    fn link(&self, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, String> {
        let program = self
            .gl
            .create_program()
            .ok_or_else(|| "unable to create program object".to_string())?;
        self.gl.attach_shader(&program, vs);
        self.gl.attach_shader(&program, fs);
        self.gl.link_program(&program);
        let ok = self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(program)
        } else {
            let log = self.gl.get_program_info_log(&program).unwrap_or_default();
            self.gl.delete_program(Some(&program));
            Err(log)
        }
    }

    fn create_vertex_buffer(&self, vertices: &[QuadVertex]) -> Option<WebGlBuffer> {
        let buffer = self.gl.create_buffer()?;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        self.gl.buffer_data_with_u8_array(
            GL::ARRAY_BUFFER,
            bytemuck::cast_slice(vertices),
            GL::STATIC_DRAW,
        );
        Some(buffer)
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn uniform1f(&self, location: &WebGlUniformLocation, v: f32) {
        self.gl.uniform1f(Some(location), v);
    }

    fn uniform2f(&self, location: &WebGlUniformLocation, x: f32, y: f32) {
        self.gl.uniform2f(Some(location), x, y);
    }

    fn bind_vertices(&self, buffer: &WebGlBuffer, attrib: u32) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        self.gl.enable_vertex_attrib_array(attrib);
        self.gl
            .vertex_attrib_pointer_with_i32(attrib, 2, GL::FLOAT, false, 0, 0);
    }

    fn draw_triangle_strip(&self, count: i32) {
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, count);
    }

    fn viewport(&self, width: i32, height: i32) {
        self.gl.viewport(0, 0, width, height);
    }
}
