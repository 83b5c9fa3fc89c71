//! Graphviz-backed render engine.
//!
//! Pipes generated DOT through the `dot` executable and returns the
//! image bytes directly, so no fixed temp-file path ever sits between
//! the renderer and the canvas.

use std::io::Write as _;
use std::process::{Command, Stdio};

use plens_model::{GraphDescription, ImageFormat};

use crate::RenderEngine;
use crate::dot::dot_source;
use crate::error::RenderError;

/// Renders through a local Graphviz installation.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
        }
    }
}

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a non-default executable (e.g. an absolute path to `dot`).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn format_flag(format: ImageFormat) -> &'static str {
        match format {
            ImageFormat::Raster => "-Tpng",
            ImageFormat::Vector => "-Tsvg",
        }
    }
}

impl RenderEngine for GraphvizRenderer {
    fn render(
        &self,
        graph: &GraphDescription,
        format: ImageFormat,
    ) -> Result<Vec<u8>, RenderError> {
        let source = dot_source(graph)?;

        let mut child = Command::new(&self.program)
            .arg(Self::format_flag(format))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // stdin is piped, so take() cannot fail; scope drops the handle
        // to close the pipe before waiting.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RenderError::Engine {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        tracing::debug!(
            format = %format,
            bytes = output.stdout.len(),
            "graph rendered"
        );
        Ok(output.stdout)
    }
}
