use crate::ports::outbound::DiagramRenderer;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::path::Path;
use std::process::Command;

/// Layout and executable settings for the Mermaid CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub command: String,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            command: "mmdc".to_string(),
            width: 1440,
            height: 1000,
            scale: 3,
        }
    }
}

/// MermaidCliRenderer adapter that runs `mmdc` as a blocking subprocess
///
/// Arguments are passed as an argv vector, never through a shell, so paths
/// with spaces or shell metacharacters are safe.
pub struct MermaidCliRenderer {
    settings: RenderSettings,
}

impl MermaidCliRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    fn build_command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.settings.command);
        cmd.arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output)
            .arg("--width")
            .arg(self.settings.width.to_string())
            .arg("--height")
            .arg(self.settings.height.to_string())
            .arg("--scale")
            .arg(self.settings.scale.to_string());
        cmd
    }

    fn render_error(&self, details: String) -> anyhow::Error {
        GraphError::Render {
            command: self.settings.command.clone(),
            details,
        }
        .into()
    }
}

impl Default for MermaidCliRenderer {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}

impl DiagramRenderer for MermaidCliRenderer {
    fn render(&self, input: &Path, output: &Path) -> Result<()> {
        let result = self
            .build_command(input, output)
            .output()
            .map_err(|e| self.render_error(format!("Failed to start renderer: {}", e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let stderr = stderr.trim();
            let details = if stderr.is_empty() {
                format!("Renderer exited with {}", result.status)
            } else {
                format!("Renderer exited with {}: {}", result.status, stderr)
            };
            return Err(self.render_error(details));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.settings.command
    }
}
