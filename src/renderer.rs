use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_WKHTMLTOPDF: &str = "wkhtmltopdf";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to run {}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} exited with {status}: {stderr}", program.display())]
    Failed {
        program: PathBuf,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("renderer reported success but {} was not written", path.display())]
    MissingOutput { path: PathBuf },
}

/// Turns an HTML fragment into a PDF file at `output`.
pub trait PdfRenderer {
    fn render(&self, html: &str, output: &Path) -> Result<(), RenderError>;
}

/// Renders through the `wkhtmltopdf` program, feeding the page on stdin.
#[derive(Debug, Clone)]
pub struct Wkhtmltopdf {
    program: PathBuf,
}

impl Wkhtmltopdf {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl PdfRenderer for Wkhtmltopdf {
    fn render(&self, html: &str, output: &Path) -> Result<(), RenderError> {
        let spawn_error = |source| RenderError::Spawn {
            program: self.program.clone(),
            source,
        };

        debug!(program = %self.program.display(), output = %output.display(), "rendering PDF");

        let mut child = Command::new(&self.program)
            .args(["--quiet", "--encoding", "utf-8", "-"])
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // A renderer that exits early closes the pipe; its exit status says why.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(wrap_document(html).as_bytes()) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(spawn_error(e)),
                _ => {}
            }
        }

        let result = child.wait_with_output().map_err(spawn_error)?;
        if !result.status.success() {
            return Err(RenderError::Failed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        if !output.is_file() {
            return Err(RenderError::MissingOutput {
                path: output.to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Wraps an article fragment in a minimal UTF-8 document so non-ASCII text
/// survives the renderer's charset detection.
pub fn wrap_document(body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
</head>
<body>
{body_html}
</body>
</html>
"#
    )
}
