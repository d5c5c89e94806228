//! HTML-to-PDF conversion.
//!
//! Rendering is delegated entirely to an external `wkhtmltopdf` binary: the
//! HTML goes to a temp file, the converter produces A4 output, and the temp
//! directory is removed when it drops, on success and on failure. A missing or
//! broken converter surfaces as a classified error response, never a panic.

use frontend_core::AppError;
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, instrument};

pub struct PdfRenderer {
    binary: String,
    timeout: Duration,
}

impl PdfRenderer {
    pub fn new(binary: String, timeout: Duration) -> Self {
        Self { binary, timeout }
    }

    /// Convert rendered HTML into PDF bytes.
    #[instrument(skip(self, html), fields(html_len = html.len()))]
    pub async fn render(&self, html: &str) -> Result<Vec<u8>, AppError> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("document.html");
        let output = dir.path().join("document.pdf");

        tokio::fs::write(&input, html).await?;

        let input_arg = input
            .to_str()
            .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("non-UTF-8 temp path")))?;
        let output_arg = output
            .to_str()
            .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("non-UTF-8 temp path")))?;

        self.run_converter(&[
            "--quiet",
            "--page-size",
            "A4",
            "--encoding",
            "utf-8",
            input_arg,
            output_arg,
        ])
        .await?;

        let bytes = tokio::fs::read(&output).await?;
        info!(size = bytes.len(), "PDF rendered");
        Ok(bytes)
    }

    /// Run the converter with a hard timeout, capturing stderr for the logs.
    async fn run_converter(&self, args: &[&str]) -> Result<(), AppError> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| {
                AppError::InternalError(anyhow::anyhow!(
                    "{} timed out after {} seconds",
                    self.binary,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                AppError::InternalError(anyhow::anyhow!(
                    "failed to start {} (is it installed?): {}",
                    self.binary,
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(binary = %self.binary, stderr = %stderr, "PDF conversion failed");
            return Err(AppError::InternalError(anyhow::anyhow!(
                "PDF conversion failed: {}",
                stderr
            )));
        }

        Ok(())
    }
}

/// Restrict a download filename to a safe character set, preserving the
/// `.pdf` extension.
pub fn sanitize_filename(name: &str) -> String {
    let stem: String = name
        .trim()
        .trim_end_matches(".pdf")
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "document".to_string() } else { stem };
    format!("{stem}.pdf")
}
