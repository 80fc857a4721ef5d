//! Hosting-provider URL resolution
//!
//! Turns a video-hosting page URL into a directly playable media URL by
//! driving the external `yt-dlp` tool. URLs that are not hosting pages pass
//! through unchanged. The probe engine only ever sees resolved URLs.

use std::process::Command;

use thiserror::Error;

/// Errors raised while resolving a hosting-provider page URL
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with status {status}: {stderr}")]
    Tool {
        tool: String,
        status: i32,
        stderr: String,
    },

    #[error("resolver returned no playable URL")]
    Empty,
}

/// Resolves hosting-provider page URLs to direct media URLs
pub struct UrlResolver {
    tool: String,
}

impl UrlResolver {
    pub fn new() -> Self {
        Self::with_tool("yt-dlp")
    }

    /// Override the resolver executable (tests point this at a stub).
    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// Whether `url` points at a hosting-provider page rather than a
    /// directly playable stream.
    pub fn is_hosted_page(url: &str) -> bool {
        url.contains("youtube.com") || url.contains("youtu.be")
    }

    /// Resolve `url` into a directly playable media URL.
    ///
    /// Non-hosting URLs pass through unchanged without touching the tool.
    pub fn resolve(&self, url: &str) -> Result<String, ResolveError> {
        if !Self::is_hosted_page(url) {
            return Ok(url.to_string());
        }

        tracing::debug!(url, tool = %self.tool, "resolving hosting-provider URL");
        let output = Command::new(&self.tool)
            .args(["--quiet", "--no-warnings", "--format", "best", "--get-url", url])
            .output()
            .map_err(|source| ResolveError::Spawn {
                tool: self.tool.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ResolveError::Tool {
                tool: self.tool.clone(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let direct = stdout.lines().next().unwrap_or("").trim();
        if direct.is_empty() {
            return Err(ResolveError::Empty);
        }
        Ok(direct.to_string())
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new()
    }
}
