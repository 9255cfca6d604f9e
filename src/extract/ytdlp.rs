//! yt-dlp binding for the [`Extractor`] trait
//!
//! Runs `yt-dlp --dump-single-json` per attempt and reads the direct URL
//! out of the reported metadata. Nothing is downloaded.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use super::{ExtractCall, ExtractionResult, Extractor, FALLBACK_TITLE};
use crate::config::ExtractorConfig;
use crate::{Error, Result};

/// yt-dlp subprocess backend
#[derive(Debug, Clone)]
pub struct YtDlp {
    bin: PathBuf,
    timeout: Duration,
    user_agent: String,
    accept_language: String,
}

impl YtDlp {
    /// Create a backend from extractor configuration
    #[must_use]
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            bin: config.ytdlp_bin.clone(),
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
            accept_language: config.accept_language.clone(),
        }
    }

    /// Resolve the configured binary on `PATH`
    #[must_use]
    pub fn locate(&self) -> Option<PathBuf> {
        which::which(&self.bin).ok()
    }

    /// Report the installed yt-dlp version
    ///
    /// # Errors
    ///
    /// Returns error if the binary cannot be run
    pub async fn version(&self) -> Result<String> {
        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.bin)
                .arg("--version")
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| Error::Extraction("yt-dlp --version timed out".to_string()))?
        .map_err(|e| Error::Extraction(format!("failed to run {}: {e}", self.bin.display())))?;

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Command-line arguments for one call
    #[must_use]
    pub fn args(&self, call: &ExtractCall<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "--dump-single-json",
            "--skip-download",
            "--no-playlist",
            "--no-warnings",
            "--quiet",
            "--format",
            call.format,
            "--user-agent",
            self.user_agent.as_str(),
            "--add-header",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        args.push(format!("Accept-Language:{}", self.accept_language).into());

        if let Some(client) = call.player_client {
            args.push("--extractor-args".into());
            args.push(format!("youtube:player_client={client}").into());
        }

        if let Some(path) = call.cookie_file {
            args.push("--cookies".into());
            args.push(path.as_os_str().to_owned());
        }

        args.push("--".into());
        args.push(call.url.into());
        args
    }

    fn describe_failure(status: std::process::ExitStatus, stderr: &[u8]) -> String {
        let stderr = String::from_utf8_lossy(stderr);
        let last_line = stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("no error output");
        format!("yt-dlp exited with {status}: {last_line}")
    }
}

#[async_trait]
impl Extractor for YtDlp {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn extract(&self, call: &ExtractCall<'_>) -> Result<ExtractionResult> {
        let mut command = Command::new(&self.bin);
        command
            .args(self.args(call))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                Error::Extraction(format!("yt-dlp timed out after {}s", self.timeout.as_secs()))
            })?
            .map_err(|e| Error::Extraction(format!("failed to run {}: {e}", self.bin.display())))?;

        if !output.status.success() {
            return Err(Error::Extraction(Self::describe_failure(
                output.status,
                &output.stderr,
            )));
        }

        parse_info(&output.stdout)
    }
}

/// Subset of yt-dlp's info dict
#[derive(Debug, Deserialize)]
struct InfoDict {
    url: Option<String>,
    title: Option<String>,
    #[serde(default)]
    formats: Vec<FormatEntry>,
}

#[derive(Debug, Deserialize)]
struct FormatEntry {
    url: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Map yt-dlp JSON output to a result
///
/// The top-level `url` wins; otherwise the last format carrying a URL.
fn parse_info(stdout: &[u8]) -> Result<ExtractionResult> {
    let info: InfoDict = serde_json::from_slice(stdout)?;

    let direct_url = non_empty(info.url)
        .or_else(|| {
            info.formats
                .into_iter()
                .rev()
                .find_map(|f| non_empty(f.url))
        })
        .ok_or_else(|| Error::Extraction("no direct media URL in yt-dlp output".to_string()))?;

    let title = non_empty(info.title).unwrap_or_else(|| FALLBACK_TITLE.to_string());

    Ok(ExtractionResult { direct_url, title })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> YtDlp {
        YtDlp::new(&ExtractorConfig::default())
    }

    fn args_as_strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn prefers_top_level_url() {
        let json = br#"{"url":"https://cdn/top.mp4","title":"Clip","formats":[{"url":"https://cdn/f.mp4"}]}"#;
        let result = parse_info(json).unwrap();
        assert_eq!(result.direct_url, "https://cdn/top.mp4");
        assert_eq!(result.title, "Clip");
    }

    #[test]
    fn falls_back_to_last_format_with_url() {
        let json = br#"{"title":"Clip","formats":[{"url":"https://cdn/a.mp4"},{"url":"https://cdn/b.mp4"},{"format_id":"x"},{"url":""}]}"#;
        let result = parse_info(json).unwrap();
        assert_eq!(result.direct_url, "https://cdn/b.mp4");
    }

    #[test]
    fn missing_title_uses_fallback() {
        let result = parse_info(br#"{"url":"https://cdn/top.mp4"}"#).unwrap();
        assert_eq!(result.title, FALLBACK_TITLE);
    }

    #[test]
    fn no_url_anywhere_is_an_error() {
        let err = parse_info(br#"{"title":"Clip","formats":[{"format_id":"x"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(matches!(parse_info(b"not json"), Err(Error::Serialization(_))));
    }

    #[test]
    fn args_carry_format_headers_and_url_last() {
        let call = ExtractCall {
            url: "https://example.com/v/1",
            format: "best[ext=mp4]/best",
            player_client: None,
            cookie_file: None,
        };
        let args = args_as_strings(&backend().args(&call));

        assert!(args.contains(&"--skip-download".to_string()));
        assert!(args.contains(&"--no-playlist".to_string()));
        assert!(args.windows(2).any(|w| w[0] == "--format" && w[1] == "best[ext=mp4]/best"));
        assert!(args.iter().any(|a| a.starts_with("Accept-Language:")));
        assert!(!args.contains(&"--extractor-args".to_string()));
        assert!(!args.contains(&"--cookies".to_string()));
        assert_eq!(args[args.len() - 2], "--");
        assert_eq!(args[args.len() - 1], "https://example.com/v/1");
    }

    #[test]
    fn args_include_client_and_cookies_when_present() {
        let cookie_path = PathBuf::from("/tmp/cookies.txt");
        let call = ExtractCall {
            url: "https://youtu.be/abc12345678",
            format: "best",
            player_client: Some("ios"),
            cookie_file: Some(cookie_path.as_path()),
        };
        let args = args_as_strings(&backend().args(&call));

        assert!(args
            .windows(2)
            .any(|w| w[0] == "--extractor-args" && w[1] == "youtube:player_client=ios"));
        assert!(args.windows(2).any(|w| w[0] == "--cookies" && w[1] == "/tmp/cookies.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn failure_summary_uses_last_stderr_line() {
        use std::os::unix::process::ExitStatusExt;

        let status = std::process::ExitStatus::from_raw(256);
        let summary = YtDlp::describe_failure(
            status,
            b"WARNING: something\nERROR: Sign in to confirm your age\n\n",
        );
        assert!(summary.ends_with("ERROR: Sign in to confirm your age"));
    }
}
