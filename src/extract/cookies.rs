//! Request-scoped cookie file for the extraction backend
//!
//! The configured bundle is a base64-encoded Netscape cookie file. It is
//! decoded into a temporary file that lives exactly as long as the
//! [`CookieFile`] value; dropping it removes the file.

use std::io::Write;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Decoded cookie bundle on disk
#[derive(Debug)]
pub struct CookieFile {
    file: NamedTempFile,
}

impl CookieFile {
    /// Decode a base64 bundle into a fresh temporary file
    ///
    /// Whitespace inside the bundle (line-wrapped env values) is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the bundle is not valid base64, is empty, or the
    /// file cannot be written
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| Error::Cookies(format!("invalid base64: {e}")))?;

        if bytes.is_empty() {
            return Err(Error::Cookies("cookie bundle is empty".to_string()));
        }

        let mut file = tempfile::Builder::new()
            .prefix("media-relay-cookies-")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;

        tracing::debug!(path = %file.path().display(), bytes = bytes.len(), "cookie file written");
        Ok(Self { file })
    }

    /// Path to hand to the backend
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NETSCAPE: &str = "# Netscape HTTP Cookie File\n.youtube.com\tTRUE\t/\tTRUE\t0\tPREF\tf1=1\n";

    fn encode(s: &str) -> String {
        general_purpose::STANDARD.encode(s)
    }

    #[test]
    fn writes_decoded_contents() {
        let cookies = CookieFile::from_base64(&encode(NETSCAPE)).unwrap();
        let written = std::fs::read_to_string(cookies.path()).unwrap();
        assert_eq!(written, NETSCAPE);
    }

    #[test]
    fn tolerates_wrapped_base64() {
        let encoded = encode(NETSCAPE);
        let (head, tail) = encoded.split_at(10);
        let wrapped = format!("{head}\n  {tail}\n");
        let cookies = CookieFile::from_base64(&wrapped).unwrap();
        assert_eq!(std::fs::read_to_string(cookies.path()).unwrap(), NETSCAPE);
    }

    #[test]
    fn removes_file_on_drop() {
        let cookies = CookieFile::from_base64(&encode(NETSCAPE)).unwrap();
        let path = cookies.path().to_path_buf();
        assert!(path.exists());
        drop(cookies);
        assert!(!path.exists());
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(matches!(
            CookieFile::from_base64("not base64 !!!"),
            Err(Error::Cookies(_))
        ));
        assert!(matches!(CookieFile::from_base64(""), Err(Error::Cookies(_))));
    }
}
