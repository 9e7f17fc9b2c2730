use std::{
    fs::File,
    io::{self, Write},
};

use tracing::debug;
use ureq::http::StatusCode;
use url::Url;

use crate::{error::DownloadError, http_client::SHARED_AGENT};

/// Fetches `url` and streams the response body into `writer`.
///
/// `http` and `https` URLs go through the shared agent, which honors the
/// proxy environment variables. `file` URLs are read straight from the local
/// filesystem. A non-2xx response is a hard failure carrying the status line
/// and the requested URL; the response body is logged at debug level when it
/// can be read, purely as a diagnostic.
pub fn download<W: Write>(url: &str, writer: &mut W) -> Result<(), DownloadError> {
    let parsed = Url::parse(url).map_err(|source| DownloadError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    if parsed.scheme() == "file" {
        return copy_local(&parsed, writer);
    }

    let mut resp = SHARED_AGENT.get(url).call()?;

    let status = resp.status();
    if !status.is_success() {
        match resp.body_mut().read_to_string() {
            Ok(body) if !body.is_empty() => {
                debug!("contents of http response from {url}:\n{body}")
            }
            Ok(_) => {}
            Err(err) => debug!("could not read contents of response body: {err}"),
        }
        return Err(DownloadError::HttpStatus {
            status: status_line(status),
            url: url.to_string(),
        });
    }

    let mut reader = resp.body_mut().as_reader();
    io::copy(&mut reader, writer)?;
    Ok(())
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

// Url::to_file_path performs the platform-specific root mapping, including
// drive-letter roots on Windows.
fn copy_local<W: Write>(url: &Url, writer: &mut W) -> Result<(), DownloadError> {
    let path = url.to_file_path().map_err(|_| DownloadError::FileUrl {
        url: url.to_string(),
    })?;
    debug!("reading local index {}", path.display());
    let mut file = File::open(&path)?;
    io::copy(&mut file, writer)?;
    Ok(())
}
