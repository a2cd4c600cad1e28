use anyhow::{Result, bail};
use tracing::debug;

/// Open an issue page in the user's default browser.
pub fn open_url(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        bail!("Refusing to open non-web URL: {url}");
    }
    debug!(url = url, "Opening URL in browser");
    open::that(url)?;
    Ok(())
}
