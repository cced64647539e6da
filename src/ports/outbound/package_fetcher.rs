use crate::shared::Result;

/// PackageFetcher port for retrieving package archives
///
/// This port abstracts the transport used to download a .nupkg archive.
pub trait PackageFetcher {
    /// Downloads the archive at `url` and returns the full response body
    ///
    /// # Errors
    /// Returns `GraphError::Transport` if:
    /// - The request cannot be sent (DNS, connection, invalid URL)
    /// - The server answers with a non-success status code
    /// - The response body cannot be read
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
