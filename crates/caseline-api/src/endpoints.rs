//! Endpoint path conventions of the PHP API.
//!
//! Pure string functions, mirroring how the backend routes requests.

pub const FETCH_CLIENTS: &str = "fetch_clients.php";
pub const SAVE_CLIENT: &str = "save_client.php";

/// Join a base URL and an endpoint path without doubling slashes.
pub fn url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}
