#[cfg(target_arch = "wasm32")]
use web_sys::{Storage, Window};

pub const ACCESS_TOKEN_KEY: &str = "access_token";

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Session access token of the signed-in administrator, if any.
#[cfg(target_arch = "wasm32")]
pub fn access_token() -> Option<String> {
    local_storage()
        .ok()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn access_token() -> Option<String> {
    None
}
