#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, relay is served from the same origin
}

/// Where a form posts. `FORM_ENDPOINT_OVERRIDE` at build time sends every form
/// straight to that URL instead of the backend relay.
pub fn relay_url(relay_path: &str) -> String {
    match option_env!("FORM_ENDPOINT_OVERRIDE") {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!("{}{}", get_backend_url(), relay_path),
    }
}
