#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;

/// How long the simulated submitter pretends the network takes.
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;

/// Submissions still pending after this long are reported as failed.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// Contact endpoint baked in at build time (`MEMOTAG_CONTACT_URL=/api/contact trunk build`).
/// Relative paths are resolved against the backend URL. Unset means the page
/// only simulates submissions.
pub fn contact_endpoint() -> Option<String> {
    resolve_endpoint(option_env!("MEMOTAG_CONTACT_URL"), get_backend_url())
}

fn resolve_endpoint(raw: Option<&str>, backend_url: &str) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Some(raw.to_string())
    } else {
        Some(format!("{}/{}", backend_url.trim_end_matches('/'), raw.trim_start_matches('/')))
    }
}
