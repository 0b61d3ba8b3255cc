#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // backend started with `cargo run` on its default BIND_ADDR
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served by the backend itself
}

pub const TEAM_MEMBERS_PATH: &str = "/api/team-members";
pub const TESTIMONIALS_PATH: &str = "/api/testimonials";

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_backend_url(), path)
}
