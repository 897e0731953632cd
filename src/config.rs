// Off-site destinations. The account links point at the app shell, which is
// a separate deployment from this site.

#[cfg(debug_assertions)]
pub const LOGIN_URL: &str = "http://localhost:3000/login"; // Local app shell when developing
#[cfg(not(debug_assertions))]
pub const LOGIN_URL: &str = "https://app.herald.sh/login";

#[cfg(debug_assertions)]
pub const REGISTER_URL: &str = "http://localhost:3000/register"; // Local app shell when developing
#[cfg(not(debug_assertions))]
pub const REGISTER_URL: &str = "https://app.herald.sh/register";

pub const DOCS_URL: &str = "https://docs.herald.sh/";
