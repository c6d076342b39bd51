/// Backend route that starts the Yahoo sign-in redirect.
pub const DEFAULT_LOGIN_URL: &str = "http://localhost:8080/login";
