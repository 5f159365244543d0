/// Reported when a request carries no `x-forwarded-for` header.
pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";
