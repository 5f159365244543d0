use std::time::Duration;

pub const SESSION_ID_LENGTH: usize = 10;
/// How long a finished session stays readable before it is dropped.
pub const FINISHED_SESSION_TTL: Duration = Duration::from_secs(10 * 60);
