pub mod api {
    pub const BASE_URL: &str = "https://codeforces.com/api";
    pub const STATUS_FROM: u32 = 1;
    pub const STATUS_COUNT: u32 = 100000;
}
pub mod retry {
    use std::time::Duration;
    pub const RETRY_COUNT: u32 = 3;
    pub const RETRY_DELAY: Duration = Duration::from_millis(500);
    pub const THROTTLE_DELAY: Duration = Duration::from_secs(2);
}
pub mod session {
    pub const VERBOSE: bool = false;
    pub const USER_AGENT: &str = concat!("cf-tracker/", env!("CARGO_PKG_VERSION"));
}
pub mod tracker {
    use std::time::Duration;
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);
    pub const FAILURE_ALERT: u32 = 5;
}
pub mod registration {
    pub const MAX_MEMBERS: usize = 4;
    pub const MEMBER_SLOTS: usize = 5;
    pub const NAME_LEN: usize = 50;
    pub const EMAIL_LEN: usize = 50;
    pub const PHONE_LEN: usize = 11;
    pub const UNI_ID_LEN: usize = 7;
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}
