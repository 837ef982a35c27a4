// Command surface: the operations an interactive front end calls.

pub mod daily_log;
pub mod insight;
pub mod onboarding;
pub mod overview;
pub mod share;
