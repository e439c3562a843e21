pub mod check_profile;
pub mod commands;
pub mod diff;
pub mod listen_for_commands;
pub mod notify_subscribers;
pub mod poll_profiles;
