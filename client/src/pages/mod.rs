pub mod dashboard;
pub mod discover_schemes;
pub mod get_health_id;
pub mod home;
pub mod login;
pub mod partner_with_us;
pub mod schedule_demo;
pub mod signup;
pub mod unauthorized;
pub mod verify_account;
