pub mod a001_bot_event;
pub mod a002_ip_aggregate;
pub mod a003_path_aggregate;
pub mod a004_attack;
pub mod a005_submission;
pub mod filters;
