pub mod badge;
pub mod practice_log;
