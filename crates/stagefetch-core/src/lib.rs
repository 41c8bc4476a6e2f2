pub mod config;
pub mod logging;

pub mod arch;
pub mod fetch;
pub mod listing;
pub mod pipeline;
pub mod retry;
pub mod select;
pub mod verify;
