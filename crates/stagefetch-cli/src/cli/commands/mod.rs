mod arches;
mod checksum;
mod fetch;
mod list;

pub use arches::run_arches;
pub use checksum::run_checksum;
pub use fetch::run_fetch;
pub use list::run_list;
