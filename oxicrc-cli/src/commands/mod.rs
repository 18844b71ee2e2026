//! Command implementations for OxiCRC CLI.

pub mod check;
pub mod list;
pub mod reciprocal;
pub mod sum;

pub use check::cmd_check;
pub use list::cmd_list;
pub use reciprocal::cmd_reciprocal;
pub use sum::{Input, cmd_sum};
