//! Operations wiring the fspopulate CLI to the core plan and the filesystem.

pub mod ops_check;
pub mod ops_plan;
pub mod ops_populate;
