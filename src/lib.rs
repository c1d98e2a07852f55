//! wordgrid (workspace facade crate).
//!
//! This package keeps the public `wordgrid::{types, core, engine}` API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use wordgrid_core as core;
pub use wordgrid_engine as engine;
pub use wordgrid_types as types;
