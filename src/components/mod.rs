//! Shared presentational components.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration and delegate rendering details here.

pub mod field_value;
pub mod nav_bar;
