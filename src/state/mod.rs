//! Reactive application state provided via context from the root component.
//!
//! ARCHITECTURE
//! ============
//! State lives in `RwSignal`s owned by `App`, never in module-level statics,
//! so the credential gate and pages share one explicitly-owned session.

pub mod session;
