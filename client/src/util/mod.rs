//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and page
//! logic so they can be swapped for in-memory versions under test.

pub mod storage;
