//! Fleet services
//!
//! This module contains the command surface for fleet operations:
//! navigation, docking and combat, all addressed by entity id against
//! the galaxy registry. The entities enforce their own rules; services
//! only resolve ids into borrows and fan out fleet-wide orders.

pub mod combat;
pub mod docking;
pub mod navigation;
