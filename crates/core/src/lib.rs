//! Domain logic for the episode listing service.
//!
//! Pure types and helpers with no I/O so they can be shared by the
//! repository layer, the HTTP layer and tests alike.

pub mod listing;
pub mod pagination;
pub mod types;
