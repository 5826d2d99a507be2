//! Domain model structs and DTOs.
//!
//! Each submodule contains the `FromRow` struct matching the rows a
//! repository selects, plus the `Serialize` view types handed to the API
//! layer.

pub mod episode;
pub mod episode_video;
pub mod series;
