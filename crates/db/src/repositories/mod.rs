//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod episode_repo;
pub mod episode_video_repo;

pub use episode_repo::EpisodeRepo;
pub use episode_video_repo::EpisodeVideoRepo;
