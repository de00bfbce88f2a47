mod episode;
mod ids;

pub use episode::{Episode, EpisodeDetails};
pub use ids::EpisodeId;
