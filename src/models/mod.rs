pub mod video;

pub use video::{PlaybackInfo, PlaybackResolution, SearchEntry, ThumbnailInfo, VideoSummary};
