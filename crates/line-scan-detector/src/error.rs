/// Invalid detector configuration, or a configuration that does not fit the
/// frame it is applied to.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("scan region height must be positive")]
    ZeroRegionHeight,
    #[error("scan region height {region_height} exceeds frame height {frame_height}")]
    RegionTallerThanFrame {
        region_height: usize,
        frame_height: usize,
    },
    #[error("scan region position must be within [0, 1] (got {position})")]
    InvalidRegionPosition { position: f32 },
    #[error("scan region width pad {pad} leaves no columns in a frame {frame_width} pixels wide")]
    PadTooWide { pad: usize, frame_width: usize },
    #[error("minimum detection area must be positive")]
    ZeroMinArea,
}
