use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Configuration for the line detector.
///
/// Every field has a default, so partial JSON such as
/// `{"threshold": 80, "invert": true}` deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineDetectorParams {
    /// Binarization cutoff on blurred intensity. Pixels darker than this
    /// become foreground.
    pub threshold: u8,
    /// Height in pixels of the scanned band.
    pub scan_region_height: u32,
    /// Vertical placement of the band: 0 is top-aligned, 1 bottom-aligned.
    pub scan_region_position: f32,
    /// Pixels discarded at each horizontal edge of the band.
    pub scan_region_width_pad: u32,
    /// Contours with zeroth moment at or below this are ignored.
    ///
    /// Tune it against band height, camera resolution and line width.
    pub min_detection_area: u32,
    /// Negate every reported position, for upside-down camera mounts.
    pub invert: bool,
}

impl Default for LineDetectorParams {
    fn default() -> Self {
        Self {
            threshold: 100,
            scan_region_height: 50,
            scan_region_position: 0.0,
            scan_region_width_pad: 0,
            min_detection_area: 100,
            invert: false,
        }
    }
}

impl LineDetectorParams {
    /// Check the constraints that do not depend on the frame size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_region_height == 0 {
            return Err(ConfigError::ZeroRegionHeight);
        }
        if self.min_detection_area == 0 {
            return Err(ConfigError::ZeroMinArea);
        }
        let position = self.scan_region_position;
        if !position.is_finite() || !(0.0..=1.0).contains(&position) {
            return Err(ConfigError::InvalidRegionPosition { position });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = LineDetectorParams::default();
        assert_eq!(params.threshold, 100);
        assert_eq!(params.scan_region_height, 50);
        assert_eq!(params.min_detection_area, 100);
        assert!(!params.invert);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params: LineDetectorParams =
            serde_json::from_str(r#"{"threshold": 80, "invert": true}"#).expect("parse");
        assert_eq!(params.threshold, 80);
        assert!(params.invert);
        assert_eq!(params.scan_region_height, 50);
        assert_eq!(params.scan_region_width_pad, 0);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let params = LineDetectorParams {
            scan_region_height: 0,
            ..LineDetectorParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::ZeroRegionHeight));

        let params = LineDetectorParams {
            min_detection_area: 0,
            ..LineDetectorParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::ZeroMinArea));
    }

    #[test]
    fn rejects_position_outside_unit_interval() {
        for position in [-0.1f32, 1.5, f32::NAN] {
            let params = LineDetectorParams {
                scan_region_position: position,
                ..LineDetectorParams::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ConfigError::InvalidRegionPosition { .. })
            ));
        }
    }
}
