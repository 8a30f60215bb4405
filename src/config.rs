//! Scene configuration.
//!
//! Every tunable value of the demo lives here with its default. A JSON file
//! may override any subset of fields; missing fields keep their defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 24-bit RGB color written as `"#rrggbb"` in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub u32);

impl HexColor {
    pub const WHITE: HexColor = HexColor(0xffffff);
    pub const BLACK: HexColor = HexColor(0x000000);

    /// sRGB channels scaled to 0..1, in the order r, g, b
    pub fn to_rgb(self) -> [f32; 3] {
        let channel = |shift: u32| ((self.0 >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }

    /// Channels converted to linear light for shading
    pub fn to_linear_rgb(self) -> [f32; 3] {
        self.to_rgb().map(|c| {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(format!("expected #rrggbb, got {:?}", value));
        }
        u32::from_str_radix(digits, 16)
            .map(HexColor)
            .map_err(|e| format!("invalid color {:?}: {}", value, e))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientLightConfig {
    pub color: HexColor,
    pub intensity: f32,
}

impl Default for AmbientLightConfig {
    fn default() -> Self {
        Self {
            color: HexColor::WHITE,
            intensity: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub color: HexColor,
    pub intensity: f32,
    pub position: [f32; 3],
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            color: HexColor::WHITE,
            intensity: 0.3,
            position: [2.0, 2.0, -1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLightConfig {
    pub color: HexColor,
    pub intensity: f32,
    pub position: [f32; 3],
    /// Cutoff distance, 0 for unlimited
    pub distance: f32,
    pub decay: f32,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self {
            color: HexColor::WHITE,
            intensity: 0.3,
            position: [-1.0, 1.0, 0.0],
            distance: 0.0,
            decay: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotLightConfig {
    pub color: HexColor,
    pub intensity: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub distance: f32,
    /// Cone half-angle in radians
    pub angle: f32,
    pub decay: f32,
}

impl Default for SpotLightConfig {
    fn default() -> Self {
        Self {
            color: HexColor::WHITE,
            intensity: 0.4,
            position: [0.0, 2.0, 2.0],
            target: [0.0, 0.0, 0.0],
            distance: 10.0,
            angle: std::f32::consts::PI * 0.3,
            decay: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub color: HexColor,
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            width_segments: 32,
            height_segments: 32,
            color: HexColor(0x800080),
            metalness: 0.0,
            roughness: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneConfig {
    pub size: f32,
    /// Height of the ground plane
    pub elevation: f32,
    pub color: HexColor,
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            size: 5.0,
            elevation: -0.5,
            color: HexColor::WHITE,
            metalness: 0.0,
            roughness: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowDecalConfig {
    pub size: f32,
    /// Offset above the ground plane, avoids z-fighting
    pub lift: f32,
    pub color: HexColor,
    pub texture: PathBuf,
}

impl Default for ShadowDecalConfig {
    fn default() -> Self {
        Self {
            size: 1.5,
            lift: 0.01,
            color: HexColor::BLACK,
            texture: PathBuf::from("textures/simpleShadow.png"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 100.0,
            position: [1.0, 1.0, 2.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::MAX,
        }
    }
}

/// Complete demo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub ambient_light: AmbientLightConfig,
    pub directional_light: DirectionalLightConfig,
    pub point_light: PointLightConfig,
    pub spot_light: SpotLightConfig,
    pub sphere: SphereConfig,
    pub plane: PlaneConfig,
    pub shadow: ShadowDecalConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scene configuration")
    }

    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_parses_and_prints() {
        let color = HexColor::try_from("#800080".to_string()).unwrap();
        assert_eq!(color, HexColor(0x800080));
        assert_eq!(color.to_string(), "#800080");
        assert_eq!(color.to_rgb(), [128.0 / 255.0, 0.0, 128.0 / 255.0]);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(HexColor::WHITE.to_linear_rgb(), [1.0, 1.0, 1.0]);
        assert_eq!(HexColor::BLACK.to_linear_rgb(), [0.0, 0.0, 0.0]);
        let [r, _, _] = HexColor(0x800080).to_linear_rgb();
        assert!((r - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn hex_color_rejects_garbage() {
        assert!(HexColor::try_from("purple".to_string()).is_err());
        assert!(HexColor::try_from("#12345".to_string()).is_err());
        assert!(HexColor::try_from("#zzzzzz".to_string()).is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SceneConfig::from_json_str(
            r##"{ "sphere": { "color": "#ff0000" }, "controls": { "damping_factor": 0.1 } }"##,
        )
        .unwrap();
        assert_eq!(config.sphere.color, HexColor(0xff0000));
        assert_eq!(config.sphere.roughness, 0.7);
        assert_eq!(config.controls.damping_factor, 0.1);
        assert!(config.controls.enable_damping);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SceneConfig::from_json_str("{}").unwrap(), SceneConfig::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(SceneConfig::from_json_str("{ not json").is_err());
        assert!(SceneConfig::from_json_str(r#"{ "plane": { "color": 12 } }"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.json"));
    }
}
