//! 印刷位置模型

use serde::{Deserialize, Serialize};

/// 單一位置可接受的最大印刷顏色數
pub const MAX_COLORS: u32 = 200;

/// 單一印刷位置的選項（前胸、後背、袖子等）
///
/// 加購項目彼此獨立，可同時啟用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOptions {
    /// 印刷顏色數
    pub num_colors: u32,

    /// CMYK 製版（一次性費用）
    #[serde(default)]
    pub cmyk_setup: bool,

    /// 特殊位置
    #[serde(default)]
    pub special_location: bool,

    /// 大面積特殊印刷
    #[serde(default)]
    pub bulk_special: bool,

    /// 合成纖維布料
    #[serde(default)]
    pub synthetic_fabric: bool,

    /// 特殊油墨（按顏色數計費）
    #[serde(default)]
    pub specialty_inks: bool,

    /// 反光 / 夜光 / 水性油墨
    #[serde(default)]
    pub reflective_glow_water: bool,
}

impl LocationOptions {
    /// 創建不含任何加購項目的印刷位置
    pub fn new(num_colors: u32) -> Self {
        Self {
            num_colors,
            cmyk_setup: false,
            special_location: false,
            bulk_special: false,
            synthetic_fabric: false,
            specialty_inks: false,
            reflective_glow_water: false,
        }
    }

    /// 建構器模式：CMYK 製版
    pub fn with_cmyk_setup(mut self, enabled: bool) -> Self {
        self.cmyk_setup = enabled;
        self
    }

    /// 建構器模式：特殊位置
    pub fn with_special_location(mut self, enabled: bool) -> Self {
        self.special_location = enabled;
        self
    }

    /// 建構器模式：大面積特殊印刷
    pub fn with_bulk_special(mut self, enabled: bool) -> Self {
        self.bulk_special = enabled;
        self
    }

    /// 建構器模式：合成纖維布料
    pub fn with_synthetic_fabric(mut self, enabled: bool) -> Self {
        self.synthetic_fabric = enabled;
        self
    }

    /// 建構器模式：特殊油墨
    pub fn with_specialty_inks(mut self, enabled: bool) -> Self {
        self.specialty_inks = enabled;
        self
    }

    /// 建構器模式：反光 / 夜光 / 水性油墨
    pub fn with_reflective_glow_water(mut self, enabled: bool) -> Self {
        self.reflective_glow_water = enabled;
        self
    }

    /// 深色衣物需要的顏色數（多一層打底）
    pub fn colors_plus_underbase(&self) -> u32 {
        self.num_colors.saturating_add(1)
    }

    /// 是否有任何加購項目
    pub fn has_add_ons(&self) -> bool {
        self.cmyk_setup
            || self.special_location
            || self.bulk_special
            || self.synthetic_fabric
            || self.specialty_inks
            || self.reflective_glow_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_builder() {
        let location = LocationOptions::new(3)
            .with_cmyk_setup(true)
            .with_specialty_inks(true);

        assert_eq!(location.num_colors, 3);
        assert_eq!(location.colors_plus_underbase(), 4);
        assert!(location.cmyk_setup);
        assert!(location.specialty_inks);
        assert!(!location.bulk_special);
        assert!(location.has_add_ons());
        assert!(!LocationOptions::new(1).has_add_ons());
    }

    #[test]
    fn test_deserialize_missing_flags() {
        let location: LocationOptions =
            serde_json::from_str(r#"{"numColors": 2, "bulkSpecial": true}"#).unwrap();

        assert_eq!(location, LocationOptions::new(2).with_bulk_special(true));
    }

    #[test]
    fn test_deserialize_requires_colors() {
        let result = serde_json::from_str::<LocationOptions>(r#"{"cmykSetup": true}"#);
        assert!(result.is_err());
    }
}
