//! Icon entity - parameters of the application icon set

use crate::domain::value_objects::HexColor;
use crate::error::{AssetError, AssetResult};

/// Largest edge the ICO container can describe
pub const ICO_MAX_SIZE: u32 = 256;

/// Largest edge we agree to render
pub const MAX_RENDER_SIZE: u32 = 1024;

/// Parameters shared by every rendered size
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    /// Pixel sizes to render; the largest becomes the PNG
    pub sizes: Vec<u32>,
    /// Short label drawn in the centre
    pub label: String,
    pub background: HexColor,
    pub foreground: HexColor,
    /// Corner radius as a fraction of the edge
    pub corner_ratio: f32,
    /// Label pixel size as a fraction of the edge
    pub font_ratio: f32,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            sizes: vec![16, 32, 48, 64, 128, 256, 512],
            label: "LX".to_string(),
            background: HexColor::rgb(0x14, 0x14, 0x14),
            foreground: HexColor::rgb(0xFF, 0xFF, 0xFF),
            corner_ratio: 0.18,
            font_ratio: 0.54,
        }
    }
}

impl IconSpec {
    /// Check sizes and label before anything is rendered
    pub fn validate(&self) -> AssetResult<()> {
        if self.sizes.is_empty() {
            return Err(AssetError::InvalidIconSpec("no sizes configured".into()));
        }
        if let Some(bad) = self
            .sizes
            .iter()
            .find(|s| **s == 0 || **s > MAX_RENDER_SIZE)
        {
            return Err(AssetError::InvalidIconSpec(format!(
                "size {} outside 1..={}",
                bad, MAX_RENDER_SIZE
            )));
        }
        if self.label.trim().is_empty() {
            return Err(AssetError::InvalidIconSpec("label is empty".into()));
        }
        if let Some(bad) = self.ico_sizes().iter().find(|s| **s > ICO_MAX_SIZE) {
            return Err(AssetError::InvalidIconSpec(format!(
                "ICO frame {} exceeds {}",
                bad, ICO_MAX_SIZE
            )));
        }
        Ok(())
    }

    /// Size written as the flat PNG: the largest one
    pub fn png_size(&self) -> Option<u32> {
        self.sizes.iter().copied().max()
    }

    /// Sizes bundled into ICO files: every size except the largest,
    /// ascending and without duplicates
    pub fn ico_sizes(&self) -> Vec<u32> {
        let Some(largest) = self.png_size() else {
            return Vec::new();
        };
        let mut frames: Vec<u32> = self
            .sizes
            .iter()
            .copied()
            .filter(|s| *s != largest)
            .collect();
        frames.sort_unstable();
        frames.dedup();
        if frames.is_empty() {
            // single size: reuse it as the only frame
            frames.push(largest);
        }
        frames
    }

    /// Corner radius in pixels for an edge
    pub fn corner_radius(&self, size: u32) -> u32 {
        (size as f32 * self.corner_ratio) as u32
    }

    /// Label pixel size for an edge
    pub fn font_px(&self, size: u32) -> u32 {
        (size as f32 * self.font_ratio) as u32
    }
}
