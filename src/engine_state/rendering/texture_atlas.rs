//! Texture atlas addressing.
//!
//! Every block texture lives in one square image split into a grid of equally sized
//! cells. The atlas maps a cell coordinate to normalized UV corners, inset by half a pixel
//! so neighbouring cells never bleed into each other under filtering.

use std::path::Path;

use image::RgbaImage;
use log::info;

use crate::core::EngineError;

use super::meshing::FACE_UV_TEMPLATE;

/// A square image subdivided into a grid of block textures.
///
/// The pixel data is optional: an atlas created with [`TextureAtlas::new`] only knows its
/// geometry, which is all meshing needs. [`TextureAtlas::load`] additionally keeps the
/// decoded pixels for uploading to the GPU.
#[derive(Debug, Clone)]
pub struct TextureAtlas {
    image_size: u32,
    cell_size: u32,
    textures_per_row: f32,
    cell_uv_size: f32,
    pixel_uv_size: f32,
    image: Option<RgbaImage>,
}

impl TextureAtlas {
    /// Creates an atlas description for an `image_size`² image holding `cell_size`² textures.
    pub fn new(image_size: u32, cell_size: u32) -> Self {
        let image_size = image_size.max(1);
        let cell_size = cell_size.clamp(1, image_size);
        let textures_per_row = image_size as f32 / cell_size as f32;
        Self {
            image_size,
            cell_size,
            textures_per_row,
            cell_uv_size: 1.0 / textures_per_row,
            pixel_uv_size: 1.0 / image_size as f32,
            image: None,
        }
    }

    /// Decodes an atlas image from disk.
    ///
    /// The image must be square and its side must be a multiple of `cell_size`.
    pub fn load(path: impl AsRef<Path>, cell_size: u32) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let atlas = Self::from_image(image::load_from_memory(&bytes)?.to_rgba8(), cell_size)?;
        info!(
            "Loaded {}x{} texture atlas from {}",
            atlas.image_size,
            atlas.image_size,
            path.display()
        );
        Ok(atlas)
    }

    /// Wraps already decoded pixels as an atlas.
    pub fn from_image(image: RgbaImage, cell_size: u32) -> Result<Self, EngineError> {
        let (width, height) = image.dimensions();
        if width != height || cell_size == 0 || width % cell_size != 0 {
            return Err(EngineError::InvalidAtlas {
                width,
                height,
                cell_size,
            });
        }

        let mut atlas = Self::new(width, cell_size);
        atlas.image = Some(image);
        Ok(atlas)
    }

    /// Returns the UV corners of the given grid cell as
    /// `xMin, yMin, xMin, yMax, xMax, yMax, xMax, yMin`.
    pub fn texture_coords(&self, (cell_x, cell_y): (u32, u32)) -> [f32; 8] {
        let x_min = cell_x as f32 * self.cell_uv_size + 0.5 * self.pixel_uv_size;
        let y_min = cell_y as f32 * self.cell_uv_size + 0.5 * self.pixel_uv_size;
        let x_max = x_min + self.cell_uv_size - self.pixel_uv_size;
        let y_max = y_min + self.cell_uv_size - self.pixel_uv_size;

        let mut uv = [0.0; 8];
        for (corner, [u, v]) in FACE_UV_TEMPLATE.iter().enumerate() {
            uv[corner * 2] = if *u == 0.0 { x_min } else { x_max };
            uv[corner * 2 + 1] = if *v == 0.0 { y_min } else { y_max };
        }
        uv
    }

    /// Number of cells along one side of the atlas.
    pub fn textures_per_row(&self) -> f32 {
        self.textures_per_row
    }

    pub fn image_size(&self) -> u32 {
        self.image_size
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Decoded pixels, when the atlas was loaded from an image.
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_the_face_uv_template() {
        let atlas = TextureAtlas::new(64, 16);
        let (low, high) = (0.0078125, 0.2421875);
        assert_eq!(
            atlas.texture_coords((0, 0)),
            [low, low, low, high, high, high, high, low]
        );
        assert_eq!(FACE_UV_TEMPLATE[1], [0.0, 1.0]);
    }
}
