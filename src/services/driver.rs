use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbImage;
use mosaic_quant::{ColorCatalog, Mosaicker, QuantizedMosaic};

use crate::error::AppError;
use crate::export::{render_build_file, render_part_list};
use crate::models::MosaicConfig;
use crate::rendering::{
    default_image_ext, from_lab_image, resize_to_tiles, save_image, to_lab_image,
};

/// Runs repaint passes of one source image against one catalog.
///
/// The source is kept untouched; every pass starts again from it, so a
/// parameter change is simply another call to [`repaint`](Self::repaint).
pub struct MosaicDriver {
    catalog: ColorCatalog,
    source: RgbImage,
}

/// Outcome of one pass
#[derive(Debug)]
pub struct RepaintResult {
    /// The painted mosaic, or the sharpened source when the mosaic is off
    pub image: RgbImage,
    /// Per-cell choices; `None` when the mosaic is off
    pub mosaic: Option<QuantizedMosaic>,
}

/// Where and what to write after a pass
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Path without extension; every output shares it
    pub stem: PathBuf,
    /// Image extension, which also picks the encoder
    pub image_ext: String,
    pub build_file: bool,
    pub part_list: bool,
}

impl OutputOptions {
    pub fn new(stem: impl Into<PathBuf>) -> Self {
        Self {
            stem: stem.into(),
            image_ext: "jpg".to_string(),
            build_file: false,
            part_list: false,
        }
    }

    /// Outputs beside `input` as `<stem>-mosaic.*`, with the image in the
    /// input's own format.
    pub fn for_input(input: &Path) -> Self {
        let mut stem = input.with_extension("").into_os_string();
        stem.push("-mosaic");
        Self {
            image_ext: default_image_ext(input),
            ..Self::new(stem)
        }
    }

    fn path_with(&self, ext: &str) -> PathBuf {
        let mut name = self.stem.clone().into_os_string();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }

    pub fn image_path(&self) -> PathBuf {
        self.path_with(&self.image_ext)
    }

    pub fn build_file_path(&self) -> PathBuf {
        self.path_with("ldr")
    }

    pub fn part_list_path(&self) -> PathBuf {
        self.path_with("csv")
    }
}

impl MosaicDriver {
    pub fn new(catalog: ColorCatalog, source: RgbImage) -> Self {
        Self { catalog, source }
    }

    pub fn catalog(&self) -> &ColorCatalog {
        &self.catalog
    }

    pub fn source(&self) -> &RgbImage {
        &self.source
    }

    /// Resize, sharpen and quantize the source with `config`.
    ///
    /// Nothing is written here; a failed pass leaves no partial output.
    pub fn repaint(&self, config: &MosaicConfig) -> Result<RepaintResult, AppError> {
        let started = Instant::now();
        let tiles = config.effective_tiles();

        let resized = resize_to_tiles(&self.source, tiles);
        let sharpened = config.unsharp_mask().apply(&resized);

        if !config.show_mosaic {
            tracing::info!(
                width = sharpened.width(),
                height = sharpened.height(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Sharpened image only, mosaic disabled"
            );
            return Ok(RepaintResult {
                image: sharpened,
                mosaic: None,
            });
        }

        let mosaicker = Mosaicker::new(self.catalog.clone())
            .tiles_long_side(tiles)
            .luminance_weight(config.luminance_weight());

        let mut lab = to_lab_image(&sharpened);
        let mosaic = mosaicker.mosaic(&mut lab)?;

        tracing::info!(
            rows = mosaic.rows(),
            cols = mosaic.cols(),
            width = lab.width(),
            height = lab.height(),
            colors = self.catalog.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Mosaic pass complete"
        );

        Ok(RepaintResult {
            image: from_lab_image(&lab),
            mosaic: Some(mosaic),
        })
    }
}

impl RepaintResult {
    /// Write the image and, when the mosaic is on, the requested build
    /// file and part list. Returns the written paths.
    pub fn write(
        &self,
        catalog: &ColorCatalog,
        options: &OutputOptions,
    ) -> Result<Vec<PathBuf>, AppError> {
        let mut written = Vec::new();

        let image_path = options.image_path();
        save_image(&self.image, &image_path)?;
        written.push(image_path);

        if let Some(mosaic) = &self.mosaic {
            if options.build_file {
                let path = options.build_file_path();
                write_text(&path, &render_build_file(mosaic, catalog))?;
                written.push(path);
            }
            if options.part_list {
                let path = options.part_list_path();
                write_text(&path, &render_part_list(mosaic, catalog))?;
                written.push(path);
            }
        }
        Ok(written)
    }
}

fn write_text(path: &Path, text: &str) -> Result<(), AppError> {
    std::fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Wrote file");
    Ok(())
}
