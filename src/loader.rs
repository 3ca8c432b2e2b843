use anyhow::{Context, Result};
use log::debug;
use opencv::{self as cv, core::MatTraitConst};

use crate::convert;

/// Decodes the image at `path` into a `Mat`, either grayscale or RGBA.
///
/// Decoding goes through the `image` crate, so any format it understands
/// works here and a missing or corrupt file surfaces as an error.
pub fn load_image(path: &str, grayscale: bool) -> Result<cv::core::Mat> {
    let decoded = image::open(path).with_context(|| format!("failed to load image at {path}"))?;
    let mat = if grayscale {
        convert::gray_image_to_mat(&decoded.to_luma8())?
    } else {
        convert::rgba_image_to_mat(&decoded.to_rgba8())?
    };
    debug!(
        "loaded {path}: {}x{} ({} channel(s))",
        mat.cols(),
        mat.rows(),
        mat.channels()
    );
    Ok(mat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = load_image("assets/does-not-exist.png", true).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load image"));
    }

    #[test]
    fn grayscale_load_yields_a_single_channel() {
        let mat = load_image("assets/template.png", true).unwrap();

        assert_eq!(mat.channels(), 1);
        assert!(mat.cols() > 0);
        assert!(mat.rows() > 0);
    }

    #[test]
    fn color_load_yields_four_channels() {
        let mat = load_image("assets/template.png", false).unwrap();
        assert_eq!(mat.channels(), 4);
    }
}
