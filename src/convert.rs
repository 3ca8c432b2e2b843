use anyhow::{ensure, Result};
use image::{GrayImage, RgbaImage};
use opencv::{
    self as cv,
    core::{MatTraitConst, MatTraitConstManual},
};

/// Wraps a grayscale image buffer into a single-channel 8-bit `Mat`.
pub fn gray_image_to_mat(image: &GrayImage) -> Result<cv::core::Mat> {
    let (width, height) = image.dimensions();
    ensure!(width > 0 && height > 0, "image has no pixels");
    let mat = cv::core::Mat::new_rows_cols_with_data(height as i32, width as i32, image.as_raw())?
        .clone_pointee();
    Ok(mat)
}

/// Wraps an RGBA image buffer into a four-channel 8-bit `Mat`.
pub fn rgba_image_to_mat(image: &RgbaImage) -> Result<cv::core::Mat> {
    let (width, height) = image.dimensions();
    ensure!(width > 0 && height > 0, "image has no pixels");
    let mat = cv::core::Mat::from_slice(image.as_raw())?
        .reshape(4, height as i32)?
        .clone_pointee();
    Ok(mat)
}

/// Copies a single-channel 8-bit `Mat` back into a grayscale image buffer.
pub fn mat_to_gray_image(mat: &cv::core::Mat) -> Result<GrayImage> {
    ensure!(
        mat.channels() == 1,
        "expected a single-channel mat, got {} channels",
        mat.channels()
    );
    ensure!(
        mat.depth() == cv::core::CV_8U,
        "expected an 8-bit mat, got depth {}",
        mat.depth()
    );

    let width = mat.cols() as u32;
    let height = mat.rows() as u32;
    let data = if mat.is_continuous() {
        mat.data_typed::<u8>()?.to_vec()
    } else {
        let mut continuous = cv::core::Mat::default();
        mat.copy_to(&mut continuous)?;
        continuous.data_typed::<u8>()?.to_vec()
    };

    GrayImage::from_raw(width, height, data)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {width}x{height}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_round_trip_preserves_pixels() {
        let image = GrayImage::from_fn(5, 4, |x, y| image::Luma([(x * 10 + y) as u8]));

        let mat = gray_image_to_mat(&image).unwrap();
        assert_eq!(mat.cols(), 5);
        assert_eq!(mat.rows(), 4);
        assert_eq!(mat.channels(), 1);

        let back = mat_to_gray_image(&mat).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn rgba_mat_has_four_channels() {
        let image = RgbaImage::from_pixel(6, 3, image::Rgba([10, 20, 30, 255]));

        let mat = rgba_image_to_mat(&image).unwrap();
        assert_eq!(mat.cols(), 6);
        assert_eq!(mat.rows(), 3);
        assert_eq!(mat.channels(), 4);
    }

    #[test]
    fn multi_channel_mat_is_not_a_gray_image() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));
        let mat = rgba_image_to_mat(&image).unwrap();

        let err = mat_to_gray_image(&mat).unwrap_err();
        assert!(err.to_string().contains("single-channel"));
    }

    #[test]
    fn empty_image_is_rejected() {
        let image = GrayImage::new(0, 0);
        assert!(gray_image_to_mat(&image).is_err());
    }
}
