use anyhow::Result;
use opencv::{
    self as cv,
    core::{Point, Rect, Size},
};

pub const MARK_COLOR: f64 = 255.0;
pub const MARK_THICKNESS: i32 = 5;

/// The region covered by a template whose top-left corner sits at `top_left`.
pub fn match_region(top_left: Point, template_size: Size) -> Rect {
    Rect::from_point_size(top_left, template_size)
}

/// Returns a copy of `image` with the match region outlined.
pub fn draw_match_rect(
    image: &cv::core::Mat,
    top_left: Point,
    template_size: Size,
) -> Result<cv::core::Mat> {
    let mut annotated = image.clone();
    cv::imgproc::rectangle(
        &mut annotated,
        match_region(top_left, template_size),
        cv::core::Scalar::all(MARK_COLOR),
        MARK_THICKNESS,
        cv::imgproc::LINE_8,
        0,
    )?;
    Ok(annotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;
    use opencv::core::MatTraitConst;

    fn flat_gray(width: u32, height: u32, value: u8) -> cv::core::Mat {
        let image = image::GrayImage::from_pixel(width, height, image::Luma([value]));
        convert::gray_image_to_mat(&image).unwrap()
    }

    #[test]
    fn region_bottom_right_is_location_plus_template_size() {
        let region = match_region(Point::new(4, 4), Size::new(3, 5));

        assert_eq!((region.x, region.y), (4, 4));
        assert_eq!((region.br().x, region.br().y), (7, 9));
    }

    #[test]
    fn annotation_preserves_dimensions() {
        let source = flat_gray(32, 24, 40);

        let annotated = draw_match_rect(&source, Point::new(5, 6), Size::new(8, 8)).unwrap();

        assert_eq!(annotated.cols(), 32);
        assert_eq!(annotated.rows(), 24);
    }

    #[test]
    fn annotation_leaves_the_source_untouched() {
        let source = flat_gray(32, 24, 40);

        draw_match_rect(&source, Point::new(5, 6), Size::new(8, 8)).unwrap();

        let pixels = convert::mat_to_gray_image(&source).unwrap();
        assert!(pixels.pixels().all(|p| p.0[0] == 40));
    }

    #[test]
    fn annotation_marks_the_match_outline() {
        let source = flat_gray(32, 24, 40);

        let annotated = draw_match_rect(&source, Point::new(5, 6), Size::new(8, 8)).unwrap();
        let pixels = convert::mat_to_gray_image(&annotated).unwrap();

        // The corner sits on the outline, the center is well inside it.
        assert_eq!(pixels.get_pixel(5, 6).0[0], MARK_COLOR as u8);
        assert_eq!(pixels.get_pixel(9, 10).0[0], 40);
    }
}
