use anyhow::{ensure, Result};
use opencv::{self as cv, core::MatTraitConst};

use crate::Method;

/// Slides `template` over `image` under `method` and captures the score
/// surface together with its global extremes.
///
/// The surface has one score per offset, so its dimensions are
/// `(image - template + 1)` in both axes. Validation mirrors what the
/// underlying call would reject, but with readable messages.
pub fn run_match(
    image: &cv::core::Mat,
    template: &cv::core::Mat,
    method: Method,
) -> Result<MatchResult> {
    ensure!(!image.empty(), "input image is empty");
    ensure!(!template.empty(), "template image is empty");
    ensure!(
        image.depth() == template.depth(),
        "input depth must match template depth"
    );
    ensure!(
        image.channels() == template.channels(),
        "input channels must match template channels"
    );
    ensure!(
        template.cols() <= image.cols() && template.rows() <= image.rows(),
        "template ({}x{}) must not exceed the input image ({}x{})",
        template.cols(),
        template.rows(),
        image.cols(),
        image.rows()
    );

    let mut surface = cv::core::Mat::default();
    cv::imgproc::match_template(
        image,
        template,
        &mut surface,
        method.to_opencv(),
        &cv::core::no_array(),
    )?;

    let mut min_value = 0.0f64;
    let mut max_value = 0.0f64;
    let mut min_location = cv::core::Point::default();
    let mut max_location = cv::core::Point::default();
    cv::core::min_max_loc(
        &surface,
        Some(&mut min_value),
        Some(&mut max_value),
        Some(&mut min_location),
        Some(&mut max_location),
        &cv::core::no_array(),
    )?;

    Ok(MatchResult {
        surface,
        min_value,
        max_value,
        min_location,
        max_location,
    })
}

/// The outcome of one `run_match` call: the score surface plus the extremes
/// a single `min_max_loc` pass found in it. All fields are immutable
/// snapshots of computed data.
#[derive(Debug, Clone)]
pub struct MatchResult {
    surface: cv::core::Mat,
    min_value: f64,
    max_value: f64,
    min_location: cv::core::Point,
    max_location: cv::core::Point,
}

impl MatchResult {
    pub fn surface(&self) -> &cv::core::Mat {
        &self.surface
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn min_location(&self) -> cv::core::Point {
        self.min_location
    }

    pub fn max_location(&self) -> cv::core::Point {
        self.max_location
    }

    /// The winning offset under `method`'s scoring convention: the minimum
    /// location for the squared-difference family, the maximum otherwise.
    pub fn best_location(&self, method: Method) -> cv::core::Point {
        if method.prefers_minimum() {
            self.min_location
        } else {
            self.max_location
        }
    }
}

impl AsRef<cv::core::Mat> for MatchResult {
    fn as_ref(&self) -> &cv::core::Mat {
        &self.surface
    }
}
