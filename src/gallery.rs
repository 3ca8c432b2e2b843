use anyhow::Result;
use log::{debug, info};
use opencv::{self as cv, core::MatTraitConst};

use crate::annotate;
use crate::{run_match, Method};

/// Matches the template against the image with every method in `methods` and
/// hands each annotated result to `present`, one at a time and in order.
///
/// The presenter decides what "showing" means, so the same loop drives both
/// an interactive window and a headless test run. A presenter error aborts
/// the remaining methods.
pub fn run<F>(
    image: &cv::core::Mat,
    template: &cv::core::Mat,
    methods: &[Method],
    mut present: F,
) -> Result<()>
where
    F: FnMut(Method, &cv::core::Mat) -> Result<()>,
{
    let template_size = template.size()?;
    for &method in methods {
        let result = run_match(image, template, method)?;
        debug!(
            "{method}: min {:.6} at ({}, {}), max {:.6} at ({}, {})",
            result.min_value(),
            result.min_location().x,
            result.min_location().y,
            result.max_value(),
            result.max_location().x,
            result.max_location().y,
        );

        let location = result.best_location(method);
        info!("{method}: best match at ({}, {})", location.x, location.y);

        let annotated = annotate::draw_match_rect(image, location, template_size)?;
        present(method, &annotated)?;
    }
    Ok(())
}
