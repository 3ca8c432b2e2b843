use anyhow::Result;
use opencv::{self as cv, highgui};

/// Shows `image` in its own window and blocks until a key is pressed.
/// The window is torn down before returning so the next call starts fresh.
pub fn show_blocking(title: &str, image: &cv::core::Mat) -> Result<()> {
    highgui::named_window(title, highgui::WINDOW_AUTOSIZE)?;
    highgui::imshow(title, image)?;
    highgui::wait_key(0)?;
    highgui::destroy_all_windows()?;
    Ok(())
}
