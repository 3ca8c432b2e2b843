use anyhow::Result;
use log::info;

use match_gallery::{display, gallery, loader, Method};

const SCENE_PATH: &str = "assets/scene.png";
const TEMPLATE_PATH: &str = "assets/template.png";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let image = loader::load_image(SCENE_PATH, true)?;
    let template = loader::load_image(TEMPLATE_PATH, true)?;
    info!(
        "matching {TEMPLATE_PATH} inside {SCENE_PATH} with {} methods",
        Method::ALL.len()
    );

    gallery::run(&image, &template, &Method::ALL, |method, annotated| {
        display::show_blocking(&format!("Match - Method: {method}"), annotated)
    })?;

    Ok(())
}
