/// Example: print one overlay frame without taking over the terminal
///
/// Usage: cargo run --example headless_frame -- [columns] [rows] [path/to/model.obj]

use std::env;

use anyhow::Context;
use devlay_core::model_io::load_model;
use devlay_terminal::{render_frame, AsciiCanvas, DemoConfig, DemoScene};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let columns = match args.get(1) {
        Some(arg) => arg.parse().context("columns must be a number")?,
        None => 100,
    };
    let rows = match args.get(2) {
        Some(arg) => arg.parse().context("rows must be a number")?,
        None => 30,
    };
    let model = match args.get(3) {
        Some(path) => Some(load_model(path, 64.0).with_context(|| format!("failed to load {path}"))?),
        None => None,
    };

    let scene = DemoScene::new(model);
    let config = DemoConfig::default();
    let mut canvas = AsciiCanvas::new(columns, rows);
    let commands = render_frame(&scene, &config.camera, &config.toggles, &mut canvas)?;

    print!("{}", canvas.to_plain_string());
    println!("{commands} draw commands");
    Ok(())
}
