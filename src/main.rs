use std::fs;

use logistic_basins::{BasinsConfig, CliBasinsController, PpmFilePresenter};

const OUTPUT_DIR: &str = "output";
const OUTPUT_FILE: &str = "output/logistic_basins.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = PpmFilePresenter::new();
    let mut controller = CliBasinsController::new(presenter, BasinsConfig::default());

    controller.generate()?;

    fs::create_dir_all(OUTPUT_DIR)?;
    controller.write(OUTPUT_FILE)?;
    println!("Saved to {}", OUTPUT_FILE);

    Ok(())
}
