use std::path::PathBuf;

use anyhow::{Context, Result};
use smogscan::{
    BitBuffer2, ColorCondition, LabelMap, PixelGrid, analyze_file, classify, label_components,
    load_pixel_grid, save_mask, write_report,
};

use crate::config::Config;

pub const UNSORTED_REPORT_FILE: &str = "cc-output-2a.txt";
pub const SORTED_REPORT_FILE: &str = "cc-output-2b.txt";

/// Writes the classified mask for `condition`. Returns the mask path.
pub fn filter(config: &Config, condition: ColorCondition) -> Result<PathBuf> {
    let grid = load(config)?;
    let mask = classify(&grid, &condition, &config.thresholds());
    let path = config.output_path(&format!("{}.png", condition.mask_file_stem()));
    save_mask(&path, &mask).context("Failed to save classified mask")?;
    Ok(path)
}

/// Labels the `condition` mask and writes the unsorted component report.
pub fn components(config: &Config, condition: ColorCondition) -> Result<LabelMap> {
    let grid = load(config)?;
    let mask = classify(&grid, &condition, &config.thresholds());
    let label_map = label_components(&mask);

    let path = config.output_path(UNSORTED_REPORT_FILE);
    write_report(&path, &label_map.component_table_report())
        .context("Failed to write component report")?;

    Ok(label_map)
}

/// Ranks the `condition` components, writes the sorted report and the mask
/// of the `top_n` largest.
pub fn sorted(config: &Config, condition: ColorCondition, top_n: usize) -> Result<BitBuffer2> {
    let output = analyze_file(&config.image, &condition, &config.thresholds())
        .with_context(|| format!("Failed to analyse map image '{}'", config.image.display()))?;

    write_report(
        config.output_path(SORTED_REPORT_FILE),
        &output.ranked.report(),
    )
    .context("Failed to write sorted component report")?;

    let top = output
        .top_n_mask(top_n)
        .with_context(|| format!("Cannot extract the {top_n} largest {condition} components"))?;
    save_mask(config.output_path(&format!("cc-top-{top_n}.png")), &top)
        .context("Failed to save top components mask")?;

    Ok(top)
}

fn load(config: &Config) -> Result<PixelGrid<u8>> {
    load_pixel_grid(&config.image)
        .with_context(|| format!("Failed to load map image '{}'", config.image.display()))
}
