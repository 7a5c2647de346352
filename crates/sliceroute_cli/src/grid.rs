//! `sliceroute grid`: inspect the site grid a device dump yields.

use sliceroute_common::site_name;
use sliceroute_device::SiteGrid;

use crate::pipeline::{load_grid, resolve_settings};
use crate::{GlobalArgs, GridArgs};

/// Runs the `sliceroute grid` command.
pub fn run(args: &GridArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = resolve_settings(global, args.device.as_deref())?;
    let grid = load_grid(&settings, global)?;
    print!("{}", summary(&grid));
    Ok(0)
}

/// Describes a grid's size, extent, and normalization origin.
fn summary(grid: &SiteGrid) -> String {
    let width = u64::from(grid.max_x()) + 1;
    let height = u64::from(grid.max_y()) + 1;
    let occupancy = grid.len() as f64 * 100.0 / (width * height) as f64;
    format!(
        "sites:  {}\nextent: {width} x {height} ({occupancy:.1}% populated)\norigin: {}\n",
        grid.len(),
        site_name(grid.origin()),
    )
}
