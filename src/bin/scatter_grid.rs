use grid_binner::config::scatter_grid::{self, ScatterGridConfig};
use grid_binner::io::{load_samples_json, save_grid_png, write_json_file};
use grid_binner::report::GridReport;
use grid_binner::{GridBinner, Samples, Statistic};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: scatter_grid <config.json> [statistic]".to_string()
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let config_path = args.next().ok_or_else(usage)?;
    let mut config = scatter_grid::load_config(Path::new(&config_path))?;
    if let Some(name) = args.next() {
        config.statistic = name.parse::<Statistic>().map_err(|e| e.to_string())?;
    }

    let report = run_config(&config)?;
    print_text_summary(&report);

    write_json_file(&config.output.result_json, &report)?;
    println!("\nJSON report written to {}", config.output.result_json.display());
    Ok(())
}

fn run_config(config: &ScatterGridConfig) -> Result<GridReport, String> {
    let file = load_samples_json(&config.input)?;
    let samples = Samples::new(&file.x, &file.y, &file.z).map_err(|e| e.to_string())?;
    let axes = config.grid.to_axes()?;

    let binner = GridBinner::new(axes, config.params.clone());
    let grid = binner.bin(&samples, &config.statistic);

    if let Some(path) = &config.output.preview_png {
        save_grid_png(&grid.values, path)?;
        println!("Preview written to {}", path.display());
    }
    Ok(GridReport::new(binner.axes(), config.statistic, &grid))
}

fn print_text_summary(report: &GridReport) {
    let stats = &report.stats;
    println!("Binning summary");
    println!("  statistic: {}", report.statistic);
    println!("  grid: {} rows x {} cols", report.shape.0, report.shape.1);
    println!(
        "  samples: kept={}/{} nan={} out_of_bounds={}",
        stats.kept, stats.total, stats.dropped_nan, stats.dropped_out_of_bounds
    );
    println!(
        "  occupied cells: {}/{}",
        stats.occupied_cells,
        report.shape.0 * report.shape.1
    );
    println!("  elapsed_ms: {:.3}", stats.elapsed_ms);
}
