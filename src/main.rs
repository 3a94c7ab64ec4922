use grid_binner::{bin, AxisInput, Statistic};

fn main() {
    // Worked example: three samples on a 3x2 grid with unit resolution.
    let x = [0.1, 0.2, 1.9];
    let y = [0.1, 0.1, 0.1];
    let z = [10.0, 20.0, 100.0];
    let xq = [0.0, 1.0, 2.0];
    let yq = [0.0, 1.0];

    let grid = match bin(
        &x,
        &y,
        &z,
        AxisInput::Vector(&xq),
        AxisInput::Vector(&yq),
        &Statistic::Mean,
        true,
    ) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    println!("mean:");
    for row in grid.value_rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>6.1}")).collect();
        println!("  [{}]", cells.join(" "));
    }
    if let Some(counts) = grid.count_rows() {
        println!("count:");
        for row in counts {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>6}")).collect();
            println!("  [{}]", cells.join(" "));
        }
    }
    println!(
        "kept={}/{} elapsed_ms={:.3}",
        grid.stats.kept, grid.stats.total, grid.stats.elapsed_ms
    );
}
