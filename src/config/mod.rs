pub mod scatter_grid;
