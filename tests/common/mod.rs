pub mod synthetic_scatter;
