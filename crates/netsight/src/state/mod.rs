mod dashboard;
mod rows;

pub use dashboard::*;
pub use rows::*;
