pub mod report;

pub use report::{ReportError, ReportFormat, SimulationReport};
