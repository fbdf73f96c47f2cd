pub mod chapter;
pub mod explorer;
pub mod pages;

pub use chapter::{Chapter, EcosystemRef, Kpi, KpiKind, CHAPTERS, ECOSYSTEM};
pub use explorer::{Climate, Environment, IucnCategory, Origin, RegionalCard};
