//! One module per served page.

mod add_data;
mod circuit_detail;
mod compare;
mod constructors;
mod drivers;
mod home;
mod race_detail;
mod race_stats;
mod races;

pub use add_data::AddDataPage;
pub use circuit_detail::CircuitDetailPage;
pub use compare::ComparePage;
pub use constructors::ConstructorsPage;
pub use drivers::DriversPage;
pub use home::{HomePage, NotFoundPage};
pub use race_detail::RaceDetailPage;
pub use race_stats::RaceStatsPage;
pub use races::RacesPage;
