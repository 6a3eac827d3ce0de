pub mod fitment;
pub mod loader;
pub mod types;

pub use fitment::{compatibility, rank_jobs, shortfalls, RankedJob, Shortfall};
pub use loader::{load_catalogue, parse_catalogue};
pub use types::{JobCatalogue, JobPosting, Requirements};
