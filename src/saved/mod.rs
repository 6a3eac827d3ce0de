pub mod filter;
pub mod storage;
pub mod types;

pub use filter::filter_saved_jobs;
pub use storage::{get_saved_jobs_path, load_saved_jobs, save_saved_jobs};
pub use types::{SavedEntry, SavedJobs};
