pub mod candidates;
pub mod config;
pub mod filter;
pub mod key;
pub mod state;
pub mod viewport;

pub use candidates::{candidates_from_args, CandidatesError};
pub use config::MenuConfig;
pub use filter::filter_candidates;
pub use key::MenuKey;
pub use state::{MenuState, Outcome};
pub use viewport::Viewport;
