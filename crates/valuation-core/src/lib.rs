pub mod config;
pub mod error;
pub mod normalize;
pub mod stats;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::*;
pub use normalize::*;
pub use stats::*;
pub use traits::*;
pub use types::*;
