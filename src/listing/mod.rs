pub mod error;
pub mod fallback;
pub mod http;
pub mod session;
pub mod traits;

pub use error::ListingError;
pub use http::HttpListingSource;
pub use session::{SearchOutcome, SearchSession};
pub use traits::ListingSource;
