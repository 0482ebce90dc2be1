//! Client of the api of the wikimedia wikis (wikipedia, wiktionary, ...).
//!
//! ```no_run
//! use wikimedia_api::{Client, Options, Params};
//!
//! let client = Client::new(Options::new("https://en.wikipedia.org/w/api.php")).unwrap();
//! let params: Params = vec![
//!     ("action", "query"),
//!     ("prop", "extracts"),
//!     ("titles", "Google"),
//!     ("explaintext", "1"),
//! ]
//! .into_iter()
//! .collect();
//! let res = client.query(params).unwrap();
//! for page in res.query.pages.values() {
//!     println!("{}: {}", page.title, page.extract);
//! }
//! ```
pub mod api_structures;
pub mod client;
pub mod error;
pub mod log;
pub mod params;
pub mod transport;

pub use api_structures::ApiResponse;
pub use client::{Client, Options};
pub use error::Error;
pub use params::Params;
pub use transport::{Request, Response, Transport, TransportError};
