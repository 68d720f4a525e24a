pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod present;
pub mod screen;
pub mod url_model;

pub use error::{BuildError, NavigationError, PresentError, SubmitError};
pub use screen::{Phase, Screen, ScreenView};
pub use url_model::{build_url, ResolvedUrl};
