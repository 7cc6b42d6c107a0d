pub mod client;
pub mod configuration;
pub mod error;
pub mod extract;
pub mod grabber;
pub mod models;
pub mod run;
pub mod storage;

pub use configuration::Settings;
pub use error::GrabError;
pub use grabber::Grabber;
pub use models::{Chapter, Cli};
pub use run::run;
