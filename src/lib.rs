pub mod cli;
pub mod error;
pub mod message;
pub mod package;
pub mod report;
pub mod training;
pub mod utils;

pub use error::PackageError;
pub use message::InfoMessage;
pub use package::{Package, WorkoutCode, read_package};
pub use training::{Running, SportsWalking, Swimming, Training};
