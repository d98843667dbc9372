pub mod file;
pub mod input;
pub mod logging;
pub mod text;
pub mod validation;

pub use input::EnvConfigReader;
