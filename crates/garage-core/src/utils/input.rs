//! Environment variable overrides
//!
//! Values read here take precedence over config.toml but not over CLI flags.

use std::path::PathBuf;

pub const ENV_DATABASE: &str = "GARAGE_DATABASE";
pub const ENV_PAGE_SIZE: &str = "GARAGE_PAGE_SIZE";

/// Environment variable configuration reader
pub struct EnvConfigReader;

impl EnvConfigReader {
    /// Read NO_COLOR environment variable
    pub fn read_no_color() -> bool {
        std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }

    /// Read GARAGE_PAGE_SIZE environment variable
    pub fn read_page_size() -> Option<usize> {
        std::env::var(ENV_PAGE_SIZE)
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
    }

    /// Read GARAGE_DATABASE environment variable
    pub fn read_database_path() -> Option<PathBuf> {
        std::env::var_os(ENV_DATABASE)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches GARAGE_PAGE_SIZE so parallel tests cannot interleave on it
    #[test]
    fn test_read_page_size() {
        unsafe {
            std::env::set_var(ENV_PAGE_SIZE, "invalid");
        }
        assert!(EnvConfigReader::read_page_size().is_none());

        unsafe {
            std::env::set_var(ENV_PAGE_SIZE, "0");
        }
        assert!(EnvConfigReader::read_page_size().is_none());

        unsafe {
            std::env::set_var(ENV_PAGE_SIZE, " 12 ");
        }
        assert_eq!(EnvConfigReader::read_page_size(), Some(12));

        unsafe {
            std::env::remove_var(ENV_PAGE_SIZE);
        }
        assert!(EnvConfigReader::read_page_size().is_none());
    }
}
