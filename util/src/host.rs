//! Host platform utility functions

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable giving the root of the software installation.
pub const SW_ROOT_ENV_VAR: &str = "TALOS_SW_ROOT";

/// Possible errors associated with the host module.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("The software root environment variable (TALOS_SW_ROOT) is not set")]
    SwRootNotSet,
}

/// A summary of the host platform, displayed in the startup banner.
#[derive(Debug, Clone, Copy)]
pub struct HostInfo {
    pub os: &'static str,
    pub arch: &'static str,
}

/// Get the software root directory from the environment.
///
/// The `params` and `sessions` directories live under this root.
pub fn get_talos_sw_root() -> Result<PathBuf, HostError> {
    match std::env::var(SW_ROOT_ENV_VAR) {
        Ok(v) => Ok(PathBuf::from(v)),
        Err(_) => Err(HostError::SwRootNotSet),
    }
}

/// Retrieve a summary of the host platform.
pub fn get_host_info() -> HostInfo {
    HostInfo {
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
    }
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.os, self.arch)
    }
}
