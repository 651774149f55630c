//! Run configuration
//!
//! Built once from the command line and passed by reference to every
//! collaborator, so several generation targets can run side by side in one
//! process (tests do exactly that).

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::core::ConfigError;

/// Server address used when none is given
pub const DEFAULT_SERVER: &str = "localhost:54321";

/// Root under which each language's bindings land by default
pub const DEFAULT_DEST_ROOT: &str = "src-gen/main";

/// Per-request HTTP timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a single generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Server base URL, always with a scheme and a trailing `/`
    pub base_url: Url,
    /// Emit verbose diagnostics, including the translation table
    pub verbose: bool,
    /// Absolute destination directory
    pub dest_dir: PathBuf,
    /// Remove prior contents of `dest_dir` before generating
    pub clear_dir: bool,
    pub timeout: Duration,
}

impl GeneratorConfig {
    /// Create a configuration for `server` (an `IP:PORT` or a URL) writing
    /// into `dest_dir`.
    pub fn new(server: &str, dest_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(server)?,
            verbose: false,
            dest_dir: absolutize(dest_dir.as_ref())?,
            clear_dir: true,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_clear_dir(mut self, clear_dir: bool) -> Self {
        self.clear_dir = clear_dir;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Default destination for a backend's output directory name, rooted at
    /// the crate directory so the result does not depend on the cwd
    pub fn default_dest_dir(output_dir: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(DEFAULT_DEST_ROOT)
            .join(output_dir)
    }
}

/// Turn `localhost:54321` into `http://localhost:54321/`.
///
/// Addresses that already carry an `http://` or `https://` scheme keep it.
pub fn normalize_base_url(address: &str) -> Result<Url, ConfigError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ConfigError::Missing("server address".to_string()));
    }

    let mut base = if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{address}")
    };
    if !base.ends_with('/') {
        base.push('/');
    }

    let url = Url::parse(&base).map_err(|e| ConfigError::InvalidUrl {
        address: address.to_string(),
        reason: e.to_string(),
    })?;
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            address: address.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(url)
}

fn absolutize(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::Missing("destination directory".to_string()));
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| ConfigError::Missing(format!("current directory ({e})")))?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_scheme_and_slash() {
        let url = normalize_base_url("localhost:54321").unwrap();
        assert_eq!(url.as_str(), "http://localhost:54321/");

        let url = normalize_base_url("https://h2o.example.com:443").unwrap();
        assert_eq!(url.as_str(), "https://h2o.example.com/");

        let url = normalize_base_url("http://10.0.0.5:54321/").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.5:54321/");
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(matches!(
            normalize_base_url("localhost:notaport"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            normalize_base_url("   "),
            Err(ConfigError::Missing(_))
        ));
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::new(DEFAULT_SERVER, "/tmp/bindings").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:54321/");
        assert_eq!(config.dest_dir, PathBuf::from("/tmp/bindings"));
        assert!(config.clear_dir);
        assert!(!config.verbose);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_relative_dest_becomes_absolute() {
        let config = GeneratorConfig::new(DEFAULT_SERVER, "out/java").unwrap();
        assert!(config.dest_dir.is_absolute());
        assert!(config.dest_dir.ends_with("out/java"));
    }

    #[test]
    fn test_builders() {
        let config = GeneratorConfig::new(DEFAULT_SERVER, "/tmp/x")
            .unwrap()
            .with_verbose(true)
            .with_clear_dir(false)
            .with_timeout(Duration::from_secs(2));
        assert!(config.verbose);
        assert!(!config.clear_dir);
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_default_dest_is_anchored_to_crate_dir() {
        let dest = GeneratorConfig::default_dest_dir("java");
        assert!(dest.is_absolute());
        assert_eq!(
            dest,
            Path::new(env!("CARGO_MANIFEST_DIR")).join("src-gen/main/java")
        );

        // Independent of the process working directory
        let config = GeneratorConfig::new(DEFAULT_SERVER, &dest).unwrap();
        assert_eq!(config.dest_dir, dest);
    }
}
