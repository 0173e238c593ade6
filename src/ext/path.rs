use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path with the checks the template pipeline needs
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error)` - If the path contains invalid Unicode characters
    ///
    /// # Examples
    /// ```
    /// use os_config_applier::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("etc/app.conf");
    /// assert_eq!(path.to_str_checked().unwrap(), "etc/app.conf");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Whether the path is a regular file the current process may execute.
    ///
    /// On Unix this asks the kernel via `access(X_OK)`, so the owner, group
    /// and other bits are weighed against the effective user. Other platforms
    /// have no execute bit, so nothing is executable there.
    fn is_executable(&self) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    #[cfg(unix)]
    fn is_executable(&self) -> bool {
        use rustix::fs::{access, Access};

        self.is_file() && access(self, Access::EXEC_OK).is_ok()
    }

    #[cfg(not(unix))]
    fn is_executable(&self) -> bool {
        false
    }
}
