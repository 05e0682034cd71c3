use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::trace;
use serde::de::DeserializeOwned;

use crate::error::ctx;

/// Interactor with the actual physical file system.
#[derive(Clone, Copy, Debug)]
pub struct FileSystemInteractor {
    /// If true this will not write nor store any state to the file system.
    pub dry_run: bool,
}

/// This defines all interactions of mqrun with the filesystem.
pub trait FileOperations {
    /// Read a file into raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read a file into a utf8 string.
    fn read_utf8(&self, path: &Path) -> Result<String>;

    /// Try to deserialize a toml file into a structure `T`.
    fn try_read_toml<T: DeserializeOwned>(&self, path: &Path) -> Result<T>;

    /// Write all bytes to a file.
    fn write_bytes_truncate(&self, path: &Path, bytes: &[u8]) -> Result<()>;

    /// Write a [String] to a file.
    fn write_utf8_truncate(&self, path: &Path, data: &str) -> Result<()>;

    /// Create a directory and all of its missing parents.
    ///
    /// A directory that already exists is left alone.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Recursively delete a directory.
    ///
    /// Deleting a directory that does not exist is a no-op.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// Make `link` refer to the file at `original`.
    ///
    /// A symbolic link is preferred; if the platform or the filesystem
    /// refuses to create one the file's bytes are copied instead.
    fn link_or_copy(&self, original: &Path, link: &Path) -> Result<()>;

    /// Given a path try to canonicalize it.
    ///
    /// This will fail for files that do not exist.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

impl FileOperations for FileSystemInteractor {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(ctx!(
          "Could not read the file {path:?}", ;
          "Ensure that the file exists and you have permissions to access it",
        ))
    }

    fn read_utf8(&self, path: &Path) -> Result<String> {
        String::from_utf8(self.read_bytes(path)?).with_context(ctx!(
          "{path:?} is not valid UTF-8", ;
          "The file doesn't seem to be human readable?",
        ))
    }

    fn try_read_toml<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        toml::from_str::<T>(&self.read_utf8(path)?).with_context(ctx!(
          "Could not deserialize toml file {path:?}", ;
          "Ensure that the file is valid toml",
        ))
    }

    fn write_utf8_truncate(&self, path: &Path, data: &str) -> Result<()> {
        self.write_bytes_truncate(path, data.as_bytes())
    }

    fn write_bytes_truncate(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if self.dry_run {
            debug!("Would have written to {path:?} (dry)");
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                debug!("Creating directories for {:?}", parent);
            }

            fs::create_dir_all(parent).with_context(ctx!(
              "Could not create parent directories for {parent:?}", ;
              "Ensure that you have sufficient permissions",
            ))?;
        }

        trace!("Creating a file at {:?}", path);
        fs::write(path, bytes).with_context(ctx!(
          "Could not write to the file {path:?}", ;
          "Ensure that you have permissions to write it",
        ))?;

        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if self.dry_run {
            debug!("Would have created {path:?} (dry)");
            return Ok(());
        }

        debug!("Creating directories for {:?}", path);
        fs::create_dir_all(path).with_context(ctx!(
           "Could not create {path:?}", ;
           "Ensure that you have sufficient permissions",
        ))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            trace!("Nothing to remove at {path:?}");
            return Ok(());
        }

        if self.dry_run {
            debug!("Would have removed {path:?} (dry)");
            return Ok(());
        }

        debug!("Removing the directory {:?}", path);
        fs::remove_dir_all(path).with_context(ctx!(
          "Could not remove the directory {path:?}", ;
          "Ensure that you have sufficient permissions and no process is using it",
        ))
    }

    fn link_or_copy(&self, original: &Path, link: &Path) -> Result<()> {
        if self.dry_run {
            debug!("Would have linked {original:?} to {link:?} (dry)");
            return Ok(());
        }

        if link.exists() {
            trace!("The link {link:?} is already in place");
            return Ok(());
        }

        #[cfg(unix)]
        {
            if std::os::unix::fs::symlink(original, link).is_ok() {
                debug!("Created a symlink {link:?} -> {original:?}");
                return Ok(());
            }
        }

        // Symlinks unsupported here, fall back to a verbatim copy.
        fs::copy(original, link).map(|_| ()).with_context(ctx!(
          "Could not link nor copy {original:?} to {link:?}", ;
          "Ensure that the file exists and the target directory is writable",
        ))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        path.canonicalize().with_context(ctx!(
          "Could not canonicalize {path:?}", ;
          "Ensure that your path is valid",
        ))
    }
}

/// Resolve a path against the current working directory without touching
/// the filesystem.
///
/// Unlike [FileOperations::canonicalize] this works for paths that do not
/// exist yet.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = env::current_dir().with_context(ctx!(
      "Could not determine the current working directory", ;
      "Ensure that the working directory exists and is accessible",
    ))?;

    Ok(cwd.join(path))
}

#[cfg(test)]
#[path = "tests/file_system.rs"]
mod tests;
