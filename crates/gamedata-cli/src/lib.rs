//! # gamedata-cli: Gameplay Data Validation CLI
//!
//! Provides the `gamedata` command. Argument parsing and report rendering
//! live here; all validation logic is in `gamedata-schema`.
//!
//! ## Subcommands
//!
//! - `gamedata validate`: validate the collection documents, print the
//!   verdict and every defect, exit 0 / 1 / 2.
//! - `gamedata targets`: list the fixed validation targets and where they
//!   are expected on disk.
//!
//! ```bash
//! gamedata validate
//! gamedata validate --data-root assets/data/json --kind enemy --kind quest
//! gamedata -vv targets
//! ```

pub mod targets;
pub mod validate;

use std::path::{Path, PathBuf};

/// Data root used when `--data-root` is not given.
pub const DEFAULT_DATA_ROOT: &str = "data/json";

/// Resolve a possibly-relative data root against `cwd`. Absolute paths are
/// returned unchanged.
pub fn resolve_data_root(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_data_root_returned_as_is() {
        let result = resolve_data_root(Path::new("/srv/game/data"), Path::new("/home/dev"));
        assert_eq!(result, PathBuf::from("/srv/game/data"));
    }

    #[test]
    fn relative_data_root_joined_to_cwd() {
        let result = resolve_data_root(Path::new(DEFAULT_DATA_ROOT), Path::new("/home/dev/game"));
        assert_eq!(result, PathBuf::from("/home/dev/game/data/json"));
    }
}
