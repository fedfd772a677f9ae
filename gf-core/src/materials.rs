//! Material configuration loader.
//!
//! Loads physical properties from YAML files, allowing easy configuration
//! of different balls and course surfaces without recompiling.
//!
//! ## Directory Structure
//!
//! ```text
//! materials/
//! ├── balls/
//! │   └── conforming.yaml
//! └── surfaces/
//!     ├── fairway.yaml
//!     └── ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{BallProperties, SurfaceProperties};

/// Error type for material loading operations.
#[derive(Debug)]
pub enum MaterialError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
    NotFound(String),
}

impl std::fmt::Display for MaterialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialError::IoError(e) => write!(f, "IO error: {}", e),
            MaterialError::ParseError(e) => write!(f, "YAML parse error: {}", e),
            MaterialError::NotFound(name) => write!(f, "Material not found: {}", name),
        }
    }
}

impl std::error::Error for MaterialError {}

impl From<std::io::Error> for MaterialError {
    fn from(err: std::io::Error) -> Self {
        MaterialError::IoError(err)
    }
}

impl From<serde_yaml::Error> for MaterialError {
    fn from(err: serde_yaml::Error) -> Self {
        MaterialError::ParseError(err)
    }
}

/// Material loader with configurable base directory.
pub struct MaterialLoader {
    base_path: PathBuf,
}

impl MaterialLoader {
    /// Create a new loader with the given base path.
    ///
    /// The base path should contain `balls/` and `surfaces/` subdirectories.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a ball by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = MaterialLoader::new("materials");
    /// let ball = loader.load_ball("conforming")?;
    /// ```
    pub fn load_ball(&self, name: &str) -> Result<BallProperties, MaterialError> {
        let path = self.base_path.join("balls").join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(MaterialError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let props: BallProperties = serde_yaml::from_str(&contents)?;
        Ok(props)
    }

    /// Load a surface by name.
    pub fn load_surface(&self, name: &str) -> Result<SurfaceProperties, MaterialError> {
        let path = self
            .base_path
            .join("surfaces")
            .join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(MaterialError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let props: SurfaceProperties = serde_yaml::from_str(&contents)?;
        Ok(props)
    }

    /// List all available balls.
    pub fn list_balls(&self) -> Result<Vec<String>, MaterialError> {
        self.list_materials("balls")
    }

    /// List all available surfaces.
    pub fn list_surfaces(&self) -> Result<Vec<String>, MaterialError> {
        self.list_materials("surfaces")
    }

    fn list_materials(&self, subdir: &str) -> Result<Vec<String>, MaterialError> {
        let path = self.base_path.join(subdir);
        if !path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(".yaml") {
                names.push(name.trim_end_matches(".yaml").to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;

    fn get_materials_path() -> PathBuf {
        // Materials directory relative to the workspace root
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(manifest_dir).join("..").join("materials")
    }

    #[test]
    fn test_load_existing_ball() {
        let loader = MaterialLoader::new(get_materials_path());
        let result = loader.load_ball("conforming");

        assert!(result.is_ok(), "Should load conforming: {:?}", result.err());
        let ball = result.unwrap();
        assert!((ball.mass - 0.0459).abs() < 1e-9);
        assert!((ball.radius - 0.02135).abs() < 1e-9);
    }

    #[test]
    fn test_load_existing_surface() {
        let loader = MaterialLoader::new(get_materials_path());
        let result = loader.load_surface("fairway");

        assert!(result.is_ok(), "Should load fairway: {:?}", result.err());
        let surface = result.unwrap();
        assert!(surface.restitution > 0.0 && surface.restitution <= 1.0);
        assert!(surface.friction > 0.0);
        assert!(surface.rolling_friction > 0.0);
    }

    #[test]
    fn test_load_nonexistent_surface() {
        let loader = MaterialLoader::new(get_materials_path());
        let result = loader.load_surface("nonexistent_surface_xyz");

        assert!(result.is_err());
        match result {
            Err(MaterialError::NotFound(name)) => {
                assert_eq!(name, "nonexistent_surface_xyz");
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_list_surfaces() {
        let loader = MaterialLoader::new(get_materials_path());
        let result = loader.list_surfaces();

        assert!(result.is_ok());
        let surfaces = result.unwrap();
        assert!(surfaces.contains(&"fairway".to_string()));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let balls = dir.path().join("balls");
        fs::create_dir(&balls).unwrap();
        let mut file = fs::File::create(balls.join("broken.yaml")).unwrap();
        writeln!(file, "name: [unclosed").unwrap();

        let loader = MaterialLoader::new(dir.path());
        let result = loader.load_ball("broken");
        assert!(matches!(result, Err(MaterialError::ParseError(_))));
    }

    #[test]
    fn test_missing_directory_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loader = MaterialLoader::new(dir.path());
        assert!(loader.list_balls().unwrap().is_empty());
    }
}
