//! Parameter files

use fastformer_errors::{ConfigError, Error};
use fastformer_types::Dictionary;
use std::path::Path;
use tracing::debug;

/// Supported parameter file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for anything but `.toml`
    /// and `.json`.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into()),
        }
    }

    /// Parse a document into a dictionary
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the document is malformed or its
    /// top level is not a table.
    pub fn parse(self, contents: &str) -> Result<Dictionary, Error> {
        match self {
            Self::Toml => Ok(toml::from_str(contents)?),
            Self::Json => Ok(serde_json::from_str(contents)?),
        }
    }
}

/// Load builder parameters from a file, optionally from one of its tables
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported extension,
/// cannot be parsed, or lacks the requested table.
pub fn load_dictionary(path: &Path, section: Option<&str>) -> Result<Dictionary, Error> {
    let format = ConfigFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::from(ConfigError::NotFound {
                path: path.display().to_string(),
            })
        } else {
            Error::io_with_path(&err, path)
        }
    })?;

    let mut dictionary = format.parse(&contents)?;
    debug!(
        path = %path.display(),
        ?format,
        entries = dictionary.len(),
        "loaded builder parameters"
    );

    let Some(section) = section else {
        return Ok(dictionary);
    };
    let table = dictionary
        .remove(section)
        .ok_or_else(|| ConfigError::MissingSection {
            section: section.to_string(),
        })?;
    Dictionary::from_value(table).ok_or_else(|| {
        ConfigError::InvalidSection {
            section: section.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastformer_types::ParamValue;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/b.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("b.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("b.yaml")),
            Err(Error::Config(ConfigError::UnsupportedFormat { .. }))
        ));
    }

    #[test]
    fn test_parse_toml() {
        let d = ConfigFormat::Toml
            .parse("n_layers = 6\ndropout = 0.2\nactivation = \"gelu\"\n")
            .unwrap();
        assert_eq!(d.get("n_layers"), Some(&ParamValue::Int(6)));
        assert_eq!(d.get("dropout"), Some(&ParamValue::Float(0.2)));
        assert_eq!(d.get("activation"), Some(&ParamValue::Str("gelu".into())));
    }

    #[test]
    fn test_read_failures() {
        let err = load_dictionary(Path::new("/nonexistent/params.toml"), None).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound { .. })));

        // a directory exists but cannot be read as a file
        let dir = tempfile::Builder::new().suffix(".toml").tempdir().unwrap();
        let err = load_dictionary(dir.path(), None).unwrap_err();
        assert!(matches!(&err, Error::Io { path, .. } if *path == dir.path().display().to_string()));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ConfigFormat::Json.parse("[1, 2]"),
            Err(Error::Config(ConfigError::ParseError { .. }))
        ));
        assert!(matches!(
            ConfigFormat::Toml.parse("n_layers = "),
            Err(Error::Config(ConfigError::ParseError { .. }))
        ));
    }
}
