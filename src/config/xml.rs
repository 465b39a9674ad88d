//! XML configuration support.
//! Loads optional settings from config.xml (quick_xml + serde):
//!
//! <config>
//!   <source_prefix>/data/incoming</source_prefix>
//!   <dest_prefix>/data/labels</dest_prefix>
//!   <backup_prefix>/backup/labels</backup_prefix>
//!   <log_level>normal</log_level>
//!   <log_file>/var/log/labelmv.log</log_file>
//!   <include_hidden>false</include_hidden>
//!   <substring_match>false</substring_match>
//!   <strict>false</strict>
//! </config>
//!
//! Notes:
//! - A missing file is not an error; the caller keeps its defaults.
//! - Unknown elements are rejected so typos surface at startup.

use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{AuthMode, Config, LogLevel};
use crate::errors::LabelMvError;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source_prefix: Option<String>,
    dest_prefix: Option<String>,
    backup_prefix: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    include_hidden: Option<bool>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    substring_match: Option<bool>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    strict: Option<bool>,
}

// Custom deserializer that trims surrounding whitespace for optional bools
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Some(true)),
            "false" | "no" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean '{other}'"
            ))),
        },
    }
}

/// Settings read from the config file. Every field is optional; unset ones
/// leave the corresponding `Config` value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileConfig {
    pub source_prefix: Option<PathBuf>,
    pub dest_prefix: Option<PathBuf>,
    pub backup_prefix: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub include_hidden: Option<bool>,
    pub substring_match: Option<bool>,
    pub strict: Option<bool>,
}

impl FileConfig {
    /// Overlay the file values onto `cfg`.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(p) = &self.source_prefix {
            cfg.source_prefix = p.clone();
        }
        if let Some(p) = &self.dest_prefix {
            cfg.dest_prefix = p.clone();
        }
        if let Some(p) = &self.backup_prefix {
            cfg.backup_prefix = p.clone();
        }
        if let Some(l) = &self.log_level {
            cfg.log_level = l.clone();
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
        if let Some(h) = self.include_hidden {
            cfg.include_hidden = h;
        }
        if let Some(s) = self.substring_match {
            cfg.auth_mode = if s { AuthMode::Substring } else { AuthMode::Ancestor };
        }
        if let Some(s) = self.strict {
            cfg.strict = s;
        }
    }
}

fn non_empty_path(s: Option<&str>) -> Option<PathBuf> {
    s.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(PathBuf::from)
}

/// Parse config XML text.
pub fn parse_config_xml(content: &str, origin: &Path) -> Result<FileConfig, LabelMvError> {
    let parsed: XmlConfig = from_xml_str(content).map_err(|e| LabelMvError::ConfigParse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;

    let log_level = match parsed.log_level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<LogLevel>().map_err(|reason| {
            LabelMvError::ConfigParse {
                path: origin.to_path_buf(),
                reason,
            }
        })?),
    };

    Ok(FileConfig {
        source_prefix: non_empty_path(parsed.source_prefix.as_deref()),
        dest_prefix: non_empty_path(parsed.dest_prefix.as_deref()),
        backup_prefix: non_empty_path(parsed.backup_prefix.as_deref()),
        log_level,
        log_file: non_empty_path(parsed.log_file.as_deref()),
        include_hidden: parsed.include_hidden,
        substring_match: parsed.substring_match,
        strict: parsed.strict,
    })
}

/// Read the config file from `$LABELMV_CONFIG` or the default location.
/// Returns Ok(None) when there is no file.
pub fn load_config_from_xml() -> Result<Option<FileConfig>, LabelMvError> {
    let Some(cfg_path) = default_config_path() else {
        return Ok(None);
    };
    if !cfg_path.is_file() {
        debug!("No config file at {}", cfg_path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(&cfg_path).map_err(|e| LabelMvError::ConfigParse {
        path: cfg_path.clone(),
        reason: e.to_string(),
    })?;
    parse_config_xml(&content, &cfg_path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document_maps_every_field() {
        let xml = r#"<config>
  <source_prefix> /data/in </source_prefix>
  <dest_prefix>/data/out</dest_prefix>
  <backup_prefix>/data/bkp</backup_prefix>
  <log_level>debug</log_level>
  <log_file>/tmp/labelmv.log</log_file>
  <include_hidden> true </include_hidden>
  <substring_match>yes</substring_match>
  <strict>0</strict>
</config>"#;
        let fc = parse_config_xml(xml, Path::new("config.xml")).unwrap();
        assert_eq!(fc.source_prefix, Some(PathBuf::from("/data/in")));
        assert_eq!(fc.dest_prefix, Some(PathBuf::from("/data/out")));
        assert_eq!(fc.backup_prefix, Some(PathBuf::from("/data/bkp")));
        assert_eq!(fc.log_level, Some(LogLevel::Debug));
        assert_eq!(fc.log_file, Some(PathBuf::from("/tmp/labelmv.log")));
        assert_eq!(fc.include_hidden, Some(true));
        assert_eq!(fc.substring_match, Some(true));
        assert_eq!(fc.strict, Some(false));
    }

    #[test]
    fn empty_elements_are_unset() {
        let xml = "<config><source_prefix></source_prefix><log_file>  </log_file></config>";
        let fc = parse_config_xml(xml, Path::new("config.xml")).unwrap();
        assert_eq!(fc, FileConfig::default());
    }

    #[test]
    fn unknown_element_is_rejected() {
        let xml = "<config><download_base>/x</download_base></config>";
        let err = parse_config_xml(xml, Path::new("config.xml")).unwrap_err();
        assert_eq!(err.kind(), "config_parse");
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let xml = "<config><log_level>loud</log_level></config>";
        let err = parse_config_xml(xml, Path::new("config.xml")).unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn apply_overlays_only_set_values() {
        let mut cfg = Config::default();
        let fc = FileConfig {
            dest_prefix: Some(PathBuf::from("/dst")),
            substring_match: Some(true),
            ..FileConfig::default()
        };
        fc.apply(&mut cfg);
        assert_eq!(cfg.source_prefix, PathBuf::from("/"));
        assert_eq!(cfg.dest_prefix, PathBuf::from("/dst"));
        assert_eq!(cfg.auth_mode, AuthMode::Substring);
        assert!(!cfg.strict);
    }
}
