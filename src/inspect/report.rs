//! Combined, serializable view of layouts and constants

use super::layout::{self, Layout};
use super::registry::{Constant, Group, CONSTANTS};
use crate::config::{OutputConfig, OutputFormat, ReportConfig};
use crate::core::{AbiResult, VERSION};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub version: &'static str,
    pub pointer_width: usize,
    pub layouts: Vec<Layout>,
    pub constants: Vec<Constant>,
}

impl Report {
    /// Collect what `config` asks for
    pub fn build(config: &ReportConfig) -> AbiResult<Self> {
        let groups = config
            .groups
            .iter()
            .map(|g| g.parse::<Group>())
            .collect::<AbiResult<Vec<_>>>()?;

        let layouts = if config.layouts {
            layout::all()
        } else {
            Vec::new()
        };

        let constants: Vec<Constant> = if config.constants {
            CONSTANTS
                .iter()
                .filter(|c| groups.is_empty() || groups.contains(&c.group))
                .copied()
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            layouts = layouts.len(),
            constants = constants.len(),
            "built report"
        );

        Ok(Report {
            version: VERSION,
            pointer_width: usize::BITS as usize,
            layouts,
            constants,
        })
    }

    pub fn render(&self, output: &OutputConfig) -> AbiResult<String> {
        let rendered = match (output.format, output.pretty) {
            (OutputFormat::Json, true) => serde_json::to_string_pretty(self)?,
            (OutputFormat::Json, false) => serde_json::to_string(self)?,
            (OutputFormat::Toml, true) => toml::to_string_pretty(self)?,
            (OutputFormat::Toml, false) => toml::to_string(self)?,
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::core::AbiError;

    #[test]
    fn test_default_report() {
        let config = default_config();
        let report = Report::build(&config.report).unwrap();

        assert_eq!(report.version, VERSION);
        assert_eq!(report.pointer_width, usize::BITS as usize);
        assert_eq!(report.layouts.len(), 6);
        assert_eq!(report.constants.len(), CONSTANTS.len());
    }

    #[test]
    fn test_group_filter() {
        let mut config = default_config().report;
        config.layouts = false;
        config.groups = vec!["wait".to_string(), "status".to_string()];

        let report = Report::build(&config).unwrap();
        assert!(report.layouts.is_empty());
        assert!(report
            .constants
            .iter()
            .all(|c| c.group == Group::Wait || c.group == Group::Status));
        assert_eq!(report.constants.len(), 10);
    }

    #[test]
    fn test_unknown_group() {
        let mut config = default_config().report;
        config.groups = vec!["colors".to_string()];
        assert!(matches!(
            Report::build(&config),
            Err(AbiError::UnknownGroup(_))
        ));
    }

    #[test]
    fn test_render_json() {
        let mut config = default_config();
        config.report.groups = vec!["toolhelp".to_string()];
        config.output.pretty = false;

        let report = Report::build(&config.report).unwrap();
        let json = report.render(&config.output).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layouts"][0]["name"], "THREADENTRY32");
        assert_eq!(value["layouts"][0]["size"], 28);
        assert_eq!(value["constants"][0]["name"], "TH32CS_SNAPHEAPLIST");
        assert_eq!(value["constants"][0]["group"], "toolhelp");
    }

    #[test]
    fn test_render_toml() {
        let mut config = default_config();
        config.report.layouts = false;
        config.report.groups = vec!["service".to_string()];
        config.output.format = OutputFormat::Toml;

        let report = Report::build(&config.report).unwrap();
        let rendered = report.render(&config.output).unwrap();
        assert!(rendered.contains("[[constants]]"));
        assert!(rendered.contains("name = \"SERVICE_TYPE_ALL\""));
        assert!(rendered.contains("value = 319"));
    }
}
