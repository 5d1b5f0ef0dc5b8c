use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::cli::flags::Cli;
use crate::config::{load_config, AppConfig};
use crate::core::error::TideError;
use crate::core::types::OutputFormat;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub app: AppConfig,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let mut app = load_config(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        app.db_path = db.clone();
    }
    let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Json);
    Ok(RunConfig {
        app,
        format,
        output: cli.output.clone(),
    })
}

/// Parses an enum query value; absent or `ALL` means no filter.
pub fn optional_filter<T>(value: Option<&str>) -> Result<Option<T>, TideError>
where
    T: FromStr<Err = TideError>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

/// Reads a JSON body from `path`, or stdin when the path is absent or `-`.
pub fn read_body(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("reading request body from {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request body from stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{HazardType, Severity};

    #[test]
    fn all_and_empty_mean_no_filter() {
        assert_eq!(optional_filter::<HazardType>(Some("ALL")).unwrap(), None);
        assert_eq!(optional_filter::<HazardType>(Some("")).unwrap(), None);
        assert_eq!(optional_filter::<Severity>(None).unwrap(), None);
    }

    #[test]
    fn named_values_parse() {
        assert_eq!(
            optional_filter::<HazardType>(Some("tsunami")).unwrap(),
            Some(HazardType::Tsunami)
        );
        assert!(optional_filter::<Severity>(Some("EXTREME")).is_err());
    }
}
