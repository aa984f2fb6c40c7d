//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::RewardCatalog;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub fn parse_single_file<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_data_file(&path.display().to_string(), &contents)
}

fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_single_file(&path.display().to_string(), &contents)
}

/// Load all progression content from `base_path` into a RewardCatalog.
/// Returns errors for any files that fail to load.
pub fn load_catalog(base_path: &Path) -> Result<RewardCatalog, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    macro_rules! load_list {
        ($file:expr, $type:ty) => {
            match load_data_file::<$type>(&base_path.join($file)) {
                Ok(items) => items,
                Err(e) => {
                    errors.push(e);
                    Vec::new()
                }
            }
        };
    }

    let survivor_traits = load_list!("survivor_traits.ron", SurvivorTrait);
    let milestones = load_list!("milestones.ron", Milestone);
    let streak_thresholds = load_list!("streak_thresholds.ron", StreakBonusThreshold);

    let rules = match load_single_file::<ProgressionRules>(&base_path.join("progression_rules.ron"))
    {
        Ok(rules) => rules,
        Err(e) => {
            errors.push(e);
            return Err(errors);
        }
    };

    if errors.is_empty() {
        Ok(RewardCatalog {
            survivor_traits,
            milestones,
            streak_thresholds,
            rules,
        })
    } else {
        Err(errors)
    }
}
