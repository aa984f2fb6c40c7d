//! Content domain: reward catalog data, RON loading and validation.

mod data;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use data::*;
pub use loader::{ContentLoadError, load_catalog, parse_data_file, parse_single_file};
pub use registry::RewardCatalog;
pub use validation::{ValidationError, validate_catalog};

use bevy::prelude::*;
use std::path::PathBuf;

/// Where the startup loader looks for catalog overrides.
#[derive(Resource, Debug, Clone)]
pub struct ContentSettings {
    pub data_dir: PathBuf,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

/// Installs the reference catalog and replaces it with the RON content
/// from `ContentSettings::data_dir` when that content loads and validates.
#[derive(Default)]
pub struct ContentPlugin {
    pub settings: ContentSettings,
}

impl ContentPlugin {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings: ContentSettings {
                data_dir: data_dir.into(),
            },
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SurvivorTrait>()
            .register_type::<TraitTier>()
            .register_type::<Milestone>()
            .register_type::<StreakBonusThreshold>()
            .register_type::<ProgressionRules>()
            .register_type::<LevelUpRules>()
            .register_type::<ActionPointRule>()
            .register_type::<StatIncrements>()
            .register_type::<SurvivorTierRules>()
            .insert_resource(self.settings.clone())
            .init_resource::<RewardCatalog>()
            .add_systems(Startup, load_catalog_overrides);
    }
}

fn load_catalog_overrides(settings: Res<ContentSettings>, mut catalog: ResMut<RewardCatalog>) {
    if !settings.data_dir.is_dir() {
        info!(
            "No content directory at {}, using reference catalog",
            settings.data_dir.display()
        );
        return;
    }

    let loaded = match load_catalog(&settings.data_dir) {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!(
                "{} content file(s) failed to load, keeping reference catalog",
                errors.len()
            );
            return;
        }
    };

    let problems = validate_catalog(&loaded);
    if !problems.is_empty() {
        for problem in &problems {
            error!("{}", problem);
        }
        warn!(
            "Catalog in {} failed validation with {} problem(s), keeping reference catalog",
            settings.data_dir.display(),
            problems.len()
        );
        return;
    }

    info!("{}", loaded.summary());
    *catalog = loaded;
}
