use super::{CutSelection, SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for [`GomorySolver`](crate::solver::GomorySolver)
///
/// ```
/// use gomory::solver::*;
///
/// let settings = GomorySettingsBuilder::default()
///     .max_cuts(10)
///     .verbose(true)
///     .build()
///     .unwrap();
/// assert_eq!(settings.max_iter, 100);
/// ```

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GomorySettings {
    ///maximum number of pivots in each simplex phase
    #[builder(default = "100")]
    pub max_iter: u32,

    ///maximum number of cuts added
    #[builder(default = "50")]
    pub max_cuts: u32,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///source row policy for cut generation
    #[builder(default = "CutSelection::IntegerBasic")]
    pub cut_selection: CutSelection,
}

impl Default for GomorySettings {
    fn default() -> GomorySettings {
        GomorySettingsBuilder::default().build().unwrap()
    }
}

impl GomorySettings {
    /// Checks that the settings are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_max_iter(self.max_iter)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for GomorySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        GomorySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl GomorySettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max_iter) = self.max_iter {
            validate_max_iter(max_iter)?;
        }
        Ok(())
    }
}

fn validate_max_iter(max_iter: u32) -> Result<(), SettingsError> {
    // a zero cap would stop every phase before its first pivot
    if max_iter == 0 {
        return Err(SettingsError::BadFieldValue("max_iter"));
    }
    Ok(())
}
