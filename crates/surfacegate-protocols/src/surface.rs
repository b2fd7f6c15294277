//! Supported web surfaces and their experiment assignments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A web property the extension customizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Surface {
    Gmail,
    GoogleDocs,
    GoogleDrive,
    OneNote,
}

impl Surface {
    /// All supported surfaces.
    pub const ALL: [Surface; 4] = [
        Surface::Gmail,
        Surface::GoogleDocs,
        Surface::GoogleDrive,
        Surface::OneNote,
    ];

    /// Storage and flag namespace for this surface.
    pub fn key(self) -> &'static str {
        match self {
            Surface::Gmail => "gmail",
            Surface::GoogleDocs => "google-docs",
            Surface::GoogleDrive => "gdrive",
            Surface::OneNote => "onenote",
        }
    }

    /// Prefix used for translation keys, e.g. `gmailImplicitDVNotification`.
    pub fn translation_prefix(self) -> &'static str {
        match self {
            Surface::Gmail => "gmail",
            Surface::GoogleDocs => "googleDocs",
            Surface::GoogleDrive => "googleDrive",
            Surface::OneNote => "oneNote",
        }
    }

    /// Segment used inside analytics event names.
    pub fn analytics_name(self) -> &'static str {
        match self {
            Surface::Gmail => "Gmail",
            Surface::GoogleDocs => "DocsGoogle",
            Surface::GoogleDrive => "GoogleDrive",
            Surface::OneNote => "OneNote",
        }
    }

    /// Experiment codes attributed to users bucketed on this surface.
    pub fn experiment_assignment(self) -> ExperimentAssignment {
        match self {
            Surface::Gmail => ExperimentAssignment {
                treatment: "GIT",
                control: "GIC",
            },
            Surface::GoogleDocs | Surface::GoogleDrive | Surface::OneNote => {
                ExperimentAssignment::NONE
            }
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a surface key is not one of the supported surfaces.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown surface: {0}")]
pub struct UnknownSurface(pub String);

impl FromStr for Surface {
    type Err = UnknownSurface;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Surface::ALL
            .into_iter()
            .find(|surface| surface.key() == s)
            .ok_or_else(|| UnknownSurface(s.to_string()))
    }
}

impl TryFrom<String> for Surface {
    type Error = UnknownSurface;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Surface> for String {
    fn from(surface: Surface) -> Self {
        surface.key().to_string()
    }
}

/// Side of an A/B experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    Treatment,
    Control,
}

/// Treatment and control experiment codes for a surface.
///
/// Empty codes mean the surface has no experiment attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentAssignment {
    pub treatment: &'static str,
    pub control: &'static str,
}

impl ExperimentAssignment {
    pub const NONE: ExperimentAssignment = ExperimentAssignment {
        treatment: "",
        control: "",
    };

    pub fn code(&self, arm: Arm) -> &'static str {
        match arm {
            Arm::Treatment => self.treatment,
            Arm::Control => self.control,
        }
    }

    pub fn is_none(&self) -> bool {
        self.treatment.is_empty() && self.control.is_empty()
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
