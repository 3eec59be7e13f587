//! Platform and status enumerations shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A third-party platform hosting audit contests or bug bounty programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// cantina.xyz
    Cantina,
    /// hackenproof.com
    HackenProof,
    /// immunefi.com
    Immunefi,
    /// sherlock.xyz
    Sherlock,
    /// codehawks.cyfrin.io
    CodeHawks,
    /// code4rena.com
    #[serde(rename = "code4rena")]
    Code4rena,
    /// hats.finance
    HatsFinance,
}

impl Platform {
    /// Every supported platform, in display order.
    pub const ALL: [Platform; 7] = [
        Platform::Cantina,
        Platform::HackenProof,
        Platform::Immunefi,
        Platform::Sherlock,
        Platform::CodeHawks,
        Platform::Code4rena,
        Platform::HatsFinance,
    ];

    /// The platform name as it appears on the wire and in the UI.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Cantina => "Cantina",
            Platform::HackenProof => "HackenProof",
            Platform::Immunefi => "Immunefi",
            Platform::Sherlock => "Sherlock",
            Platform::CodeHawks => "CodeHawks",
            Platform::Code4rena => "code4rena",
            Platform::HatsFinance => "HatsFinance",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an audit contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramStatus {
    /// Status could not be determined from the source platform.
    Unknown,
    /// Announced but not yet started.
    Upcoming,
    /// Currently accepting submissions.
    Ongoing,
    /// Submission window closed, judging in progress.
    Evaluating,
    /// Results published.
    Finished,
}

impl ProgramStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ProgramStatus; 5] = [
        ProgramStatus::Unknown,
        ProgramStatus::Upcoming,
        ProgramStatus::Ongoing,
        ProgramStatus::Evaluating,
        ProgramStatus::Finished,
    ];

    /// The status name as it appears on the wire and in the UI.
    pub fn as_str(self) -> &'static str {
        match self {
            ProgramStatus::Unknown => "Unknown",
            ProgramStatus::Upcoming => "Upcoming",
            ProgramStatus::Ongoing => "Ongoing",
            ProgramStatus::Evaluating => "Evaluating",
            ProgramStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for ProgramStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
