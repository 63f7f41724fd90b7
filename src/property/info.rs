//! Descriptive metadata attached to every property.
//!
//! None of this affects parsing. It exists so that reporting collaborators
//! can group, filter and describe properties.

use clap::ValueEnum;
use serde::Serialize;

/// Functional area a property belongs to.
///
/// A property lists one or more groups; the first is its primary group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize)]
pub enum Group {
    Bazel,
    Bitbake,
    Blackduck,
    BlackduckServer,
    Cleanup,
    Conda,
    Cpan,
    Default,
    Detector,
    Docker,
    General,
    Global,
    Go,
    Gradle,
    Hex,
    Logging,
    Maven,
    Npm,
    Nuget,
    Offline,
    Packagist,
    Paths,
    Pear,
    Pip,
    Policy,
    Polaris,
    Project,
    ProjectInfo,
    ProjectSetting,
    Proxy,
    Python,
    Report,
    ReportSetting,
    Ruby,
    Sbt,
    SignatureScanner,
    SourcePath,
    SourceScan,
    Yarn,
}

/// How prominently a property is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum Category {
    /// Shown by default.
    #[default]
    Basic,

    /// Only shown when advanced properties are requested.
    Advanced,
}

/// Short and optional long help text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Help {
    pub short: String,
    pub long: Option<String>,
}

/// Metadata describing a property for humans.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PropertyInfo {
    /// Display name, e.g. `Black Duck URL`.
    pub name: String,

    /// Version of the tool that introduced the property.
    pub from_version: String,

    pub help: Help,

    /// Groups the property belongs to, primary group first.
    pub groups: Vec<Group>,

    pub category: Category,
}

impl PropertyInfo {
    /// The group the property is listed under, if any group was declared.
    #[must_use]
    pub fn primary_group(&self) -> Option<Group> {
        self.groups.first().copied()
    }

    /// Whether the property carries the given group anywhere in its list.
    #[must_use]
    pub fn has_group(&self, group: Group) -> bool {
        self.groups.contains(&group)
    }
}
