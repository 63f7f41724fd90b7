//! Enumeration domains used by the property catalog.
//!
//! Every domain spells its members in upper snake case, which is the form
//! users write in settings files and on the command line.

use clap::ValueEnum;

use crate::parse::EnumDomain;

/// Tools the detector run can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectTool {
    Detector,
    SignatureScan,
    BinaryScan,
    Polaris,
    Docker,
    Bazel,
}

impl EnumDomain for DetectTool {
    const DOMAIN: &'static str = "DetectTool";
}

/// Package manager detectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectorType {
    Bitbake,
    Clang,
    Cocoapods,
    Conda,
    Cpan,
    Cran,
    Git,
    GoMod,
    GoDep,
    GoVndr,
    GoVendor,
    GoGradle,
    Gradle,
    Hex,
    Maven,
    Npm,
    Nuget,
    Packagist,
    Pear,
    Pip,
    Rubygems,
    Sbt,
    Swift,
    Yarn,
}

impl EnumDomain for DetectorType {
    const DOMAIN: &'static str = "DetectorType";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicySeverityType {
    Minor,
    Major,
    Critical,
    Blocker,
    Trivial,
    Unspecified,
}

impl EnumDomain for PolicySeverityType {
    const DOMAIN: &'static str = "PolicySeverityType";
}

/// Data carried over when a project version is cloned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectCloneCategoriesType {
    ComponentData,
    VulnData,
    LicenseTermFulfillment,
}

impl EnumDomain for ProjectCloneCategoriesType {
    const DOMAIN: &'static str = "ProjectCloneCategoriesType";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectVersionDistributionType {
    External,
    Saas,
    Internal,
    Opensource,
}

impl EnumDomain for ProjectVersionDistributionType {
    const DOMAIN: &'static str = "ProjectVersionDistributionType";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectVersionPhaseType {
    Planning,
    Development,
    Released,
    Deprecated,
    Archived,
    Prerelease,
}

impl EnumDomain for ProjectVersionPhaseType {
    const DOMAIN: &'static str = "ProjectVersionPhaseType";
}

/// Snippet scanning modes understood by the signature scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnippetMatching {
    SnippetMatching,
    SnippetMatchingOnly,
    FullSnippetMatching,
    FullSnippetMatchingOnly,
}

impl EnumDomain for SnippetMatching {
    const DOMAIN: &'static str = "SnippetMatching";
}

/// Adds `NONE` to [`SnippetMatching`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtendedSnippetMode {
    None,
}

impl EnumDomain for ExtendedSnippetMode {
    const DOMAIN: &'static str = "ExtendedSnippetMode";
}

/// Adds `NONE` to [`PolicySeverityType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtendedPolicySeverityType {
    None,
}

impl EnumDomain for ExtendedPolicySeverityType {
    const DOMAIN: &'static str = "ExtendedPolicySeverityType";
}

/// Bazel workspace rules the Bazel tool knows how to query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceRule {
    MavenJar,
    MavenInstall,
    HaskellCabalLibrary,
    Unspecified,
}

impl EnumDomain for WorkspaceRule {
    const DOMAIN: &'static str = "WorkspaceRule";
}

/// Which dependencies of an aggregate BOM are reported as direct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregateMode {
    Transitive,
    Direct,
}

impl EnumDomain for AggregateMode {
    const DOMAIN: &'static str = "AggregateMode";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefaultVersionNameScheme {
    Timestamp,
    Default,
}

impl EnumDomain for DefaultVersionNameScheme {
    const DOMAIN: &'static str = "DefaultVersionNameScheme";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl EnumDomain for LogLevel {
    const DOMAIN: &'static str = "LogLevel";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::enums::tests::assert_well_formed;
    use crate::parse::{ExtendedEnumParser, ExtendedValue, ValueParser};

    #[test]
    fn test_every_domain_is_well_formed() {
        assert_well_formed::<DetectTool>();
        assert_well_formed::<DetectorType>();
        assert_well_formed::<PolicySeverityType>();
        assert_well_formed::<ProjectCloneCategoriesType>();
        assert_well_formed::<ProjectVersionDistributionType>();
        assert_well_formed::<ProjectVersionPhaseType>();
        assert_well_formed::<SnippetMatching>();
        assert_well_formed::<ExtendedSnippetMode>();
        assert_well_formed::<ExtendedPolicySeverityType>();
        assert_well_formed::<WorkspaceRule>();
        assert_well_formed::<AggregateMode>();
        assert_well_formed::<DefaultVersionNameScheme>();
        assert_well_formed::<LogLevel>();
    }

    #[test]
    fn test_member_names_are_upper_snake_case() {
        assert_eq!(DetectTool::SignatureScan.name(), "SIGNATURE_SCAN");
        assert_eq!(DetectorType::GoMod.name(), "GO_MOD");
        assert_eq!(
            SnippetMatching::FullSnippetMatchingOnly.name(),
            "FULL_SNIPPET_MATCHING_ONLY"
        );
        assert_eq!(ExtendedSnippetMode::None.name(), "NONE");
    }

    #[test]
    fn test_snippet_mode_none_is_extension() {
        let parser = ExtendedEnumParser::<SnippetMatching, ExtendedSnippetMode>::new();
        assert_eq!(
            parser.parse("none"),
            Ok(ExtendedValue::Extension(ExtendedSnippetMode::None))
        );
        assert_eq!(
            parser.parse("SNIPPET_MATCHING"),
            Ok(ExtendedValue::Base(SnippetMatching::SnippetMatching))
        );
    }

    #[test]
    fn test_policy_severity_none_is_extension() {
        let parser = ExtendedEnumParser::<PolicySeverityType, ExtendedPolicySeverityType>::new();
        assert_eq!(
            parser.parse("NONE"),
            Ok(ExtendedValue::Extension(ExtendedPolicySeverityType::None))
        );
        assert_eq!(
            parser.parse("blocker"),
            Ok(ExtendedValue::Base(PolicySeverityType::Blocker))
        );
    }
}
