//! Integration tests for detect-config
//!
//! These tests write settings files into temporary directories and resolve
//! them through the full catalog, the way the binary does.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use detect_config::catalog::{
    DetectProperties, DetectTool, DetectorType, PolicySeverityType, ProjectVersionPhaseType,
    SnippetMatching,
};
use detect_config::config::{MapPropertySource, PropertyConfiguration, PropertySource, env, file};
use detect_config::error::{SelectionError, SourceError, ValueParseError};
use detect_config::logging;
use detect_config::parse::{EnumDomain, ExtendedValue};
use detect_config::property::{Property, PropertyKey};
use detect_config::registry::{self, Registry};
use detect_config::report::{MASK, Report, ReportOptions};
use detect_config::selection::Selection;

/// Helper function to create a temporary directory structure for testing
fn create_test_directory() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a file with specified content
fn create_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write file");
    path.to_path_buf()
}

fn boxed(source: MapPropertySource) -> Box<dyn PropertySource> {
    Box::new(source)
}

const SETTINGS: &str = r#"
[blackduck]
url = "https://blackduck.example.com"
timeout = 45
password = "hunter2"

[detect]
tools = ["ALL"]
"tools.excluded" = "POLARIS, BINARY_SCAN"
project.name = "demo"
project.version.phase = "released"
project.tier = 3
excluded.detector.types = ["NPM"]

[detect.blackduck.signature.scanner]
snippet.matching = "SNIPPET_MATCHING"
"#;

#[test]
fn test_settings_file_resolves_through_catalog() {
    logging::init_test();

    let temp_dir = create_test_directory();
    let path = create_file(&temp_dir.path().join("application.toml"), SETTINGS);

    let catalog = DetectProperties::new();
    let registry = Registry::new(catalog.all()).unwrap();
    let config = PropertyConfiguration::new(&registry, vec![boxed(file::load(&path).unwrap())]);

    assert!(config.validate().is_empty());
    assert!(config.unknown_keys().is_empty());

    assert_eq!(
        config.get(&catalog.blackduck_url).unwrap().as_deref(),
        Some("https://blackduck.example.com")
    );
    assert_eq!(config.get(&catalog.blackduck_timeout), Ok(45));
    assert_eq!(config.get(&catalog.detect_project_tier), Ok(Some(3)));
    assert_eq!(
        config.get(&catalog.detect_project_version_phase),
        Ok(ProjectVersionPhaseType::Released)
    );
    assert_eq!(
        config.get(&catalog.detect_blackduck_signature_scanner_snippet_matching),
        Ok(ExtendedValue::Base(SnippetMatching::SnippetMatching))
    );

    // untouched properties keep their defaults
    assert_eq!(config.get(&catalog.detect_cleanup), Ok(true));
    assert_eq!(config.get(&catalog.detect_project_version_name), Ok(None));
}

#[test]
fn test_active_tools_and_detectors_from_file() {
    let temp_dir = create_test_directory();
    let path = create_file(&temp_dir.path().join("application.toml"), SETTINGS);

    let catalog = DetectProperties::new();
    let registry = Registry::new(catalog.all()).unwrap();
    let config = PropertyConfiguration::new(&registry, vec![boxed(file::load(&path).unwrap())]);

    let tools = config
        .selection(&catalog.detect_tools, &catalog.detect_tools_excluded)
        .unwrap()
        .resolve();
    assert_eq!(
        tools.members(),
        &[
            DetectTool::Detector,
            DetectTool::SignatureScan,
            DetectTool::Docker,
            DetectTool::Bazel,
        ]
    );

    let detectors = config
        .selection(
            &catalog.detect_included_detector_types,
            &catalog.detect_excluded_detector_types,
        )
        .unwrap()
        .resolve();
    assert!(!detectors.contains(DetectorType::Npm));
    assert_eq!(detectors.len(), DetectorType::members().len() - 1);
}

#[test]
fn test_layer_precedence() {
    let temp_dir = create_test_directory();
    let path = create_file(&temp_dir.path().join("application.toml"), SETTINGS);

    let catalog = DetectProperties::new();
    let registry = Registry::new(catalog.all()).unwrap();

    let command_line =
        MapPropertySource::from_overrides("command line", &["blackduck.timeout=10"]).unwrap();
    let environment = env::from_vars(
        vec![
            ("BLACKDUCK_TIMEOUT".to_string(), "20".to_string()),
            ("DETECT_PROJECT_NAME".to_string(), "from-env".to_string()),
            ("UNRELATED_VARIABLE".to_string(), "x".to_string()),
        ],
        &registry,
    );
    let settings = file::load(&path).unwrap();

    let config = PropertyConfiguration::new(
        &registry,
        vec![boxed(command_line), boxed(environment), boxed(settings)],
    );

    assert_eq!(config.get(&catalog.blackduck_timeout), Ok(10));
    assert_eq!(config.source_of(catalog.blackduck_timeout.key()), Some("command line"));

    assert_eq!(
        config.get(&catalog.detect_project_name),
        Ok(Some("from-env".to_string()))
    );
    assert_eq!(config.source_of(catalog.detect_project_name.key()), Some("environment"));

    assert_eq!(
        config.source_of(catalog.blackduck_url.key()),
        Some(path.display().to_string().as_str())
    );
    assert!(config.unknown_keys().is_empty());
}

#[test]
fn test_invalid_values_are_all_reported() {
    let temp_dir = create_test_directory();
    let path = create_file(
        &temp_dir.path().join("application.toml"),
        r#"
blackduck.timeout = "soon"
detect.cleanup = "yes"
detect.tools = "DOCKER,HAMMER"
detect.policy.check.fail.on.severities = "ALL"
"#,
    );

    let catalog = DetectProperties::new();
    let registry = Registry::new(catalog.all()).unwrap();
    let config = PropertyConfiguration::new(&registry, vec![boxed(file::load(&path).unwrap())]);

    let failures = config.validate();
    let keys: Vec<&str> = failures.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["blackduck.timeout", "detect.cleanup", "detect.tools"]);

    let tools = failures.iter().find(|f| f.key.as_str() == "detect.tools").unwrap();
    assert_eq!(tools.index, Some(1));
    assert_eq!(tools.raw, "DOCKER,HAMMER");
    assert!(matches!(tools.source, ValueParseError::Element { .. }));

    // a value that does not parse is never replaced by the default
    assert!(config.get(&catalog.blackduck_timeout).is_err());
    assert!(config.effective_values().is_err());

    assert_eq!(
        config.get(&catalog.detect_policy_check_fail_on_severities),
        Ok(vec![Selection::<PolicySeverityType>::All])
    );
}

#[test]
fn test_unknown_keys_are_surfaced() {
    let catalog = DetectProperties::new();
    let registry = Registry::new(catalog.all()).unwrap();
    let config = PropertyConfiguration::new(
        &registry,
        vec![boxed(
            MapPropertySource::new("file")
                .with("detect.tool", "DOCKER")
                .with("detect.tools", "DOCKER"),
        )],
    );

    assert_eq!(config.unknown_keys(), vec![PropertyKey::new("detect.tool")]);
    assert!(config.validate().is_empty());
}

#[test]
fn test_required_detectors() {
    let catalog = DetectProperties::new();
    let registry = Registry::new(catalog.all()).unwrap();
    let config = PropertyConfiguration::new(
        &registry,
        vec![boxed(
            MapPropertySource::new("command line")
                .with("detect.excluded.detector.types", "PIP,NPM")
                .with("detect.required.detector.types", "npm, gradle, pip"),
        )],
    );

    let detectors = config
        .selection(
            &catalog.detect_included_detector_types,
            &catalog.detect_excluded_detector_types,
        )
        .unwrap()
        .resolve();
    let required = config
        .get(&catalog.detect_required_detector_types)
        .unwrap()
        .unwrap();

    assert_eq!(
        detectors.require(&required),
        Err(SelectionError::RequiredMissing {
            domain: "DetectorType",
            missing: vec!["NPM".to_string(), "PIP".to_string()],
        })
    );
}

#[test]
fn test_missing_and_malformed_files() {
    let temp_dir = create_test_directory();

    let missing = file::load(&temp_dir.path().join("absent.toml"));
    assert!(matches!(missing, Err(SourceError::Read { .. })));

    let broken = create_file(&temp_dir.path().join("broken.toml"), "[detect\ntools = ");
    assert!(matches!(file::load(&broken), Err(SourceError::Toml { .. })));
}

#[test]
fn test_report_masks_secrets_in_json() {
    let temp_dir = create_test_directory();
    let path = create_file(&temp_dir.path().join("application.toml"), SETTINGS);

    let catalog = DetectProperties::new();
    let registry = Registry::new(catalog.all()).unwrap();
    let config = PropertyConfiguration::new(&registry, vec![boxed(file::load(&path).unwrap())]);

    let tools = config
        .selection(&catalog.detect_tools, &catalog.detect_tools_excluded)
        .unwrap()
        .resolve();
    let detectors = config
        .selection(
            &catalog.detect_included_detector_types,
            &catalog.detect_excluded_detector_types,
        )
        .unwrap()
        .resolve();

    let report = Report::new(
        config.effective_values().unwrap(),
        &ReportOptions::default(),
        &tools,
        &detectors,
        config.unknown_keys(),
    );
    let json = report.to_json().unwrap();

    assert!(!json.contains("hunter2"));
    assert!(json.contains(MASK));
    assert!(json.contains("\"SIGNATURE_SCAN\""));
    assert!(!json.contains("\"POLARIS\""));
}

#[test]
fn test_global_registry_matches_catalog() {
    let registry = registry::global().unwrap();

    assert_eq!(registry.len(), DetectProperties::global().all().len());
    assert!(registry.contains_key("DETECT.TOOLS"));

    let snippet = registry
        .by_key("detect.blackduck.signature.scanner.snippet.matching")
        .unwrap();
    assert_eq!(snippet.default_text(), Some("NONE".to_string()));
    assert!(registry.by_key("detect.nope").is_err());
}
