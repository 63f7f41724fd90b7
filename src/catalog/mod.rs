//! The catalog of every property the detector understands.
//!
//! [`DetectProperties`] owns one descriptor per key. [`DetectProperties::all`]
//! is the registration list handed to [`Registry::new`](crate::registry::Registry::new);
//! the `properties!` declaration keeps the struct fields and that list in
//! lockstep.

pub mod domains;

use std::sync::OnceLock;

use crate::parse::ExtendedValue;
use crate::property::*;

pub use domains::*;

macro_rules! properties {
    ($($field:ident: $ty:ty = $init:expr;)*) => {
        /// Every property descriptor, one field per key.
        pub struct DetectProperties {
            $(pub $field: $ty,)*
        }

        impl DetectProperties {
            /// Build every descriptor.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    $($field: $init,)*
                }
            }

            /// Every descriptor, in declaration order.
            #[must_use]
            pub fn all(&self) -> Vec<&dyn Property> {
                vec![$(&self.$field as &dyn Property,)*]
            }
        }
    };
}

impl Default for DetectProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectProperties {
    /// The process wide catalog, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        static CATALOG: OnceLock<DetectProperties> = OnceLock::new();
        CATALOG.get_or_init(Self::new)
    }
}

properties! {
    blackduck_api_token: OptionalStringProperty = OptionalStringProperty::string("blackduck.api.token")
        .named("Black Duck API Token", "4.2.0")
        .help("The API token used to authenticate with the Black Duck Server.")
        .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Default]);

    blackduck_offline_mode: RequiredBooleanProperty = RequiredBooleanProperty::boolean("blackduck.offline.mode", false)
        .named("Offline Mode", "4.2.0")
        .help("This can disable any Black Duck communication - if true, Detect will not upload BDIO files, it will not check policies, and it will not download and install the signature scanner.")
        .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Offline, Group::Default]);

    blackduck_password: OptionalStringProperty = OptionalStringProperty::string("blackduck.password")
        .named("Black Duck Password", "4.2.0")
        .help("Black Duck password.")
        .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Default]);

    blackduck_proxy_host: OptionalStringProperty = OptionalStringProperty::string("blackduck.proxy.host")
        .named("Proxy Host", "4.2.0")
        .help("Hostname for proxy server.")
        .groups(&[Group::Proxy, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_proxy_ignored_hosts: OptionalStringProperty = OptionalStringProperty::string("blackduck.proxy.ignored.hosts")
        .named("Bypass Proxy Hosts", "4.2.0")
        .help_long(
            "A comma separated list of regular expression host patterns that should not use the proxy.",
            "These patterns must adhere to Java regular expressions: https://docs.oracle.com/javase/8/docs/api/java/util/regex/Pattern.html",
        )
        .groups(&[Group::Proxy, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_proxy_ntlm_domain: OptionalStringProperty = OptionalStringProperty::string("blackduck.proxy.ntlm.domain")
        .named("NTLM Proxy Domain", "4.2.0")
        .help("NTLM Proxy domain.")
        .groups(&[Group::Proxy, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_proxy_ntlm_workstation: OptionalStringProperty = OptionalStringProperty::string("blackduck.proxy.ntlm.workstation")
        .named("NTLM Proxy Workstation", "4.2.0")
        .help("NTLM Proxy workstation.")
        .groups(&[Group::Proxy, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_proxy_password: OptionalStringProperty = OptionalStringProperty::string("blackduck.proxy.password")
        .named("Proxy Password", "4.2.0")
        .help("Proxy password.")
        .groups(&[Group::Proxy, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_proxy_port: OptionalStringProperty = OptionalStringProperty::string("blackduck.proxy.port")
        .named("Proxy Port", "4.2.0")
        .help("Proxy port.")
        .groups(&[Group::Proxy, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_proxy_username: OptionalStringProperty = OptionalStringProperty::string("blackduck.proxy.username")
        .named("Proxy Username", "4.2.0")
        .help("Proxy username.")
        .groups(&[Group::Proxy, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_timeout: RequiredIntegerProperty = RequiredIntegerProperty::integer("blackduck.timeout", 120)
        .named("Black Duck Timeout", "4.2.0")
        .help("The time to wait for network connections to complete (in seconds).")
        .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_trust_cert: RequiredBooleanProperty = RequiredBooleanProperty::boolean("blackduck.trust.cert", false)
        .named("Trust All SSL Certificates", "4.2.0")
        .help("If true, automatically trust the certificate for the current run of Detect only.")
        .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Default])
        .category(Category::Advanced);

    blackduck_url: OptionalStringProperty = OptionalStringProperty::string("blackduck.url")
        .named("Black Duck URL", "4.2.0")
        .help("URL of the Black Duck server.")
        .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Default]);

    blackduck_username: OptionalStringProperty = OptionalStringProperty::string("blackduck.username")
        .named("Black Duck Username", "4.2.0")
        .help("Black Duck username.")
        .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Default]);

    detect_parallel_processors: RequiredIntegerProperty = RequiredIntegerProperty::integer("detect.parallel.processors", 1)
        .named("Detect Parallel Processors", "6.0.0")
        .help("The number of threads to run processes in parallel, defaults to 1, but if you specify less than or equal to 0, the number of processors on the machine will be used.")
        .groups(&[Group::General, Group::Global])
        .category(Category::Advanced);

    detect_bash_path: OptionalStringProperty = OptionalStringProperty::string("detect.bash.path")
        .named("Bash Executable", "3.0.0")
        .help_long(
            "Path to the Bash executable.",
            "If set, Detect will use the given Bash executable instead of searching for one.",
        )
        .groups(&[Group::Paths, Group::Global]);

    detect_bazel_path: OptionalStringProperty = OptionalStringProperty::string("detect.bazel.path")
        .named("Bazel Executable", "5.2.0")
        .help("The path to the Bazel executable.")
        .groups(&[Group::Bazel, Group::Global]);

    detect_bazel_target: OptionalStringProperty = OptionalStringProperty::string("detect.bazel.target")
        .named("Bazel Target", "5.2.0")
        .help("The Bazel target (for example, //foo:foolib) for which dependencies are collected. For Detect to run Bazel, this property must be set.")
        .groups(&[Group::Bazel, Group::SourceScan]);

    detect_bazel_cquery_options: RequiredStringArrayProperty = RequiredStringArrayProperty::string_array("detect.bazel.cquery.options", &[])
        .named("Bazel cquery additional options", "6.1.0")
        .help("A comma-separated list of additional options to pass to the bazel cquery command.")
        .groups(&[Group::Bazel, Group::SourceScan]);

    detect_bazel_dependency_rule: RequiredEnumProperty<WorkspaceRule> = RequiredEnumProperty::enumeration("detect.bazel.dependency.type", WorkspaceRule::Unspecified)
        .named("Bazel workspace external dependency rule", "6.0.0")
        .help("The Bazel workspace rule used to pull in external dependencies. If not set, Detect will attempt to determine the rule from the contents of the WORKSPACE file.")
        .groups(&[Group::Bazel, Group::SourceScan]);

    detect_bdio_output_path: OptionalStringProperty = OptionalStringProperty::string("detect.bdio.output.path")
        .named("BDIO Output Directory", "3.0.0")
        .help_long(
            "The path to the output directory for all BDIO files.",
            "If not set, the BDIO files are placed in a 'BDIO' subdirectory of the output directory.",
        )
        .groups(&[Group::Paths, Group::Global]);

    detect_bdio2_enabled: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.bdio2.enabled", false)
        .named("BDIO 2 Enabled", "6.1.0")
        .help_long(
            "The version of BDIO files to generate.",
            "If set to false, BDIO version 1 will be generated. If set to true, BDIO version 2 will be generated.",
        )
        .groups(&[Group::Paths, Group::Global]);

    detect_binary_scan_file: OptionalStringProperty = OptionalStringProperty::string("detect.binary.scan.file.path")
        .named("Binary Scan Target", "4.2.0")
        .help("If specified, this file and this file only will be uploaded for binary scan analysis. This property takes precedence over detect.binary.scan.file.name.patterns.")
        .groups(&[Group::SignatureScanner, Group::SourcePath]);

    detect_binary_scan_file_name_patterns: OptionalStringArrayProperty = OptionalStringArrayProperty::string_array("detect.binary.scan.file.name.patterns")
        .named("Binary Scan Filename Patterns", "6.0.0")
        .help("If specified, all files in the source directory whose names match these file name patterns will be zipped and uploaded for binary scan analysis. This property will not be used if detect.binary.scan.file.path is specified.")
        .groups(&[Group::SignatureScanner, Group::SourcePath]);

    detect_bitbake_build_env_name: RequiredStringProperty = RequiredStringProperty::string("detect.bitbake.build.env.name", "oe-init-build-env")
        .named("BitBake Init Script Name", "4.4.0")
        .help("The name of the build environment init script.")
        .groups(&[Group::Bitbake, Group::SourceScan]);

    detect_bitbake_package_names: OptionalStringArrayProperty = OptionalStringArrayProperty::string_array("detect.bitbake.package.names")
        .named("BitBake Package Names", "4.4.0")
        .help("A comma-separated list of package names from which dependencies are extracted.")
        .groups(&[Group::Bitbake, Group::SourceScan]);

    detect_bitbake_source_arguments: RequiredStringArrayProperty = RequiredStringArrayProperty::string_array("detect.bitbake.source.arguments", &[])
        .named("BitBake Source Arguments", "6.0.0")
        .help("A comma-separated list of arguments to supply when sourcing the build environment init script.")
        .groups(&[Group::Bitbake, Group::SourceScan]);

    detect_bitbake_search_depth: RequiredIntegerProperty = RequiredIntegerProperty::integer("detect.bitbake.search.depth", 1)
        .named("BitBake Search Depth", "6.1.0")
        .help("The depth at which Detect will search for the recipe-depends.dot or package-depends.dot files.")
        .groups(&[Group::Bitbake, Group::SourceScan]);

    detect_blackduck_signature_scanner_arguments: OptionalStringProperty = OptionalStringProperty::string("detect.blackduck.signature.scanner.arguments")
        .named("Signature Scanner Arguments", "4.2.0")
        .help_long(
            "Additional arguments to use when running the Black Duck signature scanner.",
            "For example: Suppose you are running in bash on Linux and want to use the signature scanner's ability to read a list of directories to exclude from a file (using the signature scanner --exclude-from option). You tell the signature scanner read excluded directories from a file named excludes.txt in your home directory with: --detect.blackduck.signature.scanner.arguments='--exclude-from ${HOME}/excludes.txt'",
        )
        .groups(&[Group::SignatureScanner, Group::Global]);

    detect_blackduck_signature_scanner_dry_run: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.blackduck.signature.scanner.dry.run", false)
        .named("Signature Scanner Dry Run", "4.2.0")
        .help("If set to true, the signature scanner results are not uploaded to Black Duck, and the scanner results are written to disk.")
        .groups(&[Group::SignatureScanner, Group::Global]);

    detect_blackduck_signature_scanner_exclusion_name_patterns: RequiredStringArrayProperty = RequiredStringArrayProperty::string_array("detect.blackduck.signature.scanner.exclusion.name.patterns", &["node_modules"])
        .named("Directory Name Exclusion Patterns", "4.2.0")
        .help_long(
            "A comma-separated list of directory name patterns for which Detect searches and adds to the signature scanner --exclude flag values.",
            "These patterns are file system glob patterns ('?' is a wildcard for a single character, '*' is a wildcard for zero or more characters). Detect will recursively search within the scan targets for files/directories that match these patterns and will create the corresponding exclusion patterns (paths relative to the scan target directory) for the signature scanner (Black Duck scan CLI). Please note that the signature scanner will only exclude directories; matched filenames will be passed to the signature scanner but will have no effect. These patterns will be added to the patterns provided by detect.blackduck.signature.scanner.exclusion.patterns and passed as --exclude values. For example: suppose you are running in bash on Linux, and have a subdirectory named blackduck-common that you want to exclude. Any of the following would exclude it: --detect.blackduck.signature.scanner.exclusion.name.patterns=blackduck-common, --detect.blackduck.signature.scanner.exclusion.name.patterns='blackduck-common', --detect.blackduck.signature.scanner.exclusion.name.patterns='blackduck-*'. Use this property when you want Detect to convert the given patterns to actual paths. Use detect.blackduck.signature.scanner.exclusion.patterns to pass patterns directly to the signature scanner as-is.",
        )
        .groups(&[Group::SignatureScanner, Group::SourceScan]);

    detect_blackduck_signature_scanner_exclusion_pattern_search_depth: RequiredIntegerProperty = RequiredIntegerProperty::integer("detect.blackduck.signature.scanner.exclusion.pattern.search.depth", 4)
        .named("Exclusion Patterns Search Depth", "5.0.0")
        .help("Enables you to adjust the depth to which Detect will search when creating signature scanner exclusion patterns.")
        .groups(&[Group::SignatureScanner, Group::SourceScan]);

    detect_blackduck_signature_scanner_exclusion_patterns: OptionalStringArrayProperty = OptionalStringArrayProperty::string_array("detect.blackduck.signature.scanner.exclusion.patterns")
        .named("Exclusion Patterns", "4.2.0")
        .help_long(
            "A comma-separated list of values to be used with the Signature Scanner --exclude flag.",
            "Each pattern provided is passed to the signature scanner (Black Duck scan CLI) as a value for an --exclude option. The signature scanner requires that these exclusion patterns start and end with a forward slash (/) and may not contain double asterisks (**). These patterns will be added to the paths created from detect.blackduck.signature.scanner.exclusion.name.patterns and passed as --exclude values. Use this property to pass patterns directly to the signature scanner as-is. For example: suppose you are running in bash on Linux, and have a subdirectory named blackduck-common that you want to exclude from signature scanning. Any of the following would exclude it: --detect.blackduck.signature.scanner.exclusion.patterns=/blackduck-common/, --detect.blackduck.signature.scanner.exclusion.patterns='/blackduck-common/', --detect.blackduck.signature.scanner.exclusion.patterns='/blackduck-*/'. Use detect.blackduck.signature.scanner.exclusion.name.patterns when you want Detect to convert the given patterns to actual paths.",
        )
        .groups(&[Group::SignatureScanner, Group::SourceScan]);

    detect_blackduck_signature_scanner_host_url: OptionalStringProperty = OptionalStringProperty::string("detect.blackduck.signature.scanner.host.url")
        .named("Signature Scanner Host URL", "4.2.0")
        .help("If this url is set, an attempt will be made to use it to download the signature scanner. The server url provided must respect the Black Duck's urls for different operating systems.")
        .groups(&[Group::SignatureScanner, Group::Global])
        .category(Category::Advanced);

    detect_blackduck_signature_scanner_local_path: OptionalStringProperty = OptionalStringProperty::string("detect.blackduck.signature.scanner.local.path")
        .named("Signature Scanner Local Path", "4.2.0")
        .help("To use a local signature scanner, specify the path where the signature scanner was unzipped. This will likely look similar to 'scan.cli-x.y.z' and includes the 'bin, icon, jre, and lib' directories of the expanded scan.cli.")
        .groups(&[Group::SignatureScanner, Group::Global]);

    detect_blackduck_signature_scanner_memory: RequiredIntegerProperty = RequiredIntegerProperty::integer("detect.blackduck.signature.scanner.memory", 4096)
        .named("Signature Scanner Memory", "4.2.0")
        .help("The memory for the scanner to use.")
        .groups(&[Group::SignatureScanner, Group::Global])
        .category(Category::Advanced);

    detect_blackduck_signature_scanner_offline_local_path: OptionalStringProperty = OptionalStringProperty::string("detect.blackduck.signature.scanner.offline.local.path")
        .named("Signature Scanner Local Path (Offline)", "4.2.0")
        .help("To use a local signature scanner and force offline, specify the path where the signature scanner was unzipped. This will likely look similar to 'scan.cli-x.y.z' and includes the 'bin, icon, jre, and lib' directories of the expanded scan.cli.")
        .groups(&[Group::SignatureScanner, Group::Global])
        .category(Category::Advanced);

    detect_blackduck_signature_scanner_paths: OptionalStringArrayProperty = OptionalStringArrayProperty::string_array("detect.blackduck.signature.scanner.paths")
        .named("Signature Scanner Target Paths", "4.2.0")
        .help("These paths and only these paths will be scanned.")
        .groups(&[Group::SignatureScanner, Group::Global]);

    detect_blackduck_signature_scanner_snippet_matching: RequiredExtendedEnumProperty<SnippetMatching, ExtendedSnippetMode> = RequiredExtendedEnumProperty::extended_enum(
            "detect.blackduck.signature.scanner.snippet.matching",
            ExtendedValue::Extension(ExtendedSnippetMode::None),
        )
        .named("Snippet Matching", "5.5.0")
        .help("Use this value to enable the various snippet scanning modes. For a full explanation, please refer to the 'Running a component scan using the Signature Scanner command line' section in your Black Duck server's online help.")
        .groups(&[Group::SignatureScanner, Group::Global, Group::SourceScan]);

    detect_blackduck_signature_scanner_upload_source_mode: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.blackduck.signature.scanner.upload.source.mode", false)
        .named("Upload source mode", "5.4.0")
        .help("If set to true, the signature scanner will, if supported by your Black Duck version, upload source code to Black Duck.")
        .groups(&[Group::SignatureScanner, Group::Global, Group::SourceScan]);

    detect_bom_aggregate_name: OptionalStringProperty = OptionalStringProperty::string("detect.bom.aggregate.name")
        .named("Aggregate BDIO File Name", "3.0.0")
        .help("If set, this will aggregate all the BOMs to create a single BDIO file with the name provided.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_bom_aggregate_remediation_mode: RequiredEnumProperty<AggregateMode> = RequiredEnumProperty::enumeration("detect.bom.aggregate.remediation.mode", AggregateMode::Transitive)
        .named("BDIO Aggregate Remediation Mode", "6.1.0")
        .help("If an aggregate BDIO file is being generated and this property is set to DIRECT, the aggregate BDIO file will exclude code location nodes from the top layer of the dependency tree to preserve the correct identification of direct dependencies in the resulting Black Duck BOM. When this property is set to TRANSITIVE (the default), component source information is preserved by including code location nodes at the top of the dependency tree, but all components will appear as TRANSITIVE in the BOM.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_buildless: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.detector.buildless", false)
        .named("Buildless Mode", "5.4.0")
        .help("If set to true, only Detector's capable of running without a build will be run.")
        .groups(&[Group::General, Group::Global]);

    detect_cleanup: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.cleanup", true)
        .named("Cleanup Output", "3.2.0")
        .help("If true, the files created by Detect will be cleaned up.")
        .groups(&[Group::Cleanup, Group::Global]);

    detect_clone_project_version_name: OptionalStringProperty = OptionalStringProperty::string("detect.clone.project.version.name")
        .named("Clone Project Version Name", "4.2.0")
        .help("The name of the project version to clone this project version from. Respects the given Clone Categories in detect.project.clone.categories or as set on the Black Duck server.")
        .groups(&[Group::Project, Group::Global, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_clone_project_version_latest: OptionalBooleanProperty = OptionalBooleanProperty::boolean("detect.clone.project.version.latest")
        .named("Clone Latest Project Version", "5.6.0")
        .help("If set to true, detect will attempt to use the latest project version as the clone for this project. The project must exist and have at least one version.")
        .groups(&[Group::Project, Group::Global, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_code_location_name: OptionalStringProperty = OptionalStringProperty::string("detect.code.location.name")
        .named("Scan Name", "4.0.0")
        .help("An override for the name Detect will use for the scan file it creates. If supplied and multiple scans are found, Detect will append an index to each scan name.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_conda_environment_name: OptionalStringProperty = OptionalStringProperty::string("detect.conda.environment.name")
        .named("Anaconda Environment Name", "3.0.0")
        .help("The name of the anaconda environment used by your project.")
        .groups(&[Group::Conda, Group::SourceScan]);

    detect_conda_path: OptionalStringProperty = OptionalStringProperty::string("detect.conda.path")
        .named("Conda Executable", "3.0.0")
        .help("The path to the conda executable.")
        .groups(&[Group::Conda, Group::Global]);

    detect_cpan_path: OptionalStringProperty = OptionalStringProperty::string("detect.cpan.path")
        .named("cpan Executable", "3.0.0")
        .help("The path to the cpan executable.")
        .groups(&[Group::Cpan, Group::Global]);

    detect_cpanm_path: OptionalStringProperty = OptionalStringProperty::string("detect.cpanm.path")
        .named("cpanm Executable", "3.0.0")
        .help("The path to the cpanm executable.")
        .groups(&[Group::Cpan, Group::Global]);

    detect_default_project_version_scheme: RequiredEnumProperty<DefaultVersionNameScheme> = RequiredEnumProperty::enumeration("detect.default.project.version.scheme", DefaultVersionNameScheme::Default)
        .named("Default Project Version Name Scheme", "3.0.0")
        .help("The scheme to use when the package managers can not determine a version, either 'text' or 'timestamp'.")
        .groups(&[Group::Project, Group::Global])
        .category(Category::Advanced);

    detect_default_project_version_text: RequiredStringProperty = RequiredStringProperty::string("detect.default.project.version.text", "Default Detect Version")
        .named("Default Project Version Name Text", "3.0.0")
        .help("The text to use as the default project version.")
        .groups(&[Group::Project, Group::Global])
        .category(Category::Advanced);

    detect_default_project_version_timeformat: RequiredStringProperty = RequiredStringProperty::string("detect.default.project.version.timeformat", "yyyy-MM-dd'T'HH:mm:ss.SSS")
        .named("Default Project Version Name Timestamp Format", "3.0.0")
        .help("The timestamp format to use as the default project version.")
        .groups(&[Group::Project, Group::Global])
        .category(Category::Advanced);

    detect_detector_search_depth: RequiredIntegerProperty = RequiredIntegerProperty::integer("detect.detector.search.depth", 0)
        .named("Detector Search Depth", "3.2.0")
        .help_long(
            "Depth of subdirectories within the source directory to which Detect will search for files that indicate whether a detector applies.",
            "A value of 0 (the default) tells Detect not to search any subdirectories, a value of 1 tells Detect to search first-level subdirectories, etc.",
        )
        .groups(&[Group::Paths, Group::Detector, Group::Global, Group::SourceScan]);

    detect_detector_search_continue: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.detector.search.continue", false)
        .named("Detector Search Continue", "3.2.0")
        .help_long(
            "If true, the detector search will continue to look for nested detectors of the same type to the maximum search depth, see the detailed help for more information.",
            "If true, Detect will find Maven projects that are in subdirectories of a Maven project and Gradle projects that are in subdirectories of Gradle projects, etc. If false, Detect will only find detectors in subdirectories of a project if they are of a different type such as an Npm project in a subdirectory of a Gradle project.",
        )
        .groups(&[Group::Paths, Group::Detector, Group::Global, Group::SourceScan])
        .category(Category::Advanced);

    detect_detector_search_exclusion: OptionalStringArrayProperty = OptionalStringArrayProperty::string_array("detect.detector.search.exclusion")
        .named("Detector Directory Exclusions", "3.2.0")
        .help_long(
            "A comma-separated list of directory names to exclude from detector search.",
            "While searching the source directory to determine which detectors to run, subdirectories whose name appear in this list will not be searched.",
        )
        .groups(&[Group::Paths, Group::Detector, Group::Global, Group::SourceScan])
        .category(Category::Advanced);

    detect_detector_search_exclusion_patterns: OptionalStringArrayProperty = OptionalStringArrayProperty::string_array("detect.detector.search.exclusion.patterns")
        .named(" Detector Directory Patterns Exclusions", "3.2.0")
        .help_long(
            "A comma-separated list of directory name patterns to exclude from detector search.",
            "While searching the source directory to determine which detectors to run, subdirectories whose name match a pattern in this list will not be searched. These patterns are file system glob patterns ('?' is a wildcard for a single character, '*' is a wildcard for zero or more characters).For example, suppose you're running in bash on Linux, you've set--detect.detector.search.depth = 1, and have a subdirectory named blackduck-common (a gradle project) that you want to exclude from the detector search. Any of the following would exclude it:--detect.detector.search.exclusion.patterns = blackduck-common, --detect.detector.search.exclusion.patterns = 'blackduck-common', --detect.detector.search.exclusion.patterns = 'blackduck-*'",
        )
        .groups(&[Group::Paths, Group::Detector, Group::Global, Group::SourceScan])
        .category(Category::Advanced);

    detect_detector_search_exclusion_paths: OptionalStringArrayProperty = OptionalStringArrayProperty::string_array("detect.detector.search.exclusion.paths")
        .named(" Detector Directory Path Exclusions", "5.5.0")
        .help_long(
            "A comma-separated list of directory paths to exclude from detector search. (E.g. 'foo/bar/biz' will only exclude the 'biz' directory if the parent directory structure is 'foo/bar/'.)",
            "This property performs the same basic function as detect.detector.search.exclusion, but lets you be more specific.",
        )
        .groups(&[Group::Paths, Group::Detector, Group::Global, Group::SourceScan])
        .category(Category::Advanced);

    detect_detector_search_exclusion_files: RequiredStringArrayProperty = RequiredStringArrayProperty::string_array("detect.detector.search.exclusion.files", &[])
        .named(" Detector File Exclusions", "6.0.0")
        .help("A comma-separated list of file names to exclude from detector search.")
        .groups(&[Group::Paths, Group::Detector, Group::Global, Group::SourceScan])
        .category(Category::Advanced);

    detect_detector_search_exclusion_defaults: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.detector.search.exclusion.defaults", true)
        .named("Detector Exclude Default Directories", "3.2.0")
        .help_long(
            "If true, the bom tool search will exclude the default directory names. See the detailed help for more information.",
            "If true, these directories will be excluded from the detector search: bin, build, .git, .gradle, node_modules, out, packages, target.",
        )
        .groups(&[Group::Paths, Group::Detector, Group::Global, Group::SourceScan])
        .category(Category::Advanced);

    detect_ignore_connection_failures: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.ignore.connection.failures", false)
        .named("Detect Ignore Connection Failures", "5.3.0")
        .help_long(
            "If true, Detect will ignore any products that it cannot connect to.",
            "If true, when Detect attempts to boot a product it will also check if it can communicate with it - if it cannot, it will not run the product.",
        )
        .groups(&[Group::General, Group::BlackduckServer, Group::Polaris])
        .category(Category::Advanced);

    detect_docker_image: OptionalStringProperty = OptionalStringProperty::string("detect.docker.image")
        .named("Docker Image Name", "3.0.0")
        .help("The Docker image name to inspect. For Detect to run Docker Inspector, either this property or detect.docker.tar must be set. Docker Inspector finds packages installed by the Linux package manager in Linux-based images.")
        .groups(&[Group::Docker, Group::SourcePath]);

    detect_docker_image_id: OptionalStringProperty = OptionalStringProperty::string("detect.docker.image.id")
        .named("Docker Image ID", "6.1.0")
        .help("The Docker image ID to inspect.")
        .groups(&[Group::Docker, Group::SourcePath]);

    detect_docker_inspector_air_gap_path: OptionalStringProperty = OptionalStringProperty::string("detect.docker.inspector.air.gap.path")
        .named("Docker Inspector AirGap Path", "3.0.0")
        .help("The path to the directory containing the Docker Inspector jar and images.")
        .groups(&[Group::Docker, Group::Global])
        .category(Category::Advanced);

    detect_docker_inspector_path: OptionalStringProperty = OptionalStringProperty::string("detect.docker.inspector.path")
        .named("Docker Inspector .jar File Path", "3.0.0")
        .help("This is used to override using the hosted Docker Inspector .jar file by binary repository url. You can use a local Docker Inspector .jar file at this path.")
        .groups(&[Group::Docker, Group::Global])
        .category(Category::Advanced);

    detect_docker_inspector_version: OptionalStringProperty = OptionalStringProperty::string("detect.docker.inspector.version")
        .named("Docker Inspector Version", "3.0.0")
        .help("Version of the Docker Inspector to use. By default Detect will attempt to automatically determine the version to use.")
        .groups(&[Group::Docker, Group::Global])
        .category(Category::Advanced);

    detect_docker_path: OptionalStringProperty = OptionalStringProperty::string("detect.docker.path")
        .named("Docker Executable", "3.0.0")
        .help("Path to the docker executable.")
        .groups(&[Group::Docker, Group::Global]);

    detect_docker_path_required: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.docker.path.required", false)
        .named("Run Without Docker in Path", "4.0.0")
        .help("If set to true, Detect will attempt to run the Docker Inspector only if it finds a docker client executable.")
        .groups(&[Group::Docker, Group::Global])
        .category(Category::Advanced);

    detect_docker_platform_top_layer_id: OptionalStringProperty = OptionalStringProperty::string("detect.docker.platform.top.layer.id")
        .named("Platform Top Layer ID", "6.1.0")
        .help_long(
            "To exclude components from platform layers from the results, assign to this property the ID of the top layer of the platform image. Get the platform top layer ID from the output of 'docker inspect platformimage:tag'. The platform top layer ID is the last item in RootFS.Layers. For more information, see 'Isolating application components' in the Docker Inspector documentation.",
            "If you are interested in components from the application layers of your image, but not interested in components from the underlying platform layers, you can exclude components from platform layers from the results by using this property to specify the boundary between platform layers and application layers. ",
        )
        .groups(&[Group::Docker, Group::Global])
        .category(Category::Advanced);

    detect_docker_tar: OptionalStringProperty = OptionalStringProperty::string("detect.docker.tar")
        .named("Docker Image Archive File", "3.0.0")
        .help("A saved Docker image - must be a .tar file. For Detect to run Docker Inspector, either this property or detect.docker.tar must be set. Docker Inspector finds packages installed by the Linux package manager in Linux-based images.")
        .groups(&[Group::Docker, Group::SourcePath]);

    detect_dotnet_path: OptionalStringProperty = OptionalStringProperty::string("detect.dotnet.path")
        .named("dotnet Executable", "4.4.0")
        .help("The path to the dotnet executable.")
        .groups(&[Group::Nuget, Group::Global]);

    detect_excluded_detector_types: RequiredFilterableEnumListProperty<DetectorType> = RequiredFilterableEnumListProperty::filterable_enum_list("detect.excluded.detector.types", &[])
        .named("Detector Types Excluded", "3.0.0")
        .help_long(
            "By default, all detectors will be included. If you want to exclude specific detectors, specify the ones to exclude here. If you want to exclude all detectors, specify \"ALL\". Exclusion rules always win.",
            "If Detect runs one or more detector on your project that you would like to exclude, you can use this property to prevent Detect from running them.",
        )
        .groups(&[Group::Detector, Group::Global])
        .category(Category::Advanced);

    detect_force_success: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.force.success", false)
        .named("Force Success", "3.0.0")
        .help("If true, Detect will always exit with code 0.")
        .groups(&[Group::General, Group::Global])
        .category(Category::Advanced);

    detect_git_path: OptionalStringProperty = OptionalStringProperty::string("detect.git.path")
        .named("Git Executable", "5.5.0")
        .help("Path of the git executable")
        .groups(&[Group::Paths, Group::Global]);

    detect_go_path: OptionalStringProperty = OptionalStringProperty::string("detect.go.path")
        .named("Go Executable", "3.0.0")
        .help("Path to the Go executable.")
        .groups(&[Group::Go, Group::Global]);

    detect_gradle_build_command: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.build.command")
        .named("Gradle Build Command", "3.0.0")
        .help_long(
            "Gradle command line arguments to add to the mvn/mvnw command line.",
            "By default, Detect runs the gradle (or gradlew) command with one task: dependencies. You can use this property to insert one or more additional gradle command line arguments (options or tasks) before the dependencies argument.",
        )
        .groups(&[Group::Gradle, Group::SourceScan]);

    detect_gradle_excluded_configurations: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.excluded.configurations")
        .named("Gradle Exclude Configurations", "3.0.0")
        .help_long(
            "A comma-separated list of Gradle configurations to exclude.",
            "As Detect examines the Gradle project for dependencies, Detect will skip any Gradle configurations specified via this property.",
        )
        .groups(&[Group::Gradle, Group::SourceScan])
        .category(Category::Advanced);

    detect_gradle_excluded_projects: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.excluded.projects")
        .named("Gradle Exclude Projects", "3.0.0")
        .help_long(
            "A comma-separated list of Gradle sub-projects to exclude.",
            "As Detect examines the Gradle project for dependencies, Detect will skip any Gradle sub-projects specified via this property.",
        )
        .groups(&[Group::Gradle, Group::SourceScan])
        .category(Category::Advanced);

    detect_gradle_included_configurations: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.included.configurations")
        .named("Gradle Include Configurations", "3.0.0")
        .help_long(
            "A comma-separated list of Gradle configurations to include.",
            "As Detect examines the Gradle project for dependencies, if this property is set, Detect will include only those Gradle configurations specified via this property that are not excluded. Leaving this unset implies 'include all'. Exclusion rules always win.",
        )
        .groups(&[Group::Gradle, Group::SourceScan])
        .category(Category::Advanced);

    detect_gradle_included_projects: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.included.projects")
        .named("Gradle Include Projects", "3.0.0")
        .help_long(
            "A comma-separated list of Gradle sub-projects to include.",
            "As Detect examines the Gradle project for dependencies, if this property is set, Detect will include only those sub-projects specified via this property that are not excluded. Leaving this unset implies 'include all'. Exclusion rules always win.",
        )
        .groups(&[Group::Gradle, Group::SourceScan])
        .category(Category::Advanced);

    detect_gradle_inspector_air_gap_path: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.inspector.air.gap.path")
        .named("Gradle Inspector AirGap Path", "3.0.0")
        .help_long(
            "The path to the directory containing the air gap dependencies for the gradle inspector.",
            "Use this property when running Detect on a Gradle project in 'air gap' mode (offline). Download and unzip the Detect air gap zip file, and point this property to the packaged-inspectors/gradle directory.",
        )
        .groups(&[Group::Gradle, Group::Global])
        .category(Category::Advanced);

    detect_gradle_inspector_version: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.inspector.version")
        .named("Gradle Inspector Version", "3.0.0")
        .help_long(
            "The version of the Gradle Inspector that Detect should use. By default, Detect will try to automatically determine the correct Gradle Inspector version.",
            "The Detect Gradle detector uses a separate program, the Gradle Inspector, to discover dependencies from Gradle projects. Detect automatically downloads the Gradle Inspector as needed. Use the property to use a specific version of the Gradle Inspector.",
        )
        .groups(&[Group::Gradle, Group::Global])
        .category(Category::Advanced);

    detect_gradle_path: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.path")
        .named("Gradle Executable", "3.0.0")
        .help_long(
            "The path to the Gradle executable (gradle or gradlew).",
            "If set, Detect will use the given Gradle executable instead of searching for one.",
        )
        .groups(&[Group::Gradle]);

    detect_hex_rebar3_path: OptionalStringProperty = OptionalStringProperty::string("detect.hex.rebar3.path")
        .named("Rebar3 Executable", "3.0.0")
        .help("The path to the rebar3 executable.")
        .groups(&[Group::Hex, Group::Global]);

    detect_included_detector_types: RequiredFilterableEnumListProperty<DetectorType> = RequiredFilterableEnumListProperty::filterable_enum_list("detect.included.detector.types", &[])
        .named("Detector Types Included", "3.0.0")
        .help_long(
            "By default, all tools will be included. If you want to include only specific tools, specify the ones to include here. Exclusion rules always win.",
            "If you want to limit Detect to a subset of its detectors, use this property to specify that subset.",
        )
        .groups(&[Group::Detector, Group::Global])
        .category(Category::Advanced);

    detect_java_path: OptionalStringProperty = OptionalStringProperty::string("detect.java.path")
        .named("Java Executable", "5.0.0")
        .help_long(
            "Path to the java executable.",
            "If set, Detect will use the given java executable instead of searching for one.",
        )
        .groups(&[Group::Paths, Group::Global]);

    detect_maven_build_command: OptionalStringProperty = OptionalStringProperty::string("detect.maven.build.command")
        .named("Maven Build Command", "3.0.0")
        .help_long(
            "Maven command line arguments to add to the mvn/mvnw command line.",
            "By default, Detect runs the mvn (or mvnw) command with one argument: dependency:tree. You can use this property to insert one or more additional mvn command line arguments (goals, etc.) before the dependency:tree argument. For example: suppose you are running in bash on Linux, and want to point maven to your settings file (maven_dev_settings.xml in your home directory) and assign the value 'other' to property 'reason'. You could do this with: --detect.maven.build.command='--settings ${HOME}/maven_dev_settings.xml --define reason=other'",
        )
        .groups(&[Group::Maven, Group::SourceScan]);

    detect_maven_excluded_modules: OptionalStringProperty = OptionalStringProperty::string("detect.maven.excluded.modules")
        .named("Maven Modules Excluded", "3.0.0")
        .help_long(
            "A comma-separated list of Maven modules (sub-projects) to exclude.",
            "As Detect parses the mvn dependency:tree output for dependencies, Detect will skip any Maven modules specified via this property.",
        )
        .groups(&[Group::Maven, Group::SourceScan])
        .category(Category::Advanced);

    detect_maven_included_modules: OptionalStringProperty = OptionalStringProperty::string("detect.maven.included.modules")
        .named("Maven Modules Included", "3.0.0")
        .help_long(
            "A comma-separated list of Maven modules (sub-projects) to include.",
            "As Detect parses the mvn dependency:tree output for dependencies, if this property is set, Detect will include only those Maven modules specified via this property that are not excluded. Leaving this unset implies 'include all'. Exclusion rules always win.",
        )
        .groups(&[Group::Maven, Group::SourceScan])
        .category(Category::Advanced);

    detect_maven_path: OptionalStringProperty = OptionalStringProperty::string("detect.maven.path")
        .named("Maven Executable", "3.0.0")
        .help_long(
            "The path to the Maven executable (mvn or mvnw).",
            "If set, Detect will use the given Maven executable instead of searching for one.",
        )
        .groups(&[Group::Maven, Group::Global]);

    detect_maven_included_scopes: OptionalStringProperty = OptionalStringProperty::string("detect.maven.included.scopes")
        .named("Dependency Scope Included", "6.0.0")
        .help_long(
            "A comma separated list of Maven scopes. Output will be limited to dependencies within these scopes (overridden by exclude).",
            "If set, Detect will include only dependencies of the given Maven scope.",
        )
        .groups(&[Group::Maven, Group::SourceScan]);

    detect_maven_excluded_scopes: OptionalStringProperty = OptionalStringProperty::string("detect.maven.excluded.scopes")
        .named("Dependency Scope Excluded", "6.0.0")
        .help_long(
            "A comma separated list of Maven scopes. Output will be limited to dependencies outside these scopes (overrides include).",
            "If set, Detect will include only dependencies outside of the given Maven scope.",
        )
        .groups(&[Group::Maven, Group::SourceScan]);

    detect_maven_include_plugins: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.maven.include.plugins", false)
        .named("Maven Include Plugins", "5.6.0")
        .help("Whether or not detect will include the plugins section when parsing a pom.xml.")
        .groups(&[Group::Maven, Group::Global])
        .category(Category::Advanced);

    detect_notices_report: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.notices.report", false)
        .named("Generate Notices Report", "3.0.0")
        .help("When set to true, a Black Duck notices report in text form will be created in your source directory.")
        .groups(&[Group::Report, Group::Global]);

    detect_notices_report_path: OptionalStringProperty = OptionalStringProperty::string("detect.notices.report.path")
        .named("Notices Report Path", "3.0.0")
        .help("The output directory for notices report. Default is the source directory.")
        .groups(&[Group::Report, Group::Global, Group::ReportSetting]);

    detect_npm_arguments: OptionalStringProperty = OptionalStringProperty::string("detect.npm.arguments")
        .named("Additional NPM Command Arguments", "4.3.0")
        .help("A space-separated list of additional arguments to add to the npm command line when running Detect against an NPM project.")
        .groups(&[Group::Npm, Group::SourceScan]);

    detect_npm_include_dev_dependencies: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.npm.include.dev.dependencies", true)
        .named("Include NPM Development Dependencies", "3.0.0")
        .help("Set this value to false if you would like to exclude your dev dependencies when ran.")
        .groups(&[Group::Npm, Group::Global, Group::SourceScan]);

    detect_npm_path: OptionalStringProperty = OptionalStringProperty::string("detect.npm.path")
        .named("NPM Executable", "3.0.0")
        .help("The path to the Npm executable.")
        .groups(&[Group::Npm, Group::Global]);

    detect_nuget_config_path: OptionalStringProperty = OptionalStringProperty::string("detect.nuget.config.path")
        .named("Nuget Config File", "4.0.0")
        .help("The path to the Nuget.Config file to supply to the nuget exe.")
        .groups(&[Group::Nuget, Group::SourceScan]);

    detect_nuget_excluded_modules: OptionalStringProperty = OptionalStringProperty::string("detect.nuget.excluded.modules")
        .named("Nuget Projects Excluded", "3.0.0")
        .help("The names of the projects in a solution to exclude.")
        .groups(&[Group::Nuget, Group::SourceScan])
        .category(Category::Advanced);

    detect_nuget_ignore_failure: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.nuget.ignore.failure", false)
        .named("Ignore Nuget Failures", "3.0.0")
        .help("If true errors will be logged and then ignored.")
        .groups(&[Group::Nuget, Group::Global])
        .category(Category::Advanced);

    detect_nuget_included_modules: OptionalStringProperty = OptionalStringProperty::string("detect.nuget.included.modules")
        .named("Nuget Modules Included", "3.0.0")
        .help("The names of the projects in a solution to include (overrides exclude).")
        .groups(&[Group::Nuget, Group::SourceScan])
        .category(Category::Advanced);

    detect_nuget_inspector_air_gap_path: OptionalStringProperty = OptionalStringProperty::string("detect.nuget.inspector.air.gap.path")
        .named("Nuget Inspector AirGap Path", "3.0.0")
        .help("The path to the directory containing the nuget inspector nupkg.")
        .groups(&[Group::Nuget, Group::Global])
        .category(Category::Advanced);

    detect_nuget_inspector_version: OptionalStringProperty = OptionalStringProperty::string("detect.nuget.inspector.version")
        .named("Nuget Inspector Version", "3.0.0")
        .help("Version of the Nuget Inspector. By default Detect will run the latest version that is compatible with the Detect version.")
        .groups(&[Group::Nuget, Group::Global])
        .category(Category::Advanced);

    detect_nuget_packages_repo_url: RequiredStringArrayProperty = RequiredStringArrayProperty::string_array("detect.nuget.packages.repo.url", &["https://api.nuget.org/v3/index.json"])
        .named("Nuget Packages Repository URL", "3.0.0")
        .help_long(
            "The source for nuget packages",
            "Set this to \"https://www.nuget.org/api/v2/\" if your are still using a nuget client expecting the v2 api.",
        )
        .groups(&[Group::Nuget, Group::Global]);

    detect_output_path: OptionalStringProperty = OptionalStringProperty::string("detect.output.path")
        .named("Detect Output Path", "3.0.0")
        .help_long(
            "The path to the output directory.",
            "If set, Detect will use the given directory to store files that it downloads and creates, instead of using the default location (~/blackduck).",
        )
        .groups(&[Group::Paths, Group::Global]);

    detect_tools_output_path: OptionalStringProperty = OptionalStringProperty::string("detect.tools.output.path")
        .named("Detect Tools Output Path", "5.6.0")
        .help_long(
            "The path to the tools directory where detect should download and/or access things like the Signature Scanner that it shares over multiple runs.",
            "If set, Detect will use the given directory instead of using the default location of output path plus tools.",
        )
        .groups(&[Group::Paths, Group::Global])
        .category(Category::Advanced);

    detect_packagist_include_dev_dependencies: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.packagist.include.dev.dependencies", true)
        .named("Include Packagist Development Dependencies", "3.0.0")
        .help("Set this value to false if you would like to exclude your dev requires dependencies when ran.")
        .groups(&[Group::Packagist, Group::Global, Group::SourceScan]);

    detect_pear_only_required_deps: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.pear.only.required.deps", false)
        .named("Include Only Required Pear Dependencies", "3.0.0")
        .help("Set to true if you would like to include only required packages.")
        .groups(&[Group::Pear, Group::Global, Group::SourceScan]);

    detect_pear_path: OptionalStringProperty = OptionalStringProperty::string("detect.pear.path")
        .named("Pear Executable", "3.0.0")
        .help("The path to the pear executable.")
        .groups(&[Group::Pear, Group::Global]);

    detect_pip_project_name: OptionalStringProperty = OptionalStringProperty::string("detect.pip.project.name")
        .named("PIP Project Name", "3.0.0")
        .help("The name of your PIP project, to be used if your project's name cannot be correctly inferred from its setup.py file.")
        .groups(&[Group::Pip, Group::SourceScan]);

    detect_pip_project_version_name: OptionalStringProperty = OptionalStringProperty::string("detect.pip.project.version.name")
        .named("PIP Project Version Name", "4.1.0")
        .help("The version of your PIP project, to be used if your project's version name cannot be correctly inferred from its setup.py file.")
        .groups(&[Group::Pip, Group::SourceScan]);

    detect_pip_requirements_path: RequiredStringArrayProperty = RequiredStringArrayProperty::string_array("detect.pip.requirements.path", &[])
        .named("PIP Requirements Path", "3.0.0")
        .help("A comma-separated list of paths to requirements.txt files.")
        .groups(&[Group::Pip, Group::SourceScan]);

    detect_pip_only_project_tree: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.pip.only.project.tree", false)
        .named("PIP Include Only Project Tree", "6.1.0")
        .help("By default, pipenv includes all dependencies found in the graph. Set to true to only include dependencies found underneath the dependency that matches the provided pip project and version name.")
        .groups(&[Group::Pip, Group::SourceScan]);

    detect_pipenv_path: OptionalStringProperty = OptionalStringProperty::string("detect.pipenv.path")
        .named("Pipenv Executable", "4.1.0")
        .help("The path to the Pipenv executable.")
        .groups(&[Group::Pip, Group::Global]);

    detect_swift_path: OptionalStringProperty = OptionalStringProperty::string("detect.swift.path")
        .named("Swift Executable", "6.0.0")
        .help("Path of the swift executable.")
        .groups(&[Group::Paths, Group::Global]);

    detect_policy_check_fail_on_severities: RequiredFilterableEnumListProperty<PolicySeverityType> = RequiredFilterableEnumListProperty::filterable_enum_list("detect.policy.check.fail.on.severities", &[])
        .named("Fail on Policy Violation Severities", "3.0.0")
        .help("A comma-separated list of policy violation severities that will fail Detect. If this is not set, Detect will not fail due to policy violations. A value of ALL selects every severity, UNSPECIFIED included.")
        .groups(&[Group::Project, Group::Global, Group::ProjectSetting, Group::Policy]);

    detect_project_application_id: OptionalStringProperty = OptionalStringProperty::string("detect.project.application.id")
        .named("Application ID", "5.2.0")
        .help("Sets the 'Application ID' project setting.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_custom_fields_project: OptionalStringProperty = OptionalStringProperty::string("detect.custom.fields.project")
        .named("Custom Fields", "5.6.0")
        .help("A  list of custom fields with a label and comma-separated value starting from index 0. For example detect.custom.fields.project[0].label='example' and detect.custom.fields.project[0].value='one,two'. Note that these will not show up in the detect configuration log.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_custom_fields_version: OptionalStringProperty = OptionalStringProperty::string("detect.custom.fields.version")
        .named("Custom Fields", "5.6.0")
        .help("A  list of custom fields with a label and comma-separated value starting from index 0. For example detect.custom.fields.version[0].label='example' and detect.custom.fields.version[0].value='one,two'. Note that these will not show up in the detect configuration log.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_project_clone_categories: RequiredEnumListProperty<ProjectCloneCategoriesType> = RequiredEnumListProperty::enum_list("detect.project.clone.categories", &[ProjectCloneCategoriesType::ComponentData, ProjectCloneCategoriesType::VulnData])
        .named("Clone Project Categories", "4.2.0")
        .help("An override for the Project Clone Categories that are used when cloning a version. If the project already exists, make sure to use --detect.project.version.update to make sure these are set.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_project_codelocation_prefix: OptionalStringProperty = OptionalStringProperty::string("detect.project.codelocation.prefix")
        .named("Scan Name Prefix", "3.0.0")
        .help("A prefix to the name of the scans created by Detect. Useful for running against the same projects on multiple machines.")
        .groups(&[Group::Project, Group::ProjectSetting, Group::Global])
        .category(Category::Advanced);

    detect_project_codelocation_suffix: OptionalStringProperty = OptionalStringProperty::string("detect.project.codelocation.suffix")
        .named("Scan Name Suffix", "3.0.0")
        .help("A suffix to the name of the scans created by Detect.")
        .groups(&[Group::Project, Group::ProjectSetting, Group::Global])
        .category(Category::Advanced);

    detect_project_codelocation_unmap: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.project.codelocation.unmap", false)
        .named("Unmap All Other Scans for Project", "4.0.0")
        .help("If set to true, unmaps all other scans mapped to the project version produced by the current run of Detect.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_project_description: OptionalStringProperty = OptionalStringProperty::string("detect.project.description")
        .named("Project Description", "4.0.0")
        .help("If project description is specified, your project version will be created with this description.")
        .groups(&[Group::Project, Group::ProjectSetting]);

    detect_project_user_groups: RequiredStringArrayProperty = RequiredStringArrayProperty::string_array("detect.project.user.groups", &[])
        .named("Project User Groups", "5.4.0")
        .help("A comma-separated list of names of user groups to add to the project.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_project_tags: RequiredStringArrayProperty = RequiredStringArrayProperty::string_array("detect.project.tags", &[])
        .named("Project Tags", "5.6.0")
        .help("A comma-separated list of tags to add to the project.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_project_detector: OptionalStringProperty = OptionalStringProperty::string("detect.project.detector")
        .named("Project Name/Version Detector", "4.0.0")
        .help_long(
            "The detector that will be used to determine the project name and version when multiple detector types. This property should be used with the detect.project.tool.",
            "If Detect finds that multiple detectors apply, this property can be used to select the detector that will provide the project name and version. When using this property, you should also set detect.project.tool=DETECTOR",
        )
        .groups(&[Group::Paths, Group::Global])
        .category(Category::Advanced);

    detect_project_level_adjustments: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.project.level.adjustments", true)
        .named("Allow Project Level Adjustments", "3.0.0")
        .help("An override for the Project level matches.")
        .groups(&[Group::Project, Group::ProjectSetting, Group::Global])
        .category(Category::Advanced);

    detect_project_name: OptionalStringProperty = OptionalStringProperty::string("detect.project.name")
        .named("Project Name", "3.0.0")
        .help("An override for the name to use for the Black Duck project. If not supplied, Detect will attempt to use the tools to figure out a reasonable project name. If that fails, the final part of the directory path where the inspection is taking place will be used.")
        .groups(&[Group::Project, Group::ProjectSetting]);

    detect_parent_project_name: OptionalStringProperty = OptionalStringProperty::string("detect.parent.project.name")
        .named("Parent Project Name", "3.0.0")
        .help("When a parent project and version name are specified, the created detect project will be added as a component to the specified parent project version.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_parent_project_version_name: OptionalStringProperty = OptionalStringProperty::string("detect.parent.project.version.name")
        .named("Parent Project Version Name", "3.0.0")
        .help("When a parent project and version name are specified, the created detect project will be added as a component to the specified parent project version.")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_project_tier: OptionalIntegerProperty = OptionalIntegerProperty::integer("detect.project.tier")
        .named("Project Tier", "3.1.0")
        .help("If a Black Duck project tier is specified, your project will be created with this tier.")
        .groups(&[Group::Project, Group::ProjectSetting]);

    detect_project_tool: RequiredEnumListProperty<DetectTool> = RequiredEnumListProperty::enum_list("detect.project.tool", &[DetectTool::Docker, DetectTool::Detector, DetectTool::Bazel])
        .named("Detector Tool Priority", "5.0.0")
        .help_long(
            "The tool priority for project name and version. The project name and version will be determined by the first tool in this list that provides them.",
            "This allows you to control which tool provides the project name and version when more than one tool are capable of providing it.",
        )
        .groups(&[Group::Paths, Group::Global])
        .category(Category::Advanced);

    detect_project_version_distribution: RequiredEnumProperty<ProjectVersionDistributionType> = RequiredEnumProperty::enumeration("detect.project.version.distribution", ProjectVersionDistributionType::External)
        .named("Version Distribution", "3.0.0")
        .help("An override for the Project Version distribution")
        .groups(&[Group::Project, Group::ProjectSetting])
        .category(Category::Advanced);

    detect_project_version_name: OptionalStringProperty = OptionalStringProperty::string("detect.project.version.name")
        .named("Version Name", "3.0.0")
        .help("An override for the version to use for the Black Duck project. If not supplied, Detect will attempt to use the tools to figure out a reasonable version name. If that fails, the current date will be used.")
        .groups(&[Group::Project, Group::ProjectSetting]);

    detect_project_version_nickname: OptionalStringProperty = OptionalStringProperty::string("detect.project.version.nickname")
        .named("Version Nickname", "5.2.0")
        .help("If a project version nickname is specified, your project version will be created with this nickname.")
        .groups(&[Group::Project, Group::ProjectSetting]);

    detect_project_version_notes: OptionalStringProperty = OptionalStringProperty::string("detect.project.version.notes")
        .named("Version Notes", "3.1.0")
        .help("If project version notes are specified, your project version will be created with these notes.")
        .groups(&[Group::Project, Group::ProjectSetting]);

    detect_project_version_phase: RequiredEnumProperty<ProjectVersionPhaseType> = RequiredEnumProperty::enumeration("detect.project.version.phase", ProjectVersionPhaseType::Development)
        .named("Version Phase", "3.0.0")
        .help("An override for the Project Version phase.")
        .groups(&[Group::Project, Group::ProjectSetting]);

    detect_project_version_update: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.project.version.update", false)
        .named("Update Project Version", "4.0.0")
        .groups(&[Group::Project, Group::ProjectSetting]);

    detect_python_path: OptionalStringProperty = OptionalStringProperty::string("detect.python.path")
        .named("Python Executable", "3.0.0")
        .help("The path to the Python executable.")
        .groups(&[Group::Python, Group::Global]);

    detect_python_python3: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.python.python3", false)
        .named("Use Python3", "3.0.0")
        .help("If true will use Python 3 if available on class path.")
        .groups(&[Group::Python, Group::Global]);

    detect_report_timeout: RequiredLongProperty = RequiredLongProperty::long("detect.report.timeout", 300)
        .named("Report Generation Timeout", "5.2.0")
        .help("The amount of time in seconds Detect will wait for scans to finish and to generate reports (i.e. risk and policy check). When changing this value, keep in mind the checking of policies might have to wait for scans to process which can take some time.")
        .groups(&[Group::BlackduckServer, Group::Global]);

    detect_required_detector_types: OptionalEnumListProperty<DetectorType> = OptionalEnumListProperty::enum_list("detect.required.detector.types")
        .named("Required Detect Types", "4.3.0")
        .help_long(
            "The set of required detectors.",
            "If you want one or more detectors to be required (must be found to apply), use this property to specify the set of required detectors. If this property is set, and one (or more) of the given detectors is not found to apply, Detect will fail.",
        )
        .groups(&[Group::Detector, Group::Global]);

    detect_resolve_tilde_in_paths: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.resolve.tilde.in.paths", true)
        .named("Resolve Tilde in Paths", "3.0.0")
        .help("If set to false Detect will not automatically resolve the '~/' prefix in a mac or linux path to the user's home directory.")
        .groups(&[Group::Paths, Group::Global]);

    detect_risk_report_pdf: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.risk.report.pdf", false)
        .named("Generate Risk Report (PDF)", "3.0.0")
        .help("When set to true, a Black Duck risk report in PDF form will be created.")
        .groups(&[Group::Report, Group::Global, Group::ReportSetting]);

    detect_risk_report_pdf_path: OptionalStringProperty = OptionalStringProperty::string("detect.risk.report.pdf.path")
        .named("Risk Report Output Path", "3.0.0")
        .help("The output directory for risk report in PDF. Default is the source directory.")
        .groups(&[Group::Report, Group::Global]);

    detect_ruby_include_runtime_dependencies: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.ruby.include.runtime.dependencies", true)
        .named("Ruby Runtime Dependencies", "5.4.0")
        .help("If set to false, runtime dependencies will not be included when parsing *.gemspec files.")
        .groups(&[Group::Ruby, Group::Global, Group::SourceScan]);

    detect_ruby_include_dev_dependencies: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.ruby.include.dev.dependencies", false)
        .named("Ruby Development Dependencies", "5.4.0")
        .help("If set to true, development dependencies will be included when parsing *.gemspec files.")
        .groups(&[Group::Ruby, Group::Global, Group::SourceScan]);

    detect_sbt_excluded_configurations: OptionalStringProperty = OptionalStringProperty::string("detect.sbt.excluded.configurations")
        .named("SBT Configurations Excluded", "3.0.0")
        .help("The names of the sbt configurations to exclude.")
        .groups(&[Group::Sbt, Group::SourceScan])
        .category(Category::Advanced);

    detect_sbt_included_configurations: OptionalStringProperty = OptionalStringProperty::string("detect.sbt.included.configurations")
        .named("SBT Configurations Included", "3.0.0")
        .help("The names of the sbt configurations to include.")
        .groups(&[Group::Sbt, Group::SourceScan])
        .category(Category::Advanced);

    detect_sbt_report_depth: RequiredIntegerProperty = RequiredIntegerProperty::integer("detect.sbt.report.search.depth", 3)
        .named("SBT Report Search Depth", "4.3.0")
        .help("Depth the sbt detector will use to search for report files.")
        .groups(&[Group::Sbt, Group::SourceScan]);

    detect_scan_output_path: OptionalStringProperty = OptionalStringProperty::string("detect.scan.output.path")
        .named("Scan Output Path", "3.0.0")
        .help("The output directory for all signature scanner output files. If not set, the signature scanner output files will be in a 'scan' subdirectory of the output directory.")
        .groups(&[Group::Paths, Group::Global]);

    detect_source_path: OptionalStringProperty = OptionalStringProperty::string("detect.source.path")
        .named("Source Path", "3.0.0")
        .help_long(
            "The path to the project directory to inspect.",
            "Detect will search the given directory for hints that indicate which package manager(s) the project uses, and will attempt to run the corresponding detector(s).",
        )
        .groups(&[Group::Paths, Group::SourcePath]);

    detect_test_connection: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.test.connection", false)
        .named("Test Connection to Black Duck", "3.0.0")
        .help("Test the connection to Black Duck with the current configuration.")
        .groups(&[Group::BlackduckServer, Group::Global]);

    detect_tools: RequiredFilterableEnumListProperty<DetectTool> = RequiredFilterableEnumListProperty::filterable_enum_list("detect.tools", &[])
        .named("Detect Tools Included", "5.0.0")
        .help_long(
            "The tools Detect should allow in a comma-separated list. Tools in this list (as long as they are not also in the excluded list) will be allowed to run if all criteria of the tool are met. Exclusion rules always win.",
            "This property and detect.tools.excluded provide control over which tools Detect runs.",
        )
        .groups(&[Group::Paths, Group::Global]);

    detect_tools_excluded: RequiredFilterableEnumListProperty<DetectTool> = RequiredFilterableEnumListProperty::filterable_enum_list("detect.tools.excluded", &[])
        .named("Detect Tools Excluded", "5.0.0")
        .help_long(
            "The tools Detect should not allow, in a comma-separated list. Excluded tools will not be run even if all criteria for the tool is met. Exclusion rules always win.",
            "This property and detect.tools provide control over which tools Detect runs.",
        )
        .groups(&[Group::Paths, Group::Global]);

    detect_yarn_prod_only: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.yarn.prod.only", false)
        .named("Include Yarn Production Dependencies Only", "4.0.0")
        .help("Set this to true to only scan production dependencies.")
        .groups(&[Group::Yarn, Group::Global, Group::SourceScan]);

    logging_level_com_synopsys_integration: RequiredEnumProperty<LogLevel> = RequiredEnumProperty::enumeration("logging.level.com.synopsys.integration", LogLevel::Info)
        .named("Logging Level", "5.3.0")
        .help("The logging level of Detect.")
        .groups(&[Group::Logging, Group::Global]);

    logging_level_detect: RequiredEnumProperty<LogLevel> = RequiredEnumProperty::enumeration("logging.level.detect", LogLevel::Info)
        .named("Logging Level Shorthand", "5.5.0")
        .help("Shorthand for the logging level of detect. Equivalent to setting logging.level.com.synopsys.integration.")
        .groups(&[Group::Logging, Group::Global]);

    detect_wait_for_results: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.wait.for.results", false)
        .named("Wait For Results", "5.5.0")
        .help("If set to true, Detect will wait for Synopsys products until results are available or the blackduck.timeout is exceeded.")
        .groups(&[Group::General, Group::Global]);

    detect_bitbake_reference_impl: RequiredStringProperty = RequiredStringProperty::string("detect.bitbake.reference.impl", "-poky-linux")
        .named("Reference implementation", "4.4.0")
        .help("The reference implementation of the Yocto project. These characters are stripped from the discovered target architecture.")
        .groups(&[Group::Bitbake, Group::SourceScan]);

    detect_api_timeout: RequiredLongProperty = RequiredLongProperty::long("detect.api.timeout", 300_000)
        .named("Detect Api Timeout", "3.0.0")
        .help("Timeout for response from Black Duck regarding your project (i.e. risk reports and policy check). When changing this value, keep in mind the checking of policies might have to wait for a new scan to process which can take some time.")
        .groups(&[Group::ProjectInfo, Group::Project]);

    detect_gradle_inspector_repository_url: OptionalStringProperty = OptionalStringProperty::string("detect.gradle.inspector.repository.url")
        .named("Detect Gradle Inspector Repository Url", "3.0.0")
        .help("The respository gradle should use to look for the gradle inspector dependencies.")
        .groups(&[Group::Gradle]);

    detect_nuget_inspector_name: RequiredStringProperty = RequiredStringProperty::string("detect.nuget.inspector.name", "IntegrationNugetInspector")
        .named("Detect Nuget Inspector Name", "3.0.0")
        .help_long(
            "Name of the Nuget Inspector package and the Nuget Inspector exe. (Do not include '.exe'.)",
            "The nuget inspector (previously) could be hosted on a custom nuget feed. In this case, Detect needed to know the name of the package to pull and the name of the exe file (which has to match). In the future, Detect will only retreive it from Artifactory or from Air Gap so a custom name is no longer supported.",
        )
        .groups(&[Group::Nuget]);

    detect_nuget_path: OptionalStringProperty = OptionalStringProperty::string("detect.nuget.path")
        .named("Detect Nuget Path", "3.0.0")
        .help("The path to the Nuget executable. Nuget is used to download the classic inspectors nuget package.")
        .groups(&[Group::Nuget]);

    detect_blackduck_signature_scanner_disabled: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.blackduck.signature.scanner.disabled", false)
        .named("Detect Blackduck Signature Scanner Disabled", "4.2.0")
        .help("Set to true to disable the Black Duck Signature Scanner.")
        .groups(&[Group::SignatureScanner, Group::Blackduck]);

    detect_blackduck_signature_scanner_parallel_processors: RequiredIntegerProperty = RequiredIntegerProperty::integer("detect.blackduck.signature.scanner.parallel.processors", 1)
        .named("Signature Scanner Parallel Processors", "4.2.0")
        .help("The number of scans to run in parallel, defaults to 1, but if you specify -1, the number of processors on the machine will be used.")
        .groups(&[Group::SignatureScanner, Group::Global])
        .category(Category::Advanced);

    detect_polaris_enabled: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.polaris.enabled", false)
        .named("Detect Polaris Enabled", "4.4.0")
        .help("Set to false to disable the Synopsys Polaris Tool.")
        .groups(&[Group::Polaris]);

    detect_disable_without_blackduck: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.disable.without.blackduck", false)
        .named("Check For Valid Black Duck Connection", "4.2.0")
        .help("If true, during initialization Detect will check for Black Duck connectivity and exit with status code 0 if it cannot connect.")
        .groups(&[Group::BlackduckServer, Group::Blackduck, Group::Default]);

    detect_suppress_configuration_output: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.suppress.configuration.output", false)
        .named("Detect Suppress Configuration Output", "3.0.0")
        .help("If true, the default behavior of printing your configuration properties at startup will be suppressed.")
        .groups(&[Group::Logging]);

    detect_suppress_results_output: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.suppress.results.output", false)
        .named("Detect Suppress Results Output", "3.0.0")
        .help("If true, the default behavior of printing the Detect Results will be suppressed.")
        .groups(&[Group::Logging]);

    detect_maven_scope: OptionalStringProperty = OptionalStringProperty::string("detect.maven.scope")
        .named("Dependency Scope Included", "3.0.0")
        .help_long(
            "The name of a Maven scope. Output will be limited to dependencies with this scope.",
            "If set, Detect will include only dependencies of the given Maven scope.",
        )
        .groups(&[Group::Maven, Group::SourceScan]);

    detect_blackduck_signature_scanner_snippet_mode: RequiredBooleanProperty = RequiredBooleanProperty::boolean("detect.blackduck.signature.scanner.snippet.mode", false)
        .named("Snippet Scanning", "4.2.0")
        .help("If set to true, the signature scanner will, if supported by your Black Duck version, run in snippet scanning mode.")
        .groups(&[Group::SignatureScanner, Group::Global, Group::SourceScan]);

    polaris_url: OptionalStringProperty = OptionalStringProperty::string("polaris.url")
        .named("Polaris Url", "4.1.0")
        .help("The url of your polaris instance.")
        .groups(&[Group::Polaris, Group::Default, Group::Global]);

    polaris_access_token: OptionalStringProperty = OptionalStringProperty::string("polaris.access.token")
        .named("Polaris Access Token", "5.3.0")
        .help("The access token for your polaris instance.")
        .groups(&[Group::Polaris, Group::Default, Group::Global]);

    polaris_arguments: OptionalStringProperty = OptionalStringProperty::string("polaris.arguments")
        .named("Polaris Arguments", "5.3.0")
        .help("Additional arguments to pass to polaris separated by space. The polaris.command takes precedence.")
        .groups(&[Group::Polaris, Group::Default, Group::SourceScan]);

    polaris_command: OptionalStringProperty = OptionalStringProperty::string("polaris.command")
        .named("Polaris Command", "6.0.0")
        .help("A replacement command to pass to polaris separated by space. Include the analyze or setup command itself. If specified, polaris.arguments will be ignored and this will take precedence.")
        .groups(&[Group::Polaris, Group::Default, Group::SourceScan]);
}
