/// Metric keys requested from the measures endpoint
pub mod metrics {
    pub const COVERAGE: &str = "coverage";
    pub const DUPLICATED_LINES_DENSITY: &str = "duplicated_lines_density";
    pub const RELIABILITY_RATING: &str = "reliability_rating";
    pub const SECURITY_RATING: &str = "security_rating";
    pub const MAINTAINABILITY_RATING: &str = "sqale_rating";

    /// Order matters: this is the `metricKeys` query value
    pub const REQUESTED: &[&str] = &[
        COVERAGE,
        DUPLICATED_LINES_DENSITY,
        RELIABILITY_RATING,
        SECURITY_RATING,
        MAINTAINABILITY_RATING,
    ];
}

/// SonarQube Web API paths
pub mod api {
    pub const MEASURES_COMPONENT: &str = "/api/measures/component";
    pub const ISSUES_SEARCH: &str = "/api/issues/search";
    pub const HOTSPOTS_SEARCH: &str = "/api/hotspots/search";
}

/// Defaults used when the config file omits a value
pub mod defaults {
    pub const DEFAULT_BASE_URL: &str = "https://sonarqube.example.com";
    pub const DEFAULT_BRANCH: &str = "develop";
    pub const DEFAULT_OUTPUT_FOLDER: &str = "reportes";
    pub const DEFAULT_USER_AGENT: &str = concat!("sonar-report/", env!("CARGO_PKG_VERSION"));

    pub const COVERAGE_YELLOW: f64 = 50.0;
    pub const COVERAGE_GREEN: f64 = 80.0;
    pub const DUPLICATIONS_YELLOW: f64 = 10.0;
    pub const DUPLICATIONS_GREEN: f64 = 5.0;
    pub const ISSUES_YELLOW: u64 = 20;
    pub const ISSUES_GREEN: u64 = 5;
    pub const HOTSPOTS_YELLOW: u64 = 10;
    pub const HOTSPOTS_GREEN: u64 = 5;
    /// 1=A, 2=B, 3=C...
    pub const RATING_YELLOW: u8 = 2;
}

/// Config file discovery
pub mod files {
    pub const CONFIG_FILE_NAME: &str = "sonar-report.toml";
    pub const CONFIG_DIR_NAME: &str = ".sonar-report";
}

/// Environment variables that override config file values
pub mod env {
    pub const BASE_URL: &str = "SONAR_BASE_URL";
    pub const USERNAME: &str = "SONAR_USERNAME";
    pub const PASSWORD: &str = "SONAR_PASSWORD";
    pub const BRANCH: &str = "SONAR_BRANCH";
    pub const OUTPUT_FOLDER: &str = "SONAR_OUTPUT_FOLDER";
}

/// Spreadsheet layout and styling
pub mod sheet {
    pub const WORKSHEET_NAME: &str = "Reporte";
    pub const FILE_PREFIX: &str = "sonarqube_reporte";
    pub const FILE_EXTENSION: &str = "xlsx";

    pub const REPOSITORY_HEADER: &str = "Repository";
    pub const NEW_CODE_HEADER: &str = "New Code";
    pub const OVERALL_CODE_HEADER: &str = "Overall Code";
    pub const SUB_HEADERS: [&str; 4] = ["Coverage", "Issues", "Duplications", "Security Hotspots"];

    /// Fixed widths for columns A..I
    pub const COLUMN_WIDTHS: [f64; 9] = [35.0, 15.0, 10.0, 15.0, 20.0, 15.0, 10.0, 15.0, 20.0];

    pub const REPOSITORY_FILL: u32 = 0xD9D2E9;
    pub const NEW_CODE_FILL: u32 = 0xDBE5F1;
    pub const OVERALL_CODE_FILL: u32 = 0xB6D7A8;
    pub const SUB_HEADER_FILL: u32 = 0xE6EEF7;

    pub const CRITICAL_FILL: u32 = 0xF4CCCC;
    pub const WARNING_FILL: u32 = 0xFFE699;
    pub const GOOD_FILL: u32 = 0xD9EAD3;

    /// Rendered for a metric the server did not return
    pub const MISSING_VALUE: &str = "-";
}
