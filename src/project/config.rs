use std::fs;
use std::io;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_RE: Regex = Regex::new("\"name\"\\s*:\\s*\"([^\"]+)\"").unwrap();
    static ref VERSION_RE: Regex = Regex::new("\"version\"\\s*:\\s*\"([^\"]+)\"").unwrap();
    static ref TYPE_RE: Regex = Regex::new("\"type\"\\s*:\\s*\"([^\"]+)\"").unwrap();
    static ref OUTPUT_RE: Regex = Regex::new("\"output_path\"\\s*:\\s*\"([^\"]+)\"").unwrap();
    static ref DEBUG_RE: Regex = Regex::new("\"debug\"\\s*:\\s*(true|false)").unwrap();
    static ref SHARED_LIB_RE: Regex = Regex::new("\"shared_lib\"\\s*:\\s*(true|false)").unwrap();
    static ref SOURCE_FILES_RE: Regex =
        Regex::new("\"source_files\"\\s*:\\s*\\[([^\\]]*)\\]").unwrap();
    static ref DEPENDENCIES_RE: Regex =
        Regex::new("\"dependencies\"\\s*:\\s*\\[([^\\]]*)\\]").unwrap();
    static ref LIST_ITEM_RE: Regex = Regex::new("\"([^\"]*)\"").unwrap();
}

/// The project-descriptor record persisted as `slpm.json`.
///
/// This is the only format crossing the boundary to the project-management
/// tooling. `kind` is serialized under the key `type` and is either
/// `"executable"` or `"library"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    pub name: String,
    pub version: String,
    pub kind: String,
    pub output_path: String,
    pub debug: bool,
    pub shared_lib: bool,
    pub source_files: Vec<String>,
    pub dependencies: Vec<String>,
}

impl ProjectConfig {
    /// Serializes the descriptor in its flat JSON shape.
    pub fn to_json(&self) -> String {
        let mut out = String::from("{\n");
        out.push_str(&format!("  \"name\": \"{}\",\n", self.name));
        out.push_str(&format!("  \"version\": \"{}\",\n", self.version));
        out.push_str(&format!("  \"type\": \"{}\",\n", self.kind));
        out.push_str(&format!("  \"output_path\": \"{}\",\n", self.output_path));
        out.push_str(&format!("  \"debug\": {},\n", self.debug));
        out.push_str(&format!("  \"shared_lib\": {},\n", self.shared_lib));
        out.push_str(&format!(
            "  \"source_files\": [{}],\n",
            quote_list(&self.source_files)
        ));
        out.push_str(&format!(
            "  \"dependencies\": [{}]\n",
            quote_list(&self.dependencies)
        ));
        out.push_str("}\n");
        out
    }

    /// Recovers a descriptor by pattern extraction. Fields missing from
    /// the input keep their defaults; no failure mode beyond that.
    pub fn from_json(content: &str) -> ProjectConfig {
        let mut config = ProjectConfig::default();

        if let Some(m) = NAME_RE.captures(content) {
            config.name = m[1].to_string();
        }
        if let Some(m) = VERSION_RE.captures(content) {
            config.version = m[1].to_string();
        }
        if let Some(m) = TYPE_RE.captures(content) {
            config.kind = m[1].to_string();
        }
        if let Some(m) = OUTPUT_RE.captures(content) {
            config.output_path = m[1].to_string();
        }
        if let Some(m) = DEBUG_RE.captures(content) {
            config.debug = &m[1] == "true";
        }
        if let Some(m) = SHARED_LIB_RE.captures(content) {
            config.shared_lib = &m[1] == "true";
        }
        if let Some(m) = SOURCE_FILES_RE.captures(content) {
            config.source_files = parse_list(&m[1]);
        }
        if let Some(m) = DEPENDENCIES_RE.captures(content) {
            config.dependencies = parse_list(&m[1]);
        }

        config
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_json())
    }

    pub fn load(path: &Path) -> io::Result<ProjectConfig> {
        let content = fs::read_to_string(path)?;
        Ok(ProjectConfig::from_json(&content))
    }
}

fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<String>>()
        .join(",")
}

fn parse_list(body: &str) -> Vec<String> {
    LIST_ITEM_RE
        .captures_iter(body)
        .map(|m| m[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::ProjectConfig;

    fn sample_config() -> ProjectConfig {
        ProjectConfig {
            name: "demo".to_string(),
            version: "0.1.0".to_string(),
            kind: "executable".to_string(),
            output_path: "demo".to_string(),
            debug: false,
            shared_lib: false,
            source_files: vec!["src/main.sl".to_string(), "src/lib.sl".to_string()],
            dependencies: vec!["mathlib".to_string()],
        }
    }

    #[test]
    fn test_round_trip_recovers_every_field() {
        let config = sample_config();
        let parsed = ProjectConfig::from_json(&config.to_json());

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_reader_keeps_defaults_for_missing_fields() {
        let parsed = ProjectConfig::from_json("{ \"name\": \"partial\" }");

        assert_eq!(parsed.name, "partial");
        assert_eq!(parsed.version, "");
        assert!(!parsed.debug);
        assert!(parsed.source_files.is_empty());
    }

    #[test]
    fn test_empty_lists_round_trip() {
        let mut config = sample_config();
        config.source_files.clear();
        config.dependencies.clear();

        let parsed = ProjectConfig::from_json(&config.to_json());
        assert!(parsed.source_files.is_empty());
        assert!(parsed.dependencies.is_empty());
    }

    #[test]
    fn test_library_flags() {
        let mut config = sample_config();
        config.kind = "library".to_string();
        config.shared_lib = true;
        config.debug = true;

        let parsed = ProjectConfig::from_json(&config.to_json());
        assert_eq!(parsed.kind, "library");
        assert!(parsed.shared_lib);
        assert!(parsed.debug);
    }
}
