//! `.env` file loading and single-entry writes.
//!
//! Environment state lives in an explicit [`EnvStore`] rather than the
//! ambient process environment, so the checker and wizard stay testable.
//! Files are the standard `KEY=value` format.
//!
//! # Supported Formats
//!
//! - Simple: `KEY=value`
//! - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
//! - Empty: `KEY=`
//! - Comments: `# This is a comment`
//! - Whitespace around equals: `KEY = value`
//! - Values with equals signs: `URL=https://example.com?foo=bar`

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// File names searched by [`EnvStore::load_dir`], in precedence order.
/// Later entries override earlier ones on key collision.
pub const DEFAULT_ENV_FILES: &[&str] = &[".env", ".env.local"];

/// An explicit key-value view of the environment.
///
/// # Example
///
/// ```
/// use devcheck::envfile::EnvStore;
///
/// let mut env = EnvStore::new();
/// env.set("RAILS_ENV", "development");
/// assert_eq!(env.get("RAILS_ENV"), Some("development"));
/// assert_eq!(env.get("UNSET"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    vars: HashMap<String, String>,
}

impl EnvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Number of variables in the store.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the store holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Load env files from `dir` into the store.
    ///
    /// Each name in `names` is tried in order; files later in the list
    /// override earlier ones on key collision. Returns `true` iff at least
    /// one file was found and loaded.
    pub fn load_dir(&mut self, dir: &Path, names: &[&str]) -> Result<bool> {
        let mut found = false;
        for name in names {
            let path = dir.join(name);
            if !path.is_file() {
                tracing::debug!("env file {} not present", path.display());
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            let parsed = parse(&content);
            tracing::debug!("loaded {} entries from {}", parsed.len(), path.display());
            self.vars.extend(parsed);
            found = true;
        }
        Ok(found)
    }
}

/// Parse env file content into a map of variables.
pub fn parse(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = parse_line(line) {
            vars.insert(key, value);
        }
    }

    vars
}

/// Parse a single `KEY=value` line.
fn parse_line(line: &str) -> Option<(String, String)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim().to_string();
    if key.is_empty() {
        return None;
    }
    let value = unquote(line[eq_pos + 1..].trim());
    Some((key, value))
}

/// Remove surrounding quotes from a value.
fn unquote(value: &str) -> String {
    if (value.starts_with('"') && value.ends_with('"'))
        || (value.starts_with('\'') && value.ends_with('\''))
    {
        if value.len() >= 2 {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    } else {
        value.to_string()
    }
}

/// Write or update a single `KEY=value` line in the file at `path`.
///
/// Creates the file if it does not exist. If one or more lines for `key`
/// already exist, the first is replaced in place and the rest are dropped,
/// so the file holds exactly one line for the key afterwards. Otherwise
/// the entry is appended.
pub fn write_entry(path: &Path, key: &str, value: &str) -> Result<()> {
    let existing = if path.is_file() {
        std::fs::read_to_string(path)?
    } else {
        String::new()
    };

    let entry = format!("{}={}", key, value);
    let prefix = format!("{}=", key);
    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;

    for line in existing.lines() {
        if line.trim_start().starts_with(&prefix) {
            if !replaced {
                lines.push(entry.clone());
                replaced = true;
            }
            continue;
        }
        lines.push(line.to_string());
    }

    if !replaced {
        lines.push(entry);
    }

    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_simple_env_file() {
        let vars = parse("KEY1=value1\nKEY2=value2\n");
        assert_eq!(vars.get("KEY1"), Some(&"value1".to_string()));
        assert_eq!(vars.get("KEY2"), Some(&"value2".to_string()));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let vars = parse("# comment\n\nKEY=value\n# another\n");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("KEY"), Some(&"value".to_string()));
    }

    #[test]
    fn handles_quoted_values() {
        let vars = parse("DOUBLE=\"double quoted\"\nSINGLE='single quoted'\n");
        assert_eq!(vars.get("DOUBLE"), Some(&"double quoted".to_string()));
        assert_eq!(vars.get("SINGLE"), Some(&"single quoted".to_string()));
    }

    #[test]
    fn handles_empty_values_and_equals_in_value() {
        let vars = parse("EMPTY=\nURL=https://example.com?foo=bar\n");
        assert_eq!(vars.get("EMPTY"), Some(&String::new()));
        assert_eq!(
            vars.get("URL"),
            Some(&"https://example.com?foo=bar".to_string())
        );
    }

    #[test]
    fn ignores_lines_without_equals_or_key() {
        let vars = parse("not a pair\n=nokey\nKEY=ok\n");
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn store_set_and_get() {
        let mut env = EnvStore::new();
        assert!(env.is_empty());
        env.set("A", "1");
        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn load_dir_returns_false_when_no_files() {
        let temp = TempDir::new().unwrap();
        let mut env = EnvStore::new();
        let found = env.load_dir(temp.path(), DEFAULT_ENV_FILES).unwrap();
        assert!(!found);
        assert!(env.is_empty());
    }

    #[test]
    fn load_dir_later_files_override_earlier() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".env"), "A=base\nB=only\n").unwrap();
        std::fs::write(temp.path().join(".env.local"), "A=local\n").unwrap();

        let mut env = EnvStore::new();
        let found = env.load_dir(temp.path(), DEFAULT_ENV_FILES).unwrap();
        assert!(found);
        assert_eq!(env.get("A"), Some("local"));
        assert_eq!(env.get("B"), Some("only"));
    }

    #[test]
    fn load_dir_true_with_single_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".env.local"), "X=1\n").unwrap();
        let mut env = EnvStore::new();
        assert!(env.load_dir(temp.path(), DEFAULT_ENV_FILES).unwrap());
        assert_eq!(env.get("X"), Some("1"));
    }

    #[test]
    fn write_entry_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env.local");
        write_entry(&path, "TOKEN", "abc123").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "TOKEN=abc123\n");
    }

    #[test]
    fn write_entry_replaces_existing_line_in_place() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "A=1\nTOKEN=old\nB=2\n").unwrap();
        write_entry(&path, "TOKEN", "new").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "A=1\nTOKEN=new\nB=2\n"
        );
    }

    #[test]
    fn write_entry_appends_new_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "A=1\n").unwrap();
        write_entry(&path, "B", "2").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A=1\nB=2\n");
    }

    #[test]
    fn write_entry_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        write_entry(&path, "KEY", "v").unwrap();
        write_entry(&path, "KEY", "v").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("KEY=").count(), 1);
    }

    #[test]
    fn write_entry_collapses_duplicate_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "KEY=1\nKEY=2\n").unwrap();
        write_entry(&path, "KEY", "3").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "KEY=3\n");
    }

    #[test]
    fn write_entry_does_not_touch_prefixed_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "KEY_EXTRA=keep\n").unwrap();
        write_entry(&path, "KEY", "v").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "KEY_EXTRA=keep\nKEY=v\n"
        );
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        write_entry(&temp.path().join(".env"), "WRITTEN", "yes").unwrap();
        let mut env = EnvStore::new();
        env.load_dir(temp.path(), DEFAULT_ENV_FILES).unwrap();
        assert_eq!(env.get("WRITTEN"), Some("yes"));
    }
}
