use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named launchable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShortcutRecord")]
pub struct Shortcut {
    /// Stable unique key used for deduplication
    pub id: String,
    /// Display label
    pub name: String,
    /// Path or URI of the display icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Executable path or command started on launch
    pub path: String,
}

/// Wire shape of a record before validation
#[derive(Deserialize)]
struct ShortcutRecord {
    id: String,
    name: String,
    #[serde(default)]
    icon: Option<String>,
    path: String,
}

impl TryFrom<ShortcutRecord> for Shortcut {
    type Error = String;

    fn try_from(record: ShortcutRecord) -> Result<Self, Self::Error> {
        let shortcut = Shortcut {
            id: record.id,
            name: record.name,
            icon: record.icon,
            path: record.path,
        }
        .normalize();
        shortcut.check()?;
        Ok(shortcut)
    }
}

impl Shortcut {
    /// Create a shortcut with a freshly minted id
    pub fn new(name: impl Into<String>, path: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            icon,
            path: path.into(),
        }
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            path: path.into(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Canonical form shared by parsing and merging: a blank icon is no icon.
    pub fn normalize(mut self) -> Self {
        if self.icon.as_deref().is_some_and(|icon| icon.trim().is_empty()) {
            self.icon = None;
        }
        self
    }

    /// Only the id is mandatory; an empty name or path is stored as given.
    pub fn check(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err(format!("shortcut {:?} has an empty id", self.name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_without_icon() {
        let s: Shortcut =
            serde_json::from_str(r#"{"id":"a","name":"Firefox","path":"/usr/bin/firefox"}"#)
                .unwrap();
        assert_eq!(s.id, "a");
        assert_eq!(s.icon, None);
    }

    #[test]
    fn test_parse_rejects_missing_path() {
        let res = serde_json::from_str::<Shortcut>(r#"{"id":"a","name":"Firefox"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_rejects_blank_id() {
        let err = serde_json::from_str::<Shortcut>(r#"{"id":"  ","name":"X","path":"/bin/x"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("has an empty id"));
    }

    #[test]
    fn test_parse_accepts_empty_name_and_path() {
        let s: Shortcut =
            serde_json::from_str(r#"{"id":"a","name":"","path":""}"#).unwrap();
        assert_eq!(s.name, "");
        assert_eq!(s.path, "");
    }

    #[test]
    fn test_normalize_drops_blank_icon_only() {
        let blank = Shortcut::with_id("a", "A", "/bin/a").with_icon("  ").normalize();
        assert_eq!(blank.icon, None);
        let kept = Shortcut::with_id("a", "A", "/bin/a").with_icon("a.png").normalize();
        assert_eq!(kept.icon.as_deref(), Some("a.png"));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let s: Shortcut = serde_json::from_str(
            r#"{"id":"a","name":"A","path":"/bin/a","cmd":"ignored","isApp":true}"#,
        )
        .unwrap();
        assert_eq!(s.path, "/bin/a");
    }

    #[test]
    fn test_blank_icon_becomes_none() {
        let s: Shortcut =
            serde_json::from_str(r#"{"id":"a","name":"A","icon":"","path":"/bin/a"}"#).unwrap();
        assert_eq!(s.icon, None);
    }

    #[test]
    fn test_serialized_field_order() {
        let s = Shortcut::with_id("a", "Vim", "/usr/bin/vim").with_icon("vim.png");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(
            json,
            r#"{"id":"a","name":"Vim","icon":"vim.png","path":"/usr/bin/vim"}"#
        );
    }

    #[test]
    fn test_icon_omitted_when_absent() {
        let s = Shortcut::with_id("a", "Vim", "/usr/bin/vim");
        let json = serde_json::to_string(&s).unwrap();
        assert!(!json.contains("icon"));
    }

    #[test]
    fn test_new_mints_distinct_ids() {
        let a = Shortcut::new("A", "/bin/a", None);
        let b = Shortcut::new("A", "/bin/a", None);
        assert_ne!(a.id, b.id);
        assert!(a.check().is_ok());
    }
}
