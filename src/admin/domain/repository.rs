use crate::shared::{AdminError, Result};
use std::fmt;
use std::str::FromStr;

/// Maximum length for repository, blob store and member names
const MAX_NAME_LENGTH: usize = 255;

/// Package ecosystem a repository serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryFormat {
    Maven,
    Npm,
    Nuget,
    Apt,
    Docker,
    Golang,
    Raw,
    Rubygems,
    Bower,
    Pypi,
    Yum,
    GitLfs,
}

impl RepositoryFormat {
    pub const ALL: [RepositoryFormat; 12] = [
        RepositoryFormat::Maven,
        RepositoryFormat::Npm,
        RepositoryFormat::Nuget,
        RepositoryFormat::Apt,
        RepositoryFormat::Docker,
        RepositoryFormat::Golang,
        RepositoryFormat::Raw,
        RepositoryFormat::Rubygems,
        RepositoryFormat::Bower,
        RepositoryFormat::Pypi,
        RepositoryFormat::Yum,
        RepositoryFormat::GitLfs,
    ];

    /// Lowercase name as used on the command line and in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryFormat::Maven => "maven",
            RepositoryFormat::Npm => "npm",
            RepositoryFormat::Nuget => "nuget",
            RepositoryFormat::Apt => "apt",
            RepositoryFormat::Docker => "docker",
            RepositoryFormat::Golang => "golang",
            RepositoryFormat::Raw => "raw",
            RepositoryFormat::Rubygems => "rubygems",
            RepositoryFormat::Bower => "bower",
            RepositoryFormat::Pypi => "pypi",
            RepositoryFormat::Yum => "yum",
            RepositoryFormat::GitLfs => "gitlfs",
        }
    }
}

impl fmt::Display for RepositoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], "");
        RepositoryFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| {
                AdminError::Template {
                    kind: "any".to_string(),
                    format: s.to_string(),
                    reason: "unsupported repository format".to_string(),
                }
                .into()
            })
    }
}

/// How a repository gets its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryKind {
    /// Locally stored artifacts
    Hosted,
    /// Cache-through mirror of a remote source
    Proxy,
    /// Aggregation of other repositories
    Group,
}

impl RepositoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryKind::Hosted => "hosted",
            RepositoryKind::Proxy => "proxy",
            RepositoryKind::Group => "group",
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hosted" => Ok(RepositoryKind::Hosted),
            "proxy" => Ok(RepositoryKind::Proxy),
            "group" => Ok(RepositoryKind::Group),
            _ => anyhow::bail!(
                "Invalid repository kind: {}. Please specify 'hosted', 'proxy' or 'group'",
                s
            ),
        }
    }
}

/// Checks that a value can sit inside a single-quoted Groovy literal as-is
///
/// Quotes, backslashes and control characters are rejected rather than
/// escaped, so the statement sent to the server always matches the input.
pub fn validate_literal(value: &str, field: &str) -> Result<()> {
    if value.len() > MAX_NAME_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            field,
            value.len(),
            MAX_NAME_LENGTH
        );
    }

    if let Some(c) = value
        .chars()
        .find(|c| *c == '\'' || *c == '\\' || c.is_control())
    {
        anyhow::bail!("{} contains a character that is not allowed: {:?}", field, c);
    }

    Ok(())
}

/// Configuration of a hosted repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostedRepositoryConfig {
    pub name: String,
    pub blob_store: Option<String>,
    pub strict_content_type_validation: bool,
}

impl HostedRepositoryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_blob_store(mut self, blob_store: impl Into<String>) -> Self {
        self.blob_store = Some(blob_store.into());
        self
    }
}

/// Configuration of a proxy repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyRepositoryConfig {
    pub name: String,
    pub remote_url: Option<String>,
    pub blob_store: Option<String>,
    pub strict_content_type_validation: bool,
}

impl ProxyRepositoryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_remote_url(mut self, remote_url: impl Into<String>) -> Self {
        self.remote_url = Some(remote_url.into());
        self
    }

    pub fn with_blob_store(mut self, blob_store: impl Into<String>) -> Self {
        self.blob_store = Some(blob_store.into());
        self
    }
}

/// Configuration of a group repository
///
/// Member order is the order in which the group resolves artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRepositoryConfig {
    pub name: String,
    pub blob_store: Option<String>,
    pub members: Vec<String>,
}

impl GroupRepositoryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_blob_store(mut self, blob_store: impl Into<String>) -> Self {
        self.blob_store = Some(blob_store.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str_case_insensitive() {
        assert_eq!(
            RepositoryFormat::from_str("Maven").unwrap(),
            RepositoryFormat::Maven
        );
        assert_eq!(
            RepositoryFormat::from_str("PYPI").unwrap(),
            RepositoryFormat::Pypi
        );
    }

    #[test]
    fn test_format_from_str_git_lfs_spellings() {
        for spelling in ["gitlfs", "git-lfs", "GitLfs", "git_lfs"] {
            assert_eq!(
                RepositoryFormat::from_str(spelling).unwrap(),
                RepositoryFormat::GitLfs,
                "spelling {}",
                spelling
            );
        }
    }

    #[test]
    fn test_format_from_str_unknown_is_template_error() {
        let err = RepositoryFormat::from_str("cargo").unwrap_err();
        match err.downcast_ref::<AdminError>() {
            Some(AdminError::Template { format, .. }) => assert_eq!(format, "cargo"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(RepositoryKind::from_str("Hosted").unwrap(), RepositoryKind::Hosted);
        assert_eq!(RepositoryKind::from_str("proxy").unwrap(), RepositoryKind::Proxy);
        assert_eq!(RepositoryKind::from_str("GROUP").unwrap(), RepositoryKind::Group);
        let err = RepositoryKind::from_str("virtual").unwrap_err();
        assert!(err.to_string().contains("Invalid repository kind"));
    }

    #[test]
    fn test_all_formats_are_distinct() {
        let names: std::collections::HashSet<_> =
            RepositoryFormat::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_validate_literal_accepts_plain_names() {
        assert!(validate_literal("maven-releases", "Repository name").is_ok());
        assert!(validate_literal("https://repo1.maven.org/maven2/", "Remote URL").is_ok());
    }

    #[test]
    fn test_validate_literal_rejects_quotes_and_backslashes() {
        let err = validate_literal("it's", "Repository name").unwrap_err();
        assert!(err.to_string().contains("Repository name"));
        assert!(validate_literal("a\\b", "Repository name").is_err());
        assert!(validate_literal("a\nb", "Repository name").is_err());
    }

    #[test]
    fn test_validate_literal_rejects_long_values() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_literal(&long, "Blob store").unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_group_members_keep_order() {
        let config = GroupRepositoryConfig::new("all").with_members(["b", "a", "c"]);
        assert_eq!(config.members, vec!["b", "a", "c"]);
    }
}
