use crate::admin::domain::repository::validate_literal;
use crate::admin::domain::{
    GroupRepositoryConfig, HostedRepositoryConfig, ProxyRepositoryConfig, RepositoryFormat,
    RepositoryKind,
};
use crate::shared::{AdminError, Result};

/// Positional argument of a repository creation primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentSlot {
    Name,
    RemoteUrl,
    BlobStore,
    Members,
}

impl ArgumentSlot {
    pub fn label(&self) -> &'static str {
        match self {
            ArgumentSlot::Name => "repository name",
            ArgumentSlot::RemoteUrl => "a remote URL",
            ArgumentSlot::BlobStore => "blob store",
            ArgumentSlot::Members => "members",
        }
    }
}

/// Groovy literal passed for a group without members
const EMPTY_LIST: &str = "[]";

/// Creation primitive plus the order its arguments are passed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTemplate {
    pub primitive: &'static str,
    pub arguments: &'static [ArgumentSlot],
}

impl StatementTemplate {
    const fn new(primitive: &'static str, arguments: &'static [ArgumentSlot]) -> Self {
        Self {
            primitive,
            arguments,
        }
    }
}

const HOSTED_ARGUMENTS: &[ArgumentSlot] = &[ArgumentSlot::Name, ArgumentSlot::BlobStore];
const PROXY_ARGUMENTS: &[ArgumentSlot] = &[
    ArgumentSlot::Name,
    ArgumentSlot::RemoteUrl,
    ArgumentSlot::BlobStore,
];
const GROUP_ARGUMENTS: &[ArgumentSlot] = &[
    ArgumentSlot::Name,
    ArgumentSlot::Members,
    ArgumentSlot::BlobStore,
];

macro_rules! statement_table {
    ($($format:ident: $hosted:literal, $proxy:literal, $group:literal;)+) => {
        &[$(
            (
                RepositoryKind::Hosted,
                RepositoryFormat::$format,
                StatementTemplate::new($hosted, HOSTED_ARGUMENTS),
            ),
            (
                RepositoryKind::Proxy,
                RepositoryFormat::$format,
                StatementTemplate::new($proxy, PROXY_ARGUMENTS),
            ),
            (
                RepositoryKind::Group,
                RepositoryFormat::$format,
                StatementTemplate::new($group, GROUP_ARGUMENTS),
            ),
        )+]
    };
}

const STATEMENTS: &[(RepositoryKind, RepositoryFormat, StatementTemplate)] = statement_table! {
    Maven: "repository.createMavenHosted", "repository.createMavenProxy", "repository.createMavenGroup";
    Npm: "repository.createNpmHosted", "repository.createNpmProxy", "repository.createNpmGroup";
    Nuget: "repository.createNugetHosted", "repository.createNugetProxy", "repository.createNugetGroup";
    Apt: "repository.createAptHosted", "repository.createAptProxy", "repository.createAptGroup";
    Docker: "repository.createDockerHosted", "repository.createDockerProxy", "repository.createDockerGroup";
    Golang: "repository.createGolangHosted", "repository.createGolangProxy", "repository.createGolangGroup";
    Raw: "repository.createRawHosted", "repository.createRawProxy", "repository.createRawGroup";
    Rubygems: "repository.createRubygemsHosted", "repository.createRubygemsProxy", "repository.createRubygemsGroup";
    Bower: "repository.createBowerHosted", "repository.createBowerProxy", "repository.createBowerGroup";
    Pypi: "repository.createPypiHosted", "repository.createPypiProxy", "repository.createPypiGroup";
    Yum: "repository.createYumHosted", "repository.createYumProxy", "repository.createYumGroup";
    GitLfs: "repository.createGitLfsHosted", "repository.createGitLfsProxy", "repository.createGitLfsGroup";
};

/// One positional argument after the omission rule has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArgument {
    pub present: bool,
    pub value: String,
}

impl RenderedArgument {
    fn present(value: String) -> Self {
        Self {
            present: true,
            value,
        }
    }

    fn absent() -> Self {
        Self {
            present: false,
            value: String::new(),
        }
    }
}

/// Config fields a template can draw from, regardless of repository kind
#[derive(Debug, Clone, Copy, Default)]
struct StatementFields<'a> {
    name: &'a str,
    remote_url: Option<&'a str>,
    blob_store: Option<&'a str>,
    members: &'a [String],
}

/// ScriptBuilder renders repository creation statements
///
/// Each (kind, format) pair maps to one creation primitive. The primitives
/// take positional arguments, so only missing or blank values at the end of
/// the call are dropped. A group without members but with a blob store gets
/// an empty member list; a proxy with a blob store needs a remote URL.
pub struct ScriptBuilder;

impl ScriptBuilder {
    /// Looks up the creation primitive for a repository kind and format
    pub fn template_for(
        kind: RepositoryKind,
        format: RepositoryFormat,
    ) -> Option<&'static StatementTemplate> {
        STATEMENTS
            .iter()
            .find(|(k, f, _)| *k == kind && *f == format)
            .map(|(_, _, template)| template)
    }

    pub fn render_hosted(format: RepositoryFormat, config: &HostedRepositoryConfig) -> Result<String> {
        Self::render(
            RepositoryKind::Hosted,
            format,
            StatementFields {
                name: &config.name,
                blob_store: config.blob_store.as_deref(),
                ..StatementFields::default()
            },
        )
    }

    pub fn render_proxy(format: RepositoryFormat, config: &ProxyRepositoryConfig) -> Result<String> {
        Self::render(
            RepositoryKind::Proxy,
            format,
            StatementFields {
                name: &config.name,
                remote_url: config.remote_url.as_deref(),
                blob_store: config.blob_store.as_deref(),
                ..StatementFields::default()
            },
        )
    }

    pub fn render_group(format: RepositoryFormat, config: &GroupRepositoryConfig) -> Result<String> {
        Self::render(
            RepositoryKind::Group,
            format,
            StatementFields {
                name: &config.name,
                blob_store: config.blob_store.as_deref(),
                members: &config.members,
                ..StatementFields::default()
            },
        )
    }

    fn render(kind: RepositoryKind, format: RepositoryFormat, fields: StatementFields) -> Result<String> {
        let template_error = |reason: String| AdminError::Template {
            kind: kind.to_string(),
            format: format.to_string(),
            reason,
        };

        let template = Self::template_for(kind, format)
            .ok_or_else(|| template_error("no creation statement for this format".to_string()))?;

        let arguments = template
            .arguments
            .iter()
            .map(|slot| Self::render_argument(*slot, &fields))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| template_error(e.to_string()))?;

        // Only trailing absent arguments may be dropped
        let used = arguments
            .iter()
            .rposition(|argument| argument.present)
            .map_or(0, |last| last + 1);

        let mut rendered = Vec::with_capacity(used);
        for (index, argument) in arguments[..used].iter().enumerate() {
            if argument.present {
                rendered.push(argument.value.as_str());
                continue;
            }

            let slot = template.arguments[index];
            if slot == ArgumentSlot::Members {
                rendered.push(EMPTY_LIST);
                continue;
            }

            let (later, _) = template.arguments[index + 1..used]
                .iter()
                .zip(&arguments[index + 1..used])
                .find(|(_, argument)| argument.present)
                .ok_or_else(|| template_error("argument list has a gap".to_string()))?;
            return Err(template_error(format!(
                "{} requires {}",
                later.label(),
                slot.label()
            ))
            .into());
        }

        Ok(format!("{}({})", template.primitive, rendered.join(", ")))
    }

    fn render_argument(slot: ArgumentSlot, fields: &StatementFields) -> Result<RenderedArgument> {
        match slot {
            ArgumentSlot::Name => {
                if fields.name.trim().is_empty() {
                    anyhow::bail!("Repository name must not be empty");
                }
                validate_literal(fields.name, "Repository name")?;
                Ok(RenderedArgument::present(quote(fields.name)))
            }
            ArgumentSlot::RemoteUrl => optional_literal(fields.remote_url, "Remote URL"),
            ArgumentSlot::BlobStore => optional_literal(fields.blob_store, "Blob store"),
            ArgumentSlot::Members => {
                if fields.members.is_empty() {
                    return Ok(RenderedArgument::absent());
                }

                let mut quoted = Vec::with_capacity(fields.members.len());
                for member in fields.members {
                    if member.trim().is_empty() {
                        anyhow::bail!("Member name must not be empty");
                    }
                    validate_literal(member, "Member name")?;
                    quoted.push(quote(member));
                }
                Ok(RenderedArgument::present(format!("[{}]", quoted.join(", "))))
            }
        }
    }
}

fn optional_literal(value: Option<&str>, field: &str) -> Result<RenderedArgument> {
    match value {
        Some(value) if !value.trim().is_empty() => {
            validate_literal(value, field)?;
            Ok(RenderedArgument::present(quote(value)))
        }
        _ => Ok(RenderedArgument::absent()),
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value)
}
