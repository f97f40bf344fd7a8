use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use nexus_admin::admin::domain::RepositoryKind;

/// Administer a repository manager and query remediations from a policy server
#[derive(Parser, Debug)]
#[command(name = "nexus-admin")]
#[command(version)]
#[command(about = "Administer a repository manager and query remediations from a policy server", long_about = None)]
pub struct Args {
    /// Path to the config file (defaults to ./nexus-admin.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up the remediation for a component
    Remediation(RemediationArgs),
    /// Create a repository on the repository manager
    Repository(RepositoryArgs),
}

#[derive(ClapArgs, Debug)]
pub struct RemediationArgs {
    /// Component JSON file, or '-' to read from stdin
    #[arg(long, value_name = "FILE")]
    pub component: String,

    /// Policy evaluation stage (e.g. build, release)
    #[arg(short, long, default_value = "build")]
    pub stage: String,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Exactly one policy scope must be given
#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = false)]
pub struct ScopeArgs {
    /// Public ID of the application whose policies apply
    #[arg(short, long, value_name = "PUBLIC_ID")]
    pub application: Option<String>,

    /// Name of the organization whose policies apply
    #[arg(short, long, value_name = "NAME")]
    pub organization: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct RepositoryArgs {
    /// Repository kind: hosted, proxy or group
    pub kind: RepositoryKind,

    /// Repository format (maven, npm, nuget, apt, docker, golang, raw, rubygems, bower, pypi, yum, gitlfs)
    #[arg(short, long)]
    pub format: String,

    /// Repository name
    #[arg(short, long)]
    pub name: String,

    /// Blob store backing the repository
    #[arg(short, long)]
    pub blob_store: Option<String>,

    /// Remote URL (proxy repositories only)
    #[arg(short, long)]
    pub remote_url: Option<String>,

    /// Group member, in resolution order (group repositories only)
    /// Can be specified multiple times: -m releases -m snapshots
    #[arg(short, long = "member", value_name = "REPOSITORY")]
    pub members: Vec<String>,

    /// Reject uploads whose content type does not match the format
    #[arg(long)]
    pub strict_content_type_validation: bool,

    /// Print the statement instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
