mod cli;

use cli::{Args, Command, RemediationArgs, RepositoryArgs};
use nexus_admin::adapters::outbound::network::{IqHttpClient, RmHttpClient};
use nexus_admin::admin::domain::{
    Component, GroupRepositoryConfig, HostedRepositoryConfig, ProxyRepositoryConfig,
    RepositoryFormat, RepositoryKind,
};
use nexus_admin::application::dto::{RepositoryRequest, RepositorySpec};
use nexus_admin::application::use_cases::{CreateRepositoryUseCase, GetRemediationUseCase};
use nexus_admin::config::{self, ConfigFile};
use nexus_admin::ports::inbound::RemediationPort;
use nexus_admin::shared::{ExitCode, Result};
use owo_colors::OwoColorize;
use std::io::Read;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Remediation(cmd) => run_remediation(args.config.as_deref(), cmd).await,
        Command::Repository(cmd) => run_repository(args.config.as_deref(), cmd).await,
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }

    let current_dir = std::env::current_dir()?;
    match config::discover_config(&current_dir)? {
        Some(found) => {
            tracing::info!(
                "Auto-discovered config file: {}",
                current_dir.join(config::CONFIG_FILENAME).display()
            );
            Ok(found)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn read_component(source: &str) -> Result<Component> {
    let content = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(source).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read component file: {}\nDetails: {}\n\n💡 Hint: Pass a JSON file describing the component, or '-' for stdin",
                source,
                e
            )
        })?
    };

    serde_json::from_str(&content).map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse component JSON: {}\n\n💡 Hint: Expected an object with packageUrl, hash or componentIdentifier",
            e
        )
    })
}

async fn run_remediation(config_path: Option<&Path>, cmd: RemediationArgs) -> Result<()> {
    let component = read_component(&cmd.component)?;
    let settings = load_config(config_path)?.iq_settings()?;

    let iq = IqHttpClient::new(&settings)?;
    let use_case = GetRemediationUseCase::new(iq.clone(), iq);

    let remediation = match (&cmd.scope.application, &cmd.scope.organization) {
        (Some(app), _) => {
            use_case
                .get_remediation_by_app(&component, &cmd.stage, app)
                .await?
        }
        (None, Some(org)) => {
            use_case
                .get_remediation_by_org(&component, &cmd.stage, org)
                .await?
        }
        (None, None) => anyhow::bail!("Either --application or --organization is required"),
    };

    if remediation.is_empty() {
        eprintln!("{}", "No remediation suggested for this component.".yellow());
    }
    println!("{}", serde_json::to_string_pretty(&remediation)?);

    Ok(())
}

fn build_repository_request(cmd: &RepositoryArgs) -> Result<RepositoryRequest> {
    let format: RepositoryFormat = cmd.format.parse()?;

    let spec = match cmd.kind {
        RepositoryKind::Hosted => RepositorySpec::Hosted(HostedRepositoryConfig {
            name: cmd.name.clone(),
            blob_store: cmd.blob_store.clone(),
            strict_content_type_validation: cmd.strict_content_type_validation,
        }),
        RepositoryKind::Proxy => RepositorySpec::Proxy(ProxyRepositoryConfig {
            name: cmd.name.clone(),
            remote_url: cmd.remote_url.clone(),
            blob_store: cmd.blob_store.clone(),
            strict_content_type_validation: cmd.strict_content_type_validation,
        }),
        RepositoryKind::Group => RepositorySpec::Group(GroupRepositoryConfig {
            name: cmd.name.clone(),
            blob_store: cmd.blob_store.clone(),
            members: cmd.members.clone(),
        }),
    };

    if cmd.remote_url.is_some() && cmd.kind != RepositoryKind::Proxy {
        tracing::warn!("--remote-url only applies to proxy repositories and will be ignored");
    }
    if !cmd.members.is_empty() && cmd.kind != RepositoryKind::Group {
        tracing::warn!("--member only applies to group repositories and will be ignored");
    }

    Ok(RepositoryRequest::new(format, spec))
}

async fn run_repository(config_path: Option<&Path>, cmd: RepositoryArgs) -> Result<()> {
    let request = build_repository_request(&cmd)?;

    if cmd.dry_run {
        println!("{}", request.render()?);
        return Ok(());
    }

    let settings = load_config(config_path)?.rm_settings()?;
    let use_case = CreateRepositoryUseCase::new(RmHttpClient::new(&settings)?);
    use_case.execute(request.clone()).await?;

    eprintln!(
        "{} Created {} {} repository '{}'",
        "✅".green(),
        request.spec.kind(),
        request.format,
        cmd.name
    );
    Ok(())
}
