//! Command handlers for CLI subcommands.

use std::sync::Arc;

use chrono::Utc;
use showbuild_client::ApiClient;
use showbuild_core::colors::to_hex;
use showbuild_core::cue::{compose_fields, CueFields};
use showbuild_core::navigation::navigate;
use showbuild_core::validation::{validate_duration, validate_link, validate_slug, validate_title};
use showbuild_core::{
    duration, AuthSession, AuthState, Config, LoginRequest, Navigation, SaveOutcome,
    TracingNotifier, Workspace,
};
use showbuild_models::EpisodeId;
use showbuild_persistence::{FileStore, LocalStore};
use tracing::info;

use crate::cli::{ColorCommand, Commands, Rule};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Engine state opened against the configured store and API.
struct Context {
    workspace: Workspace,
    client: ApiClient,
}

impl Context {
    fn open(config: &Config) -> Self {
        let store: Arc<dyn LocalStore> = Arc::new(FileStore::new(config.store_dir()));

        // The stored token authorizes every API call of this run.
        let mut auth = AuthSession::new(Arc::clone(&store));
        auth.check_auth_status();
        let client = match auth.token() {
            Some(token) => ApiClient::new(config.api_url.clone()).with_token(token),
            None => ApiClient::new(config.api_url.clone()),
        };

        let workspace = Workspace::open(
            config,
            store,
            Arc::new(client.clone()),
            Arc::new(TracingNotifier),
        );
        Self { workspace, client }
    }
}

/// Execute a CLI command.
pub async fn execute(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Duration { values } => {
            println!("{}", cmd_duration(&values));
            Ok(())
        }
        Commands::Cue {
            kind,
            slug,
            duration,
            body,
            fields,
        } => {
            println!("{}", cmd_cue(&kind, &slug, duration, &body, &fields)?);
            Ok(())
        }
        Commands::Validate { rule, value } => cmd_validate(rule, &value),
        Commands::Color { action } => cmd_color(action, config).await,
        Commands::Rundown { episode } => cmd_rundown(config, &episode).await,
        Commands::Reorder { episode, from, to } => cmd_reorder(config, &episode, from, to).await,
        Commands::Login { username, password } => cmd_login(config, &username, &password).await,
        Commands::Logout => {
            Context::open(config).workspace.auth_mut().logout();
            println!("Logged out.");
            Ok(())
        }
        Commands::Status => cmd_status(config),
        Commands::Route { path } => {
            let mut ctx = Context::open(config);
            match navigate(&path, ctx.workspace.auth_mut(), Utc::now()) {
                Navigation::Proceed(path) => println!("{}", path),
                Navigation::Redirect(path) => println!("{} (redirected)", path),
            }
            Ok(())
        }
    }
}

fn cmd_duration(values: &[String]) -> String {
    let total = values
        .iter()
        .map(|v| duration::parse_seconds(v))
        .fold(0, u64::saturating_add);
    duration::format(total)
}

fn cmd_cue(
    kind: &str,
    slug: &str,
    duration: Option<String>,
    body: &str,
    extra: &[String],
) -> Result<String> {
    let mut fields = CueFields::new();
    fields.insert("slug".to_string(), slug.to_string());
    fields.insert("description".to_string(), body.to_string());
    if let Some(duration) = duration {
        fields.insert("duration".to_string(), duration);
    }
    for pair in extra {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Expected KEY=VALUE, got: {}", pair))?;
        fields.insert(key.trim().to_string(), value.to_string());
    }
    Ok(compose_fields(kind, &fields))
}

fn cmd_validate(rule: Rule, value: &str) -> Result<()> {
    let checked = match rule {
        Rule::Slug => validate_slug(value),
        Rule::Title => validate_title(value),
        Rule::Duration => validate_duration(value),
        Rule::Link => validate_link(value),
    };
    checked?;
    println!("ok");
    Ok(())
}

async fn cmd_color(action: ColorCommand, config: &Config) -> Result<()> {
    let mut ctx = Context::open(config);

    match action {
        ColorCommand::Resolve { key } => {
            let token = ctx.workspace.colors().resolve(&key);
            println!("{}\t{}", token, to_hex(&token));
        }
        ColorCommand::Hex { token } => println!("{}", to_hex(&token)),
        ColorCommand::List => {
            for (key, token) in ctx.workspace.colors().resolved_map().iter() {
                println!("{:<24}  {:<20}  {}", key, token, to_hex(token));
            }
        }
        ColorCommand::Set { key, token } => {
            ctx.workspace.update_color(&key, &token)?;
            ctx.workspace.colors_mut().wait_for_sync().await;
            println!("{} = {}", key.to_lowercase(), token);
        }
        ColorCommand::Load { profile } => {
            let profile = profile.unwrap_or_else(|| config.color_profile.clone());
            let colors = ctx.workspace.colors_mut();
            let loaded = colors.load_remote_profile(&profile).await;
            if colors.loaded_from_remote() {
                println!("Loaded profile '{}' ({} colors)", profile, loaded.len());
            } else {
                println!("Profile '{}' unavailable, using defaults", profile);
            }
        }
    }
    Ok(())
}

async fn cmd_rundown(config: &Config, episode: &str) -> Result<()> {
    let mut ctx = Context::open(config);
    ctx.workspace
        .rundown_mut()
        .load(&ctx.client, EpisodeId::from_string(episode))
        .await?;

    let rundown = ctx.workspace.rundown();
    if rundown.is_empty() {
        println!("No items in episode {}.", episode);
        return Ok(());
    }

    println!("{:<4}  {:<10}  {:<24}  {:<10}  {:>8}  COLOR", "#", "TYPE", "SLUG", "STATUS", "DURATION");
    println!("{}", "-".repeat(76));
    for (index, item) in rundown.items().iter().enumerate() {
        println!(
            "{:<4}  {:<10}  {:<24}  {:<10}  {:>8}  {}",
            index + 1,
            item.item_type.as_str(),
            truncate(&item.slug, 24),
            item.status.as_str(),
            duration::display(item.duration.as_ref()),
            ctx.workspace.item_color(index).unwrap_or_default(),
        );
    }
    println!("\n{} item(s), total {}", rundown.len(), rundown.total_duration());
    Ok(())
}

async fn cmd_reorder(config: &Config, episode: &str, from: usize, to: usize) -> Result<()> {
    if from == 0 || to == 0 {
        return Err("Positions start at 1".into());
    }

    let mut ctx = Context::open(config);
    let rundown = ctx.workspace.rundown_mut();
    rundown
        .load(&ctx.client, EpisodeId::from_string(episode))
        .await?;
    rundown.reorder(from - 1, to - 1)?;

    match ctx.workspace.save_rundown(&ctx.client).await? {
        SaveOutcome::Committed => {
            info!(episode, from, to, "Rundown reordered");
            println!("Moved item {} to position {}.", from, to);
            Ok(())
        }
        SaveOutcome::Failed => Err("Failed to save rundown changes".into()),
    }
}

async fn cmd_login(config: &Config, username: &str, password: &str) -> Result<()> {
    let mut ctx = Context::open(config);
    let request = LoginRequest::new(username, password);
    let user = ctx
        .workspace
        .auth_mut()
        .login(&ctx.client, &request, Utc::now())
        .await?;
    println!("Logged in as {}", user.display_name());
    Ok(())
}

fn cmd_status(config: &Config) -> Result<()> {
    let ctx = Context::open(config);

    println!("API:        {}", config.api_url);
    println!("State dir:  {}", config.state_dir.display());
    println!("Profile:    {}", ctx.workspace.colors().profile_id());
    match ctx.workspace.auth().state() {
        AuthState::Authenticated(credentials) => {
            println!(
                "Session:    {} ({:?}), expires {}",
                credentials.user.username,
                credentials.user.access_level,
                credentials.expiry.format("%Y-%m-%d %H:%M UTC")
            );
        }
        AuthState::Anonymous => println!("Session:    not logged in"),
    }
    Ok(())
}

/// Truncate a string to a maximum length.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
