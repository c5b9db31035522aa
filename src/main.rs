use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use tubecli::{cli, config, error, types::InfoSource};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Handle channel profiles
    Profiles(ProfilesOptions),

    /// Show a playlist
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle channel profiles",
    args_conflicts_with_subcommands = true // disallow mixing --active with subcommands
)]
pub struct ProfilesOptions {
    /// Select a profile by its position in the list and show its subscriptions
    #[clap(long)]
    pub active: Option<usize>,

    /// Subcommands under `profiles` (e.g., `add`)
    #[command(subcommand)]
    pub command: Option<ProfilesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfilesSubcommand {
    /// Create a profile
    Add(ProfileAddOpts),

    /// Change a profile's name or colors
    Update(ProfileUpdateOpts),

    /// Remove a profile
    Remove(ProfileIdOpts),

    /// Add a channel to a profile
    Subscribe(ProfileSubscribeOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct ProfileAddOpts {
    #[clap(long)]
    pub name: String,

    /// Background color as #RRGGBB (random when omitted)
    #[clap(long)]
    pub bg_color: Option<String>,

    /// Text color as #RRGGBB (derived from the background when omitted)
    #[clap(long)]
    pub text_color: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ProfileUpdateOpts {
    #[clap(long)]
    pub id: String,
    #[clap(long)]
    pub name: Option<String>,
    #[clap(long)]
    pub bg_color: Option<String>,
    #[clap(long)]
    pub text_color: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ProfileIdOpts {
    #[clap(long)]
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ProfileSubscribeOpts {
    #[clap(long)]
    pub id: String,
    #[clap(long)]
    pub channel_id: String,
    #[clap(long)]
    pub channel_name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist id
    playlist_id: String,

    /// Backend to try first: local or remote
    #[clap(long)]
    backend: Option<InfoSource>,

    /// Fail instead of trying the other backend
    #[clap(long)]
    no_fallback: bool,

    /// Only list the first N videos
    #[clap(long)]
    limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tubecli=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Profiles(opt) => match opt.command {
            Some(ProfilesSubcommand::Add(a)) => {
                cli::add_profile(a.name, a.bg_color, a.text_color).await
            }
            Some(ProfilesSubcommand::Update(u)) => {
                cli::update_profile(u.id, u.name, u.bg_color, u.text_color).await
            }
            Some(ProfilesSubcommand::Remove(r)) => cli::remove_profile(r.id).await,
            Some(ProfilesSubcommand::Subscribe(s)) => {
                cli::subscribe(s.id, s.channel_id, s.channel_name).await
            }
            None => cli::list_profiles(opt.active).await,
        },

        Command::Playlist(opt) => {
            cli::playlist(opt.playlist_id, opt.backend, opt.no_fallback, opt.limit).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
