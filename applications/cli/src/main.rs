/// Setlist - scripted playlist editor
use clap::{Parser, Subcommand};
use setlist_client::SetlistClient;
use setlist_core::{PlaylistDocument, PlaylistId, SelectionStore, Song, UserId};
use setlist_editor::{EditSession, MemoryPlaylistStore, SharedSelection};
use setlist_cli::{script, AppConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "setlist")]
#[command(about = "Edit Setlist playlists with undo/redo", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Access token, overrides the configured one
    #[arg(long, global = true, env = "SETLIST_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a playlist
    Show {
        /// Playlist id
        id: String,
    },
    /// Create a new empty playlist
    Create,
    /// Apply edit operations to a playlist
    Edit {
        /// Playlist id
        id: String,
        /// Operations, e.g. "add", "move 0 2", "edit 1 Title|Artist|ref", "undo"
        #[arg(required = true, num_args = 1..)]
        ops: Vec<String>,
    },
    /// Apply edit operations to a local scratch playlist
    Demo {
        /// Operations, same syntax as `edit`
        #[arg(required = true, num_args = 1..)]
        ops: Vec<String>,
    },
    /// Log in and print an access token
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Account password
        #[arg(short, long, env = "SETLIST_PASSWORD")]
        password: String,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist_cli=info,setlist_editor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(token) = cli.token {
        config.client.access_token = Some(token);
    }
    config.validate()?;

    match cli.command {
        Commands::Show { id } => show(&config, id).await?,
        Commands::Create => create(&config).await?,
        Commands::Edit { id, ops } => edit(&config, id, &ops).await?,
        Commands::Demo { ops } => demo(&config, &ops).await?,
        Commands::Login { email, password } => login(&config, &email, &password).await?,
        Commands::Config => print_config(config)?,
    }

    Ok(())
}

async fn show(config: &AppConfig, id: String) -> anyhow::Result<()> {
    let client = SetlistClient::new(config.client.clone())?;
    let playlist = client
        .playlists()
        .await
        .client()
        .get_playlist(&PlaylistId::new(id))
        .await?;

    print_playlist(&playlist.name, &playlist.songs, playlist.published, None);
    Ok(())
}

async fn create(config: &AppConfig) -> anyhow::Result<()> {
    let client = SetlistClient::new(config.client.clone())?;
    let playlist = client.playlists().await.client().create_playlist().await?;

    tracing::info!(id = %playlist.id, name = %playlist.name, "Created playlist");
    println!("{}", playlist.id);
    Ok(())
}

async fn edit(config: &AppConfig, id: String, ops: &[String]) -> anyhow::Result<()> {
    let ops = script::parse_script(ops)?;
    let client = Arc::new(SetlistClient::new(config.client.clone())?);
    let selection = SharedSelection::new();

    let mut session = EditSession::open(
        client,
        selection.clone(),
        PlaylistId::new(id),
        config.editor.clone(),
    )
    .await?;

    let outcome = script::run(&mut session, &ops).await;

    let state = session.state();
    print_playlist(
        &state.name,
        &state.songs,
        state.published,
        selected_index(&selection, &state.id, &state.songs),
    );

    outcome?;
    Ok(())
}

async fn demo(config: &AppConfig, ops: &[String]) -> anyhow::Result<()> {
    let ops = script::parse_script(ops)?;

    let user = UserId::new("demo");
    let store = Arc::new(MemoryPlaylistStore::new(user.clone()));
    let id = PlaylistId::generate();
    let mut document = PlaylistDocument::new(id.clone(), "Demo");
    document.songs = vec![
        Song::new("Bohemian Rhapsody", "Queen", "fJ9rUzIMcZQ"),
        Song::new("Hey Jude", "The Beatles", "A_MjCqQoLLA"),
        Song::new("Wonderwall", "Oasis", "bx1Bh8ZvH84"),
    ];
    store.insert(user, document).await;

    let selection = SharedSelection::new();
    let mut session = EditSession::open(
        Arc::clone(&store),
        selection.clone(),
        id,
        config.editor.clone(),
    )
    .await?;

    script::run(&mut session, &ops).await?;

    let state = session.state();
    print_playlist(
        &state.name,
        &state.songs,
        state.published,
        selected_index(&selection, &state.id, &state.songs),
    );
    println!(
        "({} remote writes, {} undoable)",
        store.write_count(),
        session.history().pointer()
    );
    Ok(())
}

async fn login(config: &AppConfig, email: &str, password: &str) -> anyhow::Result<()> {
    let client = SetlistClient::new(config.client.clone())?;
    let auth = client.login(email, password).await?;

    println!("{}", auth.token);
    Ok(())
}

fn print_config(mut config: AppConfig) -> anyhow::Result<()> {
    if config.client.access_token.is_some() {
        config.client.access_token = Some("<redacted>".to_string());
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn selected_index(selection: &SharedSelection, id: &PlaylistId, songs: &[Song]) -> Option<usize> {
    let selected = selection.selection(id)?;
    songs.iter().position(|s| s.id.as_ref() == Some(&selected))
}

fn print_playlist(name: &str, songs: &[Song], published: bool, selected: Option<usize>) {
    println!(
        "{}{}",
        name,
        if published { " (published)" } else { "" }
    );
    for (index, song) in songs.iter().enumerate() {
        let marker = if selected == Some(index) { '>' } else { ' ' };
        println!(
            "{} {:>3}. {} - {} [{}]",
            marker, index, song.title, song.artist, song.media_ref
        );
    }
}
