//! CLI entry and dispatch.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use blog_core::{ApiClient, Config, FileStorage, Navigator, Route, Session, Storage, logging};
use clap::Parser;

mod commands;
mod display;
mod navigator;

use navigator::CliNavigator;

#[derive(Parser)]
#[command(name = "blog")]
#[command(version)]
#[command(about = "Command-line client for the blog API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse and write articles
    Articles {
        #[command(subcommand)]
        command: ArticleCommands,
    },
    /// Read and write comments
    Comments {
        #[command(subcommand)]
        command: CommentCommands,
    },
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        /// Read from stdin when not given
        #[arg(long, env = "BLOG_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account and log in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Read from stdin when not given
        #[arg(long, env = "BLOG_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session (no network)
    Status,
    /// Show or update your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Article body given inline or read from a file.
#[derive(clap::Args, Debug, Clone, Default)]
struct ContentArgs {
    /// Markdown content
    #[arg(long, conflicts_with = "content_file")]
    content: Option<String>,
    /// Read the content from a file
    #[arg(long, value_name = "PATH")]
    content_file: Option<PathBuf>,
}

impl ContentArgs {
    fn resolve(self) -> Result<Option<String>> {
        match (self.content, self.content_file) {
            (Some(text), _) => Ok(Some(text)),
            (None, Some(path)) => std::fs::read_to_string(&path)
                .map(Some)
                .with_context(|| format!("read content from {}", path.display())),
            (None, None) => Ok(None),
        }
    }
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct PageArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Items per page (default: page_size from config)
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(clap::Subcommand)]
enum ArticleCommands {
    /// List articles, newest first
    List {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Show an article with its comments
    Show {
        #[arg(value_name = "ID")]
        id: u64,
    },
    /// Publish a new article
    Create {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Edit one of your articles
    Edit {
        #[arg(value_name = "ID")]
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Delete one of your articles
    Delete {
        #[arg(value_name = "ID")]
        id: u64,
    },
}

#[derive(clap::Subcommand)]
enum CommentCommands {
    /// List comments on an article
    List {
        #[arg(value_name = "ARTICLE_ID")]
        article_id: u64,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Comment on an article
    Add {
        #[arg(value_name = "ARTICLE_ID")]
        article_id: u64,
        #[arg(value_name = "CONTENT")]
        content: String,
    },
    /// Delete one of your comments
    Delete {
        #[arg(value_name = "COMMENT_ID")]
        id: u64,
    },
}

#[derive(clap::Subcommand)]
enum ProfileCommands {
    /// Fetch your profile
    Show,
    /// Change username or avatar
    Update {
        #[arg(long)]
        username: Option<String>,
        /// Avatar URL (empty to clear)
        #[arg(long)]
        avatar: Option<String>,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

/// Shared state for commands that talk to the API.
pub struct App {
    pub config: Config,
    pub client: ApiClient,
    pub navigator: Arc<CliNavigator>,
}

impl App {
    fn new(config: Config, at_login_entry: bool) -> Result<Self> {
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open_default());
        let session = Session::new(storage);
        let navigator = Arc::new(CliNavigator::new(at_login_entry));
        let client = ApiClient::from_config(
            &config,
            session,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        )
        .context("create API client")?;
        Ok(Self {
            config,
            client,
            navigator,
        })
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    fn list_params(&self, paging: PageArgs) -> blog_types::ListParams {
        blog_types::ListParams::new(
            paging.page,
            paging.limit.unwrap_or_else(|| self.config.page_size()),
        )
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("load config")?;

    let level = if config.log_level.trim().is_empty() {
        "warn"
    } else {
        config.log_level.as_str()
    };
    let _log_guard = match logging::init(level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {e:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli, config).await })
}

async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let command = match cli.command {
        Some(Commands::Config { command }) => {
            return match command {
                ConfigCommands::Path => {
                    commands::config::path();
                    Ok(())
                }
                ConfigCommands::Init => commands::config::init(),
            };
        }
        Some(Commands::Status) => return commands::status::run(&config),
        other => other,
    };

    let at_login_entry = matches!(
        command,
        Some(Commands::Login { .. } | Commands::Register { .. })
    );
    let app = App::new(config, at_login_entry)?;

    // default to the home listing
    let Some(command) = command else {
        return commands::articles::home(&app).await;
    };

    match command {
        Commands::Articles { command } => match command {
            ArticleCommands::List { paging } => {
                commands::articles::list(&app, app.list_params(paging)).await
            }
            ArticleCommands::Show { id } => commands::articles::show(&app, id).await,
            ArticleCommands::Create { title, content } => {
                let content = content.resolve()?.unwrap_or_default();
                commands::articles::create(&app, &title, &content).await
            }
            ArticleCommands::Edit { id, title, content } => {
                let content = content.resolve()?;
                commands::articles::edit(&app, id, title.as_deref(), content.as_deref()).await
            }
            ArticleCommands::Delete { id } => commands::articles::delete(&app, id).await,
        },

        Commands::Comments { command } => match command {
            CommentCommands::List { article_id, paging } => {
                commands::comments::list(&app, article_id, app.list_params(paging)).await
            }
            CommentCommands::Add {
                article_id,
                content,
            } => commands::comments::add(&app, article_id, &content).await,
            CommentCommands::Delete { id } => commands::comments::delete(&app, id).await,
        },

        Commands::Login { email, password } => {
            commands::auth::login(&app, &email, password).await
        }
        Commands::Register {
            username,
            email,
            password,
        } => commands::auth::register(&app, &username, &email, password).await,
        Commands::Logout => commands::auth::logout(&app),

        Commands::Profile { command } => match command {
            ProfileCommands::Show => commands::profile::show(&app).await,
            ProfileCommands::Update { username, avatar } => {
                commands::profile::update(&app, username.as_deref(), avatar.as_deref()).await
            }
        },

        Commands::Config { .. } | Commands::Status => Ok(()),
    }?;

    follow_pending(&app).await
}

/// Follows a navigation queued by the command that just finished.
async fn follow_pending(app: &App) -> Result<()> {
    match app.navigator.take_pending() {
        Some(Route::Home) => {
            println!();
            commands::articles::home(app).await
        }
        Some(Route::Article(id)) => {
            println!();
            commands::articles::show(app, id).await
        }
        Some(Route::Login) | None => Ok(()),
    }
}
