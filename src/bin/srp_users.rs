use anyhow::{Context, Result};
use colored::Colorize;
use solid_principles::error::UserError;
use solid_principles::logging;
use solid_principles::users::{
    InMemoryUserRepository, SqliteUserRepository, UserCreator, UserRepository, UserValidator,
};
use solid_principles::DemoConfig;
use std::env;
use std::path::{Path, PathBuf};

const DEMO_USERS: [(&str, &str, &str); 3] = [
    ("alice", "alice@example.com", "correct horse"),
    ("bob", "bob-at-example.com", "hunter2"),
    ("carol", "carol@example.org", "battery staple"),
];

/// Storage chosen by `[users] database` in the config.
enum UserStore {
    Memory(InMemoryUserRepository),
    Sqlite(SqliteUserRepository),
}

impl UserRepository for UserStore {
    fn save_user(&self, username: &str, email: &str, password: &str) -> Result<(), UserError> {
        match self {
            UserStore::Memory(repo) => repo.save_user(username, email, password),
            UserStore::Sqlite(repo) => repo.save_user(username, email, password),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    DemoConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config: {:?}", path))
}

fn open_repository(config: &DemoConfig) -> Result<UserStore> {
    match &config.users.database {
        Some(path) => {
            let repo = SqliteUserRepository::open(path)
                .with_context(|| format!("Failed to open user database: {}", path.display()))?;
            tracing::info!(path = %path.display(), "using sqlite user repository");
            Ok(UserStore::Sqlite(repo))
        }
        None => Ok(UserStore::Memory(InMemoryUserRepository::new())),
    }
}

/// Creates the demo users, printing one line per outcome. Rejections are
/// reported, not fatal; only opening the store can fail.
fn run(config: &DemoConfig) -> Result<()> {
    let validator = UserValidator::new();
    let repository = open_repository(config)?;
    let creator = UserCreator::new(&validator, &repository);

    println!("{}", "=== Creating users ===".bold());
    for (username, email, password) in DEMO_USERS {
        match creator.create_user(username, email, password) {
            Ok(()) => println!("  {} {} <{}>", "created".green(), username, email),
            Err(err) => println!("  {} {} <{}>: {}", "rejected".red(), username, email, err),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    colored::control::set_override(config.use_colors());
    logging::init(config.use_colors());

    run(&config)
}
