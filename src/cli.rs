//! Command-line surface
//!
//! With no subcommand the interactive front-end starts. The subcommands
//! run one lookup or manage the stored session and exit.

use clap::{Args, Parser, Subcommand};
use color_eyre::Result;

use glossa::config::Config;
use glossa::locale::Language;
use glossa::service::{GlossaryApi, GlossaryClient, LookupOutcome, classify_lookup, classify_search};
use glossa::session::{AuthSession, KeyValueStore, Role, User, stored_language, stored_token};
use glossa::terms::{CardVariant, TermCard};

#[derive(Debug, Parser)]
#[command(name = "glossa")]
#[command(about = "Search a multilingual glossary (Vietnamese, English, Lao)")]
#[command(version)]
pub struct Cli {
    /// Interface and lookup language (vi, en, lo)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Base URL of the glossary API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Quiet period before a suggestion lookup fires
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Localized path to open at startup, e.g. /en/terms?q=router
    #[arg(long, value_name = "PATH")]
    pub open: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print suggestions for a query, one per line
    Suggest {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Run a full-text search and print the matching terms
    Search {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Store a token and user record for API requests
    Login(LoginArgs),

    /// Remove the stored token and user record
    Logout,

    /// Show the signed-in user
    Whoami,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub token: String,

    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "user", value_parser = parse_role)]
    pub role: Role,
}

fn parse_role(s: &str) -> Result<Role, String> {
    match s.trim().to_lowercase().as_str() {
        "user" => Ok(Role::User),
        "moderator" => Ok(Role::Moderator),
        "admin" => Ok(Role::Admin),
        other => Err(format!(
            "unknown role '{}' (expected user, moderator or admin)",
            other
        )),
    }
}

impl Cli {
    /// Fold flag overrides into the loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(ms) = self.debounce_ms {
            config.search.debounce_ms = ms;
        }
        if let Some(lang) = self.lang {
            config.locale.default = lang;
        }
    }

    /// Language for one-shot lookups: flag, then stored preference, then config
    pub fn lookup_language(&self, config: &Config, store: &dyn KeyValueStore) -> Language {
        self.lang
            .or_else(|| stored_language(store))
            .unwrap_or(config.locale.default)
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// `glossa suggest`: `id<TAB>title<TAB>category` per line, nothing on failure
pub fn run_suggest(config: &Config, store: &dyn KeyValueStore, lang: Language, query: &str) -> Result<()> {
    let client = GlossaryClient::new(&config.api, stored_token(store))?;
    let result = runtime()?.block_on(client.suggestions(query, lang));

    if let LookupOutcome::Found(list) = classify_lookup(query, result) {
        for item in list {
            let category = item.category_name.as_deref().unwrap_or(&item.category);
            println!("{}\t{}\t{}", item.id, item.title(lang), category);
        }
    }
    Ok(())
}

/// `glossa search`: total line then one compact card per term
pub fn run_search(config: &Config, store: &dyn KeyValueStore, lang: Language, query: &str) -> Result<()> {
    let client = GlossaryClient::new(&config.api, stored_token(store))?;
    let result = runtime()?.block_on(client.search(query));
    let response = classify_search(query, result);

    println!("{} results for \"{}\"", response.total, query);
    for term in &response.terms {
        let card = TermCard::new(term, lang, CardVariant::Compact, false);
        println!("{}\t{}\t{}", card.id, card.title, card.definition);
    }
    Ok(())
}

/// Sign in; fails when the session cannot be written
pub fn run_login(store: &mut dyn KeyValueStore, args: LoginArgs) -> Result<()> {
    let user = User {
        id: args.id,
        full_name: args.name,
        email: args.email,
        role: args.role,
        avatar: None,
    };
    let mut session = AuthSession::load(store);
    session.login(store, user, &args.token);
    store.save()?;
    if let Some(user) = session.user() {
        println!("Signed in as {} ({})", user.full_name, user.role);
    }
    Ok(())
}

pub fn run_logout(store: &mut dyn KeyValueStore) -> Result<()> {
    let mut session = AuthSession::load(store);
    session.logout(store);
    store.save()?;
    println!("Signed out");
    Ok(())
}

pub fn run_whoami(store: &mut dyn KeyValueStore) {
    let session = AuthSession::load(store);
    match session.user() {
        Some(user) => println!("{} <{}> ({})", user.full_name, user.email, user.role),
        None => println!("Not signed in"),
    }
}
