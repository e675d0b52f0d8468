use super::menu;
use super::print::{print_contacts, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use contacts::api::{CmdResult, ConfigAction, ContactsApi};
use contacts::config::ContactsConfig;
use contacts::error::{ContactsError, Result};
use contacts::model::ContactUpdate;
use contacts::store::fs::CsvStore;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: ContactsApi<CsvStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            first,
            last,
            phone,
            email,
            address,
        }) => {
            let result = ctx
                .api
                .add_contact(&first, &last, &phone, &email, &address)?;
            print_result(&result)
        }
        Some(Commands::Search { first, last }) => {
            let result = ctx.api.search_contacts(&first, &last)?;
            print_result(&result)
        }
        Some(Commands::Delete { first, last }) => {
            let result = ctx.api.delete_contact(&first, &last)?;
            print_result(&result)
        }
        Some(Commands::Update {
            first,
            last,
            new_first,
            new_last,
            phone,
            email,
            address,
        }) => {
            let update = ContactUpdate {
                first: new_first,
                last: new_last,
                phone,
                email,
                address,
            };
            let result = ctx.api.update_contact(&first, &last, &update)?;
            print_result(&result)
        }
        Some(Commands::List) => {
            let result = ctx.api.list_contacts()?;
            print_result(&result)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            menu::run(&mut ctx.api, stdin.lock(), io::stdout().lock())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout belongs to the menu and tables
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let config = ContactsConfig::load(&config_dir)?;

    let data_file = cli.file.clone().unwrap_or(config.data_file);
    debug!(
        data_file = %data_file.display(),
        config_dir = %config_dir.display(),
        "resolved paths"
    );

    let api = ContactsApi::new(CsvStore::new(data_file), config_dir);
    Ok(AppContext { api })
}

fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "contacts", "contacts")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ContactsError::Config("Could not determine config dir".into()))
}

fn print_result(result: &CmdResult) -> Result<()> {
    let mut out = io::stdout().lock();
    print_contacts(&mut out, &result.listed_contacts)?;
    print_messages(&mut out, &result.messages)?;
    out.flush()?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("data-file = {}", config.data_file.display());
        }
    }
    print_result(&result)
}
