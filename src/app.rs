use crate::cli::{Cli, Commands};
use dailynote::config::{self, VaultSettings};
use dailynote::journal::DailyNoteManager;
use dailynote::plugin::{self, RpcRequest};
use std::process;

fn file_settings() -> VaultSettings {
    load_file_settings().0
}

/// File settings, plus the load error when the defaults had to stand in
fn load_file_settings() -> (VaultSettings, Option<String>) {
    match config::Config::load() {
        Ok(cfg) => (cfg.vault, None),
        Err(e) => {
            tracing::warn!("Using default settings: {:#}", e);
            (VaultSettings::default(), Some(format!("{:#}", e)))
        }
    }
}

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::Append { content } => handle_append(content.join(" ")),
            Commands::Open => handle_open(),
            Commands::Path => handle_path(),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    match cli.request {
        Some(raw) => handle_rpc(&raw),
        None => {
            eprintln!("Expected a JSON-RPC request or a subcommand. See --help.");
            process::exit(2);
        }
    }
}

fn handle_rpc(raw: &str) {
    let request = match RpcRequest::parse(raw) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Malformed request {:?}: {}", raw, e);
            eprintln!("Error: malformed request: {}", e);
            process::exit(1);
        }
    };

    let (mut settings, config_error) = load_file_settings();
    if let Some(host) = &request.settings {
        settings.apply_host_settings(host);
    }

    let manager = DailyNoteManager::new(settings);
    let mut response = plugin::handle_request(&manager, &request);
    if let Some(e) = config_error {
        response = response.annotate_error(&format!("Config ignored: {}", e));
    }

    match response.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: could not encode response: {}", e);
            process::exit(1);
        }
    }
}

fn handle_append(content: String) {
    let manager = DailyNoteManager::new(file_settings());
    match manager.append_to_daily_note(&content) {
        Ok(outcome) => println!("{} ({})", outcome, outcome.path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_open() {
    let manager = DailyNoteManager::new(file_settings());
    match manager.open_daily_note() {
        Ok(path) => println!("Opened {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_path() {
    let manager = DailyNoteManager::new(file_settings());
    let note = manager.daily_note_path();
    let template = manager.template_path();

    println!(
        "Daily note: {}{}",
        note.display(),
        if note.exists() { "" } else { " (not created yet)" }
    );
    println!(
        "Template:   {}{}",
        template.display(),
        if template.exists() { "" } else { " (missing)" }
    );
}

fn handle_init_config() {
    let path = match config::Config::config_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    match config::Config::init_at(&path) {
        Ok((cfg, true)) => {
            println!("Default config saved to {}", path.display());
            println!("{:#?}", cfg);
        }
        Ok((cfg, false)) => {
            println!("Config loaded successfully from {}", path.display());
            println!("{:#?}", cfg);
        }
        Err(e) => {
            // Leave the file alone; it may hold a vault path the user wants back
            eprintln!("Config is invalid, not overwriting it: {:#}", e);
            process::exit(1);
        }
    }
}
