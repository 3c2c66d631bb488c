mod app;
mod config;
mod contact;
mod error;
mod event;
mod feed;
mod github;
mod settings;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::{Parser, Subcommand, ValueEnum};
use config::{Config, Overrides};
use contact::ContactMessage;
use event::PageEvent;
use settings::ThemeStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio page with your public GitHub projects")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true, help = "Diagnostic output level")]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Command {
    /// Load projects and write the page (the default)
    Render {
        #[arg(long, short, help = "Write the page here instead of stdout")]
        out: Option<PathBuf>,
        #[arg(long, help = "GitHub account to list")]
        user: Option<String>,
        #[arg(long, help = "Maximum number of project cards")]
        count: Option<usize>,
    },
    /// Switch between light and dark theme
    Theme,
    /// Send a message through the contact form endpoint
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(e) = run(cli.command.unwrap_or(Command::Render {
        out: None,
        user: None,
        count: None,
    }))
    .await
    {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: Command) -> error::Result<()> {
    let overrides = match &command {
        Command::Render { user, count, .. } => Overrides {
            github_username: user.clone(),
            projects_count: *count,
        },
        _ => Overrides::default(),
    };
    let config = Config::load(overrides);
    log::debug!("{config:?}");

    let mut app = App::new(config, ThemeStore::default_location())?;

    match command {
        Command::Render { out, .. } => {
            app.handle_event(PageEvent::ContentLoaded).await?;
            let document = app.page.render_document();
            match out {
                Some(path) => std::fs::write(path, document)?,
                None => print!("{document}"),
            }
        }
        Command::Theme => {
            app.handle_event(PageEvent::ThemeToggled).await?;
            println!("{}", app.page.theme);
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            app.handle_event(PageEvent::ContactSubmitted(ContactMessage {
                name,
                email,
                message,
            }))
            .await?;
            println!("{}", app.page.contact_status.as_deref().unwrap_or_default());
        }
    }
    Ok(())
}
