use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use github_user_finder_lib::{render, App, Args, Config, Event, GitHub, Key, SearchOutcome, Ui};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    dotenv().ok();

    // Logs go to stderr so the rendered page on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let github = GitHub::new(&config.api_url)?;
    let ui = Ui::new(config.repo_limit, config.chart_url.clone(), config.spinner);
    let mut app = App::new(github, ui);

    match config.username.clone() {
        Some(username) => {
            app.handle_event(Event::Input(username)).await;
            let outcome = app.handle_event(Event::Click).await;
            show(&app, &config).await?;
            Ok(match outcome {
                SearchOutcome::Failed { .. } => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            })
        }
        None => {
            interactive(&mut app, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read usernames line by line until EOF. Each line is typed into the
/// search bar and submitted with Enter.
async fn interactive(app: &mut App<GitHub>, config: &Config) -> Result<(), Box<dyn Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        app.handle_event(Event::Focus).await;

        print!("GitHub username: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        app.handle_event(Event::Input(line)).await;
        match app.handle_event(Event::KeyUp(Key::Enter)).await {
            SearchOutcome::Skipped => continue,
            _ => show(app, config).await?,
        }
        println!();
    }

    info!("Input closed, exiting");
    Ok(())
}

/// Print the page to stdout and, if configured, write it to the output file.
async fn show(app: &App<GitHub>, config: &Config) -> Result<(), Box<dyn Error>> {
    let page = app.ui().page();

    let mut stdout = std::io::stdout().lock();
    render::render(page, config.format, console::colors_enabled(), &mut stdout)?;
    stdout.flush()?;
    drop(stdout);

    if let Some(path) = &config.output {
        render::write_page(page, config.format, path).await?;
        info!("Saved page to '{}'", path.display());
    }
    Ok(())
}
