mod cli;
mod prompt;

use vidtree::{config, playlist};
use vidtree_av::{tools, DurationProber, FfprobeDurationProber};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use prompt::Prompt;
use std::io::{BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "vidtree=debug,vidtree_av=debug,vidtree_common=debug".to_string()
        } else {
            "vidtree=info,vidtree_av=warn".to_string()
        }
    });

    // stdout belongs to the prompt
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut prompt = Prompt::new(std::io::stdin().lock(), std::io::stdout());
    let result = run(&cli, &mut prompt);

    if let Err(ref e) = result {
        eprintln!("An unexpected error occurred: {:#}", e);
    }

    if !cli.no_pause {
        if let Err(e) = prompt.wait_for_ack() {
            tracing::debug!("Exit acknowledgement failed: {}", e);
        }
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn run<R: BufRead, W: Write>(cli: &Cli, prompt: &mut Prompt<R, W>) -> Result<()> {
    let mut config = config::load_config_or_default(cli.config.as_deref())?;

    // Override playlist settings from CLI if specified
    if let Some(output) = &cli.output {
        config.playlist.output = output.clone();
    }
    if let Some(title) = &cli.title {
        config.playlist.title = title.clone();
    }
    config::validate_config(&config)?;

    if cli.check_tools {
        return check_tools(&config);
    }

    let root = match &cli.folder {
        Some(folder) => folder.clone(),
        None => {
            prompt.welcome()?;
            let current = std::env::current_dir().context("Cannot determine current folder")?;
            prompt.ask_folder(&current)?
        }
    };

    let prober = FfprobeDurationProber::discover(config.tools.ffprobe_path.as_deref());
    tracing::debug!("Using {} at {:?}", prober.name(), prober.path());

    let summary = playlist::create_xspf_playlist(
        &root,
        &config.playlist.output,
        &config.playlist.title,
        &prober,
    )?;

    prompt.report_success(&summary)?;
    Ok(())
}

fn check_tools(config: &config::Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tool = tools::check_tool(tools::FFPROBE, config.tools.ffprobe_path.as_deref());
    let status = if tool.available { "✓" } else { "✗" };
    print!("{} {}", status, tool.name);

    if let Some(ref version) = tool.version {
        print!(" ({})", version);
    }

    if let Some(ref path) = tool.path {
        print!(" - {}", path.display());
    }

    println!();
    println!();
    if tool.available {
        println!("All required tools are available!");
    } else {
        println!("ffprobe is missing. Every video will get duration -1.");
    }

    Ok(())
}
