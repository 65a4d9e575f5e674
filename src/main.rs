mod cli;
mod cli_help;

use std::error::Error;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands, CommonArgs};
use fivec::config::Config;
use fivec::options::View;
use fivec::workbook::Source;
use fivec::{options, plot, report, score};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Resolve the config file and workbook source for a command.
fn resolve(common: &CommonArgs) -> Result<(Config, Source), Box<dyn Error>> {
    let cfg = Config::load(common.config.as_deref())?;
    let source = if let Some(url) = &common.url {
        Source::Url(url.clone())
    } else if let Some(path) = &common.workbook {
        Source::Path(path.clone())
    } else if let Some(path) = &cfg.workbook.path {
        Source::Path(path.clone())
    } else {
        return Err(
            "no workbook given (pass a path, --url, or set workbook.path in fivec.toml)".into(),
        );
    };
    Ok((cfg, source))
}

fn parse_view(key: &str) -> Result<View, Box<dyn Error>> {
    View::from_key(key).ok_or_else(|| format!("unknown view: {key}").into())
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Options {
            common,
            sheet,
            sort_by,
            top,
        } => {
            let (cfg, source) = resolve(&common)?;
            options::run(&cfg, &source, sheet.as_deref(), &sort_by, top, common.json)
        }
        Commands::Score { common } => {
            let (cfg, source) = resolve(&common)?;
            score::run(&cfg, &source, common.json)
        }
        Commands::Scatter { common, view, seed } => {
            let (cfg, source) = resolve(&common)?;
            plot::run_scatter(&cfg, &source, parse_view(&view)?, seed, common.json)
        }
        Commands::Radar { common, seed } => {
            let (cfg, source) = resolve(&common)?;
            plot::run_radar(&cfg, &source, seed, common.json)
        }
        Commands::Report { common, seed } => {
            let (cfg, source) = resolve(&common)?;
            report::run(&cfg, &source, seed, common.json)
        }
        Commands::Html {
            common,
            out,
            view,
            seed,
        } => {
            let (cfg, source) = resolve(&common)?;
            plot::run_html(&cfg, &source, &out, parse_view(&view)?, seed)
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "fc", &mut std::io::stdout());
            Ok(())
        }
    }
}
