//! Command-line interface for pagesmith
//! Runs the detector, analyzer, classifier and assembler on a Markdown or HTML file.
//!
//! Usage:
//!   pagesmith detect `<path>` [--strict [--max-length `<n>`]] - List detected components
//!   pagesmith analyze `<path>` [--title `<t>`] [--depth `<n>`] - Full structural analysis
//!   pagesmith suggest `<path>`                           - Recommend a page template
//!   pagesmith render `<path>` [--title `<t>`] [--cta-text `<t>` --cta-url `<u>`] - Render markup
//!
//! `<path>` may be `-` for stdin. Every command takes `--config <file>`; the data commands take
//! `--format json|yaml`. Set `RUST_LOG=debug` for the engine's decisions.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pagesmith::analysis::Analyzer;
use pagesmith::assembly::{render_analysis, CtaOptions, Link, RenderOptions, SemanticBuilder};
use pagesmith::classification::Classifier;
use pagesmith::config::{Loader, PagesmithConfig};
use pagesmith::{Detector, Result};
use serde::Serialize;
use std::io::Read;

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the content file, or '-' for stdin")
        .required(true)
        .index(1)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format")
        .value_parser(["json", "yaml"])
        .default_value("json")
}

fn title_arg() -> Arg {
    Arg::new("title")
        .long("title")
        .short('t')
        .help("Page title (used for keywords and the hero)")
}

fn cli() -> Command {
    Command::new("pagesmith")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analyze generated articles and assemble schema.org markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("detect")
                .about("List the components detected in the content")
                .arg(path_arg())
                .arg(format_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail on oversized content instead of truncating it"),
                )
                .arg(
                    Arg::new("max-length")
                        .long("max-length")
                        .requires("strict")
                        .value_parser(value_parser!(usize))
                        .help("Byte cap for --strict (defaults to the configured cap)"),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Derive headings, sections, metrics, components and SEO signals")
                .arg(path_arg())
                .arg(format_arg())
                .arg(title_arg())
                .arg(
                    Arg::new("depth")
                        .long("depth")
                        .short('d')
                        .help("Deepest heading level to report (1-6)")
                        .value_parser(value_parser!(u8).range(1..=6)),
                ),
        )
        .subcommand(
            Command::new("suggest")
                .about("Recommend a page template")
                .arg(path_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render the content as annotated markup followed by its JSON-LD scripts")
                .arg(path_arg())
                .arg(title_arg())
                .arg(
                    Arg::new("cta-text")
                        .long("cta-text")
                        .requires("cta-url")
                        .help("Button text for CTAs at the suggested placements"),
                )
                .arg(
                    Arg::new("cta-url")
                        .long("cta-url")
                        .requires("cta-text")
                        .help("Button target for CTAs at the suggested placements"),
                ),
        )
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("detect", sub)) => handle_detect_command(sub),
        Some(("analyze", sub)) => handle_analyze_command(sub),
        Some(("suggest", sub)) => handle_suggest_command(sub),
        Some(("render", sub)) => handle_render_command(sub),
        _ => unreachable!(),
    }
}

fn loader(matches: &ArgMatches) -> Loader {
    match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    }
}

fn load_config(matches: &ArgMatches) -> Result<PagesmithConfig> {
    Ok(loader(matches).build()?)
}

fn read_content(matches: &ArgMatches) -> Result<String> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    if path == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn emit<T: Serialize>(value: &T, matches: &ArgMatches) -> Result<()> {
    let output = match matches.get_one::<String>("format").map(String::as_str) {
        Some("yaml") => serde_yaml::to_string(value)?,
        _ => serde_json::to_string_pretty(value)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the detect command
fn handle_detect_command(matches: &ArgMatches) -> Result<()> {
    let mut loader = loader(matches);
    if matches.get_flag("strict") {
        let max = matches.get_one::<usize>("max-length").copied();
        loader = loader.with_strict_detection(max)?;
    }
    let config = loader.build()?;
    let content = read_content(matches)?;
    let components = Detector::new(config.detection).try_detect(&content)?;
    emit(&components, matches)
}

/// Handle the analyze command
fn handle_analyze_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let content = read_content(matches)?;
    let mut analyzer = Analyzer::new(config.analysis);
    if let Some(depth) = matches.get_one::<u8>("depth") {
        analyzer = analyzer.with_max_heading_depth(*depth);
    }
    let title = matches.get_one::<String>("title").map(String::as_str);
    emit(&analyzer.analyze(&content, title), matches)
}

/// Handle the suggest command
fn handle_suggest_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let content = read_content(matches)?;
    let classifier = Classifier::new(config.detection, config.classification);
    emit(&classifier.suggest(&content), matches)
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let content = read_content(matches)?;
    let explicit_title = matches.get_one::<String>("title");
    let analysis =
        Analyzer::new(config.analysis).analyze(&content, explicit_title.map(String::as_str));

    let title = explicit_title
        .cloned()
        .or_else(|| {
            analysis
                .headings
                .iter()
                .find(|h| h.level == 1)
                .map(|h| h.text.clone())
        })
        .unwrap_or_else(|| "Untitled".to_string());

    let cta = match (
        matches.get_one::<String>("cta-text"),
        matches.get_one::<String>("cta-url"),
    ) {
        (Some(text), Some(url)) => Some(CtaOptions {
            title: title.clone(),
            text: None,
            button: Link::new(text.as_str(), url.as_str()),
            secondary: None,
        }),
        _ => None,
    };

    let mut builder = SemanticBuilder::from_config(&config.assembly);
    render_analysis(
        &mut builder,
        &analysis,
        &RenderOptions {
            title,
            cta,
            ..RenderOptions::default()
        },
    );
    println!("{}", builder.html());
    let scripts = builder.json_ld_scripts();
    if !scripts.is_empty() {
        println!("{}", scripts);
    }
    Ok(())
}
