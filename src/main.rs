use std::io::{self, BufRead, Write};

use serde::Serialize;
use symlang::config::{self, Settings};
use symlang::language::registry;
use symlang::{DemangleOptions, DemangleStatus, Error, Language, Result, UnderscorePolicy};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: symlang [--lang <c++|java|swift|rust|asm>] [--json] [--no-fallback] \
                     [--underscore <reject|drop>] <demangle [NAME...] | qualify PARENT NAME... | languages>";

#[derive(Debug, PartialEq)]
enum Command {
    Demangle(Vec<String>),
    Qualify { parent: String, names: Vec<String> },
    Languages,
    Help,
}

#[derive(Debug)]
struct Cli {
    language: &'static Language,
    json: bool,
    fallback: Option<bool>,
    underscore: Option<UnderscorePolicy>,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<Cli> {
    let mut language = &registry::RUST;
    let mut json = false;
    let mut fallback = None;
    let mut underscore = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" | "-l" => {
                let value = iter
                    .next()
                    .ok_or_else(|| Error::Usage("--lang needs a value".to_string()))?;
                language = registry::lookup(value)
                    .ok_or_else(|| Error::UnknownLanguage(value.clone()))?;
            }
            "--json" => json = true,
            "--no-fallback" => fallback = Some(false),
            "--underscore" => {
                let value = iter
                    .next()
                    .ok_or_else(|| Error::Usage("--underscore needs a value".to_string()))?;
                underscore = Some(value.parse()?);
            }
            "--help" | "-h" => {
                positional.clear();
                positional.push("help".to_string());
                break;
            }
            "--" => {
                positional.extend(iter.by_ref().cloned());
            }
            flag if flag.starts_with("--") => {
                return Err(Error::Usage(format!("unknown option '{}'", flag)));
            }
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("demangle") => Command::Demangle(positional.collect()),
        Some("qualify") => {
            let parent = positional
                .next()
                .ok_or_else(|| Error::Usage("qualify needs PARENT and at least one NAME".to_string()))?;
            let names: Vec<String> = positional.collect();
            if names.is_empty() {
                return Err(Error::Usage("qualify needs at least one NAME".to_string()));
            }
            Command::Qualify { parent, names }
        }
        Some("languages") => Command::Languages,
        Some("help") => Command::Help,
        Some(other) => return Err(Error::Usage(format!("unknown command '{}'", other))),
        None => return Err(Error::Usage("missing command".to_string())),
    };

    Ok(Cli {
        language,
        json,
        fallback,
        underscore,
        command,
    })
}

#[derive(Serialize)]
struct DemangleRecord<'a> {
    mangled: &'a str,
    language: Language,
    status: DemangleStatus,
    demangled: Option<&'a str>,
}

#[derive(Serialize)]
struct QualifyRecord<'a> {
    language: Language,
    qualified: &'a str,
}

#[derive(Serialize)]
struct LanguageRecord {
    name: &'static str,
    has_functions: bool,
    separator: Option<&'static str>,
}

fn run<R: BufRead, W: Write>(cli: &Cli, settings: &Settings, input: R, out: &mut W) -> Result<()> {
    let options = DemangleOptions::with_underscore(cli.underscore.unwrap_or(settings.underscore_policy));
    let fallback = cli.fallback.unwrap_or(settings.fallback_to_mangled);

    match &cli.command {
        Command::Demangle(names) if names.is_empty() => {
            for line in input.lines() {
                let line = line?;
                demangle_one(cli, &options, fallback, line.trim(), out)?;
            }
        }
        Command::Demangle(names) => {
            for name in names {
                demangle_one(cli, &options, fallback, name, out)?;
            }
        }
        Command::Qualify { parent, names } => {
            let qualified = names.iter().fold(parent.clone(), |parent, name| {
                cli.language.make_qualified_name(&parent, name)
            });
            if cli.json {
                let record = QualifyRecord {
                    language: *cli.language,
                    qualified: &qualified,
                };
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            } else {
                writeln!(out, "{}", qualified)?;
            }
        }
        Command::Languages => {
            for language in registry::all() {
                if cli.json {
                    let record = LanguageRecord {
                        name: language.name(),
                        has_functions: language.has_functions(),
                        separator: language.separator(),
                    };
                    writeln!(out, "{}", serde_json::to_string(&record)?)?;
                } else {
                    writeln!(
                        out,
                        "{}\tfunctions={}\tseparator={}",
                        language,
                        language.has_functions(),
                        language.separator().unwrap_or("-")
                    )?;
                }
            }
        }
        Command::Help => writeln!(out, "{}", USAGE)?,
    }

    Ok(())
}

fn demangle_one<W: Write>(
    cli: &Cli,
    options: &DemangleOptions,
    fallback: bool,
    mangled: &str,
    out: &mut W,
) -> Result<()> {
    let result = cli.language.demangle_name_with(mangled, options);

    if cli.json {
        let record = DemangleRecord {
            mangled,
            language: *cli.language,
            status: result.status(),
            demangled: result.as_deref(),
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
        return Ok(());
    }

    match result.as_deref() {
        Some(demangled) => writeln!(out, "{}", demangled)?,
        None if fallback => writeln!(out, "{}", mangled)?,
        None => writeln!(out)?,
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let settings = config::resolve(std::env::current_dir().ok().as_deref());
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&cli, &settings, stdin.lock(), &mut stdout.lock()) {
        eprintln!("symlang: {}", e);
        std::process::exit(1);
    }
}
