use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use catalogue::aggregate::{self, Variant};
use catalogue::output;
use catalogue::parsing;
use catalogue::profile::{self, Profile};
use catalogue::search::{self, Cache, SearchSettings, Snapshot};
use catalogue::templating::{self, Table};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("catalogue")
        .version(VERSION)
        .propagate_version(true)
        .about("Scan class search results into a course catalogue, and summarize flat profiles.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("scrape")
                .about("Build the course catalogue from class search results")
                .arg(
                    Arg::new("snapshot")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file holding the subject list, form options, and result tables."),
                )
                .arg(
                    Arg::new("output")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Name of the file to write the catalogue JSON to."),
                )
                .arg(
                    Arg::new("term")
                        .long("term")
                        .default_value("Spring Semester 2021")
                        .help("Term to search, as labelled on the search form."),
                )
                .arg(
                    Arg::new("division")
                        .long("division")
                        .default_value("All")
                        .help("Division to search, as labelled on the search form."),
                )
                .arg(
                    Arg::new("campus")
                        .long("campus")
                        .default_value("Main")
                        .help("Campus to search, as labelled on the search form."),
                )
                .arg(
                    Arg::new("attribute")
                        .long("attribute")
                        .default_value("Any")
                        .help("Course attribute to search, as labelled on the search form."),
                )
                .arg(
                    Arg::new("credit")
                        .long("credit")
                        .default_value("All")
                        .help("Credit hours to search, as labelled on the search form."),
                )
                .arg(
                    Arg::new("plain")
                        .long("plain")
                        .action(ArgAction::SetTrue)
                        .help("Omit the per-section tags (instructor, CRN, location, ...) from each course."),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .action(ArgAction::SetTrue)
                        .help("Don't report progress for each subject."),
                ),
        )
        .subcommand(
            Command::new("profile")
                .about("Summarize a gprof flat profile")
                .arg(
                    Arg::new("executable")
                        .long("executable")
                        .value_parser(value_parser!(PathBuf))
                        .help("Profiled program to run gprof against; gmon.out must be in the current directory."),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .value_parser(value_parser!(PathBuf))
                        .help("Saved flat profile report to read instead, or '-' for standard input."),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["executable", "input"])
                        .required(true),
                )
                .arg(
                    Arg::new("top")
                        .short('n')
                        .long("top")
                        .value_parser(value_parser!(usize))
                        .default_value("20")
                        .help("Number of functions to list, by self time."),
                )
                .arg(
                    Arg::new("function")
                        .long("function")
                        .help("Show only the first function whose name contains this text."),
                ),
        )
        .get_matches();

    let quiet = matches
        .subcommand_matches("scrape")
        .map(|submatches| submatches.get_flag("quiet"))
        .unwrap_or(false);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if quiet { "warn" } else { "info" })),
        )
        .init();

    match matches.subcommand() {
        Some(("scrape", submatches)) => {
            let label = |name: &str| {
                submatches
                    .get_one::<String>(name)
                    .cloned()
                    .unwrap_or_default()
            };

            let settings = SearchSettings {
                term: label("term"),
                division: label("division"),
                campus: label("campus"),
                attribute: label("attribute"),
                credit: label("credit"),
            };
            debug!(?settings);

            let variant = if submatches.get_flag("plain") {
                Variant::Plain
            } else {
                Variant::Tagged
            };

            let (Some(snapshot), Some(target)) = (
                submatches.get_one::<PathBuf>("snapshot"),
                submatches.get_one::<PathBuf>("output"),
            ) else {
                fail("snapshot and output filenames are required");
            };

            scrape(snapshot, target, &settings, variant);
        }
        Some(("profile", submatches)) => {
            let content = match (
                submatches.get_one::<PathBuf>("executable"),
                submatches.get_one::<PathBuf>("input"),
            ) {
                (Some(executable), _) => {
                    profile::run_gprof(executable).unwrap_or_else(|error| fail(error))
                }
                (None, Some(input)) if input.as_os_str() == "-" => {
                    std::io::read_to_string(std::io::stdin()).unwrap_or_else(|error| fail(error))
                }
                (None, Some(input)) => parsing::load(input).unwrap_or_else(|error| fail(error)),
                (None, None) => fail("either --executable or --input is required"),
            };

            let profile = Profile::from_text(&content);
            debug!(samples = profile.len());

            let selection = match submatches.get_one::<String>("function") {
                Some(needle) => match profile.function(needle) {
                    Some(sample) => vec![sample],
                    None => fail(format!("no function matching '{}'", needle)),
                },
                None => {
                    let n = submatches
                        .get_one::<usize>("top")
                        .copied()
                        .unwrap_or(20);
                    profile.top_functions(n)
                }
            };

            let report =
                templating::fill(&Table, &selection).unwrap_or_else(|error| fail(error));
            print!("{}", report);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: catalogue [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn scrape(snapshot: &Path, target: &Path, settings: &SearchSettings, variant: Variant) {
    let source = Snapshot::load(snapshot).unwrap_or_else(|error| fail(error));

    // One cache for the whole run, so that the subject list the sections were
    // fetched with is the same one their course ids are computed from.
    let cache = Cache::new();

    let sections =
        search::all_sections(&source, &cache, settings).unwrap_or_else(|error| fail(error));
    let subjects = cache
        .subjects(&source)
        .unwrap_or_else(|error| fail(error));

    let courses = aggregate::convert_courses(&sections, subjects, variant);

    output::write_catalogue(target, &courses).unwrap_or_else(|error| fail(error));
}

fn fail(message: impl Display) -> ! {
    eprintln!("{}: {}", "error".bright_red(), message);
    std::process::exit(1);
}
