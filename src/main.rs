use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use ordinalize_full::{Gender, I18n, LocaleId, OrdinalRequest, Ordinalizer, Plurality, Style};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    request: &'a OrdinalRequest,
    ordinal: String,
}

fn command() -> Command {
    Command::new("ordinalize")
        .version("0.1.0")
        .about("Print the ordinal form of a number")
        .arg(
            Arg::new("number")
                .help("Number to ordinalize")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .index(1),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .short('l')
                .help("Locale code (e.g., en, fr, es-MX)")
                .env("ORDINALIZE_LOCALE")
                .default_value("en"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .short('s')
                .help("precedence, spatial or short")
                .value_parser(value_parser!(Style))
                .default_value("precedence"),
        )
        .arg(
            Arg::new("gender")
                .long("gender")
                .short('g')
                .help("masculine or feminine")
                .value_parser(value_parser!(Gender))
                .default_value("masculine"),
        )
        .arg(
            Arg::new("plural")
                .long("plural")
                .short('p')
                .help("Use the plural form")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("messages")
                .long("messages")
                .short('m')
                .help("Directory of <locale>.json files merged over the bundled words")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the request and result as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log translation lookups")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = command().get_matches();

    let level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .init();

    let number = *matches
        .get_one::<i64>("number")
        .ok_or("missing number")?;
    let locale: LocaleId = matches
        .get_one::<String>("locale")
        .ok_or("missing locale")?
        .parse()?;
    let style = *matches.get_one::<Style>("style").ok_or("missing style")?;
    let gender = *matches.get_one::<Gender>("gender").ok_or("missing gender")?;
    let plurality = if matches.get_flag("plural") {
        Plurality::Plural
    } else {
        Plurality::Singular
    };

    let mut i18n = I18n::bundled()?;
    if let Some(dir) = matches.get_one::<PathBuf>("messages") {
        info!("Loading messages from {}", dir.display());
        i18n.load_dir(dir)?;
    }

    let request = OrdinalRequest::new(number, locale)
        .with_style(style)
        .with_gender(gender)
        .with_plurality(plurality);
    debug!(?request, "ordinalizing");

    let ordinal = Ordinalizer::new(&i18n).ordinalize_request(&request)?;

    if matches.get_flag("json") {
        let output = Output {
            request: &request,
            ordinal,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", ordinal);
    }

    Ok(())
}
