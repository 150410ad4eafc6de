use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, bail};
use log::info;

use family_linker::{
    CitationGenerator, CrossReferenceResolver, DirectoryTextSource, EquivalenceStore,
    IdentityMatcher, JsonFamilyParser, LinkerConfig, NameEquivalenceIndex, SharedEquivalences,
};

const USAGE: &str = "usage: family-linker <records-dir> <family-id> [target-name] [--config <file>]";

struct Args {
    records_dir: PathBuf,
    family_id: String,
    target: Option<String>,
    config: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut config = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a file")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!(USAGE),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(records_dir), Some(family_id)) = (positional.next(), positional.next()) else {
        bail!(USAGE);
    };
    let target = positional.next();
    if positional.next().is_some() {
        bail!(USAGE);
    }

    Ok(Args {
        records_dir: PathBuf::from(records_dir),
        family_id,
        target,
        config,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => LinkerConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => LinkerConfig::default(),
    };
    config.validate()?;
    info!("{config}");

    let equivalences = match &config.equivalence_store {
        Some(path) => SharedEquivalences::open(EquivalenceStore::new(path))
            .with_context(|| format!("opening equivalence store {}", path.display()))?,
        None => SharedEquivalences::in_memory(NameEquivalenceIndex::with_defaults()),
    };
    let names = equivalences.snapshot()?;

    let source = DirectoryTextSource::open(&args.records_dir)?;
    let resolver = CrossReferenceResolver::new(
        Arc::new(source),
        Arc::new(JsonFamilyParser::new()),
        Arc::clone(&names),
    )
    .with_config(config.resolver.clone());

    let start = Instant::now();
    let network = resolver
        .extract(&args.family_id)
        .await
        .with_context(|| format!("extracting {}", args.family_id))?;
    info!(
        "Extracted {} in {:?} ({})",
        args.family_id,
        start.elapsed(),
        resolver.stats()
    );

    let generator = CitationGenerator::new(config.citation.clone());
    let main = network.main();
    let target = args.target.as_deref().and_then(|name| {
        let matcher = IdentityMatcher::new(&names);
        main.spouses()
            .chain(main.children())
            .find(|person| matcher.names_person(name, person))
    });
    if let (Some(name), None) = (&args.target, target) {
        log::warn!("Target {name} does not appear in {}", main.id);
    }

    println!("{}", generator.render_main_family(main, target, Some(&network)));

    // An unresolved birth family still prints, as a warning line.
    if let Some(person) = target {
        println!();
        println!(
            "{}",
            generator.render_person_birth_family(person, &network, Some(&names))
        );
    }

    Ok(())
}
