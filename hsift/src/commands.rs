//! Command implementations for hsift.

use std::io;
use std::path::Path;

use log::debug;
use sieve::config::resolve_config_path;
use sieve::{html, Config, Filter, Predicate};

/// Output options for the filter command.
pub struct FilterOptions {
    pub allow_empty: bool,
    pub indent: Option<String>,
}

/// Build a predicate from an optional JSON config plus filter arguments.
fn build_predicate(config: Option<&Path>, filters: &[String]) -> sieve::Result<Predicate> {
    let mut predicate = match config {
        Some(path) => Predicate::from_file(path)?,
        None => Predicate::default(),
    };
    predicate.apply_args(filters)?;
    Ok(predicate)
}

pub fn filter(file: &Path, config: Option<&Path>, filters: &[String], opts: &FilterOptions) -> sieve::Result<()> {
    let settings = Config::load()?;
    let filter = Filter::new(build_predicate(config, filters)?)?;

    let dom = if file == Path::new("-") {
        html::parse_reader(&mut io::stdin().lock())?
    } else {
        html::parse_file(file)?
    };

    let mut matches = filter.filter(&dom.document)?;
    debug!("{} node(s) matched", matches.len());
    if !(opts.allow_empty || settings.allow_empty) {
        matches = matches.non_empty()?;
    }

    let indent = opts.indent.as_deref().unwrap_or(&settings.indent);
    println!("{}", matches.to_json_pretty(indent)?);
    Ok(())
}

pub fn compile(config: Option<&Path>, filters: &[String], indent: Option<&str>) -> sieve::Result<()> {
    let settings = Config::load()?;
    // Compile so invalid patterns are reported here too
    let filter = Filter::new(build_predicate(config, filters)?)?;

    let indent = indent.unwrap_or(&settings.indent);
    println!("{}", filter.predicate().to_json_pretty(indent)?);
    Ok(())
}

pub fn settings(init: bool) -> sieve::Result<()> {
    let Some(path) = resolve_config_path() else {
        return Err(sieve::Error::Config(
            "Could not determine settings location; set HSIFT_CONFIG".to_string(),
        ));
    };

    if init {
        if path.exists() {
            println!("Settings already exist at {}", path.display());
        } else {
            Config::default().save_to(&path)?;
            println!("Wrote default settings to {}", path.display());
        }
        return Ok(());
    }

    let config = Config::load_from(&path)?;
    println!("path:        {}", path.display());
    println!("exists:      {}", path.exists());
    println!("indent:      {:?}", config.indent);
    println!("allow_empty: {}", config.allow_empty);
    Ok(())
}
