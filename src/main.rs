//! Path Speed Planner.
//!
//! Berechnet aus einem Bézier-Pfad (JSON) eine gleichmässig verteilte
//! Punktfolge mit Heading und Zielgeschwindigkeit.

use clap::{crate_version, value_parser, Arg, ArgMatches, Command};
use path_speed_planner::{calculate, load_path, summarize, write_result, LengthUnit, PathConfig};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Path Speed Planner v{} startet...", env!("CARGO_PKG_VERSION"));

        let matches = Self::command().get_matches();
        let config = Self::config_from_matches(&matches)?;

        let Some(path_file) = matches.get_one::<PathBuf>("path") else {
            anyhow::bail!("Keine Pfad-Datei angegeben");
        };
        let path = load_path(path_file)?;

        let result = calculate(&path, &config);
        log::info!("{}", summarize(&result));

        if let Some(output) = matches.get_one::<PathBuf>("output") {
            write_result(output, &result)?;
        }
        Ok(())
    }

    fn command() -> Command {
        Command::new("path-speed-planner")
            .version(crate_version!())
            .about("Gleichmässige Punktverteilung und Geschwindigkeitsprofil für Bézier-Pfade")
            .arg(
                Arg::new("path")
                    .value_name("PATH_JSON")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("Pfad-Datei (JSON)"),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("TOML")
                    .value_parser(value_parser!(PathBuf))
                    .help("Konfigurationsdatei (Standard: neben der Binary)"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("JSON")
                    .value_parser(value_parser!(PathBuf))
                    .help("Ergebnis als JSON schreiben"),
            )
            .arg(
                Arg::new("density")
                    .short('d')
                    .long("density")
                    .value_name("VALUE")
                    .value_parser(value_parser!(f64))
                    .help("Punktdichte, überschreibt die Konfiguration"),
            )
            .arg(
                Arg::new("unit")
                    .short('u')
                    .long("unit")
                    .value_name("UNIT")
                    .help("Einheit der Punktdichte (mm, cm, m, in, ft)"),
            )
    }

    /// TOML-Konfiguration laden und mit CLI-Werten überschreiben.
    fn config_from_matches(matches: &ArgMatches) -> anyhow::Result<PathConfig> {
        let config_path = matches
            .get_one::<PathBuf>("config")
            .cloned()
            .unwrap_or_else(PathConfig::config_path);
        let mut config = PathConfig::load_from_file(&config_path);

        if let Some(unit) = matches.get_one::<String>("unit") {
            config.point_density.unit = unit.parse::<LengthUnit>()?;
        }
        if let Some(&density) = matches.get_one::<f64>("density") {
            config.point_density.value = density;
        }
        config.validate()?;
        Ok(config)
    }
}
