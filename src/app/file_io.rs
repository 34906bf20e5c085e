//! Dateiaktionen des Hosts: Pfad laden, Ergebnis schreiben.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::calculation::PointCalculationResult;
use crate::core::Path;
use anyhow::Context;

/// Parsed einen Pfad aus JSON und prüft die Ketten-Invariante.
pub fn parse_path(json: &str) -> anyhow::Result<Path> {
    let path: Path = serde_json::from_str(json).context("Pfad-JSON konnte nicht gelesen werden")?;
    path.validate().context("Pfad verletzt eine Invariante")?;
    // Zähler für neue IDs hinter die höchste geladene ID setzen
    Ok(Path::from_segments(path.segments))
}

/// Lädt einen Pfad aus einer JSON-Datei.
pub fn load_path(file: &std::path::Path) -> anyhow::Result<Path> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Pfad-Datei nicht lesbar: {}", file.display()))?;
    let path = parse_path(&content).with_context(|| format!("Datei: {}", file.display()))?;

    log::info!(
        "Pfad geladen: {} Segmente aus {}",
        path.segment_count(),
        file.display()
    );
    Ok(path)
}

/// Schreibt das Berechnungsergebnis als JSON.
pub fn write_result(file: &std::path::Path, result: &PointCalculationResult) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(result)?;
    std::fs::write(file, content)
        .with_context(|| format!("Ergebnis nicht schreibbar: {}", file.display()))?;
    log::info!("Ergebnis gespeichert nach: {}", file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_parse_path_roundtrip_behaelt_segmente() {
        let mut path = Path::starting_at(DVec2::ZERO, 0.0);
        path.quad_to(DVec2::new(2.0, 3.0), DVec2::new(4.0, 0.0), 15.0)
            .line_to(DVec2::new(8.0, 0.0), 15.0);
        let json = serde_json::to_string(&path).expect("Serialisierung fehlgeschlagen");

        let parsed = parse_path(&json).expect("Parsing fehlgeschlagen");
        assert_eq!(parsed.segments, path.segments);
    }

    #[test]
    fn test_parse_path_lehnt_gebrochene_kette_ab() {
        let mut path = Path::starting_at(DVec2::ZERO, 0.0);
        path.line_to(DVec2::new(4.0, 0.0), 0.0)
            .line_to(DVec2::new(8.0, 0.0), 0.0);
        path.segments[1].start.id = 999;
        let json = serde_json::to_string(&path).expect("Serialisierung fehlgeschlagen");

        let err = parse_path(&json).expect_err("Gebrochene Kette muss abgelehnt werden");
        assert!(format!("{:#}", err).contains("Segment 1"));
    }

    #[test]
    fn test_parse_path_lehnt_kaputtes_json_ab() {
        assert!(parse_path("{ \"segments\": [").is_err());
    }
}
