//! End-to-end pipeline tests over a fixture inventory database.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;
use signgraph::config::PipelineConfig;
use signgraph::pipeline::Pipeline;
use signgraph::register::SignRegister;
use signgraph::source::SqliteSource;

const SCHEMA: &str = "
CREATE TABLE opstelling (id INTEGER PRIMARY KEY, zijdeVanDeRijweg TEXT, status TEXT, wegsegmentid INTEGER);
CREATE TABLE aanzichten (id INTEGER PRIMARY KEY, hoek REAL, opstelling_fk INTEGER);
CREATE TABLE borden (id INTEGER PRIMARY KEY, aanzicht_fk INTEGER, y INTEGER, parameters TEXT, code TEXT, folieType TEXT, vorm TEXT, breedte INTEGER, hoogte INTEGER);
CREATE TABLE ophangingen (id INTEGER PRIMARY KEY, clientId TEXT, lengte INTEGER, diameter INTEGER, opstelling_fk INTEGER, sokkelAfmetingen_fk INTEGER);
CREATE TABLE sokkelAfmetingen (key INTEGER PRIMARY KEY, naam TEXT);
CREATE TABLE bevestigingen (id INTEGER PRIMARY KEY, ophanging_fk INTEGER, bord_fk INTEGER, bevestigingsprofiel_fk INTEGER);
CREATE TABLE bevestigingsprofielen (id INTEGER PRIMARY KEY);
";

const REGISTER: &str = "/media/image/orig/C3.png;C3. Verboden toegang, in beide richtingen\n";

/// One placement per id, each with one sign, one pole mount on a known
/// socket, and one bracket. Sides cycle through the full mapped domain.
fn fixture_database(path: &Path, placements: i64) -> Result<()> {
    let conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;
    conn.execute(
        "INSERT INTO sokkelAfmetingen (key, naam) VALUES (1, '300x300x600, LG-51/VG-51/VG-76')",
        [],
    )?;
    let sides = [Some("LINKS"), Some("RECHTS"), Some("MIDDEN"), Some("BOVEN"), None];
    for i in 1..=placements {
        let side = sides[(i as usize - 1) % sides.len()];
        conn.execute(
            "INSERT INTO opstelling (id, zijdeVanDeRijweg, status, wegsegmentid) \
             VALUES (?1, ?2, 'in gebruik', ?3)",
            rusqlite::params![i, side, 1000 + i],
        )?;
        conn.execute(
            "INSERT INTO aanzichten (id, hoek, opstelling_fk) VALUES (?1, 0.5, ?1)",
            [i],
        )?;
        conn.execute(
            "INSERT INTO borden (id, aanzicht_fk, y, parameters, code, folieType, vorm, breedte, hoogte) \
             VALUES (?1, ?1, 1800, NULL, 'C3', '1', 'rh', 600, 900)",
            [i],
        )?;
        conn.execute(
            "INSERT INTO ophangingen (id, clientId, lengte, diameter, opstelling_fk, sokkelAfmetingen_fk) \
             VALUES (?1, 'steun-1', 2500, 76, ?1, 1)",
            [i],
        )?;
        conn.execute(
            "INSERT INTO bevestigingen (id, ophanging_fk, bord_fk, bevestigingsprofiel_fk) \
             VALUES (?1, ?1, ?1, NULL)",
            [i],
        )?;
    }
    Ok(())
}

fn run_pipeline(db: &Path, out: &Path, batch_size: usize, write_size: usize) -> Result<()> {
    let config = PipelineConfig {
        database: db.to_path_buf(),
        register: None,
        output_dir: out.to_path_buf(),
        file_stem: "signs".to_string(),
        batch_size,
        write_size,
    };
    let source = SqliteSource::open(db)?;
    let register = SignRegister::from_reader(REGISTER.as_bytes())?;
    Pipeline::new(config, source, register).run()?;
    Ok(())
}

fn unit_files(dir: &Path) -> Result<Vec<String>> {
    let mut files: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".ttl"))
        .collect();
    files.sort();
    Ok(files)
}

/// All triples across every unit in a directory, as canonical N-Triples-ish
/// strings. The serialization's own statement order is irrelevant.
fn emitted_triples(dir: &Path) -> Result<BTreeSet<String>> {
    let mut triples = BTreeSet::new();
    for name in unit_files(dir)? {
        let file = fs::File::open(dir.join(name))?;
        for triple in oxttl::TurtleParser::new().for_reader(std::io::BufReader::new(file)) {
            triples.insert(triple?.to_string());
        }
    }
    Ok(triples)
}

#[test]
fn unit_count_is_ceil_of_placements_over_write_size() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("signs.sqlite");
    fixture_database(&db, 10)?;
    let out = dir.path().join("out");
    run_pipeline(&db, &out, 3, 4)?;

    // ceil(10 / 4) = 3, with the final partial unit flushed unconditionally.
    assert_eq!(
        unit_files(&out)?,
        vec!["signs_1.ttl", "signs_2.ttl", "signs_3.ttl"]
    );
    Ok(())
}

#[test]
fn empty_input_writes_no_units() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("signs.sqlite");
    fixture_database(&db, 0)?;
    let out = dir.path().join("out");
    run_pipeline(&db, &out, 100, 14000)?;
    assert!(unit_files(&out)?.is_empty());
    Ok(())
}

#[test]
fn fanout_window_size_does_not_change_the_triple_set() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("signs.sqlite");
    fixture_database(&db, 17)?;

    let narrow = dir.path().join("narrow");
    let wide = dir.path().join("wide");
    run_pipeline(&db, &narrow, 2, 14000)?;
    run_pipeline(&db, &wide, 50, 14000)?;

    let narrow_triples = emitted_triples(&narrow)?;
    let wide_triples = emitted_triples(&wide)?;
    assert!(!narrow_triples.is_empty());
    assert_eq!(narrow_triples, wide_triples);
    Ok(())
}

#[test]
fn rerunning_over_unchanged_input_is_idempotent() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("signs.sqlite");
    fixture_database(&db, 9)?;

    let first = dir.path().join("first");
    let second = dir.path().join("second");
    run_pipeline(&db, &first, 4, 5)?;
    run_pipeline(&db, &second, 4, 5)?;

    let first_triples = emitted_triples(&first)?;
    assert!(!first_triples.is_empty());
    assert_eq!(first_triples, emitted_triples(&second)?);
    Ok(())
}

#[test]
fn flush_boundaries_do_not_change_the_triple_set() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("signs.sqlite");
    fixture_database(&db, 12)?;

    let single = dir.path().join("single");
    let split = dir.path().join("split");
    run_pipeline(&db, &single, 100, 14000)?;
    run_pipeline(&db, &split, 100, 5)?;

    assert_eq!(unit_files(&single)?.len(), 1);
    assert_eq!(unit_files(&split)?.len(), 3);
    assert_eq!(emitted_triples(&single)?, emitted_triples(&split)?);
    Ok(())
}

#[test]
fn every_entity_kind_reaches_the_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("signs.sqlite");
    fixture_database(&db, 1)?;
    let out = dir.path().join("out");
    run_pipeline(&db, &out, 100, 14000)?;

    let triples = emitted_triples(&out)?;
    let text = triples.iter().cloned().collect::<Vec<_>>().join("\n");
    assert!(text.contains("opstelling_1"));
    assert!(text.contains("bord_1"));
    assert!(text.contains("ophanging_1"));
    assert!(text.contains("beugel_1"));
    assert!(text.contains("fundering_1"));
    // Register enrichment made it through to the concept.
    assert!(text.contains("Verboden toegang, in beide richtingen"));
    Ok(())
}
