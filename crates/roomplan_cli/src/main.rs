//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roomplan_core` linkage with a short scripted editing session.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `roomplan_cli [DB_PATH]`. Without a path the session is stored in
//! memory. Logging is enabled when `ROOMPLAN_LOG_DIR` is set.

use log::info;
use roomplan_core::catalog::furniture;
use roomplan_core::db::{open_db, open_db_in_memory};
use roomplan_core::{
    DesignListQuery, DesignService, DesignSession, Position, RecommendationProvider,
    RoomDimensions, SampleRecommendations, SqliteDesignRepository,
};
use std::error::Error;
use std::f64::consts::FRAC_PI_2;
use std::io::Write;
use std::path::Path;

const LOG_LEVEL_ENV: &str = "ROOMPLAN_LOG_LEVEL";
const LOG_DIR_ENV: &str = "ROOMPLAN_LOG_DIR";

fn main() {
    if let Err(err) = init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }

    let db_path = std::env::args().nth(1);
    let stdout = std::io::stdout();
    if let Err(err) = run(db_path.as_deref().map(Path::new), &mut stdout.lock()) {
        eprintln!("roomplan_cli failed: {err}");
        std::process::exit(1);
    }
}

fn init_logging_from_env() -> Result<(), roomplan_core::LoggingError> {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| roomplan_core::default_log_level().to_string());
    roomplan_core::init_logging(&level, &log_dir)
}

fn run(db_path: Option<&Path>, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(out, "roomplan_core ping={}", roomplan_core::ping())?;
    let version = roomplan_core::core_version();
    writeln!(out, "roomplan_core version={version}")?;

    let conn = match db_path {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = DesignService::new(SqliteDesignRepository::try_new(&conn)?);

    let mut session = DesignSession::new("Smoke test lounge");
    session.set_dimensions(RoomDimensions::new(6.0, 4.0, 2.8))?;

    let sofa = furniture::find("sofa-1").ok_or("catalog entry `sofa-1` missing")?;
    let sofa_id = session.add_from_catalog(sofa)?;
    let resting = Position::new(-1.0, sofa.dimensions.height / 2.0, 1.0);
    let scene = session.scene_mut();
    scene.move_item(&sofa_id, resting)?;
    scene.rotate(&sofa_id, FRAC_PI_2)?;
    writeln!(
        out,
        "scene items={} history={}/{}",
        session.scene().len(),
        session.scene().history_index() + 1,
        session.scene().history_len()
    )?;

    session.scene_mut().undo();
    session.scene_mut().redo();

    let living = SampleRecommendations
        .recommendation(&session.dimensions(), "rec-1")
        .ok_or("recommendation `rec-1` missing")?;
    session.apply_recommendation(&living)?;
    writeln!(
        out,
        "applied recommendation={} items={} can_undo={}",
        living.id,
        session.scene().len(),
        session.scene().can_undo()
    )?;

    let saved = service.save(&mut session)?;
    writeln!(
        out,
        "saved design={} items={}",
        saved.id,
        saved.furniture.len()
    )?;

    for design in service.list(&DesignListQuery::default())? {
        writeln!(
            out,
            "design name=\"{}\" items={} floor={}",
            design.name,
            design.furniture.len(),
            design.floor_type.as_str()
        )?;
    }

    info!("event=cli_smoke module=cli status=ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn smoke_run_in_memory_prints_summary() {
        let mut out = Vec::new();
        run(None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("roomplan_core ping=pong\n"));
        assert!(text.contains("scene items=1 history=4/4"));
        assert!(text.contains("applied recommendation=rec-1 items=3 can_undo=true"));
        assert!(text.contains("design name=\"Smoke test lounge\" items=3 floor=hardwood"));
    }

    #[test]
    fn smoke_run_persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smoke.db");

        run(Some(path.as_path()), &mut Vec::new()).unwrap();
        let mut out = Vec::new();
        run(Some(path.as_path()), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("design name=").count(), 2);
    }
}
