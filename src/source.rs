//! Ordered, filtered access to the sign inventory database.
//!
//! Every query is ordered by parent id then own id, so children are
//! enumerable immediately after their parent window closes. Child queries
//! take an id-set filter of arbitrary size; the placeholder list is built per
//! call, never assuming a maximum. An empty filter yields an empty result
//! without touching the database.

use std::path::Path;

use rusqlite::{params_from_iter, Connection, Row};

use crate::error::ConvertError;
use crate::model::{Bracket, Mount, Placement, Sign};

pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Stream all placements in id order through `visit`.
    ///
    /// The rows are read lazily; the full placement set is never resident.
    pub fn for_each_placement<F>(&self, mut visit: F) -> Result<(), ConvertError>
    where
        F: FnMut(Placement) -> Result<(), ConvertError>,
    {
        let mut stmt = self.conn.prepare(
            "SELECT id, zijdeVanDeRijweg, status, wegsegmentid FROM opstelling ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Placement {
                id: row.get(0)?,
                road_side: row.get(1)?,
                status: row.get(2)?,
                road_segment_id: row.get(3)?,
            })
        })?;
        for placement in rows {
            visit(placement?)?;
        }
        Ok(())
    }

    /// All signs belonging to the given placements, ordered by placement
    /// then view then sign id. A view without a sign yields a NULL sign id.
    pub fn signs_for(&self, placement_ids: &[i64]) -> Result<Vec<Sign>, ConvertError> {
        if placement_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT borden.id, aanzichten.hoek, aanzichten.opstelling_fk, y, borden.parameters, \
                    borden.code, borden.folieType, borden.vorm, borden.breedte, borden.hoogte \
             FROM aanzichten \
                LEFT JOIN borden ON borden.aanzicht_fk = aanzichten.id \
             WHERE aanzichten.opstelling_fk IN ({}) \
             ORDER BY aanzichten.opstelling_fk, aanzichten.id, borden.id",
            placeholders(placement_ids.len())
        );
        self.query(&sql, placement_ids, |row| {
            Ok(Sign {
                id: row.get(0)?,
                angle_rad: row.get(1)?,
                placement_id: row.get(2)?,
                mounting_height_mm: row.get(3)?,
                parameters: row.get(4)?,
                code: row.get(5)?,
                foil_type: row.get(6)?,
                shape: row.get(7)?,
                width_mm: row.get(8)?,
                height_mm: row.get(9)?,
            })
        })
    }

    /// All mounts belonging to the given placements, with their optional
    /// foundation-socket profile name joined in.
    pub fn mounts_for(&self, placement_ids: &[i64]) -> Result<Vec<Mount>, ConvertError> {
        if placement_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT ophangingen.id, clientId, ophangingen.lengte, diameter, opstelling_fk, \
                    sokkelAfmetingen.naam \
             FROM ophangingen \
                LEFT JOIN sokkelAfmetingen ON sokkelAfmetingen.key = sokkelAfmetingen_fk \
             WHERE ophangingen.opstelling_fk IN ({}) \
             ORDER BY ophangingen.opstelling_fk, ophangingen.id",
            placeholders(placement_ids.len())
        );
        self.query(&sql, placement_ids, |row| {
            Ok(Mount {
                id: row.get(0)?,
                client_id: row.get(1)?,
                length_mm: row.get(2)?,
                diameter_mm: row.get(3)?,
                placement_id: row.get(4)?,
                socket_name: row.get(5)?,
            })
        })
    }

    /// All brackets attached to the given mounts.
    pub fn brackets_for(&self, mount_ids: &[i64]) -> Result<Vec<Bracket>, ConvertError> {
        if mount_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT bevestigingen.id, ophanging_fk, bord_fk \
             FROM bevestigingen \
                LEFT JOIN bevestigingsprofielen bp ON bp.id = bevestigingen.bevestigingsprofiel_fk \
             WHERE ophanging_fk IN ({}) \
             ORDER BY ophanging_fk, bevestigingen.id",
            placeholders(mount_ids.len())
        );
        self.query(&sql, mount_ids, |row| {
            Ok(Bracket {
                id: row.get(0)?,
                mount_id: row.get(1)?,
                sign_id: row.get(2)?,
            })
        })
    }

    fn query<T, F>(&self, sql: &str, ids: &[i64], map_row: F) -> Result<Vec<T>, ConvertError>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), map_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

fn placeholders(count: usize) -> String {
    let mut s = String::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            s.push(',');
        }
        s.push('?');
    }
    s
}
