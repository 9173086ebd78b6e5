//! Row types produced by the relational source.
//!
//! Child rows come from LEFT JOINs, so their own primary key can be NULL; a
//! NULL id means "no row behind the join" and the record is skipped, not an
//! error.

/// One physical installation site. Root of every emitted subgraph: each sign,
/// mount and foundation relates back to exactly one placement.
#[derive(Debug, Clone)]
pub struct Placement {
    pub id: i64,
    /// Side-of-road classification as stored: LINKS, RECHTS, MIDDEN or BOVEN.
    pub road_side: Option<String>,
    pub status: Option<String>,
    pub road_segment_id: Option<i64>,
}

/// One physical sign panel at a placement.
#[derive(Debug, Clone)]
pub struct Sign {
    pub id: Option<i64>,
    pub placement_id: i64,
    /// Viewing angle in radians, as measured.
    pub angle_rad: Option<f64>,
    /// Height above ground in millimeters.
    pub mounting_height_mm: Option<i64>,
    /// Free-text parameters printed on the sign.
    pub parameters: Option<String>,
    /// Classification code, e.g. `C3` or `G1a`; joins to the register.
    pub code: Option<String>,
    pub foil_type: Option<String>,
    /// Shape code, e.g. `rh` (rectangle) or `ro` (circle).
    pub shape: Option<String>,
    pub width_mm: Option<i64>,
    pub height_mm: Option<i64>,
}

/// The support structure (pole) holding signs at a placement.
#[derive(Debug, Clone)]
pub struct Mount {
    pub id: Option<i64>,
    pub placement_id: i64,
    pub client_id: Option<String>,
    /// Pole length, stored in millimeters.
    pub length_mm: Option<f64>,
    pub diameter_mm: Option<f64>,
    /// Named foundation-socket profile, e.g. `300x300x600, LG-51/VG-51/VG-76`.
    pub socket_name: Option<String>,
}

/// Hardware connecting one mount to one sign. Carries no attributes beyond
/// the two relation edges.
#[derive(Debug, Clone)]
pub struct Bracket {
    pub id: Option<i64>,
    pub mount_id: i64,
    pub sign_id: i64,
}

/// Footprint of a foundation socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketFootprint {
    Rectangular { width_cm: u32, length_cm: u32 },
    Circular { diameter_cm: u32 },
}

/// Fixed physical dimensions of a known foundation-socket profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketProfile {
    pub footprint: SocketFootprint,
    pub height_cm: u32,
}
