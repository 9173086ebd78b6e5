use std::collections::HashMap;

use lazy_static::lazy_static;
use oxrdf::vocab::rdf;
use oxrdf::{NamedNode, Triple};

use super::{decimal, relation_triples, MappingError};
use crate::model::{Mount, SocketFootprint, SocketProfile};
use crate::vocab;
use crate::vocab::{KIND_FOUNDATION, KIND_MOUNT, KIND_PLACEMENT};

lazy_static! {
    /// Closed table of known foundation-socket profiles and their fixed
    /// dimensions (centimeters). Unknown names yield no geometry, they are
    /// not an error.
    static ref SOCKET_PROFILES: HashMap<&'static str, SocketProfile> = {
        let mut profiles = HashMap::new();
        profiles.insert(
            "300x300x600, LG-51/VG-51/VG-76",
            SocketProfile {
                footprint: SocketFootprint::Rectangular { width_cm: 30, length_cm: 30 },
                height_cm: 60,
            },
        );
        profiles.insert(
            "400x400x700, LG-76/VG-89",
            SocketProfile {
                footprint: SocketFootprint::Rectangular { width_cm: 40, length_cm: 40 },
                height_cm: 70,
            },
        );
        profiles.insert(
            "500x500x700, LG-89/VG-114",
            SocketProfile {
                footprint: SocketFootprint::Rectangular { width_cm: 50, length_cm: 50 },
                height_cm: 70,
            },
        );
        profiles.insert(
            "600x600x800, LG-114/VG-133",
            SocketProfile {
                footprint: SocketFootprint::Rectangular { width_cm: 60, length_cm: 60 },
                height_cm: 80,
            },
        );
        profiles.insert(
            "Bodemhuls Ø76",
            SocketProfile {
                footprint: SocketFootprint::Circular { diameter_cm: 11 },
                height_cm: 37,
            },
        );
        profiles
    };
}

/// Fixed dimensions for a foundation-socket profile name, if known.
pub fn socket_profile(name: &str) -> Option<SocketProfile> {
    SOCKET_PROFILES.get(name).copied()
}

/// Map one mount to its graph fragment: the support pole, its placement
/// relation, its measurements and its foundation.
///
/// Only pole-bearing mounts are mapped; a client id without the pole marker
/// is data this mapping was never written for and aborts the run.
pub fn map_mount(mount: &Mount) -> Result<Vec<Triple>, MappingError> {
    let Some(id) = mount.id else {
        return Ok(Vec::new());
    };
    let uri = vocab::asset(KIND_MOUNT, id);

    let mut fragment = match mount.client_id.as_deref() {
        Some(client_id) if client_id.contains("steun") => vec![
            Triple::new(uri.clone(), rdf::TYPE, vocab::MOUNT_SUPPORT.into_owned()),
            Triple::new(
                uri.clone(),
                vocab::MOUNT_SUPPORT_TYPE,
                vocab::SUPPORT_TYPE_STRAIGHT_POLE.into_owned(),
            ),
        ],
        other => {
            return Err(MappingError::MountType {
                id,
                client_id: other.map(str::to_string),
            })
        }
    };
    fragment.extend(relation_triples(
        vocab::BELONGS_TO,
        (KIND_MOUNT, id),
        (KIND_PLACEMENT, mount.placement_id),
    ));

    // Lengths are stored in millimeters; the ontology wants meters.
    if let Some(length) = mount.length_mm {
        if length > -1.0 {
            let node = vocab::value_node(KIND_MOUNT, id, "length");
            fragment.push(Triple::new(uri.clone(), vocab::MOUNT_LENGTH, node.clone()));
            fragment.push(Triple::new(
                node,
                vocab::VALUE_IN_METER,
                decimal(length / 1000.0),
            ));
        }
    }
    if let Some(diameter) = mount.diameter_mm {
        if diameter > -1.0 {
            let node = vocab::value_node(KIND_MOUNT, id, "diameter");
            fragment.push(Triple::new(
                uri.clone(),
                vocab::MOUNT_DIAMETER,
                node.clone(),
            ));
            fragment.push(Triple::new(
                node,
                vocab::VALUE_IN_MILLIMETER,
                decimal(diameter),
            ));
        }
    }

    // Every pole stands in a foundation; geometry only for known sockets.
    let foundation = vocab::asset(KIND_FOUNDATION, id);
    fragment.push(Triple::new(
        foundation.clone(),
        rdf::TYPE,
        vocab::FOUNDATION.into_owned(),
    ));
    fragment.extend(relation_triples(
        vocab::FASTENING,
        (KIND_MOUNT, id),
        (KIND_FOUNDATION, id),
    ));
    if let Some(profile) = mount.socket_name.as_deref().and_then(socket_profile) {
        fragment.extend(foundation_geometry(id, &foundation, profile));
    }

    Ok(fragment)
}

fn foundation_geometry(id: i64, foundation: &NamedNode, profile: SocketProfile) -> Vec<Triple> {
    let footprint = vocab::value_node(KIND_FOUNDATION, id, "footprint");
    let form = vocab::value_node(KIND_FOUNDATION, id, "form");
    let mut fragment = vec![Triple::new(
        foundation.clone(),
        vocab::FOUNDATION_FOOTPRINT,
        footprint.clone(),
    )];

    match profile.footprint {
        SocketFootprint::Rectangular { width_cm, length_cm } => {
            fragment.push(Triple::new(
                footprint,
                vocab::FOOTPRINT_RECTANGULAR,
                form.clone(),
            ));
            let width = vocab::value_node(KIND_FOUNDATION, id, "width");
            fragment.push(Triple::new(
                form.clone(),
                vocab::FOOTPRINT_WIDTH_CM,
                width.clone(),
            ));
            fragment.push(Triple::new(
                width,
                vocab::VALUE_IN_CENTIMETER,
                decimal(width_cm),
            ));
            let length = vocab::value_node(KIND_FOUNDATION, id, "length");
            fragment.push(Triple::new(form, vocab::FOOTPRINT_LENGTH_CM, length.clone()));
            fragment.push(Triple::new(
                length,
                vocab::VALUE_IN_CENTIMETER,
                decimal(length_cm),
            ));
        }
        SocketFootprint::Circular { diameter_cm } => {
            fragment.push(Triple::new(
                footprint,
                vocab::FOOTPRINT_CIRCULAR,
                form.clone(),
            ));
            let diameter = vocab::value_node(KIND_FOUNDATION, id, "diameter");
            fragment.push(Triple::new(
                form,
                vocab::FOOTPRINT_DIAMETER_CM,
                diameter.clone(),
            ));
            fragment.push(Triple::new(
                diameter,
                vocab::VALUE_IN_CENTIMETER,
                decimal(diameter_cm),
            ));
        }
    }

    let height = vocab::value_node(KIND_FOUNDATION, id, "height");
    fragment.push(Triple::new(
        foundation.clone(),
        vocab::FOUNDATION_HEIGHT,
        height.clone(),
    ));
    fragment.push(Triple::new(
        height,
        vocab::VALUE_IN_CENTIMETER,
        decimal(profile.height_cm),
    ));
    fragment
}
