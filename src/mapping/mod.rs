//! Pure per-entity mappers.
//!
//! One function per entity kind, each turning a relational record into a
//! fragment of triples to merge into the accumulator. The many code→effect
//! dispatches (side of road, shape, foil type, classification, socket
//! profile) are closed matches; a value outside its partition is a distinct
//! `MappingError` variant, not a generic failure, except the socket-profile
//! lookup which deliberately skips unknown names.

mod bracket;
mod mount;
mod placement;
mod sign;

pub use bracket::map_bracket;
pub use mount::{map_mount, socket_profile};
pub use placement::map_placement;
pub use sign::map_sign;

use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNodeRef, Triple};
use oxrdf::vocab::rdf;
use thiserror::Error;

use crate::vocab;

#[derive(Debug, Clone, Error)]
pub enum MappingError {
    #[error("side of road '{0}' cannot be mapped to a position concept")]
    RoadSide(String),

    #[error("sign shape '{0}' cannot be mapped to a dimension variant")]
    Shape(String),

    #[error("foil type '{0}' cannot be mapped to a foil concept")]
    FoilType(String),

    #[error("mount {id} has no mappable support type (client id {client_id:?})")]
    MountType { id: i64, client_id: Option<String> },
}

/// xsd:decimal literal from any displayable value.
pub(crate) fn decimal(value: impl std::fmt::Display) -> Literal {
    Literal::new_typed_literal(value.to_string(), xsd::DECIMAL)
}

/// The three triples of a relation object between two assets: its type and
/// its source/target edges. The relation URI is derived from both ids.
pub(crate) fn relation_triples(
    relation_type: NamedNodeRef<'_>,
    source: (&str, i64),
    target: (&str, i64),
) -> [Triple; 3] {
    let relation = vocab::relation(source.0, source.1, target.0, target.1);
    [
        Triple::new(relation.clone(), rdf::TYPE, relation_type.into_owned()),
        Triple::new(
            relation.clone(),
            vocab::RELATION_SOURCE,
            vocab::asset(source.0, source.1),
        ),
        Triple::new(
            relation,
            vocab::RELATION_TARGET,
            vocab::asset(target.0, target.1),
        ),
    ]
}
