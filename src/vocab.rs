//! Fixed AWV/OSLO signalisation vocabulary.
//!
//! Every class, predicate and concept URI emitted by the mappers lives here as
//! a `const NamedNodeRef`, following the oxrdf vocab-module convention. The
//! prefix table is bound on every serializer so all output units share the
//! same prefix set.
//!
//! Derived identifiers (assets, relations, quantity nodes) are pure functions
//! of the owning entities' database ids, so re-running the conversion over
//! unchanged input yields an identical triple set.

use oxrdf::{BlankNode, NamedNode, NamedNodeRef};

/// Base IRI under which all derived asset identifiers live.
pub const ASSET_BASE: &str = "https://data.awvvlaanderen.be/id/asset/";

/// Base URL for register image references.
pub const WEGCODE_BASE: &str = "https://www.wegcode.be";

/// Prefix bindings, identical across every output unit.
pub const PREFIXES: [(&str, &str); 9] = [
    ("asset", "https://data.awvvlaanderen.be/id/asset/"),
    (
        "installatie",
        "https://wegenenverkeer.data.vlaanderen.be/ns/installatie#",
    ),
    (
        "wr",
        "https://www.vlaanderen.be/digitaal-vlaanderen/onze-oplossingen/wegenregister/",
    ),
    (
        "imel",
        "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#",
    ),
    (
        "abs",
        "https://wegenenverkeer.data.vlaanderen.be/ns/abstracten#",
    ),
    (
        "sign",
        "https://wegenenverkeer.data.vlaanderen.be/doc/implementatiemodel/signalisatie/#",
    ),
    ("kl", "https://wegenenverkeer.data.vlaanderen.be/id/concept/"),
    (
        "onderdeel",
        "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#",
    ),
    ("wegcode", "https://www.wegcode.be/media/image/orig/"),
];

// Asset kind segments used in derived identifiers.
pub const KIND_PLACEMENT: &str = "opstelling";
pub const KIND_SIGN: &str = "bord";
pub const KIND_MOUNT: &str = "ophanging";
pub const KIND_BRACKET: &str = "beugel";
pub const KIND_FOUNDATION: &str = "fundering";
pub const KIND_FOIL: &str = "folie";
pub const KIND_SIGN_FACE: &str = "verkeersteken";
pub const KIND_SIGN_CONCEPT: &str = "verkeersbordconcept";

const fn named(iri: &str) -> NamedNodeRef<'_> {
    NamedNodeRef::new_unchecked(iri)
}

// Placement
pub const PLACEMENT: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/doc/implementatiemodel/signalisatie/#Verkeersbordopstelling",
);
pub const PLACEMENT_ROAD_SEGMENT: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/installatie#Verkeersbordopstelling.wegSegment",
);
pub const EXTERNAL_REFERENCE_NUMBER: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtcExterneReferentie.externReferentienummer",
);
pub const EXTERNAL_PARTY: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtcExterneReferentie.externePartij",
);
pub const PLACEMENT_ROAD_SIDE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/installatie#Verkeersbordopstelling.positieTovRijweg",
);
pub const POSITION_LEFT: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/id/concept/KlPositieSoort/linkerrand",
);
pub const POSITION_RIGHT: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/id/concept/KlPositieSoort/rechterrand",
);
pub const POSITION_CENTER: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/id/concept/KlPositieSoort/midden");
pub const ASSET_ID: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#AIMObject.assetId",
);
pub const IDENTIFICATOR: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcIdentificator.identificator",
);

// Relations
pub const BELONGS_TO: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#HoortBij");
pub const FASTENING: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Bevestiging");
pub const RELATION_SOURCE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#RelatieObject.bron",
);
pub const RELATION_TARGET: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#RelatieObject.doel",
);

// Sign classes
pub const SUB_SIGN: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Onderbord");
pub const EMERGENCY_SIGN: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#CalamiteitsBord");
pub const RETROREFLECTIVE_SIGN: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#RetroreflecterendVerkeersbord",
);
pub const SIGN_VIEWING_ANGLE: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/abstracten#Verkeersbord.aanzicht");
pub const SIGN_MOUNTING_HEIGHT: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/abstracten#Verkeersbord.opstelhoogte");

// Sign panel dimensions
pub const SIGN_DIMENSIONS: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtuAfmetingVerkeersbord");
pub const DIMENSIONS_QUAD: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtuAfmetingVerkeersbord.vierhoekig",
);
pub const DIMENSIONS_TRIANGLE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtuAfmetingVerkeersbord.driehoekig",
);
pub const DIMENSIONS_HEXAGON: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtuAfmetingVerkeersbord.zeshoekig",
);
pub const DIMENSIONS_OCTAGON: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtuAfmetingVerkeersbord.achthoekig",
);
pub const DIMENSIONS_ROUND: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtuAfmetingVerkeersbord.rond",
);
pub const PANEL_WIDTH_MM: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcAfmetingBxhInMm.breedte",
);
pub const PANEL_HEIGHT_MM: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcAfmetingBxhInMm.hoogte",
);
pub const PANEL_SIDE_MM: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcAfmetingZijdeInMm.zijde",
);
pub const PANEL_DIAMETER_MM: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcAfmetingDiameterInMm.diameter",
);

// Quantity value predicates
pub const VALUE_IN_METER: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#KwantWrdInMeter.waarde",
);
pub const VALUE_IN_MILLIMETER: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#KwantWrdInMillimeter.waarde",
);
pub const VALUE_IN_CENTIMETER: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#KwantWrdInCentimeter.waarde",
);
pub const VALUE_IN_DECIMAL_DEGREES: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#KwantWrdInDecimaleGraden.waarde",
);

// Sign face and concept
pub const SIGN_FACE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/installatie#VerkeersbordVerkeersteken",
);
pub const VARIABLE_TEXT: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/abstracten#Verkeersteken.variabelOpschrift",
);
pub const SIGN_CONCEPT: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/installatie#VerkeersbordConcept");
pub const CONCEPT_CODE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/installatie#VerkeersbordConcept.verkeersbordCode",
);
pub const CONCEPT_MEANING: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/installatie#VerkeersbordConcept.betekenis",
);
pub const CONCEPT_IMAGE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/installatie#VerkeersbordConcept.afbeelding",
);
pub const DOCUMENT_FILENAME: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcDocument.bestandsnaam",
);
pub const DOCUMENT_URI: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcDocument.uri",
);
pub const DOCUMENT_MIME_TYPE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcDocument.mimeType",
);
pub const MIME_IMAGE_PNG: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/id/concept/KlAlgMimeType/image-png",
);

// Foil
pub const FOIL: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#RetroreflecterendeFolie");
pub const FOIL_TYPE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#RetroreflecterendeFolie.folietype",
);
pub const FOIL_TYPE_1: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/id/concept/KlFolieType/folietype-1");
pub const FOIL_TYPE_2: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/id/concept/KlFolieType/folietype-2");
pub const FOIL_TYPE_3A: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/id/concept/KlFolieType/folietype-3a");
pub const FOIL_TYPE_3B: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/id/concept/KlFolieType/folietype-3b");
pub const FOIL_TYPE_3AB: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/id/concept/KlFolieType/folietype-3a-en-3b",
);

// Mount and foundation
pub const MOUNT_SUPPORT: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Verkeersbordsteun");
pub const MOUNT_SUPPORT_TYPE: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Verkeersbordsteun.type");
pub const SUPPORT_TYPE_STRAIGHT_POLE: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/id/concept/KlVerkeersbordsteunType/rechte-paal",
);
pub const MOUNT_LENGTH: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Verkeersbordsteun.lengte");
pub const MOUNT_DIAMETER: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Verkeersbordsteun.diameter");
pub const FOUNDATION: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Funderingsmassief");
pub const FOUNDATION_FOOTPRINT: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Funderingsmassief.afmetingGrondvlak",
);
pub const FOUNDATION_HEIGHT: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Funderingsmassief.funderingshoogte",
);
pub const FOOTPRINT_RECTANGULAR: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtuAfmetingGrondvlak.rechthoekig",
);
pub const FOOTPRINT_CIRCULAR: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#DtuAfmetingGrondvlak.rond");
pub const FOOTPRINT_WIDTH_CM: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcAfmetingBxlInCm.breedte",
);
pub const FOOTPRINT_LENGTH_CM: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcAfmetingBxlInCm.lengte",
);
pub const FOOTPRINT_DIAMETER_CM: NamedNodeRef<'static> = named(
    "https://wegenenverkeer.data.vlaanderen.be/ns/implementatieelement#DtcAfmetingDiameterInCm.diameter",
);

// Bracket
pub const BRACKET: NamedNodeRef<'static> =
    named("https://wegenenverkeer.data.vlaanderen.be/ns/onderdeel#Bevestigingsbeugel");

/// URI of an asset, e.g. `asset:opstelling_17`.
pub fn asset(kind: &str, id: i64) -> NamedNode {
    NamedNode::new_unchecked(format!("{ASSET_BASE}{kind}_{id}"))
}

/// URI of a relation object between two assets, e.g. `asset:bord_3-opstelling_17`.
pub fn relation(kind_a: &str, id_a: i64, kind_b: &str, id_b: i64) -> NamedNode {
    NamedNode::new_unchecked(format!("{ASSET_BASE}{kind_a}_{id_a}-{kind_b}_{id_b}"))
}

/// Deterministic blank node for a sub-value of an asset, e.g. `_:bord_3_angle`.
/// Labels are derived from the owning id so re-runs emit the same node.
pub fn value_node(kind: &str, id: i64, role: &str) -> BlankNode {
    BlankNode::new_unchecked(format!("{kind}_{id}_{role}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_uris_are_deterministic() {
        assert_eq!(
            asset(KIND_PLACEMENT, 17).as_str(),
            "https://data.awvvlaanderen.be/id/asset/opstelling_17"
        );
        assert_eq!(asset(KIND_PLACEMENT, 17), asset(KIND_PLACEMENT, 17));
        assert_eq!(
            relation(KIND_SIGN, 3, KIND_PLACEMENT, 17).as_str(),
            "https://data.awvvlaanderen.be/id/asset/bord_3-opstelling_17"
        );
    }

    #[test]
    fn value_nodes_repeat_across_runs() {
        assert_eq!(value_node(KIND_SIGN, 3, "angle"), value_node(KIND_SIGN, 3, "angle"));
        assert_ne!(value_node(KIND_SIGN, 3, "angle"), value_node(KIND_SIGN, 4, "angle"));
    }
}
