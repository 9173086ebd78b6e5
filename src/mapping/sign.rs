use oxrdf::vocab::rdf;
use oxrdf::{Literal, NamedNode, NamedNodeRef, Triple};

use super::{decimal, relation_triples, MappingError};
use crate::model::Sign;
use crate::register::SignRegister;
use crate::vocab;
use crate::vocab::{KIND_FOIL, KIND_PLACEMENT, KIND_SIGN, KIND_SIGN_CONCEPT, KIND_SIGN_FACE};

/// Map one sign to its graph fragment: the panel itself, its face, its
/// concept (enriched from the register) and its retroreflective foil.
///
/// A NULL sign id means the view row had no panel behind it; the record is
/// skipped. Every other NULL attribute skips only its own sub-fragment.
pub fn map_sign(sign: &Sign, register: &mut SignRegister) -> Result<Vec<Triple>, MappingError> {
    let Some(id) = sign.id else {
        return Ok(Vec::new());
    };
    let uri = vocab::asset(KIND_SIGN, id);
    let mut fragment = vec![Triple::new(
        uri.clone(),
        rdf::TYPE,
        classify(sign.code.as_deref()).into_owned(),
    )];
    fragment.extend(relation_triples(
        vocab::BELONGS_TO,
        (KIND_SIGN, id),
        (KIND_PLACEMENT, sign.placement_id),
    ));

    if let Some(angle_rad) = sign.angle_rad {
        let angle = normalize_angle_deg(angle_rad);
        let node = vocab::value_node(KIND_SIGN, id, "angle");
        fragment.push(Triple::new(
            uri.clone(),
            vocab::SIGN_VIEWING_ANGLE,
            node.clone(),
        ));
        fragment.push(Triple::new(
            node,
            vocab::VALUE_IN_DECIMAL_DEGREES,
            decimal(format!("{angle:.1}")),
        ));
    }

    if let Some(mm) = sign.mounting_height_mm {
        if mm > 0 {
            let node = vocab::value_node(KIND_SIGN, id, "mounting_height");
            fragment.push(Triple::new(
                uri.clone(),
                vocab::SIGN_MOUNTING_HEIGHT,
                node.clone(),
            ));
            fragment.push(Triple::new(
                node,
                vocab::VALUE_IN_METER,
                decimal(mm as f64 / 1000.0),
            ));
        }
    }

    fragment.extend(panel_dimensions(sign, id)?);
    fragment.extend(sign_face(sign, id));
    fragment.extend(sign_concept(sign, id, register));
    fragment.extend(foil(sign, id)?);

    Ok(fragment)
}

/// Classification dispatch, priority-ordered first match: `G`/`M` prefixes
/// are sub-signs, `ITRS` are emergency signs, everything else falls through
/// to the retroreflective default.
fn classify(code: Option<&str>) -> NamedNodeRef<'static> {
    match code {
        Some(code) if code.starts_with(['G', 'M']) => vocab::SUB_SIGN,
        Some(code) if code.starts_with("ITRS") => vocab::EMERGENCY_SIGN,
        _ => vocab::RETROREFLECTIVE_SIGN,
    }
}

/// Radians to degrees, rounded to one decimal, normalized into [0, 360].
///
/// The add-loop only fixes negatives; a wildly large measurement still needs
/// the single modulo, which applies only in the over-360 case.
pub(crate) fn normalize_angle_deg(radians: f64) -> f64 {
    let mut degrees = (radians.to_degrees() * 10.0).round() / 10.0;
    while degrees < 0.0 {
        degrees += 360.0;
    }
    if degrees > 360.0 {
        degrees %= 360.0;
    }
    degrees
}

/// Panel size dispatch over the closed shape partition. A sign without a
/// shape or without a width emits no size fragment; an unknown shape code
/// is fatal.
fn panel_dimensions(sign: &Sign, id: i64) -> Result<Vec<Triple>, MappingError> {
    let (Some(shape), Some(width)) = (sign.shape.as_deref(), sign.width_mm) else {
        return Ok(Vec::new());
    };

    let dims = vocab::value_node(KIND_SIGN, id, "dims");
    let form = vocab::value_node(KIND_SIGN, id, "form");
    let mut fragment = vec![Triple::new(
        vocab::asset(KIND_SIGN, id),
        vocab::SIGN_DIMENSIONS,
        dims.clone(),
    )];
    let measure = |fragment: &mut Vec<Triple>, predicate: NamedNodeRef<'static>, role, mm| {
        let node = vocab::value_node(KIND_SIGN, id, role);
        fragment.push(Triple::new(form.clone(), predicate, node.clone()));
        fragment.push(Triple::new(node, vocab::VALUE_IN_MILLIMETER, decimal(mm)));
    };

    match shape {
        "rh" | "wwr" | "wwl" | "rt" => {
            fragment.push(Triple::new(dims, vocab::DIMENSIONS_QUAD, form.clone()));
            measure(&mut fragment, vocab::PANEL_WIDTH_MM, "width", width);
            if let Some(height) = sign.height_mm {
                measure(&mut fragment, vocab::PANEL_HEIGHT_MM, "height", height);
            }
        }
        "dh" | "odh" => {
            fragment.push(Triple::new(dims, vocab::DIMENSIONS_TRIANGLE, form.clone()));
            measure(&mut fragment, vocab::PANEL_SIDE_MM, "side", width);
        }
        "zh" => {
            fragment.push(Triple::new(dims, vocab::DIMENSIONS_HEXAGON, form.clone()));
            measure(&mut fragment, vocab::PANEL_SIDE_MM, "side", width);
        }
        "ah" => {
            fragment.push(Triple::new(dims, vocab::DIMENSIONS_OCTAGON, form.clone()));
            measure(&mut fragment, vocab::PANEL_SIDE_MM, "side", width);
        }
        "ro" => {
            fragment.push(Triple::new(dims, vocab::DIMENSIONS_ROUND, form.clone()));
            measure(&mut fragment, vocab::PANEL_DIAMETER_MM, "diameter", width);
        }
        other => return Err(MappingError::Shape(other.to_string())),
    }

    Ok(fragment)
}

fn sign_face(sign: &Sign, id: i64) -> Vec<Triple> {
    let face = vocab::asset(KIND_SIGN_FACE, id);
    let mut fragment = vec![Triple::new(
        face.clone(),
        rdf::TYPE,
        vocab::SIGN_FACE.into_owned(),
    )];
    fragment.extend(relation_triples(
        vocab::BELONGS_TO,
        (KIND_SIGN, id),
        (KIND_SIGN_FACE, id),
    ));
    if let Some(parameters) = sign.parameters.as_deref() {
        fragment.push(Triple::new(
            face,
            vocab::VARIABLE_TEXT,
            Literal::new_simple_literal(parameters),
        ));
    }
    fragment
}

/// The abstract sign concept, enriched from the register when the
/// classification code is known. A register miss is recorded, not fatal.
fn sign_concept(sign: &Sign, id: i64, register: &mut SignRegister) -> Vec<Triple> {
    let concept = vocab::asset(KIND_SIGN_CONCEPT, id);
    let mut fragment = vec![Triple::new(
        concept.clone(),
        rdf::TYPE,
        vocab::SIGN_CONCEPT.into_owned(),
    )];
    fragment.extend(relation_triples(
        vocab::BELONGS_TO,
        (KIND_SIGN_FACE, id),
        (KIND_SIGN_CONCEPT, id),
    ));

    let Some(code) = sign.code.as_deref() else {
        return fragment;
    };
    if code == "Unknown" {
        return fragment;
    }
    fragment.push(Triple::new(
        concept.clone(),
        vocab::CONCEPT_CODE,
        Literal::new_simple_literal(code),
    ));
    if let Some(entry) = register.lookup(code) {
        fragment.push(Triple::new(
            concept.clone(),
            vocab::CONCEPT_MEANING,
            Literal::new_simple_literal(entry.meaning.as_str()),
        ));
        let filename = entry
            .image_path
            .rsplit('/')
            .next()
            .unwrap_or(entry.image_path.as_str());
        let image_uri =
            NamedNode::new_unchecked(format!("{}{}", vocab::WEGCODE_BASE, entry.image_path));
        let image = vocab::value_node(KIND_SIGN_CONCEPT, id, "image");
        fragment.push(Triple::new(concept, vocab::CONCEPT_IMAGE, image.clone()));
        fragment.push(Triple::new(
            image.clone(),
            vocab::DOCUMENT_FILENAME,
            Literal::new_simple_literal(filename),
        ));
        fragment.push(Triple::new(image.clone(), vocab::DOCUMENT_URI, image_uri));
        fragment.push(Triple::new(
            image,
            vocab::DOCUMENT_MIME_TYPE,
            vocab::MIME_IMAGE_PNG.into_owned(),
        ));
    }
    fragment
}

/// The foil node and its fastening relation are always emitted; the foil
/// type edge only for recognized codes. The unset family (Onbekend, empty,
/// NULL, nvt) is silently skipped; anything else is fatal.
fn foil(sign: &Sign, id: i64) -> Result<Vec<Triple>, MappingError> {
    let foil = vocab::asset(KIND_FOIL, id);
    let mut fragment = vec![Triple::new(
        foil.clone(),
        rdf::TYPE,
        vocab::FOIL.into_owned(),
    )];
    fragment.extend(relation_triples(
        vocab::FASTENING,
        (KIND_SIGN, id),
        (KIND_FOIL, id),
    ));
    if let Some(concept) = foil_concept(sign.foil_type.as_deref())? {
        fragment.push(Triple::new(foil, vocab::FOIL_TYPE, concept.into_owned()));
    }
    Ok(fragment)
}

fn foil_concept(
    foil_type: Option<&str>,
) -> Result<Option<NamedNodeRef<'static>>, MappingError> {
    match foil_type {
        None | Some("Onbekend") | Some("") | Some("nvt") => Ok(None),
        Some("3.a") => Ok(Some(vocab::FOIL_TYPE_3A)),
        Some("3.b") => Ok(Some(vocab::FOIL_TYPE_3B)),
        Some("3") => Ok(Some(vocab::FOIL_TYPE_3AB)),
        Some("1") => Ok(Some(vocab::FOIL_TYPE_1)),
        Some("2") => Ok(Some(vocab::FOIL_TYPE_2)),
        Some(other) => Err(MappingError::FoilType(other.to_string())),
    }
}
