use oxrdf::vocab::rdf;
use oxrdf::{Literal, Triple};

use super::MappingError;
use crate::model::Placement;
use crate::vocab;
use crate::vocab::KIND_PLACEMENT;

/// Map one placement to its graph fragment.
///
/// Side-of-road dispatch is closed: LINKS/RECHTS/MIDDEN map to the three
/// position concepts, BOVEN (overhead) and NULL map to nothing, anything
/// else is fatal.
pub fn map_placement(placement: &Placement) -> Result<Vec<Triple>, MappingError> {
    let uri = vocab::asset(KIND_PLACEMENT, placement.id);
    let mut fragment = vec![Triple::new(
        uri.clone(),
        rdf::TYPE,
        vocab::PLACEMENT.into_owned(),
    )];

    if let Some(segment_id) = placement.road_segment_id {
        let segment = vocab::value_node(KIND_PLACEMENT, placement.id, "wegsegment");
        fragment.push(Triple::new(
            uri.clone(),
            vocab::PLACEMENT_ROAD_SEGMENT,
            segment.clone(),
        ));
        fragment.push(Triple::new(
            segment.clone(),
            vocab::EXTERNAL_REFERENCE_NUMBER,
            Literal::new_simple_literal(segment_id.to_string()),
        ));
        fragment.push(Triple::new(
            segment,
            vocab::EXTERNAL_PARTY,
            Literal::new_simple_literal("WegenRegister"),
        ));
    }

    if let Some(side) = placement.road_side.as_deref() {
        let position = match side {
            "LINKS" => Some(vocab::POSITION_LEFT),
            "RECHTS" => Some(vocab::POSITION_RIGHT),
            "MIDDEN" => Some(vocab::POSITION_CENTER),
            // Overhead placements have no position concept in the ontology.
            "BOVEN" => None,
            other => return Err(MappingError::RoadSide(other.to_string())),
        };
        if let Some(position) = position {
            fragment.push(Triple::new(
                uri.clone(),
                vocab::PLACEMENT_ROAD_SIDE,
                position.into_owned(),
            ));
        }
    }

    let asset_id = vocab::value_node(KIND_PLACEMENT, placement.id, "assetid");
    fragment.push(Triple::new(uri, vocab::ASSET_ID, asset_id.clone()));
    fragment.push(Triple::new(
        asset_id,
        vocab::IDENTIFICATOR,
        Literal::new_simple_literal(format!("opstelling_{}", placement.id)),
    ));

    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn placement(road_side: Option<&str>) -> Placement {
        Placement {
            id: 17,
            road_side: road_side.map(str::to_string),
            status: Some("in gebruik".to_string()),
            road_segment_id: None,
        }
    }

    fn position_edges(fragment: &[Triple]) -> Vec<String> {
        fragment
            .iter()
            .filter(|t| t.predicate.as_ref() == vocab::PLACEMENT_ROAD_SIDE)
            .map(|t| t.object.to_string())
            .collect()
    }

    #[test_case("LINKS", vocab::POSITION_LEFT; "left")]
    #[test_case("RECHTS", vocab::POSITION_RIGHT; "right")]
    #[test_case("MIDDEN", vocab::POSITION_CENTER; "center")]
    fn mapped_sides_emit_exactly_one_position_edge(side: &str, concept: oxrdf::NamedNodeRef<'_>) {
        let fragment = map_placement(&placement(Some(side))).unwrap();
        let edges = position_edges(&fragment);
        assert_eq!(edges, vec![format!("<{}>", concept.as_str())]);
    }

    #[test_case(Some("BOVEN"); "overhead")]
    #[test_case(None; "unspecified")]
    fn overhead_and_null_sides_are_skipped(side: Option<&str>) {
        let fragment = map_placement(&placement(side)).unwrap();
        assert!(position_edges(&fragment).is_empty());
    }

    #[test]
    fn unknown_side_is_a_mapping_error() {
        let err = map_placement(&placement(Some("ONDER"))).unwrap_err();
        assert!(matches!(err, MappingError::RoadSide(side) if side == "ONDER"));
    }

    #[test]
    fn road_segment_becomes_an_external_reference() {
        let mut p = placement(Some("LINKS"));
        p.road_segment_id = Some(429);
        let fragment = map_placement(&p).unwrap();
        let number: Vec<_> = fragment
            .iter()
            .filter(|t| t.predicate.as_ref() == vocab::EXTERNAL_REFERENCE_NUMBER)
            .collect();
        assert_eq!(number.len(), 1);
        assert_eq!(number[0].object.to_string(), "\"429\"");
        assert!(fragment
            .iter()
            .any(|t| t.predicate.as_ref() == vocab::EXTERNAL_PARTY
                && t.object.to_string() == "\"WegenRegister\""));
    }

    #[test]
    fn asset_id_literal_follows_the_template() {
        let fragment = map_placement(&placement(None)).unwrap();
        assert!(fragment
            .iter()
            .any(|t| t.predicate.as_ref() == vocab::IDENTIFICATOR
                && t.object.to_string() == "\"opstelling_17\""));
    }
}
