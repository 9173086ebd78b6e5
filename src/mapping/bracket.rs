use oxrdf::vocab::rdf;
use oxrdf::Triple;

use super::relation_triples;
use crate::model::Bracket;
use crate::vocab;
use crate::vocab::{KIND_BRACKET, KIND_MOUNT, KIND_SIGN};

/// Map one bracket: its type and the two fastening relations (to its mount
/// and to its sign). Brackets carry no attributes of their own.
pub fn map_bracket(bracket: &Bracket) -> Vec<Triple> {
    let Some(id) = bracket.id else {
        return Vec::new();
    };
    let mut fragment = vec![Triple::new(
        vocab::asset(KIND_BRACKET, id),
        rdf::TYPE,
        vocab::BRACKET.into_owned(),
    )];
    fragment.extend(relation_triples(
        vocab::FASTENING,
        (KIND_BRACKET, id),
        (KIND_MOUNT, bracket.mount_id),
    ));
    fragment.extend(relation_triples(
        vocab::FASTENING,
        (KIND_BRACKET, id),
        (KIND_SIGN, bracket.sign_id),
    ));
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_connects_mount_and_sign() {
        let fragment = map_bracket(&Bracket {
            id: Some(9),
            mount_id: 5,
            sign_id: 3,
        });
        // Type triple plus two relation objects of three triples each.
        assert_eq!(fragment.len(), 7);
        let relations: Vec<String> = fragment
            .iter()
            .filter(|t| t.predicate.as_ref() == vocab::RELATION_TARGET)
            .map(|t| t.object.to_string())
            .collect();
        assert!(relations.iter().any(|r| r.contains("ophanging_5")));
        assert!(relations.iter().any(|r| r.contains("bord_3")));
    }

    #[test]
    fn null_bracket_id_maps_to_nothing() {
        let fragment = map_bracket(&Bracket {
            id: None,
            mount_id: 5,
            sign_id: 3,
        });
        assert!(fragment.is_empty());
    }
}
