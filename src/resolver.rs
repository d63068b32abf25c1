//! Entity resolution over request slots
//!
//! Only the first resolution authority is consulted. A slot resolves when
//! that authority reports `ER_SUCCESS_MATCH`; every other status leaves it
//! unresolved.

use crate::error::{Result, SkillError};
use crate::types::{ResolvedValue, Slot, StatusCode};
use std::collections::HashMap;

/// Resolve a slot to its canonical value name
///
/// Returns `Ok(None)` when the slot did not resolve. A missing slot or a
/// slot without resolution data is a malformed request.
pub fn resolve_entity(slots: &HashMap<String, Slot>, slot_name: &str) -> Result<Option<String>> {
    Ok(resolve_entity_with_id(slots, slot_name)?.map(|v| v.name))
}

/// Resolve a slot to its canonical `(name, id)` pair
pub fn resolve_entity_with_id(
    slots: &HashMap<String, Slot>,
    slot_name: &str,
) -> Result<Option<ResolvedValue>> {
    let slot = slots.get(slot_name).ok_or_else(|| SkillError::MalformedSlot {
        slot: slot_name.to_string(),
        reason: "slot not present in request".to_string(),
    })?;
    resolve_slot(slot_name, slot)
}

/// Resolve an optional slot, treating absence as "unresolved"
pub fn resolve_optional(
    slots: &HashMap<String, Slot>,
    slot_name: &str,
) -> Result<Option<ResolvedValue>> {
    match slots.get(slot_name) {
        Some(slot) => resolve_slot(slot_name, slot),
        None => {
            tracing::debug!(slot = %slot_name, "Optional slot absent");
            Ok(None)
        }
    }
}

fn resolve_slot(slot_name: &str, slot: &Slot) -> Result<Option<ResolvedValue>> {
    let resolutions = slot.resolutions.as_ref().ok_or_else(|| SkillError::MalformedSlot {
        slot: slot_name.to_string(),
        reason: "missing resolutions".to_string(),
    })?;

    let authority = match resolutions.resolutions_per_authority.first() {
        Some(a) => a,
        None => return Ok(None),
    };

    if authority.status.code != StatusCode::SuccessMatch {
        tracing::debug!(
            slot = %slot_name,
            status = ?authority.status.code,
            "Slot did not resolve"
        );
        return Ok(None);
    }

    let first = authority.values.first().ok_or_else(|| SkillError::MalformedSlot {
        slot: slot_name.to_string(),
        reason: "successful match with no candidate values".to_string(),
    })?;

    Ok(Some(first.value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Resolutions;

    fn slots(entries: Vec<(&str, Slot)>) -> HashMap<String, Slot> {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn value(name: &str) -> ResolvedValue {
        ResolvedValue {
            name: name.to_string(),
            id: name.to_uppercase(),
        }
    }

    #[test]
    fn test_success_match_returns_canonical_name() {
        let s = slots(vec![("energy", Slot::matched("energy", "high", "HIGH"))]);
        assert_eq!(resolve_entity(&s, "energy").unwrap().as_deref(), Some("high"));
    }

    #[test]
    fn test_success_match_takes_first_candidate() {
        let s = slots(vec![(
            "size",
            Slot::with_status(
                "size",
                StatusCode::SuccessMatch,
                vec![value("small"), value("medium"), value("large")],
            ),
        )]);
        assert_eq!(resolve_entity(&s, "size").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn test_non_success_statuses_are_unresolved() {
        for code in [
            StatusCode::SuccessNoMatch,
            StatusCode::ErrorTimeout,
            StatusCode::ErrorException,
            StatusCode::Other,
        ] {
            let s = slots(vec![("size", Slot::with_status("size", code, vec![value("small")]))]);
            assert!(resolve_entity(&s, "size").unwrap().is_none(), "{:?}", code);
        }
    }

    #[test]
    fn test_no_authority_is_unresolved() {
        let slot = Slot {
            name: "size".to_string(),
            value: Some("huge".to_string()),
            resolutions: Some(Resolutions::default()),
        };
        let s = slots(vec![("size", slot)]);
        assert!(resolve_entity(&s, "size").unwrap().is_none());
    }

    #[test]
    fn test_missing_resolutions_is_malformed() {
        let slot = Slot {
            name: "size".to_string(),
            value: Some("huge".to_string()),
            resolutions: None,
        };
        let s = slots(vec![("size", slot)]);
        let err = resolve_entity(&s, "size").unwrap_err();
        assert!(matches!(err, SkillError::MalformedSlot { ref slot, .. } if slot == "size"));
    }

    #[test]
    fn test_missing_slot_is_malformed() {
        let err = resolve_entity(&HashMap::new(), "temperament").unwrap_err();
        assert!(err.to_string().contains("temperament"));
    }

    #[test]
    fn test_success_without_values_is_malformed() {
        let s = slots(vec![("size", Slot::with_status("size", StatusCode::SuccessMatch, vec![]))]);
        assert!(resolve_entity(&s, "size").is_err());
    }

    #[test]
    fn test_resolve_with_id() {
        let s = slots(vec![("cityName", Slot::matched("cityName", "Seattle", "SEA"))]);
        let resolved = resolve_entity_with_id(&s, "cityName").unwrap().unwrap();
        assert_eq!(resolved.name, "Seattle");
        assert_eq!(resolved.id, "SEA");
    }

    #[test]
    fn test_resolve_optional_absent() {
        assert!(resolve_optional(&HashMap::new(), "cityName").unwrap().is_none());
    }
}
