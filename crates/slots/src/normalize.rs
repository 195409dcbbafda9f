use std::collections::HashMap;

use {
    serde::{Deserialize, Serialize},
    skillroute_protocol::Slot,
    tracing::{debug, warn},
};

use crate::{
    Result,
    reduce::{CanonicalSlot, ResolutionPolicy, reduce_authority},
};

/// Canonical slots of one intent, keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotMap(HashMap<String, CanonicalSlot>);

impl SlotMap {
    pub fn get(&self, name: &str) -> Option<&CanonicalSlot> {
        self.0.get(name)
    }

    /// Canonical value of a slot, if the slot exists and has one.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|s| s.value.as_deref())
    }

    pub fn is_resolved(&self, name: &str) -> bool {
        self.get(name).is_some_and(|s| s.resolved)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CanonicalSlot)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> HashMap<String, CanonicalSlot> {
        self.0
    }
}

/// Reduce every slot of an intent. Entries are keyed by the slot's own
/// `name` field; the first malformed slot aborts the whole map.
///
/// Wire keys are visited in sorted order. If two of them carry the same slot
/// name, the first one wins and the other is dropped with a warning.
pub fn normalize_slots(slots: &HashMap<String, Slot>, policy: &ResolutionPolicy) -> Result<SlotMap> {
    let mut keys: Vec<&String> = slots.keys().collect();
    keys.sort();

    let mut out: HashMap<String, CanonicalSlot> = HashMap::with_capacity(slots.len());
    for key in keys {
        let slot = &slots[key];
        if out.contains_key(&slot.name) {
            warn!(slot = %slot.name, wire_key = %key, "duplicate slot name, dropping");
            continue;
        }
        let canonical = reduce_authority(slot, policy)?;
        out.insert(canonical.name.clone(), canonical);
    }
    debug!(count = out.len(), "normalized intent slots");
    Ok(SlotMap(out))
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        skillroute_protocol::{Event, status_codes},
        std::collections::HashMap,
    };

    use {super::*, crate::Error};

    fn intent_slots(raw: serde_json::Value) -> HashMap<String, Slot> {
        let event: Event = serde_json::from_value(serde_json::json!({
            "request": {
                "type": "IntentRequest",
                "intent": { "name": "Weather", "slots": raw }
            }
        }))
        .unwrap();
        event.slots().cloned().unwrap()
    }

    #[test]
    fn mixes_resolved_and_plain_slots() {
        let slots = intent_slots(serde_json::json!({
            "city": {
                "name": "city",
                "value": "Settle",
                "resolutions": { "resolutionsPerAuthority": [{
                    "status": { "code": status_codes::ER_SUCCESS_MATCH },
                    "values": [{ "value": { "id": "E1", "name": "Seattle" } }]
                }]}
            },
            "day": { "name": "day", "value": "today" },
            "unit": {
                "name": "unit",
                "value": "kelvinish",
                "resolutions": { "resolutionsPerAuthority": [{
                    "status": { "code": status_codes::ER_SUCCESS_NO_MATCH },
                    "values": []
                }]}
            }
        }));

        let map = normalize_slots(&slots, &ResolutionPolicy::default()).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.value("city"), Some("Seattle"));
        assert!(map.is_resolved("city"));
        assert_eq!(map.get("city").unwrap().matched.as_deref(), Some("Settle"));
        assert_eq!(map.value("day"), Some("today"));
        assert!(!map.is_resolved("day"));
        assert_eq!(map.value("unit"), Some("kelvinish"));
        assert!(!map.is_resolved("unit"));
    }

    #[test]
    fn keys_follow_slot_name() {
        let slots = intent_slots(serde_json::json!({
            "wire-key": { "name": "city", "value": "Boston" }
        }));
        let map = normalize_slots(&slots, &ResolutionPolicy::default()).unwrap();
        assert!(map.get("wire-key").is_none());
        assert_eq!(map.value("city"), Some("Boston"));
    }

    #[test]
    fn duplicate_name_keeps_first_wire_key() {
        let slots = intent_slots(serde_json::json!({
            "b": { "name": "city", "value": "Boston" },
            "a": { "name": "city", "value": "Austin" }
        }));
        for _ in 0..8 {
            let map = normalize_slots(&slots, &ResolutionPolicy::default()).unwrap();
            assert_eq!(map.len(), 1);
            assert_eq!(map.value("city"), Some("Austin"));
        }
    }

    #[test]
    fn iterates_and_unwraps_entries() {
        let slots = intent_slots(serde_json::json!({
            "day": { "name": "day", "value": "today" },
            "city": { "name": "city", "value": "Boston" }
        }));
        let map = normalize_slots(&slots, &ResolutionPolicy::default()).unwrap();

        let mut names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
        names.sort_unstable();
        assert_eq!(names, ["city", "day"]);
        assert!(map.iter().all(|(name, slot)| name == slot.name && !slot.resolved));

        let inner = map.into_inner();
        assert_eq!(inner["city"].value.as_deref(), Some("Boston"));
    }

    #[test]
    fn empty_intent_gives_empty_map() {
        let map = normalize_slots(&HashMap::new(), &ResolutionPolicy::default()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn malformed_slot_fails_whole_map() {
        let slots = intent_slots(serde_json::json!({
            "day": { "name": "day", "value": "today" },
            "city": {
                "name": "city",
                "value": "Settle",
                "resolutions": { "resolutionsPerAuthority": [] }
            }
        }));
        let err = normalize_slots(&slots, &ResolutionPolicy::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedResolution { ref slot, .. } if slot == "city"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let slots = intent_slots(serde_json::json!({
            "day": { "name": "day", "value": "today" }
        }));
        let map = normalize_slots(&slots, &ResolutionPolicy::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            serde_json::json!({
                "day": { "name": "day", "value": "today", "match": "today", "resolved": false }
            })
        );
    }
}
