use {
    serde::{Deserialize, Serialize},
    skillroute_protocol::{Slot, status_codes},
    tracing::{debug, warn},
};

use crate::{Error, Result};

/// The per-slot record handlers consume.
///
/// `matched` always holds what the user actually said. When the slot is
/// resolved, `value` and `id` come from the resolved entity instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSlot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "match")]
    pub matched: Option<String>,
    pub resolved: bool,
}

impl CanonicalSlot {
    /// Unresolved record: the spoken value stands for itself.
    pub fn unresolved(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            matched: value.clone(),
            value,
            resolved: false,
        }
    }
}

/// Which status code means "the authority found nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPolicy {
    pub no_match_code: String,
}

impl ResolutionPolicy {
    pub fn new(no_match_code: impl Into<String>) -> Self {
        Self {
            no_match_code: no_match_code.into(),
        }
    }
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self::new(status_codes::ER_SUCCESS_NO_MATCH)
    }
}

/// Fold one raw slot into its canonical record.
///
/// - no resolutions: unresolved baseline
/// - first authority reports the no-match code: unresolved baseline
/// - otherwise: first value of the first authority, `resolved = true`
///
/// An empty authority list, or an empty value list on a non-no-match
/// authority, is rejected with [`Error::MalformedResolution`].
pub fn reduce_authority(slot: &Slot, policy: &ResolutionPolicy) -> Result<CanonicalSlot> {
    let baseline = CanonicalSlot::unresolved(&slot.name, slot.value.clone());

    let Some(resolutions) = &slot.resolutions else {
        return Ok(baseline);
    };

    let Some(authority) = resolutions.resolutions_per_authority.first() else {
        warn!(slot = %slot.name, "resolutions present without any authority");
        return Err(Error::malformed(&slot.name, "no authority in resolutionsPerAuthority"));
    };

    if authority.status.code == policy.no_match_code {
        debug!(slot = %slot.name, code = %authority.status.code, "slot not resolved");
        return Ok(baseline);
    }

    let Some(entity) = authority.values.first().map(|v| &v.value) else {
        warn!(
            slot = %slot.name,
            code = %authority.status.code,
            "authority reported no values"
        );
        return Err(Error::malformed(&slot.name, "authority has no values"));
    };

    debug!(slot = %slot.name, id = %entity.id, "slot resolved");

    Ok(CanonicalSlot {
        name: slot.name.clone(),
        id: Some(entity.id.clone()),
        value: Some(entity.name.clone()),
        matched: slot.value.clone(),
        resolved: true,
    })
}
