//! Helpers for applying the duplicate-address policy to an entry set.

use std::collections::BTreeMap;

use mdrop_core::base::{Address, Entry};
use tracing::warn;

use super::commitment::CommitError;
use crate::common::DuplicatePolicy;

/// Apply `policy` to repeated addresses in `entries`.
///
/// Returns the number of entries whose address already appeared earlier.
///
/// # Errors
/// Returns [`CommitError::DuplicateAddress`] for the first repeat when the policy is `Reject`.
pub(super) fn check_duplicate_addresses(
    entries: &[Entry],
    policy: DuplicatePolicy,
) -> Result<usize, CommitError> {
    if policy == DuplicatePolicy::Allow {
        return Ok(0);
    }

    let mut first_seen: BTreeMap<Address, usize> = BTreeMap::new();
    let mut duplicates = 0_usize;
    for (index, entry) in entries.iter().enumerate() {
        let Some(&first_index) = first_seen.get(&entry.address) else {
            first_seen.insert(entry.address, index);
            continue;
        };
        match policy {
            DuplicatePolicy::Reject => {
                return Err(CommitError::DuplicateAddress {
                    address: entry.address,
                    first_index,
                    index,
                });
            }
            DuplicatePolicy::Warn => {
                warn!(
                    address = %entry.address,
                    first_index,
                    index,
                    "Address appears more than once"
                );
            }
            DuplicatePolicy::Allow => {}
        }
        duplicates = duplicates.saturating_add(1);
    }
    Ok(duplicates)
}
