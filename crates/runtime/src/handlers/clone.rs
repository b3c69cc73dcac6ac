//! Handler that transplants capability state from a dead actor instance into
//! its respawned replacement.
//!
//! Each capability kind is copied in its own independent step. A step is
//! skipped when either instance lacks that capability; a skipped step never
//! prevents the others from running. Values are read from the original
//! through its public accessors and written into the replacement through its
//! public mutators.

use needs_core::{CapabilityKind, ItemUseState, LatchState, NeedState};
use tracing::{debug, trace};

use super::ActorEventHandler;
use crate::actor::Actor;
use crate::events::{ActorEvent, ReplacementCause};

/// Which capability kinds were transplanted and which were skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloneReport {
    pub transplanted: Vec<CapabilityKind>,
    pub skipped: Vec<CapabilityKind>,
}

impl CloneReport {
    pub fn is_transplanted(&self, kind: CapabilityKind) -> bool {
        self.transplanted.contains(&kind)
    }

    fn record(&mut self, kind: CapabilityKind, done: bool) {
        if done {
            self.transplanted.push(kind);
        } else {
            self.skipped.push(kind);
        }
    }
}

/// Copies every capability present on both instances from `original` into
/// `replacement`.
pub fn clone_capabilities(original: &Actor, replacement: &mut Actor) -> CloneReport {
    let mut report = CloneReport::default();

    report.record(CapabilityKind::Need, clone_needs(original, replacement));
    report.record(CapabilityKind::Latch, clone_latches(original, replacement));
    report.record(CapabilityKind::ItemUse, clone_item_use(original, replacement));

    report
}

/// Straight snapshot of values and level adjustments.
fn clone_needs(original: &Actor, replacement: &mut Actor) -> bool {
    let (Some(from), Some(to)) = (
        original.capability::<NeedState>(),
        replacement.capability_mut::<NeedState>(),
    ) else {
        return false;
    };

    for (need, value) in from.values() {
        to.set(need.clone(), *value);
    }
    for (need, levels) in from.adjustments() {
        for (level, adjustment) in levels {
            to.store_adjustment(need.clone(), level.clone(), *adjustment);
        }
    }
    true
}

fn clone_latches(original: &Actor, replacement: &mut Actor) -> bool {
    let (Some(from), Some(to)) = (
        original.capability::<LatchState>(),
        replacement.capability_mut::<LatchState>(),
    ) else {
        return false;
    };

    for (key, value) in from.values() {
        to.set(key.clone(), *value);
    }
    true
}

/// Counts are written into get-or-created buckets and overwrite whatever the
/// replacement already holds for the same item. They are not summed.
fn clone_item_use(original: &Actor, replacement: &mut Actor) -> bool {
    let (Some(from), Some(to)) = (
        original.capability::<ItemUseState>(),
        replacement.capability_mut::<ItemUseState>(),
    ) else {
        return false;
    };

    for (bucket, counts) in from.buckets() {
        let target = to.bucket_mut(bucket.clone());
        for (item, count) in counts {
            target.insert(item.clone(), *count);
        }
    }
    true
}

/// Runs [`clone_capabilities`] on death-triggered replacements only.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneHandler;

impl ActorEventHandler for CloneHandler {
    fn name(&self) -> &'static str {
        "clone"
    }

    fn handle(&self, event: &mut ActorEvent<'_>) {
        let ActorEvent::Replaced {
            original,
            replacement,
            cause,
        } = event
        else {
            return;
        };

        if *cause != ReplacementCause::Death {
            trace!(
                target: "runtime::handlers",
                actor = %original.id(),
                cause = cause.as_str(),
                "Replacement is a continuation; not cloning capabilities"
            );
            return;
        }

        let report = clone_capabilities(original, replacement);

        for kind in &report.skipped {
            debug!(
                target: "runtime::handlers",
                actor = %original.id(),
                capability = %kind,
                "Capability missing on one instance; skipped"
            );
        }
        debug!(
            target: "runtime::handlers",
            actor = %original.id(),
            transplanted = report.transplanted.len(),
            skipped = report.skipped.len(),
            "Cloned capabilities after death"
        );
    }
}
