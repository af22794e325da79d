//! The immutable snapshot of a computed apportionment, plus its queries.

use core::ptr;
use std::collections::BTreeMap;

use ap_core::entities::{NodeId, RegionTree};
use ap_core::tokens::{PartyId, RegionId};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::ElectionError;

/// Seats per party, per target-level region, for one (system, subtree) run.
///
/// Borrows the tree it was computed over: results stay valid exactly as long
/// as the dataset they describe, and two results are comparable only when
/// they share the same physical tree.
#[derive(Clone, Debug)]
pub struct ElectionResult<'t> {
    tree: &'t RegionTree,
    region: NodeId,
    level: u8,
    result: BTreeMap<RegionId, BTreeMap<PartyId, u32>>,
}

impl<'t> ElectionResult<'t> {
    pub(crate) fn new(
        tree: &'t RegionTree,
        region: NodeId,
        level: u8,
        result: BTreeMap<RegionId, BTreeMap<PartyId, u32>>,
    ) -> Self {
        Self {
            tree,
            region,
            level,
            result,
        }
    }

    /// Root of the subtree the result was computed over.
    #[inline]
    pub fn region(&self) -> NodeId {
        self.region
    }

    /// Target level the seats were assigned at.
    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Region name → (party → seats) at the target level.
    #[inline]
    pub fn result(&self) -> &BTreeMap<RegionId, BTreeMap<PartyId, u32>> {
        &self.result
    }

    /// Seats for one target-level region, if covered by this result.
    pub fn seats_for(&self, region: &RegionId) -> Option<&BTreeMap<PartyId, u32>> {
        self.result.get(region)
    }

    /// Total seats per party over every target-level region under `scope`
    /// (default: the whole covered subtree). Pure reduction; this is the
    /// "final pie" the presentation layer draws.
    pub fn seat_totals(
        &self,
        scope: Option<NodeId>,
    ) -> Result<BTreeMap<PartyId, u32>, ElectionError> {
        let from = scope.unwrap_or(self.region);
        let mut totals: BTreeMap<PartyId, u32> = BTreeMap::new();
        for id in self.tree.descendants_at_level(from, self.level)? {
            let name = self.tree.node(id).name();
            let seats = self
                .result
                .get(name)
                .ok_or_else(|| ElectionError::MissingRegion(name.clone()))?;
            for (party, &s) in seats {
                *totals.entry(party.clone()).or_insert(0) += s;
            }
        }
        Ok(totals)
    }

    /// Per-party difference in seats, `self - other`, summed over each
    /// result's own target level under `scope`.
    ///
    /// Both results must have been computed over the same physical subtree
    /// (same tree, same root); comparing results from different trees would
    /// silently answer a different question, so it is rejected instead.
    /// This is what lets two methods, two target levels, or two thresholds
    /// be compared over the same underlying votes.
    pub fn seat_diff(
        &self,
        other: &ElectionResult<'_>,
        scope: Option<NodeId>,
    ) -> Result<BTreeMap<PartyId, i64>, ElectionError> {
        if !ptr::eq(self.tree, other.tree) || self.region != other.region {
            return Err(ElectionError::ResultMismatch);
        }
        let scope = scope.unwrap_or(self.region);
        let ours = self.seat_totals(Some(scope))?;
        let theirs = other.seat_totals(Some(scope))?;

        let mut diff: BTreeMap<PartyId, i64> = BTreeMap::new();
        for (party, &s) in &ours {
            diff.insert(party.clone(), s as i64);
        }
        for (party, &s) in &theirs {
            *diff.entry(party.clone()).or_insert(0) -= s as i64;
        }
        Ok(diff)
    }

    /// Raw votes cast for parties that won zero seats, per party, over every
    /// target-level region under `scope`. Measures how many voters the
    /// apportionment method left unrepresented.
    pub fn lost_votes(&self, scope: Option<NodeId>) -> Result<BTreeMap<PartyId, u64>, ElectionError> {
        let from = scope.unwrap_or(self.region);
        let mut lost: BTreeMap<PartyId, u64> = BTreeMap::new();
        for id in self.tree.descendants_at_level(from, self.level)? {
            let region = self.tree.node(id);
            let seats = self
                .result
                .get(region.name())
                .ok_or_else(|| ElectionError::MissingRegion(region.name().clone()))?;
            for (party, &votes) in region.votes() {
                if !seats.contains_key(party) {
                    *lost.entry(party.clone()).or_insert(0) += votes;
                }
            }
        }
        Ok(lost)
    }
}

/// Serialized shape: `{ region, level, result }`: the covered root's name,
/// the target level, and the per-region seat maps. The tree itself is the
/// caller's dataset and is not embedded.
impl Serialize for ElectionResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("ElectionResult", 3)?;
        st.serialize_field("region", self.tree.node(self.region).name())?;
        st.serialize_field("level", &self.level)?;
        st.serialize_field("result", &self.result)?;
        st.end()
    }
}
