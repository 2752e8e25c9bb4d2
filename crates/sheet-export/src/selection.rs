// File: crates/sheet-export/src/selection.rs
// Summary: Multi-page row selection keyed by record id, with a composite-key fallback.

use std::fmt;

use log::warn;

use crate::record::ProjectRecord;

/// Identity of a record for selection purposes.
///
/// Records without an id fall back to sample number + detection time + batch
/// code. That triple is not guaranteed unique; see [`SelectOutcome::CompositeCollision`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    Composite { sample_no: String, detected_time: String, batch_code: String },
}

impl RowKey {
    pub fn of(r: &ProjectRecord) -> Self {
        let id = r.id.to_text();
        if !r.id.is_null() && !id.is_empty() {
            return RowKey::Id(id.into_owned());
        }
        RowKey::Composite {
            sample_no: r.sample_no.to_text().into_owned(),
            detected_time: r.detected_time.to_text().into_owned(),
            batch_code: r.batch_code.to_text().into_owned(),
        }
    }

    pub fn is_composite(&self) -> bool { matches!(self, RowKey::Composite { .. }) }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Id(id) => write!(f, "id:{id}"),
            RowKey::Composite { sample_no, detected_time, batch_code } => write!(
                f,
                "sampleNo:{sample_no}|detectedTime:{detected_time}|batchCode:{batch_code}"
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Added,
    AlreadySelected,
    /// Same id, newer field values; the stored record was replaced.
    Updated,
    /// A different record already held this composite key. The newer record
    /// replaced it, so one of the two will be missing from the export.
    CompositeCollision,
}

/// Tri-state of the "select all on this page" checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCheck {
    /// The page is empty.
    Disabled,
    Unchecked,
    Checked,
    Indeterminate,
}

/// Selected records in selection order; survives paging.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    entries: Vec<(RowKey, ProjectRecord)>,
}

impl SelectionState {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn contains(&self, r: &ProjectRecord) -> bool {
        self.position(&RowKey::of(r)).is_some()
    }

    pub fn select(&mut self, r: ProjectRecord) -> SelectOutcome {
        let key = RowKey::of(&r);
        let Some(i) = self.position(&key) else {
            self.entries.push((key, r));
            return SelectOutcome::Added;
        };
        if self.entries[i].1 == r {
            return SelectOutcome::AlreadySelected;
        }
        let outcome = if key.is_composite() {
            warn!("selection key collision on {key}; replacing the earlier record");
            SelectOutcome::CompositeCollision
        } else {
            SelectOutcome::Updated
        };
        self.entries[i].1 = r;
        outcome
    }

    /// Returns whether anything was removed.
    pub fn deselect(&mut self, r: &ProjectRecord) -> bool {
        match self.position(&RowKey::of(r)) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Apply a row checkbox change.
    pub fn set_checked(&mut self, r: &ProjectRecord, checked: bool) -> Option<SelectOutcome> {
        if checked {
            Some(self.select(r.clone()))
        } else {
            self.deselect(r);
            None
        }
    }

    /// Flip a row's checkbox. Returns whether the record is now selected.
    pub fn toggle(&mut self, r: &ProjectRecord) -> bool {
        if self.deselect(r) {
            return false;
        }
        self.select(r.clone());
        true
    }

    /// Check or uncheck every record on a page. Returns the number of
    /// composite-key collisions hit while selecting.
    pub fn select_page(&mut self, items: &[ProjectRecord], checked: bool) -> usize {
        items
            .iter()
            .filter_map(|r| self.set_checked(r, checked))
            .filter(|o| *o == SelectOutcome::CompositeCollision)
            .count()
    }

    pub fn page_check(&self, items: &[ProjectRecord]) -> PageCheck {
        if items.is_empty() {
            return PageCheck::Disabled;
        }
        let selected = items.iter().filter(|r| self.contains(r)).count();
        if selected == items.len() {
            PageCheck::Checked
        } else if selected == 0 {
            PageCheck::Unchecked
        } else {
            PageCheck::Indeterminate
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Records in the order they were first selected.
    pub fn records(&self) -> Vec<ProjectRecord> {
        self.entries.iter().map(|(_, r)| r.clone()).collect()
    }

    pub fn clear(&mut self) { self.entries.clear(); }

    fn position(&self, key: &RowKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}
