use crate::domain::catalog::{faculty::Faculty, lab::Lab};
use crate::domain::schedule::time_slot::SlotGrid;

pub mod course;
pub mod faculty;
pub mod lab;
pub mod section;
pub mod snapshot;
pub mod validation;

/// Resources a scheduling run may hand out: available labs, the faculty roster and the weekly slot grid.
///
/// Order of labs and faculty is preserved from the input, it decides tie-breaks in the engine.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    labs: Vec<Lab>,
    faculty: Vec<Faculty>,
    slot_grid: SlotGrid,
}

impl ResourceCatalog {
    /// Builds the catalog. Labs flagged unavailable are dropped here, before any scheduling happens.
    pub fn new(labs: Vec<Lab>, faculty: Vec<Faculty>) -> Self {
        let total_labs = labs.len();
        let labs: Vec<Lab> = labs
            .into_iter()
            .filter(|lab| {
                if lab.is_available {
                    log::debug!("Lab {} ({}, {}) offers {} seats.", lab.id, lab.name, lab.lab_type, lab.capacity);
                } else {
                    log::debug!("Lab {} ({}, {}) is unavailable and excluded from scheduling.", lab.id, lab.name, lab.lab_type);
                }
                lab.is_available
            })
            .collect();

        log::info!("ResourceCatalog built: {} of {} labs available, {} faculty members.", labs.len(), total_labs, faculty.len());

        ResourceCatalog { labs, faculty, slot_grid: SlotGrid::weekly() }
    }

    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }

    pub fn slot_grid(&self) -> &SlotGrid {
        &self.slot_grid
    }

    pub fn has_labs(&self) -> bool {
        !self.labs.is_empty()
    }

    pub fn has_faculty(&self) -> bool {
        !self.faculty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utils::id::{FacultyId, LabId};

    #[test]
    fn unavailable_labs_are_filtered_and_order_is_kept() {
        let labs = vec![
            Lab::new(LabId::new(3), "Chem", 20),
            Lab::new(LabId::new(1), "Closed", 40).with_availability(false),
            Lab::new(LabId::new(2), "Bio", 25),
        ];
        let faculty = vec![Faculty::new(FacultyId::new(9), "Dr. B"), Faculty::new(FacultyId::new(4), "Dr. A")];

        let catalog = ResourceCatalog::new(labs, faculty);

        let lab_ids: Vec<i64> = catalog.labs().iter().map(|l| l.id.value()).collect();
        assert_eq!(lab_ids, vec![3, 2]);

        let faculty_ids: Vec<i64> = catalog.faculty().iter().map(|f| f.id.value()).collect();
        assert_eq!(faculty_ids, vec![9, 4]);

        assert_eq!(catalog.slot_grid().iter().count(), 15);
    }

    #[test]
    fn catalog_with_only_unavailable_labs_has_no_labs() {
        let catalog = ResourceCatalog::new(vec![Lab::new(LabId::new(1), "Closed", 40).with_availability(false)], vec![]);
        assert!(!catalog.has_labs());
        assert!(!catalog.has_faculty());
    }
}
