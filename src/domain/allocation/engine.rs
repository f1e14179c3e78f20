//! Greedy first-fit lab allocation.
//!
//! # Algorithm
//!
//! 1. Sections are processed in input order.
//! 2. For each section, slots are tried in canonical grid order (day-major).
//! 3. In each slot, labs are tried in input order; a lab qualifies if it seats the
//!    section's expected enrollment and is still free in that slot.
//! 4. If a faculty roster exists, the first roster member free in the slot supervises;
//!    if nobody is free the lab is skipped. Without a roster the session is unassigned.
//! 5. The first qualifying combination is committed, and the section moves on to the
//!    next slot until it has all its sessions or the grid is exhausted.
//!
//! Committed bookings are final. There is no scoring and no backtracking, so a section
//! processed later may end up with fewer sessions than requested; that is reported as a
//! shortfall, not an error.
//!
//! # Complexity
//! O(s * t * (l + f)) where s = sections, t = 15 slots, l = labs, f = faculty members.

use std::collections::HashMap;

use crate::domain::allocation::booking::{Booking, FacultyAssignment};
use crate::domain::allocation::outcome::{AllocationOutcome, AllocationStatus, SectionShortfall};
use crate::domain::catalog::{ResourceCatalog, section::Section};
use crate::domain::schedule::{occupancy::OccupancyTable, time_slot::TimeSlot};
use crate::domain::utils::id::{FacultyId, LabId, SectionId};

/// Mutable state of a single run. Created by [`AllocationEngine::allocate`] and dropped when it returns.
#[derive(Debug, Default)]
struct AllocationRun {
    lab_occupancy: OccupancyTable<LabId>,
    faculty_occupancy: OccupancyTable<FacultyId>,
    scheduled_per_section: HashMap<SectionId, i64>,
    bookings: Vec<Booking>,
    shortfalls: Vec<SectionShortfall>,
}

impl AllocationRun {
    fn commit(&mut self, booking: Booking) {
        self.lab_occupancy.mark(booking.lab_id(), &booking.slot());
        if let Some(faculty_id) = booking.faculty().faculty_id() {
            self.faculty_occupancy.mark(faculty_id, &booking.slot());
        }

        log::debug!(
            "Booked lab {} for section {} in slot {} with {}.",
            booking.lab_id(),
            booking.section_id(),
            booking.slot(),
            booking.faculty()
        );

        *self.scheduled_per_section.entry(booking.section_id()).or_insert(0) += 1;
        self.bookings.push(booking);
    }

    fn scheduled_count(&self, section_id: SectionId) -> i64 {
        self.scheduled_per_section.get(&section_id).copied().unwrap_or(0)
    }
}

/// The greedy scheduler. Borrows the catalog; holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct AllocationEngine<'a> {
    catalog: &'a ResourceCatalog,
}

impl<'a> AllocationEngine<'a> {
    pub fn new(catalog: &'a ResourceCatalog) -> Self {
        AllocationEngine { catalog }
    }

    /// Places as many sessions as fit for every section.
    ///
    /// Never fails. With no available labs or no sections the run short-circuits
    /// and returns an empty outcome carrying the matching status.
    pub fn allocate(&self, sections: &[Section]) -> AllocationOutcome {
        if !self.catalog.has_labs() {
            log::info!("No available labs, skipping allocation.");
            return AllocationOutcome::short_circuit(AllocationStatus::NoAvailableLabs);
        }

        if sections.is_empty() {
            log::info!("No sections to schedule, skipping allocation.");
            return AllocationOutcome::short_circuit(AllocationStatus::NoSections);
        }

        let mut run = AllocationRun::default();
        for section in sections {
            self.place_section(section, &mut run);
        }

        let requested_sessions = sections.iter().fold(0i64, |total, s| total.saturating_add(s.sessions_per_week));
        log::info!(
            "Allocation finished: {} of {} requested sessions placed, {} sections short.",
            run.bookings.len(),
            requested_sessions,
            run.shortfalls.len()
        );

        AllocationOutcome { status: AllocationStatus::Completed, bookings: run.bookings, shortfalls: run.shortfalls, requested_sessions }
    }

    // Counts are keyed by section id: a later entry reusing an id continues from the
    // earlier entry's count, and gets neither bookings nor a shortfall once it is met.
    fn place_section(&self, section: &Section, run: &mut AllocationRun) {
        let requested = section.sessions_per_week;

        for slot in self.catalog.slot_grid().iter() {
            if run.scheduled_count(section.id) >= requested {
                break;
            }

            if let Some(booking) = self.first_fit_in_slot(section, slot, run) {
                run.commit(booking);
            }
        }

        let placed = run.scheduled_count(section.id);
        if placed < requested {
            log::warn!(
                "Section {} ({}) received {} of {} requested lab sessions.",
                section.id,
                section.booking_purpose(),
                placed,
                requested
            );
            run.shortfalls.push(SectionShortfall { section_id: section.id, requested, placed });
        }
    }

    /// Finds the first lab (and supervisor) able to take `section` in `slot`.
    fn first_fit_in_slot(&self, section: &Section, slot: &TimeSlot, run: &AllocationRun) -> Option<Booking> {
        for lab in self.catalog.labs() {
            if !lab.can_host(section.expected_enrollment) {
                continue;
            }

            if !run.lab_occupancy.is_free(lab.id, slot) {
                continue;
            }

            let Some(faculty) = self.select_faculty(slot, &run.faculty_occupancy) else {
                continue;
            };

            return Some(Booking::new(lab.id, section.id, faculty, *slot, section.booking_purpose()));
        }

        None
    }

    /// First roster member free in `slot`. `None` means the slot is unusable;
    /// an empty roster always yields [`FacultyAssignment::Unassigned`].
    fn select_faculty(&self, slot: &TimeSlot, faculty_occupancy: &OccupancyTable<FacultyId>) -> Option<FacultyAssignment> {
        if !self.catalog.has_faculty() {
            return Some(FacultyAssignment::Unassigned);
        }

        self.catalog.faculty().iter().find(|f| faculty_occupancy.is_free(f.id, slot)).map(|f| FacultyAssignment::Assigned(f.id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::catalog::{faculty::Faculty, lab::Lab};
    use crate::domain::utils::id::CourseId;

    fn lab(id: i64, capacity: i64) -> Lab {
        Lab::new(LabId::new(id), format!("Lab {}", id), capacity)
    }

    fn section(id: i64, enrollment: i64, per_week: i64) -> Section {
        Section::new(SectionId::new(id), CourseId::new(100), format!("S{}", id), "Chemistry")
            .with_expected_enrollment(enrollment)
            .with_sessions_per_week(per_week)
    }

    fn faculty(id: i64) -> Faculty {
        Faculty::new(FacultyId::new(id), format!("Prof {}", id))
    }

    fn slot_of(booking: &Booking) -> (u8, u8) {
        (booking.slot().day(), booking.slot().slot_index())
    }

    #[test]
    fn single_section_takes_earliest_slots() {
        let catalog = ResourceCatalog::new(vec![lab(1, 30)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 25, 2)]);

        assert_eq!(outcome.status, AllocationStatus::Completed);
        assert_eq!(outcome.bookings.len(), 2);
        assert_eq!(slot_of(&outcome.bookings[0]), (0, 0));
        assert_eq!(slot_of(&outcome.bookings[1]), (0, 1));
        for booking in &outcome.bookings {
            assert_eq!(booking.lab_id(), LabId::new(1));
            assert_eq!(booking.faculty(), FacultyAssignment::Unassigned);
            assert_eq!(booking.status().as_str(), "Scheduled");
        }
        assert!(outcome.shortfalls.is_empty());
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn second_section_moves_to_next_slot_of_shared_lab() {
        let catalog = ResourceCatalog::new(vec![lab(1, 40)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, 1), section(2, 20, 1)]);

        assert_eq!(outcome.bookings.len(), 2);
        assert_eq!(outcome.bookings[0].section_id(), SectionId::new(1));
        assert_eq!(slot_of(&outcome.bookings[0]), (0, 0));
        assert_eq!(outcome.bookings[1].section_id(), SectionId::new(2));
        assert_eq!(slot_of(&outcome.bookings[1]), (0, 1));
    }

    #[test]
    fn second_lab_is_used_before_moving_to_later_slot() {
        let catalog = ResourceCatalog::new(vec![lab(1, 40), lab(2, 40)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, 1), section(2, 20, 1)]);

        assert_eq!(outcome.bookings[1].lab_id(), LabId::new(2));
        assert_eq!(slot_of(&outcome.bookings[1]), (0, 0));
    }

    #[test]
    fn one_session_per_slot_even_with_spare_labs() {
        let catalog = ResourceCatalog::new(vec![lab(1, 40), lab(2, 40)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, 2)]);

        let slots: Vec<(u8, u8)> = outcome.bookings.iter().map(slot_of).collect();
        assert_eq!(slots, vec![(0, 0), (0, 1)]);
        assert!(outcome.bookings.iter().all(|b| b.lab_id() == LabId::new(1)));
    }

    #[test]
    fn too_small_labs_are_skipped() {
        let catalog = ResourceCatalog::new(vec![lab(1, 10), lab(2, 35)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 30, 1)]);

        assert_eq!(outcome.bookings.len(), 1);
        assert_eq!(outcome.bookings[0].lab_id(), LabId::new(2));
    }

    #[test]
    fn capacity_equal_to_enrollment_fits() {
        let catalog = ResourceCatalog::new(vec![lab(1, 30)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 30, 1)]);
        assert_eq!(outcome.bookings.len(), 1);
    }

    #[test]
    fn oversized_section_is_a_shortfall_not_an_error() {
        let catalog = ResourceCatalog::new(vec![lab(1, 20)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 50, 2), section(2, 15, 1)]);

        assert_eq!(outcome.bookings.len(), 1);
        assert_eq!(outcome.bookings[0].section_id(), SectionId::new(2));
        assert_eq!(slot_of(&outcome.bookings[0]), (0, 0));
        assert_eq!(outcome.shortfalls, vec![SectionShortfall { section_id: SectionId::new(1), requested: 2, placed: 0 }]);
    }

    #[test]
    fn faculty_are_assigned_in_roster_order_and_never_double_booked() {
        let catalog = ResourceCatalog::new(vec![lab(1, 40), lab(2, 40)], vec![faculty(7), faculty(3)]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, 1), section(2, 20, 1)]);

        assert_eq!(outcome.bookings.len(), 2);
        assert_eq!(outcome.bookings[0].faculty(), FacultyAssignment::Assigned(FacultyId::new(7)));
        assert_eq!(outcome.bookings[1].faculty(), FacultyAssignment::Assigned(FacultyId::new(3)));
        assert_eq!(slot_of(&outcome.bookings[1]), (0, 0));
    }

    #[test]
    fn busy_faculty_pushes_section_to_next_slot() {
        // Two labs but only one supervisor: the second section cannot share slot (0,0).
        let catalog = ResourceCatalog::new(vec![lab(1, 40), lab(2, 40)], vec![faculty(5)]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, 1), section(2, 20, 1)]);

        assert_eq!(slot_of(&outcome.bookings[0]), (0, 0));
        assert_eq!(slot_of(&outcome.bookings[1]), (0, 1));
        assert_eq!(outcome.bookings[1].lab_id(), LabId::new(1));
    }

    #[test]
    fn demand_is_capped_by_the_fifteen_slot_grid() {
        let catalog = ResourceCatalog::new(vec![lab(1, 40)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, 20)]);

        assert_eq!(outcome.bookings.len(), 15);
        assert_eq!(outcome.shortfalls[0].missing(), 5);
    }

    #[test]
    fn huge_session_demand_does_not_overflow_the_total() {
        let catalog = ResourceCatalog::new(vec![lab(1, 40)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, i64::MAX), section(2, 20, 1)]);

        assert_eq!(outcome.bookings.len(), 15);
        assert!(outcome.bookings.iter().all(|b| b.section_id() == SectionId::new(1)));
        assert_eq!(outcome.requested_sessions, i64::MAX);
        assert_eq!(outcome.shortfalls.len(), 2);
        assert_eq!(outcome.shortfalls[0].missing(), i64::MAX - 15);
        assert_eq!(outcome.shortfalls[1].placed, 0);
    }

    #[test]
    fn zero_sessions_requested_places_nothing() {
        let catalog = ResourceCatalog::new(vec![lab(1, 40)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, 0)]);

        assert!(outcome.bookings.is_empty());
        assert!(outcome.shortfalls.is_empty());
        assert_eq!(outcome.message(), Some(crate::domain::allocation::outcome::NO_BOOKINGS_MESSAGE));
    }

    #[test]
    fn sections_sharing_an_id_share_their_session_count() {
        let catalog = ResourceCatalog::new(vec![lab(1, 40)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[section(1, 20, 2), section(1, 20, 2)]);

        assert_eq!(outcome.bookings.len(), 2);
        assert!(outcome.shortfalls.is_empty());
    }

    #[test]
    fn short_circuits_without_labs_or_sections() {
        let no_labs = ResourceCatalog::new(vec![lab(1, 40).with_availability(false)], vec![]);
        let outcome = AllocationEngine::new(&no_labs).allocate(&[section(1, 20, 1)]);
        assert_eq!(outcome.status, AllocationStatus::NoAvailableLabs);
        assert!(outcome.bookings.is_empty());
        assert!(outcome.message().is_some());

        let catalog = ResourceCatalog::new(vec![lab(1, 40)], vec![]);
        let outcome = AllocationEngine::new(&catalog).allocate(&[]);
        assert_eq!(outcome.status, AllocationStatus::NoSections);
    }

    #[test]
    fn no_resource_is_double_booked_in_a_crowded_run() {
        let labs = vec![lab(1, 25), lab(2, 50), lab(3, 35)];
        let roster = vec![faculty(1), faculty(2)];
        let catalog = ResourceCatalog::new(labs.clone(), roster);
        let sections: Vec<Section> = (1..=12).map(|i| section(i, 10 + (i * 7) % 40, 1 + i % 3)).collect();

        let outcome = AllocationEngine::new(&catalog).allocate(&sections);

        let mut lab_slots = HashSet::new();
        let mut faculty_slots = HashSet::new();
        for booking in &outcome.bookings {
            assert!(lab_slots.insert((booking.lab_id(), booking.slot())));
            if let Some(fid) = booking.faculty().faculty_id() {
                assert!(faculty_slots.insert((fid, booking.slot())));
            }

            let booked_lab = labs.iter().find(|l| l.id == booking.lab_id()).unwrap();
            let booked_section = sections.iter().find(|s| s.id == booking.section_id()).unwrap();
            assert!(booked_lab.capacity >= booked_section.expected_enrollment);
        }

        for s in &sections {
            assert!(outcome.bookings_for(s.id).count() as i64 <= s.sessions_per_week);
        }
    }
}
