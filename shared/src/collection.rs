//! # Collection View
//!
//! Derives what the employee list shows from the loaded records, the search
//! query, the current page and the checkbox selection.
//!
//! The rows on screen are fully determined by (records, query, page, page
//! size). Identifiers that are not in the loaded records are ignored by every
//! operation, so stale UI events cannot corrupt the selection.

use std::collections::BTreeSet;

use crate::employee::{Employee, EmployeeId};

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView {
    records: Vec<Employee>,
    query: String,
    /// Indices into `records` matching `query`, in record order
    filtered: Vec<usize>,
    current_page: usize,
    selected: BTreeSet<EmployeeId>,
}

impl Default for CollectionView {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
            current_page: 1,
            selected: BTreeSet::new(),
        }
    }
}

impl CollectionView {
    pub fn new(records: Vec<Employee>) -> Self {
        let mut view = Self::default();
        view.set_records(records);
        view
    }

    /// Replace the working set. Selected identifiers that are no longer loaded
    /// are dropped; the current page is kept.
    pub fn set_records(&mut self, records: Vec<Employee>) {
        self.records = records;
        let loaded: BTreeSet<EmployeeId> = self.records.iter().filter_map(|employee| employee.id).collect();
        self.selected.retain(|id| loaded.contains(id));
        self.refilter();
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// Set the search text and go back to the first page
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_lowercase();
        self.current_page = 1;
        self.refilter();
    }

    /// The active query, already case-folded
    pub fn query(&self) -> &str {
        &self.query
    }

    fn refilter(&mut self) {
        let query = &self.query;
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, employee)| query.is_empty() || employee.search_text().contains(query.as_str()))
            .map(|(index, _)| index)
            .collect();
    }

    /// Records matching the query, in their original order
    pub fn filtered_view(&self) -> Vec<&Employee> {
        self.filtered.iter().map(|&index| &self.records[index]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Rows of 1-based page `n`. Pages outside the filtered range are empty.
    pub fn page(&self, n: usize, page_size: usize) -> Vec<&Employee> {
        if n == 0 || page_size == 0 {
            return Vec::new();
        }

        let Some(start) = (n - 1).checked_mul(page_size) else {
            return Vec::new();
        };

        self.filtered
            .iter()
            .skip(start)
            .take(page_size)
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Number of pages; zero when nothing matches so pagination can be hidden
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.filtered.len().div_ceil(page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn current_rows(&self, page_size: usize) -> Vec<&Employee> {
        self.page(self.current_page, page_size)
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self, page_size: usize) -> bool {
        self.current_page < self.page_count(page_size)
    }

    /// Flip the checkbox state of `id`; unknown identifiers are ignored
    pub fn toggle_selection(&mut self, id: EmployeeId) {
        if !self.contains(id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Set the checkbox state of `id` explicitly; unknown identifiers are ignored
    pub fn set_selected(&mut self, id: EmployeeId, selected: bool) {
        if !self.contains(id) {
            return;
        }
        if selected {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn is_selected(&self, id: EmployeeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_ids(&self) -> &BTreeSet<EmployeeId> {
        &self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|employee| employee.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(count: usize) -> Vec<Employee> {
        (0..count)
            .map(|i| Employee {
                id: Some(EmployeeId(i as u64 + 1)),
                first_name: format!("Employee {}", i + 1),
                last_name: "Test".to_string(),
                department: "Tech".to_string(),
                position: "Junior".to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn named(id: u64, first: &str, last: &str, department: &str, position: &str) -> Employee {
        Employee {
            id: Some(EmployeeId(id)),
            first_name: first.to_string(),
            last_name: last.to_string(),
            department: department.to_string(),
            position: position.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_twenty_employees_fill_two_pages() {
        let view = CollectionView::new(synthetic(20));

        assert_eq!(view.page(1, 15).len(), 15);
        assert_eq!(view.page(2, 15).len(), 5);
        assert_eq!(view.page(3, 15).len(), 0);
        assert_eq!(view.page_count(15), 2);
        assert_eq!(view.page(2, 15)[0].id, Some(EmployeeId(16)));
    }

    #[test]
    fn test_unmatched_query_has_no_pages() {
        let mut view = CollectionView::new(synthetic(20));
        view.set_query("engineer");

        assert!(view.filtered_view().is_empty());
        assert_eq!(view.page_count(15), 0);
        assert!(!view.has_next_page(15));
        assert!(!view.has_previous_page());
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let view = CollectionView::new(synthetic(4));
        let ids: Vec<_> = view.filtered_view().iter().map(|e| e.id.unwrap().value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_matches_any_searchable_field_case_insensitively() {
        let view_records = vec![
            named(1, "Ada", "Lovelace", "Analytics", "Senior"),
            named(2, "Grace", "Hopper", "Tech", "Medior"),
            named(3, "Alan", "Turing", "Tech", "Junior"),
        ];
        let mut view = CollectionView::new(view_records);

        view.set_query("TECH");
        assert_eq!(view.filtered_len(), 2);

        view.set_query("hopper");
        assert_eq!(view.filtered_view()[0].first_name, "Grace");

        view.set_query("senior");
        assert_eq!(view.filtered_view()[0].first_name, "Ada");

        // Spans the separator between first and last name
        view.set_query("alan tur");
        assert_eq!(view.filtered_len(), 1);
    }

    #[test]
    fn test_query_ignores_contact_fields() {
        let mut employee = named(1, "Ada", "Lovelace", "Analytics", "Senior");
        employee.email = "countess@example.com".to_string();
        let mut view = CollectionView::new(vec![employee]);

        view.set_query("countess");
        assert_eq!(view.filtered_len(), 0);
    }

    #[test]
    fn test_changing_query_resets_page() {
        let mut view = CollectionView::new(synthetic(40));
        view.set_current_page(3);
        assert_eq!(view.current_page(), 3);

        view.set_query("employee");
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_new_records_keep_page_and_refilter() {
        let mut view = CollectionView::new(synthetic(5));
        view.set_query("employee 1");
        view.set_current_page(2);

        view.set_records(synthetic(12));
        assert_eq!(view.current_page(), 2);
        // "Employee 1", "Employee 10", "Employee 11", "Employee 12"
        assert_eq!(view.filtered_len(), 4);
    }

    #[test]
    fn test_current_page_is_at_least_one() {
        let mut view = CollectionView::default();
        view.set_current_page(0);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_degenerate_page_requests_are_empty() {
        let view = CollectionView::new(synthetic(3));
        assert!(view.page(0, 10).is_empty());
        assert!(view.page(1, 0).is_empty());
        assert!(view.page(usize::MAX, usize::MAX).is_empty());
        assert_eq!(view.page_count(0), 0);
    }

    #[test]
    fn test_next_and_previous_availability() {
        let mut view = CollectionView::new(synthetic(20));
        assert!(!view.has_previous_page());
        assert!(view.has_next_page(15));

        view.set_current_page(2);
        assert!(view.has_previous_page());
        assert!(!view.has_next_page(15));
        assert_eq!(view.current_rows(15).len(), 5);
    }

    #[test]
    fn test_toggle_selection_round_trip() {
        let mut view = CollectionView::new(synthetic(3));
        view.toggle_selection(EmployeeId(2));
        let before = view.selected_ids().clone();

        view.toggle_selection(EmployeeId(3));
        assert!(view.is_selected(EmployeeId(3)));
        view.toggle_selection(EmployeeId(3));

        assert_eq!(view.selected_ids(), &before);
        assert!(view.is_selected(EmployeeId(2)));
    }

    #[test]
    fn test_set_selected_is_idempotent() {
        let mut view = CollectionView::new(synthetic(3));
        view.set_selected(EmployeeId(1), true);
        view.set_selected(EmployeeId(1), true);
        assert_eq!(view.selected_ids().len(), 1);

        view.set_selected(EmployeeId(1), false);
        view.set_selected(EmployeeId(1), false);
        assert!(view.selected_ids().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut view = CollectionView::new(synthetic(3));
        view.toggle_selection(EmployeeId(999));
        view.set_selected(EmployeeId(998), true);

        assert!(view.selected_ids().is_empty());
        assert!(!view.is_selected(EmployeeId(999)));
    }

    #[test]
    fn test_reload_prunes_selection() {
        let mut view = CollectionView::new(synthetic(3));
        view.toggle_selection(EmployeeId(1));
        view.toggle_selection(EmployeeId(3));

        let remaining: Vec<Employee> = synthetic(3).into_iter().filter(|e| e.id != Some(EmployeeId(3))).collect();
        view.set_records(remaining);

        assert!(view.is_selected(EmployeeId(1)));
        assert!(!view.is_selected(EmployeeId(3)));
    }

    #[test]
    fn test_clear_selection() {
        let mut view = CollectionView::new(synthetic(3));
        view.toggle_selection(EmployeeId(1));
        view.clear_selection();
        assert!(view.selected_ids().is_empty());
    }
}
