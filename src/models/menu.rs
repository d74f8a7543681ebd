//! Menu catalog and order selection.
//!
//! The menu is the catalog of orderable items; the selection is the
//! caller-owned set of items picked for the next scheduling run. Neither is
//! touched by the scheduler: it only receives [`Selection::snapshot`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Job;

/// Errors from menu-driven selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The requested item is not on the menu.
    #[error("unknown menu item '{id}'")]
    UnknownItem { id: String },
}

/// An ordered catalog of orderable items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<Job>,
}

impl Menu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference restaurant menu (preparation times in minutes).
    pub fn restaurant() -> Self {
        let entries: [(&str, &str, &str, i64); 9] = [
            ("1", "Tea", "Hot Drinks", 2),
            ("2", "Coffee", "Hot Drinks", 3),
            ("3", "Hot Chocolate", "Hot Drinks", 4),
            ("4", "Cold Coffee", "Cold Drinks", 5),
            ("5", "Juice", "Cold Drinks", 2),
            ("6", "Smoothie", "Cold Drinks", 4),
            ("7", "Biriyani", "Rice", 25),
            ("8", "Fried Rice", "Rice", 15),
            ("9", "Pulao", "Rice", 20),
        ];

        entries
            .into_iter()
            .fold(Self::new(), |menu, (id, name, category, minutes)| {
                menu.with_item(
                    Job::new(id)
                        .with_name(name)
                        .with_category(category)
                        .with_service_time(minutes),
                )
            })
    }

    /// Adds an item. An item with an existing ID replaces the old entry.
    pub fn with_item(mut self, item: Job) -> Self {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        self
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Job] {
        &self.items
    }

    /// Looks up an item by ID.
    pub fn get(&self, id: &str) -> Option<&Job> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Items belonging to a category, in catalog order.
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Job> + 'a {
        self.items.iter().filter(move |i| i.category == category)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The set of currently selected jobs, keyed by ID, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    jobs: Vec<Job>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the job if absent. Returns `false` if its ID was already selected.
    pub fn insert(&mut self, job: Job) -> bool {
        if self.contains(&job.id) {
            return false;
        }
        self.jobs.push(job);
        true
    }

    /// Removes a job by ID, returning it if it was selected.
    pub fn remove(&mut self, id: &str) -> Option<Job> {
        let pos = self.jobs.iter().position(|j| j.id == id)?;
        Some(self.jobs.remove(pos))
    }

    /// Selects the job if absent, deselects it if present.
    ///
    /// Returns whether the job is selected afterwards.
    pub fn toggle(&mut self, job: Job) -> bool {
        if self.remove(&job.id).is_some() {
            false
        } else {
            self.jobs.push(job);
            true
        }
    }

    /// Toggles a menu item by ID.
    pub fn toggle_from(&mut self, menu: &Menu, id: &str) -> Result<bool, SelectionError> {
        let item = menu
            .get(id)
            .ok_or_else(|| SelectionError::UnknownItem { id: id.to_string() })?;
        Ok(self.toggle(item.clone()))
    }

    /// Whether a job ID is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.jobs.iter().any(|j| j.id == id)
    }

    /// Number of selected jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.jobs.clear();
    }

    /// Selected jobs in selection order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Immutable copy of the selection for a scheduling run.
    pub fn snapshot(&self) -> Vec<Job> {
        self.jobs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_menu() {
        let menu = Menu::restaurant();
        assert_eq!(menu.len(), 9);
        assert_eq!(menu.categories(), vec!["Hot Drinks", "Cold Drinks", "Rice"]);

        let biriyani = menu.get("7").unwrap();
        assert_eq!(biriyani.name, "Biriyani");
        assert_eq!(biriyani.service_time, 25);

        let rice: Vec<&str> = menu.items_in("Rice").map(|i| i.name.as_str()).collect();
        assert_eq!(rice, vec!["Biriyani", "Fried Rice", "Pulao"]);
    }

    #[test]
    fn test_menu_replaces_same_id() {
        let menu = Menu::new()
            .with_item(Job::new("a").with_service_time(1))
            .with_item(Job::new("a").with_service_time(9));
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.get("a").unwrap().service_time, 9);
    }

    #[test]
    fn test_selection_toggle() {
        let menu = Menu::restaurant();
        let mut sel = Selection::new();

        assert!(sel.toggle_from(&menu, "2").unwrap());
        assert!(sel.toggle_from(&menu, "1").unwrap());
        assert_eq!(sel.len(), 2);

        // Second toggle deselects
        assert!(!sel.toggle_from(&menu, "2").unwrap());
        assert!(!sel.contains("2"));
        assert!(sel.contains("1"));
    }

    #[test]
    fn test_selection_unknown_item() {
        let menu = Menu::restaurant();
        let mut sel = Selection::new();
        let err = sel.toggle_from(&menu, "99").unwrap_err();
        assert_eq!(err, SelectionError::UnknownItem { id: "99".into() });
        assert!(sel.is_empty());
    }

    #[test]
    fn test_selection_keeps_insertion_order() {
        let mut sel = Selection::new();
        assert!(sel.insert(Job::new("c")));
        assert!(sel.insert(Job::new("a")));
        assert!(!sel.insert(Job::new("c")));
        assert!(sel.insert(Job::new("b")));

        let ids: Vec<String> = sel.snapshot().into_iter().map(|j| j.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);

        let borrowed: Vec<&str> = sel.jobs().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(borrowed, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut sel = Selection::new();
        sel.insert(Job::new("a"));
        let snap = sel.snapshot();
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut sel = Selection::new();
        sel.insert(Job::new("a").with_service_time(3));
        assert_eq!(sel.remove("a").map(|j| j.service_time), Some(3));
        assert!(sel.remove("a").is_none());
    }
}
