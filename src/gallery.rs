use crate::models::GeneratedImage;
use serde::Serialize;
use std::collections::HashSet;

/// Session-scoped gallery: the ordered collection of generated images plus
/// the set of currently selected image ids.
///
/// Invariant after every mutation: `selected` only holds ids of images that
/// are still present. Deletions drop the id from both sides in one step.
#[derive(Debug, Default, Serialize)]
pub struct Gallery {
    images: Vec<GeneratedImage>,
    selected: HashSet<String>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Prepends one batch, newest first, preserving the order inside the
    /// batch. Empty batches are a no-op.
    pub fn add_batch(&mut self, batch: Vec<GeneratedImage>) {
        if batch.is_empty() {
            return;
        }
        log::debug!("🖼️  Adding batch of {} image(s) to gallery", batch.len());
        let mut merged = batch;
        merged.append(&mut self.images);
        self.images = merged;
    }

    /// Removes one image by id, dropping it from the selection as well.
    /// Absent ids are a no-op; returns whether anything was removed.
    pub fn delete_one(&mut self, id: &str) -> bool {
        let before = self.images.len();
        self.images.retain(|img| img.id != id);
        self.selected.remove(id);
        before != self.images.len()
    }

    /// Removes every selected image and clears the selection.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.images.len();
        let selected = std::mem::take(&mut self.selected);
        self.images.retain(|img| !selected.contains(&img.id));
        before - self.images.len()
    }

    pub fn clear_all(&mut self) {
        self.images.clear();
        self.selected.clear();
    }

    /// Flips the selection state of one image. Ids that do not correspond
    /// to an existing image are ignored.
    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected.remove(id) && self.images.iter().any(|img| img.id == id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.images.iter().map(|img| img.id.clone()).collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(prompt: &str) -> GeneratedImage {
        GeneratedImage::new(format!("http://test/{}", prompt), prompt)
    }

    fn batch(prompts: &[&str]) -> Vec<GeneratedImage> {
        prompts.iter().map(|p| image(p)).collect()
    }

    fn assert_selection_invariant(gallery: &Gallery) {
        let ids: HashSet<&str> = gallery.images().iter().map(|img| img.id.as_str()).collect();
        assert!(gallery.selected().iter().all(|id| ids.contains(id.as_str())));
    }

    #[test]
    fn test_add_batch_prepends_and_keeps_batch_order() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["old-1", "old-2"]));
        gallery.add_batch(batch(&["new-1", "new-2"]));

        let prompts: Vec<&str> = gallery.images().iter().map(|img| img.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["new-1", "new-2", "old-1", "old-2"]);
    }

    #[test]
    fn test_add_empty_batch_is_a_noop() {
        let mut gallery = Gallery::new();
        gallery.add_batch(vec![]);
        assert!(gallery.is_empty());
    }

    #[test]
    fn test_delete_one_is_idempotent() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["a", "b"]));
        let id = gallery.images()[0].id.clone();

        assert!(gallery.delete_one(&id));
        assert!(!gallery.delete_one(&id));
        assert_eq!(gallery.len(), 1);
        assert_selection_invariant(&gallery);
    }

    #[test]
    fn test_delete_one_drops_selection() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["a", "b"]));
        let id = gallery.images()[0].id.clone();

        gallery.toggle_selection(&id);
        assert_eq!(gallery.selected_count(), 1);

        gallery.delete_one(&id);
        assert_eq!(gallery.selected_count(), 0);
        assert_selection_invariant(&gallery);
    }

    #[test]
    fn test_delete_selected_removes_only_selected() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["a", "b", "c", "d", "e"]));
        let first = gallery.images()[0].id.clone();
        let third = gallery.images()[2].id.clone();

        gallery.toggle_selection(&first);
        gallery.toggle_selection(&third);
        let removed = gallery.delete_selected();

        assert_eq!(removed, 2);
        assert_eq!(gallery.len(), 3);
        assert!(gallery.selected().is_empty());
        assert_selection_invariant(&gallery);
    }

    #[test]
    fn test_clear_all_empties_both_sides() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["a", "b"]));
        gallery.select_all();

        gallery.clear_all();
        assert!(gallery.is_empty());
        assert!(gallery.selected().is_empty());
    }

    #[test]
    fn test_toggle_selection_flips_state() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["a"]));
        let id = gallery.images()[0].id.clone();

        gallery.toggle_selection(&id);
        assert!(gallery.selected().contains(&id));
        gallery.toggle_selection(&id);
        assert!(!gallery.selected().contains(&id));
    }

    #[test]
    fn test_toggle_selection_ignores_unknown_ids() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["a"]));

        gallery.toggle_selection("no-such-id");
        assert!(gallery.selected().is_empty());
        assert_selection_invariant(&gallery);
    }

    #[test]
    fn test_select_all_then_deselect_all_round_trip() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["a", "b", "c"]));

        gallery.select_all();
        assert_eq!(gallery.selected_count(), 3);

        // New images arriving between the two calls must not break it.
        gallery.add_batch(batch(&["d"]));
        gallery.deselect_all();
        assert!(gallery.selected().is_empty());
    }

    #[test]
    fn test_invariant_holds_under_mixed_mutations() {
        let mut gallery = Gallery::new();
        gallery.add_batch(batch(&["a", "b", "c", "d"]));
        let ids: Vec<String> = gallery.images().iter().map(|img| img.id.clone()).collect();

        gallery.toggle_selection(&ids[0]);
        gallery.toggle_selection(&ids[2]);
        gallery.delete_one(&ids[2]);
        assert_selection_invariant(&gallery);

        gallery.toggle_selection(&ids[3]);
        gallery.delete_selected();
        assert_selection_invariant(&gallery);

        gallery.select_all();
        gallery.delete_one(&ids[1]);
        assert_selection_invariant(&gallery);

        gallery.clear_all();
        assert_selection_invariant(&gallery);
    }
}
