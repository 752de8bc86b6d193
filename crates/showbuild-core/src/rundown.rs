//! Editing state of one episode rundown.
//!
//! The session owns the ordered item collection, the selection and edit
//! focus, the editor buffers and the panel layout. The vector order is the
//! rundown order; each item's `position` is renumbered from it after every
//! structural change.
//!
//! Selection and edit focus are plain indices. They are stored as given,
//! without bounds checks; [`RundownSession::selected_item`] and
//! [`RundownSession::editing_item`] return `None` when the index points past
//! the collection.

use showbuild_models::{EpisodeId, ItemDuration, RundownItem};
use tracing::{debug, info, warn};

use crate::cue::{self, Cue};
use crate::duration;
use crate::error::{CoreError, Result};
use crate::remote::RundownRepository;
use crate::validation::{validate_duration, validate_slug, validate_title};

/// Spacing between renumbered item positions.
const POSITION_STEP: i64 = 10;

/// Width of the rundown side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelWidth {
    Narrow,
    #[default]
    Wide,
}

impl PanelWidth {
    pub fn px(self) -> u32 {
        match self {
            PanelWidth::Narrow => 300,
            PanelWidth::Wide => 520,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelWidth::Narrow => PanelWidth::Wide,
            PanelWidth::Wide => PanelWidth::Narrow,
        }
    }
}

/// Active editor pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Script,
    Scratch,
    Metadata,
}

impl EditorMode {
    pub const ALL: [EditorMode; 3] = [EditorMode::Script, EditorMode::Scratch, EditorMode::Metadata];

    pub fn title(self) -> &'static str {
        match self {
            EditorMode::Script => "Script",
            EditorMode::Scratch => "Scratch",
            EditorMode::Metadata => "Metadata",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EditorMode::Script => "mdi-script-text",
            EditorMode::Scratch => "mdi-pencil",
            EditorMode::Metadata => "mdi-cog",
        }
    }
}

/// Result of committing the rundown to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Committed,
    Failed,
}

/// In-memory editing state of a rundown.
#[derive(Debug, Clone)]
pub struct RundownSession {
    episode: Option<EpisodeId>,
    items: Vec<RundownItem>,
    selected: Option<usize>,
    editing: Option<usize>,
    dirty: bool,
    panel_visible: bool,
    panel_width: PanelWidth,
    editor_mode: EditorMode,
    script_content: String,
    scratch_content: String,
}

impl Default for RundownSession {
    fn default() -> Self {
        Self {
            episode: None,
            items: Vec::new(),
            selected: None,
            editing: None,
            dirty: false,
            panel_visible: true,
            panel_width: PanelWidth::default(),
            editor_mode: EditorMode::default(),
            script_content: String::new(),
            scratch_content: String::new(),
        }
    }
}

impl RundownSession {
    /// Creates an empty session not bound to an episode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session for an episode.
    pub fn for_episode(episode: EpisodeId) -> Self {
        Self {
            episode: Some(episode),
            ..Self::default()
        }
    }

    pub fn episode(&self) -> Option<&EpisodeId> {
        self.episode.as_ref()
    }

    pub fn items(&self) -> &[RundownItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- selection and edit focus ---

    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Puts the item under edit focus and selects it.
    pub fn begin_edit(&mut self, index: usize) {
        self.editing = Some(index);
        self.selected = Some(index);
    }

    /// Clears both the selection and the edit focus.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.editing = None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    pub fn selected_item(&self) -> Option<&RundownItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn editing_item(&self) -> Option<&RundownItem> {
        self.editing.and_then(|i| self.items.get(i))
    }

    // --- collection mutations ---

    /// Validates and appends an item, returning its index.
    pub fn insert(&mut self, item: RundownItem) -> Result<usize> {
        self.check_item(&item, None)?;

        debug!(slug = %item.slug, item_type = %item.item_type, "Inserting rundown item");
        self.items.push(item);
        self.renumber();
        self.dirty = true;
        Ok(self.items.len() - 1)
    }

    /// Removes and returns the item at `index`.
    ///
    /// Selection and edit focus are cleared when they pointed at the removed
    /// item and shifted when they pointed past it.
    pub fn remove(&mut self, index: usize) -> Result<RundownItem> {
        self.check_index(index)?;
        let removed = self.items.remove(index);

        let shift = |slot: Option<usize>| match slot {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other,
        };
        self.selected = shift(self.selected);
        self.editing = shift(self.editing);

        self.renumber();
        self.dirty = true;
        debug!(slug = %removed.slug, index, "Removed rundown item");
        Ok(removed)
    }

    /// Applies an edit to one item.
    ///
    /// The edited item goes through the same checks as [`Self::insert`];
    /// on a violation the item is left unchanged.
    pub fn update_item<F>(&mut self, index: usize, edit: F) -> Result<()>
    where
        F: FnOnce(&mut RundownItem),
    {
        self.check_index(index)?;
        let mut edited = self.items[index].clone();
        edit(&mut edited);
        self.check_item(&edited, Some(index))?;

        self.items[index] = edited;
        self.renumber();
        self.dirty = true;
        Ok(())
    }

    /// Field rules plus slug uniqueness against every item except `skip`.
    fn check_item(&self, item: &RundownItem, skip: Option<usize>) -> Result<()> {
        validate_slug(&item.slug)?;
        validate_title(&item.title)?;
        if let Some(ItemDuration::Text(text)) = &item.duration {
            validate_duration(text)?;
        }
        let taken = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| Some(i) != skip && existing.slug == item.slug);
        if taken {
            return Err(CoreError::invalid(format!(
                "Slug '{}' is already used in this rundown",
                item.slug
            )));
        }
        Ok(())
    }

    /// Moves the item at `from` to `to`.
    ///
    /// Selection and edit focus follow the moved item; an index pointing at
    /// another item keeps pointing at that same item.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }

        let item = self.items.remove(from);
        self.items.insert(to, item);

        let follow = |slot: Option<usize>| {
            slot.map(|i| {
                if i == from {
                    to
                } else if from < i && i <= to {
                    i - 1
                } else if to <= i && i < from {
                    i + 1
                } else {
                    i
                }
            })
        };
        self.selected = follow(self.selected);
        self.editing = follow(self.editing);

        self.renumber();
        self.dirty = true;
        debug!(from, to, "Reordered rundown item");
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(CoreError::invalid(format!(
                "Item index {} is out of range ({} items)",
                index,
                self.items.len()
            )))
        }
    }

    fn renumber(&mut self) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.position = (i as i64 + 1) * POSITION_STEP;
        }
    }

    // --- editor buffers ---

    pub fn editor_mode(&self) -> EditorMode {
        self.editor_mode
    }

    pub fn set_editor_mode(&mut self, mode: EditorMode) {
        self.editor_mode = mode;
    }

    pub fn script_content(&self) -> &str {
        &self.script_content
    }

    pub fn scratch_content(&self) -> &str {
        &self.scratch_content
    }

    pub fn set_script_content(&mut self, content: impl Into<String>) {
        self.script_content = content.into();
        self.dirty = true;
    }

    pub fn set_scratch_content(&mut self, content: impl Into<String>) {
        self.scratch_content = content.into();
        self.dirty = true;
    }

    /// Composes a cue and splices it into the script at `caret`.
    pub fn insert_cue(&mut self, cue: &Cue, caret: Option<usize>) {
        let markup = cue::compose(cue);
        self.script_content = cue::insert_at_caret(&self.script_content, &markup, caret);
        self.dirty = true;
    }

    // --- dirty tracking and persistence ---

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Commits the rundown order to the repository.
    ///
    /// The unsaved-changes flag is cleared only when the commit succeeds.
    pub async fn save(&mut self, repo: &dyn RundownRepository) -> SaveOutcome {
        let Some(episode) = self.episode.as_ref() else {
            warn!("No episode loaded, nothing to save");
            return SaveOutcome::Failed;
        };

        match repo.save(episode, &self.items).await {
            Ok(()) => {
                self.dirty = false;
                info!(episode = %episode, items = self.items.len(), "Rundown saved");
                SaveOutcome::Committed
            }
            Err(e) => {
                warn!(episode = %episode, error = %e, "Failed to save rundown");
                SaveOutcome::Failed
            }
        }
    }

    /// Replaces the items with the episode's rundown from the repository.
    ///
    /// On failure the session is left untouched.
    pub async fn load(&mut self, repo: &dyn RundownRepository, episode: EpisodeId) -> Result<()> {
        let mut items = repo.fetch(&episode).await?;
        items.sort_by_key(|item| item.position);

        info!(episode = %episode, items = items.len(), "Rundown loaded");
        self.items = items;
        self.episode = Some(episode);
        self.selected = None;
        self.editing = None;
        self.dirty = false;
        Ok(())
    }

    // --- layout ---

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn panel_width(&self) -> PanelWidth {
        self.panel_width
    }

    pub fn toggle_panel(&mut self) {
        self.panel_visible = !self.panel_visible;
    }

    pub fn toggle_width(&mut self) {
        self.panel_width = self.panel_width.toggled();
    }

    pub fn panel_width_px(&self) -> u32 {
        self.panel_width.px()
    }

    /// CSS width of the rundown header.
    pub fn header_width(&self) -> String {
        if self.panel_visible {
            format!("{}px", self.panel_width_px())
        } else {
            "0px".to_string()
        }
    }

    /// CSS width of the cue toolbar.
    pub fn cue_toolbar_width(&self) -> String {
        if self.panel_visible {
            format!("calc(100% - {}px)", self.panel_width_px())
        } else {
            "100%".to_string()
        }
    }

    /// Total running time of the current items.
    pub fn total_duration(&self) -> String {
        duration::aggregate(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::CueDetail;
    use crate::remote::testing::MockRepository;
    use showbuild_models::ItemType;

    fn item(slug: &str, duration: &str) -> RundownItem {
        RundownItem::new(ItemType::Segment, slug, format!("Item {}", slug)).with_duration(duration)
    }

    fn session_with(slugs: &[&str]) -> RundownSession {
        let mut session = RundownSession::for_episode(EpisodeId::from_string("0237"));
        for slug in slugs {
            session.insert(item(slug, "1:00")).unwrap();
        }
        session
    }

    fn slugs(session: &RundownSession) -> Vec<&str> {
        session.items().iter().map(|i| i.slug.as_str()).collect()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = RundownSession::new();
        assert!(session.is_empty());
        assert!(!session.has_unsaved_changes());
        assert!(session.panel_visible());
        assert_eq!(session.panel_width(), PanelWidth::Wide);
        assert_eq!(session.editor_mode(), EditorMode::Script);
        assert_eq!(session.total_duration(), "0:00");
    }

    #[test]
    fn test_insert_validates_and_marks_dirty() {
        let mut session = RundownSession::new();
        let index = session.insert(item("cold-open", "0:30")).unwrap();

        assert_eq!(index, 0);
        assert!(session.has_unsaved_changes());
        assert_eq!(session.items()[0].position, 10);
    }

    #[test]
    fn test_insert_rejects_bad_slug() {
        let mut session = RundownSession::new();
        let err = session.insert(item("AB", "1:00")).unwrap_err();
        assert_eq!(err.to_string(), "Slug must be at least 3 characters");
        assert!(session.is_empty());
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_insert_rejects_bad_duration_and_duplicate_slug() {
        let mut session = session_with(&["opening"]);
        assert!(session.insert(item("weather", "90")).is_err());
        assert!(session.insert(item("opening", "1:00")).is_err());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_total_duration_tracks_collection() {
        let mut session = RundownSession::new();
        session.insert(item("aaa", "1:30")).unwrap();
        session.insert(item("bbb", "0:45")).unwrap();
        session.insert(item("ccc", "2:00")).unwrap();
        assert_eq!(session.total_duration(), "4:15");

        session.remove(2).unwrap();
        assert_eq!(session.total_duration(), "2:15");
    }

    #[test]
    fn test_begin_edit_also_selects() {
        let mut session = session_with(&["aaa", "bbb"]);
        session.begin_edit(1);
        assert_eq!(session.selected_index(), Some(1));
        assert_eq!(session.editing_item().map(|i| i.slug.as_str()), Some("bbb"));

        session.clear_selection();
        assert!(session.selected_item().is_none());
        assert!(session.editing_item().is_none());
    }

    #[test]
    fn test_out_of_range_selection_is_kept() {
        let mut session = session_with(&["aaa"]);
        session.select(5);
        assert_eq!(session.selected_index(), Some(5));
        assert!(session.selected_item().is_none());
    }

    #[test]
    fn test_reorder_moves_item_and_focus() {
        let mut session = session_with(&["aaa", "bbb", "ccc", "ddd"]);
        session.begin_edit(0);
        session.mark_dirty();

        session.reorder(0, 2).unwrap();

        assert_eq!(slugs(&session), vec!["bbb", "ccc", "aaa", "ddd"]);
        assert_eq!(session.selected_index(), Some(2));
        assert_eq!(session.editing_item().map(|i| i.slug.as_str()), Some("aaa"));
        let positions: Vec<i64> = session.items().iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_reorder_keeps_focus_on_other_item() {
        let mut session = session_with(&["aaa", "bbb", "ccc"]);
        session.select(2);

        session.reorder(2, 0).unwrap();
        assert_eq!(session.selected_item().map(|i| i.slug.as_str()), Some("ccc"));

        session.select(1);
        session.reorder(2, 0).unwrap();
        assert_eq!(slugs(&session), vec!["bbb", "ccc", "aaa"]);
        assert_eq!(session.selected_item().map(|i| i.slug.as_str()), Some("aaa"));
    }

    #[test]
    fn test_reorder_out_of_range() {
        let mut session = session_with(&["aaa", "bbb"]);
        assert!(matches!(session.reorder(0, 2), Err(CoreError::Validation(_))));
        assert!(session.reorder(1, 1).is_ok());
        assert_eq!(slugs(&session), vec!["aaa", "bbb"]);
    }

    #[test]
    fn test_remove_shifts_selection() {
        let mut session = session_with(&["aaa", "bbb", "ccc"]);
        session.select(2);
        session.remove(0).unwrap();
        assert_eq!(session.selected_item().map(|i| i.slug.as_str()), Some("ccc"));

        session.begin_edit(0);
        session.remove(0).unwrap();
        assert!(session.editing_index().is_none());
        assert!(session.remove(3).is_err());
    }

    #[test]
    fn test_update_item_marks_dirty() {
        let mut session = session_with(&["aaa"]);
        session.insert(item("bbb", "0:10")).unwrap();
        session.dirty = false;

        session.update_item(1, |i| i.title = "Renamed".into()).unwrap();
        assert!(session.has_unsaved_changes());
        assert_eq!(session.items()[1].title, "Renamed");
        assert!(session.update_item(9, |_| {}).is_err());
    }

    #[test]
    fn test_update_item_rejects_duplicate_slug() {
        let mut session = session_with(&["aaa", "bbb"]);
        session.dirty = false;

        let err = session
            .update_item(1, |i| i.slug = "aaa".into())
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(slugs(&session), ["aaa", "bbb"]);
        assert!(!session.has_unsaved_changes());

        // Keeping its own slug is not a collision.
        session.update_item(1, |i| i.slug = "bbb".into()).unwrap();
    }

    #[test]
    fn test_update_item_rejects_invalid_fields() {
        let mut session = session_with(&["aaa"]);

        assert!(session.update_item(0, |i| i.slug = "BAD SLUG".into()).is_err());
        assert!(session.update_item(0, |i| i.title = "ab".into()).is_err());
        assert!(session
            .update_item(0, |i| i.duration = Some("ninety".into()))
            .is_err());

        let stored = &session.items()[0];
        assert_eq!(stored.slug, "aaa");
        assert_eq!(stored.title, "Item aaa");
    }

    #[test]
    fn test_insert_cue_into_script() {
        let mut session = RundownSession::new();
        session.set_script_content("Intro line");
        let cue = Cue::new(CueDetail::Gfx, "lower-third", "Name").with_duration("0:05");

        session.insert_cue(&cue, None);

        assert!(session.script_content().starts_with("Intro line\n\n### GFX: lower-third"));
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_layout_widths() {
        let mut session = RundownSession::new();
        assert_eq!(session.header_width(), "520px");
        assert_eq!(session.cue_toolbar_width(), "calc(100% - 520px)");

        session.toggle_width();
        assert_eq!(session.panel_width_px(), 300);
        assert_eq!(session.cue_toolbar_width(), "calc(100% - 300px)");

        session.toggle_panel();
        assert_eq!(session.header_width(), "0px");
        assert_eq!(session.cue_toolbar_width(), "100%");
    }

    #[test]
    fn test_editor_mode_icons() {
        let icons: Vec<_> = EditorMode::ALL.iter().map(|m| m.icon()).collect();
        assert_eq!(icons, vec!["mdi-script-text", "mdi-pencil", "mdi-cog"]);
    }

    #[tokio::test]
    async fn test_save_commits_and_clears_dirty() {
        let repo = MockRepository::default();
        let mut session = session_with(&["aaa", "bbb"]);

        assert_eq!(session.save(&repo).await, SaveOutcome::Committed);
        assert!(!session.has_unsaved_changes());
        assert_eq!(repo.saved.lock().unwrap()[0].len(), 2);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_dirty() {
        let repo = MockRepository::default();
        repo.set_failing(true);
        let mut session = session_with(&["aaa"]);

        assert_eq!(session.save(&repo).await, SaveOutcome::Failed);
        assert!(session.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_save_without_episode_fails() {
        let repo = MockRepository::default();
        let mut session = RundownSession::new();
        assert_eq!(session.save(&repo).await, SaveOutcome::Failed);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_load_sorts_by_position_and_resets_state() {
        let mut late = item("late", "1:00");
        late.position = 20;
        let mut early = item("early", "0:30");
        early.position = 10;
        let repo = MockRepository::with_items(vec![late, early]);

        let mut session = session_with(&["old"]);
        session.begin_edit(0);
        session
            .load(&repo, EpisodeId::from_string("0238"))
            .await
            .unwrap();

        assert_eq!(slugs(&session), vec!["early", "late"]);
        assert_eq!(session.episode().map(|e| e.as_str()), Some("0238"));
        assert!(session.selected_index().is_none());
        assert!(!session.has_unsaved_changes());
        assert_eq!(session.total_duration(), "1:30");
    }

    #[tokio::test]
    async fn test_failed_load_keeps_session() {
        let repo = MockRepository::default();
        repo.set_failing(true);
        let mut session = session_with(&["aaa"]);

        assert!(session.load(&repo, EpisodeId::from_string("0238")).await.is_err());
        assert_eq!(slugs(&session), vec!["aaa"]);
    }
}
