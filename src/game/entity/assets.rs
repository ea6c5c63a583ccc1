// Per-entity visual and text registries
//
// The core never touches pixels. Images are opaque handles into whatever
// texture store the renderer owns; an entity only keeps the maps.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use super::state::EntityState;

/// Unique identifier for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(u64);

impl AssetId {
    /// Create a new asset ID from a string path
    pub fn from_path(path: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Type-safe handle to an asset owned elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle<T> {
    id: AssetId,
    _phantom: PhantomData<T>,
}

impl<T> AssetHandle<T> {
    pub fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying asset ID
    pub fn id(&self) -> AssetId {
        self.id
    }
}

/// Marker for image assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureAsset;

pub type TextureHandle = AssetHandle<TextureAsset>;

impl TextureHandle {
    /// Handle for the texture at `path`
    pub fn from_path(path: &str) -> Self {
        Self::new(AssetId::from_path(path))
    }
}

/// Something that can tell the renderer which image to show for one state.
pub trait ImageSet: fmt::Debug {
    /// Image for the given facing, or `None` if the set has nothing for it
    fn current_image(&self, is_left: bool) -> Option<TextureHandle>;

    /// Step to the next frame. Static sets ignore this.
    fn advance(&mut self) {}
}

/// Frame list per facing with a manually stepped cursor.
///
/// No timing lives here; whoever drives the animation calls
/// [`ImageSet::advance`].
#[derive(Debug, Clone, Default)]
pub struct AnimationSequence {
    left: Vec<TextureHandle>,
    right: Vec<TextureHandle>,
    current_frame: usize,
    looping: bool,
}

impl AnimationSequence {
    pub fn new(left: Vec<TextureHandle>, right: Vec<TextureHandle>, looping: bool) -> Self {
        Self {
            left,
            right,
            current_frame: 0,
            looping,
        }
    }

    /// Create a looping sequence
    pub fn looping(left: Vec<TextureHandle>, right: Vec<TextureHandle>) -> Self {
        Self::new(left, right, true)
    }

    /// Create a sequence that holds its last frame
    pub fn one_shot(left: Vec<TextureHandle>, right: Vec<TextureHandle>) -> Self {
        Self::new(left, right, false)
    }

    /// Longest of the two frame lists
    pub fn frame_count(&self) -> usize {
        self.left.len().max(self.right.len())
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Go back to the first frame
    pub fn rewind(&mut self) {
        self.current_frame = 0;
    }
}

impl ImageSet for AnimationSequence {
    fn current_image(&self, is_left: bool) -> Option<TextureHandle> {
        let frames = if is_left { &self.left } else { &self.right };
        let last = frames.len().checked_sub(1)?;
        frames.get(self.current_frame.min(last)).copied()
    }

    fn advance(&mut self) {
        let count = self.frame_count();
        if count == 0 {
            return;
        }

        if self.current_frame + 1 < count {
            self.current_frame += 1;
        } else if self.looping {
            self.current_frame = 0;
        }
    }
}

/// The three lookup tables an entity owns
#[derive(Debug, Default)]
pub struct EntityAssets {
    images: HashMap<String, TextureHandle>,
    texts: HashMap<String, String>,
    image_sets: HashMap<EntityState, Box<dyn ImageSet>>,
}

impl EntityAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image. Ignored when either side is missing.
    pub fn add_image(&mut self, id: Option<&str>, image: Option<TextureHandle>) {
        if let (Some(id), Some(image)) = (id, image) {
            self.images.insert(id.to_string(), image);
        }
    }

    pub fn image(&self, id: &str) -> Option<TextureHandle> {
        self.images.get(id).copied()
    }

    /// Register a text. Ignored when either side is missing.
    pub fn add_text(&mut self, id: Option<&str>, text: Option<&str>) {
        if let (Some(id), Some(text)) = (id, text) {
            self.texts.insert(id.to_string(), text.to_string());
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    /// Register the sequence for `state`, replacing any earlier one
    pub fn add_image_set(&mut self, state: EntityState, set: Box<dyn ImageSet>) {
        self.image_sets.insert(state, set);
    }

    pub fn image_set(&self, state: EntityState) -> Option<&dyn ImageSet> {
        self.image_sets.get(&state).map(|set| set.as_ref())
    }

    /// Advance the sequence registered for `state`, if any
    pub fn advance(&mut self, state: EntityState) {
        if let Some(set) = self.image_sets.get_mut(&state) {
            set.advance();
        }
    }

    /// Image for `state` at the given facing
    pub fn visual(&self, state: EntityState, is_left: bool) -> Option<TextureHandle> {
        self.image_sets
            .get(&state)
            .and_then(|set| set.current_image(is_left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(prefix: &str, count: usize) -> Vec<TextureHandle> {
        (0..count)
            .map(|i| TextureHandle::from_path(&format!("{prefix}_{i}.png")))
            .collect()
    }

    #[test]
    fn test_asset_id_from_path() {
        let id1 = AssetId::from_path("gourd/stand_left.png");
        let id2 = AssetId::from_path("gourd/stand_left.png");
        let id3 = AssetId::from_path("gourd/stand_right.png");

        assert_eq!(id1, id2, "Same paths should produce same IDs");
        assert_ne!(id1, id3, "Different paths should produce different IDs");
        assert_eq!(TextureHandle::from_path("gourd/stand_left.png").id(), id1);
    }

    #[test]
    fn test_sequence_picks_list_by_facing() {
        let left = frames("left", 2);
        let right = frames("right", 2);
        let seq = AnimationSequence::looping(left.clone(), right.clone());

        assert_eq!(seq.current_image(true), Some(left[0]));
        assert_eq!(seq.current_image(false), Some(right[0]));
    }

    #[test]
    fn test_sequence_looping_advance() {
        let left = frames("left", 3);
        let mut seq = AnimationSequence::looping(left.clone(), Vec::new());

        seq.advance();
        seq.advance();
        assert_eq!(seq.current_image(true), Some(left[2]));
        seq.advance();
        assert_eq!(seq.current_frame(), 0);
    }

    #[test]
    fn test_sequence_one_shot_holds_last_frame() {
        let left = frames("left", 2);
        let mut seq = AnimationSequence::one_shot(left.clone(), Vec::new());

        for _ in 0..5 {
            seq.advance();
        }
        assert_eq!(seq.current_frame(), 1);
        assert_eq!(seq.current_image(true), Some(left[1]));

        seq.rewind();
        assert_eq!(seq.current_frame(), 0);
    }

    #[test]
    fn test_sequence_empty_facing_has_no_image() {
        let seq = AnimationSequence::looping(frames("left", 1), Vec::new());
        assert_eq!(seq.current_image(false), None);

        let mut empty = AnimationSequence::default();
        empty.advance();
        assert_eq!(empty.current_image(true), None);
    }

    #[test]
    fn test_shorter_facing_clamps_to_its_last_frame() {
        let left = frames("left", 1);
        let right = frames("right", 3);
        let mut seq = AnimationSequence::looping(left.clone(), right);

        seq.advance();
        seq.advance();
        assert_eq!(seq.current_image(true), Some(left[0]));
    }

    #[test]
    fn test_add_image_ignores_missing_parts() {
        let mut assets = EntityAssets::new();
        let handle = TextureHandle::from_path("avatar.png");

        assets.add_image(None, Some(handle));
        assets.add_image(Some("avatar"), None);
        assert_eq!(assets.image("avatar"), None);

        assets.add_image(Some("avatar"), Some(handle));
        assert_eq!(assets.image("avatar"), Some(handle));
        assert_eq!(assets.image("unknown"), None);
    }

    #[test]
    fn test_add_text_ignores_missing_parts() {
        let mut assets = EntityAssets::new();

        assets.add_text(None, Some("hello"));
        assets.add_text(Some("intro"), None);
        assert_eq!(assets.text("intro"), None);

        assets.add_text(Some("intro"), Some("The gourd brothers"));
        assert_eq!(assets.text("intro"), Some("The gourd brothers"));
    }

    #[test]
    fn test_image_set_registration_overwrites() {
        let mut assets = EntityAssets::new();
        let first = frames("first", 1);
        let second = frames("second", 1);

        assets.add_image_set(
            EntityState::Jumping,
            Box::new(AnimationSequence::looping(first.clone(), first)),
        );
        assets.add_image_set(
            EntityState::Jumping,
            Box::new(AnimationSequence::looping(second.clone(), second.clone())),
        );

        assert_eq!(assets.visual(EntityState::Jumping, true), Some(second[0]));
        assert!(assets.image_set(EntityState::Jumping).is_some());
        assert_eq!(assets.visual(EntityState::Defending, true), None);
    }
}
