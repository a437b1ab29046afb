use std::collections::HashMap;

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use thiserror::Error;

/// Errors that can occur during texture generation
#[derive(Error, Debug)]
pub enum TextureGenerationError {
    #[error("Invalid texture dimensions {0}x{1}")]
    InvalidDimensions(usize, usize),
}

type CacheKey = (String, u64);

/// Owns the GPU textures for the canvas backdrop and the gallery thumbnails.
///
/// Textures are keyed by name and a version; a new version of the same name
/// gets a new texture and the old one ages out.
pub struct TextureManager {
    texture_cache: HashMap<CacheKey, TextureHandle>,
    /// Tracks when each texture was last used
    last_used: HashMap<CacheKey, u64>,
    /// Current frame counter for LRU tracking
    current_frame: u64,
    max_cache_size: usize,
}

impl TextureManager {
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size,
        }
    }

    /// Increments the frame counter, should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Gets or creates the texture for `name` at `version`.
    pub fn get_or_create_texture<F>(
        &mut self,
        name: &str,
        version: u64,
        generator: F,
        ctx: &Context,
    ) -> Result<TextureId, TextureGenerationError>
    where
        F: FnOnce() -> Result<ColorImage, TextureGenerationError>,
    {
        let cache_key = (name.to_owned(), version);

        if let Some(handle) = self.texture_cache.get(&cache_key) {
            self.last_used.insert(cache_key, self.current_frame);
            return Ok(handle.id());
        }

        // stale versions of this name are never requested again
        self.invalidate(name);

        let image = generator()?;
        let [w, h] = image.size;
        if w == 0 || h == 0 {
            return Err(TextureGenerationError::InvalidDimensions(w, h));
        }

        let handle = ctx.load_texture(format!("{name}_v{version}"), image, TextureOptions::LINEAR);
        let id = handle.id();
        self.texture_cache.insert(cache_key.clone(), handle);
        self.last_used.insert(cache_key, self.current_frame);

        self.prune_cache_if_needed();

        Ok(id)
    }

    /// Drops every version of the named texture.
    pub fn invalidate(&mut self, name: &str) {
        self.texture_cache.retain(|(n, _), _| n != name);
        self.last_used.retain(|(n, _), _| n != name);
    }

    /// Drops the least recently used textures until the cache fits.
    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() <= self.max_cache_size {
            return;
        }

        let mut entries: Vec<(CacheKey, u64)> =
            self.last_used.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = entries.len() - self.max_cache_size;
        for (key, _) in entries.into_iter().take(to_remove) {
            self.texture_cache.remove(&key);
            self.last_used.remove(&key);
        }
    }

    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str, version: u64) -> bool {
        self.texture_cache.contains_key(&(name.to_owned(), version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_texture_generator() -> Result<ColorImage, TextureGenerationError> {
        Ok(ColorImage::new([10, 10], egui::Color32::WHITE))
    }

    #[test]
    fn test_cache_hit() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(10);

        let texture_id1 = manager.get_or_create_texture("a", 1, mock_texture_generator, &ctx).unwrap();
        let texture_id2 = manager
            .get_or_create_texture("a", 1, || panic!("should hit the cache"), &ctx)
            .unwrap();

        assert_eq!(texture_id1, texture_id2);
        assert_eq!(manager.cache_size(), 1);
    }

    #[test]
    fn test_new_version_replaces_old() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(10);

        manager.get_or_create_texture("a", 1, mock_texture_generator, &ctx).unwrap();
        manager.get_or_create_texture("a", 2, mock_texture_generator, &ctx).unwrap();

        assert_eq!(manager.cache_size(), 1);
        assert!(!manager.contains("a", 1));
        assert!(manager.contains("a", 2));
    }

    #[test]
    fn test_lru_eviction() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(2);

        manager.get_or_create_texture("a", 1, mock_texture_generator, &ctx).unwrap();
        manager.begin_frame();
        manager.get_or_create_texture("b", 1, mock_texture_generator, &ctx).unwrap();
        manager.begin_frame();
        manager.get_or_create_texture("c", 1, mock_texture_generator, &ctx).unwrap();

        assert_eq!(manager.cache_size(), 2);
        assert!(!manager.contains("a", 1));
        assert!(manager.contains("b", 1));
        assert!(manager.contains("c", 1));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(2);

        let result = manager.get_or_create_texture("empty", 1, || Ok(ColorImage::new([0, 3], egui::Color32::WHITE)), &ctx);
        assert!(matches!(result, Err(TextureGenerationError::InvalidDimensions(0, 3))));
        assert_eq!(manager.cache_size(), 0);
    }
}
