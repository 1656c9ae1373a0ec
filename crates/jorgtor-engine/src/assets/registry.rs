use std::collections::HashMap;
use std::path::Path;

use glam::IVec2;

use crate::assets::manifest::SheetManifest;
use crate::components::sprite::{SheetId, SpriteHandle, SpriteKey};
use crate::error::{AssetLoadError, LevelFormatError, LoadError};

struct Sheet {
    name: String,
    image_path: String,
    manifest: SheetManifest,
}

/// Sprite provider: slices named sprites out of registered sheets and
/// memoizes the result per `(sheet, sprite, flip)`. Sheets are static for
/// the lifetime of a game, so cached handles are never invalidated.
pub struct SpriteCache {
    sheets: Vec<Sheet>,
    sprite_size: IVec2,
    cache: HashMap<SpriteKey, SpriteHandle>,
    slices: usize,
}

impl SpriteCache {
    /// Every sprite handed out is scaled to `sprite_size`.
    pub fn new(sprite_size: IVec2) -> Self {
        Self {
            sheets: Vec::new(),
            sprite_size,
            cache: HashMap::new(),
            slices: 0,
        }
    }

    /// Register a sheet image and its slice metadata. Registering a name
    /// twice replaces the earlier sheet and forgets its cached sprites.
    pub fn register_sheet(
        &mut self,
        name: impl Into<String>,
        image_path: impl Into<String>,
        manifest: SheetManifest,
    ) -> SheetId {
        let name = name.into();
        let sheet = Sheet {
            name: name.clone(),
            image_path: image_path.into(),
            manifest,
        };
        if let Some(id) = self.sheet_id(&name) {
            self.cache.retain(|key, _| key.sheet != name);
            self.sheets[id.0 as usize] = sheet;
            return id;
        }
        log::info!("registered sprite sheet `{}` ({} sprites)", name, sheet.manifest.len());
        self.sheets.push(sheet);
        SheetId(self.sheets.len() as u32 - 1)
    }

    /// Register a sheet whose metadata lives in a JSON file on disk.
    pub fn load_sheet_file(
        &mut self,
        name: &str,
        image_path: &str,
        json_path: impl AsRef<Path>,
    ) -> Result<SheetId, LoadError> {
        let manifest = SheetManifest::from_file(json_path)?;
        Ok(self.register_sheet(name, image_path, manifest))
    }

    pub fn sheet_id(&self, name: &str) -> Option<SheetId> {
        self.sheets
            .iter()
            .position(|s| s.name == name)
            .map(|i| SheetId(i as u32))
    }

    /// Image path of a sheet, for the renderer to load.
    pub fn image_path(&self, id: SheetId) -> Option<&str> {
        self.sheets.get(id.0 as usize).map(|s| s.image_path.as_str())
    }

    /// Image paths indexed by `SheetId`.
    pub fn image_paths(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.image_path.as_str()).collect()
    }

    /// Look up a sprite, slicing it on first use.
    pub fn get_sprite(
        &mut self,
        sheet: &str,
        sprite: &str,
        flip: bool,
    ) -> Result<SpriteHandle, LoadError> {
        let key = SpriteKey::new(sheet, sprite, flip);
        if let Some(handle) = self.cache.get(&key) {
            return Ok(*handle);
        }
        let handle = self.slice(sheet, sprite, flip)?;
        self.slices += 1;
        self.cache.insert(key, handle);
        Ok(handle)
    }

    /// Check up front that every named sprite exists on `sheet`.
    pub fn validate(&self, sheet: &str, sprites: &[&str]) -> Result<(), LoadError> {
        for sprite in sprites {
            self.slice(sheet, sprite, false)?;
        }
        Ok(())
    }

    /// Number of memoized handles.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Number of cache misses that required slicing.
    pub fn slice_count(&self) -> usize {
        self.slices
    }

    fn slice(&self, sheet: &str, sprite: &str, flip: bool) -> Result<SpriteHandle, LoadError> {
        let id = self
            .sheet_id(sheet)
            .ok_or_else(|| AssetLoadError::UnknownSheet(sheet.to_string()))?;
        let source = self.sheets[id.0 as usize].manifest.get(sprite).ok_or_else(|| {
            LevelFormatError::UnknownSprite {
                sheet: sheet.to_string(),
                sprite: sprite.to_string(),
            }
        })?;
        Ok(SpriteHandle {
            sheet: id,
            source,
            size: self.sprite_size,
            flip,
        })
    }
}

impl Default for SpriteCache {
    fn default() -> Self {
        Self::new(IVec2::new(100, 100))
    }
}
