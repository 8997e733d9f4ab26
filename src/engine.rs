// this_file: src/engine.rs

//! Owned handles for the external text engines.

use std::fmt;

use freetype::Library;
use harfbuzz_rs::Language;

use crate::error::Result;

/// The rasterizer handle and the shaping engine's process-default language,
/// acquired together.
///
/// The FreeType library handle lives as long as this value and is released
/// exactly once on drop. The default language is captured once at init;
/// HarfBuzz may report the invalid language when no locale is configured,
/// so the tag is kept opaque rather than stringified.
pub struct TextEngine {
    raster: Library,
    default_language: Language,
}

impl TextEngine {
    /// Acquires the rasterizer handle and queries the default shaping
    /// language.
    pub fn init() -> Result<Self> {
        let raster = Library::init()?;
        let default_language = Language::default();
        log::debug!("rasterizer handle acquired, default shaping language captured");
        Ok(Self {
            raster,
            default_language,
        })
    }

    /// Language the shaping engine reported as the process default.
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Borrow of the underlying rasterizer handle.
    pub fn raster(&self) -> &Library {
        &self.raster
    }
}

impl fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEngine").finish_non_exhaustive()
    }
}
