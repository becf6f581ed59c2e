//! cosmic-text measurement backend.
//!
//! [`CosmicMeasurer`] shapes a single line of text through cosmic-text and
//! slices the shaped glyph clusters into per-character boxes. The font
//! database lives in a [`FontContext`] that can be shared between measurers
//! (and with whatever else in the host renders text).

use std::sync::Arc;

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::error::{MetricsError, MetricsResult};
use crate::geometry::{GlyphLocal, Point};
use crate::glyph::{Glyph, GlyphRun};
use crate::measure::TextMeasurer;

/// Configuration for initializing a [`FontContext`].
#[derive(Debug, Clone)]
pub struct FontContextConfig {
    /// Whether to load system fonts on initialization.
    pub load_system_fonts: bool,
    /// Locale string for text shaping (e.g., "en-US").
    pub locale: String,
    /// Font size in pixels used for measurement.
    pub font_size: f32,
    /// Line height as a multiple of the font size.
    pub line_height_multiplier: f32,
}

impl Default for FontContextConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            locale: sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string()),
            font_size: 14.0,
            line_height_multiplier: 1.2,
        }
    }
}

impl FontContextConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to load system fonts on initialization.
    pub fn load_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Set the locale for text shaping.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the measurement font size in pixels.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line height as a multiple of the font size.
    pub fn line_height_multiplier(mut self, multiplier: f32) -> Self {
        self.line_height_multiplier = multiplier;
        self
    }
}

/// A shared handle to the cosmic-text font system.
///
/// Cloning is cheap; all clones share one font database behind a mutex.
#[derive(Clone)]
pub struct FontContext {
    inner: Arc<Mutex<FontSystem>>,
    config: FontContextConfig,
}

impl FontContext {
    /// Create a context with default configuration (system fonts loaded).
    pub fn new() -> Self {
        Self::with_config(FontContextConfig::default())
    }

    /// Create a context with the given configuration.
    pub fn with_config(config: FontContextConfig) -> Self {
        let mut db = fontdb::Database::new();
        if config.load_system_fonts {
            db.load_system_fonts();
        }

        let font_system = FontSystem::new_with_locale_and_db(config.locale.clone(), db);
        debug!(
            target: "nodecaret_metrics::measure",
            faces = font_system.db().len(),
            locale = %config.locale,
            "font context initialized"
        );

        Self {
            inner: Arc::new(Mutex::new(font_system)),
            config,
        }
    }

    /// The configuration this context was created with.
    pub fn config(&self) -> &FontContextConfig {
        &self.config
    }

    /// Number of font faces in the database.
    pub fn face_count(&self) -> usize {
        self.inner.lock().db().len()
    }

    /// Query the font database for a face matching `query`.
    pub fn query_face(&self, query: &fontdb::Query<'_>) -> Option<fontdb::ID> {
        self.inner.lock().db().query(query)
    }
}

impl Default for FontContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Measurement backend that shapes text through cosmic-text.
///
/// Shaped glyphs cover byte clusters, not characters; a cluster spanning
/// several characters (a ligature, say) is split evenly so the run still has
/// one box per character and index arithmetic stays valid.
#[derive(Debug, Clone)]
pub struct CosmicMeasurer {
    context: FontContext,
}

impl CosmicMeasurer {
    /// Create a measurer over a font context.
    pub fn new(context: FontContext) -> Self {
        Self { context }
    }

    /// The shared font context.
    pub fn context(&self) -> &FontContext {
        &self.context
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn measure(&self, text: &str, origin: Point<GlyphLocal>) -> MetricsResult<GlyphRun> {
        if text.is_empty() {
            return Ok(GlyphRun::empty(origin));
        }

        let config = &self.context.config;
        let font_size = config.font_size;
        let line_height = font_size * config.line_height_multiplier;

        let mut font_system = self.context.inner.lock();
        let mut buffer = Buffer::new(&mut font_system, Metrics::new(font_size, line_height));

        // Unconstrained: node labels are a single unwrapped line.
        buffer.set_size(&mut font_system, None, None);
        buffer.set_text(&mut font_system, text, Attrs::new(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut font_system, false);

        // Character index of each byte offset, so glyph clusters (byte
        // ranges) can be mapped back to characters.
        let chars: Vec<char> = text.chars().collect();
        let mut char_of_byte = vec![0usize; text.len() + 1];
        for (char_index, (byte_index, ch)) in text.char_indices().enumerate() {
            for b in byte_index..byte_index + ch.len_utf8() {
                char_of_byte[b] = char_index;
            }
        }
        char_of_byte[text.len()] = chars.len();

        let mut boxes: Vec<Option<Glyph>> = vec![None; chars.len()];

        for run in buffer.layout_runs() {
            let top = run.line_top;
            let bottom = run.line_top + run.line_height;

            for layout_glyph in run.glyphs.iter() {
                let first = char_of_byte[layout_glyph.start];
                let last = char_of_byte[layout_glyph.end];
                if last <= first {
                    continue;
                }

                let per_char = layout_glyph.w / (last - first) as f32;
                for (j, slot) in boxes[first..last].iter_mut().enumerate() {
                    let x = layout_glyph.x + per_char * j as f32;
                    *slot = Some(Glyph::new(
                        chars[first + j],
                        Point::new(origin.x + x, origin.y + top),
                        Point::new(origin.x + x + per_char, origin.y + bottom),
                    ));
                }
            }
        }

        let measured = boxes.iter().flatten().count();
        if measured != chars.len() {
            return Err(MetricsError::LengthMismatch {
                run_len: measured,
                text_len: chars.len(),
            });
        }

        trace!(
            target: "nodecaret_metrics::measure",
            chars = chars.len(),
            "measured text run"
        );

        GlyphRun::from_glyphs(boxes.into_iter().flatten().collect())
    }
}
