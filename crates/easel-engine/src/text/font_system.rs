use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::Face;

/// Environment variable overriding the default font directory.
pub const FONT_DIR_ENV: &str = "EASEL_FONT_DIR";

/// Font directory used when [`FONT_DIR_ENV`] is unset.
pub const DEFAULT_FONT_DIR: &str = "data/utils/fonts";

/// Error returned when a font cannot be resolved or parsed.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("font '{name}' not found (tried {})", display_paths(.tried))]
    NotFound { name: String, tried: Vec<PathBuf> },

    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font '{name}': {message}")]
    Parse { name: String, message: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    let mut out = String::new();
    for (i, p) in paths.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", p.display());
    }
    out
}

/// Where [`FontSystem`] looks for font files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    /// Directories searched in order.
    pub search_dirs: Vec<PathBuf>,
    /// Extensions tried (without the dot) when the name has none.
    pub extensions: Vec<String>,
}

impl FontConfig {
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { search_dirs: dirs.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Paths tried, in order, when resolving `name`.
    ///
    /// The name itself comes first so absolute or relative paths work as-is.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let mut out = vec![PathBuf::from(name)];
        let has_ext = Path::new(name).extension().is_some();
        for dir in &self.search_dirs {
            out.push(dir.join(name));
            if !has_ext {
                for ext in &self.extensions {
                    out.push(dir.join(format!("{name}.{ext}")));
                }
            }
        }
        out
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        let dir = std::env::var_os(FONT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_DIR));
        Self { search_dirs: vec![dir], extensions: vec!["ttf".into(), "otf".into()] }
    }
}

/// Resolves font names to faces and caches them.
///
/// Fonts are immutable after loading. Faces are shared through `Rc`, so a
/// system belongs to one thread; build one per render thread.
pub struct FontSystem {
    config: FontConfig,
    faces: RefCell<HashMap<String, Rc<dyn Face>>>,
}

impl FontSystem {
    pub fn new(config: FontConfig) -> Self {
        Self { config, faces: RefCell::new(HashMap::new()) }
    }

    pub fn config(&self) -> &FontConfig {
        &self.config
    }

    /// Registers `face` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, face: impl Face + 'static) {
        self.faces.get_mut().insert(name.into(), Rc::new(face));
    }

    /// Parses a TrueType or OpenType font from raw bytes and registers it.
    pub fn load_font(&mut self, name: impl Into<String>, bytes: &[u8]) -> Result<(), FontError> {
        let name = name.into();
        let font = parse_font(&name, bytes)?;
        self.register(name, font);
        Ok(())
    }

    /// Returns `true` if `name` is already registered or cached.
    pub fn contains(&self, name: &str) -> bool {
        self.faces.borrow().contains_key(name)
    }

    /// Returns the face registered as `name`, loading it from disk on first use.
    pub fn resolve(&self, name: &str) -> Result<Rc<dyn Face>, FontError> {
        if let Some(face) = self.faces.borrow().get(name) {
            return Ok(Rc::clone(face));
        }

        let tried = self.config.candidates(name);
        let Some(path) = tried.iter().find(|p| p.is_file()) else {
            return Err(FontError::NotFound { name: name.to_owned(), tried });
        };

        let bytes = std::fs::read(path).map_err(|source| FontError::Io { path: path.clone(), source })?;
        let face: Rc<dyn Face> = Rc::new(parse_font(name, &bytes)?);
        log::debug!("loaded font '{name}' from {}", path.display());

        self.faces.borrow_mut().insert(name.to_owned(), Rc::clone(&face));
        Ok(face)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new(FontConfig::default())
    }
}

fn parse_font(name: &str, bytes: &[u8]) -> Result<fontdue::Font, FontError> {
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(|e| FontError::Parse { name: name.to_owned(), message: e.to_string() })
}
