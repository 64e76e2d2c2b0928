//! Cleanup categorisation based on path fragments and file extensions.
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. Path inside a protected OS directory → [`Category::SystemCritical`]
//! 2. Throwaway extension, or path inside a download/temp/cache directory
//!    → [`Category::LikelyUseless`]
//! 3. Media extension → [`Category::Media`]
//! 4. Everything else → [`Category::Review`]
//!
//! The order matters: a `.tmp` file under `\Windows\System32\` is
//! SystemCritical, and a video under `\Downloads\` is LikelyUseless.
use crate::model::Category;

/// Directory segment chains that mark protected system locations.
const SYSTEM_SEGMENTS: &[&[&str]] = &[&["windows", "system32"], &["windows", "winsxs"]];

/// Directory segment chains whose contents are usually disposable.
const USELESS_SEGMENTS: &[&[&str]] = &[
    &["downloads"],
    &["temp"],
    &["cache"],
    &["appdata", "local", "temp"],
];

/// Extension class from the fixed extension tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionClass {
    LikelyUseless,
    Media,
    Unlisted,
}

/// Classify a bare extension (no leading dot), case-insensitively.
///
/// Zero-heap-allocation hot path: the extension is lowercased into a
/// fixed-size stack buffer. Anything longer than 16 bytes is `Unlisted`.
pub fn classify_extension(ext: &str) -> ExtensionClass {
    let bytes = ext.as_bytes();
    if bytes.len() > 16 {
        return ExtensionClass::Unlisted;
    }

    let mut lower = [0u8; 16];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = match std::str::from_utf8(&lower[..bytes.len()]) {
        Ok(s) => s,
        Err(_) => return ExtensionClass::Unlisted,
    };

    match lower_str {
        "exe" | "zip" | "iso" | "msi" | "rar" | "7z" | "bak" | "tmp" | "log" => {
            ExtensionClass::LikelyUseless
        }
        "mp4" | "mkv" | "avi" | "mov" | "mp3" | "wav" | "jpg" | "jpeg" | "png" | "gif" | "bmp"
        | "tiff" | "webm" | "flv" | "wmv" => ExtensionClass::Media,
        _ => ExtensionClass::Unlisted,
    }
}

/// Path-fragment tables rendered for one separator convention.
///
/// The tables themselves are fixed; only the separator varies. The default
/// is the Windows convention the rules were written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRules {
    separator: char,
    system_markers: Vec<String>,
    useless_fragments: Vec<String>,
}

impl ClassificationRules {
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            system_markers: render(SYSTEM_SEGMENTS, separator),
            useless_fragments: render(USELESS_SEGMENTS, separator),
        }
    }

    /// Backslash-separated paths (`C:\Users\...`).
    pub fn windows() -> Self {
        Self::with_separator('\\')
    }

    /// Slash-separated paths (`/home/...`).
    pub fn posix() -> Self {
        Self::with_separator('/')
    }

    /// The convention of the platform this binary was built for.
    pub fn native() -> Self {
        Self::with_separator(std::path::MAIN_SEPARATOR)
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn system_markers(&self) -> &[String] {
        &self.system_markers
    }

    pub fn useless_fragments(&self) -> &[String] {
        &self.useless_fragments
    }
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self::windows()
    }
}

/// Render each segment chain as `<sep>a<sep>b<sep>` so it only matches whole
/// directory names.
fn render(chains: &[&[&str]], sep: char) -> Vec<String> {
    chains
        .iter()
        .map(|chain| {
            let mut fragment = String::from(sep);
            for segment in chain.iter() {
                fragment.push_str(segment);
                fragment.push(sep);
            }
            fragment
        })
        .collect()
}

/// Maps file paths to cleanup categories.
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    rules: ClassificationRules,
}

impl Categorizer {
    pub fn new(rules: ClassificationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ClassificationRules {
        &self.rules
    }

    /// Assign a category to `path`. Pure: no filesystem access.
    pub fn categorize(&self, path: &str) -> Category {
        let lower = path.to_lowercase();

        if contains_any(&lower, &self.rules.system_markers) {
            return Category::SystemCritical;
        }

        let class = extension(path, self.rules.separator)
            .map(classify_extension)
            .unwrap_or(ExtensionClass::Unlisted);

        if class == ExtensionClass::LikelyUseless
            || contains_any(&lower, &self.rules.useless_fragments)
        {
            return Category::LikelyUseless;
        }
        if class == ExtensionClass::Media {
            return Category::Media;
        }
        Category::Review
    }

    /// [`categorize`](Self::categorize) for a `Path`, using its lossy UTF-8 form.
    pub fn categorize_path(&self, path: &std::path::Path) -> Category {
        self.categorize(&path.to_string_lossy())
    }
}

/// Categorise with the default (Windows) rules.
pub fn categorize(path: &str) -> Category {
    Categorizer::default().categorize(path)
}

fn contains_any(haystack: &str, fragments: &[String]) -> bool {
    fragments.iter().any(|f| haystack.contains(f.as_str()))
}

/// Extension of the last path segment, without the dot.
///
/// Segments are split on the rule separator and on `/`. A name whose only
/// dot is the leading one (`.bashrc`) has no extension.
fn extension(path: &str, sep: char) -> Option<&str> {
    let name = path.rsplit(|c: char| c == sep || c == '/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(dot) => Some(&name[dot + 1..]),
    }
}
