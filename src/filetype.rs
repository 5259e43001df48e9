//! File-type classification derived from a module id's suffix.
//!
//! Purely lexical: the category comes from the id string alone, never from
//! file contents, so the same id always classifies the same way.

/// Category assigned to a module based on its id suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// TypeScript sources, including `.tsx`.
    TypeScript,
    /// JavaScript sources, including `.jsx`.
    JavaScript,
    /// Vue single-file components.
    Vue,
    /// Svelte components.
    Svelte,
    /// Stylesheets.
    Css,
    /// HTML documents.
    Html,
    /// JSON data.
    Json,
    /// WebAssembly binaries.
    Wasm,
    /// Images.
    Image,
    /// Anything not covered above.
    Other,
}

impl FileType {
    /// Classifies a module id by its extension.
    ///
    /// Bundler module ids may carry a query suffix (e.g. `app.vue?type=style`);
    /// everything from the first `?` on is ignored before the extension is read.
    #[must_use]
    pub fn from_module_id(id: &str) -> Self {
        let path = id.split('?').next().unwrap_or(id);
        let ext = path.rsplit_once('.').map_or("", |(_, ext)| ext);
        match ext.to_ascii_lowercase().as_str() {
            "ts" | "mts" | "cts" | "tsx" => Self::TypeScript,
            "js" | "mjs" | "cjs" | "jsx" => Self::JavaScript,
            "vue" => Self::Vue,
            "svelte" => Self::Svelte,
            "css" | "scss" | "sass" | "less" | "styl" => Self::Css,
            "html" | "htm" => Self::Html,
            "json" => Self::Json,
            "wasm" => Self::Wasm,
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "ico" => Self::Image,
            _ => Self::Other,
        }
    }

    /// Stable lowercase name for display.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
            Self::Css => "css",
            Self::Html => "html",
            Self::Json => "json",
            Self::Wasm => "wasm",
            Self::Image => "image",
            Self::Other => "other",
        }
    }
}
