//! Start-up configuration read from the host page.

use wasm_bindgen::JsCast;

/// Name of the `<meta>` tag that overrides the API base URL.
pub const API_BASE_META: &str = "api-base";

/// Runtime configuration, provided to the component tree via context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(&api_base.into()),
        }
    }

    /// Reads `<meta name="api-base" content="...">` from the current page.
    ///
    /// Falls back to same-origin requests when the tag is absent or the page
    /// is not available.
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());

        match content {
            Some(base) => {
                log::debug!("API base overridden by page: {}", base);
                Self::new(base)
            }
            None => Self::default(),
        }
    }

    /// Build a full API URL from a path starting with `/api/`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
