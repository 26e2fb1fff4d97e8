/// Image variants served by the catalog CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    Poster,
    Backdrop,
    Logo,
}

impl ImageVariant {
    fn size(self) -> &'static str {
        match self {
            ImageVariant::Poster => "w500",
            ImageVariant::Backdrop => "w1280",
            ImageVariant::Logo => "original",
        }
    }
}

/// Builds absolute image URLs from catalog image paths
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
}

impl ImageUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns an empty string when the path is absent
    pub fn build(&self, path: Option<&str>, variant: ImageVariant) -> String {
        match path {
            Some(path) if !path.is_empty() => {
                format!("{}/{}{}", self.base_url, variant.size(), path)
            }
            _ => String::new(),
        }
    }
}
