//! Rendering configuration for the constant reference page.

use easel_core::Category;

/// Reference rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceConfig {
    /// Top-level page heading
    pub title: String,
    /// Whether category tables carry a description column
    pub include_descriptions: bool,
    /// Whether the page ends with the alias table
    pub include_aliases: bool,
    /// Categories to render, in the given order. `None` renders every non-empty category in table order.
    pub categories: Option<Vec<Category>>,
    /// Whether to emit the "generated file" admonition under the title
    pub generated_banner: bool,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            title: "Easel constant reference".to_string(),
            include_descriptions: true,
            include_aliases: true,
            categories: None,
            generated_banner: true,
        }
    }
}

impl ReferenceConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page heading
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Toggle the description column
    pub fn with_descriptions(mut self, include: bool) -> Self {
        self.include_descriptions = include;
        self
    }

    /// Toggle the alias table
    pub fn with_aliases(mut self, include: bool) -> Self {
        self.include_aliases = include;
        self
    }

    /// Restrict rendering to the given categories
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = Some(categories.into_iter().collect());
        self
    }

    /// Toggle the generated-file banner
    pub fn with_generated_banner(mut self, banner: bool) -> Self {
        self.generated_banner = banner;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_renders_everything() {
        let config = ReferenceConfig::default();
        assert!(config.include_descriptions);
        assert!(config.include_aliases);
        assert!(config.generated_banner);
        assert_eq!(config.categories, None);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ReferenceConfig::new(), ReferenceConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = ReferenceConfig::new()
            .with_title("Constants")
            .with_descriptions(false)
            .with_aliases(false)
            .with_categories([Category::Input, Category::Color])
            .with_generated_banner(false);

        assert_eq!(config.title, "Constants");
        assert!(!config.include_descriptions);
        assert!(!config.include_aliases);
        assert!(!config.generated_banner);
        assert_eq!(config.categories, Some(vec![Category::Input, Category::Color]));
    }

    #[test]
    fn test_empty_category_filter_is_preserved() {
        let config = ReferenceConfig::new().with_categories([]);
        assert_eq!(config.categories, Some(Vec::new()));
    }
}
