//! Category index pages: converted details plus one link per item.

use crate::error::Result;
use crate::model::CategoryDoc;
use crate::render::{escape_link_text, BodyRenderer};

impl BodyRenderer<'_> {
    pub(crate) fn render_category(&self, category: &CategoryDoc, shift: usize) -> Result<String> {
        let mut output = self.html(&category.details, shift)?;
        output.push('\n');

        for item in &category.items {
            output.push_str(&format!(
                "- [{}]({}) {}\n",
                escape_link_text(&item.name),
                item.route,
                item.oneliner
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::HeadingConfig;
    use crate::model::{CategoryDoc, CategoryItem};
    use crate::render::testing::TaggedConverter;
    use crate::render::BodyRenderer;
    use pretty_assertions::assert_eq;

    fn item(name: &str, route: &str, oneliner: &str) -> CategoryItem {
        CategoryItem {
            name: name.to_string(),
            route: route.to_string(),
            oneliner: oneliner.to_string(),
        }
    }

    #[test]
    fn item_names_are_escaped() {
        let renderer = BodyRenderer::new(&TaggedConverter, HeadingConfig::default());
        let category = CategoryDoc {
            details: String::new(),
            items: vec![item("array[i]", "/reference/array/", "Indexing.")],
        };
        assert_eq!(
            renderer.render_category(&category, 0).unwrap(),
            "\n- [array\\[i\\]](/reference/array/) Indexing.\n"
        );
    }

    #[test]
    fn lists_items_in_order() {
        let renderer = BodyRenderer::new(&TaggedConverter, HeadingConfig::default());
        let category = CategoryDoc {
            details: "<p>Text</p>".to_string(),
            items: vec![
                item("text", "/reference/text/text/", "Customizes text."),
                item("lower", "/reference/text/lower/", "Lowercases text."),
            ],
        };
        assert_eq!(
            renderer.render_category(&category, 0).unwrap(),
            "[0]<p>Text</p>\n\n\
             - [text](/reference/text/text/) Customizes text.\n\
             - [lower](/reference/text/lower/) Lowercases text.\n"
        );
    }
}
