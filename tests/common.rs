#![allow(dead_code)]

use scraper::{ElementRef, Html, Selector};

use eksdocs::content::FEATURE_LIST;
use eksdocs::models::{Description, FeatureItem, GlyphIcon, Inline};

pub const COLUMN_SELECTOR: &str = "section.features div.row > div.col.col--4";

pub static ROCKET_ICON: GlyphIcon = GlyphIcon("🚀");
pub static BLANK_ICON: GlyphIcon = GlyphIcon(" ");

/// Text of one rendered feature column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub position: Option<String>,
    pub title: String,
    pub description: String,
}

impl Column {
    /// Title and description, without the position marker.
    pub fn content(&self) -> (String, String) {
        (self.title.clone(), self.description.clone())
    }
}

/// Leaks a list so it can be handed to components expecting `'static` data.
pub fn leak(items: Vec<FeatureItem>) -> &'static [FeatureItem] {
    Box::leak(items.into_boxed_slice())
}

pub fn shipped() -> Vec<FeatureItem> {
    FEATURE_LIST.to_vec()
}

pub fn get_rich_feature() -> FeatureItem {
    FeatureItem {
        title: "Karpenter",
        icon: &ROCKET_ICON,
        description: Description::new(&[
            Inline::Text("Node provisioning with "),
            Inline::Strong("Karpenter"),
            Inline::Text(", configured through "),
            Inline::Code("NodePool"),
            Inline::Text(" resources. See the "),
            Inline::Link {
                href: "/docs/karpenter",
                label: "guide",
            },
            Inline::Text("."),
        ]),
    }
}

pub fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Number of elements in `html` matching `css`.
pub fn count(html: &str, css: &str) -> usize {
    Html::parse_fragment(html).select(&selector(css)).count()
}

/// Text of every element matching `css`, in document order.
pub fn texts(html: &str, css: &str) -> Vec<String> {
    Html::parse_fragment(html)
        .select(&selector(css))
        .map(text_of)
        .collect()
}

/// Feature columns of the section, in document order.
pub fn columns(html: &str) -> Vec<Column> {
    let fragment = Html::parse_fragment(html);
    let title = selector("h3");
    let description = selector("p");

    fragment
        .select(&selector(COLUMN_SELECTOR))
        .map(|column| Column {
            position: column.value().attr("data-feature").map(str::to_string),
            title: column.select(&title).map(text_of).collect(),
            description: column.select(&description).map(text_of).collect(),
        })
        .collect()
}

pub fn positions(columns: &[Column]) -> Vec<Option<&str>> {
    columns.iter().map(|c| c.position.as_deref()).collect()
}
