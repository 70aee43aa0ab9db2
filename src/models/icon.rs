use leptos::prelude::*;

/// An icon that can be dropped into a feature card.
///
/// Implementors are opaque to the card: it only hands over the CSS class and
/// the accessible label, and places whatever comes back.
pub trait Renderable: Sync {
    fn render(&self, class: &'static str, label: &'static str) -> AnyView;

    /// Asset name or glyph, used in listings and validation.
    fn name(&self) -> &'static str;

    fn is_blank(&self) -> bool {
        self.name().trim().is_empty()
    }
}

/// Vector icon whose markup is embedded at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgIcon {
    name: &'static str,
    markup: &'static str,
}

impl SvgIcon {
    pub const fn new(name: &'static str, markup: &'static str) -> Self {
        Self { name, markup }
    }

    pub fn markup(&self) -> &'static str {
        self.markup
    }
}

impl Renderable for SvgIcon {
    fn render(&self, class: &'static str, label: &'static str) -> AnyView {
        let markup = self.markup;
        view! {
            <span class=class role="img" aria-label=label inner_html=markup></span>
        }
        .into_any()
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.markup.trim().is_empty()
    }
}

/// Text glyph icon, e.g. an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphIcon(pub &'static str);

impl Renderable for GlyphIcon {
    fn render(&self, class: &'static str, label: &'static str) -> AnyView {
        let glyph = self.0;
        view! {
            <span class=class role="img" aria-label=label>{glyph}</span>
        }
        .into_any()
    }

    fn name(&self) -> &'static str {
        self.0
    }
}
