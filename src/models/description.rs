use leptos::prelude::*;

/// One piece of a rich text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
    Code(&'static str),
    Link {
        href: &'static str,
        label: &'static str,
    },
}

impl Inline {
    /// Visible text of this piece.
    pub fn text(&self) -> &'static str {
        match *self {
            Self::Text(text) | Self::Strong(text) | Self::Code(text) => text,
            Self::Link { label, .. } => label,
        }
    }

    pub fn render(self) -> AnyView {
        match self {
            Self::Text(text) => text.into_any(),
            Self::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
            Self::Code(text) => view! { <code>{text}</code> }.into_any(),
            Self::Link { href, label } => view! { <a href=href>{label}</a> }.into_any(),
        }
    }
}

/// Rich text shown under a feature title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description(&'static [Inline]);

impl Description {
    pub const fn new(parts: &'static [Inline]) -> Self {
        Self(parts)
    }

    pub fn parts(&self) -> &'static [Inline] {
        self.0
    }

    pub fn plain_text(&self) -> String {
        self.0.iter().map(Inline::text).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|part| part.text().trim().is_empty())
    }

    pub fn render(self) -> impl IntoView {
        self.0.iter().map(|part| part.render()).collect_view()
    }
}
