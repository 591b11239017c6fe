use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The DOM contract: every class, attribute, selector and event name the
/// behaviors read or write.
///
/// Defaults match the stock media-browser markup. Override them to attach
/// to differently named markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Selectors", inline)]
#[serde(default)]
pub struct SelectorOptions {
    /// Tab strip header (first match wins).
    pub tab_header: String,
    /// Skin header (first match wins).
    pub skin_header: String,
    /// Class added to headers while hidden.
    pub header_hidden_class: String,
    /// Class added to headers while visible.
    pub header_visible_class: String,

    /// Items that get the staggered, intersection-gated reveal.
    pub list_item: String,
    /// Class applied when a list item is revealed.
    pub list_item_animated_class: String,
    /// Cards that get the immediate fade-up.
    pub card: String,
    /// Class applied to cards.
    pub card_animation_class: String,

    /// Content containers eligible for skeleton loading.
    pub content_container: String,
    /// Class marking a container as loading.
    pub skeleton_loading_class: String,
    /// Class of placeholder nodes.
    pub placeholder_class: String,
    /// Attribute that forces skeleton treatment when set to `"true"`.
    pub loading_attribute: String,

    /// Horizontally scrolling filter bars.
    pub filter_bar: String,
    /// Filter buttons inside a bar.
    pub filter_button: String,
    /// Class marking a selected button.
    pub selected_class: String,
    /// Attribute opting a button into multi-select.
    pub multi_select_attribute: String,
    /// Attribute carrying the filter identifier.
    pub filter_attribute: String,

    /// In-page anchors.
    pub anchor: String,

    /// Inbound notification: a container started loading.
    pub content_loading_event: String,
    /// Outbound notification: a filter button toggled.
    pub filter_change_event: String,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            tab_header: ".headerTabs, .sectionTabs".into(),
            skin_header: ".skinHeader".into(),
            header_hidden_class: "header-hidden".into(),
            header_visible_class: "header-visible".into(),
            list_item: ".listItem".into(),
            list_item_animated_class: "listItemAnimated".into(),
            card: ".card".into(),
            card_animation_class: "fadeInUp-animation".into(),
            content_container: ".itemsContainer".into(),
            skeleton_loading_class: "skeleton-loading".into(),
            placeholder_class: "ghost-card".into(),
            loading_attribute: "data-loading".into(),
            filter_bar: ".filterButtonContainer".into(),
            filter_button: ".emby-button.filter-button".into(),
            selected_class: "selected".into(),
            multi_select_attribute: "data-multi-select".into(),
            filter_attribute: "data-filter".into(),
            anchor: "a[href^=\"#\"]".into(),
            content_loading_event: "jellyfin-content-loading".into(),
            filter_change_event: "jellyfin-filter-change".into(),
        }
    }
}

impl SelectorOptions {
    /// Selector form of [`placeholder_class`](Self::placeholder_class).
    #[must_use]
    pub fn placeholder_selector(&self) -> String {
        format!(".{}", self.placeholder_class)
    }
}
