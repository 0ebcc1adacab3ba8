use crate::env;
use dom_core::{DomStore, NodeId};
use menu_core::{MenuClasses, MenuManager};
use sticky_core::{ScrollSource, StickyConfig, StickyManager};

/// Page-scoped controller bundle.
///
/// Owns the document store, the menu controller, and (when the page has a
/// sticky element) the sticky controller, for the lifetime of the page.
///
/// Lifecycle policy:
/// - Managers bind once at mount, after the document's elements exist.
/// - A missing sticky element downgrades to a logged warning; the page
///   still gets working menus.
/// - Dropping the `App` disposes everything; no teardown calls needed.
pub struct App<S> {
    dom: DomStore,
    menu: MenuManager,
    sticky: Option<StickyManager>,
    source: S,
}

impl<S: ScrollSource> App<S> {
    /// Mount with the stock class lists and the `js-sticky` contract.
    pub fn mount(dom: DomStore, source: S) -> Self {
        Self::mount_with(dom, source, MenuClasses::default(), StickyConfig::default())
    }

    /// Mount with injected configuration for both managers.
    pub fn mount_with(
        mut dom: DomStore,
        source: S,
        menu_classes: MenuClasses,
        sticky_config: StickyConfig,
    ) -> Self {
        let mut menu = MenuManager::new(menu_classes);
        menu.bind(&dom);

        let sticky = match StickyManager::bind(&mut dom, &source, sticky_config) {
            Ok(manager) => Some(manager),
            Err(err) => {
                log::warn!(target: "site", "sticky disabled: {err}");
                None
            }
        };

        if env::is_dev(&env::hostname()) {
            log::debug!(target: "site", "mounted");
        }

        Self {
            dom,
            menu,
            sticky,
            source,
        }
    }

    /// Forward a click. Returns `true` when the host should suppress the
    /// click's default behavior.
    pub fn handle_click(&mut self, node: NodeId) -> bool {
        self.menu.on_click(&mut self.dom, node)
    }

    /// Forward a scroll event. A no-op on pages without a sticky element.
    pub fn handle_scroll(&mut self) {
        if let Some(sticky) = self.sticky.as_mut() {
            sticky.on_scroll(&mut self.dom, &self.source);
        }
    }

    pub fn dom(&self) -> &DomStore {
        &self.dom
    }

    pub fn menu(&self) -> &MenuManager {
        &self.menu
    }

    pub fn sticky(&self) -> Option<&StickyManager> {
        self.sticky.as_ref()
    }

    /// The host updates the source here before forwarding a scroll event.
    pub fn scroll_source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
