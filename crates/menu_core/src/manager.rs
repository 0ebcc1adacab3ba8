use crate::action::MenuAction;
use dom_core::{Document, NodeId};
use std::collections::HashMap;

/// Class lists for the two menu rest states.
///
/// A menu at rest carries either all of `open` and none of `close`, or the
/// reverse. Consumers restyle by replacing these lists.
#[derive(Clone, Debug)]
pub struct MenuClasses {
    pub open: Vec<String>,
    pub close: Vec<String>,
}

impl Default for MenuClasses {
    fn default() -> Self {
        Self {
            open: vec!["shadow-lg".to_string()],
            close: vec!["-translate-x-full".to_string()],
        }
    }
}

/// Multi-target menu controller.
///
/// One manager instance serves an arbitrary number of trigger buttons and
/// menu elements. [`bind`](Self::bind) records which elements are triggers
/// and which action each one requests; the host forwards clicks to
/// [`on_click`](Self::on_click). Target lists are read from the trigger's
/// attribute at click time, so editing the attribute between clicks takes
/// effect without rebinding; only newly *inserted* triggers need a rebind.
///
/// Dropping the manager is the dispose step: it holds no document listeners
/// of its own, since events arrive by host forwarding.
#[derive(Clone, Debug, Default)]
pub struct MenuManager {
    classes: MenuClasses,
    triggers: HashMap<NodeId, MenuAction>,
}

impl MenuManager {
    pub fn new(classes: MenuClasses) -> Self {
        Self {
            classes,
            triggers: HashMap::new(),
        }
    }

    /// Scan the document for trigger elements and record their actions.
    ///
    /// Scans `data-menu-toggle`, `data-menu-open`, `data-menu-close` in that
    /// order; an element carrying more than one keeps the first. Calling
    /// `bind` again rescans from scratch, which is the supported path for
    /// documents that gained triggers after the initial bind.
    pub fn bind(&mut self, dom: &impl Document) {
        self.triggers.clear();
        for action in MenuAction::ALL {
            for node in dom.elements_with_attribute(action.data_attribute()) {
                self.triggers.entry(node).or_insert(action);
            }
        }
        log::debug!(target: "menu", "bound {} trigger(s)", self.triggers.len());
    }

    /// Number of triggers recorded by the last [`bind`](Self::bind).
    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// The action a trigger was bound with, if the node is a trigger.
    pub fn trigger_action(&self, node: NodeId) -> Option<MenuAction> {
        self.triggers.get(&node).copied()
    }

    /// Handle a click on `trigger`.
    ///
    /// Returns `true` when the click was consumed (the host should suppress
    /// its default behavior, e.g. link navigation), `false` for nodes that
    /// are not bound triggers.
    ///
    /// The trigger's attribute value is split on a literal `','` with no
    /// whitespace trimming. Each identifier is resolved independently;
    /// missing targets are skipped and the rest of the list is still
    /// processed.
    pub fn on_click(&self, dom: &mut impl Document, trigger: NodeId) -> bool {
        let Some(action) = self.trigger_action(trigger) else {
            return false;
        };
        // The attribute can have been edited since bind; read it per click.
        let Some(names) = dom.attribute(trigger, action.data_attribute()).map(str::to_owned) else {
            log::trace!(target: "menu", "trigger {trigger:?} lost its {action:?} attribute");
            return false;
        };

        for name in names.split(',') {
            match dom.element_by_id(name) {
                Some(menu) => self.apply(dom, action, menu),
                None => log::trace!(target: "menu", "target `{name}` not found, skipping"),
            }
        }
        true
    }

    fn apply(&self, dom: &mut impl Document, action: MenuAction, menu: NodeId) {
        match action {
            MenuAction::Open => self.open(dom, menu),
            MenuAction::Close => self.close(dom, menu),
            MenuAction::Toggle => self.toggle(dom, menu),
        }
    }

    /// Put the menu in its open rest state. Idempotent.
    pub fn open(&self, dom: &mut impl Document, menu: NodeId) {
        for class in &self.classes.open {
            dom.add_class(menu, class);
        }
        for class in &self.classes.close {
            dom.remove_class(menu, class);
        }
        log::trace!(target: "menu", "open {menu:?}");
    }

    /// Put the menu in its closed rest state. Idempotent.
    pub fn close(&self, dom: &mut impl Document, menu: NodeId) {
        for class in &self.classes.open {
            dom.remove_class(menu, class);
        }
        for class in &self.classes.close {
            dom.add_class(menu, class);
        }
        log::trace!(target: "menu", "close {menu:?}");
    }

    /// Returns `true` when the menu is in its open rest state: every open
    /// class present and every close class absent.
    pub fn is_open(&self, dom: &impl Document, menu: NodeId) -> bool {
        self.classes.open.iter().all(|c| dom.has_class(menu, c))
            && self.classes.close.iter().all(|c| !dom.has_class(menu, c))
    }

    /// Flip the menu between its rest states: close it when open, open it
    /// otherwise. A menu whose class list was perturbed into a mixed state
    /// does not satisfy [`is_open`](Self::is_open) and therefore normalizes
    /// to open.
    pub fn toggle(&self, dom: &mut impl Document, menu: NodeId) {
        if self.is_open(dom, menu) {
            self.close(dom, menu);
        } else {
            self.open(dom, menu);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_core::DomStore;

    fn manager() -> MenuManager {
        MenuManager::new(MenuClasses::default())
    }

    fn closed_menu() -> (DomStore, NodeId) {
        let mut dom = DomStore::new();
        let menu = dom.insert_element(
            "div",
            &[("id", Some("js-menu")), ("class", Some("-translate-x-full"))],
        );
        (dom, menu)
    }

    #[test]
    fn close_after_open_leaves_exactly_the_close_classes() {
        let (mut dom, menu) = closed_menu();
        let mgr = manager();
        mgr.open(&mut dom, menu);
        mgr.close(&mut dom, menu);
        assert_eq!(dom.classes(menu), ["-translate-x-full"]);
    }

    #[test]
    fn open_after_close_leaves_exactly_the_open_classes() {
        let (mut dom, menu) = closed_menu();
        let mgr = manager();
        mgr.close(&mut dom, menu);
        mgr.open(&mut dom, menu);
        assert_eq!(dom.classes(menu), ["shadow-lg"]);
    }

    #[test]
    fn open_is_idempotent() {
        let (mut dom, menu) = closed_menu();
        let mgr = manager();
        mgr.open(&mut dom, menu);
        let after_first: Vec<String> = dom.classes(menu).to_vec();
        mgr.open(&mut dom, menu);
        assert_eq!(dom.classes(menu), after_first.as_slice());
    }

    #[test]
    fn toggle_twice_is_identity_from_either_rest_state() {
        let (mut dom, menu) = closed_menu();
        let mgr = manager();

        mgr.toggle(&mut dom, menu);
        assert!(mgr.is_open(&dom, menu));
        mgr.toggle(&mut dom, menu);
        assert!(!mgr.is_open(&dom, menu));
        assert_eq!(dom.classes(menu), ["-translate-x-full"]);

        mgr.open(&mut dom, menu);
        mgr.toggle(&mut dom, menu);
        mgr.toggle(&mut dom, menu);
        assert!(mgr.is_open(&dom, menu));
        assert_eq!(dom.classes(menu), ["shadow-lg"]);
    }

    #[test]
    fn toggle_normalizes_a_mixed_state_to_open() {
        let mut dom = DomStore::new();
        // Both state classes present: not a rest state this manager produces.
        let menu = dom.insert_element(
            "div",
            &[("class", Some("shadow-lg -translate-x-full"))],
        );
        let mgr = manager();
        assert!(!mgr.is_open(&dom, menu));
        mgr.toggle(&mut dom, menu);
        assert!(mgr.is_open(&dom, menu));
        assert_eq!(dom.classes(menu), ["shadow-lg"]);
    }

    #[test]
    fn asymmetric_class_lists_still_reach_exact_rest_states() {
        let mut dom = DomStore::new();
        let menu = dom.insert_element("div", &[]);
        let mgr = MenuManager::new(MenuClasses {
            open: vec!["visible".to_string(), "shadow-lg".to_string()],
            close: vec!["hidden".to_string()],
        });

        mgr.open(&mut dom, menu);
        assert_eq!(dom.classes(menu), ["visible", "shadow-lg"]);
        mgr.close(&mut dom, menu);
        assert_eq!(dom.classes(menu), ["hidden"]);
    }

    #[test]
    fn foreign_classes_survive_both_transitions() {
        let mut dom = DomStore::new();
        let menu = dom.insert_element("nav", &[("class", Some("site-nav -translate-x-full"))]);
        let mgr = manager();
        mgr.open(&mut dom, menu);
        mgr.close(&mut dom, menu);
        assert!(dom.has_class(menu, "site-nav"));
    }
}
