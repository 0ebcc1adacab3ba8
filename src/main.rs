//! Demo driver: builds the marketing-page skeleton, replays a scripted
//! click-and-scroll session against it, and prints each transition.
//!
//! Run with `RUST_LOG=menu=trace,sticky=trace` to watch the managers'
//! internal decisions alongside the printed session.

use core_types::ScrollOffset;
use dom_core::{DomStore, NodeId};
use site::App;
use sticky_core::FixedScrollSource;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

struct DemoPage {
    dom: DomStore,
    toggle_btn: NodeId,
    open_all_btn: NodeId,
    menu: NodeId,
}

fn demo_page() -> DemoPage {
    let mut dom = DomStore::new();
    dom.insert_element(
        "header",
        &[("id", Some("js-sticky")), ("class", Some("-translate-y-full"))],
    );
    let toggle_btn = dom.insert_element("button", &[("data-menu-toggle", Some("js-menu"))]);
    let open_all_btn =
        dom.insert_element("button", &[("data-menu-open", Some("js-menu,js-menu-2"))]);
    dom.insert_element("button", &[("data-menu-close", Some("js-menu,js-menu-2"))]);
    let menu = dom.insert_element(
        "nav",
        &[("id", Some("js-menu")), ("class", Some("-translate-x-full"))],
    );
    dom.insert_element(
        "nav",
        &[("id", Some("js-menu-2")), ("class", Some("-translate-x-full"))],
    );
    DemoPage {
        dom,
        toggle_btn,
        open_all_btn,
        menu,
    }
}

fn print_header(app: &App<FixedScrollSource>, label: &str) {
    let visible = app.sticky().is_some_and(|s| s.is_visible());
    println!("{label:<18} header {}", if visible { "visible" } else { "hidden" });
}

fn main() {
    env_logger::init();

    let page = demo_page();
    let mut app = App::mount(page.dom, FixedScrollSource::default());
    print_header(&app, "mount");

    for y in [40.0, 160.0, 320.0, 180.0, 60.0] {
        app.scroll_source_mut().set(ScrollOffset::new(0.0, y));
        app.handle_scroll();
        print_header(&app, &format!("scroll y={y}"));
    }

    app.handle_click(page.toggle_btn);
    println!(
        "toggle             menu {}",
        if app.menu().is_open(app.dom(), page.menu) { "open" } else { "closed" }
    );
    app.handle_click(page.toggle_btn);
    println!(
        "toggle             menu {}",
        if app.menu().is_open(app.dom(), page.menu) { "open" } else { "closed" }
    );
    app.handle_click(page.open_all_btn);

    println!("\nfinal document:");
    println!("{}", dom_core::snapshot::render(app.dom()));
}
