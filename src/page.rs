// Wires the portfolio page: navigation, typing headline, counters, reveal
// animations, card hover effects and the cursor follower. Missing optional
// elements are logged and skipped.

use crate::color::skill_color;
use crate::counter::{Counter, CounterConfig};
use crate::dom_helpers::{
    document, log_error, on_event, query, query_all, request_animation_frame, run_timer,
    viewport_size, window,
};
use crate::navigation::{self, Section};
use crate::reveal;
use crate::typing::{TypingConfig, Typewriter};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

pub fn setup(document: &Document) -> Result<(), JsValue> {
    setup_menu(document)?;
    setup_anchor_scrolling(document)?;
    setup_typing(document, TypingConfig::default())?;
    setup_skill_cards(document)?;
    setup_project_cards(document)?;
    setup_cursor(document)?;

    let effects = Rc::new(RefCell::new(ScrollEffects::new(document, CounterConfig::default())?));
    effects.borrow_mut().update()?;
    setup_scroll(effects.clone())?;
    setup_load(effects)
}

fn setup_menu(document: &Document) -> Result<(), JsValue> {
    let (toggle, menu) = match (query(document, ".nav-toggle")?, query(document, ".nav-menu")?) {
        (Some(toggle), Some(menu)) => (toggle, menu),
        _ => {
            crate::console_log!("no mobile menu on this page");
            return Ok(());
        }
    };

    {
        let toggle_clone = toggle.clone();
        let menu = menu.clone();
        on_event(&toggle, "click", move |_| {
            log_error(toggle_clone.class_list().toggle("active"));
            log_error(menu.class_list().toggle("active"));
        })?;
    }

    for link in query_all(document, ".nav-link")? {
        let toggle = toggle.clone();
        let menu = menu.clone();
        on_event(&link, "click", move |_| {
            log_error(toggle.class_list().remove_1("active"));
            log_error(menu.class_list().remove_1("active"));
        })?;
    }
    Ok(())
}

fn setup_anchor_scrolling(document: &Document) -> Result<(), JsValue> {
    for anchor in query_all(document, "a[href^=\"#\"]")? {
        let target = anchor.clone();
        on_event(&anchor, "click", move |event| {
            event.prevent_default();
            let href = target.get_attribute("href").unwrap_or_default();
            if let Err(e) = scroll_to_anchor(&href) {
                web_sys::console::error_1(&e);
            }
        })?;
    }
    Ok(())
}

fn scroll_to_anchor(href: &str) -> Result<(), JsValue> {
    let id = match navigation::anchor_id(href) {
        Some(id) => id,
        None => return Ok(()),
    };
    let target = document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    if let Some(target) = target {
        let options = ScrollToOptions::new();
        options.set_top(navigation::anchor_scroll_target(target.offset_top() as f64));
        options.set_behavior(ScrollBehavior::Smooth);
        window()?.scroll_to_with_scroll_to_options(&options);
    }
    Ok(())
}

fn setup_typing(document: &Document, config: TypingConfig) -> Result<(), JsValue> {
    let element = match query(document, ".typing-text")? {
        Some(element) => element,
        None => {
            crate::console_log!("no .typing-text element, skipping typing effect");
            return Ok(());
        }
    };
    let mut typewriter = Typewriter::new(config);
    run_timer(0, move || {
        let frame = typewriter.step();
        element.set_text_content(Some(&frame.text));
        Some(frame.delay_ms as i32)
    })
}

fn setup_skill_cards(document: &Document) -> Result<(), JsValue> {
    for card in query_all(document, ".skill-card")? {
        let target = card.clone();
        on_event(&card, "mouseenter", move |_| {
            let skill = target.get_attribute("data-skill").unwrap_or_default();
            log_error(
                target
                    .style()
                    .set_property("--hover-color", &skill_color(&skill).to_hex()),
            );
        })?;
    }
    Ok(())
}

fn setup_project_cards(document: &Document) -> Result<(), JsValue> {
    for card in query_all(document, ".project-card")? {
        let target = card.clone();
        on_event(&card, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let rect = target.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                let style = target.style();
                log_error(style.set_property("--mouse-x", &format!("{}px", x)));
                log_error(style.set_property("--mouse-y", &format!("{}px", y)));
            }
        })?;
    }
    Ok(())
}

fn setup_cursor(document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let cursor = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("div is not an HtmlElement"))?;
    cursor.set_class_name("custom-cursor");
    body.append_child(&cursor)?;

    on_event(document, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            let style = cursor.style();
            log_error(style.set_property("left", &format!("{}px", event.client_x())));
            log_error(style.set_property("top", &format!("{}px", event.client_y())));
        }
    })
}

// Page load: fade the body in and sync the nav highlight
fn setup_load(effects: Rc<RefCell<ScrollEffects>>) -> Result<(), JsValue> {
    let on_load = move || log_error(fade_in_body().and_then(|_| effects.borrow_mut().update()));

    // The module usually finishes instantiating after the page has loaded
    if document()?.ready_state() == "complete" {
        on_load();
        return Ok(());
    }
    let window = window()?;
    on_event(&window, "load", move |_| on_load())
}

fn fade_in_body() -> Result<(), JsValue> {
    let body = document()?
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let style = body.style();
    style.set_property("opacity", "0")?;
    style.set_property("transition", "opacity 0.5s ease")?;
    run_timer(100, move || {
        log_error(body.style().set_property("opacity", "1"));
        None
    })
}

// Scroll work is batched into one animation frame no matter how many scroll
// or resize events arrive in between.
fn setup_scroll(effects: Rc<RefCell<ScrollEffects>>) -> Result<(), JsValue> {
    let pending = Rc::new(Cell::new(false));

    let update = {
        let pending = pending.clone();
        Closure::wrap(Box::new(move || {
            log_error(effects.borrow_mut().update());
            pending.set(false);
        }) as Box<dyn FnMut()>)
    };

    let schedule = Rc::new(move || {
        if pending.get() {
            return;
        }
        pending.set(true);
        if let Err(e) = request_animation_frame(&update) {
            pending.set(false);
            web_sys::console::error_1(&e);
        }
    });

    // Resizes can bring counters and reveal targets into view as well
    let window = window()?;
    for name in ["scroll", "resize"].iter() {
        let schedule = schedule.clone();
        on_event(&window, name, move |_| (*schedule)())?;
    }
    Ok(())
}

struct StatCounter {
    element: HtmlElement,
    started: bool,
}

struct RevealTarget {
    element: HtmlElement,
    revealed: bool,
}

// Everything that depends on the scroll position
struct ScrollEffects {
    window: Window,
    document: Document,
    navbar: Option<HtmlElement>,
    nav_links: Vec<HtmlElement>,
    progress: Option<HtmlElement>,
    counters: Vec<StatCounter>,
    counter_config: CounterConfig,
    reveals: Vec<RevealTarget>,
}

impl ScrollEffects {
    fn new(document: &Document, counter_config: CounterConfig) -> Result<Self, JsValue> {
        let counters = query_all(document, ".stat-number")?
            .into_iter()
            .map(|element| StatCounter {
                element,
                started: false,
            })
            .collect();

        let reveals: Vec<RevealTarget> = query_all(document, reveal::REVEAL_SELECTOR)?
            .into_iter()
            .map(|element| RevealTarget {
                element,
                revealed: false,
            })
            .collect();
        for (index, target) in reveals.iter().enumerate() {
            let style = target.element.style();
            style.set_property("opacity", reveal::HIDDEN_OPACITY)?;
            style.set_property("transform", reveal::HIDDEN_TRANSFORM)?;
            style.set_property("transition", &reveal::transition(index))?;
        }

        Ok(ScrollEffects {
            window: window()?,
            document: document.clone(),
            navbar: query(document, ".navbar")?,
            nav_links: query_all(document, ".nav-link")?,
            progress: query(document, ".scroll-indicator .scroll-line")?,
            counters,
            counter_config,
            reveals,
        })
    }

    fn update(&mut self) -> Result<(), JsValue> {
        let scroll_y = self.window.scroll_y()?;
        let (_, viewport_height) = viewport_size(&self.window)?;

        if let Some(navbar) = &self.navbar {
            if navigation::is_scrolled(scroll_y) {
                navbar.class_list().add_1("scrolled")?;
            } else {
                navbar.class_list().remove_1("scrolled")?;
            }
        }

        self.update_active_link(scroll_y)?;

        if let Some(progress) = &self.progress {
            let scroll_height = self
                .document
                .document_element()
                .map(|root| root.scroll_height() as f64)
                .unwrap_or(viewport_height);
            let percent = navigation::scroll_progress(scroll_y, scroll_height, viewport_height);
            progress.style().set_property("width", &format!("{}%", percent))?;
        }

        self.start_visible_counters(viewport_height)?;
        self.reveal_visible(viewport_height)
    }

    fn update_active_link(&self, scroll_y: f64) -> Result<(), JsValue> {
        let sections: Vec<Section> = query_all(&self.document, "section[id]")?
            .into_iter()
            .map(|section| Section {
                id: section.id(),
                top: section.offset_top() as f64,
                height: section.offset_height() as f64,
            })
            .collect();

        // Nothing matched, keep whatever link was active
        let active = match navigation::active_section(&sections, scroll_y) {
            Some(section) => format!("#{}", section.id),
            None => return Ok(()),
        };
        for link in &self.nav_links {
            link.class_list().remove_1("active")?;
            if link.get_attribute("href").as_deref() == Some(active.as_str()) {
                link.class_list().add_1("active")?;
            }
        }
        Ok(())
    }

    fn start_visible_counters(&mut self, viewport_height: f64) -> Result<(), JsValue> {
        let threshold = self.counter_config.visible_threshold;
        let interval_ms = self.counter_config.interval_ms as i32;
        for stat in self.counters.iter_mut().filter(|stat| !stat.started) {
            let rect = stat.element.get_bounding_client_rect();
            let visible = reveal::visible_fraction(rect.top(), rect.height(), viewport_height, 0.0);
            if visible < threshold {
                continue;
            }
            stat.started = true;

            let element = stat.element.clone();
            let mut counter = Counter::from_attribute(
                element.get_attribute("data-target").as_deref(),
                &self.counter_config,
            );
            run_timer(interval_ms, move || {
                let text = counter.step();
                element.set_text_content(Some(&text));
                if counter.is_finished() {
                    None
                } else {
                    Some(interval_ms)
                }
            })?;
        }
        Ok(())
    }

    fn reveal_visible(&mut self, viewport_height: f64) -> Result<(), JsValue> {
        for target in self.reveals.iter_mut().filter(|target| !target.revealed) {
            let rect = target.element.get_bounding_client_rect();
            if !reveal::is_revealed(rect.top(), rect.height(), viewport_height) {
                continue;
            }
            target.revealed = true;
            let style = target.element.style();
            style.set_property("opacity", reveal::SHOWN_OPACITY)?;
            style.set_property("transform", reveal::SHOWN_TRANSFORM)?;
        }
        Ok(())
    }
}
