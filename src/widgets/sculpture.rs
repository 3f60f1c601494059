use crate::constants::{CLASS_SNIPPET, SCULPTURE_CANVAS_ID, SNIPPETS_OVERLAY_ID, SNIPPET_TAG};
use crate::core::constants::{PLACEHOLDER_SNIPPETS, SNIPPET_CAP, SNIPPET_LIFETIME_MS};
use crate::core::snippets::pick_snippet;
use crate::core::{NetworkParams, ParticleNetwork, SnippetFeed};
use crate::dom::{self, SetupError};
use crate::frame;
use crate::input;
use crate::render::CanvasSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Data sculpture: particle network with pointer repulsion, plus floating
/// snippets when the overlay is present.
pub fn wire_data_sculpture(document: &web::Document) -> Result<(), SetupError> {
    let (canvas, ctx) = dom::canvas_2d(document, SCULPTURE_CANVAS_ID)?;
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    let (w, h) = dom::sync_canvas_to_layout(&canvas);
    let network = Rc::new(RefCell::new(ParticleNetwork::new(
        NetworkParams::default(),
        w,
        h,
        &mut *rng.borrow_mut(),
    )));
    {
        let (canvas, network, rng) = (canvas.clone(), network.clone(), rng.clone());
        dom::on_window_resize(move || {
            let (w, h) = dom::sync_canvas_to_layout(&canvas);
            network.borrow_mut().resize(w, h, &mut *rng.borrow_mut());
        });
    }

    let (n, target) = (network.clone(), canvas.clone());
    dom::add_listener(&canvas, "mousemove", move |ev: web::MouseEvent| {
        n.borrow_mut()
            .set_pointer(Some(input::mouse_in_rect(&ev, &target)));
    });
    let n = network.clone();
    dom::add_listener(&canvas, "mouseleave", move |_: web::MouseEvent| {
        n.borrow_mut().set_pointer(None);
    });

    log::info!(
        "[sculpture] particles={} canvas={}x{}",
        network.borrow().particles().len(),
        w,
        h
    );
    {
        let network = network.clone();
        frame::start_loop(move || {
            network.borrow_mut().frame(&mut CanvasSurface::new(&ctx));
        });
    }

    match dom::require_id(document, SNIPPETS_OVERLAY_ID) {
        Ok(overlay) => wire_snippets(document, &canvas, overlay, rng),
        Err(e) => log::warn!("[sculpture] snippets disabled: {}", e),
    }
    Ok(())
}

fn wire_snippets(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    overlay: web::Element,
    rng: Rc<RefCell<StdRng>>,
) {
    let feed: Rc<RefCell<SnippetFeed<web::Element>>> =
        Rc::new(RefCell::new(SnippetFeed::new(SNIPPET_CAP)));
    let document = document.clone();
    dom::add_listener(canvas, "click", move |_: web::MouseEvent| {
        let Some(text) = pick_snippet(&mut *rng.borrow_mut(), &PLACEHOLDER_SNIPPETS) else {
            return;
        };
        let Ok(el) = document.create_element(SNIPPET_TAG) else {
            return;
        };
        _ = el.class_list().add_1(CLASS_SNIPPET);
        el.set_text_content(Some(text));
        // Newest first; the overlay is a reversed flex column.
        _ = overlay.prepend_with_node_1(&el);

        let (id, evicted) = feed.borrow_mut().push(el);
        for old in evicted {
            old.remove();
        }
        let feed = feed.clone();
        dom::set_timeout(SNIPPET_LIFETIME_MS, move || {
            if let Some(el) = feed.borrow_mut().expire(id) {
                el.remove();
            }
        });
    });
}
