use crate::particle::{self, Heart};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cancellation token for the field's animation loop. `stop()` halts
/// re-arming and cancels any frame already scheduled, so a caller-driven
/// teardown never leaks a running loop.
#[derive(Clone)]
pub struct FieldHandle {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FieldHandle {
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Start the decorative hearts field on `#hearts-canvas`. A page without
/// the canvas (or without a 2D context) simply goes without the feature.
pub fn init(document: &web::Document) -> Option<FieldHandle> {
    let canvas = document
        .get_element_by_id("hearts-canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    sync_canvas_to_viewport(&canvas);
    let pool = {
        let mut rng = rand::thread_rng();
        particle::make_pool(
            &mut rng,
            canvas.width() as f32,
            canvas.height() as f32,
        )
    };
    log::info!("[hearts] field started with {} hearts", pool.len());
    let pool = Rc::new(RefCell::new(pool));

    wire_resize(&canvas, &pool);

    let handle = FieldHandle {
        running: Rc::new(Cell::new(true)),
        pending: Rc::new(Cell::new(None)),
    };
    start_loop(canvas, ctx, pool, handle.clone());
    Some(handle)
}

/// Backing size tracks the viewport in CSS pixels; the field is a full-page
/// background layer, not a scaled element.
fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}

/// On resize: resync the backing size and regenerate the pool for the new
/// width. Discarding the old hearts resets animation continuity, an accepted
/// tradeoff for a decorative layer.
fn wire_resize(canvas: &web::HtmlCanvasElement, pool: &Rc<RefCell<Vec<Heart>>>) {
    let canvas_resize = canvas.clone();
    let pool_resize = pool.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_to_viewport(&canvas_resize);
        let mut rng = rand::thread_rng();
        *pool_resize.borrow_mut() = particle::make_pool(
            &mut rng,
            canvas_resize.width() as f32,
            canvas_resize.height() as f32,
        );
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn start_loop(
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pool: Rc<RefCell<Vec<Heart>>>,
    handle: FieldHandle,
) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running = handle.running.clone();
    let pending = handle.pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);

        {
            let mut rng = rand::thread_rng();
            let mut hearts = pool.borrow_mut();
            for heart in hearts.iter_mut() {
                heart.step(&mut rng, width, height);
                draw_heart(&ctx, heart);
            }
        }

        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                pending.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            handle.pending.set(Some(id));
        }
    }
}

/// Two-lobe bezier silhouette, filled with the heart's rgba color. Drawing
/// order across the pool is irrelevant: the shapes are semi-transparent and
/// non-interactive.
fn draw_heart(ctx: &web::CanvasRenderingContext2d, heart: &Heart) {
    let (x, y, s) = (heart.x as f64, heart.y as f64, heart.size as f64);
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.bezier_curve_to(x + s / 2.0, y - s / 2.0, x + s, y, x, y + s);
    ctx.bezier_curve_to(x - s, y, x - s / 2.0, y - s / 2.0, x, y);
    ctx.set_fill_style_str(&heart.fill_style());
    ctx.fill();
    ctx.close_path();
}
