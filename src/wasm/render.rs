//! The dot-wave animator: two canvases flanking the page, each with a
//! dot grid lifted by a traveling pulse.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::wave::{self, Dot, Side, WaveConfig};

/// One animated drawing target and its owned dot grid. Rebuilt wholesale
/// on every restart; `width`/`height` are CSS pixels, the backing store
/// is scaled by the device pixel ratio.
struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    side: Side,
    width: f64,
    height: f64,
    dots: Vec<Dot>,
}

impl Surface {
    fn measure(
        win: &Window,
        canvas: &HtmlCanvasElement,
        side: Side,
        cfg: &WaveConfig,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("canvas: missing 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let dpr = win.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let (width, height) = (rect.width(), rect.height());
        // Resizing the backing store resets the context transform, so the
        // scale below starts from identity on every restart.
        canvas.set_width((width * dpr) as u32);
        canvas.set_height((height * dpr) as u32);
        ctx.scale(dpr, dpr)?;

        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            side,
            width,
            height,
            dots: wave::dot_grid(width, height, cfg.dot_spacing),
        })
    }

    #[allow(deprecated)]
    fn draw(&self, clock: u64, cfg: &WaveConfig, fill: &str) -> Result<(), JsValue> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.set_fill_style(&JsValue::from_str(fill));

        let center = self
            .side
            .orient(wave::pulse_center(clock, self.width, cfg), self.width);
        for dot in &self.dots {
            let lift = wave::lift((dot.x - center).abs(), cfg);
            self.ctx.begin_path();
            self.ctx
                .arc(dot.x, dot.y - lift, cfg.dot_radius, 0.0, std::f64::consts::TAU)?;
            self.ctx.fill();
        }
        Ok(())
    }
}

struct Inner {
    config: WaveConfig,
    clock: u64,
    surfaces: Vec<Surface>,
    raf_id: Option<i32>,
}

/// The animator component. Holds the two canvas elements it was
/// constructed with; `start` re-measures them and swaps in fresh
/// surfaces, so a resize or theme change just calls `start` again.
#[derive(Clone)]
pub struct Animator {
    left: HtmlCanvasElement,
    right: HtmlCanvasElement,
    inner: Rc<RefCell<Inner>>,
    // Holds the current animation-frame closure so it can keep
    // rescheduling itself; replaced (and the old one dropped) on restart.
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Animator {
    pub fn new(left: HtmlCanvasElement, right: HtmlCanvasElement) -> Self {
        Self {
            left,
            right,
            inner: Rc::new(RefCell::new(Inner {
                config: WaveConfig::default(),
                clock: 0,
                surfaces: Vec::new(),
                raf_id: None,
            })),
            frame: Rc::new(RefCell::new(None)),
        }
    }

    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self::new(
            canvas_by_id(document, "left-wave")?,
            canvas_by_id(document, "right-wave")?,
        ))
    }

    /// (Re)start the animation. Cancels any pending frame first, so
    /// calling this repeatedly never leaves two loops running.
    pub fn start(&self) -> Result<(), JsValue> {
        let win = window().ok_or("no window")?;
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(id) = inner.raf_id.take() {
                win.cancel_animation_frame(id)?;
            }
            inner.clock = 0;
            inner.surfaces.clear();
            let cfg = inner.config;
            inner
                .surfaces
                .push(Surface::measure(&win, &self.left, Side::Left, &cfg)?);
            inner
                .surfaces
                .push(Surface::measure(&win, &self.right, Side::Right, &cfg)?);
        }

        let handle = self.clone();
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Err(e) = handle.render_frame() {
                log::error!("wave frame failed: {e:?}");
            }
        }) as Box<dyn FnMut()>));

        let id = win.request_animation_frame(
            self.frame
                .borrow()
                .as_ref()
                .ok_or("no frame closure")?
                .as_ref()
                .unchecked_ref(),
        )?;
        self.inner.borrow_mut().raf_id = Some(id);
        Ok(())
    }

    fn render_frame(&self) -> Result<(), JsValue> {
        let win = window().ok_or("no window")?;
        let fill = dot_color(&win)?;
        {
            let mut inner = self.inner.borrow_mut();
            inner.clock += 1;
            let cfg = inner.config;
            let clock = inner.clock;
            for surface in &inner.surfaces {
                surface.draw(clock, &cfg, &fill)?;
            }
        }

        let id = win.request_animation_frame(
            self.frame
                .borrow()
                .as_ref()
                .ok_or("no frame closure")?
                .as_ref()
                .unchecked_ref(),
        )?;
        self.inner.borrow_mut().raf_id = Some(id);
        Ok(())
    }

    /// Number of registered surfaces. Always two once started.
    pub fn surface_count(&self) -> usize {
        self.inner.borrow().surfaces.len()
    }

    /// Whether a frame is currently scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.inner.borrow().raf_id.is_some()
    }
}

/// Restart the animator whenever the window resizes, picking up the new
/// canvas rectangles.
pub fn hook_resize(animator: &Animator) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let handle = animator.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Err(e) = handle.start() {
            log::error!("wave restart on resize failed: {e:?}");
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    Ok(super::dom::by_id(document, id)?.dyn_into::<HtmlCanvasElement>()?)
}

/// Dot color comes from the page theme; read every frame so a theme
/// switch shows up without waiting for the restart.
fn dot_color(win: &Window) -> Result<String, JsValue> {
    let document = win.document().ok_or("no document")?;
    let root = document.document_element().ok_or("no document element")?;
    let style = win.get_computed_style(&root)?.ok_or("no computed style")?;
    Ok(style.get_property_value("--dot-base-color")?.trim().to_string())
}
