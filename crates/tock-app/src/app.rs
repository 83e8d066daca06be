use std::time::Instant;

use tock_dial::{Clock, ClockController, SystemClock, TickToken};
use tock_engine::coords::Vec2;
use tock_engine::core::{App, AppControl, FrameCtx};
use tock_engine::input::Key;
use tock_engine::render::shapes::{CircleRenderer, LineRenderer, TextRenderer};
use tock_engine::scene::DrawList;
use tock_engine::text::{FontId, FontSystem};
use tock_engine::time::Timers;

use crate::canvas::{push_centered_text, DrawListCanvas, PAINT_ORDER, STATUS_TAG, STATUS_Z};
use crate::scheduler::TimerScheduler;
use crate::theme::Theme;
use crate::zone_picker::ZonePicker;

const STATUS_SIZE: f32 = 16.0;
const STATUS_GAP: f32 = 45.0;

/// The clock window: one controller, its zone picker and the renderers that
/// paint the retained draw list.
pub struct ClockApp<C: Clock = SystemClock> {
    title: String,
    controller: ClockController<C>,
    picker: ZonePicker,
    timers: Timers<TickToken>,

    draw_list: DrawList,
    fonts: FontSystem,
    font: Option<FontId>,
    theme: Theme,

    circles: CircleRenderer,
    lines: LineRenderer,
    texts: TextRenderer,

    title_dirty: bool,
}

impl<C: Clock> ClockApp<C> {
    pub fn new(
        title: impl Into<String>,
        controller: ClockController<C>,
        fonts: FontSystem,
        font: Option<FontId>,
    ) -> Self {
        let picker = ZonePicker::new(controller.zone().name());
        Self {
            title: title.into(),
            controller,
            picker,
            timers: Timers::new(),
            draw_list: DrawList::new(),
            fonts,
            font,
            theme: Theme::default(),
            circles: CircleRenderer::new(),
            lines: LineRenderer::new(),
            texts: TextRenderer::new(),
            title_dirty: true,
        }
    }

    /// Draws the face and the first hands, and arms the first tick from `now`.
    pub fn start(&mut self, now: Instant) {
        let mut canvas = DrawListCanvas {
            list: &mut self.draw_list,
            fonts: &self.fonts,
            font: self.font,
            theme: &self.theme,
        };
        let mut scheduler = TimerScheduler { timers: &mut self.timers, now };
        self.controller.mount(&mut canvas, &mut scheduler);
        self.draw_status();
        log::info!("clock started in {}", self.controller.zone());
    }

    /// Window title for the current zone.
    pub fn window_title(&self) -> String {
        format!("{} ({})", self.title, self.controller.zone())
    }

    /// Delivers every tick due at `now`; returns how many were delivered.
    fn fire_due(&mut self, now: Instant) -> usize {
        let due = self.timers.take_due(now);
        for &token in &due {
            let mut canvas = DrawListCanvas {
                list: &mut self.draw_list,
                fonts: &self.fonts,
                font: self.font,
                theme: &self.theme,
            };
            let mut scheduler = TimerScheduler { timers: &mut self.timers, now };
            self.controller.on_timer(token, &mut canvas, &mut scheduler);
        }
        due.len()
    }

    fn handle_key(&mut self, key: Key) -> AppControl {
        let moved = match key {
            Key::ArrowLeft => Some(self.picker.step(-1)),
            Key::ArrowRight => Some(self.picker.step(1)),
            Key::PageUp => Some(self.picker.step(-10)),
            Key::PageDown => Some(self.picker.step(10)),
            Key::Home => self.picker.select_utc().then(|| self.picker.current()),
            Key::L => self.picker.select_local().then(|| self.picker.current()),
            Key::Escape => {
                self.shut_down();
                return AppControl::Exit;
            }
            _ => None,
        };

        if let Some(name) = moved {
            self.change_zone(name);
        }
        AppControl::Continue
    }

    fn change_zone(&mut self, name: &str) {
        let mut canvas = DrawListCanvas {
            list: &mut self.draw_list,
            fonts: &self.fonts,
            font: self.font,
            theme: &self.theme,
        };
        match self.controller.set_zone(name, &mut canvas) {
            Ok(()) => self.title_dirty = true,
            Err(e) => {
                log::warn!("{e}");
                self.picker.select(self.controller.zone().name());
            }
        }
        self.draw_status();
    }

    fn draw_status(&mut self) {
        self.draw_list.remove_tagged(STATUS_TAG);

        let geom = self.controller.geometry();
        let anchor = Vec2::new(
            geom.center().x as f32,
            (geom.center().y + geom.radius()) as f32 + STATUS_GAP,
        );
        push_centered_text(
            &mut self.draw_list,
            &self.fonts,
            self.font,
            (STATUS_TAG, STATUS_Z),
            &self.picker.status_line(),
            anchor,
            STATUS_SIZE,
            self.theme.status,
        );
    }

    fn shut_down(&mut self) {
        log::debug!("dropping {} pending ticks", self.timers.len());
        self.controller.stop();
        self.timers.clear();
    }
}

impl<C: Clock + 'static> App for ClockApp<C> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for press in &ctx.input_frame.key_presses {
            if self.handle_key(press.key) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        self.fire_due(ctx.now);

        if self.title_dirty {
            ctx.runtime.set_title(self.window_title());
            self.title_dirty = false;
        }

        log::trace!("painting {} draw items", self.draw_list.len());

        let (circles, lines, texts) = (&mut self.circles, &mut self.lines, &mut self.texts);
        let (list, fonts) = (&mut self.draw_list, &self.fonts);

        ctx.render(self.theme.background, |rctx, target| {
            circles.prepare(rctx, list);
            lines.prepare(rctx, list);
            texts.prepare(rctx, list, fonts);

            for z in PAINT_ORDER {
                circles.render_layer(target, z);
                lines.render_layer(target, z);
                texts.render_layer(target, z);
            }
        })
    }

    fn next_wakeup(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn on_close(&mut self) {
        self.shut_down();
        log::info!("clock closed");
    }
}
