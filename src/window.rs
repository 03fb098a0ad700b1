use sdl2::event::{Event, WindowEvent as SdlWindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::colors;
use crate::error::ViewerError;
use crate::render::Surface;

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    ToggleMode,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    Resize(u32, u32),
    /// The window contents were lost and must be presented again.
    Exposed,
    Key(Key),
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Streaming texture reused across presents, rebuilt only when the
/// surface size changes.
pub struct FrameTexture<'a> {
    creator: &'a TextureCreator<WindowContext>,
    texture: Option<(Texture<'a>, u32, u32)>,
}

impl<'a> FrameTexture<'a> {
    pub fn new(creator: &'a TextureCreator<WindowContext>) -> Self {
        Self {
            creator,
            texture: None,
        }
    }

    fn size(&self) -> Option<(u32, u32)> {
        self.texture.as_ref().map(|(_, w, h)| (*w, *h))
    }

    /// Returns a texture of exactly `width` x `height`.
    fn fit(&mut self, width: u32, height: u32) -> Result<&mut Texture<'a>, ViewerError> {
        if needs_rebuild(self.size(), width, height) {
            let mut texture = self
                .creator
                .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
                .map_err(|e| ViewerError::Sdl(e.to_string()))?;
            texture.set_blend_mode(BlendMode::Blend);
            self.texture = Some((texture, width, height));
        }
        match self.texture.as_mut() {
            Some((texture, _, _)) => Ok(texture),
            None => Err(ViewerError::Sdl("frame texture missing".to_string())),
        }
    }
}

fn needs_rebuild(current: Option<(u32, u32)>, width: u32, height: u32) -> bool {
    current != Some((width, height))
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, ViewerError> {
        let sdl_context = sdl2::init().map_err(ViewerError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(ViewerError::Sdl)?;
        let timer_subsystem = sdl_context.timer().map_err(ViewerError::Sdl)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| ViewerError::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| ViewerError::Sdl(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(ViewerError::Sdl)?;

        Ok(Self {
            canvas,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains pending SDL events into viewer events.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            let mapped = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => Some(WindowEvent::Quit),
                Event::Window {
                    win_event: SdlWindowEvent::Resized(w, h),
                    ..
                } => {
                    self.width = w.max(0) as u32;
                    self.height = h.max(0) as u32;
                    Some(WindowEvent::Resize(self.width, self.height))
                }
                Event::Window {
                    win_event: SdlWindowEvent::Exposed,
                    ..
                } => Some(WindowEvent::Exposed),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => Self::map_key(keycode).map(WindowEvent::Key),
                _ => None,
            };
            events.extend(mapped);
        }
        events
    }

    fn map_key(keycode: Keycode) -> Option<Key> {
        match keycode {
            Keycode::Left => Some(Key::Left),
            Keycode::Right => Some(Key::Right),
            Keycode::Up => Some(Key::Up),
            Keycode::Down => Some(Key::Down),
            Keycode::W => Some(Key::ToggleMode),
            Keycode::R => Some(Key::Reset),
            _ => None,
        }
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    /// Blends `surface` over the background and shows it.
    pub fn present(
        &mut self,
        frame: &mut FrameTexture<'_>,
        surface: &Surface,
    ) -> Result<(), ViewerError> {
        let (r, g, b) = (colors::BACKGROUND.r, colors::BACKGROUND.g, colors::BACKGROUND.b);
        self.canvas.set_draw_color(Color::RGB(r, g, b));
        self.canvas.clear();

        if surface.width() > 0 && surface.height() > 0 {
            let texture = frame.fit(surface.width(), surface.height())?;
            texture
                .update(None, &surface.as_bytes(), surface.width() as usize * 4)
                .map_err(|e| ViewerError::Sdl(e.to_string()))?;
            self.canvas
                .copy(
                    texture,
                    None,
                    Some(Rect::new(0, 0, surface.width(), surface.height())),
                )
                .map_err(ViewerError::Sdl)?;
        }

        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
