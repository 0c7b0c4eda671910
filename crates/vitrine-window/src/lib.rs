//! vitrine-window: minimal winit + wgpu window/event wrapper.
//!
//! Responsibilities:
//! - Create window + surface + device/queue.
//! - Manage surface configuration and resizing.
//! - Dispatch basic events (redraw, resize, cursor move/leave, mouse input).
//! - Present CPU-rasterized frames through the compositor in [`present`].

use anyhow::Result;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

pub mod present;

pub use present::FramePresenter;

pub struct VitrineWindow {
    // Winit objects
    event_loop: EventLoop<()>,
    // We must leak the window to satisfy wgpu surface lifetime requirements.
    window: &'static Window,
    // Wgpu objects
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'static>,
    _adapter: wgpu::Adapter,
    device: std::sync::Arc<wgpu::Device>,
    queue: std::sync::Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    scale_factor: f64,
}

pub struct WindowCtx<'a> {
    window: &'a Window,
    device: &'a std::sync::Arc<wgpu::Device>,
    queue: &'a std::sync::Arc<wgpu::Queue>,
    surface: &'a wgpu::Surface<'static>,
    config: &'a mut wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    scale_factor: f64,
    last_cursor_pos: [f32; 2],
    elwt: &'a EventLoopWindowTarget<()>,
}

impl<'a> WindowCtx<'a> {
    pub fn window(&self) -> &Window {
        self.window
    }
    pub fn device(&self) -> &wgpu::Device {
        self.device
    }
    pub fn queue(&self) -> &wgpu::Queue {
        self.queue
    }
    pub fn surface(&self) -> &wgpu::Surface<'static> {
        self.surface
    }
    pub fn surface_config(&self) -> &wgpu::SurfaceConfiguration {
        self.config
    }
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
    pub fn mouse_pos(&self) -> [f32; 2] {
        self.last_cursor_pos
    }
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
    pub fn acquire_current_frame(&self) -> Result<wgpu::SurfaceTexture> {
        Ok(self.surface.get_current_texture()?)
    }
    pub fn exit(&self) {
        self.elwt.exit();
    }
}

/// Callbacks an application implements against the window loop.
pub trait EventHandler {
    fn init(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }
    fn on_resize(&mut self, _ctx: &mut WindowCtx, _size: PhysicalSize<u32>) -> Result<()> {
        Ok(())
    }
    fn on_cursor_move(&mut self, _ctx: &mut WindowCtx, _pos: [f32; 2]) -> Result<()> {
        Ok(())
    }
    fn on_cursor_left(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }
    fn on_mouse_input(
        &mut self,
        _ctx: &mut WindowCtx,
        _state: ElementState,
        _button: MouseButton,
    ) -> Result<()> {
        Ok(())
    }
    /// Vertical scroll in physical pixels (line deltas are pre-scaled).
    fn on_scroll(&mut self, _ctx: &mut WindowCtx, _dy: f32) -> Result<()> {
        Ok(())
    }
    fn on_redraw(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }
}

macro_rules! ctx {
    ($self:ident, $cursor:ident, $elwt:ident) => {
        WindowCtx {
            window: $self.window,
            device: &$self.device,
            queue: &$self.queue,
            surface: &$self.surface,
            config: &mut $self.config,
            size: $self.size,
            scale_factor: $self.scale_factor,
            last_cursor_pos: $cursor,
            elwt: $elwt,
        }
    };
}

impl VitrineWindow {
    pub fn new(title: &str, logical_width: u32, logical_height: u32) -> Result<Self> {
        // Create event loop and window
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(logical_width, logical_height))
            .build(&event_loop)?;
        let window: &'static Window = Box::leak(Box::new(window));

        // Create wgpu instance + surface
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;

        // Request adapter/device
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .expect("No suitable GPU adapters found");
        let (device, queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default(), None))?;

        // Configure surface
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let config = make_surface_config(&adapter, &surface, size.width, size.height);
        surface.configure(&device, &config);

        Ok(Self {
            event_loop,
            window,
            _instance: instance,
            surface,
            _adapter: adapter,
            device: std::sync::Arc::new(device),
            queue: std::sync::Arc::new(queue),
            config,
            size,
            scale_factor,
        })
    }

    pub fn run(mut self, mut handler: impl EventHandler + 'static) -> Result<()> {
        let mut last_cursor_pos: [f32; 2] = [0.0, 0.0];
        let mut needs_init = true;

        Ok(self.event_loop.run(move |event, elwt| match event {
            Event::Resumed => {
                if needs_init {
                    let mut ctx = ctx!(self, last_cursor_pos, elwt);
                    let _ = handler.init(&mut ctx);
                    needs_init = false;
                }
            }
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(new_size) => {
                        self.size = new_size;
                        if new_size.width > 0 && new_size.height > 0 {
                            self.config.width = new_size.width;
                            self.config.height = new_size.height;
                            self.surface.configure(&self.device, &self.config);
                        }
                        let mut ctx = ctx!(self, last_cursor_pos, elwt);
                        let _ = handler.on_resize(&mut ctx, new_size);
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.scale_factor = scale_factor;
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        last_cursor_pos = [position.x as f32, position.y as f32];
                        let mut ctx = ctx!(self, last_cursor_pos, elwt);
                        let _ = handler.on_cursor_move(&mut ctx, last_cursor_pos);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        let mut ctx = ctx!(self, last_cursor_pos, elwt);
                        let _ = handler.on_cursor_left(&mut ctx);
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        let mut ctx = ctx!(self, last_cursor_pos, elwt);
                        let _ = handler.on_mouse_input(&mut ctx, state, button);
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        let dy = match delta {
                            winit::event::MouseScrollDelta::LineDelta(_, y) => y * 48.0,
                            winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                        };
                        let mut ctx = ctx!(self, last_cursor_pos, elwt);
                        let _ = handler.on_scroll(&mut ctx, dy);
                    }
                    WindowEvent::RedrawRequested => {
                        let mut ctx = ctx!(self, last_cursor_pos, elwt);
                        let _ = handler.on_redraw(&mut ctx);
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                // Animations are time-driven; keep frames coming.
                self.window.request_redraw();
            }
            _ => {}
        })?)
    }

    pub fn window(&self) -> &Window {
        self.window
    }
}

/// Choose an sRGB surface format when available; otherwise, pick the first format.
pub fn choose_srgb_surface_format(
    adapter: &wgpu::Adapter,
    surface: &wgpu::Surface,
) -> wgpu::TextureFormat {
    let caps = surface.get_capabilities(adapter);
    caps.formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(caps.formats[0])
}

/// Create a surface configuration for the given size, favoring FIFO present mode when present.
pub fn make_surface_config(
    adapter: &wgpu::Adapter,
    surface: &wgpu::Surface,
    width: u32,
    height: u32,
) -> wgpu::SurfaceConfiguration {
    let caps = surface.get_capabilities(adapter);
    let format = choose_srgb_surface_format(adapter, surface);
    let present_mode = caps
        .present_modes
        .iter()
        .copied()
        .find(|m| *m == wgpu::PresentMode::Fifo)
        .unwrap_or(caps.present_modes[0]);
    let alpha_mode = caps
        .alpha_modes
        .iter()
        .copied()
        .find(|m| *m == wgpu::CompositeAlphaMode::Opaque)
        .unwrap_or(caps.alpha_modes[0]);
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 1,
    }
}
