use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use camera_viewer::camera::CameraState;
use camera_viewer::cli::Cli;
use camera_viewer::frame::FrameClock;
use camera_viewer::input::{InputSource, WinitInput};
use camera_viewer::renderer::Renderer;
use camera_viewer::view::{SceneTransforms, ViewProjection};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: CameraState,
    input: WinitInput,
    clock: FrameClock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            camera: CameraState::new(),
            input: WinitInput::new(),
            clock: FrameClock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Camera Viewer")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(
                window.clone(),
                !self.cli.no_overlay,
            )) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            // Start timing from the first presented frame, not process start
            self.clock = FrameClock::new();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::Focused(_) => {
                self.input.process_event(&event);
            }
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                self.update_fps(frame.delta);

                let signal = self.input.poll();
                self.camera.update(&signal, frame.time);

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    let view_projection =
                        ViewProjection::derive(&self.camera, renderer.aspect());
                    let transforms = SceneTransforms::derive(&self.camera);
                    let status = self.camera.status_text();

                    match renderer.render(window, &view_projection, &transforms, &status, self.fps)
                    {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {}", e),
                    }
                }

                // Quit after the frame has been presented
                if signal.exit {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!(
        "Camera Viewer - Controls: arrows move camera, A/S/Z/W move target, \
         X/C roll, left click cycles auto mode, Escape quits"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
