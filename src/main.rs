use std::{sync::Arc, time::Instant};

use glam::{Vec2, Vec3};
use roam::camera::core::Camera;
use roam::input::InputProcessor;
use roam::options::Options;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

/// Interactive camera test rig: a blank window with the cursor captured,
/// WASD + mouse-look driving the camera, pose logged once per second.
struct ViewerApp {
    window: Option<Arc<Window>>,
    camera: Camera,
    input: InputProcessor,
    last_frame_time: Instant,
    last_report_time: Instant,
}

impl ViewerApp {
    fn new(options: &Options) -> Self {
        Self {
            window: None,
            camera: Camera::with_options(Vec3::ZERO, &options.camera),
            input: InputProcessor::new(options.keybindings.clone()),
            last_frame_time: Instant::now(),
            last_report_time: Instant::now(),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes().with_title("Roam");
            let window = Arc::new(event_loop.create_window(attrs).unwrap());

            // Lock the cursor so mouse-look gets relative deltas; some
            // platforms only support confinement.
            if let Err(e) = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
            {
                log::warn!("cursor grab unavailable: {e}");
            }
            window.set_cursor_visible(false);

            window.request_redraw();
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Focused(false) => {
                // Keys released while unfocused never reach us
                self.input.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape {
                        event_loop.exit();
                        return;
                    }
                    let key_str = format!("{code:?}");
                    let pressed = event.state == ElementState::Pressed;
                    let _ = self.input.handle_key(
                        &mut self.camera,
                        &key_str,
                        pressed,
                    );
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt =
                    now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                self.input.advance(&mut self.camera, dt);

                if now.duration_since(self.last_report_time).as_secs_f32()
                    > 1.0
                {
                    self.last_report_time = now;
                    log::info!(
                        "pos {:?} yaw {:.1} pitch {:.1} front {:?} {}",
                        self.camera.position(),
                        self.camera.yaw(),
                        self.camera.pitch(),
                        self.camera.front(),
                        if self.camera.is_flying() {
                            "flying"
                        } else {
                            "walking"
                        }
                    );
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.handle_pointer_delta(
                &mut self.camera,
                Vec2::new(delta.0 as f32, delta.1 as f32),
            );
        }
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut app = ViewerApp::new(&options);
    let event_loop = EventLoop::new().unwrap();

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app).expect("Event loop error");
}
