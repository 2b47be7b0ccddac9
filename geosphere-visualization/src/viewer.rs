//! Viewer controller: owns the session and the presentation state
//!
//! The host application forwards window events and panel actions here and
//! draws whatever [`GeodesicViewer::frame`] returns.

use geosphere_core::{format_point, GeodesicSession, Result, SphereConfig};
use geosphere_io::parse_coordinates;
use log::{info, warn};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::camera::OrbitCamera;
use crate::panel::{ControlPanel, Notice, CLEARED_STATUS};
use crate::presets::find_preset;
use crate::scene::{SceneFrame, SceneStyle};

/// Actions reachable from the keyboard and the panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Add the point typed in the panel
    Submit,
    /// Remove every point and arc
    Clear,
    /// Close the window
    Close,
}

/// Map a key press to an action: `C` clears, `Enter` submits, `Escape` closes
pub fn key_action(key: &Key, state: ElementState) -> Option<ViewerAction> {
    if state != ElementState::Pressed {
        return None;
    }
    match key {
        Key::Named(NamedKey::Enter) => Some(ViewerAction::Submit),
        Key::Named(NamedKey::Escape) => Some(ViewerAction::Close),
        Key::Character(c) if c.eq_ignore_ascii_case("c") => Some(ViewerAction::Clear),
        _ => None,
    }
}

/// What handling an event produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventOutcome {
    pub notice: Option<Notice>,
    pub redraw: bool,
}

/// Interactive geodesic viewer state
pub struct GeodesicViewer {
    session: GeodesicSession,
    camera: OrbitCamera,
    panel: ControlPanel,
    style: SceneStyle,
    cursor: Option<PhysicalPosition<f64>>,
    close_requested: bool,
}

impl GeodesicViewer {
    /// Create a new viewer
    pub fn new(config: SphereConfig) -> Result<Self> {
        Ok(Self::with_session(GeodesicSession::new(config)?))
    }

    pub fn with_session(session: GeodesicSession) -> Self {
        Self {
            session,
            camera: OrbitCamera::default(),
            panel: ControlPanel::new(),
            style: SceneStyle::default(),
            cursor: None,
            close_requested: false,
        }
    }

    pub fn session(&self) -> &GeodesicSession {
        &self.session
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn set_style(&mut self, style: SceneStyle) {
        self.style = style;
    }

    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    /// Replace the coordinate input text
    pub fn set_input(&mut self, text: &str) {
        self.panel.input = text.to_string();
    }

    /// Put a preset's coordinates in the input; false if the name is unknown
    pub fn apply_preset(&mut self, name: &str) -> bool {
        match find_preset(name) {
            Some(preset) => {
                self.set_input(preset.coords);
                true
            }
            None => false,
        }
    }

    /// Parse the input text and add the point
    pub fn submit(&mut self) -> Notice {
        let text = self.panel.input.trim().to_string();
        if text.is_empty() {
            return self.notify(Notice::warning("Input Error", "Please enter coordinates"));
        }

        let [x, y, z] = match parse_coordinates(&text) {
            Ok(coords) => coords,
            Err(e) => return self.notify(Notice::warning("Input Error", e.to_string())),
        };

        let notice = match self.session.add_point(x, y, z) {
            Ok(point) => Notice::Status(format!("Point added at {}", format_point(&point))),
            Err(e) => Notice::warning("Error", e.to_string()),
        };
        self.notify(notice)
    }

    /// Clear every point and arc
    pub fn clear(&mut self) -> Notice {
        self.session.clear();
        self.notify(Notice::Status(CLEARED_STATUS.to_string()))
    }

    pub fn perform(&mut self, action: ViewerAction) -> Option<Notice> {
        match action {
            ViewerAction::Submit => Some(self.submit()),
            ViewerAction::Clear => Some(self.clear()),
            ViewerAction::Close => {
                self.close_requested = true;
                None
            }
        }
    }

    pub fn handle_key(&mut self, key: &Key, state: ElementState) -> EventOutcome {
        match key_action(key, state) {
            Some(action) => EventOutcome {
                redraw: action != ViewerAction::Close,
                notice: self.perform(action),
            },
            None => EventOutcome::default(),
        }
    }

    /// Right button press starts a rotation drag at the last cursor position
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Right {
            return;
        }
        match state {
            ElementState::Pressed => {
                if let Some(cursor) = self.cursor {
                    self.camera.begin_drag(cursor);
                }
            }
            ElementState::Released => self.camera.end_drag(),
        }
    }

    /// Returns true when the camera rotated
    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> bool {
        self.cursor = Some(position);
        self.camera.drag_to(position)
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> EventOutcome {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(&event.logical_key, event.state)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(*button, *state);
                EventOutcome::default()
            }
            WindowEvent::CursorMoved { position, .. } => EventOutcome {
                notice: None,
                redraw: self.handle_cursor_moved(*position),
            },
            WindowEvent::Resized(size) => {
                self.camera.resize(size.width, size.height);
                EventOutcome { notice: None, redraw: true }
            }
            WindowEvent::CloseRequested => {
                self.close_requested = true;
                EventOutcome::default()
            }
            _ => EventOutcome::default(),
        }
    }

    /// Geometry for the current frame
    pub fn frame(&self) -> SceneFrame {
        SceneFrame::build(&self.session.snapshot(), &self.camera, &self.style)
    }

    fn notify(&mut self, notice: Notice) -> Notice {
        match &notice {
            Notice::Status(text) => info!("{}", text),
            Notice::Warning { title, message } => warn!("{}: {}", title, message),
        }
        self.panel.apply(&notice);
        notice
    }
}

impl Default for GeodesicViewer {
    fn default() -> Self {
        Self::with_session(GeodesicSession::default())
    }
}
