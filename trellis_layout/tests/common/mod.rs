// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for layout integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::cell::RefCell;
use std::rc::Rc;

use trellis_input::{MouseButton, MouseEvent, MouseMoveEvent};
use trellis_layout::{
    AnimationDirection, Size, Surface, Widget, WidgetBase, WidgetError, WidgetFactory, WidgetKind,
};

/// A hook invocation seen by a [`Recorder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Move,
    Enter,
    Over,
    Leave,
    Down(MouseButton),
    Up(MouseButton),
    Click(MouseButton),
    Render,
    Advance,
}

/// Call log shared between the recorders of one test.
#[derive(Clone, Debug, Default)]
pub(crate) struct Log(Rc<RefCell<Vec<(String, Call)>>>);

impl Log {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&self, name: &str, call: Call) {
        self.0.borrow_mut().push((name.to_owned(), call));
    }

    /// Every call, in order, tagged with the recorder name.
    pub(crate) fn all(&self) -> Vec<(String, Call)> {
        self.0.borrow().clone()
    }

    /// Calls seen by the recorder called `name`, in order.
    pub(crate) fn of(&self, name: &str) -> Vec<Call> {
        self.0
            .borrow()
            .iter()
            .filter(|(who, _)| who == name)
            .map(|(_, call)| *call)
            .collect()
    }

    /// Names of the recorders that saw `call`, in order.
    pub(crate) fn who(&self, call: Call) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter(|(_, seen)| *seen == call)
            .map(|(who, _)| who.clone())
            .collect()
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// A widget that logs every hook it receives.
#[derive(Debug)]
pub(crate) struct Recorder {
    base: WidgetBase,
    name: String,
    kind: WidgetKind,
    size: Size,
    log: Log,
    fail_render: bool,
    fail_advance: bool,
}

impl Recorder {
    pub(crate) fn new(name: &str, width: i32, height: i32, log: &Log) -> Self {
        Self::with_kind(name, WidgetKind::Button, width, height, log)
    }

    pub(crate) fn with_kind(
        name: &str,
        kind: WidgetKind,
        width: i32,
        height: i32,
        log: &Log,
    ) -> Self {
        Self {
            base: WidgetBase::new(),
            name: name.to_owned(),
            kind,
            size: Size::new(width, height),
            log: log.clone(),
            fail_render: false,
            fail_advance: false,
        }
    }

    pub(crate) fn failing_render(mut self) -> Self {
        self.fail_render = true;
        self
    }

    pub(crate) fn failing_advance(mut self) -> Self {
        self.fail_advance = true;
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl Widget for Recorder {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size(&self) -> Size {
        self.size
    }

    fn render(&mut self, _: &mut dyn Surface) -> Result<(), WidgetError> {
        self.log.push(&self.name, Call::Render);
        if self.fail_render {
            return Err(WidgetError::render(self.kind, "recorder refused to draw"));
        }
        Ok(())
    }

    fn advance(&mut self, _: f64) -> Result<(), WidgetError> {
        self.log.push(&self.name, Call::Advance);
        if self.fail_advance {
            return Err(WidgetError::advance(self.kind, "recorder refused to tick"));
        }
        Ok(())
    }

    fn on_mouse_move(&mut self, _: &MouseMoveEvent) -> bool {
        self.log.push(&self.name, Call::Move);
        false
    }

    fn on_mouse_enter(&mut self, _: &MouseMoveEvent) -> bool {
        self.log.push(&self.name, Call::Enter);
        false
    }

    fn on_mouse_over(&mut self, _: &MouseMoveEvent) -> bool {
        self.log.push(&self.name, Call::Over);
        false
    }

    fn on_mouse_leave(&mut self, _: &MouseMoveEvent) -> bool {
        self.log.push(&self.name, Call::Leave);
        false
    }

    fn on_mouse_button_down(&mut self, event: &MouseEvent) -> bool {
        self.log.push(&self.name, Call::Down(event.button()));
        false
    }

    fn on_mouse_button_up(&mut self, event: &MouseEvent) -> bool {
        self.log.push(&self.name, Call::Up(event.button()));
        false
    }

    fn on_mouse_button_click(&mut self, event: &MouseEvent) -> bool {
        self.log.push(&self.name, Call::Click(event.button()));
        false
    }
}

/// Builds recorders in place of asset-backed widgets.
///
/// Labels are ten pixels wide per character and twenty tall. Paths that
/// start with `missing/` fail to load.
#[derive(Debug, Default)]
pub(crate) struct RecorderFactory {
    pub(crate) log: Log,
    pub(crate) built: usize,
}

impl RecorderFactory {
    pub(crate) fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            built: 0,
        }
    }

    fn load(&mut self, path: &str, kind: WidgetKind) -> Result<Box<dyn Widget>, WidgetError> {
        if path.starts_with("missing/") {
            return Err(WidgetError::asset(path, "no such file"));
        }
        self.built += 1;
        Ok(Box::new(Recorder::with_kind(path, kind, 32, 32, &self.log)))
    }

    fn text(&mut self, text: &str, kind: WidgetKind) -> Box<dyn Widget> {
        self.built += 1;
        let width = i32::try_from(text.chars().count() * 10).unwrap_or(i32::MAX);
        Box::new(Recorder::with_kind(text, kind, width, 20, &self.log))
    }
}

impl WidgetFactory for RecorderFactory {
    type FontStyle = ();
    type ButtonStyle = ();

    fn create_sprite(
        &mut self,
        image_path: &str,
        _palette_path: &str,
    ) -> Result<Box<dyn Widget>, WidgetError> {
        self.load(image_path, WidgetKind::Sprite)
    }

    fn create_animated_sprite(
        &mut self,
        image_path: &str,
        _palette_path: &str,
        _direction: AnimationDirection,
    ) -> Result<Box<dyn Widget>, WidgetError> {
        self.load(image_path, WidgetKind::AnimatedSprite)
    }

    fn create_label(&mut self, text: &str, _: ()) -> Result<Box<dyn Widget>, WidgetError> {
        Ok(self.text(text, WidgetKind::Label))
    }

    fn create_button(&mut self, text: &str, _: ()) -> Result<Box<dyn Widget>, WidgetError> {
        Ok(self.text(text, WidgetKind::Button))
    }
}
