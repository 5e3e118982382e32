//! Pointer-Handler: Down/Up/Move/Out, Klick, Tap und Abbruch.

use super::DirectSelectMode;
use crate::app::events::{PointerEvent, PointerTarget};
use crate::app::host::{HostContext, ModeChange};
use crate::core::CoordPath;
use glam::DVec2;

impl DirectSelectMode {
    /// Pointer-Down bzw. Touch-Start.
    ///
    /// Multi-Touch wird ignoriert, ebenso ein zweites Down während ein Drag offen ist.
    pub fn on_pointer_down(&mut self, host: &mut dyn HostContext, event: &PointerEvent) {
        if event.touch_points != 1 {
            log::debug!("Pointer-Down mit {} Touch-Punkten ignoriert", event.touch_points);
            return;
        }
        if self.drag.can_drag_move {
            log::debug!("Pointer-Down während offenem Drag ignoriert");
            return;
        }

        match &event.target {
            PointerTarget::Vertex {
                feature_id,
                coord_path,
            } if *feature_id == self.feature_id => {
                self.on_vertex(host, event, coord_path.clone());
            }
            PointerTarget::Feature { feature_id } if *feature_id == self.feature_id => {
                self.on_feature(host, event);
            }
            PointerTarget::Midpoint {
                feature_id,
                coord_path,
                lng_lat,
            } if *feature_id == self.feature_id => {
                self.on_midpoint(host, event, coord_path.clone(), *lng_lat);
            }
            _ => {}
        }
    }

    fn on_vertex(&mut self, host: &mut dyn HostContext, event: &PointerEvent, path: CoordPath) {
        if !self.path_exists(host, &path) {
            log::warn!("Vertex {} existiert nicht in Feature '{}'", path, self.feature_id);
            return;
        }
        self.start_dragging(host, event.lng_lat);

        if !self.selection.contains(&path) {
            if event.shift {
                self.selection.add(path);
            } else {
                self.selection.select_only(path);
            }
        }
        self.sync_selected_coordinates(host);
        self.fire_actionable(host);
        self.cache_pivot(host);
    }

    fn on_midpoint(
        &mut self,
        host: &mut dyn HostContext,
        event: &PointerEvent,
        path: CoordPath,
        position: DVec2,
    ) {
        let inserted = host
            .feature_mut(&self.feature_id)
            .is_some_and(|f| f.geometry.insert_coordinate(&path, position));
        if !inserted {
            log::warn!("Midpoint {} konnte nicht eingefügt werden", path);
            return;
        }
        log::info!("Vertex {} in Feature '{}' eingefügt", path, self.feature_id);
        self.start_dragging(host, event.lng_lat);
        self.fire_update(host);

        self.selection.select_only(path);
        self.sync_selected_coordinates(host);
        self.fire_actionable(host);
        self.cache_pivot(host);
    }

    fn on_feature(&mut self, host: &mut dyn HostContext, event: &PointerEvent) {
        if !self.selection.is_empty() {
            self.selection.clear();
            host.clear_selected_coordinates();
            self.fire_actionable(host);
        }
        self.start_dragging(host, event.lng_lat);
    }

    /// Pointer-Up bzw. Touch-Ende: Drag abschließen.
    pub fn on_pointer_up(&mut self, host: &mut dyn HostContext) {
        if self.drag.drag_moving {
            self.fire_update(host);
        }
        self.stop_dragging(host);
    }

    /// Pointer-Move ohne gedrückte Taste: offenen Drag abschließen,
    /// unabhängig vom Ziel unter dem Pointer.
    pub fn on_pointer_move(&mut self, host: &mut dyn HostContext) {
        if self.drag.drag_moving {
            self.fire_update(host);
        }
        self.stop_dragging(host);
    }

    /// Pointer hat die Karte verlassen.
    pub fn on_pointer_out(&mut self, host: &mut dyn HostContext) {
        if self.drag.drag_moving {
            self.fire_update(host);
        }
        self.stop_dragging(host);
    }

    /// Abbruch-Taste: Zwischenstand bleibt, Drag-Zustand wird verworfen.
    pub fn on_cancel(&mut self, host: &mut dyn HostContext) {
        if self.drag.drag_moving {
            self.fire_update(host);
        }
        if self.drag.can_drag_move {
            log::debug!("Drag abgebrochen: Feature '{}'", self.feature_id);
        }
        self.stop_dragging(host);
    }

    /// Maus-Klick.
    pub fn on_click(&mut self, host: &mut dyn HostContext, event: &PointerEvent) {
        if !self.handle_click_target(host, &event.target) {
            self.stop_dragging(host);
        }
    }

    /// Touch-Tap: wie ein Klick, beendet aber keinen Drag.
    pub fn on_tap(&mut self, host: &mut dyn HostContext, event: &PointerEvent) {
        self.handle_click_target(host, &event.target);
    }

    /// Gibt `true` zurück wenn das Ziel behandelt wurde.
    fn handle_click_target(&mut self, host: &mut dyn HostContext, target: &PointerTarget) -> bool {
        match target {
            PointerTarget::None => {
                host.set_double_click_zoom_enabled(true);
                host.change_mode(ModeChange::simple_select());
                true
            }
            PointerTarget::Feature { feature_id } if *feature_id == self.feature_id => {
                self.selection.clear();
                host.clear_selected_coordinates();
                host.feature_changed(&self.feature_id);
                self.fire_actionable(host);
                true
            }
            PointerTarget::Feature { feature_id } => {
                host.set_double_click_zoom_enabled(true);
                host.change_mode(ModeChange::SimpleSelect {
                    feature_ids: vec![feature_id.clone()],
                });
                true
            }
            PointerTarget::Vertex { .. } | PointerTarget::Midpoint { .. } => false,
        }
    }

    /// Beginnt einen Drag an `pos`. Der Pan-Zustand vor dem ersten Drag wird gemerkt.
    pub(super) fn start_dragging(&mut self, host: &mut dyn HostContext, pos: DVec2) {
        if self.drag.pan_enabled_before.is_none() {
            self.drag.pan_enabled_before = Some(host.is_drag_pan_enabled());
        }
        host.set_drag_pan_enabled(false);
        self.drag.can_drag_move = true;
        self.drag.last_pos = Some(pos);
    }

    /// Beendet einen Drag: Pan nur reaktivieren wenn er vorher aktiv war,
    /// Pivot-Zwischenspeicher des Features löschen.
    pub(super) fn stop_dragging(&mut self, host: &mut dyn HostContext) {
        if self.drag.can_drag_move && self.drag.pan_enabled_before == Some(true) {
            host.set_drag_pan_enabled(true);
        }
        self.drag.pan_enabled_before = None;
        self.drag.drag_moving = false;
        self.drag.can_drag_move = false;
        self.drag.last_pos = None;

        if let Some(feature) = host.feature_mut(&self.feature_id) {
            feature.pivot = None;
        }
    }
}
