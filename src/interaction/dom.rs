//! Web page bridge: the host page's reset button (`window.reset_button_id`) feeds
//! [`ResetBalls`] through a shared flag polled once per frame.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bevy::prelude::*;

use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::reset::ResetBalls;

#[derive(Resource, Clone, Default)]
pub struct DomResetSignal(pub Arc<AtomicBool>);

impl DomResetSignal {
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns true once per raised click.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

pub struct DomResetPlugin;

impl Plugin for DomResetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DomResetSignal>()
            .add_systems(Update, forward_dom_reset.in_set(PrePhysicsSet));
        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, web::attach_reset_listener);
    }
}

pub fn forward_dom_reset(signal: Res<DomResetSignal>, mut resets: EventWriter<ResetBalls>) {
    if signal.take() {
        info!(target: "input", "reset event fired (page button).");
        resets.write(ResetBalls);
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use crate::core::config::BallPitConfig;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    pub fn attach_reset_listener(cfg: Res<BallPitConfig>, signal: Res<DomResetSignal>) {
        let id = cfg.window.reset_button_id.as_str();
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            warn!(target: "input", "page element #{id} not found; page reset button disabled");
            return;
        };
        let signal = (*signal).clone();
        let on_click = Closure::<dyn FnMut()>::new(move || signal.raise());
        if let Err(err) =
            element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            warn!(target: "input", "could not attach click listener to #{id}: {err:?}");
            return;
        }
        // The page button lives as long as the app.
        on_click.forget();
        info!(target: "input", "page reset button #{id} attached");
    }
}
