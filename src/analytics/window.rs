//! Browser port forwarding events to the Vercel Analytics queue.
//!
//! The page's analytics script installs `window.va`; events are pushed as
//! `va("event", { name, data })`. A page without the script yields
//! [`ForwardError::Missing`], which the forwarder treats as no collaborator.

use js_sys::{Function, JSON, Object, Reflect};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

use super::{AnalyticsPort, ForwardError};

const QUEUE: &str = "va";

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowPort;

impl AnalyticsPort for WindowPort {
    fn event(&self, name: &str, payload: &Value) -> Result<(), ForwardError> {
        let window = web_sys::window().ok_or_else(|| ForwardError::Missing("window".to_owned()))?;
        let queue = Reflect::get(&window, &JsValue::from_str(QUEUE))
            .map_err(|e| ForwardError::Call(format!("{e:?}")))?
            .dyn_into::<Function>()
            .map_err(|_| ForwardError::Missing(format!("window.{QUEUE}")))?;

        let raw = serde_json::to_string(payload).map_err(|e| ForwardError::Encode(e.to_string()))?;
        let data = JSON::parse(&raw).map_err(|e| ForwardError::Encode(format!("{e:?}")))?;

        let body = Object::new();
        Reflect::set(&body, &JsValue::from_str("name"), &JsValue::from_str(name))
            .map_err(|e| ForwardError::Call(format!("{e:?}")))?;
        Reflect::set(&body, &JsValue::from_str("data"), &data).map_err(|e| ForwardError::Call(format!("{e:?}")))?;

        queue
            .call2(&window, &JsValue::from_str("event"), &body)
            .map(|_| ())
            .map_err(|e| ForwardError::Call(format!("{e:?}")))
    }
}
