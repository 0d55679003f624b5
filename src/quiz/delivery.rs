//! Where a finished lead goes: the CRM webhook and the ad pixel.
//!
//! Both are ports so the wizard never touches browser globals directly.
//! Delivery is fire-and-forget. The visitor already sees the thank-you
//! screen by the time anything here runs, so failures are only logged.

use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use log::{debug, error, info, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{Headers, RequestInit, Response};

use crate::quiz::payload::LeadPayload;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum DeliveryError {
    #[error("could not build webhook request: {0}")]
    Request(String),
    #[error("webhook request failed: {0}")]
    Network(String),
    #[error("webhook answered with status {0}")]
    Status(u16),
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub trait LeadSink {
    /// Starts exactly one POST of `payload`. The returned future only
    /// reports how it went.
    fn post(&self, payload: &LeadPayload) -> LocalBoxFuture<'static, Result<u16, DeliveryError>>;
}

pub trait ConversionTracker {
    fn track_lead(&self);
}

#[derive(Clone)]
pub struct LeadPorts {
    pub sink: Rc<dyn LeadSink>,
    pub tracker: Rc<dyn ConversionTracker>,
}

impl LeadPorts {
    pub fn browser(webhook_url: &str) -> Self {
        Self {
            sink: Rc::new(FetchLeadSink::new(webhook_url)),
            tracker: Rc::new(PixelTracker),
        }
    }
}

/// Outcome logger for a posted lead. Spawn it and forget it.
pub type Delivery = LocalBoxFuture<'static, ()>;

pub fn dispatch(sink: &dyn LeadSink, payload: &LeadPayload) -> Delivery {
    let response = sink.post(payload);
    async move {
        match response.await {
            Ok(status) => info!("Lead webhook response: {} OK", status),
            Err(e) => error!("Lead webhook error: {}", e),
        }
    }
    .boxed_local()
}

/// Posts JSON with `fetch(..., { keepalive: true })`.
pub struct FetchLeadSink {
    url: String,
}

impl FetchLeadSink {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string() }
    }

    fn start(&self, payload: &LeadPayload) -> Result<Promise, DeliveryError> {
        let window = web_sys::window().ok_or_else(|| DeliveryError::Request("no window".to_string()))?;
        let body = payload
            .to_json()
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let headers = Headers::new().map_err(|e| DeliveryError::Request(js_error(e)))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| DeliveryError::Request(js_error(e)))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
        // keeps the request alive if the visitor navigates away right after submitting
        Reflect::set(&init, &JsValue::from_str("keepalive"), &JsValue::TRUE)
            .map_err(|e| DeliveryError::Request(js_error(e)))?;

        Ok(window.fetch_with_str_and_init(&self.url, &init))
    }
}

impl LeadSink for FetchLeadSink {
    fn post(&self, payload: &LeadPayload) -> LocalBoxFuture<'static, Result<u16, DeliveryError>> {
        let promise = match self.start(payload) {
            Ok(promise) => promise,
            Err(e) => return future::ready(Err(e)).boxed_local(),
        };
        await_status(promise).boxed_local()
    }
}

async fn await_status(promise: Promise) -> Result<u16, DeliveryError> {
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| DeliveryError::Network(js_error(e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| DeliveryError::Network(js_error(e)))?;
    if response.ok() {
        Ok(response.status())
    } else {
        Err(DeliveryError::Status(response.status()))
    }
}

/// Fires `fbq('track', 'Lead')` when the Meta pixel is on the page.
pub struct PixelTracker;

impl ConversionTracker for PixelTracker {
    fn track_lead(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let fbq = match Reflect::get(&window, &JsValue::from_str("fbq")) {
            Ok(fbq) => fbq,
            Err(_) => return,
        };
        let Some(fbq) = fbq.dyn_ref::<Function>() else {
            debug!("No pixel on page, skipping Lead event");
            return;
        };
        match fbq.call2(&JsValue::NULL, &JsValue::from_str("track"), &JsValue::from_str("Lead")) {
            Ok(_) => debug!("Lead pixel event fired"),
            Err(e) => warn!("Lead pixel event failed: {}", js_error(e)),
        }
    }
}
