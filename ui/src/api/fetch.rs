use shop_common::endpoint::{request_headers, CartAction};
use shop_common::error::CartError;
use shop_common::flow::CartTransport;
use shop_common::types::CartResponse;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::dom;

/// Sends cart mutations to the shop backend with `fetch`.
pub struct FetchTransport {
    base: String,
}

impl FetchTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn post(&self, action: &CartAction) -> Result<Response, JsValue> {
        let url = action.path(&self.base);

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::SameOrigin);
        opts.set_credentials(RequestCredentials::SameOrigin);
        opts.set_body(&JsValue::from_str(&action.body()));

        let request = Request::new_with_str_and_init(&url, &opts)?;
        // read per request: the token may be rotated after login
        let token = dom::csrf_token(&dom::document()?);
        for (name, value) in request_headers(&token) {
            request.headers().set(name, &value)?;
        }

        let window = dom::window()?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        resp_value.dyn_into()
    }
}

impl CartTransport for FetchTransport {
    async fn send(&self, action: &CartAction) -> Result<CartResponse, CartError> {
        let resp = self
            .post(action)
            .await
            .map_err(|e| CartError::Transport(format!("{:?}", e)))?;

        if !resp.ok() {
            return Err(CartError::Status(resp.status()));
        }

        let text = resp
            .text()
            .map_err(|e| CartError::Transport(format!("{:?}", e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| CartError::Transport(format!("{:?}", e)))?
            .as_string()
            .ok_or_else(|| CartError::Decode("response not string".into()))?;

        Ok(CartResponse::from_json(&body)?)
    }
}
