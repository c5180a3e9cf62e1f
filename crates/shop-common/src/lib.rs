//! Browser-independent core of the Terko Shop storefront client.
//!
//! Holds the cart wire types, endpoint construction, `uk-UA` price formatting,
//! quantity policy, button flashing, search rules and the cart flows. The flows
//! are written against the [`flow::CartTransport`] and [`flow::CartPage`] traits
//! so the `ui` shell can drive them with `web-sys` while tests drive them with
//! fakes.

pub mod button;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod flow;
pub mod messages;
pub mod money;
pub mod quantity;
pub mod search;
pub mod types;
