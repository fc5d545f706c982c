//! Client-side resource model for the Apruve v3 payments API.
//!
//! A [`Payment`] is validated and serialized locally, then created with
//! [`Payment::save`] or loaded with [`Payment::find`] through any
//! [`HttpTransport`]; [`ReqwestTransport`] is the production one.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

pub use {
    adapters::http_client::ReqwestTransport,
    config::{Config, Environment},
    domain::{
        error::{ApruveError, ValidationErrors},
        id::{PaymentId, PaymentRequestId},
        money::Currency,
        payment::{Payment, PaymentStatus},
        payment_item::PaymentItem,
        transport::{ApiRequest, ApiResponse, HttpTransport},
    },
};
