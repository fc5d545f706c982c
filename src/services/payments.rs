use crate::{
    adapters::api_errors::error_for_status,
    domain::{
        error::{ApruveError, ValidationErrors},
        id::{PaymentId, PaymentRequestId},
        payment::{Payment, PaymentStatus},
        transport::{ApiRequest, HttpTransport},
    },
};

pub fn collection_path(payment_request_id: &PaymentRequestId) -> Result<String, ApruveError> {
    let prid = path_segment(payment_request_id.as_str())?;
    Ok(format!("payment_requests/{prid}/payments"))
}

pub fn member_path(
    payment_request_id: &PaymentRequestId,
    id: &PaymentId,
) -> Result<String, ApruveError> {
    let prid = path_segment(payment_request_id.as_str())?;
    let id = path_segment(id.as_str())?;
    Ok(format!("payment_requests/{prid}/payments/{id}"))
}

/// Percent-encode an id so it stays exactly one path segment. Empty and
/// dot segments are rejected since URL resolution would collapse them.
fn path_segment(raw: &str) -> Result<String, ApruveError> {
    if matches!(raw, "" | "." | "..") {
        return Err(ApruveError::InvalidId(raw.to_string()));
    }
    Ok(urlencoding::encode(raw).into_owned())
}

/// Load a payment with a single GET. 404 maps to `NotFound`.
#[tracing::instrument(
    name = "payment.find",
    skip_all,
    fields(payment_request_id = %payment_request_id, payment_id = %id)
)]
pub async fn find_payment(
    transport: &dyn HttpTransport,
    payment_request_id: &PaymentRequestId,
    id: &PaymentId,
) -> Result<Payment, ApruveError> {
    let response = transport
        .send(ApiRequest::get(member_path(payment_request_id, id)?))
        .await?;
    let response = error_for_status(response)?;

    let payment = Payment::from_wire(&response.body)?;
    tracing::info!(status = ?payment.status().map(PaymentStatus::as_str), "payment loaded");
    Ok(payment)
}

/// Validate, then create the payment with a single POST and write the
/// server-assigned fields back into `payment`.
///
/// Nothing is sent when validation fails, and `payment` is untouched on any
/// error. Returns the status the server assigned.
#[tracing::instrument(
    name = "payment.save",
    skip_all,
    fields(payment_request_id = tracing::field::Empty, payment_id = tracing::field::Empty)
)]
pub async fn save_payment<'p>(
    transport: &dyn HttpTransport,
    payment: &'p mut Payment,
) -> Result<Option<&'p PaymentStatus>, ApruveError> {
    if let Err(e) = payment.validate() {
        tracing::warn!(error = %e, "payment failed validation, not sent");
        return Err(e);
    }
    // Present after validate(); the rule message covers the impossible case.
    let Some(payment_request_id) = payment.payment_request_id() else {
        return Err(ValidationErrors::new(vec!["payment_request_id must be set".into()]).into());
    };
    tracing::Span::current().record(
        "payment_request_id",
        tracing::field::display(payment_request_id),
    );

    let request = ApiRequest::post(collection_path(payment_request_id)?, payment.to_json()?);
    let response = error_for_status(transport.send(request).await?)?;

    payment.apply_saved(&response.body)?;
    if let Some(id) = payment.id() {
        tracing::Span::current().record("payment_id", tracing::field::display(id));
    }
    tracing::info!(status = ?payment.status().map(PaymentStatus::as_str), "payment created");
    Ok(payment.status())
}

impl Payment {
    pub async fn find(
        transport: &dyn HttpTransport,
        payment_request_id: impl Into<PaymentRequestId>,
        id: impl Into<PaymentId>,
    ) -> Result<Self, ApruveError> {
        find_payment(transport, &payment_request_id.into(), &id.into()).await
    }

    /// Strict create: every failure is returned as an error.
    pub async fn save(
        &mut self,
        transport: &dyn HttpTransport,
    ) -> Result<Option<&PaymentStatus>, ApruveError> {
        save_payment(transport, self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_stay_inside_one_segment() {
        let path = member_path(&"a/b".into(), &"c?x=1#frag".into()).unwrap();
        assert_eq!(path, "payment_requests/a%2Fb/payments/c%3Fx%3D1%23frag");
    }

    #[test]
    fn dot_and_empty_ids_are_rejected() {
        for raw in ["", ".", ".."] {
            let err = collection_path(&raw.into()).unwrap_err();
            assert!(matches!(err, ApruveError::InvalidId(ref id) if id == raw));
        }
        assert!(member_path(&"1".into(), &"..".into()).is_err());
    }
}
