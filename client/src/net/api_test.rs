use super::*;

#[test]
fn contact_endpoint_is_api_contact() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
}

#[test]
fn classify_status_accepts_any_2xx() {
    assert_eq!(classify_status(200), Ok(()));
    assert_eq!(classify_status(204), Ok(()));
    assert_eq!(classify_status(299), Ok(()));
}

#[test]
fn classify_status_rejects_everything_else() {
    assert_eq!(classify_status(199), Err(SubmitError::Rejected { status: 199 }));
    assert_eq!(classify_status(302), Err(SubmitError::Rejected { status: 302 }));
    assert_eq!(classify_status(500), Err(SubmitError::Rejected { status: 500 }));
    assert_eq!(classify_status(503), Err(SubmitError::Rejected { status: 503 }));
}

#[test]
fn submit_error_formats_status() {
    assert_eq!(SubmitError::Rejected { status: 502 }.to_string(), "contact submission failed: 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_sender_is_unavailable_off_browser() {
    let req = ContactRequest::default();
    let result = futures::executor::block_on(HttpContactSender.send(&req));
    assert_eq!(result, Err(SubmitError::Unavailable));
}
