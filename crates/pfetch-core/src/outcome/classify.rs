//! Classify curl errors and HTTP status codes.

use super::error::TransportError;

/// Maps a curl error onto the transport failure taxonomy.
pub fn classify_curl_error(e: &curl::Error) -> TransportError {
    let msg = e.to_string();
    if e.is_operation_timedout() {
        return TransportError::Timeout(msg);
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportError::Connection(msg);
    }
    TransportError::Other(msg)
}

/// True for a final 2xx status.
pub fn is_success_status(code: u32) -> bool {
    (200..300).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curl_timeout() {
        // CURLE_OPERATION_TIMEDOUT
        let e = curl::Error::new(28);
        assert!(matches!(classify_curl_error(&e), TransportError::Timeout(_)));
    }

    #[test]
    fn curl_connection_failures() {
        // CURLE_COULDNT_RESOLVE_HOST, CURLE_COULDNT_CONNECT, CURLE_GOT_NOTHING
        for code in [6, 7, 52] {
            let e = curl::Error::new(code);
            assert!(
                matches!(classify_curl_error(&e), TransportError::Connection(_)),
                "code {code}"
            );
        }
    }

    #[test]
    fn curl_other() {
        // CURLE_SSL_CONNECT_ERROR
        let e = curl::Error::new(35);
        assert!(matches!(classify_curl_error(&e), TransportError::Other(_)));
    }

    #[test]
    fn success_status_range() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(!is_success_status(304));
        assert!(!is_success_status(404));
        assert!(!is_success_status(503));
        assert!(!is_success_status(0));
    }
}
