use crate::domain::models::{Category, StatusRecord};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown status code: {0}")]
    UnknownCode(u16),
}

const fn class_of(code: u16) -> Category {
    match Category::from_code(code) {
        Some(c) => c,
        None => panic!("status code outside 1xx-5xx needs an explicit category"),
    }
}

const fn official(code: u16, message: &'static str, description: &'static str) -> StatusRecord {
    StatusRecord {
        code,
        message,
        category: class_of(code),
        official: true,
        description,
    }
}

const fn vendor(code: u16, message: &'static str, description: &'static str) -> StatusRecord {
    StatusRecord {
        code,
        message,
        category: class_of(code),
        official: false,
        description,
    }
}

/// Vendor code outside the 1xx-5xx classes; the category follows how the
/// vendor uses it.
const fn convention(
    code: u16,
    message: &'static str,
    category: Category,
    description: &'static str,
) -> StatusRecord {
    StatusRecord {
        code,
        message,
        category,
        official: false,
        description,
    }
}

// Sorted by code; `lookup` relies on it.
#[rustfmt::skip]
static CATALOG: &[StatusRecord] = &[
    official(100, "Continue", "The server has received the request headers and the client should proceed to send the request body."),
    official(101, "Switching Protocols", "The requester has asked the server to switch protocols and the server has agreed to do so."),
    official(102, "Processing", "The server has received and is processing the request, but no response is available yet."),
    official(103, "Early Hints", "Used to return some response headers before the final HTTP message, so the client can start preloading resources."),
    official(200, "OK", "Standard response for successful HTTP requests."),
    official(201, "Created", "The request has been fulfilled, resulting in the creation of a new resource."),
    official(202, "Accepted", "The request has been accepted for processing, but the processing has not been completed."),
    official(203, "Non-Authoritative Information", "The server is a transforming proxy that received a 200 OK from its origin but is returning a modified version of the response."),
    official(204, "No Content", "The server successfully processed the request and is not returning any content."),
    official(205, "Reset Content", "The server successfully processed the request and asks the client to reset its document view."),
    official(206, "Partial Content", "The server is delivering only part of the resource because of a range header sent by the client."),
    official(207, "Multi-Status", "The message body is an XML message and can contain a number of separate response codes for sub-requests."),
    official(208, "Already Reported", "The members of a DAV binding have already been enumerated in a preceding part of the response and are not included again."),
    vendor(218, "This Is Fine", "Used by Apache servers as a catch-all error condition allowing response bodies to flow through when ProxyErrorOverride is enabled."),
    official(226, "IM Used", "The server has fulfilled a GET request and the response is the result of one or more instance-manipulations applied to the current instance."),
    official(300, "Multiple Choices", "Indicates multiple options for the resource from which the client may choose."),
    official(301, "Moved Permanently", "This and all future requests should be directed to the given URI."),
    official(302, "Found", "Tells the client to look at another URL for now; the original URL may be used again later."),
    official(303, "See Other", "The response to the request can be found under another URI using the GET method."),
    official(304, "Not Modified", "The resource has not been modified since the version specified by the request headers."),
    official(305, "Use Proxy", "The requested resource is available only through a proxy, the address for which is provided in the response."),
    official(306, "Switch Proxy", "No longer used. Originally meant that subsequent requests should use the specified proxy."),
    official(307, "Temporary Redirect", "The request should be repeated with another URI, but future requests should still use the original URI."),
    official(308, "Permanent Redirect", "This and all future requests should be directed to the given URI without changing the request method."),
    official(400, "Bad Request", "The server cannot or will not process the request due to an apparent client error."),
    official(401, "Unauthorized", "Authentication is required and has failed or has not yet been provided."),
    official(402, "Payment Required", "Reserved for future use; some services use it when a payment or quota is needed."),
    official(403, "Forbidden", "The request contained valid data and was understood by the server, but the server is refusing action."),
    official(404, "Not Found", "The requested resource could not be found but may be available in the future."),
    official(405, "Method Not Allowed", "A request method is not supported for the requested resource."),
    official(406, "Not Acceptable", "The requested resource can only generate content not acceptable according to the Accept headers sent in the request."),
    official(407, "Proxy Authentication Required", "The client must first authenticate itself with the proxy."),
    official(408, "Request Timeout", "The server timed out waiting for the request."),
    official(409, "Conflict", "The request could not be processed because of a conflict in the current state of the resource."),
    official(410, "Gone", "The resource requested was previously in use but is no longer available and will not be available again."),
    official(411, "Length Required", "The request did not specify the length of its content, which is required by the requested resource."),
    official(412, "Precondition Failed", "The server does not meet one of the preconditions that the requester put on the request header fields."),
    official(413, "Content Too Large", "The request is larger than the server is willing or able to process."),
    official(414, "URI Too Long", "The URI provided was too long for the server to process."),
    official(415, "Unsupported Media Type", "The request entity has a media type which the server or resource does not support."),
    official(416, "Range Not Satisfiable", "The client has asked for a portion of the file, but the server cannot supply that portion."),
    official(417, "Expectation Failed", "The server cannot meet the requirements of the Expect request-header field."),
    vendor(418, "I'm a teapot", "Defined as an April Fools' joke; the server refuses to brew coffee because it is, permanently, a teapot."),
    vendor(419, "Page Expired", "Used by the Laravel framework when a CSRF token is missing or expired."),
    vendor(420, "Enhance Your Calm", "Returned by version 1 of the Twitter Search and Trends API when the client is being rate limited."),
    official(421, "Misdirected Request", "The request was directed at a server that is not able to produce a response."),
    official(422, "Unprocessable Content", "The request was well-formed but could not be followed due to semantic errors."),
    official(423, "Locked", "The resource that is being accessed is locked."),
    official(424, "Failed Dependency", "The request failed because it depended on another request and that request failed."),
    official(425, "Too Early", "The server is unwilling to risk processing a request that might be replayed."),
    official(426, "Upgrade Required", "The client should switch to a different protocol given in the Upgrade header field."),
    official(428, "Precondition Required", "The origin server requires the request to be conditional."),
    official(429, "Too Many Requests", "The user has sent too many requests in a given amount of time."),
    vendor(430, "Request Header Fields Too Large", "Used by Shopify when too many URLs are requested within a certain time frame."),
    official(431, "Request Header Fields Too Large", "The server is unwilling to process the request because either an individual header field, or all the header fields collectively, are too large."),
    vendor(440, "Login Time-out", "Used by Microsoft IIS when the client's session has expired and it must log in again."),
    vendor(444, "No Response", "Used internally by nginx to instruct the server to return no information to the client and close the connection immediately."),
    vendor(449, "Retry With", "Used by Microsoft IIS when the server cannot honour the request because the user has not provided the required information."),
    vendor(450, "Blocked by Windows Parental Controls", "A Microsoft extension returned when Windows Parental Controls are blocking access to the requested webpage."),
    official(451, "Unavailable For Legal Reasons", "A server operator has received a legal demand to deny access to a resource."),
    vendor(460, "Client Closed Connection", "Used by AWS Elastic Load Balancer when the client closed the connection before the idle timeout elapsed."),
    vendor(494, "Request Header Too Large", "Used by nginx when the client sent a request or header line that is too large."),
    vendor(495, "SSL Certificate Error", "Used by nginx when the client has provided an invalid client certificate."),
    vendor(496, "SSL Certificate Required", "Used by nginx when a client certificate is required but not provided."),
    vendor(497, "HTTP Request Sent to HTTPS Port", "Used by nginx when the client has made an HTTP request to a port listening for HTTPS requests."),
    vendor(498, "Invalid Token", "Returned by ArcGIS for Server when a token is expired or otherwise invalid."),
    vendor(499, "Client Closed Request", "Used by nginx when the client has closed the request before the server could send a response."),
    official(500, "Internal Server Error", "A generic error message, given when an unexpected condition was encountered."),
    official(501, "Not Implemented", "The server either does not recognize the request method, or it lacks the ability to fulfil the request."),
    official(502, "Bad Gateway", "The server was acting as a gateway or proxy and received an invalid response from the upstream server."),
    official(503, "Service Unavailable", "The server cannot handle the request because it is overloaded or down for maintenance."),
    official(504, "Gateway Timeout", "The server was acting as a gateway or proxy and did not receive a timely response from the upstream server."),
    official(505, "HTTP Version Not Supported", "The server does not support the HTTP version used in the request."),
    official(506, "Variant Also Negotiates", "Transparent content negotiation for the request results in a circular reference."),
    official(507, "Insufficient Storage", "The server is unable to store the representation needed to complete the request."),
    official(508, "Loop Detected", "The server detected an infinite loop while processing the request."),
    vendor(509, "Bandwidth Limit Exceeded", "Used by Apache and cPanel when the server has exceeded the bandwidth specified by the administrator."),
    official(510, "Not Extended", "Further extensions to the request are required for the server to fulfil it."),
    official(511, "Network Authentication Required", "The client needs to authenticate to gain network access."),
    vendor(520, "Web Server Returned an Unknown Error", "Used by Cloudflare when the origin server returned an empty, unknown, or unexpected response."),
    vendor(521, "Web Server Is Down", "Used by Cloudflare when the origin server refused the connection."),
    vendor(522, "Connection Timed Out", "Used by Cloudflare when it could not negotiate a TCP handshake with the origin server."),
    vendor(523, "Origin Is Unreachable", "Used by Cloudflare when it could not reach the origin server."),
    vendor(524, "A Timeout Occurred", "Used by Cloudflare when a TCP connection was established but the origin did not reply in time."),
    vendor(525, "SSL Handshake Failed", "Used by Cloudflare when it could not negotiate an SSL/TLS handshake with the origin server."),
    vendor(526, "Invalid SSL Certificate", "Used by Cloudflare when it could not validate the SSL certificate on the origin web server."),
    vendor(527, "Railgun Error", "Used by Cloudflare when the connection between Cloudflare and the origin's Railgun server was interrupted."),
    vendor(529, "Site is overloaded", "Used by Qualys in the SSLLabs server testing API to signal that the site can't process the request."),
    vendor(530, "Site is frozen", "Used by the Pantheon web platform to indicate a site that has been frozen due to inactivity."),
    vendor(561, "Unauthorized", "Used by AWS Elastic Load Balancer when the identity provider returned an error while authenticating the user."),
    vendor(598, "Network read timeout error", "Used by some HTTP proxies to signal a network read timeout behind the proxy to a client in front of the proxy."),
    vendor(599, "Network Connect Timeout Error", "Used by some HTTP proxies to signal a network connect timeout behind the proxy to a client in front of the proxy."),
    convention(783, "Unexpected Token", Category::ClientError, "Used by Shopify when the request includes a JSON syntax error."),
    convention(999, "Request Denied", Category::ClientError, "Returned by LinkedIn to deny requests that look automated or come from unrecognised clients."),
];

/// Full catalog in display order.
pub fn all() -> &'static [StatusRecord] {
    CATALOG
}

pub fn lookup(code: u16) -> Option<&'static StatusRecord> {
    CATALOG
        .binary_search_by_key(&code, |r| r.code)
        .ok()
        .map(|i| &CATALOG[i])
}

pub fn require(code: u16) -> Result<&'static StatusRecord, CatalogError> {
    lookup(code).ok_or(CatalogError::UnknownCode(code))
}

pub fn filter(category: Option<Category>, unofficial_only: bool) -> Vec<&'static StatusRecord> {
    CATALOG
        .iter()
        .filter(|r| category.map(|c| c == r.category).unwrap_or(true))
        .filter(|r| !unofficial_only || !r.official)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Codes outside 1xx-5xx and the category they carry by convention.
    const VENDOR_CATEGORY_EXCEPTIONS: &[(u16, Category)] =
        &[(783, Category::ClientError), (999, Category::ClientError)];

    fn expected_category(code: u16) -> Option<Category> {
        VENDOR_CATEGORY_EXCEPTIONS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, cat)| *cat)
            .or_else(|| Category::from_code(code))
    }

    #[test]
    fn codes_are_unique_and_sorted() {
        let mut seen = HashSet::new();
        for r in all() {
            assert!(seen.insert(r.code), "duplicate code {}", r.code);
        }
        assert!(all().windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn lookup_returns_exact_record_for_every_code() {
        for r in all() {
            assert_eq!(lookup(r.code), Some(r));
        }
        assert_eq!(lookup(404).map(|r| r.message), Some("Not Found"));
        assert!(lookup(299).is_none());
        assert_eq!(require(299), Err(CatalogError::UnknownCode(299)));
    }

    #[test]
    fn categories_follow_numeric_class_or_vendor_convention() {
        for r in all() {
            assert_eq!(
                expected_category(r.code),
                Some(r.category),
                "category mismatch for {}",
                r.code
            );
        }
        for (code, _) in VENDOR_CATEGORY_EXCEPTIONS {
            let r = lookup(*code).expect("vendor exception is in the catalog");
            assert!(!r.official);
            assert!(Category::from_code(*code).is_none());
        }
    }

    #[test]
    fn catalog_has_required_text_and_mixed_provenance() {
        assert!(all()
            .iter()
            .all(|r| !r.message.is_empty() && !r.description.is_empty()));
        assert!(lookup(451).is_some_and(|r| r.official));
        assert!(lookup(520).is_some_and(|r| !r.official));
    }

    #[test]
    fn filter_by_category_and_provenance() {
        let informational = filter(Some(Category::Informational), false);
        assert_eq!(
            informational.iter().map(|r| r.code).collect::<Vec<_>>(),
            vec![100, 101, 102, 103]
        );
        let unofficial = filter(None, true);
        assert!(!unofficial.is_empty());
        assert!(unofficial.iter().all(|r| !r.official));
        assert_eq!(filter(None, false).len(), all().len());
    }
}
