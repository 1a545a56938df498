use crate::{OrderBy, Pagination, Query};
use pe_http::HttpRequest;

/// Assemble a GET request for a paginated query endpoint.
///
/// Parameters, in order: `query` (skipped when empty), `limit` and `offset`
/// (skipped without pagination), `order_by` as a JSON array (skipped when empty).
/// No request is sent.
pub fn build_query_request(
    path: &str,
    query: &Query,
    pagination: Option<&Pagination>,
    order_by: &OrderBy,
) -> HttpRequest {
    let mut request = HttpRequest::get(path);

    if !query.is_empty() {
        request = request.query_param("query", query.as_str());
    }
    if let Some(pagination) = pagination {
        request = request
            .query_param("limit", pagination.limit().to_string())
            .query_param("offset", pagination.offset().to_string());
    }
    if let Some(order) = order_by.to_param() {
        request = request.query_param("order_by", order);
    }

    request
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::OrderKey;
    use pe_http::Method;

    #[test]
    fn test_full_query_request() {
        let request = build_query_request(
            "/pdb/query/v4/facts",
            &Query::new(r#"["=", "name", "kernel"]"#),
            Some(&Pagination::new(4, 8).unwrap()),
            &OrderBy::from_keys([OrderKey::asc("certname")]).unwrap(),
        );

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/pdb/query/v4/facts");
        let names: Vec<&str> = request.query().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["query", "limit", "offset", "order_by"]);
        assert_eq!(request.query_value("query"), Some(r#"["=", "name", "kernel"]"#));
        assert_eq!(request.query_value("limit"), Some("4"));
        assert_eq!(request.query_value("offset"), Some("8"));
        assert_eq!(
            request.query_value("order_by"),
            Some(r#"[{"field":"certname","order":"asc"}]"#)
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_bare_query_request() {
        let request =
            build_query_request("/pdb/query/v4/fact-names", &Query::none(), None, &OrderBy::empty());
        assert!(request.query().is_empty());
    }
}
