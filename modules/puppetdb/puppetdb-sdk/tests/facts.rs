#![allow(clippy::unwrap_used, clippy::expect_used)]

use httpmock::prelude::*;
use pe_http::{HttpClient, StatusCode};
use pe_sdk::{ApiClient, ClientError, DecodeMode, OrderBy, OrderKey, Pagination, Query};
use puppetdb_sdk::client::{FACT_CONTENTS, FACT_NAMES, FACT_PATHS, FACTS};
use puppetdb_sdk::{Fact, PuppetDbApi, PuppetDbClient};
use serde_json::json;

const KERNEL_QUERY: &str = r#"["=","name","kernel"]"#;

fn puppetdb(server: &MockServer, mode: DecodeMode) -> PuppetDbClient {
    let http = HttpClient::builder(server.base_url())
        .allow_insecure_http()
        .build()
        .unwrap();
    PuppetDbClient::new(ApiClient::new(http).with_decode_mode(mode))
}

fn kernel_fact(certname: &str) -> serde_json::Value {
    json!({
        "certname": certname,
        "environment": "production",
        "name": "kernel",
        "value": "Linux"
    })
}

#[test]
fn fact_names_without_pagination_sends_no_paging_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(FACT_NAMES)
            .query_param_missing("limit")
            .query_param_missing("offset")
            .query_param_missing("order_by");
        then.status(200)
            .json_body(json!(["kernel", "operatingsystem", "osfamily"]));
    });

    let names = puppetdb(&server, DecodeMode::Strict)
        .fact_names(None, &OrderBy::empty())
        .unwrap();

    mock.assert_calls(1);
    assert_eq!(names, vec!["kernel", "operatingsystem", "osfamily"]);
}

#[test]
fn fact_names_with_pagination() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(FACT_NAMES)
            .query_param("limit", "2")
            .query_param("offset", "4")
            .query_param_missing("query");
        then.status(200).json_body(json!(["kernel", "osfamily"]));
    });

    let pagination = Pagination::new(2, 4).unwrap();
    let names = puppetdb(&server, DecodeMode::Strict)
        .fact_names(Some(&pagination), &OrderBy::empty())
        .unwrap();

    mock.assert_calls(1);
    assert_eq!(names.len(), 2);
}

#[test]
fn fact_paths_decodes_type_field() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(FACT_PATHS);
        then.status(200).json_body(json!([
            { "path": ["os", "release", "major"], "type": "string" },
            { "path": ["processors", "models", 0], "type": "string" },
            { "path": ["uptime_seconds"], "type": "integer" }
        ]));
    });

    let paths = puppetdb(&server, DecodeMode::Strict)
        .fact_paths(&Query::none(), None, &OrderBy::empty())
        .unwrap();

    mock.assert_calls(1);
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0].value_type, "string");
    assert_eq!(paths[1].path[2], json!(0));
    assert_eq!(paths[2].value_type, "integer");
}

#[test]
fn facts_sends_query_and_order_by() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(FACTS)
            .query_param("query", KERNEL_QUERY)
            .query_param("order_by", r#"[{"field":"certname","order":"desc"}]"#);
        then.status(200)
            .json_body(json!([kernel_fact("node2.example.com"), kernel_fact("node1.example.com")]));
    });

    let order_by = OrderBy::from_keys([OrderKey::desc("certname")]).unwrap();
    let facts = puppetdb(&server, DecodeMode::Strict)
        .facts(&Query::new(KERNEL_QUERY), None, &order_by)
        .unwrap();

    mock.assert_calls(1);
    assert_eq!(facts[0].certname, "node2.example.com");
    assert_eq!(facts[1].value, json!("Linux"));
    assert!(facts[0].path.is_none());
}

#[test]
fn fact_contents_decodes_paths() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path(FACT_CONTENTS);
        then.status(200).json_body(json!([{
            "certname": "node1.example.com",
            "environment": "production",
            "name": "os",
            "path": ["os", "release", "major"],
            "value": "8"
        }]));
    });

    let contents = puppetdb(&server, DecodeMode::Strict)
        .fact_contents(&Query::new(r#"["=","name","os"]"#), None, &OrderBy::empty())
        .unwrap();

    assert_eq!(
        contents[0].path,
        Some(vec![json!("os"), json!("release"), json!("major")])
    );
}

#[test]
fn malformed_query_is_normalized() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path(FACTS);
        then.status(400)
            .header("content-type", "text/plain")
            .body("Json parse error at line 1, column 2");
    });

    let err = puppetdb(&server, DecodeMode::Strict)
        .facts(&Query::new("[="), None, &OrderBy::empty())
        .unwrap_err();

    match err {
        ClientError::HttpStatus {
            status, message, ..
        } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message.as_deref(), Some("/pdb/query/v4/facts error"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_rejects_unknown_fact_fields() {
    let server = MockServer::start();
    let mut fact = kernel_fact("node1.example.com");
    fact["producer"] = json!("puppet.example.com");
    let _mock = server.mock(|when, then| {
        when.method(GET).path(FACTS);
        then.status(200).json_body(json!([fact]));
    });

    let strict = puppetdb(&server, DecodeMode::Strict)
        .facts(&Query::none(), None, &OrderBy::empty())
        .unwrap_err();
    match strict {
        ClientError::Schema { unknown_fields, .. } => {
            assert_eq!(unknown_fields, vec!["0.producer".to_owned()]);
        }
        other => panic!("unexpected error: {other}"),
    }

    let lenient = puppetdb(&server, DecodeMode::Lenient)
        .facts(&Query::none(), None, &OrderBy::empty())
        .unwrap();
    assert_eq!(lenient.len(), 1);
}

#[test]
fn paginated_facts_walks_every_page() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path(FACTS)
            .query_param("query", KERNEL_QUERY)
            .query_param("limit", "2")
            .query_param("offset", "0");
        then.status(200)
            .json_body(json!([kernel_fact("a.example.com"), kernel_fact("b.example.com")]));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path(FACTS)
            .query_param("limit", "2")
            .query_param("offset", "2");
        then.status(200).json_body(json!([kernel_fact("c.example.com")]));
    });

    let facts: Vec<Fact> = puppetdb(&server, DecodeMode::Strict)
        .paginated_facts(
            Query::new(KERNEL_QUERY),
            Pagination::first(2).unwrap(),
            OrderBy::empty(),
        )
        .into_items()
        .collect::<Result<_, _>>()
        .unwrap();

    first.assert_calls(1);
    second.assert_calls(1);
    let certnames: Vec<&str> = facts.iter().map(|f| f.certname.as_str()).collect();
    assert_eq!(certnames, ["a.example.com", "b.example.com", "c.example.com"]);
}

#[test]
fn paginated_facts_cursor_reports_pages() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path(FACTS).query_param("offset", "0");
        then.status(200).json_body(json!([kernel_fact("a.example.com")]));
    });

    let mut cursor = puppetdb(&server, DecodeMode::Strict).paginated_facts(
        Query::none(),
        Pagination::first(5).unwrap(),
        OrderBy::empty(),
    );

    let page = cursor.next_page().unwrap();
    assert_eq!(page.offset, 0);
    assert!(page.end_of_stream);
    assert!(cursor.is_exhausted());

    let again = cursor.next_page().unwrap();
    assert!(again.is_empty());
    assert!(again.end_of_stream);
}
