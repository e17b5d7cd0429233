use apidoc_core::config::{DocConfig, SchemaOptions};
use apidoc_core::docs::IntroBody;
use apidoc_core::error::{GenerateError, RenderError, SchemaError};
use apidoc_core::model::HttpMethod;
use apidoc_core::{
    CodeSamples, Generator, ResponseExample, SampleContext, SampleRenderer, Source, parse,
};

const ORDERS_JSON: &str = include_str!("fixtures/orders.json");
const ORDERS_YAML: &str = include_str!("fixtures/orders.yaml");

/// Renders one line per language so tests can see what context it got.
struct EchoRenderer;

impl SampleRenderer for EchoRenderer {
    fn render_samples(&self, ctx: &SampleContext<'_>) -> Result<CodeSamples, RenderError> {
        let line = format!("{} {} body={}", ctx.method, ctx.url(), ctx.has_body);
        Ok(CodeSamples {
            curl: line.clone(),
            js: line.clone(),
            python: line.clone(),
            go: line.clone(),
            node: line,
        })
    }

    fn render_response(&self, _ctx: &SampleContext<'_>) -> Result<ResponseExample, RenderError> {
        Ok(ResponseExample {
            status_line: "HTTP/1.1 200 OK".into(),
            format: "JSON".into(),
            body: "{}".into(),
        })
    }
}

struct FailingRenderer;

impl SampleRenderer for FailingRenderer {
    fn render_samples(&self, _ctx: &SampleContext<'_>) -> Result<CodeSamples, RenderError> {
        Err(RenderError::Template {
            target: "curl".into(),
            message: "boom".into(),
        })
    }

    fn render_response(&self, _ctx: &SampleContext<'_>) -> Result<ResponseExample, RenderError> {
        unreachable!()
    }
}

#[test]
fn generate_orders_json() {
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(ORDERS_JSON).expect("should generate");

    assert_eq!(docs.title, "Orders API");
    assert_eq!(docs.version, "2.1.0");
    assert!(docs.has_auth);
    assert!(docs.validation.valid);

    let ids: Vec<_> = docs.endpoints.iter().map(|e| e.ids.operation_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "get--orders",
            "post--orders",
            "get--orders--id-",
            "patch--orders--id-",
            "get--health"
        ]
    );

    let tags: Vec<_> = docs.nav.groups.iter().map(|g| g.tag.as_str()).collect();
    assert_eq!(tags, vec!["Orders", "General"]);
    assert_eq!(docs.nav.groups[0].entries.len(), 4);
    assert_eq!(docs.nav.groups[1].entries[0].label, "/health");

    assert_eq!(docs.section_ids().len(), 4 + 5);
    assert_eq!(docs.resolve_fragment("#post--orders"), Some("post--orders"));
    assert_eq!(docs.resolve_fragment("#nowhere"), None);
}

#[test]
fn body_schema_is_expanded_depth_first() {
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(ORDERS_JSON).unwrap();
    let body = docs
        .endpoint("post--orders")
        .and_then(|e| e.request_body.as_ref())
        .expect("post has a body");

    let rows: Vec<_> = body
        .properties
        .iter()
        .map(|r| (r.name.as_str(), r.level))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("customer", 1),
            ("email", 2),
            ("address", 2),
            ("city", 3),
            ("zip", 3),
            ("items", 1),
            ("sku", 2),
            ("quantity", 2),
            ("notes", 1),
        ]
    );
    assert!(body.properties[0].required);
    assert!(body.properties[1].required);
    assert!(!body.properties[2].required);
    assert_eq!(
        body.properties[3].parent_group.as_deref(),
        Some("post--orders-customer-address-props-2")
    );
    assert_eq!(body.properties[5].array_note.as_deref(), Some("Array of object"));
    assert_eq!(
        body.properties[6].parent_group.as_deref(),
        Some("post--orders-items-items-1")
    );
}

#[test]
fn code_panels_follow_operations() {
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(ORDERS_JSON).unwrap();

    let post = docs.code_panel("post--orders").unwrap();
    assert_eq!(post.ids.code_request_id, "post--orders-request");
    assert_eq!(post.samples.curl, "POST https://orders.example.test/v2/orders body=true");

    let get = docs.code_panel("get--orders--id-").unwrap();
    assert_eq!(get.samples.node, "GET https://orders.example.test/v2/orders/{id} body=false");
}

#[test]
fn services_list_annotates_option_enums() {
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(ORDERS_JSON).unwrap();
    let patch = docs
        .services
        .iter()
        .find(|s| s.method == HttpMethod::Patch)
        .unwrap();
    assert_eq!(patch.display_path, "/orders/{id} (option: configurable)");
    assert_eq!(docs.services.last().unwrap().target_id, "get--health");
}

#[test]
fn yaml_and_json_agree() {
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(ORDERS_YAML).unwrap();
    assert_eq!(docs.title, "Orders API");
    assert_eq!(docs.version, "2.1.0");
    assert!(!docs.has_auth);
    assert_eq!(docs.endpoints.len(), 3);

    let body = docs.endpoint("post--orders").unwrap().request_body.as_ref().unwrap();
    assert!(body.required);
    assert_eq!(body.properties.len(), 3);
}

#[test]
fn missing_paths_yields_only_intro() {
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(r#"{"info": {"title": "Empty"}}"#).unwrap();

    assert!(docs.endpoints.is_empty());
    assert!(docs.nav.groups.is_empty());
    assert_eq!(
        docs.section_ids(),
        vec!["introduction", "authentication", "base-url", "status-codes"]
    );
    assert!(!docs.validation.valid);
    assert!(
        docs.validation
            .warnings
            .iter()
            .any(|w| w == "Missing or empty paths section")
    );

    let IntroBody::BaseUrl { url } = &docs.intro_sections[2].body else {
        panic!("base-url section should carry the url");
    };
    assert_eq!(url, "https://api.example.com");
}

#[test]
fn parse_error_keeps_nothing() {
    let mut generator = Generator::new(EchoRenderer);
    let err = generator.generate("{ not json").unwrap_err();
    assert!(matches!(err, GenerateError::Parse(_)));
    assert!(generator.documentation().is_none());
    assert!(generator.document().is_none());
}

#[test]
fn failed_pass_keeps_previous_output() {
    let config = DocConfig {
        schema: SchemaOptions { max_depth: 2 },
        ..DocConfig::default()
    };
    let mut generator = Generator::with_config(EchoRenderer, config);
    generator
        .generate(r#"{"info": {"title": "First"}, "paths": {"/ping": {"get": {}}}}"#)
        .unwrap();

    let err = generator.generate(ORDERS_JSON).unwrap_err();
    match err {
        GenerateError::Schema {
            operation,
            source: SchemaError::TooDeep { path, max_depth },
        } => {
            assert_eq!(operation, "post--orders");
            assert_eq!(path, "customer.address");
            assert_eq!(max_depth, 2);
        }
        other => panic!("expected schema error, got {other:?}"),
    }

    let kept = generator.documentation().unwrap();
    assert_eq!(kept.title, "First");
    assert_eq!(kept.endpoints.len(), 1);
    assert!(generator.export().unwrap().unwrap().contains("/ping"));
}

#[test]
fn render_failure_aborts_pass() {
    let mut generator = Generator::new(FailingRenderer);
    let err = generator.generate(ORDERS_JSON).unwrap_err();
    assert!(matches!(err, GenerateError::Render { ref operation, .. } if operation == "get--orders"));
    assert!(generator.documentation().is_none());
}

#[test]
fn add_operation_regenerates() {
    let mut generator = Generator::new(EchoRenderer);
    generator.generate(ORDERS_JSON).unwrap();

    let docs = generator
        .add_operation(
            "/orders/{id}",
            "DELETE",
            serde_json::json!({ "summary": "Delete order", "tags": ["Orders"] }),
        )
        .unwrap();
    assert!(docs.endpoint("delete--orders--id-").is_some());
    assert_eq!(docs.nav.groups[0].entries.len(), 5);

    let docs = generator
        .add_operation("/users", "get", serde_json::json!({ "tags": ["Users"] }))
        .unwrap();
    assert_eq!(docs.nav.groups.last().unwrap().tag, "Users");
}

#[test]
fn add_operation_requires_document_and_method() {
    let mut generator = Generator::new(EchoRenderer);
    assert!(matches!(
        generator.add_operation("/x", "get", serde_json::json!({})),
        Err(GenerateError::NoDocument)
    ));

    generator.generate(ORDERS_JSON).unwrap();
    assert!(matches!(
        generator.add_operation("/x", "fetch", serde_json::json!({})),
        Err(GenerateError::InvalidMethod(m)) if m == "fetch"
    ));
}

#[test]
fn export_round_trips() {
    let mut generator = Generator::new(EchoRenderer);
    generator.generate(ORDERS_JSON).unwrap();
    let exported = generator.export().unwrap().unwrap();

    let original: serde_json::Value = serde_json::from_str(ORDERS_JSON).unwrap();
    let reparsed = parse::load(Source::from(exported.as_str())).unwrap();
    assert_eq!(reparsed.raw, original);

    let keys: Vec<_> = reparsed.raw["paths"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["/orders", "/orders/{id}", "/health"]);
}

#[test]
fn regenerate_without_document_fails() {
    let mut generator = Generator::new(EchoRenderer);
    assert!(matches!(generator.regenerate(), Err(GenerateError::NoDocument)));
    assert!(generator.export().unwrap().is_none());
}

#[test]
fn yaml_numeric_version_is_text() {
    let yaml = "info:\n  title: Orders API\n  version: 1\npaths:\n  /a:\n    get:\n      summary: A\n";
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(yaml).expect("numeric version should generate");
    assert_eq!(docs.version, "1");
    assert_eq!(docs.nav.version, "1");
    assert_eq!(docs.endpoints[0].title, "A");
}

#[test]
fn yaml_tag_list_falls_back_to_general() {
    let yaml = "info:\n  title: Orders API\n  version: 1.0.0\npaths:\n  /orders:\n    get:\n      summary: List\n      tags:\n        - Orders\n";
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(yaml).expect("tag list should generate");
    let tags: Vec<_> = docs.nav.groups.iter().map(|g| g.tag.as_str()).collect();
    assert_eq!(tags, vec!["General"]);
    assert_eq!(docs.endpoints[0].ids.operation_id, "get--orders");
}

#[test]
fn yaml_server_list_uses_default_url() {
    let yaml = "info:\n  title: Orders API\n  version: 1.0.0\nservers:\n  - url: https://x.test\npaths:\n  /health:\n    get:\n      summary: Health\n";
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator.generate(yaml).expect("server list should generate");
    assert_eq!(docs.declared_server_url, None);
    assert_eq!(docs.server_url, "https://api.example.com");
    assert_eq!(
        docs.code_panels[0].samples.curl,
        "GET https://api.example.com/health body=false"
    );
}

#[test]
fn loosely_typed_json_still_generates() {
    let json = serde_json::json!({
        "info": { "title": "T", "version": 2 },
        "paths": {
            "/items/{id}": {
                "put": {
                    "summary": 7,
                    "parameters": [
                        { "name": "payload", "in": "body" },
                        { "name": "id", "in": "path", "required": true }
                    ],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "name": { "type": "string", "required": true }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    });
    let mut generator = Generator::new(EchoRenderer);
    let docs = generator
        .generate(Source::Structured(json))
        .expect("loose document should generate");

    assert_eq!(docs.version, "2");
    let put = &docs.endpoints[0];
    assert_eq!(put.title, "7");
    let params: Vec<_> = put.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, vec!["id"]);
    let body = put.request_body.as_ref().unwrap();
    assert_eq!(body.properties.len(), 1);
}
