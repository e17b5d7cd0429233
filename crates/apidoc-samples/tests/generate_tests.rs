use apidoc_core::Generator;
use apidoc_core::SampleLanguage;
use apidoc_samples::TemplateSampleRenderer;

const ORDERS: &str = include_str!("../../apidoc-core/tests/fixtures/orders.json");
const ORDERS_YAML: &str = include_str!("../../apidoc-core/tests/fixtures/orders.yaml");

fn generator() -> Generator<TemplateSampleRenderer> {
    Generator::new(TemplateSampleRenderer::new().expect("templates should load"))
}

#[test]
fn orders_code_panels() {
    let mut generator = generator();
    let docs = generator.generate(ORDERS).unwrap();
    assert_eq!(docs.code_panels.len(), 5);

    let create = docs.code_panel("post--orders").unwrap();
    insta::assert_snapshot!(create.samples.curl, @r#"
curl -X POST "https://orders.example.test/v2/orders"
  -H "Authorization: Bearer {access_token}"
  -H "Content-Type: application/json"
  -d @/request.json
"#);
    assert_eq!(create.response.status_line, "HTTP/1.1 200 OK");
    assert!(create.response.body.contains("\"date_time\": \"2024-01-01T00:00:00.000Z\""));

    let fetch = docs.code_panel("get--orders--id-").unwrap();
    for (lang, text) in fetch.samples.iter() {
        assert!(
            text.contains("https://orders.example.test/v2/orders/{id}"),
            "{lang:?} sample lacks the url"
        );
        assert!(!text.contains("datos"));
    }
    assert_eq!(fetch.tabs[0].key, SampleLanguage::Curl.key());
}

#[test]
fn default_server_url_without_servers() {
    let mut generator = generator();
    let docs = generator.generate(ORDERS_YAML).unwrap();
    let health = docs.code_panel("get--health").unwrap();
    assert_eq!(
        health.samples.curl,
        "curl -X GET \"https://api.example.com/health\"\n  -H \"Content-Type: application/json\""
    );
}

#[test]
fn documentation_serializes() {
    let mut generator = generator();
    let docs = generator.generate(ORDERS).unwrap().clone();
    let yaml = serde_yaml_ng::to_string(&docs.nav).unwrap();
    assert!(yaml.starts_with("title: Orders API\n"));
    assert!(yaml.contains("target_id: patch--orders--id-"));

    let json = serde_json::to_value(&docs).unwrap();
    assert_eq!(json["code_panels"][1]["method"], "post");
    assert_eq!(json["endpoints"][0]["parameters"][0]["type"], "string");
}

#[test]
fn custom_timestamp() {
    let renderer = TemplateSampleRenderer::new()
        .unwrap()
        .with_timestamp("2030-05-06T07:08:09.000Z");
    let mut generator = Generator::new(renderer);
    let docs = generator.generate(ORDERS).unwrap();
    assert!(docs.code_panels[0].response.body.contains("2030-05-06T07:08:09.000Z"));
}
