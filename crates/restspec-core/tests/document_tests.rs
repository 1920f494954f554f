use restspec_core::config::{NamingStrategy, RestspecConfig};
use restspec_core::route::{RouteBuilder, RouteSource, WebService, registry};
use restspec_core::swagger::{self, HttpMethod};
use restspec_core::transform::{SwaggerConfig, build_swagger};
use serde_json::json;

const PETSTORE: &str = include_str!("fixtures/petstore-routes.yaml");

fn petstore() -> swagger::Swagger {
    let services = registry::from_yaml(PETSTORE).unwrap();
    let sources: Vec<&dyn RouteSource> = services.iter().map(|s| s as &dyn RouteSource).collect();
    build_swagger(&RestspecConfig::default().swagger_config(), &sources)
}

#[test]
fn petstore_paths() {
    let sw = petstore();
    let keys: Vec<&str> = sw.paths.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["/pets", "/pets/{petId}", "/store/inventory"]);

    let pets = &sw.paths["/pets"];
    assert!(pets.get.is_some() && pets.post.is_some());

    let by_id = &sw.paths["/pets/{petId}"];
    let methods: Vec<HttpMethod> = by_id.operations().map(|(m, _)| m).collect();
    assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Delete]);

    // TRACE has no slot; the path still exists through its GET.
    let inventory = &sw.paths["/store/inventory"];
    assert_eq!(inventory.operations().count(), 1);
    let get = inventory.get.as_ref().unwrap();
    assert_eq!(get.parameters[0].name, "X-Store");
}

#[test]
fn petstore_json_shape() {
    let value = serde_json::to_value(petstore()).unwrap();

    assert_eq!(value["swagger"], "2.0");
    assert_eq!(value["info"], json!({ "title": "API", "version": "1.0.0" }));

    let list = &value["paths"]["/pets"]["get"];
    assert_eq!(list["operationId"], "listPets");
    assert_eq!(list["summary"], "List pets");
    assert_eq!(list["tags"], json!(["pets"]));
    assert_eq!(
        list["parameters"][1],
        json!({
            "name": "limit",
            "in": "query",
            "required": false,
            "type": "integer",
            "format": "int32",
            "default": 20
        })
    );
    assert_eq!(
        list["responses"]["default"],
        json!({ "description": "the pets", "schema": { "$ref": "#/definitions/models.Pet" } })
    );
    assert_eq!(list["responses"]["200"], list["responses"]["default"]);

    let create = &value["paths"]["/pets"]["post"];
    assert_eq!(
        create["parameters"][0],
        json!({
            "name": "body",
            "required": false,
            "schema": { "$ref": "#/definitions/models.NewPet" }
        })
    );
    assert!(create["responses"].get("default").is_none());
    assert_eq!(create["responses"]["400"], json!({ "description": "invalid pet" }));

    let delete = &value["paths"]["/pets/{petId}"]["delete"];
    assert!(delete.get("tags").is_none());
}

#[test]
fn services_merge_per_method() {
    let a = WebService::new()
        .path("/shared")
        .route(RouteBuilder::get("").operation("getFromA"))
        .route(RouteBuilder::put("").operation("putFromA"));
    let b = WebService::new()
        .path("/shared/")
        .route(RouteBuilder::post("").operation("postFromB"))
        .route(RouteBuilder::put("").operation("putFromB"));

    let sw = build_swagger(&SwaggerConfig::default(), &[&a, &b]);
    assert_eq!(sw.paths.len(), 1);
    let item = &sw.paths["/shared"];
    let id = |m: HttpMethod| item.operation(m).unwrap().operation_id.clone().unwrap();
    assert_eq!(id(HttpMethod::Get), "getFromA");
    assert_eq!(id(HttpMethod::Post), "postFromB");
    assert_eq!(id(HttpMethod::Put), "putFromB");
}

#[test]
fn route_based_naming_from_config() {
    let mut config = RestspecConfig::default();
    config.naming.strategy = NamingStrategy::UseRouteBased;
    config
        .naming
        .aliases
        .insert("listPets".to_string(), "allPets".to_string());

    let services = registry::from_yaml(PETSTORE).unwrap();
    let sources: Vec<&dyn RouteSource> = services.iter().map(|s| s as &dyn RouteSource).collect();
    let sw = build_swagger(&config.swagger_config(), &sources);

    let id = |path: &str, m: HttpMethod| {
        sw.paths[path]
            .operation(m)
            .and_then(|op| op.operation_id.clone())
            .unwrap()
    };
    assert_eq!(id("/pets", HttpMethod::Get), "allPets");
    assert_eq!(id("/pets", HttpMethod::Post), "createPets");
    assert_eq!(id("/pets/{petId}", HttpMethod::Get), "getPet");
    assert_eq!(id("/store/inventory", HttpMethod::Get), "listStoreInventory");
}

#[test]
fn yaml_roundtrip_keeps_paths() {
    let sw = petstore();
    let yaml = swagger::to_yaml(&sw).unwrap();
    let back: swagger::Swagger = serde_yaml_ng::from_str(&yaml).unwrap();
    assert_eq!(back, sw);

    let json = swagger::to_json(&sw).unwrap();
    assert!(json.contains("\"/pets/{petId}\""));
}
