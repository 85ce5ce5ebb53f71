//! Self-describing API: the OpenAPI document, an HTML viewer for it, and a tiny
//! manual test page.

use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};
use std::sync::OnceLock;

pub const API_TITLE: &str = "User Management API";
pub const API_VERSION: &str = "1.0.0";

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "User ID",
        "schema": { "type": "integer" }
    })
}

fn user_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/User" }
            }
        }
    })
}

fn user_input_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/UserInput" }
            }
        }
    })
}

fn string_property(description: &str, format: Option<&str>, example: &str) -> Value {
    let mut property = json!({
        "type": "string",
        "description": description,
        "example": example
    });
    if let Some(format) = format {
        property["format"] = json!(format);
    }
    property
}

/// The OpenAPI 3.0 description of every `/users` route.
pub fn openapi() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": "A simple API for managing users"
        },
        "servers": [
            { "url": "/", "description": "This server" }
        ],
        "paths": {
            "/users": {
                "get": {
                    "summary": "Get all users",
                    "description": "Retrieve a list of all users",
                    "responses": {
                        "200": {
                            "description": "List of users",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/User" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a new user",
                    "description": "Add a new user to the system",
                    "requestBody": user_input_body(),
                    "responses": {
                        "201": user_response("User created successfully"),
                        "400": { "description": "Invalid input" }
                    }
                }
            },
            "/users/{id}": {
                "get": {
                    "summary": "Get user by ID",
                    "description": "Retrieve a specific user by their ID",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": user_response("User found"),
                        "404": { "description": "User not found" }
                    }
                },
                "put": {
                    "summary": "Update user",
                    "description": "Update an existing user; omitted fields are left unchanged",
                    "parameters": [id_parameter()],
                    "requestBody": user_input_body(),
                    "responses": {
                        "200": user_response("User updated successfully"),
                        "400": { "description": "Invalid input" },
                        "404": { "description": "User not found" }
                    }
                },
                "delete": {
                    "summary": "Delete user",
                    "description": "Remove a user from the system",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": { "description": "User deleted successfully" },
                        "404": { "description": "User not found" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "User": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "integer",
                            "description": "User ID",
                            "example": 1
                        },
                        "name": string_property("User name", None, "John Doe"),
                        "email": string_property("User email address", Some("email"), "john.doe@example.com")
                    },
                    "required": ["id", "name", "email"]
                },
                "UserInput": {
                    "type": "object",
                    "properties": {
                        "name": string_property("User name", None, "John Doe"),
                        "email": string_property("User email address", Some("email"), "john.doe@example.com")
                    },
                    "required": ["name", "email"]
                }
            }
        }
    })
}

const SWAGGER_UI_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>User Management API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        .swagger-ui .topbar { display: none; }
        body { margin: 0; padding: 20px; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        const apiSpec = __API_SPEC__;
        window.onload = function() {
            SwaggerUIBundle({
                spec: apiSpec,
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.presets.standalone],
                requestInterceptor: function(request) {
                    request.headers = request.headers || {};
                    if (request.method !== 'GET') {
                        request.headers['Content-Type'] = 'application/json';
                    }
                    request.headers['Accept'] = 'application/json';
                    return request;
                }
            });
        };
    </script>
</body>
</html>
"#;

const TEST_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>API Test</title></head>
<body>
    <h1>API Test Page</h1>
    <button id="testBtn" onclick="testAPI()">Test GET /users</button>
    <button id="simpleBtn" onclick="window.location.href='/users'">Direct Link Test</button>
    <div id="result">Click the button to test the API</div>
    <script>
        function testAPI() {
            const result = document.getElementById('result');
            result.innerHTML = 'Making request to /users...';
            const xhr = new XMLHttpRequest();
            xhr.open('GET', '/users', true);
            xhr.setRequestHeader('Accept', 'application/json');
            xhr.timeout = 10000;
            xhr.onload = function() {
                result.innerHTML = 'Got response: ' + xhr.status + ' ' + xhr.statusText
                    + '<br>Data:<br><pre>' + xhr.responseText + '</pre>';
            };
            xhr.onerror = function() { result.innerHTML = 'Network error occurred'; };
            xhr.ontimeout = function() { result.innerHTML = 'Request timed out after 10 seconds'; };
            xhr.send();
        }
    </script>
</body>
</html>
"#;

/// The viewer page with the OpenAPI document inlined, so it needs no second fetch.
pub fn swagger_ui_page() -> &'static str {
    static PAGE: OnceLock<String> = OnceLock::new();
    PAGE.get_or_init(|| SWAGGER_UI_TEMPLATE.replace("__API_SPEC__", &openapi().to_string()))
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(swagger_ui_page())
}

pub async fn swagger_json() -> Json<Value> {
    Json(openapi())
}

pub async fn test_page() -> Html<&'static str> {
    Html(TEST_PAGE)
}
