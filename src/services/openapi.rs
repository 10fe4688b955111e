//! # OpenAPI 문서 생성
//!
//! REST 엔드포인트 5개를 설명하는 OpenAPI 3.0 문서를 `serde_json::json!`으로 만듭니다.
//! `/openapi.json`이 이 문서를, `/docs`가 이 문서를 읽는 Swagger UI 페이지(`swagger.html`)를 제공합니다.

use serde_json::{json, Value};
use tera::{Context, Tera};

/// OpenAPI 3.0 문서 전체를 JSON 값으로 만듭니다.
pub fn document(app_title: &str) -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    });
    let question_ref = json!({ "$ref": "#/components/schemas/Question" });
    let payload_body = json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/QuestionPayload" }
            }
        }
    });
    let not_found = json!({
        "description": "No question with this id",
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": app_title,
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "List all questions",
                    "operationId": "list_questions",
                    "responses": {
                        "200": {
                            "description": "Every stored question",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": question_ref }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a question",
                    "operationId": "create_question",
                    "requestBody": payload_body,
                    "responses": {
                        "200": {
                            "description": "The created question with its assigned id",
                            "content": { "application/json": { "schema": question_ref } }
                        }
                    }
                }
            },
            "/ques/{id}": {
                "get": {
                    "summary": "Get one question",
                    "operationId": "get_question",
                    "parameters": [id_param],
                    "responses": {
                        "200": {
                            "description": "The question",
                            "content": { "application/json": { "schema": question_ref } }
                        },
                        "404": not_found
                    }
                },
                "put": {
                    "summary": "Replace a question's title, text and answers",
                    "operationId": "update_question",
                    "parameters": [id_param],
                    "requestBody": payload_body,
                    "responses": {
                        "200": {
                            "description": "The updated question",
                            "content": { "application/json": { "schema": question_ref } }
                        },
                        "404": not_found
                    }
                },
                "delete": {
                    "summary": "Delete a question",
                    "operationId": "delete_question",
                    "parameters": [id_param],
                    "responses": {
                        "200": {
                            "description": "Deletion acknowledgement",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/DeleteResponse" }
                                }
                            }
                        },
                        "404": not_found
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Question": {
                    "type": "object",
                    "required": ["id", "title", "question", "answers"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "title": { "type": "string" },
                        "question": { "type": "string" },
                        "answers": { "type": "array", "items": { "type": "string" } }
                    }
                },
                "QuestionPayload": {
                    "type": "object",
                    "required": ["title", "question"],
                    "properties": {
                        "title": { "type": "string" },
                        "question": { "type": "string" },
                        "answers": {
                            "type": "array",
                            "items": { "type": "string" },
                            "default": []
                        }
                    }
                },
                "DeleteResponse": {
                    "type": "object",
                    "required": ["msg"],
                    "properties": {
                        "msg": { "type": "string", "example": "delete successfully" }
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "error": {
                            "type": "object",
                            "properties": {
                                "code": { "type": "string", "example": "not_found" },
                                "message": { "type": "string", "example": "not found" }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// `/openapi.json`을 불러오는 Swagger UI 페이지 (정적 자원은 CDN에서 로드)
pub fn swagger_ui_html(tera: &Tera, app_title: &str) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("app_title", app_title);
    tera.render("swagger.html", &context)
}
