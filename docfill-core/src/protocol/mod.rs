use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::error::Error;
use crate::services::{generate, richtext};

mod command;
use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn context_from_payload(payload: &Value) -> Result<&Map<String, Value>, Error> {
    payload
        .get("context")
        .and_then(|v| v.as_object())
        .ok_or_else(|| Error::InvalidRequest("payload.context must be an object".to_string()))
}

fn generate_message(e: &Error) -> String {
    if e.is_client_error() {
        e.to_string()
    } else {
        format!("Error generating document: {e}")
    }
}

pub fn handle(input: &str, config: &Config) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "rejected request line");
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    tracing::info!(cmd = cmd_str, id = %id, "request");

    match Command::from(cmd_str) {
        Command::Health => ok(id, json!({ "ok": true })),

        Command::GenerateDocx => {
            let template_path = payload
                .get("template_path")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            if template_path.trim().is_empty() {
                return err(id, "payload.template_path is required");
            }

            let context = match context_from_payload(payload) {
                Ok(c) => c,
                Err(e) => return err(id, e.to_string()),
            };

            match generate::run(template_path, context, config) {
                Ok(doc) => ok(id, json!(doc)),
                Err(e) => {
                    if e.is_client_error() {
                        tracing::warn!(error = %e, "generate_docx rejected");
                    } else {
                        tracing::error!(error = %e, "generate_docx failed");
                    }
                    err(id, generate_message(&e))
                }
            }
        }

        Command::RewriteContext => {
            let context = match context_from_payload(payload) {
                Ok(c) => c,
                Err(e) => return err(id, e.to_string()),
            };
            ok(id, json!({ "context": richtext::rewrite(context) }))
        }

        Command::Unknown => err(id, "unknown command"),
    }
}
