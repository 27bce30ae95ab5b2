//! A read-only HTTP view of an LX200 [`Store`], for inspecting simulator
//! state without a telescope-control client. Only serves snapshots; it
//! never accepts commands, so it shares a store with a running
//! `lx200-tcp-server` rather than replacing it.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use lx200_protocol::{Field, Store};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(about = "Serves a read-only JSON snapshot of an LX200 simulator store")]
struct Args {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[derive(Clone)]
struct AppState {
    store: Arc<Mutex<Store>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    let state = AppState {
        store: Arc::new(Mutex::new(Store::new())),
    };

    let app = Router::new()
        .route("/snapshot", get(snapshot))
        .route("/snapshot/*path", get(cell))
        .with_state(state);

    log::info!("LX200 store snapshot server");
    log::info!("serving on {addr}");
    axum::Server::bind(&addr.parse()?)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

async fn snapshot(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.lock().expect("store mutex poisoned");
    let cells: BTreeMap<&String, Value> = store
        .snapshot()
        .iter()
        .map(|(path, fields)| (path, fields_to_json(fields)))
        .collect();
    Json(serde_json::json!(cells))
}

async fn cell(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let store = state.store.lock().expect("store mutex poisoned");
    match store.get(&path) {
        Some(fields) => Ok(Json(fields_to_json(fields))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

fn fields_to_json(fields: &lx200_protocol::FieldMap) -> Value {
    let map: serde_json::Map<String, Value> = fields
        .iter()
        .map(|(key, value)| (key.clone(), field_to_json(value)))
        .collect();
    Value::Object(map)
}

fn field_to_json(field: &Field) -> Value {
    match field {
        Field::Int(v) => Value::from(*v),
        Field::Float(v) => Value::from(*v),
        Field::Str(v) => Value::from(v.clone()),
        Field::Bool(v) => Value::from(*v),
    }
}
