use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use geostay_lib::route::Route;
use serde_json::Value;
use thiserror::Error;

pub mod browser;
pub mod extract;
pub mod geojson_export;
pub mod json_path;
pub mod map_renderer;

use extract::ExtractOptions;
use map_renderer::RenderOptions;

pub const DEFAULT_OUTPUT: &str = "map.html";

#[derive(Debug, Error)]
pub enum GeostayError {
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid path segment '{0}'")]
    InvalidSegment(String),

    #[error("key '{key}' not found in {found}")]
    KeyNotFound { key: String, found: &'static str },

    #[error("'{key}' is {found}, not an array")]
    NotAnArray { key: String, found: &'static str },

    #[error("index {index} out of range for '{key}' (length {len})")]
    IndexOutOfRange { key: String, index: usize, len: usize },

    #[error("extracted object is not a list ({0})")]
    NotAList(&'static str),

    #[error("'{key}' is not a number ({value})")]
    NotNumeric { key: String, value: String },

    #[error("{axis} {value} is out of range")]
    OutOfRange { axis: &'static str, value: f64 },

    #[error("failed to extract coordinates for stay {index}")]
    StayExtraction {
        index: usize,
        #[source]
        source: Box<GeostayError>,
    },

    #[error("no valid coordinates provided")]
    EmptyCoordinates,
}

pub type GeostayResult<T> = Result<T, GeostayError>;

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Everything one invocation needs.
#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub array_path: String,
    pub output: PathBuf,
    pub geojson: Option<PathBuf>,
    pub extract: ExtractOptions,
    pub render: RenderOptions,
}

impl Job {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            array_path: String::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            geojson: None,
            extract: ExtractOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub stops: usize,
    pub segments: usize,
    pub total_km: f64,
    pub output: PathBuf,
}

pub fn load_json(path: &Path) -> GeostayResult<Value> {
    let file = File::open(path).map_err(|source| GeostayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

pub fn write_file(path: &Path, contents: &str) -> GeostayResult<()> {
    std::fs::write(path, contents).map_err(|source| GeostayError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, extract, compute and write. Opening the result is left to the caller.
pub fn run(job: &Job) -> anyhow::Result<Summary> {
    let data = load_json(&job.input).context("failed to load JSON")?;

    let records = json_path::resolve(&data, &job.array_path)
        .with_context(|| format!("invalid array path '{}'", job.array_path))?;

    let stays = extract::extract_stays(records, &job.extract)?;
    let route = Route::from_stays(&stays);
    tracing::info!(
        "Extracted {} stays, {} segments, {:.1} km in total",
        stays.len(),
        route.segments.len(),
        route.total_km
    );

    let html = map_renderer::render_html(&stays, &route, &job.render)?;
    write_file(&job.output, &html)?;
    tracing::debug!("Wrote {} bytes to {}", html.len(), job.output.display());

    if let Some(path) = &job.geojson {
        let geojson = geojson_export::route_to_geojson(&stays, &route);
        write_file(path, &geojson.to_string())?;
        tracing::info!("GeoJSON saved to {}", path.display());
    }

    Ok(Summary {
        stops: stays.len(),
        segments: route.segments.len(),
        total_km: route.total_km,
        output: job.output.clone(),
    })
}
