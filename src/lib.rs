#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod geom;

use std::fmt;

use geom::{EdgeLengthEstimate, StripParams, SurfaceGrid};
use serde::Serialize;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    log::set_logger(&DEFAULT_LOGGER).expect("error initializing logger");
    log::set_max_level(LevelFilter::Debug);
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Suggested UI range for the radius control (not enforced by validation).
const RADIUS_CONTROL: (f64, f64, Option<f64>) = (1.0, 5.0, None);
/// Suggested UI range for the width control.
const WIDTH_CONTROL: (f64, f64, Option<f64>) = (0.1, 2.0, None);
/// Suggested UI range and step for the resolution control.
const RESOLUTION_CONTROL: (f64, f64, Option<f64>) = (20.0, 150.0, Some(5.0));

/// Control descriptor for UI generation, one per strip parameter.
#[derive(Debug, Serialize)]
struct ControlExport {
    id: &'static str,
    label: &'static str,
    min: f64,
    max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<f64>,
    value: f64,
}

#[derive(Debug, Serialize)]
struct BoundsExport {
    min: [f64; 3],
    max: [f64; 3],
}

/// Row-major n×n coordinate arrays for the rendering collaborator, plus
/// bounds for equal-aspect viewport framing.
#[derive(Debug, Serialize)]
struct GeometryExport {
    resolution: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    bounds: BoundsExport,
}

/// The two boundary rails as polylines, for edge rendering.
#[derive(Debug, Serialize)]
struct EdgesExport {
    lower: Vec<[f64; 3]>,
    upper: Vec<[f64; 3]>,
}

#[derive(Debug, Serialize)]
struct MetricsExport {
    surface_area: f64,
    edge_length: f64,
}

#[derive(Debug, Clone)]
struct Evaluation {
    grid: SurfaceGrid,
    surface_area: f64,
    edge: EdgeLengthEstimate,
}

/// Public entry point for consumers.
///
/// Holds the current parameter triple and the last computed grid/metrics.
/// All geometry math lives in [`geom`]; the engine only adds parameter
/// state, dirty tracking and JS-friendly exports.
#[wasm_bindgen]
pub struct Engine {
    initialized: bool,
    params: StripParams,
    last_result: Option<Evaluation>,
    result_dirty: bool,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            initialized: true,
            params: StripParams::default(),
            last_result: None,
            result_dirty: true,
        }
    }

    /// Whether the engine has completed its minimal initialization.
    #[wasm_bindgen]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Control descriptors for UI generation, reflecting current values.
    #[wasm_bindgen]
    pub fn get_controls(&self) -> Result<JsValue, JsValue> {
        let controls = [
            control("radius", "Radius", RADIUS_CONTROL, self.params.radius),
            control("width", "Width", WIDTH_CONTROL, self.params.width),
            control(
                "resolution",
                "Resolution",
                RESOLUTION_CONTROL,
                self.params.resolution as f64,
            ),
        ];

        serde_wasm_bindgen::to_value(&controls).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Replace the parameter triple.
    ///
    /// Validates before anything else; on error the previous parameters and
    /// the last computed result stay in place, so a consumer can keep
    /// showing the last valid render.
    #[wasm_bindgen]
    pub fn set_parameters(
        &mut self,
        radius: f64,
        width: f64,
        resolution: u32,
    ) -> Result<(), JsValue> {
        let params =
            StripParams::new(radius, width, resolution as usize).map_err(to_js_error)?;

        if params != self.params {
            self.params = params;
            self.result_dirty = true;
        }
        Ok(())
    }

    /// Recompute the grid and both scalar metrics if parameters changed.
    #[wasm_bindgen]
    pub fn evaluate(&mut self) {
        if !self.result_dirty && self.last_result.is_some() {
            return;
        }

        let grid = geom::sample_grid(&self.params);
        let surface_area = geom::estimate_surface_area(&self.params);
        let edge = geom::estimate_edge_length(&self.params);

        debug_log!(
            "evaluated strip R={} w={} n={}: area={surface_area:.4} edge={:.4}",
            self.params.radius,
            self.params.width,
            self.params.resolution,
            edge.total
        );

        self.last_result = Some(Evaluation {
            grid,
            surface_area,
            edge,
        });
        self.result_dirty = false;
    }

    /// Coordinate arrays of the last evaluation.
    #[wasm_bindgen]
    pub fn get_geometry(&self) -> Result<JsValue, JsValue> {
        let result = self.fresh_result()?;

        let (x, y, z) = result.grid.coordinate_arrays();
        let bounds = result.grid.bounds();
        let export = GeometryExport {
            resolution: result.grid.resolution(),
            x,
            y,
            z,
            bounds: BoundsExport {
                min: bounds.min.to_array(),
                max: bounds.max.to_array(),
            },
        };

        serde_wasm_bindgen::to_value(&export).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Boundary rail polylines of the last evaluation.
    #[wasm_bindgen]
    pub fn get_boundary_edges(&self) -> Result<JsValue, JsValue> {
        let result = self.fresh_result()?;
        let (lower, upper) = result.grid.boundary_rows();

        let export = EdgesExport {
            lower: lower.iter().map(|p| p.to_array()).collect(),
            upper: upper.iter().map(|p| p.to_array()).collect(),
        };

        serde_wasm_bindgen::to_value(&export).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Surface area and edge length of the last evaluation.
    #[wasm_bindgen]
    pub fn get_metrics(&self) -> Result<JsValue, JsValue> {
        let result = self.fresh_result()?;
        let export = MetricsExport {
            surface_area: result.surface_area,
            edge_length: result.edge.total,
        };

        serde_wasm_bindgen::to_value(&export).map_err(|err| JsError::new(&err.to_string()).into())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    fn fresh_result(&self) -> Result<&Evaluation, JsValue> {
        if self.result_dirty {
            return Err(js_error("parameters changed since the last evaluate()"));
        }
        self.last_result
            .as_ref()
            .ok_or_else(|| js_error("engine has not evaluated yet"))
    }

    /// Current parameter triple (native-side accessor).
    #[must_use]
    pub fn params(&self) -> StripParams {
        self.params
    }

    /// Metrics of the last evaluation, if fresh (native-side accessor).
    #[must_use]
    pub fn metrics(&self) -> Option<(f64, EdgeLengthEstimate)> {
        if self.result_dirty {
            return None;
        }
        self.last_result
            .as_ref()
            .map(|result| (result.surface_area, result.edge))
    }
}

fn control(
    id: &'static str,
    label: &'static str,
    range: (f64, f64, Option<f64>),
    value: f64,
) -> ControlExport {
    ControlExport {
        id,
        label,
        min: range.0,
        max: range.1,
        step: range.2,
        value,
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
