// WebAssembly bindings for the unit control
use crate::control::{UnitControl, ValueObserver};
use crate::input;
use crate::unit::Unit;
use wasm_bindgen::prelude::*;

// Forwards committed values to a JS callback as (value: number, unit: string)
struct JsObserver(js_sys::Function);

impl ValueObserver for JsObserver {
    fn on_value_change(&mut self, value: f64, unit: Unit) {
        let result = self.0.call2(
            &JsValue::NULL,
            &JsValue::from_f64(value),
            &JsValue::from_str(unit.name()),
        );
        if let Err(e) = result {
            log::warn!("onValueChange callback threw: {:?}", e);
        }
    }
}

fn parse_unit(label: &str) -> Result<Unit, JsValue> {
    label
        .parse::<Unit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct UnitControlWasm {
    control: UnitControl,
}

#[wasm_bindgen]
impl UnitControlWasm {
    /// Create a control; defaults to value "0" in percent
    #[wasm_bindgen(constructor)]
    pub fn new(
        default_value: Option<String>,
        default_unit: Option<String>,
    ) -> Result<UnitControlWasm, JsValue> {
        let unit = match default_unit {
            Some(label) => parse_unit(&label)?,
            None => Unit::default(),
        };
        let value = default_value.unwrap_or_else(|| "0".to_string());

        Ok(Self {
            control: UnitControl::new(&value, unit),
        })
    }

    /// Register the onValueChange callback
    #[wasm_bindgen]
    pub fn set_observer(&mut self, callback: js_sys::Function) {
        self.control.set_observer(JsObserver(callback));
    }

    #[wasm_bindgen]
    pub fn edit(&mut self, text: &str) {
        self.control.edit(text);
    }

    /// Input lost focus
    #[wasm_bindgen]
    pub fn commit(&mut self) {
        self.control.commit_edit();
    }

    #[wasm_bindgen]
    pub fn increment(&mut self) {
        self.control.increment();
    }

    #[wasm_bindgen]
    pub fn decrement(&mut self) {
        self.control.decrement();
    }

    #[wasm_bindgen]
    pub fn switch_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = parse_unit(unit)?;
        self.control.switch_unit(unit);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn sync_external_value(&mut self, value: &str) -> bool {
        self.control.sync_external_value(value)
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.control.display_text().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn unit(&self) -> String {
        self.control.unit().name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn increment_disabled(&self) -> bool {
        self.control.is_increment_disabled()
    }

    #[wasm_bindgen(getter)]
    pub fn decrement_disabled(&self) -> bool {
        self.control.is_decrement_disabled()
    }

    /// Full read model as a JSON string
    #[wasm_bindgen]
    pub fn view_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.control.view())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize view: {}", e)))
    }

    /// Toggle options as a JSON array of {value, label}
    #[wasm_bindgen]
    pub fn unit_options() -> Result<String, JsValue> {
        let options: Vec<_> = Unit::ALL
            .iter()
            .map(|unit| serde_json::json!({ "value": unit.name(), "label": unit.label() }))
            .collect();
        serde_json::to_string(&options)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }
}

/// Stand-alone text repair, for inputs that do not need a full control
#[wasm_bindgen]
pub fn sanitize(raw: &str, last_valid: &str) -> String {
    input::sanitize(raw, last_valid)
}

#[wasm_bindgen]
pub fn clamp(numeric: &str, unit: &str, last_valid: &str) -> Result<String, JsValue> {
    Ok(input::clamp(numeric, parse_unit(unit)?, last_valid))
}
