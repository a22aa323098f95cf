//! Effect parameter WASM bindings.
//!
//! Mirrors the editor controls: a blur slider, a rotation selector and a
//! filter selector.

use retouch_core::{EffectParameters, FilterKind, ParamsError, Rotation};
use wasm_bindgen::prelude::*;

/// Effect parameters wrapper for JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct JsEffectParameters {
    inner: EffectParameters,
}

#[wasm_bindgen]
impl JsEffectParameters {
    /// Create parameters with every effect disabled
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn blur_radius(&self) -> u8 {
        self.inner.blur_radius
    }

    /// Set the blur radius. Values above 10 are rejected when applied.
    #[wasm_bindgen(setter)]
    pub fn set_blur_radius(&mut self, value: u8) {
        self.inner.blur_radius = value;
    }

    /// Rotation selector position (0 = 0°, 1 = 90°, 2 = 180°, 3 = 270°)
    #[wasm_bindgen(getter)]
    pub fn rotation_index(&self) -> u8 {
        self.inner.rotation.index()
    }

    /// Select a rotation by selector position.
    pub fn set_rotation_index(&mut self, index: u8) -> Result<(), JsValue> {
        self.select_rotation(index)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Clockwise rotation in degrees
    #[wasm_bindgen(getter)]
    pub fn rotation_degrees(&self) -> u32 {
        self.inner.rotation.degrees()
    }

    /// Selected filter label ("None", "Grayscale", "Sepia", "Negative",
    /// "High Contrast")
    #[wasm_bindgen(getter)]
    pub fn filter(&self) -> String {
        self.inner.filter.name().to_string()
    }

    /// Select a filter by label.
    pub fn set_filter(&mut self, name: &str) -> Result<(), JsValue> {
        self.select_filter(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Check if every effect is disabled
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Serialize to a JS object for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a JS object
    pub fn from_json(value: JsValue) -> Result<JsEffectParameters, JsValue> {
        let inner: EffectParameters =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl JsEffectParameters {
    pub(crate) fn inner(&self) -> &EffectParameters {
        &self.inner
    }

    fn select_rotation(&mut self, index: u8) -> Result<(), ParamsError> {
        self.inner.rotation = Rotation::from_index(index)?;
        Ok(())
    }

    fn select_filter(&mut self, name: &str) -> Result<(), ParamsError> {
        self.inner.filter = name.parse::<FilterKind>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = JsEffectParameters::new();
        assert_eq!(params.blur_radius(), 0);
        assert_eq!(params.rotation_index(), 0);
        assert_eq!(params.filter(), "None");
        assert!(params.is_identity());
    }

    #[test]
    fn test_setters() {
        let mut params = JsEffectParameters::new();
        params.set_blur_radius(4);
        params.select_rotation(3).unwrap();
        params.select_filter("High Contrast").unwrap();

        assert_eq!(params.blur_radius(), 4);
        assert_eq!(params.rotation_index(), 3);
        assert_eq!(params.rotation_degrees(), 270);
        assert_eq!(params.filter(), "High Contrast");
        assert_eq!(
            params.inner(),
            &EffectParameters::new(4, Rotation::Deg270, FilterKind::HighContrast)
        );
    }

    #[test]
    fn test_invalid_selection_keeps_value() {
        let mut params = JsEffectParameters::new();
        params.select_filter("sepia").unwrap();

        assert_eq!(
            params.select_rotation(4),
            Err(ParamsError::InvalidRotationIndex(4))
        );
        assert!(params.select_filter("vintage").is_err());
        assert_eq!(params.rotation_index(), 0);
        assert_eq!(params.filter(), "Sepia");
    }
}
