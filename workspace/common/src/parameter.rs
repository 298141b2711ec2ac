//! Bounded numeric parameters and the slider/text/label synchronizer.
//!
//! A parameter keeps exactly one `f64`. The slider position, the text field
//! content and the display label are all rendered from it, so an edit through
//! any of the three controls is visible in the other two after the next render.

use tracing::trace;

/// Identifier of a bounded form parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterId {
    Rainfall,
    Temperature,
    Humidity,
    Pesticide,
}

impl ParameterId {
    pub const ALL: [ParameterId; 4] = [
        ParameterId::Rainfall,
        ParameterId::Temperature,
        ParameterId::Humidity,
        ParameterId::Pesticide,
    ];

    /// Field name used in request bodies and form control names.
    pub fn key(&self) -> &'static str {
        match self {
            ParameterId::Rainfall => "rainfall",
            ParameterId::Temperature => "temperature",
            ParameterId::Humidity => "humidity",
            ParameterId::Pesticide => "pesticide",
        }
    }

    pub fn spec(&self) -> ParameterSpec {
        match self {
            ParameterId::Rainfall => ParameterSpec {
                id: *self,
                label: "Rainfall",
                unit: "mm",
                min: 0.0,
                max: 200.0,
                step: 0.1,
                default: 50.0,
            },
            ParameterId::Temperature => ParameterSpec {
                id: *self,
                label: "Temperature",
                unit: "°C",
                min: 10.0,
                max: 45.0,
                step: 0.1,
                default: 25.0,
            },
            ParameterId::Humidity => ParameterSpec {
                id: *self,
                label: "Humidity",
                unit: "%",
                min: 0.0,
                max: 100.0,
                step: 0.1,
                default: 60.0,
            },
            ParameterId::Pesticide => ParameterSpec {
                id: *self,
                label: "Pesticide Used",
                unit: "litres/ha",
                min: 0.0,
                max: 10.0,
                step: 0.01,
                default: 3.0,
            },
        }
    }
}

/// Declared range, granularity and default of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub id: ParameterId,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParameterSpec {
    /// Two decimals for fractional steps, none for integral ones.
    pub fn decimals(&self) -> usize {
        if self.step.fract() != 0.0 { 2 } else { 0 }
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }

    /// Rounds to the nearest multiple of `step` counted from zero.
    pub fn snap(&self, value: f64) -> f64 {
        let snapped = (value / self.step).round() * self.step;
        // strip binary noise such as 52.300000000000004
        let snapped = (snapped * 1e9).round() / 1e9;
        snapped.clamp(self.min, self.max)
    }

    /// Interprets free text typed into the numeric field.
    ///
    /// Unparseable, non-finite or too small input becomes `min`, too large
    /// input becomes `max`, anything else is snapped to the step grid.
    pub fn sanitize(&self, raw: &str) -> f64 {
        let parsed = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        let value = match parsed {
            Some(v) if v >= self.min && v <= self.max => self.snap(v),
            Some(v) if v > self.max => self.max,
            _ => self.min,
        };
        trace!(parameter = self.id.key(), raw, value, "sanitized text input");
        value
    }

    pub fn is_on_grid(&self, value: f64) -> bool {
        let steps = value / self.step;
        (steps - steps.round()).abs() < 1e-6
    }
}

/// One parameter together with its current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedParameter {
    spec: ParameterSpec,
    value: f64,
}

impl BoundedParameter {
    pub fn new(spec: ParameterSpec) -> Self {
        Self {
            spec,
            value: spec.default,
        }
    }

    pub fn spec(&self) -> &ParameterSpec {
        &self.spec
    }

    pub fn id(&self) -> ParameterId {
        self.spec.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The range input moved. Unparseable input leaves the value alone.
    pub fn on_slider_input(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<f64>() {
            if value.is_finite() {
                self.value = self.spec.snap(value);
            }
        }
    }

    /// The numeric text field was edited.
    pub fn on_text_input(&mut self, raw: &str) {
        self.value = self.spec.sanitize(raw);
    }

    /// Sets all three views to `value` without clamping.
    pub fn reset_to(&mut self, value: f64) {
        self.value = value;
    }

    pub fn reset(&mut self) {
        self.reset_to(self.spec.default);
    }

    pub fn slider_value(&self) -> String {
        self.spec.format(self.value)
    }

    pub fn text_value(&self) -> String {
        self.spec.format(self.value)
    }

    pub fn label(&self) -> String {
        self.spec.format(self.value)
    }
}

/// The four synchronized parameters of one form.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    parameters: Vec<BoundedParameter>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSet {
    pub fn new() -> Self {
        Self {
            parameters: ParameterId::ALL
                .iter()
                .map(|id| BoundedParameter::new(id.spec()))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundedParameter> {
        self.parameters.iter()
    }

    pub fn get(&self, id: ParameterId) -> &BoundedParameter {
        // every id is inserted by `new`
        &self.parameters[Self::index(id)]
    }

    pub fn value(&self, id: ParameterId) -> f64 {
        self.get(id).value()
    }

    pub fn slider_input(&mut self, id: ParameterId, raw: &str) {
        self.parameters[Self::index(id)].on_slider_input(raw);
    }

    pub fn text_input(&mut self, id: ParameterId, raw: &str) {
        self.parameters[Self::index(id)].on_text_input(raw);
    }

    pub fn reset_all(&mut self) {
        for parameter in &mut self.parameters {
            parameter.reset();
        }
    }

    fn index(id: ParameterId) -> usize {
        match id {
            ParameterId::Rainfall => 0,
            ParameterId::Temperature => 1,
            ParameterId::Humidity => 2,
            ParameterId::Pesticide => 3,
        }
    }
}
