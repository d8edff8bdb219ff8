use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A remote compute instance. Only the identifier is rendered; any other
/// fields the backend sends are kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(rename = "InstanceId")]
    pub instance_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Instance {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            extra: Map::new(),
        }
    }

    /// Numeric interpretation of the identifier, if it is a finite number.
    pub fn numeric_id(&self) -> Option<f64> {
        crate::instances::operations::numeric_id(&self.instance_id)
    }
}

/// Instances ordered ascending by numeric identifier.
pub type InstanceList = Vec<Instance>;

/// `response` body of the instances endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstancesPayload {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub instances: Option<Vec<Instance>>,
}

/// A validated, sorted fetch result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceSnapshot {
    /// Count reported by the backend, shown in the count label.
    pub count: u64,
    pub instances: InstanceList,
}

impl InstanceSnapshot {
    pub fn count_label(&self) -> String {
        crate::instances::operations::count_label(self.count)
    }
}
