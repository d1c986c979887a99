use cypress_mock_common::{RUNS_POINTER, StructureError, TOTAL_COUNT_BASE};
use serde_json::Value;

/// The JSON template every response is cut from.
///
/// It is never mutated after load; [`BaseDocument::render`] works on a deep
/// copy.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseDocument {
    value: Value,
}

impl BaseDocument {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Length of `data.project.runs.nodes`, if the document has that array.
    pub fn node_count(&self) -> Option<usize> {
        self.value
            .pointer(RUNS_POINTER)
            .and_then(|runs| runs.get("nodes"))
            .and_then(Value::as_array)
            .map(Vec::len)
    }

    /// Builds the response for counter value `window`: a copy of the document
    /// whose node list keeps only its last `window` entries (all of them if
    /// the list is shorter) and whose `totalCount` is `5000 + window`.
    pub fn render(&self, window: u64) -> Result<Value, StructureError> {
        let mut response = self.value.clone();

        let runs = response
            .pointer_mut(RUNS_POINTER)
            .ok_or_else(|| StructureError::MissingPath(RUNS_POINTER.to_string()))?
            .as_object_mut()
            .ok_or_else(|| StructureError::NotAnObject(RUNS_POINTER.to_string()))?;

        let nodes_pointer = format!("{RUNS_POINTER}/nodes");
        let nodes = runs
            .get_mut("nodes")
            .ok_or_else(|| StructureError::MissingPath(nodes_pointer.clone()))?
            .as_array_mut()
            .ok_or(StructureError::NotAnArray(nodes_pointer))?;

        let keep = usize::try_from(window).map_or(nodes.len(), |w| w.min(nodes.len()));
        nodes.drain(..nodes.len() - keep);

        runs.insert(
            "totalCount".to_string(),
            Value::from(TOTAL_COUNT_BASE.saturating_add(window)),
        );

        Ok(response)
    }
}
