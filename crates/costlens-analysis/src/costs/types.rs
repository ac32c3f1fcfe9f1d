//! Cost entry types, in the shape hosts already exchange.

use serde::{Deserialize, Serialize};

use crate::scanner::types::MethodIdentity;

/// Source location of an analyzed method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

/// One cost facet (allocation or execution) of one method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostFacet {
    /// Cost polynomial as text, multiplication written as `*`.
    pub polynomial: String,
    /// Polynomial degree; `None` when the analyzer could not bound the cost.
    pub degree: Option<u32>,
    /// Asymptotic class label, e.g. `O(n)`.
    pub big_o: String,
}

impl CostFacet {
    pub fn is_constant(&self) -> bool {
        self.degree == Some(0)
    }
}

/// One step of an analyzer trace explaining a cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub level: u32,
    pub file: String,
    pub line: u32,
    pub description: String,
}

/// One analyzed method's cost for one analyzer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Stable across runs for the same source method.
    pub id: String,
    pub method_name: String,
    #[serde(rename = "parameterTypes", default)]
    pub parameter_types: Vec<String>,
    pub loc: SourceLocation,
    pub alloc_cost: CostFacet,
    pub exec_cost: CostFacet,
    /// Milliseconds since the Unix epoch, set when recorded into history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Change-cause expressions from the latest classification.
    #[serde(
        rename = "changeCauseMethods",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub change_cause_methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceStep>>,
}

impl CostEntry {
    pub fn identity(&self) -> MethodIdentity {
        MethodIdentity::new(self.method_name.clone(), self.parameter_types.iter().cloned())
    }

    /// `name(type1,type2)`, the key the classifier attributes causes under.
    pub fn identity_key(&self) -> String {
        self.identity().key()
    }

    /// Structural id used when the analyzer supplies none:
    /// `file:name(types)`.
    pub fn structural_id(file: &str, method_name: &str, parameter_types: &[String]) -> String {
        format!("{file}:{method_name}({})", parameter_types.join(","))
    }
}
