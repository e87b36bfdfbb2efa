// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Procedure interface over JSON arguments.
//!
//! `algo.rwh(edges, weighted, alpha, decay, precision, maxRounds, verbose,
//! checkParams)` takes the link list as a JSON array of `[source, target]`
//! or `[source, target, weight]` arrays, positional like a stored-procedure
//! call. Everything after `edges` is optional.

use crate::algo::algorithms::RwhResult;
use rwh_common::{Edge, NodeId, Result, RwhConfig, RwhError};
use serde_json::{Value, json};

/// Procedure signature for documentation and validation.
#[derive(Debug, Clone)]
pub struct ProcedureSignature {
    /// Required arguments: (name, type)
    pub args: Vec<(&'static str, ValueType)>,
    /// Optional arguments: (name, type, default)
    pub optional_args: Vec<(&'static str, ValueType, Value)>,
    /// Output columns: (name, type)
    pub yields: Vec<(&'static str, ValueType)>,
}

impl ProcedureSignature {
    /// Validate arguments against signature and fill defaults for optional args.
    pub fn validate_args(&self, mut args: Vec<Value>) -> Result<Vec<Value>> {
        let req_count = self.args.len();
        let total_count = req_count + self.optional_args.len();

        if args.len() < req_count {
            return Err(RwhError::invalid_argument(
                "args",
                None,
                format!(
                    "Too few arguments. Expected at least {}, got {}",
                    req_count,
                    args.len()
                ),
            ));
        }

        if args.len() > total_count {
            return Err(RwhError::invalid_argument(
                "args",
                None,
                format!(
                    "Too many arguments. Expected at most {}, got {}",
                    total_count,
                    args.len()
                ),
            ));
        }

        // Validate required args
        for (i, (name, ty)) in self.args.iter().enumerate() {
            if !ty.matches(&args[i]) {
                return Err(RwhError::invalid_argument(
                    *name,
                    None,
                    format!("Expected {:?}, got {}", ty, args[i]),
                ));
            }
        }

        // Validate provided optional args and fill defaults for missing ones
        for (i, (name, ty, default)) in self.optional_args.iter().enumerate() {
            let idx = req_count + i;

            if idx < args.len() {
                if !ty.matches(&args[idx]) {
                    return Err(RwhError::invalid_argument(
                        *name,
                        None,
                        format!("Expected {:?}, got {}", ty, args[idx]),
                    ));
                }
            } else {
                args.push(default.clone());
            }
        }

        Ok(args)
    }
}

/// Value types for procedure signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Float,
    Bool,
    List,
    Node,
}

impl ValueType {
    pub fn matches(&self, val: &Value) -> bool {
        match self {
            ValueType::Int => val.is_i64() || val.is_u64(),
            ValueType::Float => val.is_f64() || val.is_i64() || val.is_u64(),
            ValueType::Bool => val.is_boolean(),
            ValueType::List => val.is_array(),
            ValueType::Node => val.is_string() || val.is_i64(),
        }
    }
}

/// Result row from procedure execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Column values in order matching `yields`.
    pub values: Vec<Value>,
}

/// Parse the `edges` argument into typed edges.
///
/// Each element must be an array of exactly two (unweighted) or three
/// (weighted) items. Node identities are integers or strings; weights are
/// numbers. Errors carry the index of the offending edge.
pub fn parse_edges(edges: &Value, weighted: bool) -> Result<Vec<Edge>> {
    let items = edges.as_array().ok_or_else(|| {
        RwhError::invalid_argument("edges", None, format!("Expected List, got {}", edges))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_edge(i, item, weighted))
        .collect()
}

fn parse_edge(index: usize, item: &Value, weighted: bool) -> Result<Edge> {
    let invalid = |message: String| RwhError::invalid_argument("edges", Some(index), message);

    let parts = item
        .as_array()
        .ok_or_else(|| invalid(format!("expected an edge list, got {}", item)))?;
    let expected = if weighted { 3 } else { 2 };
    if parts.len() != expected {
        return Err(invalid(format!(
            "expected {} elements, got {}",
            expected,
            parts.len()
        )));
    }

    let source = parse_node(&parts[0]).ok_or_else(|| {
        invalid(format!(
            "source must be an integer or a string, got {}",
            parts[0]
        ))
    })?;
    let target = parse_node(&parts[1]).ok_or_else(|| {
        invalid(format!(
            "target must be an integer or a string, got {}",
            parts[1]
        ))
    })?;
    let weight = if weighted {
        let w = parts[2]
            .as_f64()
            .ok_or_else(|| invalid(format!("weight must be a number, got {}", parts[2])))?;
        Some(w)
    } else {
        None
    };

    Ok(Edge {
        source,
        target,
        weight,
    })
}

fn parse_node(value: &Value) -> Option<NodeId> {
    match value {
        Value::Number(n) => n.as_i64().map(NodeId::Int),
        Value::String(s) => Some(NodeId::Text(s.clone())),
        _ => None,
    }
}

/// `algo.rwh` procedure.
#[derive(Debug, Clone, Copy, Default)]
pub struct RwhProcedure;

impl RwhProcedure {
    pub const NAME: &'static str = "algo.rwh";

    pub fn name(&self) -> &str {
        Self::NAME
    }

    pub fn signature(&self) -> ProcedureSignature {
        let defaults = RwhConfig::default();
        ProcedureSignature {
            args: vec![("edges", ValueType::List)],
            optional_args: vec![
                ("weighted", ValueType::Bool, json!(defaults.weighted)),
                ("alpha", ValueType::Float, json!(defaults.alpha)),
                ("decay", ValueType::Float, json!(defaults.decay)),
                ("precision", ValueType::Float, json!(defaults.precision)),
                ("maxRounds", ValueType::Int, json!(defaults.max_rounds)),
                ("verbose", ValueType::Bool, json!(defaults.verbose)),
                ("checkParams", ValueType::Bool, json!(defaults.check_params)),
            ],
            yields: vec![("nodeId", ValueType::Node), ("density", ValueType::Float)],
        }
    }

    /// Convert validated optional arguments (everything after `edges`) to a config.
    fn to_config(args: &[Value]) -> Result<RwhConfig> {
        let float = |i: usize, name: &str| {
            args[i].as_f64().ok_or_else(|| {
                RwhError::invalid_argument(name, None, format!("Expected Float, got {}", args[i]))
            })
        };
        let max_rounds = args[4].as_u64().ok_or_else(|| {
            RwhError::invalid_argument(
                "maxRounds",
                None,
                format!("must be a nonnegative integer, got {}", args[4]),
            )
        })?;

        Ok(RwhConfig {
            weighted: args[0].as_bool().unwrap_or_default(),
            alpha: float(1, "alpha")?,
            decay: float(2, "decay")?,
            precision: float(3, "precision")?,
            max_rounds: max_rounds as usize,
            verbose: args[5].as_bool().unwrap_or_default(),
            check_params: args[6].as_bool().unwrap_or(true),
        })
    }

    /// Validate arguments and run the computation.
    pub fn call(&self, args: Vec<Value>) -> Result<RwhResult> {
        let args = self.signature().validate_args(args)?;
        let config = Self::to_config(&args[1..])?;
        let edges = parse_edges(&args[0], config.weighted)?;
        crate::algo::compute(&edges, &config)
    }

    /// Run and map the ranking to `(nodeId, density)` rows.
    pub fn execute(&self, args: Vec<Value>) -> Result<Vec<ResultRow>> {
        Ok(Self::map_result(self.call(args)?))
    }

    pub fn map_result(result: RwhResult) -> Vec<ResultRow> {
        result
            .ranking
            .into_iter()
            .map(|r| ResultRow {
                values: vec![json!(r.node), json!(r.density)],
            })
            .collect()
    }
}
